//! # Tag Module
//!
//! Parser for the `sqeel` field annotation. An annotation is a comma
//! separated list of entries, each either a bare flag or a `key:value`
//! pair:
//!
//! ```text
//! type:VARCHAR(64),attrs:NOT NULL DEFAULT '',name:user_name,unique
//! ```
//!
//! Only the first `:` of an entry splits key from value, so values may
//! contain colons. Nothing is trimmed and keys are matched exact-case.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The annotation contained a key the parser does not know.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid sqeel tag key `{key}`")]
pub struct InvalidTagKey {
    pub key: String,
}

/// Parsed form of a single field annotation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagSpec {
    /// SQL type literal, passed through verbatim (e.g. "VARCHAR(64)").
    pub sql_type: String,
    /// Trailing column fragment (e.g. "NOT NULL DEFAULT 0").
    pub attrs: String,
    /// Explicit column name, empty when not given.
    pub name_override: String,
    pub is_primary: bool,
    pub is_unique: bool,
}

impl TagSpec {
    /// Parses an annotation string.
    ///
    /// The empty string yields [`TagSpec::default`]. Value keys given
    /// without a `:` are set to the empty string; flag keys ignore any
    /// value attached to them.
    pub fn parse(tag: &str) -> Result<Self, InvalidTagKey> {
        let mut spec = Self::default();
        if tag.is_empty() {
            return Ok(spec);
        }

        for entry in tag.split(',') {
            let (key, value) = match entry.split_once(':') {
                Some((key, value)) => (key, value),
                None => (entry, ""),
            };

            match key {
                "type" => spec.sql_type = value.to_string(),
                "attrs" => spec.attrs = value.to_string(),
                "name" | "column_name" => spec.name_override = value.to_string(),
                "primary" | "primarykey" | "primary_key" | "is_primary" => spec.is_primary = true,
                "unique" => spec.is_unique = true,
                _ => return Err(InvalidTagKey { key: key.to_string() }),
            }
        }

        Ok(spec)
    }
}

impl FromStr for TagSpec {
    type Err = InvalidTagKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
