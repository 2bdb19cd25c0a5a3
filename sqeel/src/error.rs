//! # Error Module
//!
//! Errors surfaced while describing a table. The statement emitters never
//! fail, so everything here comes out of [`TableDescription::describe`] or
//! [`TableBuilder::build`].
//!
//! [`TableDescription::describe`]: crate::TableDescription::describe
//! [`TableBuilder::build`]: crate::TableBuilder::build

use thiserror::Error;

use crate::tag::InvalidTagKey;

pub type Result<T> = std::result::Result<T, Error>;

/// Failure of a describe call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The field at `position` (zero-based, declaration order) has an
    /// empty source name.
    #[error("table `{table}`: field at position {position} has no name")]
    EmptySourceName { table: String, position: usize },

    /// The annotation on `field` could not be parsed.
    #[error("field `{field}`: {source}")]
    Tag {
        field: String,
        #[source]
        source: InvalidTagKey,
    },

    /// The annotation on `field` did not set a SQL type.
    #[error("field `{field}` has no sql type")]
    EmptyType { field: String },

    #[error("primary key not specified for table `{table}`")]
    MissingPrimaryKey { table: String },

    #[error("table `{table}` marks both `{first}` and `{second}` as primary key")]
    DuplicatePrimaryKey {
        table: String,
        first: String,
        second: String,
    },
}
