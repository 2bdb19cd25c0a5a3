//! # Table Module
//!
//! Turns a sequence of annotated fields into a validated
//! [`TableDescription`]. Fields come either from a [`Model`] implementation
//! or from an explicit [`TableBuilder`].

// ============================================================================
// External Crate Imports
// ============================================================================

use log::{debug, trace};
use serde::Serialize;
use std::collections::HashMap;

// ============================================================================
// Internal Crate Imports
// ============================================================================

use crate::{
    case::to_snake_case,
    model::{FieldInfo, Model},
    tag::TagSpec,
    Error, Result,
};

// ============================================================================
// Key Struct
// ============================================================================

/// A normalized column entry of a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Key {
    pub(crate) source_name: String,
    pub(crate) column_name: Option<String>,
    pub(crate) source_type: String,
    pub(crate) sql_type: String,
    pub(crate) sql_attrs: String,
    pub(crate) raw_tag: String,
    pub(crate) is_primary: bool,
    pub(crate) is_unique: bool,
}

impl Key {
    /// Builds a key from a parsed annotation.
    fn new(source_name: &str, source_type: &str, raw_tag: &str, spec: TagSpec) -> Self {
        let column_name = (!spec.name_override.is_empty()).then_some(spec.name_override);

        Self {
            source_name: source_name.to_string(),
            column_name,
            source_type: source_type.to_string(),
            sql_type: spec.sql_type,
            sql_attrs: spec.attrs,
            raw_tag: raw_tag.to_string(),
            is_primary: spec.is_primary,
            is_unique: spec.is_unique,
        }
    }

    /// Returns the column definition used inside `CREATE TABLE`:
    /// `<source_name> <sql_type>[ <sql_attrs>]`.
    pub fn sql_definition(&self) -> String {
        let mut def = format!("{} {}", self.source_name, self.sql_type);
        if !self.sql_attrs.is_empty() {
            def.push(' ');
            def.push_str(&self.sql_attrs);
        }
        def
    }

    /// Returns the SQL column name: the explicit override if one was given,
    /// otherwise the snake-cased source name.
    pub fn sql_name(&self) -> String {
        match &self.column_name {
            Some(name) => name.clone(),
            None => to_snake_case(&self.source_name),
        }
    }

    /// Returns the field name as declared in the record type.
    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    pub fn column_name(&self) -> Option<&str> {
        self.column_name.as_deref()
    }

    /// Returns the declared in-memory type of the field. Informational only.
    pub fn source_type(&self) -> &str {
        &self.source_type
    }

    pub fn sql_type(&self) -> &str {
        &self.sql_type
    }

    pub fn sql_attrs(&self) -> &str {
        &self.sql_attrs
    }

    /// Returns the annotation the key was parsed from.
    pub fn raw_tag(&self) -> &str {
        &self.raw_tag
    }

    pub fn is_primary(&self) -> bool {
        self.is_primary
    }

    pub fn is_unique(&self) -> bool {
        self.is_unique
    }
}

// ============================================================================
// TableDescription Struct
// ============================================================================

/// The schema of one table.
///
/// Built once through [`TableDescription::describe`] or [`TableBuilder`] and
/// immutable afterwards. Exactly one key is primary and
/// `keys()[primary_index()]` is that key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableDescription {
    pub(crate) name: String,
    pub(crate) keys: Vec<Key>,
    pub(crate) primary_index: usize,
    pub(crate) foreign_keys: HashMap<String, String>,
}

impl TableDescription {
    /// Describes the table `name` from the fields of `T`.
    pub fn describe<T: Model>(name: &str, foreign_keys: HashMap<String, String>) -> Result<Self> {
        Self::from_fields(name, T::fields(), foreign_keys)
    }

    /// Describes the table `name` from fields given in declaration order.
    pub fn from_fields<I>(
        name: &str,
        fields: I,
        foreign_keys: HashMap<String, String>,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = FieldInfo>,
    {
        let mut builder = TableBuilder::new(name).foreign_keys(foreign_keys);
        for field in fields {
            builder = builder.field(field.name, field.type_name, field.tag);
        }
        builder.build()
    }

    /// Creates a builder for a table described field by field.
    pub fn builder(name: &str) -> TableBuilder {
        TableBuilder::new(name)
    }

    /// Returns the table name, verbatim.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the keys in declaration order.
    pub fn keys(&self) -> &[Key] {
        &self.keys
    }

    pub fn primary_index(&self) -> usize {
        self.primary_index
    }

    /// Returns the primary key.
    pub fn primary_key(&self) -> &Key {
        &self.keys[self.primary_index]
    }

    /// Returns the source names of all keys, in order.
    pub fn key_names(&self) -> Vec<&str> {
        self.keys.iter().map(Key::source_name).collect()
    }

    /// Returns the resolved SQL column names of all keys, in order.
    pub fn sql_names(&self) -> Vec<String> {
        self.keys.iter().map(Key::sql_name).collect()
    }

    /// Returns the keys marked unique, in order.
    pub fn unique_keys(&self) -> impl Iterator<Item = &Key> {
        self.keys.iter().filter(|k| k.is_unique)
    }

    /// Returns the foreign-key mapping passed at construction. The
    /// description never interprets it.
    pub fn foreign_keys(&self) -> &HashMap<String, String> {
        &self.foreign_keys
    }
}

// ============================================================================
// TableBuilder Struct
// ============================================================================

/// Builder for a [`TableDescription`] when fields are not known through a
/// [`Model`] implementation.
///
/// ```
/// use sqeel::TableBuilder;
///
/// let table = TableBuilder::new("users")
///     .field("ID", "i64", "type:INTEGER,primary")
///     .field("Name", "String", "type:TEXT")
///     .build()?;
///
/// assert_eq!(table.drop_statement(), "DROP TABLE IF EXISTS users;");
/// # Ok::<(), sqeel::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct TableBuilder {
    name: String,
    fields: Vec<(String, String, String)>,
    foreign_keys: HashMap<String, String>,
}

impl TableBuilder {
    /// Creates a builder for the table `name`.
    pub fn new(name: &str) -> Self {
        Self { name: name.to_string(), ..Self::default() }
    }

    /// Appends a field with its declared name, type and annotation.
    pub fn field(mut self, source_name: &str, source_type: &str, tag: &str) -> Self {
        self.fields
            .push((source_name.to_string(), source_type.to_string(), tag.to_string()));
        self
    }

    /// Adds one foreign-key entry.
    pub fn foreign_key(mut self, column: &str, target: &str) -> Self {
        self.foreign_keys.insert(column.to_string(), target.to_string());
        self
    }

    /// Extends the foreign-key mapping.
    pub fn foreign_keys(mut self, foreign_keys: HashMap<String, String>) -> Self {
        self.foreign_keys.extend(foreign_keys);
        self
    }

    /// Parses every annotation and validates the resulting table.
    ///
    /// Fails on the first field that has no name, whose annotation is
    /// invalid or that has no SQL type, then if no field, or more than one,
    /// is marked primary.
    pub fn build(self) -> Result<TableDescription> {
        let mut keys: Vec<Key> = Vec::with_capacity(self.fields.len());
        let mut primary_index: Option<usize> = None;

        for (index, (source_name, source_type, tag)) in self.fields.iter().enumerate() {
            if source_name.is_empty() {
                return Err(Error::EmptySourceName { table: self.name, position: index });
            }

            let spec = TagSpec::parse(tag)
                .map_err(|source| Error::Tag { field: source_name.clone(), source })?;
            if spec.sql_type.is_empty() {
                return Err(Error::EmptyType { field: source_name.clone() });
            }
            trace!("table {}: field {} parsed as {:?}", self.name, source_name, spec);

            if spec.is_primary {
                if let Some(first) = primary_index {
                    return Err(Error::DuplicatePrimaryKey {
                        table: self.name,
                        first: keys[first].source_name.clone(),
                        second: source_name.clone(),
                    });
                }
                primary_index = Some(index);
            }

            keys.push(Key::new(source_name, source_type, tag, spec));
        }

        let Some(primary_index) = primary_index else {
            return Err(Error::MissingPrimaryKey { table: self.name });
        };

        debug!(
            "described table {} with {} keys, primary key {}",
            self.name,
            keys.len(),
            keys[primary_index].source_name
        );

        Ok(TableDescription {
            name: self.name,
            keys,
            primary_index,
            foreign_keys: self.foreign_keys,
        })
    }
}
