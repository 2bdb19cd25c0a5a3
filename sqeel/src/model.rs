use std::collections::HashMap;

use crate::{Result, TableDescription};

/// One declared field of a record type, as seen by the describer.
///
/// This is usually produced by the `#[derive(Model)]` macro.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldInfo {
    /// The field identifier as declared in the struct.
    pub name: &'static str,
    /// The declared field type in source form (e.g. "Option<String>").
    pub type_name: &'static str,
    /// The raw `sqeel` annotation, empty when the field has none.
    pub tag: &'static str,
}

/// A record type whose fields map one-to-one onto the columns of a table.
///
/// This trait is typically implemented automatically via the `#[derive(Model)]` macro.
///
/// # Example
///
/// ```rust,ignore
/// use sqeel::Model;
///
/// #[derive(Model)]
/// struct User {
///     #[sqeel("type:INTEGER,primary")]
///     id: i32,
///     #[sqeel("type:VARCHAR(64),attrs:NOT NULL")]
///     username: String,
/// }
///
/// let table = User::describe("users", HashMap::new())?;
/// ```
pub trait Model {
    /// Returns the name of the struct implementing the model.
    fn struct_name() -> &'static str;

    /// Returns the fields of the struct in declaration order.
    fn fields() -> Vec<FieldInfo>;

    /// Describes the table `name` from this type's fields.
    ///
    /// `foreign_keys` is kept on the description untouched for external
    /// consumers; no emitted statement refers to it.
    fn describe(name: &str, foreign_keys: HashMap<String, String>) -> Result<TableDescription>
    where
        Self: Sized,
    {
        TableDescription::describe::<Self>(name, foreign_keys)
    }
}
