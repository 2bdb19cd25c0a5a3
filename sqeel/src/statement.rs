//! # Statement Module
//!
//! Lifecycle statements for a described table. Names and types are emitted
//! verbatim with no quoting, and the target dialect is MySQL.

use std::fmt;

use crate::TableDescription;

impl TableDescription {
    /// Returns the `CREATE TABLE` statement.
    ///
    /// Column definitions come first in declaration order, followed by the
    /// `PRIMARY KEY` clause and one `UNIQUE KEY` clause per unique column.
    /// Clauses refer to columns by source name.
    pub fn create_statement(&self) -> String {
        let mut lines: Vec<String> = self.keys.iter().map(|k| k.sql_definition()).collect();

        lines.push(format!("PRIMARY KEY ({})", self.primary_key().source_name()));
        for key in self.unique_keys() {
            lines.push(format!("UNIQUE KEY ({})", key.source_name()));
        }

        format!("CREATE TABLE {} (\n{});", self.name, lines.join(",\n"))
    }

    /// Returns the `DROP TABLE IF EXISTS` statement.
    pub fn drop_statement(&self) -> String {
        format!("DROP TABLE IF EXISTS {};", self.name)
    }

    /// Returns a statement that yields one row when the table exists.
    pub fn exists_statement(&self) -> String {
        format!("SHOW TABLES LIKE '{}';", self.name)
    }
}

impl fmt::Display for TableDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.create_statement())
    }
}
