//! # sqeel
//!
//! Derives a SQL table schema from an annotated struct and emits the
//! table's `CREATE`, `DROP` and existence-check statements.
//!
//! Each field carries a `sqeel` annotation naming its SQL type, optional
//! column attributes, an optional column name and the `primary`/`unique`
//! flags:
//!
//! ```rust,ignore
//! use sqeel::Model;
//! use std::collections::HashMap;
//!
//! #[derive(Model)]
//! #[allow(non_snake_case)]
//! struct User {
//!     #[sqeel("type:INTEGER,primary")]
//!     ID: i64,
//!     #[sqeel("type:VARCHAR(64),attrs:NOT NULL")]
//!     Name: String,
//!     #[sqeel("type:VARCHAR(128),unique")]
//!     Email: String,
//! }
//!
//! let users = User::describe("users", HashMap::new())?;
//! println!("{}", users.create_statement());
//! ```
//!
//! Types without a derive can be described with [`TableBuilder`].

pub mod case;
pub mod error;
pub mod model;
pub mod statement;
pub mod table;
pub mod tag;

pub use case::to_snake_case;
pub use error::{Error, Result};
pub use model::{FieldInfo, Model};
pub use table::{Key, TableBuilder, TableDescription};
pub use tag::{InvalidTagKey, TagSpec};

pub use sqeel_macro::Model;
