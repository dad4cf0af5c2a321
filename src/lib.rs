//! Multi-dialect SQL statement compiler.
//!
//! Build statements as typed values, compile them to dialect-correct SQL
//! text for MySQL, PostgreSQL or SQLite. No connection is ever opened here;
//! the output is a plain string (plus, for safe-mode insert/update, a map of
//! named placeholders for the executing side to bind).
//!
//! ```ignore
//! use quillsql::prelude::*;
//! let sql = Statement::from(
//!     Select::new("users").columns(["id", "name"]).where_equal("id", 5),
//! )
//! .to_sql_with_dialect(Dialect::MySql)?;
//! assert_eq!(sql, "SELECT id, name FROM users WHERE id = 5");
//! ```

pub mod ast;
pub mod error;
pub mod transpiler;

pub use ast::Statement;
pub use error::{SqlError, SqlResult};
pub use transpiler::{compile, Dialect, Operation, ToSql};

pub mod prelude {
    pub use crate::ast::*;
    pub use crate::error::*;
    pub use crate::transpiler::value::SqlValue;
    pub use crate::transpiler::{compile, Dialect, Operation, ToSql};
}
