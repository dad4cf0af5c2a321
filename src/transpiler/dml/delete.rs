//! DELETE SQL generation.

use crate::ast::statements::Delete;
use crate::error::SqlResult;
use crate::transpiler::conditions::build_where;
use crate::transpiler::dialect::Dialect;
use crate::transpiler::syntax::{Command, Spacing};

/// Generate DELETE SQL.
pub fn build_delete(stmt: &Delete, dialect: Dialect) -> SqlResult<String> {
    Ok(format!(
        "{} {}{} {}",
        Command::Delete.render(dialect, Spacing::None),
        Command::From.render(dialect, Spacing::Right),
        stmt.table,
        build_where(&stmt.where_clause, Some(&stmt.table), dialect)?,
    ))
}
