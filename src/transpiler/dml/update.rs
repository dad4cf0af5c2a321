//! UPDATE SQL generation.

use super::insert::assignments;
use crate::ast::statements::Update;
use crate::error::{SqlError, SqlResult};
use crate::transpiler::conditions::build_where;
use crate::transpiler::dialect::Dialect;
use crate::transpiler::syntax::{Command, Spacing};

/// Generate UPDATE SQL.
pub fn build_update(stmt: &Update, dialect: Dialect) -> SqlResult<String> {
    if stmt.columns.is_empty() {
        return Err(SqlError::missing("update", "columns"));
    }
    Ok(format!(
        "{} {}{} {} {}",
        Command::Update.render(dialect, Spacing::None),
        stmt.table,
        Command::Set.render(dialect, Spacing::Left),
        assignments("update", &stmt.columns, Some(&stmt.values), stmt.mode)?,
        build_where(&stmt.where_clause, Some(&stmt.table), dialect)?,
    ))
}
