//! INSERT SQL generation.
//!
//! Two shapes, selected by an explicit attribute rather than inference:
//! `VALUES` lists (possibly multi-row) and `SET col = value` assignment.

use crate::ast::statements::{BindMode, Insert, InsertRows, InsertShape};
use crate::error::{SqlError, SqlResult};
use crate::transpiler::dialect::Dialect;
use crate::transpiler::syntax::{Command, Spacing};
use crate::transpiler::value::encode_list;

/// Generate INSERT SQL.
pub fn build_insert(stmt: &Insert, dialect: Dialect) -> SqlResult<String> {
    match stmt.shape {
        InsertShape::Values => build_for_values(stmt, dialect),
        InsertShape::Set => build_for_set(stmt, dialect),
    }
}

fn build_for_values(stmt: &Insert, dialect: Dialect) -> SqlResult<String> {
    Ok(format!(
        "{} {} {} {}",
        Command::Insert.render(dialect, Spacing::None),
        into_table(stmt, dialect),
        column_list(stmt),
        values_clause(stmt, dialect)?,
    ))
}

fn build_for_set(stmt: &Insert, dialect: Dialect) -> SqlResult<String> {
    Ok(format!(
        "{} {}{} {}",
        Command::Insert.render(dialect, Spacing::None),
        into_table(stmt, dialect),
        Command::Set.render(dialect, Spacing::Left),
        set_data(stmt)?,
    ))
}

fn into_table(stmt: &Insert, dialect: Dialect) -> String {
    format!(
        "{}{}",
        Command::Into.render(dialect, Spacing::Right),
        stmt.table
    )
}

fn column_list(stmt: &Insert) -> String {
    if stmt.columns.is_empty() {
        return String::new();
    }
    format!("({})", stmt.columns.join(", "))
}

fn values_clause(stmt: &Insert, dialect: Dialect) -> SqlResult<String> {
    match &stmt.rows {
        Some(InsertRows::Default) => Ok(format!(
            "{}{}",
            Command::Default.render(dialect, Spacing::Right),
            Command::Values.render(dialect, Spacing::None)
        )),
        Some(InsertRows::Values(rows)) => {
            if stmt.columns.is_empty() {
                return Err(SqlError::missing("insert", "columns"));
            }
            let rendered: SqlResult<Vec<String>> = rows
                .iter()
                .map(|row| {
                    if row.len() != stmt.columns.len() {
                        return Err(SqlError::ColumnValueMismatch {
                            columns: stmt.columns.len(),
                            values: row.len(),
                        });
                    }
                    match stmt.mode {
                        BindMode::Safe => Ok(format!("({})", placeholders(&stmt.columns))),
                        BindMode::Literal => Ok(format!("({})", encode_list(row)?)),
                    }
                })
                .collect();
            Ok(format!(
                "{}{}",
                Command::Values.render(dialect, Spacing::Right),
                rendered?.join(", ")
            ))
        }
        None => match stmt.mode {
            // Safe mode can render placeholders with no values attached;
            // the execution collaborator supplies them at bind time.
            BindMode::Safe if !stmt.columns.is_empty() => Ok(format!(
                "{}({})",
                Command::Values.render(dialect, Spacing::Right),
                placeholders(&stmt.columns)
            )),
            _ => Err(SqlError::missing("insert", "values")),
        },
    }
}

fn set_data(stmt: &Insert) -> SqlResult<String> {
    if stmt.columns.is_empty() {
        return Err(SqlError::missing("insert", "columns"));
    }
    let row = match &stmt.rows {
        Some(InsertRows::Values(rows)) => rows.first(),
        _ => None,
    };
    assignments("insert", &stmt.columns, row, stmt.mode)
}

fn placeholders(columns: &[String]) -> String {
    columns
        .iter()
        .map(|col| format!(":{col}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Render `col = value` pairs, or `col = :col` in safe mode. Shared with the
/// UPDATE compiler.
pub fn assignments(
    operation: &'static str,
    columns: &[String],
    values: Option<&Vec<crate::transpiler::value::SqlValue>>,
    mode: BindMode,
) -> SqlResult<String> {
    match mode {
        BindMode::Safe => Ok(columns
            .iter()
            .map(|col| format!("{col} = :{col}"))
            .collect::<Vec<_>>()
            .join(", ")),
        BindMode::Literal => {
            let values = values.ok_or_else(|| SqlError::missing(operation, "values"))?;
            if values.len() != columns.len() {
                return Err(SqlError::ColumnValueMismatch {
                    columns: columns.len(),
                    values: values.len(),
                });
            }
            let pairs: SqlResult<Vec<String>> = columns
                .iter()
                .zip(values)
                .map(|(col, value)| Ok(format!("{col} = {}", value.encode()?)))
                .collect();
            Ok(pairs?.join(", "))
        }
    }
}
