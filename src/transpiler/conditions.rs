//! Boolean-expression compiler shared by WHERE and CHECK clauses.

use super::dialect::Dialect;
use super::syntax::{Command, Spacing};
use super::value::SqlValue;
use crate::ast::conditions::{Combinator, Condition, Predicate, WhereClause};
use crate::error::{SqlError, SqlResult};

/// Compile a WHERE clause. Returns an empty string when the clause holds
/// nothing; otherwise the result starts with `WHERE `.
///
/// `base_table` is the compiling statement's table, used by joined-column
/// conditions (`base.col = other.col`).
pub fn build_where(
    clause: &WhereClause,
    base_table: Option<&str>,
    dialect: Dialect,
) -> SqlResult<String> {
    if clause.is_empty() {
        return Ok(String::new());
    }

    let body = if let Some(raw) = &clause.raw {
        raw.clone()
    } else {
        let rendered: SqlResult<Vec<String>> = clause
            .conditions
            .iter()
            .map(|c| build_condition(c, base_table, dialect))
            .collect();
        join_with_combinators(&rendered?, &clause.combinators, dialect)
    };

    Ok(format!(
        "{}{}",
        Command::Where.render(dialect, Spacing::Right),
        body
    ))
}

/// Compile one condition descriptor.
pub fn build_condition(
    condition: &Condition,
    base_table: Option<&str>,
    dialect: Dialect,
) -> SqlResult<String> {
    if condition.column.is_empty() {
        return Err(SqlError::condition("no column selected"));
    }
    let col = &condition.column;

    match &condition.predicate {
        Predicate::Compare { op, value } => {
            Ok(format!("{col} {} {}", op.symbol(), value.encode()?))
        }
        Predicate::Like(operand) => Ok(format!(
            "{col}{}{}",
            Command::Like.render(dialect, Spacing::Both),
            SqlValue::Text(format!("%{operand}%")).encode()?
        )),
        Predicate::NotNull => Ok(format!(
            "{col}{}{}{}",
            Command::Is.render(dialect, Spacing::Both),
            Command::Not.render(dialect, Spacing::Right),
            Command::Null.render(dialect, Spacing::None)
        )),
        Predicate::Between { from, to } => {
            validate_range(from, to)?;
            Ok(format!(
                "{col}{}{}{}{}",
                Command::Between.render(dialect, Spacing::Both),
                from.encode()?,
                Command::And.render(dialect, Spacing::Both),
                to.encode()?
            ))
        }
        Predicate::Not(value) => Ok(format!(
            "{}({col} = {})",
            Command::Not.render(dialect, Spacing::Right),
            value.encode()?
        )),
        Predicate::JoinedColumn { table, column } => {
            let base = base_table.ok_or_else(|| {
                SqlError::condition("joined-column condition needs a base table")
            })?;
            Ok(format!("{base}.{col} = {table}.{column}"))
        }
    }
}

/// `to` must not be less than `from`; checked before any output is produced.
fn validate_range(from: &SqlValue, to: &SqlValue) -> SqlResult<()> {
    let as_float = |v: &SqlValue| match v {
        SqlValue::Int(n) => Some(*n as f64),
        SqlValue::Float(n) => Some(*n),
        _ => None,
    };
    if let (Some(from), Some(to)) = (as_float(from), as_float(to)) {
        if to < from {
            return Err(SqlError::condition(
                "the 'to' value must be greater than the 'from' value",
            ));
        }
    }
    Ok(())
}

/// Join rendered condition fragments with their combinator sequence.
///
/// Strictly positional: combinator `i` sits between fragment `i` and
/// `i + 1`; a short sequence falls back to `AND` for the remainder.
pub fn join_with_combinators(
    parts: &[String],
    combinators: &[Combinator],
    dialect: Dialect,
) -> String {
    let mut result = String::new();
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            let combinator = combinators.get(i - 1).copied().unwrap_or_default();
            let command = match combinator {
                Combinator::And => Command::And,
                Combinator::Or => Command::Or,
            };
            result.push_str(&command.render(dialect, Spacing::Both));
        }
        result.push_str(part);
    }
    result
}

/// Compile the expression body of a CHECK constraint.
///
/// Reuses the WHERE combinator logic. The sentinel expression `"json"`
/// expands to a `JSON_VALID(column)` call. Dialects without CHECK support
/// compile to an empty string instead of erroring.
pub fn build_check(
    column: &str,
    expressions: &[String],
    combinators: &[Combinator],
    dialect: Dialect,
) -> SqlResult<String> {
    if !dialect.supports_check() {
        return Ok(String::new());
    }
    if expressions.is_empty() {
        return Ok(String::new());
    }

    let mut parts = Vec::with_capacity(expressions.len());
    for expression in expressions {
        if expression.is_empty() {
            return Err(SqlError::EmptyExpression);
        }
        if expression == "json" {
            parts.push(format!("JSON_VALID({column})"));
        } else {
            parts.push(expression.clone());
        }
    }

    Ok(join_with_combinators(&parts, combinators, dialect))
}
