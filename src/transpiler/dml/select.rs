//! SELECT SQL generation.

use crate::ast::statements::{Direction, Select, SelectColumns};
use crate::error::SqlResult;
use crate::transpiler::conditions::build_where;
use crate::transpiler::dialect::Dialect;
use crate::transpiler::syntax::{Command, Spacing};

/// Generate SELECT SQL. Clause order: start, column list, source table,
/// where, group-by, order-by, limit.
pub fn build_select(stmt: &Select, dialect: Dialect) -> SqlResult<String> {
    Ok(format!(
        "{} {} {} {} {} {} {}",
        Command::Select.render(dialect, Spacing::None),
        columns_selected(stmt, dialect),
        from_table(stmt, dialect),
        build_where(&stmt.where_clause, Some(&stmt.table), dialect)?,
        group_by(stmt, dialect),
        order_by(stmt, dialect),
        limit(stmt, dialect),
    ))
}

fn columns_selected(stmt: &Select, dialect: Dialect) -> String {
    match &stmt.columns {
        SelectColumns::All => "*".to_string(),
        SelectColumns::Columns(cols) => cols
            .iter()
            .map(|col| match &col.alias {
                Some(alias) => format!(
                    "{}{}{}",
                    col.name,
                    Command::As.render(dialect, Spacing::Both),
                    alias
                ),
                None => col.name.clone(),
            })
            .collect::<Vec<_>>()
            .join(", "),
    }
}

fn from_table(stmt: &Select, dialect: Dialect) -> String {
    format!(
        "{}{}",
        Command::From.render(dialect, Spacing::Right),
        stmt.table
    )
}

fn group_by(stmt: &Select, dialect: Dialect) -> String {
    if stmt.group_by.is_empty() {
        return String::new();
    }
    format!(
        "{}{}",
        Command::GroupBy.render(dialect, Spacing::Right),
        stmt.group_by.join(", ")
    )
}

fn order_by(stmt: &Select, dialect: Dialect) -> String {
    let Some(order) = &stmt.order_by else {
        return String::new();
    };
    let direction = match order.direction {
        Direction::Asc => Command::Asc,
        Direction::Desc => Command::Desc,
    };
    format!(
        "{}{}{}",
        Command::OrderBy.render(dialect, Spacing::Right),
        order.columns.join(", "),
        direction.render(dialect, Spacing::Left)
    )
}

fn limit(stmt: &Select, dialect: Dialect) -> String {
    let Some(limit) = &stmt.limit else {
        return String::new();
    };
    let count = match limit.count_until {
        Some(count) => format!(", {count}"),
        None => String::new(),
    };
    format!(
        "{}{}{}",
        Command::Limit.render(dialect, Spacing::Right),
        limit.start_from,
        count
    )
}
