//! Transaction SQL generation.

use super::dialect::Dialect;
use super::syntax::{Command, Spacing};
use crate::ast::statements::Transaction;
use crate::error::SqlResult;

/// Generate transaction SQL: BEGIN, the compiled records, then the closing
/// block. MySQL gets the conditional commit/rollback wrapper; the other
/// dialects close with a plain COMMIT.
pub fn build_transaction(stmt: &Transaction, dialect: Dialect) -> SqlResult<String> {
    let mut records = Vec::with_capacity(stmt.records.len());
    for record in &stmt.records {
        records.push(super::compile(record, dialect)?);
    }

    let mut sql = format!(
        "{}; {}",
        Command::Begin.render(dialect, Spacing::None),
        records.join("; ")
    );

    match dialect {
        Dialect::MySql => sql.push_str(&format!(
            "; {} @@{} = -1 {} {}; {} 'Transaction rolled back.' {} {}; {} 'Transaction committed.'; {}",
            Command::If.render(dialect, Spacing::None),
            Command::RowCount.render(dialect, Spacing::None),
            Command::Then.render(dialect, Spacing::None),
            Command::Rollback.render(dialect, Spacing::None),
            Command::Select.render(dialect, Spacing::None),
            Command::Else.render(dialect, Spacing::None),
            Command::Commit.render(dialect, Spacing::None),
            Command::Select.render(dialect, Spacing::None),
            Command::EndIf.render(dialect, Spacing::None),
        )),
        Dialect::Postgres | Dialect::Sqlite => sql.push_str(&format!(
            "; {}",
            Command::Commit.render(dialect, Spacing::None)
        )),
    }

    Ok(sql)
}
