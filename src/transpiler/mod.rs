//! SQL compilation: dialect catalog, value encoder, condition compiler,
//! per-statement compilers and the dispatcher.

pub mod conditions;
pub mod database;
pub mod ddl;
pub mod dialect;
pub mod dml;
pub mod syntax;
pub mod transaction;
pub mod types;
pub mod validate;
pub mod value;

#[cfg(test)]
mod tests;

use crate::ast::Statement;
use crate::error::{SqlError, SqlResult};
pub use dialect::Dialect;

/// Trait for compiling a statement to SQL text.
pub trait ToSql {
    /// Compile using the default dialect.
    fn to_sql(&self) -> SqlResult<String> {
        self.to_sql_with_dialect(Dialect::default())
    }
    /// Compile for a specific dialect.
    fn to_sql_with_dialect(&self, dialect: Dialect) -> SqlResult<String>;
}

impl ToSql for Statement {
    fn to_sql_with_dialect(&self, dialect: Dialect) -> SqlResult<String> {
        compile(self, dialect)
    }
}

/// The closed set of operation tags the dispatcher understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Select,
    Insert,
    Update,
    Delete,
    Truncate,
    Drop,
    Alter,
    Transaction,
    Db,
    Table,
    Column,
    Info,
}

impl std::str::FromStr for Operation {
    type Err = SqlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "select" => Ok(Operation::Select),
            "insert" => Ok(Operation::Insert),
            "update" => Ok(Operation::Update),
            "delete" => Ok(Operation::Delete),
            "truncate" => Ok(Operation::Truncate),
            "drop" => Ok(Operation::Drop),
            "alter" => Ok(Operation::Alter),
            "transaction" => Ok(Operation::Transaction),
            "db" => Ok(Operation::Db),
            "table" => Ok(Operation::Table),
            "column" => Ok(Operation::Column),
            "info" => Ok(Operation::Info),
            other => Err(SqlError::UnknownOperation(other.to_string())),
        }
    }
}

impl Statement {
    /// The operation tag this statement dispatches under.
    pub fn operation(&self) -> Operation {
        match self {
            Statement::Select(_) => Operation::Select,
            Statement::Insert(_) => Operation::Insert,
            Statement::Update(_) => Operation::Update,
            Statement::Delete(_) => Operation::Delete,
            Statement::Truncate(_) => Operation::Truncate,
            Statement::Drop(_) => Operation::Drop,
            Statement::Alter(_) => Operation::Alter,
            Statement::CreateTable(_) | Statement::ModifyTable(_) => Operation::Table,
            Statement::Transaction(_) => Operation::Transaction,
            Statement::Database(_) => Operation::Db,
            Statement::Info(_) => Operation::Info,
            Statement::Column(_) => Operation::Column,
        }
    }

    fn appended(&self) -> Option<&str> {
        match self {
            Statement::Select(s) => s.appended.as_deref(),
            Statement::Insert(s) => s.appended.as_deref(),
            Statement::Update(s) => s.appended.as_deref(),
            Statement::Delete(s) => s.appended.as_deref(),
            Statement::CreateTable(s) => s.appended.as_deref(),
            _ => None,
        }
    }
}

/// Compile a statement: dispatch to its compiler, normalize whitespace and
/// append any caller-provided raw trailing fragment verbatim.
pub fn compile(statement: &Statement, dialect: Dialect) -> SqlResult<String> {
    let raw = match statement {
        Statement::Select(stmt) => dml::select::build_select(stmt, dialect)?,
        Statement::Insert(stmt) => dml::insert::build_insert(stmt, dialect)?,
        Statement::Update(stmt) => dml::update::build_update(stmt, dialect)?,
        Statement::Delete(stmt) => dml::delete::build_delete(stmt, dialect)?,
        Statement::Truncate(stmt) => ddl::build_truncate(stmt, dialect)?,
        Statement::Drop(stmt) => ddl::build_drop(stmt, dialect)?,
        Statement::Alter(stmt) => ddl::build_alter(stmt, dialect)?,
        Statement::CreateTable(stmt) => ddl::build_create_table(stmt, dialect)?,
        Statement::ModifyTable(stmt) => ddl::build_modify_table(stmt, dialect)?,
        Statement::Transaction(stmt) => transaction::build_transaction(stmt, dialect)?,
        Statement::Database(stmt) => database::build_database(stmt, dialect)?,
        Statement::Info(stmt) => database::build_info(&stmt.query, dialect)?,
        Statement::Column(spec) => ddl::build_column(spec, dialect)?,
    };

    let mut sql = clean(&raw);
    if let Some(fragment) = statement.appended() {
        sql.push_str(fragment);
    }
    Ok(sql)
}

/// Collapse runs of whitespace to a single space, leaving the contents of
/// single-quoted literals untouched, then trim the ends.
pub fn clean(query: &str) -> String {
    let mut out = String::with_capacity(query.len());
    let mut in_literal = false;
    let mut pending_space = false;

    for ch in query.chars() {
        if !in_literal && ch.is_whitespace() {
            pending_space = true;
            continue;
        }
        if pending_space {
            out.push(' ');
            pending_space = false;
        }
        if ch == '\'' {
            in_literal = !in_literal;
        }
        out.push(ch);
    }

    out.trim().to_string()
}
