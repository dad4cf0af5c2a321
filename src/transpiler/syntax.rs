//! Keyword catalog.
//!
//! Maps logical tokens to dialect keywords. Lookups are exhaustive matches,
//! so a missing mapping is a compile-time hole rather than a runtime surprise;
//! the string front doors (`FromStr`) are where `UnknownToken` can still occur.

use super::dialect::Dialect;
use crate::error::SqlError;
use serde::{Deserialize, Serialize};

/// Whitespace placement around a rendered keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Spacing {
    #[default]
    None,
    /// ` KEYWORD `
    Both,
    /// ` KEYWORD`
    Left,
    /// `KEYWORD `
    Right,
    /// `KEYWORD\n`
    Line,
}

impl Spacing {
    pub fn apply(&self, word: &str) -> String {
        match self {
            Spacing::None => word.to_string(),
            Spacing::Both => format!(" {word} "),
            Spacing::Left => format!(" {word}"),
            Spacing::Right => format!("{word} "),
            Spacing::Line => format!("{word}\n"),
        }
    }
}

/// Logical SQL command tokens used by the statement compilers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Add,
    After,
    Alter,
    AlterDatabase,
    AlterTable,
    And,
    As,
    Asc,
    Begin,
    Between,
    Character,
    Check,
    Collate,
    Column,
    ColumnName,
    Commit,
    ConnectionLimit,
    Constraint,
    Create,
    CreateDatabase,
    CreateIndex,
    CreateTable,
    Database,
    Databases,
    DataType,
    Default,
    DefaultCharset,
    Delete,
    Desc,
    Describe,
    Drop,
    DropDatabase,
    Else,
    Encoding,
    EndIf,
    Engine,
    Exists,
    ForeignKey,
    From,
    GroupBy,
    If,
    In,
    Index,
    Insert,
    Into,
    Invisible,
    Is,
    Key,
    LcCollate,
    LcCtype,
    Like,
    Limit,
    Not,
    NotNull,
    Null,
    On,
    Or,
    OrderBy,
    Owner,
    Pragma,
    PrimaryKey,
    References,
    Rename,
    Rollback,
    RowCount,
    Select,
    Set,
    Show,
    Table,
    TableName,
    Tables,
    Template,
    Then,
    To,
    Truncate,
    Unique,
    Unsigned,
    Update,
    Values,
    Where,
}

impl Command {
    /// The keyword text for this token on the given dialect.
    ///
    /// Almost every token is dialect-independent; the few that are not
    /// branch here so call sites stay unconditional.
    pub fn keyword(&self, _dialect: Dialect) -> &'static str {
        match self {
            Command::Add => "ADD",
            Command::After => "AFTER",
            Command::Alter => "ALTER",
            Command::AlterDatabase => "ALTER DATABASE",
            Command::AlterTable => "ALTER TABLE",
            Command::And => "AND",
            Command::As => "AS",
            Command::Asc => "ASC",
            Command::Begin => "BEGIN",
            Command::Between => "BETWEEN",
            Command::Character => "CHARACTER",
            Command::Check => "CHECK",
            Command::Collate => "COLLATE",
            Command::Column => "COLUMN",
            Command::ColumnName => "COLUMN_NAME",
            Command::Commit => "COMMIT",
            Command::ConnectionLimit => "CONNECTION LIMIT",
            Command::Constraint => "CONSTRAINT",
            Command::Create => "CREATE",
            Command::CreateDatabase => "CREATE DATABASE",
            Command::CreateIndex => "CREATE INDEX",
            Command::CreateTable => "CREATE TABLE",
            Command::Database => "DATABASE",
            Command::Databases => "DATABASES",
            Command::DataType => "DATA TYPE",
            Command::Default => "DEFAULT",
            Command::DefaultCharset => "DEFAULT CHARSET",
            Command::Delete => "DELETE",
            Command::Desc => "DESC",
            Command::Describe => "DESCRIBE",
            Command::Drop => "DROP",
            Command::DropDatabase => "DROP DATABASE",
            Command::Else => "ELSE",
            Command::Encoding => "ENCODING",
            Command::EndIf => "END IF",
            Command::Engine => "ENGINE=",
            Command::Exists => "EXISTS",
            Command::ForeignKey => "FOREIGN KEY",
            Command::From => "FROM",
            Command::GroupBy => "GROUP BY",
            Command::If => "IF",
            Command::In => "IN",
            Command::Index => "INDEX",
            Command::Insert => "INSERT",
            Command::Into => "INTO",
            Command::Invisible => "INVISIBLE",
            Command::Is => "IS",
            Command::Key => "KEY",
            Command::LcCollate => "LC_COLLATE",
            Command::LcCtype => "LC_CTYPE",
            Command::Like => "LIKE",
            Command::Limit => "LIMIT",
            Command::Not => "NOT",
            Command::NotNull => "NOT NULL",
            Command::Null => "NULL",
            Command::On => "ON",
            Command::Or => "OR",
            Command::OrderBy => "ORDER BY",
            Command::Owner => "OWNER",
            Command::Pragma => "PRAGMA",
            Command::PrimaryKey => "PRIMARY KEY",
            Command::References => "REFERENCES",
            Command::Rename => "RENAME",
            Command::Rollback => "ROLLBACK",
            Command::RowCount => "ROW_COUNT",
            Command::Select => "SELECT",
            Command::Set => "SET",
            Command::Show => "SHOW",
            Command::Table => "TABLE",
            Command::TableName => "TABLE_NAME",
            Command::Tables => "TABLES",
            Command::Template => "TEMPLATE",
            Command::Then => "THEN",
            Command::To => "TO",
            Command::Truncate => "TRUNCATE",
            Command::Unique => "UNIQUE",
            Command::Unsigned => "UNSIGNED",
            Command::Update => "UPDATE",
            Command::Values => "VALUES",
            Command::Where => "WHERE",
        }
    }

    /// Render the keyword with the requested surrounding whitespace.
    pub fn render(&self, dialect: Dialect, spacing: Spacing) -> String {
        spacing.apply(self.keyword(dialect))
    }
}

impl std::str::FromStr for Command {
    type Err = SqlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add" => Ok(Command::Add),
            "alter" => Ok(Command::Alter),
            "alterDatabase" => Ok(Command::AlterDatabase),
            "alterTable" => Ok(Command::AlterTable),
            "and" => Ok(Command::And),
            "as" => Ok(Command::As),
            "asc" => Ok(Command::Asc),
            "begin" => Ok(Command::Begin),
            "between" => Ok(Command::Between),
            "check" => Ok(Command::Check),
            "column" => Ok(Command::Column),
            "commit" => Ok(Command::Commit),
            "createDatabase" => Ok(Command::CreateDatabase),
            "createIndex" => Ok(Command::CreateIndex),
            "createTable" => Ok(Command::CreateTable),
            "database" => Ok(Command::Database),
            "default" => Ok(Command::Default),
            "delete" => Ok(Command::Delete),
            "desc" => Ok(Command::Desc),
            "describe" => Ok(Command::Describe),
            "drop" => Ok(Command::Drop),
            "dropDatabase" => Ok(Command::DropDatabase),
            "from" => Ok(Command::From),
            "groupBy" => Ok(Command::GroupBy),
            "insert" => Ok(Command::Insert),
            "into" => Ok(Command::Into),
            "like" => Ok(Command::Like),
            "limit" => Ok(Command::Limit),
            "not" => Ok(Command::Not),
            "not_null" => Ok(Command::NotNull),
            "null" => Ok(Command::Null),
            "or" => Ok(Command::Or),
            "orderBy" => Ok(Command::OrderBy),
            "rename" => Ok(Command::Rename),
            "rollback" => Ok(Command::Rollback),
            "select" => Ok(Command::Select),
            "set" => Ok(Command::Set),
            "show" => Ok(Command::Show),
            "table" => Ok(Command::Table),
            "tables" => Ok(Command::Tables),
            "truncate" => Ok(Command::Truncate),
            "unsigned" => Ok(Command::Unsigned),
            "update" => Ok(Command::Update),
            "values" => Ok(Command::Values),
            "where" => Ok(Command::Where),
            other => Err(SqlError::UnknownToken(other.to_string())),
        }
    }
}

/// Key-constraint tokens. `AutoIncrement` is the one genuinely
/// dialect-conditional keyword in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyConstraint {
    Primary,
    Unique,
    Foreign,
    AutoIncrement,
}

impl KeyConstraint {
    pub fn keyword(&self, dialect: Dialect) -> &'static str {
        match self {
            KeyConstraint::Primary => "PRIMARY KEY",
            KeyConstraint::Unique => "UNIQUE",
            KeyConstraint::Foreign => "FOREIGN KEY",
            KeyConstraint::AutoIncrement => match dialect {
                Dialect::MySql => "AUTO_INCREMENT",
                Dialect::Sqlite => "AUTOINCREMENT",
                Dialect::Postgres => "SERIAL",
            },
        }
    }

    pub fn render(&self, dialect: Dialect, spacing: Spacing) -> String {
        spacing.apply(self.keyword(dialect))
    }
}

impl std::str::FromStr for KeyConstraint {
    type Err = SqlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "primary" | "primary_key" => Ok(KeyConstraint::Primary),
            "unique" | "unique_key" => Ok(KeyConstraint::Unique),
            "foreign" | "foreign_key" => Ok(KeyConstraint::Foreign),
            "auto_increment" => Ok(KeyConstraint::AutoIncrement),
            other => Err(SqlError::UnknownToken(other.to_string())),
        }
    }
}

/// SQL date-function spellings that the value encoder passes through unquoted.
pub const DATE_FUNCTIONS: &[&str] = &[
    "CURRENT_TIMESTAMP",
    "NOW()",
    "CURDATE()",
    "CURTIME()",
    "SYSDATE()",
    "GETDATE()",
    "current_timestamp()",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spacing() {
        let d = Dialect::MySql;
        assert_eq!(Command::From.render(d, Spacing::Right), "FROM ");
        assert_eq!(Command::And.render(d, Spacing::Both), " AND ");
        assert_eq!(Command::Asc.render(d, Spacing::Left), " ASC");
        assert_eq!(Command::Select.render(d, Spacing::None), "SELECT");
    }

    #[test]
    fn test_auto_increment_per_dialect() {
        assert_eq!(
            KeyConstraint::AutoIncrement.keyword(Dialect::MySql),
            "AUTO_INCREMENT"
        );
        assert_eq!(
            KeyConstraint::AutoIncrement.keyword(Dialect::Sqlite),
            "AUTOINCREMENT"
        );
        assert_eq!(
            KeyConstraint::AutoIncrement.keyword(Dialect::Postgres),
            "SERIAL"
        );
    }

    #[test]
    fn test_unknown_token() {
        let err = "no_such_command".parse::<Command>().unwrap_err();
        assert!(matches!(err, SqlError::UnknownToken(_)));
    }
}
