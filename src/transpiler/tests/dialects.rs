//! Dialect branching tests (keyword resolution, fallbacks, suppression).

use crate::ast::*;
use crate::transpiler::types::DataType;
use crate::transpiler::{Dialect, ToSql};
use pretty_assertions::assert_eq;

#[test]
fn test_auto_increment_keyword_per_dialect() {
    let spec = || ColumnSpec::new("id", DataType::Int).auto_increment().primary_key();

    assert_eq!(
        Statement::Column(spec()).to_sql_with_dialect(Dialect::MySql).unwrap(),
        "id INT NOT NULL AUTO_INCREMENT PRIMARY KEY"
    );
    assert_eq!(
        Statement::Column(spec()).to_sql_with_dialect(Dialect::Sqlite).unwrap(),
        "id INTEGER NOT NULL AUTOINCREMENT PRIMARY KEY"
    );
    assert_eq!(
        Statement::Column(spec()).to_sql_with_dialect(Dialect::Postgres).unwrap(),
        "id INTEGER NOT NULL SERIAL PRIMARY KEY"
    );
}

#[test]
fn test_storage_options_suppressed_off_mysql() {
    let stmt = || {
        CreateTable::new("users")
            .column(ColumnSpec::new("id", DataType::Int))
            .engine("InnoDB")
            .charset("utf8mb4")
    };

    let postgres = Statement::from(stmt())
        .to_sql_with_dialect(Dialect::Postgres)
        .unwrap();
    assert_eq!(postgres, "CREATE TABLE users ( id INTEGER NOT NULL )");

    let sqlite = Statement::from(stmt())
        .to_sql_with_dialect(Dialect::Sqlite)
        .unwrap();
    assert_eq!(sqlite, "CREATE TABLE users ( id INTEGER NOT NULL )");
}

#[test]
fn test_collation_per_dialect() {
    let spec = || ColumnSpec::new("bio", DataType::Text).collate("utf8", "utf8_general_ci");

    assert_eq!(
        Statement::Column(spec()).to_sql_with_dialect(Dialect::MySql).unwrap(),
        "bio TEXT NOT NULL CHARACTER SET utf8 COLLATE utf8_general_ci"
    );
    assert_eq!(
        Statement::Column(spec()).to_sql_with_dialect(Dialect::Postgres).unwrap(),
        "bio TEXT NOT NULL CHARACTER SET utf8"
    );
    assert_eq!(
        Statement::Column(spec()).to_sql_with_dialect(Dialect::Sqlite).unwrap(),
        "bio TEXT NOT NULL"
    );
}

#[test]
fn test_truncate_falls_back_to_delete_on_sqlite() {
    let sql = Statement::from(Truncate::new("logs"))
        .to_sql_with_dialect(Dialect::Sqlite)
        .unwrap();
    assert_eq!(sql, "DELETE FROM logs");

    let sql = Statement::from(Truncate::new("logs"))
        .to_sql_with_dialect(Dialect::Postgres)
        .unwrap();
    assert_eq!(sql, "TRUNCATE logs");
}

#[test]
fn test_drop_index_form_per_dialect() {
    let mysql = Statement::from(Drop::index("users", "idx"))
        .to_sql_with_dialect(Dialect::MySql)
        .unwrap();
    assert_eq!(mysql, "DROP INDEX idx ON users");

    let postgres = Statement::from(Drop::index("users", "idx"))
        .to_sql_with_dialect(Dialect::Postgres)
        .unwrap();
    assert_eq!(postgres, "DROP INDEX idx");
}

#[test]
fn test_drop_key_per_dialect() {
    use crate::ast::statements::KeyKind;

    let postgres = Statement::from(Drop::key("users", KeyKind::Unique, "users_email_key"))
        .to_sql_with_dialect(Dialect::Postgres)
        .unwrap();
    assert_eq!(postgres, "ALTER TABLE users DROP CONSTRAINT users_email_key");

    let err = Statement::from(Drop::key("users", KeyKind::Primary, ""))
        .to_sql_with_dialect(Dialect::Sqlite)
        .unwrap_err();
    assert!(matches!(
        err,
        crate::error::SqlError::UnsupportedOnDialect { .. }
    ));
}

#[test]
fn test_data_types_per_dialect() {
    let spec = |ty| ColumnSpec::new("c", ty).null();

    assert_eq!(
        Statement::Column(spec(DataType::Json)).to_sql_with_dialect(Dialect::Postgres).unwrap(),
        "c JSONB NULL"
    );
    assert_eq!(
        Statement::Column(spec(DataType::Json)).to_sql_with_dialect(Dialect::Sqlite).unwrap(),
        "c TEXT NULL"
    );
    assert_eq!(
        Statement::Column(spec(DataType::Double)).to_sql_with_dialect(Dialect::Postgres).unwrap(),
        "c DOUBLE PRECISION NULL"
    );
    assert_eq!(
        Statement::Column(spec(DataType::Blob)).to_sql_with_dialect(Dialect::Postgres).unwrap(),
        "c BYTEA NULL"
    );
}

#[test]
fn test_same_statement_every_dialect() {
    // Plain DML compiles identically on every dialect.
    let stmt = Select::new("users").columns(["id"]).where_equal("id", 5);
    for dialect in Dialect::all() {
        assert_eq!(
            Statement::from(stmt.clone()).to_sql_with_dialect(dialect).unwrap(),
            "SELECT id FROM users WHERE id = 5"
        );
    }
}
