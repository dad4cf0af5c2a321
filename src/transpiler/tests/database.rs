//! Database-statement and introspection tests.

use crate::ast::statements::{CreateDatabaseOptions, InfoQuery};
use crate::ast::*;
use crate::error::SqlError;
use crate::transpiler::{Dialect, ToSql};
use pretty_assertions::assert_eq;

fn info(query: InfoQuery, dialect: Dialect) -> String {
    Statement::from(Info::new(query))
        .to_sql_with_dialect(dialect)
        .unwrap()
}

#[test]
fn test_create_database() {
    let sql = Statement::from(Database::create("app")).to_sql().unwrap();
    assert_eq!(sql, "CREATE DATABASE app");
}

#[test]
fn test_create_database_mysql_options() {
    let options = CreateDatabaseOptions {
        character_set: Some("utf8mb4".into()),
        collate: Some("utf8mb4_general_ci".into()),
        ..Default::default()
    };
    let sql = Statement::from(Database::create_with("app", options))
        .to_sql()
        .unwrap();
    assert_eq!(
        sql,
        "CREATE DATABASE app CHARACTER SET utf8mb4 COLLATE utf8mb4_general_ci"
    );
}

#[test]
fn test_create_database_postgres_options() {
    let options = CreateDatabaseOptions {
        encoding: Some("UTF8".into()),
        owner: Some("admin".into()),
        connection_limit: Some(20),
        ..Default::default()
    };
    let sql = Statement::from(Database::create_with("app", options))
        .to_sql_with_dialect(Dialect::Postgres)
        .unwrap();
    assert_eq!(
        sql,
        "CREATE DATABASE app ENCODING = UTF8 OWNER = admin CONNECTION LIMIT = 20"
    );
}

#[test]
fn test_create_database_unsupported_on_sqlite() {
    let err = Statement::from(Database::create("app"))
        .to_sql_with_dialect(Dialect::Sqlite)
        .unwrap_err();
    assert!(matches!(err, SqlError::UnsupportedOnDialect { .. }));
}

#[test]
fn test_drop_database() {
    assert_eq!(
        Statement::from(Database::drop("app")).to_sql().unwrap(),
        "DROP DATABASE app"
    );
    assert_eq!(
        Statement::from(Database::drop("app"))
            .to_sql_with_dialect(Dialect::Postgres)
            .unwrap(),
        "DROP DATABASE app"
    );
    assert!(Statement::from(Database::drop("app"))
        .to_sql_with_dialect(Dialect::Sqlite)
        .is_err());
}

#[test]
fn test_rename_database_mysql_only() {
    let sql = Statement::from(Database::rename("app", "app_v2"))
        .to_sql()
        .unwrap();
    assert_eq!(sql, "ALTER DATABASE app RENAME TO app_v2");

    for dialect in [Dialect::Postgres, Dialect::Sqlite] {
        let err = Statement::from(Database::rename("app", "app_v2"))
            .to_sql_with_dialect(dialect)
            .unwrap_err();
        assert!(matches!(err, SqlError::UnsupportedOnDialect { .. }));
    }
}

#[test]
fn test_list_tables_per_dialect() {
    assert_eq!(info(InfoQuery::ListTables, Dialect::MySql), "SHOW TABLES");
    assert_eq!(
        info(InfoQuery::ListTables, Dialect::Postgres),
        "SELECT table_name FROM information_schema.tables \
         WHERE table_schema = 'public' AND table_type = 'BASE TABLE'"
    );
    assert_eq!(
        info(InfoQuery::ListTables, Dialect::Sqlite),
        "SELECT name FROM sqlite_master WHERE type = 'table'"
    );
}

#[test]
fn test_database_list_tables_delegates() {
    let sql = Statement::from(Database::list_tables("app"))
        .to_sql()
        .unwrap();
    assert_eq!(sql, "SHOW TABLES");
}

#[test]
fn test_database_name_per_dialect() {
    assert_eq!(info(InfoQuery::DatabaseName, Dialect::MySql), "SELECT DATABASE()");
    assert_eq!(
        info(InfoQuery::DatabaseName, Dialect::Postgres),
        "SELECT current_database()"
    );
    assert_eq!(
        info(InfoQuery::DatabaseName, Dialect::Sqlite),
        "PRAGMA database_list"
    );
}

#[test]
fn test_list_databases() {
    assert_eq!(info(InfoQuery::ListDatabases, Dialect::MySql), "SHOW DATABASES");
    assert_eq!(
        info(InfoQuery::ListDatabases, Dialect::Postgres),
        "SELECT datname FROM pg_database"
    );
    assert!(Statement::from(Info::new(InfoQuery::ListDatabases))
        .to_sql_with_dialect(Dialect::Sqlite)
        .is_err());
}

#[test]
fn test_list_columns_per_dialect() {
    let query = || InfoQuery::ListColumns {
        table: "users".into(),
    };
    assert_eq!(info(query(), Dialect::MySql), "DESCRIBE users");
    assert_eq!(
        info(query(), Dialect::Postgres),
        "SELECT column_name FROM information_schema.columns WHERE table_name = 'users'"
    );
    assert_eq!(info(query(), Dialect::Sqlite), "PRAGMA table_info(users)");
}

#[test]
fn test_table_schema_per_dialect() {
    let query = || InfoQuery::TableSchema {
        table: "users".into(),
    };
    assert_eq!(info(query(), Dialect::MySql), "SHOW CREATE TABLE users");
    assert_eq!(
        info(query(), Dialect::Sqlite),
        "SELECT sql FROM sqlite_master WHERE type = 'table' AND name = 'users'"
    );
}

#[test]
fn test_table_indexes_per_dialect() {
    let query = || InfoQuery::TableIndexes {
        table: "users".into(),
    };
    assert_eq!(info(query(), Dialect::MySql), "SHOW INDEX FROM users");
    assert_eq!(
        info(query(), Dialect::Postgres),
        "SELECT indexname FROM pg_indexes WHERE tablename = 'users'"
    );
    assert_eq!(info(query(), Dialect::Sqlite), "PRAGMA index_list(users)");
}

#[test]
fn test_table_exists_per_dialect() {
    let query = || InfoQuery::TableExists {
        table: "users".into(),
    };
    assert_eq!(info(query(), Dialect::MySql), "SHOW TABLES LIKE 'users'");
    assert_eq!(
        info(query(), Dialect::Postgres),
        "SELECT EXISTS (SELECT 1 FROM information_schema.tables WHERE table_name = 'users')"
    );
    assert_eq!(
        info(query(), Dialect::Sqlite),
        "SELECT name FROM sqlite_master WHERE type = 'table' AND name = 'users'"
    );
}
