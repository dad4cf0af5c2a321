//! DDL compiler tests: CREATE TABLE, columns, ALTER, DROP.

use crate::ast::statements::{AlterAction, KeyKind, TableChange};
use crate::ast::*;
use crate::error::SqlError;
use crate::transpiler::types::DataType;
use crate::transpiler::{Dialect, ToSql};
use pretty_assertions::assert_eq;

fn mysql(statement: impl Into<Statement>) -> String {
    statement.into().to_sql_with_dialect(Dialect::MySql).unwrap()
}

#[test]
fn test_create_table() {
    let stmt = CreateTable::new("users")
        .column(
            ColumnSpec::new("id", DataType::Int)
                .auto_increment()
                .primary_key(),
        )
        .column(ColumnSpec::new("name", DataType::Varchar).size(255));
    assert_eq!(
        mysql(stmt),
        "CREATE TABLE users ( id INT NOT NULL AUTO_INCREMENT PRIMARY KEY, \
         name VARCHAR(255) NOT NULL )"
    );
}

#[test]
fn test_create_table_engine_and_charset() {
    let stmt = CreateTable::new("users")
        .column(ColumnSpec::new("id", DataType::Int))
        .engine("InnoDB")
        .charset("utf8mb4");
    assert_eq!(
        mysql(stmt),
        "CREATE TABLE users ( id INT NOT NULL ) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4"
    );
}

#[test]
fn test_create_table_requires_columns() {
    let err = Statement::from(CreateTable::new("users")).to_sql().unwrap_err();
    assert!(matches!(err, SqlError::MissingAttribute { .. }));
}

#[test]
fn test_duplicate_columns_keep_last() {
    let stmt = CreateTable::new("users")
        .column(ColumnSpec::new("name", DataType::Varchar).size(100))
        .column(ColumnSpec::new("name", DataType::Text));
    assert_eq!(mysql(stmt), "CREATE TABLE users ( name TEXT NOT NULL )");
}

#[test]
fn test_column_constraint_order() {
    let spec = ColumnSpec::new("age", DataType::Int)
        .unsigned()
        .unique()
        .default_value(18)
        .after("name");
    assert_eq!(
        mysql(Statement::Column(spec)),
        "age INT NOT NULL UNIQUE UNSIGNED DEFAULT 18 AFTER name"
    );
}

#[test]
fn test_nullable_column_with_collation() {
    let spec = ColumnSpec::new("bio", DataType::Text)
        .null()
        .collate("utf8mb4", "utf8mb4_general_ci");
    assert_eq!(
        mysql(Statement::Column(spec)),
        "bio TEXT NULL CHARACTER SET utf8mb4 COLLATE utf8mb4_general_ci"
    );
}

#[test]
fn test_invisible_column() {
    let spec = ColumnSpec::new("secret", DataType::Varchar).size(50).invisible();
    assert_eq!(
        mysql(Statement::Column(spec)),
        "secret VARCHAR(50) NOT NULL INVISIBLE"
    );
}

#[test]
fn test_column_default_date_function_passthrough() {
    let spec = ColumnSpec::new("created_at", DataType::Timestamp)
        .default_value("CURRENT_TIMESTAMP");
    assert_eq!(
        mysql(Statement::Column(spec)),
        "created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP"
    );
}

#[test]
fn test_column_size_out_of_range() {
    let spec = ColumnSpec::new("name", DataType::Varchar).size(70_000);
    let err = Statement::Column(spec).to_sql().unwrap_err();
    assert!(matches!(err, SqlError::SizeOutOfRange { .. }));
}

#[test]
fn test_json_check_column() {
    let spec = ColumnSpec::new("payload", DataType::Json).check("json");
    assert_eq!(
        mysql(Statement::Column(spec)),
        "payload JSON NOT NULL CHECK (JSON_VALID(payload))"
    );
}

#[test]
fn test_json_check_absent_on_sqlite() {
    let spec = ColumnSpec::new("payload", DataType::Json).check("json");
    let sql = Statement::Column(spec)
        .to_sql_with_dialect(Dialect::Sqlite)
        .unwrap();
    assert_eq!(sql, "payload TEXT NOT NULL");
}

#[test]
fn test_alter_modify_column() {
    let stmt = Alter::table(
        "users",
        AlterAction::ModifyColumn(ColumnSpec::new("age", DataType::Int)),
    );
    assert_eq!(
        mysql(stmt),
        "ALTER TABLE users ALTER COLUMN age SET DATA TYPE INT NOT NULL"
    );
}

#[test]
fn test_alter_modify_column_unsupported_on_sqlite() {
    let stmt = Alter::table(
        "users",
        AlterAction::ModifyColumn(ColumnSpec::new("age", DataType::Int)),
    );
    let err = Statement::from(stmt)
        .to_sql_with_dialect(Dialect::Sqlite)
        .unwrap_err();
    assert!(matches!(err, SqlError::UnsupportedOnDialect { .. }));
}

#[test]
fn test_alter_renames() {
    assert_eq!(
        mysql(Alter::table("users", AlterAction::RenameTable("accounts".into()))),
        "ALTER TABLE users RENAME TO accounts"
    );
    assert_eq!(
        mysql(Alter::table(
            "users",
            AlterAction::RenameColumn {
                from: "name".into(),
                to: "full_name".into()
            }
        )),
        "ALTER TABLE users RENAME COLUMN name TO full_name"
    );
}

#[test]
fn test_alter_add_column() {
    let stmt = Alter::table(
        "users",
        AlterAction::AddColumn(ColumnSpec::new("age", DataType::Int).null()),
    );
    assert_eq!(mysql(stmt), "ALTER TABLE users ADD COLUMN age INT NULL");
}

#[test]
fn test_alter_add_foreign_key() {
    let stmt = Alter::table(
        "orders",
        AlterAction::AddForeignKey {
            column: "user_id".into(),
            references_table: "users".into(),
            references_column: "id".into(),
        },
    );
    assert_eq!(
        mysql(stmt),
        "ALTER TABLE orders ADD FOREIGN KEY (user_id) REFERENCES users (id)"
    );
}

#[test]
fn test_modify_table_batch() {
    let stmt = ModifyTable::new("users")
        .change(TableChange::RenameColumn {
            from: "a".into(),
            to: "b".into(),
        })
        .change(TableChange::DropColumn("c".into()));
    assert_eq!(
        mysql(stmt),
        "ALTER TABLE users RENAME COLUMN a TO b; ALTER TABLE users DROP COLUMN c"
    );
}

#[test]
fn test_drop_targets() {
    assert_eq!(mysql(Drop::table("users")), "DROP TABLE users");
    assert_eq!(
        mysql(Drop::column("users", "email")),
        "ALTER TABLE users DROP COLUMN email"
    );
    assert_eq!(mysql(Drop::database("app")), "DROP DATABASE app");
    assert_eq!(
        mysql(Drop::index("users", "idx_email")),
        "DROP INDEX idx_email ON users"
    );
}

#[test]
fn test_drop_keys() {
    assert_eq!(
        mysql(Drop::key("users", KeyKind::Primary, "")),
        "ALTER TABLE users DROP PRIMARY KEY"
    );
    assert_eq!(
        mysql(Drop::key("users", KeyKind::Foreign, "fk_user")),
        "ALTER TABLE users DROP FOREIGN KEY fk_user"
    );
    assert_eq!(
        mysql(Drop::key("users", KeyKind::Unique, "idx_email")),
        "ALTER TABLE users DROP INDEX idx_email"
    );
}
