//! Database-level statements and introspection queries.
//!
//! Introspection resolves per dialect as data: one match per query kind,
//! building structured SELECTs wherever the dialect exposes its catalog
//! through ordinary tables.

use super::dialect::Dialect;
use super::syntax::{Command, Spacing};
use crate::ast::statements::{Alter, AlterAction, Database, DatabaseOp, InfoQuery, Select};
use crate::ast::Statement;
use crate::error::{SqlError, SqlResult};

/// Generate SQL for a database-level statement.
pub fn build_database(stmt: &Database, dialect: Dialect) -> SqlResult<String> {
    match &stmt.operation {
        DatabaseOp::Create(options) => build_create(stmt, options, dialect),
        DatabaseOp::Drop => match dialect {
            Dialect::MySql | Dialect::Postgres => Ok(format!(
                "{}{}",
                Command::DropDatabase.render(dialect, Spacing::Right),
                stmt.name
            )),
            Dialect::Sqlite => Err(SqlError::unsupported("drop database", dialect)),
        },
        DatabaseOp::Rename(new_name) => super::ddl::build_alter(
            &Alter::database(&stmt.name, AlterAction::RenameDatabase(new_name.clone())),
            dialect,
        ),
        DatabaseOp::ListTables => build_info(&InfoQuery::ListTables, dialect),
    }
}

fn build_create(
    stmt: &Database,
    options: &crate::ast::statements::CreateDatabaseOptions,
    dialect: Dialect,
) -> SqlResult<String> {
    let mut sql = format!(
        "{}{}",
        Command::CreateDatabase.render(dialect, Spacing::Right),
        stmt.name
    );

    match dialect {
        Dialect::MySql => {
            if let Some(charset) = &options.character_set {
                sql.push_str(&format!(
                    "{}{}{charset}",
                    Command::Character.render(dialect, Spacing::Both),
                    Command::Set.render(dialect, Spacing::Right)
                ));
            }
            if let Some(collate) = &options.collate {
                sql.push_str(&format!(
                    "{}{collate}",
                    Command::Collate.render(dialect, Spacing::Both)
                ));
            }
        }
        Dialect::Postgres => {
            let pairs: [(Command, Option<String>); 6] = [
                (Command::Encoding, options.encoding.clone()),
                (Command::LcCollate, options.lc_collate.clone()),
                (Command::LcCtype, options.lc_ctype.clone()),
                (Command::Owner, options.owner.clone()),
                (Command::Template, options.template.clone()),
                (
                    Command::ConnectionLimit,
                    options.connection_limit.map(|n| n.to_string()),
                ),
            ];
            for (command, value) in pairs {
                if let Some(value) = value {
                    sql.push_str(&format!(
                        "{}= {value}",
                        command.render(dialect, Spacing::Both)
                    ));
                }
            }
        }
        Dialect::Sqlite => {
            return Err(SqlError::unsupported("create database", dialect));
        }
    }

    Ok(sql)
}

/// Generate the introspection SQL for one query kind.
pub fn build_info(query: &InfoQuery, dialect: Dialect) -> SqlResult<String> {
    match query {
        InfoQuery::DatabaseName => Ok(match dialect {
            Dialect::MySql => format!(
                "{}{}()",
                Command::Select.render(dialect, Spacing::Right),
                Command::Database.render(dialect, Spacing::None)
            ),
            Dialect::Postgres => format!(
                "{}current_database()",
                Command::Select.render(dialect, Spacing::Right)
            ),
            Dialect::Sqlite => format!(
                "{}database_list",
                Command::Pragma.render(dialect, Spacing::Right)
            ),
        }),
        InfoQuery::ListDatabases => match dialect {
            Dialect::MySql => Ok(format!(
                "{}{}",
                Command::Show.render(dialect, Spacing::Right),
                Command::Databases.render(dialect, Spacing::None)
            )),
            Dialect::Postgres => {
                compile_select(Select::new("pg_database").columns(["datname"]), dialect)
            }
            Dialect::Sqlite => Err(SqlError::unsupported("list databases", dialect)),
        },
        InfoQuery::ListTables => match dialect {
            Dialect::MySql => Ok(format!(
                "{}{}",
                Command::Show.render(dialect, Spacing::Right),
                Command::Tables.render(dialect, Spacing::None)
            )),
            Dialect::Postgres => compile_select(
                Select::new("information_schema.tables")
                    .columns(["table_name"])
                    .where_equal("table_schema", "public")
                    .where_equal("table_type", "BASE TABLE"),
                dialect,
            ),
            Dialect::Sqlite => compile_select(
                Select::new("sqlite_master")
                    .columns(["name"])
                    .where_equal("type", "table"),
                dialect,
            ),
        },
        InfoQuery::ListColumns { table } => match dialect {
            Dialect::MySql => Ok(format!(
                "{}{table}",
                Command::Describe.render(dialect, Spacing::Right)
            )),
            Dialect::Postgres => compile_select(
                Select::new("information_schema.columns")
                    .columns(["column_name"])
                    .where_equal("table_name", table.as_str()),
                dialect,
            ),
            Dialect::Sqlite => Ok(format!(
                "{}table_info({table})",
                Command::Pragma.render(dialect, Spacing::Right)
            )),
        },
        InfoQuery::TableSchema { table } => match dialect {
            Dialect::MySql => Ok(format!(
                "{}{}{}{table}",
                Command::Show.render(dialect, Spacing::Right),
                Command::Create.render(dialect, Spacing::Right),
                Command::Table.render(dialect, Spacing::Right)
            )),
            Dialect::Postgres => compile_select(
                Select::new("information_schema.columns")
                    .columns(["column_name", "data_type", "character_maximum_length"])
                    .where_equal("table_name", table.as_str()),
                dialect,
            ),
            Dialect::Sqlite => compile_select(
                Select::new("sqlite_master")
                    .columns(["sql"])
                    .where_equal("type", "table")
                    .where_equal("name", table.as_str()),
                dialect,
            ),
        },
        InfoQuery::TableIndexes { table } => match dialect {
            Dialect::MySql => Ok(format!(
                "{}{}{}{table}",
                Command::Show.render(dialect, Spacing::Right),
                Command::Index.render(dialect, Spacing::Right),
                Command::From.render(dialect, Spacing::Right)
            )),
            Dialect::Postgres => compile_select(
                Select::new("pg_indexes")
                    .columns(["indexname"])
                    .where_equal("tablename", table.as_str()),
                dialect,
            ),
            Dialect::Sqlite => Ok(format!(
                "{}index_list({table})",
                Command::Pragma.render(dialect, Spacing::Right)
            )),
        },
        InfoQuery::TableExists { table } => match dialect {
            Dialect::MySql => Ok(format!(
                "{}{}{}'{table}'",
                Command::Show.render(dialect, Spacing::Right),
                Command::Tables.render(dialect, Spacing::Right),
                Command::Like.render(dialect, Spacing::Right)
            )),
            Dialect::Postgres => {
                let inner = compile_select(
                    Select::new("information_schema.tables")
                        .columns(["1"])
                        .where_equal("table_name", table.as_str()),
                    dialect,
                )?;
                Ok(format!(
                    "{}{}({inner})",
                    Command::Select.render(dialect, Spacing::Right),
                    Command::Exists.render(dialect, Spacing::Right)
                ))
            }
            Dialect::Sqlite => compile_select(
                Select::new("sqlite_master")
                    .columns(["name"])
                    .where_equal("type", "table")
                    .where_equal("name", table.as_str()),
                dialect,
            ),
        },
    }
}

fn compile_select(select: Select, dialect: Dialect) -> SqlResult<String> {
    super::compile(&Statement::Select(select), dialect)
}
