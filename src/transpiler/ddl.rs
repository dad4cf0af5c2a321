//! DDL statement compilers: CREATE TABLE, column definitions, ALTER,
//! table-modification batches, DROP and TRUNCATE.

use super::conditions::build_check;
use super::dialect::Dialect;
use super::syntax::{Command, KeyConstraint, Spacing};
use super::validate::validate_size;
use crate::ast::column::{ColumnSpec, Nullability};
use crate::ast::statements::{
    Alter, AlterAction, AlterTarget, CreateTable, Drop, DropTarget, KeyKind, ModifyTable,
    TableChange, Truncate,
};
use crate::error::{SqlError, SqlResult};

/// Compile one column definition.
///
/// Constraint order is fixed: auto-increment, key (primary/unique),
/// unsigned, collation, default, visibility, check, position hint.
pub fn build_column(spec: &ColumnSpec, dialect: Dialect) -> SqlResult<String> {
    let mut parts: Vec<String> = vec![spec.name.clone()];

    let mut type_part = String::new();
    if spec.with_set_keyword {
        type_part.push_str(&Command::Set.render(dialect, Spacing::Right));
    }
    if spec.spell_out_data_type {
        type_part.push_str(&Command::DataType.render(dialect, Spacing::Right));
    }
    type_part.push_str(spec.data_type.keyword(dialect));
    if let Some(size) = spec.size {
        validate_size(spec.data_type, size, dialect)?;
        type_part.push_str(&format!("({size})"));
    }
    parts.push(type_part);

    parts.push(
        match spec.nullability {
            Nullability::NotNull => Command::NotNull,
            Nullability::Null => Command::Null,
        }
        .render(dialect, Spacing::None),
    );

    if spec.auto_increment {
        parts.push(KeyConstraint::AutoIncrement.render(dialect, Spacing::None));
    }
    if spec.primary_key {
        parts.push(KeyConstraint::Primary.render(dialect, Spacing::None));
    }
    if spec.unique {
        parts.push(KeyConstraint::Unique.render(dialect, Spacing::None));
    }
    if spec.unsigned {
        parts.push(Command::Unsigned.render(dialect, Spacing::None));
    }
    if let Some(collation) = &spec.collation {
        if let Some(rendered) = collation_clause(collation, dialect) {
            parts.push(rendered);
        }
    }
    if let Some(default) = &spec.default {
        parts.push(format!(
            "{}{}",
            Command::Default.render(dialect, Spacing::Right),
            default.encode()?
        ));
    }
    if !spec.visible {
        parts.push(Command::Invisible.render(dialect, Spacing::None));
    }
    if !spec.checks.is_empty() {
        let check = build_check(
            &spec.name,
            &spec.checks,
            &spec.check_combinators,
            dialect,
        )?;
        if !check.is_empty() {
            parts.push(format!(
                "{}({check})",
                Command::Check.render(dialect, Spacing::Right)
            ));
        }
    }
    if let Some(after) = &spec.after {
        parts.push(format!(
            "{}{after}",
            Command::After.render(dialect, Spacing::Right)
        ));
    }

    Ok(parts.join(" "))
}

fn collation_clause(
    collation: &crate::ast::column::CollationSpec,
    dialect: Dialect,
) -> Option<String> {
    match dialect {
        Dialect::MySql => {
            let mut clause = format!(
                "{}{}{}",
                Command::Character.render(dialect, Spacing::Right),
                Command::Set.render(dialect, Spacing::Right),
                collation.charset
            );
            if let Some(collate) = &collation.collate {
                clause.push_str(&format!(
                    "{}{collate}",
                    Command::Collate.render(dialect, Spacing::Both)
                ));
            }
            Some(clause)
        }
        Dialect::Postgres => Some(format!(
            "{}{}{}",
            Command::Character.render(dialect, Spacing::Right),
            Command::Set.render(dialect, Spacing::Right),
            collation.charset
        )),
        Dialect::Sqlite => None,
    }
}

/// Generate CREATE TABLE SQL.
pub fn build_create_table(stmt: &CreateTable, dialect: Dialect) -> SqlResult<String> {
    if stmt.columns.is_empty() {
        return Err(SqlError::missing("table", "cols"));
    }

    let columns = dedupe_columns(&stmt.columns);
    let rendered: SqlResult<Vec<String>> = columns
        .iter()
        .map(|col| build_column(col, dialect))
        .collect();

    let mut sql = format!(
        "{}{} ( {} )",
        Command::CreateTable.render(dialect, Spacing::Right),
        stmt.table,
        rendered?.join(",\n"),
    );

    // Storage options only exist on MySQL.
    if dialect.supports_storage_engine() {
        if let Some(engine) = &stmt.engine {
            sql.push_str(&format!(
                " {}{engine}",
                Command::Engine.render(dialect, Spacing::None)
            ));
        }
        if let Some(charset) = &stmt.charset {
            sql.push_str(&format!(
                " {}={charset}",
                Command::DefaultCharset.render(dialect, Spacing::None)
            ));
        }
    }

    Ok(sql)
}

/// Duplicate column names keep the last definition.
fn dedupe_columns(columns: &[ColumnSpec]) -> Vec<ColumnSpec> {
    let mut result: Vec<ColumnSpec> = Vec::with_capacity(columns.len());
    for col in columns {
        if let Some(existing) = result.iter_mut().find(|c| c.name == col.name) {
            *existing = col.clone();
        } else {
            result.push(col.clone());
        }
    }
    result
}

/// Generate ALTER SQL.
pub fn build_alter(stmt: &Alter, dialect: Dialect) -> SqlResult<String> {
    match &stmt.action {
        AlterAction::ModifyColumn(spec) => {
            if dialect == Dialect::Sqlite {
                return Err(SqlError::unsupported("alter column type", dialect));
            }
            let table = table_target(stmt)?;
            let spec = spec
                .clone()
                .with_set_keyword()
                .spell_out_data_type();
            Ok(format!(
                "{}{table}{}{}{}",
                Command::AlterTable.render(dialect, Spacing::Right),
                Command::Alter.render(dialect, Spacing::Both),
                Command::Column.render(dialect, Spacing::Right),
                build_column(&spec, dialect)?
            ))
        }
        AlterAction::RenameDatabase(new_name) => {
            let AlterTarget::Database(db) = &stmt.target else {
                return Err(SqlError::missing("alter", "database"));
            };
            if dialect != Dialect::MySql {
                return Err(SqlError::unsupported("rename database", dialect));
            }
            Ok(format!(
                "{}{db}{}{}{new_name}",
                Command::AlterDatabase.render(dialect, Spacing::Right),
                Command::Rename.render(dialect, Spacing::Both),
                Command::To.render(dialect, Spacing::Right)
            ))
        }
        AlterAction::RenameTable(new_name) => {
            let table = table_target(stmt)?;
            Ok(format!(
                "{}{table}{}{}{new_name}",
                Command::AlterTable.render(dialect, Spacing::Right),
                Command::Rename.render(dialect, Spacing::Both),
                Command::To.render(dialect, Spacing::Right)
            ))
        }
        AlterAction::RenameColumn { from, to } => {
            let table = table_target(stmt)?;
            Ok(format!(
                "{}{table}{}{}{from}{}{to}",
                Command::AlterTable.render(dialect, Spacing::Right),
                Command::Rename.render(dialect, Spacing::Both),
                Command::Column.render(dialect, Spacing::Right),
                Command::To.render(dialect, Spacing::Both),
            ))
        }
        AlterAction::AddColumn(spec) => {
            let table = table_target(stmt)?;
            Ok(format!(
                "{}{table}{}{}{}",
                Command::AlterTable.render(dialect, Spacing::Right),
                Command::Add.render(dialect, Spacing::Both),
                Command::Column.render(dialect, Spacing::Right),
                build_column(spec, dialect)?
            ))
        }
        AlterAction::AddForeignKey {
            column,
            references_table,
            references_column,
        } => {
            let table = table_target(stmt)?;
            Ok(format!(
                "{}{table}{}{}({column}){}{references_table} ({references_column})",
                Command::AlterTable.render(dialect, Spacing::Right),
                Command::Add.render(dialect, Spacing::Both),
                Command::ForeignKey.render(dialect, Spacing::Right),
                Command::References.render(dialect, Spacing::Both),
            ))
        }
    }
}

fn table_target(stmt: &Alter) -> SqlResult<&str> {
    match &stmt.target {
        AlterTarget::Table(name) => Ok(name),
        AlterTarget::Database(_) => Err(SqlError::missing("alter", "table_name")),
    }
}

/// Generate the `;`-joined statement batch for a table modification.
pub fn build_modify_table(stmt: &ModifyTable, dialect: Dialect) -> SqlResult<String> {
    if stmt.changes.is_empty() {
        return Err(SqlError::missing("table", "operation"));
    }
    let mut statements = Vec::with_capacity(stmt.changes.len());
    for change in &stmt.changes {
        let sql = match change {
            TableChange::RenameTable(to) => build_alter(
                &Alter::table(&stmt.table, AlterAction::RenameTable(to.clone())),
                dialect,
            )?,
            TableChange::RenameColumn { from, to } => build_alter(
                &Alter::table(
                    &stmt.table,
                    AlterAction::RenameColumn {
                        from: from.clone(),
                        to: to.clone(),
                    },
                ),
                dialect,
            )?,
            TableChange::DropColumn(column) => {
                build_drop(&Drop::column(&stmt.table, column), dialect)?
            }
            TableChange::AddColumn(spec) => build_alter(
                &Alter::table(&stmt.table, AlterAction::AddColumn(spec.clone())),
                dialect,
            )?,
            TableChange::DropTable => build_drop(&Drop::table(&stmt.table), dialect)?,
            TableChange::DropKey { kind, name } => {
                build_drop(&Drop::key(&stmt.table, *kind, name), dialect)?
            }
        };
        statements.push(sql);
    }
    Ok(statements.join("; "))
}

/// Generate DROP SQL.
pub fn build_drop(stmt: &Drop, dialect: Dialect) -> SqlResult<String> {
    match &stmt.target {
        DropTarget::Table(table) => Ok(format!(
            "{}{}{table}",
            Command::Drop.render(dialect, Spacing::Right),
            Command::Table.render(dialect, Spacing::Right)
        )),
        DropTarget::Database(database) => Ok(format!(
            "{}{database}",
            Command::DropDatabase.render(dialect, Spacing::Right)
        )),
        DropTarget::Column { table, column } => Ok(format!(
            "{}{table}{}{}{column}",
            Command::AlterTable.render(dialect, Spacing::Right),
            Command::Drop.render(dialect, Spacing::Both),
            Command::Column.render(dialect, Spacing::Right)
        )),
        DropTarget::Index { table, index } => match dialect {
            Dialect::MySql => Ok(format!(
                "{}{}{index}{}{table}",
                Command::Drop.render(dialect, Spacing::Right),
                Command::Index.render(dialect, Spacing::Right),
                Command::On.render(dialect, Spacing::Both)
            )),
            // The ON clause is MySQL-only; index names are schema-global
            // elsewhere.
            Dialect::Postgres | Dialect::Sqlite => Ok(format!(
                "{}{}{index}",
                Command::Drop.render(dialect, Spacing::Right),
                Command::Index.render(dialect, Spacing::Right)
            )),
        },
        DropTarget::Key { table, kind, name } => build_drop_key(table, *kind, name, dialect),
    }
}

fn build_drop_key(
    table: &str,
    kind: KeyKind,
    name: &str,
    dialect: Dialect,
) -> SqlResult<String> {
    if dialect == Dialect::Sqlite {
        return Err(SqlError::unsupported("drop key", dialect));
    }

    let head = format!(
        "{}{table}{}",
        Command::AlterTable.render(dialect, Spacing::Right),
        Command::Drop.render(dialect, Spacing::Both)
    );

    let tail = match (dialect, kind) {
        (Dialect::MySql, KeyKind::Primary) => {
            KeyConstraint::Primary.render(dialect, Spacing::None)
        }
        (Dialect::MySql, KeyKind::Foreign) => format!(
            "{}{name}",
            KeyConstraint::Foreign.render(dialect, Spacing::Right)
        ),
        (Dialect::MySql, KeyKind::Unique) => format!(
            "{}{name}",
            Command::Index.render(dialect, Spacing::Right)
        ),
        // Postgres drops every key kind through its constraint name.
        (Dialect::Postgres, _) => format!(
            "{}{name}",
            Command::Constraint.render(dialect, Spacing::Right)
        ),
        (Dialect::Sqlite, _) => unreachable!("checked above"),
    };

    Ok(format!("{head}{tail}"))
}

/// Generate TRUNCATE SQL. SQLite has no TRUNCATE statement and falls back
/// to an unfiltered DELETE.
pub fn build_truncate(stmt: &Truncate, dialect: Dialect) -> SqlResult<String> {
    match dialect {
        Dialect::MySql | Dialect::Postgres => Ok(format!(
            "{}{}",
            Command::Truncate.render(dialect, Spacing::Right),
            stmt.table
        )),
        Dialect::Sqlite => Ok(format!(
            "{}{}{}",
            Command::Delete.render(dialect, Spacing::Right),
            Command::From.render(dialect, Spacing::Right),
            stmt.table
        )),
    }
}
