//! Typed statement descriptions, one struct per operation kind.
//!
//! These are the input format every statement compiler consumes. Required
//! attributes are constructor arguments; everything else is set through the
//! fluent builder methods and checked at compile time.

use super::column::ColumnSpec;
use super::conditions::{Combinator, Comparison, Condition, Predicate, WhereClause};
use crate::error::{SqlError, SqlResult};
use crate::transpiler::value::SqlValue;
use serde::{Deserialize, Serialize};

/// Sort direction for ORDER BY.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Asc,
    Desc,
}

/// ORDER BY clause: columns plus one direction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderBy {
    pub columns: Vec<String>,
    pub direction: Direction,
}

/// LIMIT clause: `LIMIT start_from[, count_until]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Limit {
    pub start_from: i64,
    pub count_until: Option<i64>,
}

/// One selected column with an optional alias.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectColumn {
    pub name: String,
    pub alias: Option<String>,
}

/// The column list of a SELECT.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum SelectColumns {
    #[default]
    All,
    Columns(Vec<SelectColumn>),
}

/// A SELECT statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Select {
    pub table: String,
    pub columns: SelectColumns,
    pub where_clause: WhereClause,
    pub group_by: Vec<String>,
    pub order_by: Option<OrderBy>,
    pub limit: Option<Limit>,
    pub appended: Option<String>,
}

impl Select {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            columns: SelectColumns::All,
            where_clause: WhereClause::default(),
            group_by: Vec::new(),
            order_by: None,
            limit: None,
            appended: None,
        }
    }

    pub fn all(mut self) -> Self {
        self.columns = SelectColumns::All;
        self
    }

    pub fn columns<I, S>(mut self, cols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let cols = cols
            .into_iter()
            .map(|c| SelectColumn {
                name: c.as_ref().to_string(),
                alias: None,
            })
            .collect();
        self.columns = SelectColumns::Columns(cols);
        self
    }

    pub fn column_as(mut self, name: impl AsRef<str>, alias: impl AsRef<str>) -> Self {
        let col = SelectColumn {
            name: name.as_ref().to_string(),
            alias: Some(alias.as_ref().to_string()),
        };
        if let SelectColumns::Columns(cols) = &mut self.columns {
            cols.push(col);
        } else {
            self.columns = SelectColumns::Columns(vec![col]);
        }
        self
    }

    pub fn group_by<I, S>(mut self, cols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.group_by
            .extend(cols.into_iter().map(|c| c.as_ref().to_string()));
        self
    }

    pub fn order_by<I, S>(mut self, cols: I, direction: Direction) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.order_by = Some(OrderBy {
            columns: cols.into_iter().map(|c| c.as_ref().to_string()).collect(),
            direction,
        });
        self
    }

    pub fn limit(mut self, start_from: i64, count_until: Option<i64>) -> Self {
        self.limit = Some(Limit {
            start_from,
            count_until,
        });
        self
    }

    pub fn filter(
        mut self,
        column: impl Into<String>,
        op: Comparison,
        value: impl Into<SqlValue>,
    ) -> Self {
        self.where_clause.push(Condition::new(
            column,
            Predicate::Compare {
                op,
                value: value.into(),
            },
        ));
        self
    }

    pub fn where_equal(self, column: impl Into<String>, value: impl Into<SqlValue>) -> Self {
        self.filter(column, Comparison::Equal, value)
    }

    pub fn where_not_equal(self, column: impl Into<String>, value: impl Into<SqlValue>) -> Self {
        self.filter(column, Comparison::NotEqual, value)
    }

    pub fn where_like(mut self, column: impl Into<String>, operand: impl Into<String>) -> Self {
        self.where_clause
            .push(Condition::new(column, Predicate::Like(operand.into())));
        self
    }

    pub fn where_not_null(mut self, column: impl Into<String>) -> Self {
        self.where_clause
            .push(Condition::new(column, Predicate::NotNull));
        self
    }

    pub fn where_in_between(
        mut self,
        column: impl Into<String>,
        from: impl Into<SqlValue>,
        to: impl Into<SqlValue>,
    ) -> Self {
        self.where_clause.push(Condition::new(
            column,
            Predicate::Between {
                from: from.into(),
                to: to.into(),
            },
        ));
        self
    }

    pub fn where_not(mut self, column: impl Into<String>, value: impl Into<SqlValue>) -> Self {
        self.where_clause
            .push(Condition::new(column, Predicate::Not(value.into())));
        self
    }

    pub fn where_joined(
        mut self,
        column: impl Into<String>,
        table: impl Into<String>,
        joined_column: impl Into<String>,
    ) -> Self {
        self.where_clause.push(Condition::new(
            column,
            Predicate::JoinedColumn {
                table: table.into(),
                column: joined_column.into(),
            },
        ));
        self
    }

    pub fn where_raw(mut self, clause: impl Into<String>) -> Self {
        self.where_clause.raw = Some(clause.into());
        self
    }

    pub fn and(mut self) -> Self {
        self.where_clause.combine(Combinator::And);
        self
    }

    pub fn or(mut self) -> Self {
        self.where_clause.combine(Combinator::Or);
        self
    }

    pub fn append_raw(mut self, fragment: impl Into<String>) -> Self {
        self.appended = Some(fragment.into());
        self
    }
}

/// How an INSERT spells its row data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InsertShape {
    /// `INSERT INTO t (cols) VALUES (…), (…)`
    #[default]
    Values,
    /// `INSERT INTO t SET col = value, …`
    Set,
}

/// Literal rendering vs named `:column` placeholders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BindMode {
    #[default]
    Literal,
    Safe,
}

/// Row data of an INSERT.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InsertRows {
    Values(Vec<Vec<SqlValue>>),
    /// `DEFAULT VALUES` sentinel.
    Default,
}

/// An INSERT statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insert {
    pub table: String,
    pub columns: Vec<String>,
    pub rows: Option<InsertRows>,
    pub shape: InsertShape,
    pub mode: BindMode,
    pub appended: Option<String>,
}

impl Insert {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            columns: Vec::new(),
            rows: None,
            shape: InsertShape::Values,
            mode: BindMode::Literal,
            appended: None,
        }
    }

    /// INSERT that renders named `:column` placeholders instead of literals.
    pub fn safe(table: impl Into<String>) -> Self {
        Self::new(table).safe_mode()
    }

    pub fn columns<I, S>(mut self, cols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.columns
            .extend(cols.into_iter().map(|c| c.as_ref().to_string()));
        self
    }

    /// Add one row of values.
    pub fn values<I, V>(mut self, row: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<SqlValue>,
    {
        let row: Vec<SqlValue> = row.into_iter().map(Into::into).collect();
        if let Some(InsertRows::Values(rows)) = &mut self.rows {
            rows.push(row);
        } else {
            self.rows = Some(InsertRows::Values(vec![row]));
        }
        self
    }

    /// Insert with every column at its default.
    pub fn default_values(mut self) -> Self {
        self.rows = Some(InsertRows::Default);
        self
    }

    /// Switch to the `SET col = value` shape.
    pub fn as_set(mut self) -> Self {
        self.shape = InsertShape::Set;
        self
    }

    pub fn safe_mode(mut self) -> Self {
        self.mode = BindMode::Safe;
        self
    }

    pub fn append_raw(mut self, fragment: impl Into<String>) -> Self {
        self.appended = Some(fragment.into());
        self
    }

    /// The `:column` → value map implied by safe mode, taken from the first
    /// row. The execution collaborator binds these before running the SQL.
    pub fn bindings(&self) -> SqlResult<Vec<(String, SqlValue)>> {
        let Some(InsertRows::Values(rows)) = &self.rows else {
            return Err(SqlError::missing("insert", "values"));
        };
        let row = rows
            .first()
            .ok_or_else(|| SqlError::missing("insert", "values"))?;
        if row.len() != self.columns.len() {
            return Err(SqlError::ColumnValueMismatch {
                columns: self.columns.len(),
                values: row.len(),
            });
        }
        Ok(self
            .columns
            .iter()
            .cloned()
            .zip(row.iter().cloned())
            .collect())
    }
}

/// An UPDATE statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Update {
    pub table: String,
    pub columns: Vec<String>,
    pub values: Vec<SqlValue>,
    pub mode: BindMode,
    pub where_clause: WhereClause,
    pub appended: Option<String>,
}

impl Update {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            columns: Vec::new(),
            values: Vec::new(),
            mode: BindMode::Literal,
            where_clause: WhereClause::default(),
            appended: None,
        }
    }

    pub fn safe(table: impl Into<String>) -> Self {
        let mut update = Self::new(table);
        update.mode = BindMode::Safe;
        update
    }

    /// Add one `col = value` assignment.
    pub fn set(mut self, column: impl Into<String>, value: impl Into<SqlValue>) -> Self {
        self.columns.push(column.into());
        self.values.push(value.into());
        self
    }

    pub fn filter(
        mut self,
        column: impl Into<String>,
        op: Comparison,
        value: impl Into<SqlValue>,
    ) -> Self {
        self.where_clause.push(Condition::new(
            column,
            Predicate::Compare {
                op,
                value: value.into(),
            },
        ));
        self
    }

    pub fn where_equal(self, column: impl Into<String>, value: impl Into<SqlValue>) -> Self {
        self.filter(column, Comparison::Equal, value)
    }

    pub fn where_raw(mut self, clause: impl Into<String>) -> Self {
        self.where_clause.raw = Some(clause.into());
        self
    }

    pub fn and(mut self) -> Self {
        self.where_clause.combine(Combinator::And);
        self
    }

    pub fn or(mut self) -> Self {
        self.where_clause.combine(Combinator::Or);
        self
    }

    pub fn append_raw(mut self, fragment: impl Into<String>) -> Self {
        self.appended = Some(fragment.into());
        self
    }

    /// The `:column` → value map implied by safe mode.
    pub fn bindings(&self) -> SqlResult<Vec<(String, SqlValue)>> {
        if self.columns.len() != self.values.len() {
            return Err(SqlError::ColumnValueMismatch {
                columns: self.columns.len(),
                values: self.values.len(),
            });
        }
        Ok(self
            .columns
            .iter()
            .cloned()
            .zip(self.values.iter().cloned())
            .collect())
    }
}

/// A DELETE statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Delete {
    pub table: String,
    pub where_clause: WhereClause,
    pub appended: Option<String>,
}

impl Delete {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            where_clause: WhereClause::default(),
            appended: None,
        }
    }

    pub fn filter(
        mut self,
        column: impl Into<String>,
        op: Comparison,
        value: impl Into<SqlValue>,
    ) -> Self {
        self.where_clause.push(Condition::new(
            column,
            Predicate::Compare {
                op,
                value: value.into(),
            },
        ));
        self
    }

    pub fn where_equal(self, column: impl Into<String>, value: impl Into<SqlValue>) -> Self {
        self.filter(column, Comparison::Equal, value)
    }

    pub fn where_raw(mut self, clause: impl Into<String>) -> Self {
        self.where_clause.raw = Some(clause.into());
        self
    }

    pub fn and(mut self) -> Self {
        self.where_clause.combine(Combinator::And);
        self
    }

    pub fn or(mut self) -> Self {
        self.where_clause.combine(Combinator::Or);
        self
    }

    pub fn append_raw(mut self, fragment: impl Into<String>) -> Self {
        self.appended = Some(fragment.into());
        self
    }
}

/// A TRUNCATE statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Truncate {
    pub table: String,
}

impl Truncate {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
        }
    }
}

/// Which kind of table key a drop targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyKind {
    Primary,
    Foreign,
    Unique,
}

/// What a DROP statement removes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DropTarget {
    Table(String),
    Column { table: String, column: String },
    Database(String),
    Index { table: String, index: String },
    Key {
        table: String,
        kind: KeyKind,
        name: String,
    },
}

/// A DROP statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Drop {
    pub target: DropTarget,
}

impl Drop {
    pub fn table(name: impl Into<String>) -> Self {
        Self {
            target: DropTarget::Table(name.into()),
        }
    }

    pub fn column(table: impl Into<String>, column: impl Into<String>) -> Self {
        Self {
            target: DropTarget::Column {
                table: table.into(),
                column: column.into(),
            },
        }
    }

    pub fn database(name: impl Into<String>) -> Self {
        Self {
            target: DropTarget::Database(name.into()),
        }
    }

    pub fn index(table: impl Into<String>, index: impl Into<String>) -> Self {
        Self {
            target: DropTarget::Index {
                table: table.into(),
                index: index.into(),
            },
        }
    }

    pub fn key(table: impl Into<String>, kind: KeyKind, name: impl Into<String>) -> Self {
        Self {
            target: DropTarget::Key {
                table: table.into(),
                kind,
                name: name.into(),
            },
        }
    }
}

/// The structure an ALTER statement targets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AlterTarget {
    Database(String),
    Table(String),
}

/// What an ALTER statement does to its target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AlterAction {
    /// `ALTER COLUMN name SET DATA TYPE …`
    ModifyColumn(ColumnSpec),
    RenameDatabase(String),
    RenameTable(String),
    RenameColumn { from: String, to: String },
    AddColumn(ColumnSpec),
    AddForeignKey {
        column: String,
        references_table: String,
        references_column: String,
    },
}

/// An ALTER statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alter {
    pub target: AlterTarget,
    pub action: AlterAction,
}

impl Alter {
    pub fn table(name: impl Into<String>, action: AlterAction) -> Self {
        Self {
            target: AlterTarget::Table(name.into()),
            action,
        }
    }

    pub fn database(name: impl Into<String>, action: AlterAction) -> Self {
        Self {
            target: AlterTarget::Database(name.into()),
            action,
        }
    }
}

/// A CREATE TABLE statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTable {
    pub table: String,
    pub columns: Vec<ColumnSpec>,
    pub engine: Option<String>,
    pub charset: Option<String>,
    pub appended: Option<String>,
}

impl CreateTable {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            columns: Vec::new(),
            engine: None,
            charset: None,
            appended: None,
        }
    }

    pub fn column(mut self, column: ColumnSpec) -> Self {
        self.columns.push(column);
        self
    }

    pub fn engine(mut self, engine: impl Into<String>) -> Self {
        self.engine = Some(engine.into());
        self
    }

    pub fn charset(mut self, charset: impl Into<String>) -> Self {
        self.charset = Some(charset.into());
        self
    }

    pub fn append_raw(mut self, fragment: impl Into<String>) -> Self {
        self.appended = Some(fragment.into());
        self
    }
}

/// One step of a table-modification batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TableChange {
    RenameTable(String),
    RenameColumn { from: String, to: String },
    DropColumn(String),
    AddColumn(ColumnSpec),
    DropTable,
    DropKey { kind: KeyKind, name: String },
}

/// A batch of table modifications, compiled to `;`-joined statements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModifyTable {
    pub table: String,
    pub changes: Vec<TableChange>,
}

impl ModifyTable {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            changes: Vec::new(),
        }
    }

    pub fn change(mut self, change: TableChange) -> Self {
        self.changes.push(change);
        self
    }
}

/// Options for CREATE DATABASE; which subset renders depends on the dialect.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CreateDatabaseOptions {
    pub character_set: Option<String>,
    pub collate: Option<String>,
    pub encoding: Option<String>,
    pub lc_collate: Option<String>,
    pub lc_ctype: Option<String>,
    pub owner: Option<String>,
    pub template: Option<String>,
    pub connection_limit: Option<i64>,
}

/// What a database statement does.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DatabaseOp {
    Create(CreateDatabaseOptions),
    Drop,
    Rename(String),
    ListTables,
}

/// A database-level statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Database {
    pub name: String,
    pub operation: DatabaseOp,
}

impl Database {
    pub fn create(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            operation: DatabaseOp::Create(CreateDatabaseOptions::default()),
        }
    }

    pub fn create_with(name: impl Into<String>, options: CreateDatabaseOptions) -> Self {
        Self {
            name: name.into(),
            operation: DatabaseOp::Create(options),
        }
    }

    pub fn drop(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            operation: DatabaseOp::Drop,
        }
    }

    pub fn rename(name: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            operation: DatabaseOp::Rename(to.into()),
        }
    }

    pub fn list_tables(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            operation: DatabaseOp::ListTables,
        }
    }
}

/// Introspection queries, resolved per dialect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InfoQuery {
    DatabaseName,
    ListDatabases,
    ListTables,
    ListColumns { table: String },
    TableSchema { table: String },
    TableIndexes { table: String },
    TableExists { table: String },
}

/// An introspection statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Info {
    pub query: InfoQuery,
}

impl Info {
    pub fn new(query: InfoQuery) -> Self {
        Self { query }
    }
}

/// A transaction wrapping other statements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub records: Vec<super::Statement>,
}

impl Transaction {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    pub fn record(mut self, statement: impl Into<super::Statement>) -> Self {
        self.records.push(statement.into());
        self
    }
}

impl Default for Transaction {
    fn default() -> Self {
        Self::new()
    }
}
