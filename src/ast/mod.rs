//! Statement descriptions and condition descriptors.

pub mod column;
pub mod conditions;
pub mod statements;

pub use column::{CollationSpec, ColumnSpec, Nullability};
pub use conditions::{Combinator, Comparison, Condition, Predicate, WhereClause};
pub use statements::{
    Alter, AlterAction, AlterTarget, BindMode, CreateDatabaseOptions, CreateTable, Database,
    DatabaseOp, Delete, Direction, Drop, DropTarget, Info, InfoQuery, Insert, InsertRows,
    InsertShape, KeyKind, Limit, ModifyTable, OrderBy, Select, SelectColumn, SelectColumns,
    TableChange, Transaction, Truncate, Update,
};

use serde::{Deserialize, Serialize};

/// The closed set of statements the dispatcher understands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Statement {
    Select(Select),
    Insert(Insert),
    Update(Update),
    Delete(Delete),
    Truncate(Truncate),
    Drop(Drop),
    Alter(Alter),
    CreateTable(CreateTable),
    ModifyTable(ModifyTable),
    Transaction(Transaction),
    Database(Database),
    Info(Info),
    Column(ColumnSpec),
}

macro_rules! statement_from {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for Statement {
                fn from(value: $ty) -> Self {
                    Statement::$variant(value)
                }
            }
        )*
    };
}

statement_from! {
    Select(Select),
    Insert(Insert),
    Update(Update),
    Delete(Delete),
    Truncate(Truncate),
    Drop(Drop),
    Alter(Alter),
    CreateTable(CreateTable),
    ModifyTable(ModifyTable),
    Transaction(Transaction),
    Database(Database),
    Info(Info),
    Column(ColumnSpec),
}
