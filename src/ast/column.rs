//! Column specifications consumed by the table compilers.

use super::conditions::Combinator;
use crate::transpiler::types::DataType;
use crate::transpiler::value::SqlValue;
use serde::{Deserialize, Serialize};

/// Whether a column admits NULL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Nullability {
    #[default]
    NotNull,
    Null,
}

/// Character set / collation pair for a column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollationSpec {
    pub charset: String,
    pub collate: Option<String>,
}

/// One column of a table: name, data type, size, constraints and check
/// expressions, in the shape the DDL compilers read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSpec {
    pub name: String,
    pub data_type: DataType,
    pub size: Option<i64>,
    pub nullability: Nullability,
    pub auto_increment: bool,
    pub primary_key: bool,
    pub unique: bool,
    pub unsigned: bool,
    pub collation: Option<CollationSpec>,
    pub default: Option<SqlValue>,
    pub visible: bool,
    pub checks: Vec<String>,
    pub check_combinators: Vec<Combinator>,
    /// `AFTER other_column` position hint.
    pub after: Option<String>,
    /// Render `SET` between the name and the type (ALTER COLUMN form).
    pub with_set_keyword: bool,
    /// Render the `DATA TYPE` prefix before the type keyword.
    pub spell_out_data_type: bool,
}

impl ColumnSpec {
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
            size: None,
            nullability: Nullability::NotNull,
            auto_increment: false,
            primary_key: false,
            unique: false,
            unsigned: false,
            collation: None,
            default: None,
            visible: true,
            checks: Vec::new(),
            check_combinators: Vec::new(),
            after: None,
            with_set_keyword: false,
            spell_out_data_type: false,
        }
    }

    pub fn size(mut self, size: i64) -> Self {
        self.size = Some(size);
        self
    }

    pub fn null(mut self) -> Self {
        self.nullability = Nullability::Null;
        self
    }

    pub fn not_null(mut self) -> Self {
        self.nullability = Nullability::NotNull;
        self
    }

    pub fn auto_increment(mut self) -> Self {
        self.auto_increment = true;
        self
    }

    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    pub fn unsigned(mut self) -> Self {
        self.unsigned = true;
        self
    }

    pub fn charset(mut self, charset: impl Into<String>) -> Self {
        self.collation = Some(CollationSpec {
            charset: charset.into(),
            collate: None,
        });
        self
    }

    pub fn collate(mut self, charset: impl Into<String>, collate: impl Into<String>) -> Self {
        self.collation = Some(CollationSpec {
            charset: charset.into(),
            collate: Some(collate.into()),
        });
        self
    }

    pub fn default_value(mut self, value: impl Into<SqlValue>) -> Self {
        self.default = Some(value.into());
        self
    }

    pub fn invisible(mut self) -> Self {
        self.visible = false;
        self
    }

    /// Add a check expression, AND-joined to the previous one.
    pub fn check(self, expression: impl Into<String>) -> Self {
        self.push_check(expression, Combinator::And)
    }

    /// Add a check expression, OR-joined to the previous one.
    pub fn check_or(self, expression: impl Into<String>) -> Self {
        self.push_check(expression, Combinator::Or)
    }

    fn push_check(mut self, expression: impl Into<String>, combinator: Combinator) -> Self {
        if !self.checks.is_empty() {
            self.check_combinators.push(combinator);
        }
        self.checks.push(expression.into());
        self
    }

    pub fn after(mut self, column: impl Into<String>) -> Self {
        self.after = Some(column.into());
        self
    }

    pub fn with_set_keyword(mut self) -> Self {
        self.with_set_keyword = true;
        self
    }

    pub fn spell_out_data_type(mut self) -> Self {
        self.spell_out_data_type = true;
        self
    }
}
