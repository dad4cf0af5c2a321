//! Condition descriptors for WHERE and CHECK clauses.

use crate::error::SqlError;
use crate::transpiler::value::SqlValue;
use serde::{Deserialize, Serialize};

/// Comparison operators available in a condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Comparison {
    Equal,
    NotEqual,
    GreaterThan,
    GreaterThanOrEqual,
    LessThan,
    LessThanOrEqual,
}

impl Comparison {
    /// The SQL symbol for this operator.
    pub fn symbol(&self) -> &'static str {
        match self {
            Comparison::Equal => "=",
            Comparison::NotEqual => "!=",
            Comparison::GreaterThan => ">",
            Comparison::GreaterThanOrEqual => ">=",
            Comparison::LessThan => "<",
            Comparison::LessThanOrEqual => "<=",
        }
    }
}

impl std::str::FromStr for Comparison {
    type Err = SqlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "equal" => Ok(Comparison::Equal),
            "not_equal" | "not_equal_2" => Ok(Comparison::NotEqual),
            "greater_than" => Ok(Comparison::GreaterThan),
            "greater_than_or_equal" => Ok(Comparison::GreaterThanOrEqual),
            "less_than" => Ok(Comparison::LessThan),
            "less_than_or_equal" => Ok(Comparison::LessThanOrEqual),
            other => Err(SqlError::UnknownToken(other.to_string())),
        }
    }
}

/// Logical connective between two consecutive conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Combinator {
    #[default]
    And,
    Or,
}

impl Combinator {
    pub fn keyword(&self) -> &'static str {
        match self {
            Combinator::And => "AND",
            Combinator::Or => "OR",
        }
    }
}

impl std::str::FromStr for Combinator {
    type Err = SqlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "and" => Ok(Combinator::And),
            "or" => Ok(Combinator::Or),
            other => Err(SqlError::UnknownToken(other.to_string())),
        }
    }
}

/// What a condition asserts about its column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Predicate {
    /// `col OP value`
    Compare { op: Comparison, value: SqlValue },
    /// `col LIKE '%operand%'`
    Like(String),
    /// `col IS NOT NULL`
    NotNull,
    /// `col BETWEEN from AND to`
    Between { from: SqlValue, to: SqlValue },
    /// Negation wrapper around the rendered equality.
    Not(SqlValue),
    /// `base_table.col = table.column`, with no value encoding.
    JoinedColumn { table: String, column: String },
}

/// One `column OP operand` unit inside a WHERE expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub column: String,
    pub predicate: Predicate,
}

impl Condition {
    pub fn new(column: impl Into<String>, predicate: Predicate) -> Self {
        Self {
            column: column.into(),
            predicate,
        }
    }

    pub fn equal(column: impl Into<String>, value: impl Into<SqlValue>) -> Self {
        Self::new(
            column,
            Predicate::Compare {
                op: Comparison::Equal,
                value: value.into(),
            },
        )
    }
}

/// An ordered list of conditions plus the combinator sequence joining them.
///
/// Combinator `i` joins condition `i` to condition `i + 1`; when the list is
/// shorter than needed the remaining joins default to `AND`. A raw string
/// clause bypasses the descriptors entirely.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WhereClause {
    pub conditions: Vec<Condition>,
    pub combinators: Vec<Combinator>,
    pub raw: Option<String>,
}

impl WhereClause {
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty() && self.raw.is_none()
    }

    pub fn push(&mut self, condition: Condition) {
        self.conditions.push(condition);
    }

    /// Record the connective that joins the most recent condition to the next.
    pub fn combine(&mut self, combinator: Combinator) {
        self.combinators.push(combinator);
    }
}
