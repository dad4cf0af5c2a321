use serde::{Deserialize, Serialize};

/// Supported SQL dialects.
///
/// The dialect is threaded explicitly through every compile call; nothing in
/// the crate holds a process-wide selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Dialect {
    MySql,
    Postgres,
    Sqlite,
}

impl Default for Dialect {
    fn default() -> Self {
        Self::MySql
    }
}

impl Dialect {
    /// All dialects this crate can compile for.
    pub fn all() -> [Dialect; 3] {
        [Dialect::MySql, Dialect::Postgres, Dialect::Sqlite]
    }

    /// Whether CHECK constraints compile on this dialect.
    ///
    /// On SQLite a CHECK compiles to an empty string instead of erroring;
    /// the feature is silently unsupported there.
    pub fn supports_check(&self) -> bool {
        !matches!(self, Dialect::Sqlite)
    }

    /// Whether the dialect has storage-engine table options (ENGINE=, DEFAULT CHARSET=).
    pub fn supports_storage_engine(&self) -> bool {
        matches!(self, Dialect::MySql)
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dialect::MySql => write!(f, "mysql"),
            Dialect::Postgres => write!(f, "postgresql"),
            Dialect::Sqlite => write!(f, "sqlite"),
        }
    }
}

impl std::str::FromStr for Dialect {
    type Err = crate::error::SqlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mysql" => Ok(Dialect::MySql),
            "postgresql" | "postgres" => Ok(Dialect::Postgres),
            "sqlite" => Ok(Dialect::Sqlite),
            other => Err(crate::error::SqlError::UnknownToken(other.to_string())),
        }
    }
}
