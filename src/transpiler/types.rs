//! Column data types and their per-dialect keyword mapping.

use super::dialect::Dialect;
use crate::error::SqlError;
use serde::{Deserialize, Serialize};

/// Column data types understood by the table compilers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataType {
    Boolean,
    Bool,
    Bit,
    TinyInt,
    SmallInt,
    MediumInt,
    Int,
    Integer,
    BigInt,
    Decimal,
    Float,
    Double,
    DoublePrecision,
    Real,
    Char,
    Varchar,
    TinyText,
    Text,
    MediumText,
    LongText,
    TinyBlob,
    Blob,
    MediumBlob,
    LongBlob,
    Binary,
    Varbinary,
    Date,
    Time,
    DateTime,
    Timestamp,
    Year,
    Json,
}

impl DataType {
    /// The type keyword on the given dialect.
    pub fn keyword(&self, dialect: Dialect) -> &'static str {
        use Dialect::*;
        match self {
            DataType::Boolean => "BOOLEAN",
            DataType::Bool => match dialect {
                MySql => "BOOL",
                Sqlite => "INTEGER",
                Postgres => "BOOLEAN",
            },
            DataType::Bit => match dialect {
                MySql => "BIT",
                Sqlite => "INTEGER",
                Postgres => "BIT",
            },
            DataType::TinyInt => match dialect {
                MySql => "TINYINT",
                Sqlite => "INTEGER",
                Postgres => "SMALLINT",
            },
            DataType::SmallInt => match dialect {
                MySql => "SMALLINT",
                Sqlite => "INTEGER",
                Postgres => "SMALLINT",
            },
            DataType::MediumInt => match dialect {
                MySql => "MEDIUMINT",
                Sqlite => "INTEGER",
                Postgres => "INTEGER",
            },
            DataType::Int => match dialect {
                MySql => "INT",
                Sqlite | Postgres => "INTEGER",
            },
            DataType::Integer => "INTEGER",
            DataType::BigInt => match dialect {
                MySql => "BIGINT",
                Sqlite => "INTEGER",
                Postgres => "BIGINT",
            },
            DataType::Decimal => match dialect {
                MySql => "DECIMAL",
                Sqlite | Postgres => "NUMERIC",
            },
            DataType::Float => match dialect {
                MySql => "FLOAT",
                Sqlite | Postgres => "REAL",
            },
            DataType::Double => match dialect {
                MySql => "DOUBLE",
                Sqlite => "REAL",
                Postgres => "DOUBLE PRECISION",
            },
            DataType::DoublePrecision => match dialect {
                MySql | Postgres => "DOUBLE PRECISION",
                Sqlite => "REAL",
            },
            DataType::Real => "REAL",
            DataType::Char => "CHAR",
            DataType::Varchar => "VARCHAR",
            DataType::TinyText => match dialect {
                MySql => "TINYTEXT",
                Sqlite | Postgres => "TEXT",
            },
            DataType::Text => "TEXT",
            DataType::MediumText => match dialect {
                MySql => "MEDIUMTEXT",
                Sqlite | Postgres => "TEXT",
            },
            DataType::LongText => match dialect {
                MySql => "LONGTEXT",
                Sqlite | Postgres => "TEXT",
            },
            DataType::TinyBlob => match dialect {
                MySql => "TINYBLOB",
                Sqlite => "BLOB",
                Postgres => "BYTEA",
            },
            DataType::Blob => match dialect {
                MySql | Sqlite => "BLOB",
                Postgres => "BYTEA",
            },
            DataType::MediumBlob => match dialect {
                MySql => "MEDIUMBLOB",
                Sqlite => "BLOB",
                Postgres => "BYTEA",
            },
            DataType::LongBlob => match dialect {
                MySql => "LONGBLOB",
                Sqlite => "BLOB",
                Postgres => "BYTEA",
            },
            DataType::Binary => match dialect {
                MySql => "BINARY",
                Sqlite => "BLOB",
                Postgres => "BYTEA",
            },
            DataType::Varbinary => match dialect {
                MySql => "VARBINARY",
                Sqlite => "BLOB",
                Postgres => "BYTEA",
            },
            DataType::Date => "DATE",
            DataType::Time => "TIME",
            DataType::DateTime => match dialect {
                MySql | Sqlite => "DATETIME",
                Postgres => "TIMESTAMP",
            },
            DataType::Timestamp => "TIMESTAMP",
            DataType::Year => match dialect {
                MySql => "YEAR",
                Sqlite | Postgres => "INTEGER",
            },
            DataType::Json => match dialect {
                MySql => "JSON",
                Sqlite => "TEXT",
                Postgres => "JSONB",
            },
        }
    }
}

impl std::str::FromStr for DataType {
    type Err = SqlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "boolean" => Ok(DataType::Boolean),
            "bool" => Ok(DataType::Bool),
            "bit" => Ok(DataType::Bit),
            "tiny_int" | "tinyint" => Ok(DataType::TinyInt),
            "small_int" | "smallint" => Ok(DataType::SmallInt),
            "medium_int" | "mediumint" => Ok(DataType::MediumInt),
            "int" => Ok(DataType::Int),
            "integer" => Ok(DataType::Integer),
            "big_int" | "bigint" => Ok(DataType::BigInt),
            "decimal" => Ok(DataType::Decimal),
            "float" => Ok(DataType::Float),
            "double" => Ok(DataType::Double),
            "double_precision" => Ok(DataType::DoublePrecision),
            "real" => Ok(DataType::Real),
            "char" => Ok(DataType::Char),
            "varchar" => Ok(DataType::Varchar),
            "tiny_text" | "tinytext" => Ok(DataType::TinyText),
            "text" => Ok(DataType::Text),
            "medium_text" | "mediumtext" => Ok(DataType::MediumText),
            "long_text" | "longtext" => Ok(DataType::LongText),
            "tiny_blob" | "tinyblob" => Ok(DataType::TinyBlob),
            "blob" => Ok(DataType::Blob),
            "medium_blob" | "mediumblob" => Ok(DataType::MediumBlob),
            "long_blob" | "longblob" => Ok(DataType::LongBlob),
            "binary" => Ok(DataType::Binary),
            "varbinary" => Ok(DataType::Varbinary),
            "date" => Ok(DataType::Date),
            "time" => Ok(DataType::Time),
            "datetime" => Ok(DataType::DateTime),
            "timestamp" => Ok(DataType::Timestamp),
            "year" => Ok(DataType::Year),
            "json" => Ok(DataType::Json),
            other => Err(SqlError::UnknownToken(other.to_string())),
        }
    }
}
