//! Declared-size validation for sized column types.

use super::dialect::Dialect;
use super::types::DataType;
use crate::error::{SqlError, SqlResult};

/// Allowed size bounds for a data type on a dialect, inclusive.
///
/// Types without an entry accept any declared size.
fn bounds(data_type: DataType, dialect: Dialect) -> Option<(i64, i64)> {
    use Dialect::*;
    match data_type {
        DataType::Varchar => Some(match dialect {
            MySql => (0, 65_535),
            Sqlite => (0, 255),
            Postgres => (0, 10_485_760),
        }),
        DataType::Char => Some(match dialect {
            MySql | Sqlite => (1, 255),
            Postgres => (1, 10_485_760),
        }),
        DataType::Text => Some(match dialect {
            MySql => (1, 65_535),
            Sqlite => (1, 2_147_483_646),
            Postgres => (1, 1_073_741_824),
        }),
        DataType::TinyText | DataType::TinyBlob => Some((1, 255)),
        DataType::Binary => Some(match dialect {
            MySql | Sqlite => (1, 255),
            Postgres => (1, 10_485_760),
        }),
        DataType::Varbinary => Some(match dialect {
            MySql => (0, 65_535),
            Sqlite => (0, 255),
            Postgres => (0, 10_485_760),
        }),
        DataType::Bit => Some(match dialect {
            MySql => (1, 64),
            Sqlite | Postgres => (1, 83_886_080),
        }),
        DataType::Decimal => Some((1, 65)),
        _ => None,
    }
}

/// Check a declared column size against the bounds for its data type.
pub fn validate_size(data_type: DataType, size: i64, dialect: Dialect) -> SqlResult<()> {
    if let Some((min, max)) = bounds(data_type, dialect) {
        if size < min || size > max {
            return Err(SqlError::SizeOutOfRange {
                data_type: data_type.keyword(dialect),
                size,
                min,
                max,
            });
        }
    }
    Ok(())
}
