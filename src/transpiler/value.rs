//! Literal value encoding.
//!
//! Classifies raw values into a semantic kind (date, time, numeric, blob,
//! binary, …) and renders the SQL literal form. Classification of text
//! values follows a fixed first-match-wins order so that e.g. `"2024-01-02"`
//! is a date and never a subtraction expression.

use super::syntax::DATE_FUNCTIONS;
use crate::error::SqlResult;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static NUMERIC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?\d+(\.\d+)?$").expect("numeric pattern"));
static HEX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^0x[0-9a-fA-F]+$").expect("hex pattern"));

const DATE_FORMATS: &[&str] = &[
    "%Y/%m/%d", "%m/%d/%Y", "%Y/%d/%m", "%Y-%m-%d", "%m-%d-%Y", "%Y-%d-%m",
];
const TIME_FORMATS: &[&str] = &["%H:%M:%S", "%-I:%M %p", "%H.%M.%S"];
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%d-%m %H:%M:%S",
    "%d-%m-%Y %H:%M:%S",
    "%Y-%m-%d %-I:%M %p",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%d/%m %H:%M:%S",
    "%d/%m/%Y %H:%M:%S",
    "%Y/%m/%d %-I:%M %p",
];

/// A literal value with its semantic kind resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SqlValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Array(Vec<SqlValue>),
    Object(serde_json::Map<String, serde_json::Value>),
    /// Normalized `YYYY-MM-DD`.
    Date(String),
    /// Normalized `HH:MM:SS`.
    Time(String),
    /// Normalized `YYYY-MM-DD HH:MM:SS`.
    DateTime(String),
    /// Binary-digit string converted from a `0x…` literal.
    Binary(String),
    /// Raw file contents read for a BLOB literal.
    Blob(Vec<u8>),
}

impl SqlValue {
    /// Resolve the semantic kind of a text value.
    ///
    /// Order matters: boolean/null words, dates, times, datetimes, numeric
    /// strings, file paths, hex strings, then opaque text.
    pub fn classify(self) -> SqlResult<SqlValue> {
        let raw = match self {
            SqlValue::Text(raw) => raw,
            other => return Ok(other),
        };

        match raw.to_ascii_lowercase().as_str() {
            "null" => return Ok(SqlValue::Null),
            "true" => return Ok(SqlValue::Bool(true)),
            "false" => return Ok(SqlValue::Bool(false)),
            _ => {}
        }

        if let Some(date) = parse_date(&raw) {
            return Ok(SqlValue::Date(date));
        }
        if let Some(time) = parse_time(&raw) {
            return Ok(SqlValue::Time(time));
        }
        if let Some(dt) = parse_datetime(&raw) {
            return Ok(SqlValue::DateTime(dt));
        }
        if NUMERIC_RE.is_match(&raw) {
            return Ok(if raw.contains('.') {
                SqlValue::Float(raw.parse().unwrap_or(0.0))
            } else {
                SqlValue::Int(raw.parse().unwrap_or(0))
            });
        }
        if Path::new(&raw).is_file() {
            return Ok(SqlValue::Blob(std::fs::read(&raw)?));
        }
        if HEX_RE.is_match(&raw) {
            return Ok(SqlValue::Binary(hex_to_binary(&raw[2..])));
        }

        Ok(SqlValue::Text(raw))
    }

    /// Render the SQL literal form of an already-classified value.
    pub fn render(&self) -> String {
        match self {
            SqlValue::Null => "NULL".to_string(),
            SqlValue::Bool(b) => if *b { "TRUE" } else { "FALSE" }.to_string(),
            SqlValue::Int(n) => n.to_string(),
            SqlValue::Float(n) => n.to_string(),
            SqlValue::Text(s) => render_text(s),
            SqlValue::Array(values) => {
                let json: Vec<serde_json::Value> = values.iter().map(json_value).collect();
                format!(
                    "'{}'",
                    serde_json::to_string(&json).unwrap_or_else(|_| "[]".to_string())
                )
            }
            SqlValue::Object(map) => format!(
                "'{}'",
                serde_json::to_string(map).unwrap_or_else(|_| "{}".to_string())
            ),
            SqlValue::Date(s) | SqlValue::Time(s) | SqlValue::DateTime(s) => format!("'{s}'"),
            SqlValue::Binary(bits) => bits.clone(),
            SqlValue::Blob(bytes) => format!("'{}'", String::from_utf8_lossy(bytes)),
        }
    }

    /// Classify and render in one step.
    pub fn encode(&self) -> SqlResult<String> {
        Ok(self.clone().classify()?.render())
    }
}

/// Render a text literal: single-quoted with internal quotes doubled, after
/// stripping pre-existing surrounding quotes. Bound-parameter placeholders
/// (`:name`, `?`) and SQL date-function names pass through unquoted.
fn render_text(s: &str) -> String {
    if s.starts_with(':') || s == "?" || DATE_FUNCTIONS.contains(&s) {
        return s.to_string();
    }
    let trimmed = s.trim_matches('\'');
    format!("'{}'", trimmed.replace('\'', "''"))
}

fn parse_date(raw: &str) -> Option<String> {
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(raw, format) {
            if date.format(format).to_string() == raw {
                return Some(date.format("%Y-%m-%d").to_string());
            }
        }
    }
    None
}

fn parse_time(raw: &str) -> Option<String> {
    for format in TIME_FORMATS {
        if let Ok(time) = NaiveTime::parse_from_str(raw, format) {
            if time.format(format).to_string() == raw {
                return Some(time.format("%H:%M:%S").to_string());
            }
        }
    }
    None
}

fn parse_datetime(raw: &str) -> Option<String> {
    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            if dt.format(format).to_string() == raw {
                return Some(dt.format("%Y-%m-%d %H:%M:%S").to_string());
            }
        }
    }
    None
}

/// Convert hex digits to their binary-digit string, nibble by nibble, with
/// leading zeros stripped. Total for any input length.
fn hex_to_binary(hex: &str) -> String {
    let bits: String = hex
        .chars()
        .filter_map(|c| c.to_digit(16))
        .map(|nibble| format!("{nibble:04b}"))
        .collect();
    let trimmed = bits.trim_start_matches('0');
    if trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

fn json_value(value: &SqlValue) -> serde_json::Value {
    match value {
        SqlValue::Null => serde_json::Value::Null,
        SqlValue::Bool(b) => serde_json::Value::from(*b),
        SqlValue::Int(n) => serde_json::Value::from(*n),
        SqlValue::Float(n) => serde_json::Value::from(*n),
        SqlValue::Text(s)
        | SqlValue::Date(s)
        | SqlValue::Time(s)
        | SqlValue::DateTime(s)
        | SqlValue::Binary(s) => serde_json::Value::from(s.clone()),
        SqlValue::Array(values) => {
            serde_json::Value::Array(values.iter().map(json_value).collect())
        }
        SqlValue::Object(map) => serde_json::Value::Object(map.clone()),
        SqlValue::Blob(bytes) => {
            serde_json::Value::from(String::from_utf8_lossy(bytes).into_owned())
        }
    }
}

/// Encode a list of values as a comma-separated literal line.
pub fn encode_list(values: &[SqlValue]) -> SqlResult<String> {
    let rendered: SqlResult<Vec<String>> = values.iter().map(SqlValue::encode).collect();
    Ok(rendered?.join(", "))
}

impl From<bool> for SqlValue {
    fn from(b: bool) -> Self {
        SqlValue::Bool(b)
    }
}

impl From<i32> for SqlValue {
    fn from(n: i32) -> Self {
        SqlValue::Int(n as i64)
    }
}

impl From<i64> for SqlValue {
    fn from(n: i64) -> Self {
        SqlValue::Int(n)
    }
}

impl From<f64> for SqlValue {
    fn from(n: f64) -> Self {
        SqlValue::Float(n)
    }
}

impl From<&str> for SqlValue {
    fn from(s: &str) -> Self {
        SqlValue::Text(s.to_string())
    }
}

impl From<String> for SqlValue {
    fn from(s: String) -> Self {
        SqlValue::Text(s)
    }
}

impl<T> From<Option<T>> for SqlValue
where
    T: Into<SqlValue>,
{
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => SqlValue::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_literals() {
        assert_eq!(SqlValue::from("NULL").encode().unwrap(), "NULL");
        assert_eq!(SqlValue::from("true").encode().unwrap(), "TRUE");
        assert_eq!(SqlValue::from("False").encode().unwrap(), "FALSE");
    }

    #[test]
    fn test_date_normalization() {
        for raw in ["2024/03/05", "03/05/2024", "2024-03-05", "03-05-2024"] {
            assert_eq!(
                SqlValue::from(raw).encode().unwrap(),
                "'2024-03-05'",
                "input {raw}"
            );
        }
    }

    #[test]
    fn test_time_normalization() {
        assert_eq!(SqlValue::from("13:45:10").encode().unwrap(), "'13:45:10'");
        assert_eq!(SqlValue::from("1:45 PM").encode().unwrap(), "'13:45:00'");
        assert_eq!(SqlValue::from("13.45.10").encode().unwrap(), "'13:45:10'");
    }

    #[test]
    fn test_datetime_normalization() {
        assert_eq!(
            SqlValue::from("2024-03-05 13:45:10").encode().unwrap(),
            "'2024-03-05 13:45:10'"
        );
        assert_eq!(
            SqlValue::from("2024/03/05 1:45 PM").encode().unwrap(),
            "'2024-03-05 13:45:00'"
        );
    }

    #[test]
    fn test_numeric_strings() {
        assert_eq!(SqlValue::from("42").encode().unwrap(), "42");
        assert_eq!(SqlValue::from("-7").encode().unwrap(), "-7");
        assert_eq!(SqlValue::from("3.25").encode().unwrap(), "3.25");
    }

    #[test]
    fn test_hex_to_binary() {
        assert_eq!(SqlValue::from("0x1A").encode().unwrap(), "11010");
        assert_eq!(SqlValue::from("0xFF").encode().unwrap(), "11111111");
    }

    #[test]
    fn test_opaque_string_quoting() {
        assert_eq!(SqlValue::from("hello").encode().unwrap(), "'hello'");
        // Pre-quoted input is not double-wrapped.
        assert_eq!(SqlValue::from("'hello'").encode().unwrap(), "'hello'");
        assert_eq!(SqlValue::from("O'Brien").encode().unwrap(), "'O''Brien'");
    }

    #[test]
    fn test_passthrough() {
        assert_eq!(SqlValue::from(":name").encode().unwrap(), ":name");
        assert_eq!(SqlValue::from("?").encode().unwrap(), "?");
        assert_eq!(SqlValue::from("NOW()").encode().unwrap(), "NOW()");
        assert_eq!(
            SqlValue::from("CURRENT_TIMESTAMP").encode().unwrap(),
            "CURRENT_TIMESTAMP"
        );
    }

    #[test]
    fn test_array_renders_as_json() {
        let value = SqlValue::Array(vec![SqlValue::Int(1), SqlValue::Text("a".into())]);
        assert_eq!(value.encode().unwrap(), "'[1,\"a\"]'");
    }

    #[test]
    fn test_encoding_is_idempotent() {
        for raw in ["2024-03-05", "hello", "42", "0x1A", "1:45 PM"] {
            let first = SqlValue::from(raw).encode().unwrap();
            let second = SqlValue::from(raw).encode().unwrap();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_file_path_reads_blob() {
        let path = std::env::temp_dir().join("quillsql_blob_fixture.txt");
        std::fs::write(&path, "blob contents").unwrap();

        let raw = path.to_string_lossy().into_owned();
        let classified = SqlValue::from(raw.clone()).classify().unwrap();
        assert_eq!(classified, SqlValue::Blob(b"blob contents".to_vec()));
        assert_eq!(SqlValue::from(raw).encode().unwrap(), "'blob contents'");

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_encode_list() {
        let values = vec![SqlValue::from("Ann"), SqlValue::from(7), SqlValue::Null];
        assert_eq!(encode_list(&values).unwrap(), "'Ann', 7, NULL");
    }
}
