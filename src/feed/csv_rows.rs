//! CSV text → header-keyed rows with dynamic cell typing.
//!
//! Each data row becomes a map from header name to a typed cell. A row shorter
//! than the header simply lacks the trailing keys; cells beyond the header are
//! dropped. Blank lines are skipped.

use std::collections::HashMap;

/// A single dynamically-typed CSV cell.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Number(f64),
    Bool(bool),
    Text(String),
    Null,
}

impl FieldValue {
    /// Type a raw cell: numeric literals → `Number`, `true`/`false` → `Bool`,
    /// empty → `Null`, anything else stays text.
    pub fn infer(raw: &str) -> Self {
        match raw {
            "" => return FieldValue::Null,
            "true" | "TRUE" => return FieldValue::Bool(true),
            "false" | "FALSE" => return FieldValue::Bool(false),
            _ => {}
        }
        let trimmed = raw.trim();
        if looks_numeric(trimmed) {
            if let Ok(n) = trimmed.parse::<f64>() {
                return FieldValue::Number(n);
            }
        }
        FieldValue::Text(raw.to_string())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Numeric view of the cell. Anything that is not a number is `NaN`.
    pub fn as_number(&self) -> f64 {
        match self {
            FieldValue::Number(n) => *n,
            _ => f64::NAN,
        }
    }

    /// Text view of a label cell, or `None` when the cell is falsy
    /// (null, empty, `false`, zero or `NaN`).
    pub fn as_label(&self) -> Option<String> {
        match self {
            FieldValue::Text(s) if !s.is_empty() => Some(s.clone()),
            FieldValue::Number(n) if *n != 0.0 && !n.is_nan() => Some(n.to_string()),
            FieldValue::Bool(true) => Some("true".to_string()),
            _ => None,
        }
    }
}

/// Only plain decimal / exponent literals count as numbers; `inf`, `NaN` and
/// friends stay text.
fn looks_numeric(s: &str) -> bool {
    !s.is_empty()
        && s.chars().any(|c| c.is_ascii_digit())
        && s
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'))
}

/// Field-name → value mapping for one CSV data row.
pub type RawRow = HashMap<String, FieldValue>;

/// Parse a CSV document with a required header row. Fails on input that is not
/// valid UTF-8.
pub fn parse_rows(data: &[u8]) -> Result<Vec<RawRow>, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(data);

    let headers = reader.headers()?.clone();
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let row: RawRow = headers
            .iter()
            .zip(record.iter())
            .map(|(name, cell)| (name.to_string(), FieldValue::infer(cell)))
            .collect();
        rows.push(row);
    }
    Ok(rows)
}
