//! Free-text row filtering, column-type aware.
//!
//! A filter is a single lowercased query evaluated either against every
//! column (search-all mode) or against one selected column. Numeric
//! columns understand a small operator grammar (`>=`, `<=`, `>`, `<`,
//! exact value, and `min-max` ranges); all other types use
//! case-insensitive substring matching on the stringified value.

use gridline_model::{FieldType, Row, Schema};

/// A parsed numeric column query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericQuery {
    AtLeast(f64),
    AtMost(f64),
    Above(f64),
    Below(f64),
    /// Inclusive range. Note that the range branch wins whenever the
    /// query contains `-`, and an empty side of the split parses as 0,
    /// so `-5` means the range `0..=5`. A leading minus is a range
    /// separator, never a negative-number sign.
    Range(f64, f64),
    Exact(f64),
}

impl NumericQuery {
    /// Parses the operator grammar. Returns `None` when the decisive
    /// operand does not parse as a number; an unparseable query matches
    /// nothing, it never errors.
    pub fn parse(query: &str) -> Option<Self> {
        if let Some(rest) = query.strip_prefix(">=") {
            return parse_operand(rest).map(Self::AtLeast);
        }
        if let Some(rest) = query.strip_prefix("<=") {
            return parse_operand(rest).map(Self::AtMost);
        }
        if let Some(rest) = query.strip_prefix('>') {
            return parse_operand(rest).map(Self::Above);
        }
        if let Some(rest) = query.strip_prefix('<') {
            return parse_operand(rest).map(Self::Below);
        }
        if let Some((min, max)) = query.split_once('-') {
            let min = parse_range_side(min)?;
            let max = parse_range_side(max)?;
            return Some(Self::Range(min, max));
        }
        parse_operand(query).map(Self::Exact)
    }

    /// Whether a row value satisfies the query.
    pub fn matches(&self, value: f64) -> bool {
        match *self {
            Self::AtLeast(n) => value >= n,
            Self::AtMost(n) => value <= n,
            Self::Above(n) => value > n,
            Self::Below(n) => value < n,
            Self::Range(min, max) => value >= min && value <= max,
            Self::Exact(n) => value == n,
        }
    }
}

fn parse_operand(s: &str) -> Option<f64> {
    s.trim().parse().ok()
}

// An empty range side parses as 0 (the original's Number("") === 0).
fn parse_range_side(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() {
        return Some(0.0);
    }
    s.parse().ok()
}

/// Filters rows by the query, preserving order.
///
/// An empty query passes everything through. Without a `filter_column`
/// a row matches if any field's stringified value contains the query;
/// with one, matching is restricted to that column under its schema
/// type. An unknown `filter_column` matches no row.
pub fn filter_rows<'a>(
    rows: &'a [Row],
    query: &str,
    filter_column: Option<&str>,
    schema: &Schema,
) -> Vec<&'a Row> {
    let keyword = query.to_lowercase();
    if keyword.is_empty() {
        return rows.iter().collect();
    }

    match filter_column {
        None => rows
            .iter()
            .filter(|row| matches_any_column(row, &keyword))
            .collect(),
        Some(column) => {
            let Some(field) = schema.field_by_key(column) else {
                return Vec::new();
            };
            if field.field_type == FieldType::Number {
                let Some(numeric) = NumericQuery::parse(&keyword) else {
                    return Vec::new();
                };
                rows.iter()
                    .filter(|row| {
                        row.get(column)
                            .filter(|v| !v.is_null())
                            .and_then(numeric_value)
                            .is_some_and(|v| numeric.matches(v))
                    })
                    .collect()
            } else {
                rows.iter()
                    .filter(|row| {
                        row.display(column)
                            .is_some_and(|text| text.to_lowercase().contains(&keyword))
                    })
                    .collect()
            }
        }
    }
}

fn matches_any_column(row: &Row, keyword: &str) -> bool {
    row.keys()
        .any(|key| row.display(key).is_some_and(|text| text.to_lowercase().contains(keyword)))
}

/// Coerces a row value into a number for comparison: JSON numbers
/// directly, strings when they parse. Anything else never matches.
fn numeric_value(value: &serde_json::Value) -> Option<f64> {
    match value {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
