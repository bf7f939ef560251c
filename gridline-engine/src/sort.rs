//! Single-column stable sorting with nulls last.

use gridline_model::Row;
use serde_json::Value;
use std::cmp::Ordering;

/// Sort direction for the active column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// The opposite direction.
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Sorts rows by one column in place. No column means identity order.
///
/// Rows with a null (or absent) value in the sort column sort to the end
/// regardless of direction; the direction only reverses comparisons
/// between non-null values. Ties preserve prior order (`sort_by` is
/// stable).
pub fn sort_rows(rows: &mut [&Row], sort_column: Option<&str>, direction: SortDirection) {
    let Some(column) = sort_column else {
        return;
    };
    rows.sort_by(|a, b| {
        let va = a.get(column).filter(|v| !v.is_null());
        let vb = b.get(column).filter(|v| !v.is_null());
        match (va, vb) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(va), Some(vb)) => {
                let ord = compare_values(va, vb);
                match direction {
                    SortDirection::Ascending => ord,
                    SortDirection::Descending => ord.reverse(),
                }
            }
        }
    });
}

/// Type-aware value comparison: numbers numerically, strings (and dates)
/// lexicographically, booleans false before true. Mixed types fall back
/// to comparing the JSON text form so the ordering is still total.
fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Number(a), Value::Number(b)) => {
            let a = a.as_f64().unwrap_or(f64::NAN);
            let b = b.as_f64().unwrap_or(f64::NAN);
            a.partial_cmp(&b).unwrap_or(Ordering::Equal)
        }
        (Value::String(a), Value::String(b)) => a.cmp(b),
        (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
        _ => a.to_string().cmp(&b.to_string()),
    }
}
