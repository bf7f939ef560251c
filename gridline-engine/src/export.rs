//! CSV export of the current row view.
//!
//! The format is deterministic and worth preserving byte-for-byte: a
//! UTF-8 BOM, a header row taken from the first record's keys, every
//! value double-quoted with internal quotes doubled, `\n` between
//! records and no trailing newline.

use csv::{QuoteStyle, Terminator, WriterBuilder};
use gridline_model::Row;
use serde_json::Value;

const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";

/// Serializes rows to CSV bytes. An empty slice yields empty output.
pub fn rows_to_csv(rows: &[&Row]) -> Vec<u8> {
    let Some(first) = rows.first() else {
        return Vec::new();
    };

    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    // Header from the first record; each record then contributes its own
    // values in key order.
    let ok = writer.write_record(first.keys()).is_ok()
        && rows.iter().all(|row| {
            writer
                .write_record(row.values().values().map(csv_text))
                .is_ok()
        });
    if !ok {
        return Vec::new();
    }

    let body = match writer.into_inner() {
        Ok(body) => body,
        Err(_) => return Vec::new(),
    };

    let mut out = Vec::with_capacity(UTF8_BOM.len() + body.len());
    out.extend_from_slice(UTF8_BOM);
    out.extend_from_slice(&body);
    if out.last() == Some(&b'\n') {
        out.pop();
    }
    out
}

// Export stringification is not display stringification: null is written
// out as the literal text `null`.
fn csv_text(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}
