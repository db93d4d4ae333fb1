//! Locale-aware numeric-string parsing
//!
//! Historical records mix Brazilian ("1.234,56") and plain ("1234.56")
//! formatting, sometimes within the same collection, so the separator roles
//! have to be inferred from the string itself.

use crate::models::FieldValue;

/// Parse a numeric string that may use `,` and `.` as either decimal or
/// thousands separators. Disambiguation, applied in order:
///
/// 1. empty -> 0
/// 2. both separators present -> `.` is thousands, `,` is decimal
/// 3. only `,` -> decimal separator
/// 4. only `.` -> thousands separator when the string splits into exactly two
///    parts and the right part is exactly 3 digits; decimal point otherwise
/// 5. no separators -> parse directly
///
/// Rule 4 is a known-lossy heuristic: `"100.500"` parses as 100500, so a
/// genuine 3-decimal value written with a dot cannot be represented. Anything
/// unparseable after normalization yields 0.
pub fn parse_locale_number(raw: &str) -> f64 {
    let s = raw.trim();
    if s.is_empty() {
        return 0.0;
    }

    let has_comma = s.contains(',');
    let has_dot = s.contains('.');

    let normalized = if has_comma && has_dot {
        s.replace('.', "").replace(',', ".")
    } else if has_comma {
        s.replace(',', ".")
    } else if has_dot {
        let parts: Vec<&str> = s.split('.').collect();
        if parts.len() == 2 && parts[1].len() == 3 {
            s.replace('.', "")
        } else {
            s.to_string()
        }
    } else {
        s.to_string()
    };

    normalized.parse::<f64>().unwrap_or(0.0)
}

/// Numeric value of an optional string-or-number document field.
/// Absent fields and unparseable strings contribute 0.
pub fn parse_amount(value: Option<&FieldValue>) -> f64 {
    match value {
        Some(FieldValue::Number(n)) if n.is_finite() => *n,
        Some(FieldValue::Number(_)) | None => 0.0,
        Some(FieldValue::Text(s)) => parse_locale_number(s),
    }
}
