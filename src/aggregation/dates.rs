//! Main-date resolution for activity records

use chrono::NaiveDate;

use crate::models::ActivityRecord;

/// Resolve the record's main date: `dataPlantio` if present, else
/// `dataColheita`, else `data`. The first present field decides; if its value
/// does not parse as a valid calendar date the result is `None` (no
/// fallthrough to later fields). Callers skip `None` records rather than
/// failing the aggregation.
pub fn resolve_main_date(record: &ActivityRecord) -> Option<NaiveDate> {
    let raw = record
        .data_plantio
        .as_deref()
        .or(record.data_colheita.as_deref())
        .or(record.data.as_deref())?;
    parse_flexible_date(raw)
}

/// Accepts `YYYY-MM-DD` or the legacy `DD/MM/YYYY` form
fn parse_flexible_date(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(s, "%d/%m/%Y"))
        .ok()
}
