//! Execution date stamping.

use chrono::NaiveDate;
use macroetl_types::{DateParseError, EXECUTION_DATE_FIELD, Record, format_iso_date, parse_br_date};
use serde_json::Value;

/// Sets `execution_date` on every record from a `dd/mm/YYYY` date.
///
/// The field is written as `YYYY-MM-DD`. Stamping twice with the same date
/// leaves the records unchanged; with a different date the last call wins.
///
/// # Errors
///
/// Returns an error if `date` is not a valid `dd/mm/YYYY` date, in which case
/// no record is modified.
pub fn stamp(records: &mut [Record], date: &str) -> Result<(), DateParseError> {
    let date = parse_br_date(date)?;
    stamp_date(records, date);
    Ok(())
}

/// Sets `execution_date` on every record.
pub fn stamp_date(records: &mut [Record], date: NaiveDate) {
    let value = format_iso_date(date);
    for record in records {
        record.insert(EXECUTION_DATE_FIELD.to_string(), Value::String(value.clone()));
    }
}
