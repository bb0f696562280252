//! Normalized record representation.

use serde_json::{Map, Value};
use std::collections::BTreeSet;

/// Name of the field stamped on every record with the run's execution date.
pub const EXECUTION_DATE_FIELD: &str = "execution_date";

/// A normalized flat record: field name to scalar JSON value.
pub type Record = Map<String, Value>;

/// Returns the set of field names in a record.
#[must_use]
pub fn key_set(record: &Record) -> BTreeSet<&str> {
    record.keys().map(String::as_str).collect()
}
