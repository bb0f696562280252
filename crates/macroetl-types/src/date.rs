//! Date formats used on the wire and in storage partitions.

use chrono::{Datelike, NaiveDate};

use crate::DateParseError;

/// Date format used by the upstream APIs and the run report (`dd/mm/YYYY`).
pub const BR_DATE_FORMAT: &str = "%d/%m/%Y";

/// Date format used for events, execution dates and partitions (`YYYY-MM-DD`).
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a `dd/mm/YYYY` date.
///
/// # Errors
///
/// Returns an error if the input does not match [`BR_DATE_FORMAT`].
pub fn parse_br_date(value: &str) -> Result<NaiveDate, DateParseError> {
    parse_with(value, BR_DATE_FORMAT)
}

/// Parses a `YYYY-MM-DD` date.
///
/// # Errors
///
/// Returns an error if the input does not match [`ISO_DATE_FORMAT`].
pub fn parse_iso_date(value: &str) -> Result<NaiveDate, DateParseError> {
    parse_with(value, ISO_DATE_FORMAT)
}

fn parse_with(value: &str, format: &'static str) -> Result<NaiveDate, DateParseError> {
    NaiveDate::parse_from_str(value.trim(), format).map_err(|_| DateParseError {
        value: value.to_string(),
        format,
    })
}

/// Formats a date as `dd/mm/YYYY`.
#[must_use]
pub fn format_br_date(date: NaiveDate) -> String {
    date.format(BR_DATE_FORMAT).to_string()
}

/// Formats a date as `YYYY-MM-DD`.
#[must_use]
pub fn format_iso_date(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}

/// Moves a date by whole calendar years, keeping month and day.
///
/// February 29th maps to February 28th when the target year is not a leap
/// year.
#[must_use]
pub fn shift_years(date: NaiveDate, years: i32) -> NaiveDate {
    let year = date.year() + years;
    date.with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, date.month(), 28))
        .unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_br_date() {
        let date = parse_br_date("14/11/2025").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 11, 14).unwrap());
    }

    #[test]
    fn test_parse_br_date_rejects_iso() {
        let err = parse_br_date("2025-11-14").unwrap_err();
        assert_eq!(err.format, BR_DATE_FORMAT);
        assert_eq!(err.value, "2025-11-14");
    }

    #[test]
    fn test_iso_round_trip() {
        let date = parse_iso_date("2025-01-02").unwrap();
        assert_eq!(format_iso_date(date), "2025-01-02");
        assert_eq!(format_br_date(date), "02/01/2025");
    }

    #[test]
    fn test_shift_years() {
        let date = NaiveDate::from_ymd_opt(2025, 11, 14).unwrap();
        assert_eq!(
            shift_years(date, 1),
            NaiveDate::from_ymd_opt(2026, 11, 14).unwrap()
        );
    }

    #[test]
    fn test_shift_years_leap_day() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(
            shift_years(date, 1),
            NaiveDate::from_ymd_opt(2025, 2, 28).unwrap()
        );
    }
}
