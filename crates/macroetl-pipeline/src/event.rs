//! Invocation events.

use chrono::NaiveDate;
use macroetl_types::{DateParseError, Source, parse_iso_date};
use serde::{Deserialize, Serialize};

/// Source run when an event names none.
pub const DEFAULT_API: Source = Source::Selic;

/// What a single invocation should run.
///
/// Scheduled invocations send `{"run_all": true, "date": "2025-11-14"}`,
/// manual ones `{"api_name": "dolar", "date": "2025-11-14"}`. Unknown keys
/// are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Run every configured source.
    #[serde(default)]
    pub run_all: bool,
    /// Source to run when `run_all` is false.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_name: Option<String>,
    /// Reference date (`YYYY-MM-DD`); today when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl Event {
    /// Creates a batch event.
    #[must_use]
    pub const fn all(date: Option<String>) -> Self {
        Self {
            run_all: true,
            api_name: None,
            date,
        }
    }

    /// Creates a single-source event.
    #[must_use]
    pub fn single(api_name: impl Into<String>, date: Option<String>) -> Self {
        Self {
            run_all: false,
            api_name: Some(api_name.into()),
            date,
        }
    }

    /// Returns the source name to run when `run_all` is false.
    #[must_use]
    pub fn api_name(&self) -> &str {
        self.api_name.as_deref().unwrap_or(DEFAULT_API.as_str())
    }

    /// Returns the reference date, falling back to `today`.
    ///
    /// # Errors
    ///
    /// Returns an error if `date` is set but not `YYYY-MM-DD`.
    pub fn reference_date(&self, today: NaiveDate) -> Result<NaiveDate, DateParseError> {
        self.date
            .as_deref()
            .map_or(Ok(today), |date| parse_iso_date(date.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 11, 14).unwrap()
    }

    #[test]
    fn test_parse_batch_event() {
        let event: Event = serde_json::from_str(r#"{"run_all": true, "date": "2025-11-10"}"#).unwrap();
        assert!(event.run_all);
        assert_eq!(
            event.reference_date(today()).unwrap(),
            NaiveDate::from_ymd_opt(2025, 11, 10).unwrap()
        );
    }

    #[test]
    fn test_parse_manual_event() {
        let event: Event =
            serde_json::from_str(r#"{"api_name": "dolar", "source": "aws.events"}"#).unwrap();
        assert!(!event.run_all);
        assert_eq!(event.api_name(), "dolar");
        assert_eq!(event.reference_date(today()).unwrap(), today());
    }

    #[test]
    fn test_empty_event_defaults() {
        let event: Event = serde_json::from_str("{}").unwrap();
        assert_eq!(event, Event::default());
        assert_eq!(event.api_name(), "selic");
    }

    #[test]
    fn test_invalid_date() {
        let event = Event::single("selic", Some("14/11/2025".to_string()));
        assert!(event.reference_date(today()).is_err());
    }

    #[test]
    fn test_serialize_skips_absent() {
        let json = serde_json::to_string(&Event::all(None)).unwrap();
        assert_eq!(json, r#"{"run_all":true}"#);
    }
}
