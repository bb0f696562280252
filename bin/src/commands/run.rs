//! Run command implementation.
//!
//! Builds an event from the flags (or takes it verbatim from `--event`),
//! runs the pipeline and prints the report as JSON.

use anyhow::{Context, Result};
use macroetl_lib::prelude::*;

/// Builds the invocation event from command-line flags.
pub(crate) fn build_event(
    all: bool,
    api: Option<String>,
    date: Option<String>,
    raw: Option<&str>,
) -> Result<Event> {
    if let Some(raw) = raw {
        return serde_json::from_str(raw).context("Invalid event JSON");
    }
    Ok(Event {
        run_all: all,
        api_name: api,
        date,
    })
}

/// Runs the pipeline once and prints the report.
pub(crate) async fn run(
    all: bool,
    api: Option<String>,
    date: Option<String>,
    raw: Option<&str>,
) -> Result<()> {
    let event = build_event(all, api, date, raw)?;
    let config = PipelineConfig::from_env().context("Failed to load configuration")?;
    let pipeline = HttpPipeline::from_config(&config)?;

    let report = pipeline
        .run(&event)
        .await
        .with_context(|| format!("Run failed for {}", event.api_name()))?;

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_from_flags() {
        let event = build_event(false, Some("ibge".to_string()), None, None).unwrap();
        assert!(!event.run_all);
        assert_eq!(event.api_name(), "ibge");
        assert!(event.date.is_none());

        let event = build_event(true, None, Some("2025-11-14".to_string()), None).unwrap();
        assert!(event.run_all);
        assert_eq!(event.date.as_deref(), Some("2025-11-14"));
    }

    #[test]
    fn test_event_from_json() {
        let event = build_event(
            false,
            None,
            None,
            Some(r#"{"run_all": true, "date": "2025-11-14"}"#),
        )
        .unwrap();
        assert_eq!(event, Event::all(Some("2025-11-14".to_string())));
    }

    #[test]
    fn test_event_json_rejected() {
        assert!(build_event(false, None, None, Some("run_all")).is_err());
    }
}
