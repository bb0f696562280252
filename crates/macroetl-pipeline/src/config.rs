//! Environment configuration.

use std::path::PathBuf;
use std::time::Duration;

use macroetl_fetch::url::HOLIDAYS_URL;
use macroetl_fetch::{ClientConfig, Endpoints};
use macroetl_types::{Source, TemporalSeries};
use thiserror::Error;

/// Focus indicators queried unless `FOCUS_INDICATORS` says otherwise.
pub const DEFAULT_FOCUS_INDICATORS: &str = "Selic,IPCA,Câmbio";

/// Errors raised while reading configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required variable is not set.
    #[error("{0} environment variable required")]
    Missing(&'static str),

    /// A variable is set to an unusable value.
    #[error("Invalid {name}='{value}': {reason}")]
    Invalid {
        /// Variable name.
        name: &'static str,
        /// The rejected value.
        value: String,
        /// Why it was rejected.
        reason: String,
    },
}

/// Settings for one pipeline process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Root directory of the object store.
    pub bucket: PathBuf,
    /// Sources run when an event sets `run_all`.
    pub all_apis: Vec<Source>,
    /// Focus indicators.
    pub focus_indicators: Vec<String>,
    /// Focus series horizon.
    pub focus_series: TemporalSeries,
    /// Holiday API base URL.
    pub holidays_url: String,
    /// ISO 3166 country code of the holiday calendar.
    pub holiday_country: String,
    /// Upstream request timeout.
    pub http_timeout: Duration,
    /// Per-source base URLs.
    pub endpoints: Endpoints,
}

impl PipelineConfig {
    /// Creates a configuration with defaults for everything but the bucket.
    #[must_use]
    pub fn new(bucket: impl Into<PathBuf>) -> Self {
        Self {
            bucket: bucket.into(),
            all_apis: Source::all().to_vec(),
            focus_indicators: split_list(DEFAULT_FOCUS_INDICATORS),
            focus_series: TemporalSeries::default(),
            holidays_url: HOLIDAYS_URL.to_string(),
            holiday_country: "BR".to_string(),
            http_timeout: ClientConfig::default().timeout,
            endpoints: Endpoints::default(),
        }
    }

    /// Loads configuration from the environment, reading `.env` first if
    /// present.
    ///
    /// `BUCKET` is required. `ALL_APIS`, `FOCUS_INDICATORS`,
    /// `FOCUS_TEMPORAL_SERIES`, `FERIADOS_URL`, `HOLIDAY_COUNTRY`,
    /// `HTTP_TIMEOUT_SECS`, the per-source `*_URL` overrides and
    /// `TESOURO_RESOURCE_ID` are optional.
    ///
    /// # Errors
    ///
    /// Returns an error if `BUCKET` is unset or a variable cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads configuration through an arbitrary variable lookup.
    ///
    /// Blank values count as unset.
    ///
    /// # Errors
    ///
    /// Returns an error if `BUCKET` is unset or a variable cannot be parsed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let bucket = var("BUCKET").ok_or(ConfigError::Missing("BUCKET"))?;
        let mut config = Self::new(bucket.trim());

        if let Some(value) = var("ALL_APIS") {
            config.all_apis = split_list(&value)
                .iter()
                .map(|name| name.parse::<Source>())
                .collect::<Result<_, _>>()
                .map_err(|e| invalid("ALL_APIS", &value, e))?;
        }
        if let Some(value) = var("FOCUS_INDICATORS") {
            config.focus_indicators = split_list(&value);
        }
        if let Some(value) = var("FOCUS_TEMPORAL_SERIES") {
            config.focus_series = value
                .parse()
                .map_err(|e| invalid("FOCUS_TEMPORAL_SERIES", &value, e))?;
        }
        if let Some(value) = var("FERIADOS_URL") {
            config.holidays_url = value;
        }
        if let Some(value) = var("HOLIDAY_COUNTRY") {
            config.holiday_country = value.trim().to_uppercase();
        }
        if let Some(value) = var("HTTP_TIMEOUT_SECS") {
            let seconds: u64 = value
                .trim()
                .parse()
                .map_err(|e| invalid("HTTP_TIMEOUT_SECS", &value, e))?;
            config.http_timeout = Duration::from_secs(seconds);
        }

        let endpoints = &mut config.endpoints;
        for (name, slot) in [
            ("SELIC_URL", &mut endpoints.selic),
            ("DOLAR_URL", &mut endpoints.dolar),
            ("FOCUS_URL", &mut endpoints.focus),
            ("IBGE_URL", &mut endpoints.ibge),
            ("TESOURO_URL", &mut endpoints.tesouro),
        ] {
            if let Some(value) = var(name) {
                *slot = value;
            }
        }
        endpoints.tesouro_resource_id = var("TESOURO_RESOURCE_ID");

        if config.all_apis.is_empty() {
            return Err(ConfigError::Missing("ALL_APIS"));
        }
        if config.focus_indicators.is_empty() {
            return Err(ConfigError::Missing("FOCUS_INDICATORS"));
        }
        Ok(config)
    }

    /// Returns the HTTP client settings.
    #[must_use]
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::default().with_timeout(self.http_timeout)
    }
}

fn invalid(name: &'static str, value: &str, reason: impl ToString) -> ConfigError {
    ConfigError::Invalid {
        name,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Splits a comma-separated list, dropping blank items.
fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
