//! Focus expectations series horizon.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Horizon of the Focus market expectations series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TemporalSeries {
    /// Expectations for a calendar year.
    #[default]
    Anual,
    /// Expectations for a calendar month.
    Mensal,
}

impl TemporalSeries {
    /// Returns the series as the identifier used in configuration.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Anual => "anual",
            Self::Mensal => "mensal",
        }
    }
}

impl std::fmt::Display for TemporalSeries {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TemporalSeries {
    type Err = TemporalSeriesParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "anual" | "annual" | "yearly" => Ok(Self::Anual),
            "mensal" | "monthly" => Ok(Self::Mensal),
            _ => Err(TemporalSeriesParseError(s.to_string())),
        }
    }
}

/// Error returned when parsing an invalid temporal series string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemporalSeriesParseError(String);

impl std::fmt::Display for TemporalSeriesParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid temporal series '{}', expected one of: anual, mensal",
            self.0
        )
    }
}

impl std::error::Error for TemporalSeriesParseError {}
