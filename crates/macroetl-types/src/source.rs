//! Upstream data source definitions.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::UnknownSourceError;

/// One upstream macroeconomic data provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    /// Selic interest rate (BCB SGS).
    Selic,
    /// USD/BRL PTAX exchange rate (BCB Olinda).
    Dolar,
    /// Focus market expectations survey (BCB Olinda).
    Focus,
    /// IPCA consumer price index (IBGE SIDRA).
    Ibge,
    /// National treasury data (Tesouro Transparente).
    Tesouro,
}

impl Source {
    /// Returns the canonical source name, used for dispatch and partitioning.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Selic => "selic",
            Self::Dolar => "dolar",
            Self::Focus => "focus",
            Self::Ibge => "ibge",
            Self::Tesouro => "tesouro",
        }
    }

    /// Returns a one-line description of the source.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Selic => "Selic interest rate (BCB SGS series 11)",
            Self::Dolar => "USD/BRL PTAX quotes (BCB Olinda)",
            Self::Focus => "Focus market expectations, latest median per indicator",
            Self::Ibge => "IPCA monthly and 12-month variation (IBGE SIDRA 1737)",
            Self::Tesouro => "Treasury data (Tesouro Transparente datastore)",
        }
    }

    /// Returns all sources in their canonical run order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Selic,
            Self::Dolar,
            Self::Focus,
            Self::Ibge,
            Self::Tesouro,
        ]
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Source {
    type Err = UnknownSourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "selic" => Ok(Self::Selic),
            "dolar" => Ok(Self::Dolar),
            "focus" => Ok(Self::Focus),
            "ibge" => Ok(Self::Ibge),
            "tesouro" => Ok(Self::Tesouro),
            _ => Err(UnknownSourceError(s.to_string())),
        }
    }
}
