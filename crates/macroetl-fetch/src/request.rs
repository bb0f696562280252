//! Source request parameters.

use chrono::NaiveDate;
use macroetl_types::{Source, TemporalSeries};

/// A single upstream query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceRequest {
    /// Selic rate observations for one day.
    Selic {
        /// Query date.
        date: NaiveDate,
    },
    /// PTAX quotes for one day.
    Dolar {
        /// Query date.
        date: NaiveDate,
    },
    /// Focus expectations for one indicator and reference period.
    Focus {
        /// Indicator name as published (e.g. `Selic`, `IPCA`).
        indicator: String,
        /// Date whose year (or month) selects the reference period.
        date: NaiveDate,
        /// Annual or monthly series.
        series: TemporalSeries,
    },
    /// IPCA variables for the month preceding the date.
    Ibge {
        /// Query date.
        date: NaiveDate,
    },
    /// Treasury records matching one day.
    Tesouro {
        /// Query date.
        date: NaiveDate,
    },
}

impl SourceRequest {
    /// Builds a date-only request for one of the date-keyed sources.
    ///
    /// Returns `None` for [`Source::Focus`], which needs an indicator.
    #[must_use]
    pub const fn for_date(source: Source, date: NaiveDate) -> Option<Self> {
        match source {
            Source::Selic => Some(Self::Selic { date }),
            Source::Dolar => Some(Self::Dolar { date }),
            Source::Ibge => Some(Self::Ibge { date }),
            Source::Tesouro => Some(Self::Tesouro { date }),
            Source::Focus => None,
        }
    }

    /// Returns the source this request targets.
    #[must_use]
    pub const fn source(&self) -> Source {
        match self {
            Self::Selic { .. } => Source::Selic,
            Self::Dolar { .. } => Source::Dolar,
            Self::Focus { .. } => Source::Focus,
            Self::Ibge { .. } => Source::Ibge,
            Self::Tesouro { .. } => Source::Tesouro,
        }
    }

    /// Returns the query date.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        match self {
            Self::Selic { date }
            | Self::Dolar { date }
            | Self::Focus { date, .. }
            | Self::Ibge { date }
            | Self::Tesouro { date } => *date,
        }
    }
}
