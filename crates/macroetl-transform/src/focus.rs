//! Focus market expectations transform.

use chrono::NaiveDate;
use macroetl_fetch::{SourceFetcher, SourceRequest};
use macroetl_types::{Record, Source, TemporalSeries, shift_years};
use serde_json::Value;
use tracing::{info, warn};

use crate::passthrough::rows;
use crate::{TransformError, stamp_date};

/// Fields kept from each expectations row.
pub const FIELDS: [&str; 4] = ["Indicador", "Data", "DataReferencia", "Mediana"];

/// Returns the most recent revision in an expectations series, projected
/// onto [`FIELDS`].
///
/// Fields absent from the row are kept as nulls. Returns `Ok(None)` for an
/// empty series.
///
/// # Errors
///
/// Returns a shape error if the payload is not an array of objects.
pub fn latest_revision(payload: Value) -> Result<Option<Record>, TransformError> {
    let Some(mut last) = rows(Source::Focus, payload)?.pop() else {
        return Ok(None);
    };

    let record = FIELDS
        .iter()
        .map(|field| {
            let value = last.remove(*field).unwrap_or(Value::Null);
            ((*field).to_string(), value)
        })
        .collect();
    Ok(Some(record))
}

/// Focus expectations transform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusTransform {
    indicators: Vec<String>,
    date: NaiveDate,
    series: TemporalSeries,
}

impl FocusTransform {
    /// Creates a transform over the given indicators.
    #[must_use]
    pub const fn new(indicators: Vec<String>, date: NaiveDate, series: TemporalSeries) -> Self {
        Self {
            indicators,
            date,
            series,
        }
    }

    /// Returns the indicators queried.
    #[must_use]
    pub fn indicators(&self) -> &[String] {
        &self.indicators
    }

    /// Returns the series horizon.
    #[must_use]
    pub const fn series(&self) -> TemporalSeries {
        self.series
    }

    /// Returns the dates queried per indicator: the requested date and the
    /// same date one year later.
    ///
    /// The second date selects next year's reference period.
    #[must_use]
    pub fn reference_dates(&self) -> [NaiveDate; 2] {
        [self.date, shift_years(self.date, 1)]
    }

    /// Fetches the latest expectation of every (indicator, reference date)
    /// pair, skipping pairs without data.
    ///
    /// Records are stamped with the requested date.
    ///
    /// # Errors
    ///
    /// Returns the first fetch or shape error encountered.
    pub async fn run<F>(&self, fetcher: &F) -> Result<Vec<Record>, TransformError>
    where
        F: SourceFetcher + ?Sized,
    {
        info!(
            source = %Source::Focus,
            indicators = ?self.indicators,
            date = %self.date,
            series = %self.series,
            "transform started"
        );

        let mut records = Vec::new();
        for indicator in &self.indicators {
            for date in self.reference_dates() {
                info!(source = %Source::Focus, %indicator, %date, "querying expectations");

                let request = SourceRequest::Focus {
                    indicator: indicator.clone(),
                    date,
                    series: self.series,
                };
                let payload = fetcher.fetch(&request).await?;

                match latest_revision(payload)? {
                    Some(record) => records.push(record),
                    None => {
                        warn!(source = %Source::Focus, %indicator, %date, "no expectations returned");
                    }
                }
            }
        }

        stamp_date(&mut records, self.date);
        info!(source = %Source::Focus, records = records.len(), "transform finished");
        Ok(records)
    }
}
