//! IPCA transform over IBGE SIDRA payloads.
//!
//! SIDRA returns a header row first (column labels in place of values),
//! followed by one row per variable and period. Dimension columns are named
//! positionally: `V` is the value, `D2C` the period code (`YYYYMM`), `D3C`
//! and `D3N` the variable code and name.

use chrono::NaiveDate;
use macroetl_fetch::{SourceFetcher, SourceRequest};
use macroetl_types::{Record, Source};
use tracing::{info, warn};

use crate::passthrough::rows;
use crate::{TransformError, stamp_date};

/// Raw SIDRA column to normalized field name.
pub const FIELD_MAP: [(&str, &str); 4] = [
    ("V", "valor_ipca"),
    ("D2C", "ano_mes"),
    ("D3C", "variavel_codigo"),
    ("D3N", "variavel_nome"),
];

/// Variables kept: 63 (monthly variation) and 2265 (12-month variation).
pub const VARIABLES: [&str; 2] = ["63", "2265"];

/// Normalizes a SIDRA payload.
///
/// The first row is always dropped, whatever its contents.
///
/// # Errors
///
/// Returns a shape error if the payload is not an array of objects, or if a
/// kept row lacks one of the mapped columns.
pub fn normalize(
    payload: serde_json::Value,
    execution_date: NaiveDate,
) -> Result<Vec<Record>, TransformError> {
    let rows = rows(Source::Ibge, payload)?;
    info!(source = %Source::Ibge, received = rows.len(), "rows received");

    let mut records = rows
        .into_iter()
        .skip(1)
        .filter(|row| {
            row.get("D3C")
                .and_then(|code| code.as_str())
                .is_some_and(|code| VARIABLES.contains(&code))
        })
        .map(project)
        .collect::<Result<Vec<_>, _>>()?;

    stamp_date(&mut records, execution_date);
    Ok(records)
}

fn project(mut row: Record) -> Result<Record, TransformError> {
    FIELD_MAP
        .iter()
        .map(|(raw, field)| {
            row.remove(*raw)
                .map(|value| ((*field).to_string(), value))
                .ok_or_else(|| {
                    TransformError::shape(Source::Ibge, format!("row without column {raw}"))
                })
        })
        .collect()
}

/// IPCA transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IbgeTransform {
    date: NaiveDate,
}

impl IbgeTransform {
    /// Creates a transform for the given query and execution date.
    #[must_use]
    pub const fn new(date: NaiveDate) -> Self {
        Self { date }
    }

    /// Returns the query and execution date.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Fetches and normalizes the IPCA variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the fetch fails or the payload is malformed.
    pub async fn run<F>(&self, fetcher: &F) -> Result<Vec<Record>, TransformError>
    where
        F: SourceFetcher + ?Sized,
    {
        info!(source = %Source::Ibge, date = %self.date, "transform started");

        let payload = fetcher.fetch(&SourceRequest::Ibge { date: self.date }).await?;
        let records = normalize(payload, self.date)?;

        if records.is_empty() {
            warn!(source = %Source::Ibge, date = %self.date, "no IPCA rows for period");
        }
        info!(source = %Source::Ibge, records = records.len(), "transform finished");
        Ok(records)
    }
}
