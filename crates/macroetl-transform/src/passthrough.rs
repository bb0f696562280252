//! Pass-through transform for the Selic, PTAX and treasury sources.

use chrono::NaiveDate;
use macroetl_fetch::{SourceFetcher, SourceRequest};
use macroetl_types::{Record, Source};
use serde_json::Value;
use tracing::{info, warn};

use crate::{TransformError, stamp_date};

/// Splits a list payload into records.
///
/// # Errors
///
/// Returns a shape error if the payload is not an array of objects.
pub(crate) fn rows(origin: Source, payload: Value) -> Result<Vec<Record>, TransformError> {
    let items = match payload {
        Value::Array(items) => items,
        other => {
            return Err(TransformError::shape(
                origin,
                format!("expected a list, got {}", kind(&other)),
            ));
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(record) => Ok(record),
            other => Err(TransformError::shape(
                origin,
                format!("row {index} is {}, expected an object", kind(&other)),
            )),
        })
        .collect()
}

pub(crate) const fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

/// Keeps every upstream row as-is and stamps the execution date.
///
/// # Errors
///
/// Returns a shape error if the payload is not an array of objects.
pub fn normalize(
    origin: Source,
    payload: Value,
    execution_date: NaiveDate,
) -> Result<Vec<Record>, TransformError> {
    let mut records = rows(origin, payload)?;
    stamp_date(&mut records, execution_date);
    Ok(records)
}

/// Transform for sources whose rows need no reshaping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassThroughTransform {
    request: SourceRequest,
}

impl PassThroughTransform {
    /// Creates a pass-through transform for a date-keyed source.
    ///
    /// Returns `None` for [`Source::Focus`].
    #[must_use]
    pub fn new(source: Source, date: NaiveDate) -> Option<Self> {
        SourceRequest::for_date(source, date).map(|request| Self { request })
    }

    /// Returns the source this transform reads.
    #[must_use]
    pub const fn source(&self) -> Source {
        self.request.source()
    }

    /// Returns the query and execution date.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.request.date()
    }

    /// Fetches and normalizes the source.
    ///
    /// # Errors
    ///
    /// Returns an error if the fetch fails or the payload is malformed.
    pub async fn run<F>(&self, fetcher: &F) -> Result<Vec<Record>, TransformError>
    where
        F: SourceFetcher + ?Sized,
    {
        let source = self.source();
        info!(%source, date = %self.date(), "transform started");

        let payload = fetcher.fetch(&self.request).await?;
        let records = normalize(source, payload, self.date())?;

        if records.is_empty() {
            warn!(%source, date = %self.date(), "upstream returned no rows");
        }
        info!(%source, records = records.len(), "transform finished");
        Ok(records)
    }
}
