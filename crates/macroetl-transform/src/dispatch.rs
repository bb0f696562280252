//! Name-based transform dispatch.

use macroetl_fetch::SourceFetcher;
use macroetl_types::{Record, TransformParams, UnknownSourceError};
use tracing::{debug, error};

use crate::{SourceRegistry, TransformError};

/// Outcome of a successful dispatch.
///
/// Keeps "the source had nothing for this date" apart from failures, which
/// travel as `Err`.
#[derive(Debug, Clone, PartialEq)]
pub enum Extraction {
    /// At least one record was produced.
    Records(Vec<Record>),
    /// The source returned no rows.
    NoData,
}

impl Extraction {
    /// Returns the number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Records(records) => records.len(),
            Self::NoData => 0,
        }
    }

    /// Returns true for [`Extraction::NoData`].
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::NoData)
    }

    /// Returns the records, empty for [`Extraction::NoData`].
    #[must_use]
    pub fn into_records(self) -> Vec<Record> {
        match self {
            Self::Records(records) => records,
            Self::NoData => Vec::new(),
        }
    }
}

impl From<Vec<Record>> for Extraction {
    fn from(records: Vec<Record>) -> Self {
        if records.is_empty() {
            Self::NoData
        } else {
            Self::Records(records)
        }
    }
}

/// Runs transforms by source name.
///
/// Stateless apart from the fetcher. Errors are logged with the source name
/// and returned unchanged.
#[derive(Debug, Clone)]
pub struct Dispatcher<F> {
    fetcher: F,
}

impl<F: SourceFetcher> Dispatcher<F> {
    /// Creates a dispatcher over the given fetcher.
    #[must_use]
    pub const fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    /// Returns the fetcher.
    #[must_use]
    pub const fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Looks up `name`, validates `params` and runs the transform.
    ///
    /// Parameters are validated before any request is made. An empty result
    /// is `Ok(vec![])`.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::UnknownSource`] for an unregistered name,
    /// [`TransformError::Param`] for an invalid parameter set, or whatever the
    /// transform raised.
    pub async fn execute(
        &self,
        name: &str,
        params: &TransformParams,
    ) -> Result<Vec<Record>, TransformError> {
        let result = self.try_execute(name, params).await;
        if let Err(e) = &result {
            error!(source = name, error = %e, "transform failed");
        }
        result
    }

    /// Like [`Dispatcher::execute`], but tags the outcome as
    /// [`Extraction::Records`] or [`Extraction::NoData`].
    ///
    /// # Errors
    ///
    /// Same as [`Dispatcher::execute`].
    pub async fn extract(
        &self,
        name: &str,
        params: &TransformParams,
    ) -> Result<Extraction, TransformError> {
        self.execute(name, params).await.map(Extraction::from)
    }

    async fn try_execute(
        &self,
        name: &str,
        params: &TransformParams,
    ) -> Result<Vec<Record>, TransformError> {
        let spec = SourceRegistry::global()
            .get(name)
            .ok_or_else(|| UnknownSourceError(name.to_string()))?;
        let transform = spec.prepare(params)?;
        debug!(source = %spec.source(), ?params, "dispatching");
        transform.run(&self.fetcher).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedFetcher;
    use chrono::Datelike;
    use macroetl_fetch::{FetchError, SourceRequest};
    use macroetl_types::{EXECUTION_DATE_FIELD, ParamError, Source};
    use serde_json::json;

    fn focus_params() -> TransformParams {
        TransformParams::new()
            .with("indicator", json!(["Selic"]))
            .with("date", "14/11/2025")
            .with("temporal_series", "anual")
    }

    #[tokio::test]
    async fn test_unknown_source_makes_no_request() {
        let dispatcher = Dispatcher::new(ScriptedFetcher::new(|_| json!([])));
        let err = dispatcher
            .execute("unknown", &TransformParams::new().with("date", "14/11/2025"))
            .await
            .unwrap_err();

        assert!(matches!(err, TransformError::UnknownSource(UnknownSourceError(ref n)) if n == "unknown"));
        assert_eq!(dispatcher.fetcher().calls(), 0);
    }

    #[tokio::test]
    async fn test_invalid_indicator_makes_no_request() {
        let dispatcher = Dispatcher::new(ScriptedFetcher::new(|_| json!([])));
        let params = focus_params().with("indicator", "Selic");

        let err = dispatcher.execute("focus", &params).await.unwrap_err();

        assert!(matches!(
            err,
            TransformError::Param(ParamError::InvalidType {
                name: "indicator",
                ..
            })
        ));
        assert_eq!(dispatcher.fetcher().calls(), 0);
    }

    #[tokio::test]
    async fn test_focus_without_data_is_empty() {
        let dispatcher = Dispatcher::new(ScriptedFetcher::new(|_| json!([])));

        let records = dispatcher.execute("focus", &focus_params()).await.unwrap();

        assert!(records.is_empty());
        assert_eq!(dispatcher.fetcher().calls(), 2);
        let years: Vec<i32> = dispatcher
            .fetcher()
            .requests()
            .iter()
            .map(|request| request.date().year())
            .collect();
        assert_eq!(years, [2025, 2026]);
    }

    #[tokio::test]
    async fn test_name_is_case_insensitive() {
        let dispatcher = Dispatcher::new(ScriptedFetcher::new(|_| json!([{"valor": "0.055131"}])));
        let params = TransformParams::new().with("date", "13/11/2025");

        let records = dispatcher.execute("SELIC", &params).await.unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0][EXECUTION_DATE_FIELD], json!("2025-11-13"));
        assert_eq!(
            dispatcher.fetcher().requests()[0].source(),
            Source::Selic
        );
    }

    #[tokio::test]
    async fn test_fetch_error_passes_through() {
        let dispatcher = Dispatcher::new(ScriptedFetcher::fallible(|_| {
            Err(FetchError::Status {
                url: "https://api.bcb.gov.br".to_string(),
                status: 503,
            })
        }));
        let params = TransformParams::new().with("date", "13/11/2025");

        let err = dispatcher.execute("dolar", &params).await.unwrap_err();

        assert!(matches!(
            err,
            TransformError::Fetch(FetchError::Status { status: 503, .. })
        ));
    }

    #[tokio::test]
    async fn test_shape_error_passes_through() {
        let dispatcher = Dispatcher::new(ScriptedFetcher::new(|_| json!({"erro": "indisponível"})));
        let params = TransformParams::new().with("date", "13/11/2025");

        let err = dispatcher.execute("tesouro", &params).await.unwrap_err();

        assert!(matches!(
            err,
            TransformError::Shape {
                origin: Source::Tesouro,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_extract_distinguishes_no_data() {
        let empty = Dispatcher::new(ScriptedFetcher::new(|_| json!([])));
        let params = TransformParams::new().with("date", "13/11/2025");
        let extraction = empty.extract("ibge", &params).await.unwrap();
        assert_eq!(extraction, Extraction::NoData);
        assert!(extraction.is_empty());

        let full = Dispatcher::new(ScriptedFetcher::new(|request| {
            assert!(matches!(request, SourceRequest::Selic { .. }));
            json!([{"data": "13/11/2025", "valor": "0.055131"}])
        }));
        let extraction = full.extract("selic", &params).await.unwrap();
        assert_eq!(extraction.len(), 1);
        assert_eq!(extraction.into_records().len(), 1);
    }
}
