//! Invocation orchestration.

use chrono::{Local, NaiveDate};
use macroetl_calendar::BusinessDayResolver;
use macroetl_fetch::{
    FetchClient, HolidayProvider, HttpHolidayProvider, HttpSourceFetcher, SourceFetcher,
};
use macroetl_format::{Formatter, LocalObjectStore, ObjectStore, ParquetFormatter, partition_key};
use macroetl_transform::{Dispatcher, Extraction, TransformError};
use macroetl_types::{Record, Source, TemporalSeries, TransformParams, format_br_date};
use serde_json::Value;
use tracing::{info, warn};

use crate::{ApiRun, Event, PipelineConfig, PipelineError, RunReport};

/// Business days between the reference date and the queried date.
const BUSINESS_DAY_OFFSET: u32 = 1;

/// Pipeline wired to the public HTTP endpoints and a local bucket.
pub type HttpPipeline = Pipeline<HttpSourceFetcher, HttpHolidayProvider, LocalObjectStore>;

/// Focus settings injected into every Focus dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
struct FocusSettings {
    indicators: Vec<String>,
    series: TemporalSeries,
}

/// Runs events end to end: resolve the business day, dispatch each source
/// in order, store non-empty results.
#[derive(Debug)]
pub struct Pipeline<F, H, S> {
    resolver: BusinessDayResolver<H>,
    dispatcher: Dispatcher<F>,
    store: S,
    formatter: ParquetFormatter,
    all_apis: Vec<Source>,
    focus: FocusSettings,
}

impl HttpPipeline {
    /// Builds a pipeline over the configured HTTP endpoints and bucket.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn from_config(config: &PipelineConfig) -> Result<Self, PipelineError> {
        let client = FetchClient::new(config.client_config())?;
        let holidays = HttpHolidayProvider::new(
            client.clone(),
            config.holidays_url.clone(),
            config.holiday_country.clone(),
        );
        let fetcher = HttpSourceFetcher::new(client, config.endpoints.clone());
        let store = LocalObjectStore::new(config.bucket.clone());
        Ok(Self::new(config, fetcher, holidays, store))
    }
}

impl<F, H, S> Pipeline<F, H, S>
where
    F: SourceFetcher,
    H: HolidayProvider,
    S: ObjectStore,
{
    /// Creates a pipeline from its collaborators.
    #[must_use]
    pub fn new(config: &PipelineConfig, fetcher: F, holidays: H, store: S) -> Self {
        Self {
            resolver: BusinessDayResolver::new(holidays),
            dispatcher: Dispatcher::new(fetcher),
            store,
            formatter: ParquetFormatter::new(),
            all_apis: config.all_apis.clone(),
            focus: FocusSettings {
                indicators: config.focus_indicators.clone(),
                series: config.focus_series,
            },
        }
    }

    /// Returns the business-day resolver.
    #[must_use]
    pub const fn resolver(&self) -> &BusinessDayResolver<H> {
        &self.resolver
    }

    /// Returns the dispatcher.
    #[must_use]
    pub const fn dispatcher(&self) -> &Dispatcher<F> {
        &self.dispatcher
    }

    /// Returns the object store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Runs an event with today's local date as the fallback reference date.
    ///
    /// # Errors
    ///
    /// See [`Pipeline::run_at`].
    pub async fn run(&self, event: &Event) -> Result<RunReport, PipelineError> {
        self.run_at(event, Local::now().date_naive()).await
    }

    /// Runs an event, using `today` when the event carries no date.
    ///
    /// # Errors
    ///
    /// Returns an error if the event date is malformed, the holiday calendar
    /// cannot be fetched, or, for single-source events, the source fails.
    /// Batch events record per-source failures in the report instead.
    pub async fn run_at(&self, event: &Event, today: NaiveDate) -> Result<RunReport, PipelineError> {
        let reference = event.reference_date(today)?;
        let business_day = self
            .resolver
            .previous_business_day(reference, BUSINESS_DAY_OFFSET)
            .await?;

        let names: Vec<&str> = if event.run_all {
            self.all_apis.iter().map(Source::as_str).collect()
        } else {
            vec![event.api_name()]
        };
        info!(
            %reference,
            business_day = %business_day,
            run_all = event.run_all,
            sources = ?names,
            "run started"
        );

        let mut report = RunReport::new(business_day);
        for name in names {
            let params = self.params_for(name, business_day);
            match self.run_source(name, &params, business_day).await {
                Ok(run) => report.push(run),
                Err(e) if event.run_all => {
                    warn!(source = name, error = %e, "source failed, continuing batch");
                    report.push(ApiRun::failed(name, params, &e));
                }
                Err(e) => return Err(e),
            }
        }

        info!(
            business_day = %business_day,
            records = report.total_records(),
            "run finished"
        );
        Ok(report)
    }

    /// Builds the dispatch parameters for a source.
    ///
    /// Every source gets `date`; Focus also gets `indicator` and
    /// `temporal_series`.
    #[must_use]
    pub fn params_for(&self, name: &str, business_day: NaiveDate) -> TransformParams {
        let mut params = TransformParams::new().with("date", format_br_date(business_day));
        if name.parse::<Source>() == Ok(Source::Focus) {
            let indicators: Vec<Value> = self
                .focus
                .indicators
                .iter()
                .map(|indicator| Value::String(indicator.clone()))
                .collect();
            params.insert("indicator", indicators);
            params.insert("temporal_series", self.focus.series.as_str());
        }
        params
    }

    async fn run_source(
        &self,
        name: &str,
        params: &TransformParams,
        business_day: NaiveDate,
    ) -> Result<ApiRun, PipelineError> {
        match self.dispatcher.extract(name, params).await? {
            Extraction::NoData => {
                warn!(source = name, "no data returned");
                Ok(ApiRun::no_data(name, params.clone()))
            }
            Extraction::Records(records) => {
                let source = name.parse::<Source>().map_err(TransformError::from)?;
                let arquivo = self.write(source, business_day, &records).await?;
                Ok(ApiRun::ok(name, params.clone(), records.len(), arquivo))
            }
        }
    }

    async fn write(
        &self,
        source: Source,
        business_day: NaiveDate,
        records: &[Record],
    ) -> Result<String, PipelineError> {
        let bytes = self.formatter.to_bytes(records)?;
        let key = partition_key(source, business_day);
        let stored = self.store.put(&key, bytes).await?;
        info!(%source, records = records.len(), object = %stored, "records stored");
        Ok(stored.uri)
    }
}
