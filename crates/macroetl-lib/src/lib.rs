//! Brazilian macroeconomic indicators ETL.
//!
//! This is a facade crate that re-exports functionality from the macroetl
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```ignore
//! use macroetl_lib::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = PipelineConfig::from_env()?;
//!     let pipeline = HttpPipeline::from_config(&config)?;
//!
//!     let report = pipeline.run(&Event::single("dolar", None)).await?;
//!     for run in &report.apis_executadas {
//!         println!("{}: {} records", run.api, run.registros);
//!     }
//!
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use macroetl_types::*;

// Re-export fetch functionality
pub use macroetl_fetch::{
    ClientConfig, Endpoints, FetchClient, FetchError, HolidayEntry, HolidayProvider,
    HttpHolidayProvider, HttpSourceFetcher, SourceFetcher, SourceRequest, url,
};

// Re-export the business-day calendar
pub use macroetl_calendar::{BusinessDayResolver, CalendarError, HolidaySet, resolve};

// Re-export transforms
pub use macroetl_transform::{
    Dispatcher, Extraction, SourceRegistry, SourceSpec, SourceTransform, TransformError, stamp,
};

// Re-export output
#[cfg(feature = "format")]
pub use macroetl_format::{
    FormatError, Formatter, LocalObjectStore, ObjectStore, ParquetFormatter, StoreError,
    StoredObject, partition_key,
};

// Re-export orchestration
#[cfg(feature = "pipeline")]
pub use macroetl_pipeline::{
    ApiRun, ApiStatus, ConfigError, Event, HttpPipeline, Pipeline, PipelineConfig, PipelineError,
    RunReport,
};

/// Prelude module for convenient imports.
///
/// ```
/// use macroetl_lib::prelude::*;
/// ```
pub mod prelude {
    pub use macroetl_types::{Record, Source, TemporalSeries, TransformParams};

    pub use macroetl_fetch::{HolidayProvider, SourceFetcher, SourceRequest};

    pub use macroetl_calendar::{BusinessDayResolver, HolidaySet};

    pub use macroetl_transform::{Dispatcher, SourceRegistry};

    #[cfg(feature = "format")]
    pub use macroetl_format::{Formatter, ObjectStore, ParquetFormatter};

    #[cfg(feature = "pipeline")]
    pub use macroetl_pipeline::{Event, HttpPipeline, Pipeline, PipelineConfig, RunReport};
}
