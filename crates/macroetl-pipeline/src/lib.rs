//! Orchestration for the macroetl job.
//!
//! - [`PipelineConfig`] - Environment-driven settings
//! - [`Event`] - What one invocation should run
//! - [`Pipeline`] - Business-day resolution, dispatch and storage
//! - [`RunReport`] - Per-source outcome of an invocation

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod error;
mod event;
mod pipeline;
mod report;

pub use config::{ConfigError, DEFAULT_FOCUS_INDICATORS, PipelineConfig};
pub use error::PipelineError;
pub use event::{DEFAULT_API, Event};
pub use pipeline::{HttpPipeline, Pipeline};
pub use report::{ApiRun, ApiStatus, NO_DATA, RunReport};
