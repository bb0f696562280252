//! Record transformers for the macroetl job.
//!
//! - [`stamp`] - Stamps records with the canonical execution date
//! - [`SourceTransform`] - Validated, per-source transform ready to run
//! - [`SourceRegistry`] - Lookup table from source name to [`SourceSpec`]
//! - [`Dispatcher`] - Name-based entry point used by the orchestrator

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod dispatch;
mod error;
pub mod focus;
pub mod ibge;
pub mod passthrough;
mod registry;
mod stamp;
#[cfg(test)]
mod testing;
mod transform;

pub use dispatch::{Dispatcher, Extraction};
pub use error::TransformError;
pub use registry::{SourceRegistry, SourceSpec};
pub use stamp::{stamp, stamp_date};
pub use transform::SourceTransform;
