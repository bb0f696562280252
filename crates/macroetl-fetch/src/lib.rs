//! HTTP clients for the macroetl job.
//!
//! This crate provides the fetch boundary of the pipeline:
//!
//! - [`url`] - Per-source URL construction from [`Endpoints`]
//! - [`FetchClient`] - HTTP client with a bounded timeout and no retries
//! - [`SourceFetcher`] / [`HttpSourceFetcher`] - Raw JSON for a [`SourceRequest`]
//! - [`HolidayProvider`] / [`HttpHolidayProvider`] - National holiday calendar

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod client;
mod holiday;
mod request;
mod source;
pub mod url;

pub use client::{ClientConfig, FetchClient, FetchError};
pub use holiday::{HolidayEntry, HolidayProvider, HttpHolidayProvider};
pub use request::SourceRequest;
pub use source::{HttpSourceFetcher, SourceFetcher, unwrap_envelope};
pub use url::Endpoints;
