//! Core types for the macroetl job.
//!
//! This crate provides the data structures shared by every stage of the job:
//!
//! - [`Source`] - One of the five upstream macroeconomic data providers
//! - [`TemporalSeries`] - Horizon of the Focus market expectations series
//! - [`Record`] - A normalized, flat key/value record
//! - [`TransformParams`] - Parameters handed to a single dispatch call
//! - [`parse_br_date`] / [`format_br_date`] - The `dd/mm/YYYY` wire format

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod date;
mod error;
mod params;
mod record;
mod series;
mod source;

pub use date::{
    BR_DATE_FORMAT, ISO_DATE_FORMAT, format_br_date, format_iso_date, parse_br_date,
    parse_iso_date, shift_years,
};
pub use error::{DateParseError, ParamError, UnknownSourceError};
pub use params::TransformParams;
pub use record::{EXECUTION_DATE_FIELD, Record, key_set};
pub use series::{TemporalSeries, TemporalSeriesParseError};
pub use source::Source;
