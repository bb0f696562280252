//! Output formatting and storage for macroetl.
//!
//! - [`ParquetFormatter`] - Apache Parquet with a schema inferred from the records
//! - [`LocalObjectStore`] - Filesystem bucket addressed by [`partition_key`]

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod formatter;
mod parquet;
pub mod schema;
mod store;

pub use crate::parquet::ParquetFormatter;
pub use formatter::{FormatError, Formatter};
pub use store::{LocalObjectStore, ObjectStore, StoreError, StoredObject, partition_key};
