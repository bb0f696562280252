//! Pipeline error types.

use macroetl_calendar::CalendarError;
use macroetl_format::{FormatError, StoreError};
use macroetl_transform::TransformError;
use macroetl_types::DateParseError;
use thiserror::Error;

use crate::ConfigError;

/// Errors that abort an invocation.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The HTTP client could not be built.
    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),

    /// The event date is not `YYYY-MM-DD`.
    #[error("Invalid event date: {0}")]
    EventDate(#[from] DateParseError),

    /// The business day could not be resolved.
    #[error(transparent)]
    Calendar(#[from] CalendarError),

    /// A single-source run failed in its transform.
    #[error(transparent)]
    Transform(#[from] TransformError),

    /// Records could not be serialized.
    #[error(transparent)]
    Format(#[from] FormatError),

    /// Serialized records could not be stored.
    #[error(transparent)]
    Store(#[from] StoreError),
}
