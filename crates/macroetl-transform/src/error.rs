//! Transform error types.

use macroetl_fetch::FetchError;
use macroetl_types::{DateParseError, ParamError, Source, UnknownSourceError};
use thiserror::Error;

/// Errors raised by a transform or the dispatcher.
///
/// An empty upstream payload is not an error.
#[derive(Error, Debug)]
pub enum TransformError {
    /// The upstream request failed.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The payload did not have the expected structure.
    #[error("Unexpected {origin} payload: {detail}")]
    Shape {
        /// Source that produced the payload.
        origin: Source,
        /// What was wrong with it.
        detail: String,
    },

    /// Dispatch parameters were missing or had the wrong type.
    #[error(transparent)]
    Param(#[from] ParamError),

    /// The source name is not registered.
    #[error(transparent)]
    UnknownSource(#[from] UnknownSourceError),

    /// The execution date could not be parsed.
    #[error(transparent)]
    Date(#[from] DateParseError),
}

impl TransformError {
    pub(crate) fn shape(origin: Source, detail: impl Into<String>) -> Self {
        Self::Shape {
            origin,
            detail: detail.into(),
        }
    }
}
