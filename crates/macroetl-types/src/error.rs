//! Error types shared across macroetl crates.

use thiserror::Error;

/// A date string did not match the expected format.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid date '{value}', expected format {format}")]
pub struct DateParseError {
    /// The rejected input.
    pub value: String,
    /// The `strftime` pattern that was expected.
    pub format: &'static str,
}

/// A source name that is not one of the known variants.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown source '{0}', expected one of: selic, dolar, focus, ibge, tesouro")]
pub struct UnknownSourceError(pub String);

/// Errors raised while validating [`TransformParams`](crate::TransformParams).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParamError {
    /// A required parameter is absent.
    #[error("Missing parameter '{0}'")]
    Missing(&'static str),

    /// A parameter has the wrong JSON type.
    #[error("Parameter '{name}' must be {expected}, got {found}")]
    InvalidType {
        /// Parameter name.
        name: &'static str,
        /// Human readable description of the expected type.
        expected: &'static str,
        /// The offending value rendered as JSON.
        found: String,
    },

    /// A parameter has the right type but an unusable value.
    #[error("Invalid value for parameter '{name}': {reason}")]
    InvalidValue {
        /// Parameter name.
        name: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}
