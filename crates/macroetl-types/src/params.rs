//! Parameters for a single dispatch call.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::{ParamError, TemporalSeries, parse_br_date};

/// Mapping from parameter name to value, built per source by the caller.
///
/// Typed accessors validate a value on read; the raw map is what gets
/// echoed back in the run report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransformParams(BTreeMap<String, Value>);

impl TransformParams {
    /// Creates an empty parameter map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a parameter, replacing any previous value.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Inserts a parameter, replacing any previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(name.into(), value.into());
    }

    /// Returns the raw value of a parameter.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Returns the number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no parameters are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn require(&self, name: &'static str) -> Result<&Value, ParamError> {
        self.0.get(name).ok_or(ParamError::Missing(name))
    }

    /// Reads a required string parameter.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameter is absent or not a string.
    pub fn string(&self, name: &'static str) -> Result<&str, ParamError> {
        let value = self.require(name)?;
        value.as_str().ok_or_else(|| ParamError::InvalidType {
            name,
            expected: "a string",
            found: value.to_string(),
        })
    }

    /// Reads a required `dd/mm/YYYY` date parameter.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameter is absent, not a string, or not a
    /// valid date.
    pub fn br_date(&self, name: &'static str) -> Result<NaiveDate, ParamError> {
        let raw = self.string(name)?;
        parse_br_date(raw).map_err(|e| ParamError::InvalidValue {
            name,
            reason: e.to_string(),
        })
    }

    /// Reads a required list-of-strings parameter.
    ///
    /// A bare string is rejected: the caller must pass a list even for a
    /// single element.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameter is absent, not an array, or holds a
    /// non-string element.
    pub fn string_list(&self, name: &'static str) -> Result<Vec<String>, ParamError> {
        let value = self.require(name)?;
        let invalid = || ParamError::InvalidType {
            name,
            expected: "a list of strings",
            found: value.to_string(),
        };

        value
            .as_array()
            .ok_or_else(invalid)?
            .iter()
            .map(|item| item.as_str().map(str::to_string).ok_or_else(invalid))
            .collect()
    }

    /// Reads a required temporal series parameter.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameter is absent, not a string, or not a
    /// known series.
    pub fn temporal_series(&self, name: &'static str) -> Result<TemporalSeries, ParamError> {
        self.string(name)?
            .parse::<TemporalSeries>()
            .map_err(|e| ParamError::InvalidValue {
                name,
                reason: e.to_string(),
            })
    }
}
