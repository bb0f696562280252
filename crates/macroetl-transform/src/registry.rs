//! Source lookup table.

use std::collections::HashMap;
use std::sync::OnceLock;

use macroetl_types::{ParamError, Source, TransformParams};

use crate::SourceTransform;

/// Global source registry instance.
static REGISTRY: OnceLock<SourceRegistry> = OnceLock::new();

/// Parameters every date-keyed source requires.
const DATE_PARAMS: &[&str] = &["date"];

/// Parameters the Focus source requires.
const FOCUS_PARAMS: &[&str] = &["indicator", "date", "temporal_series"];

/// Registry entry describing one source and its parameter contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceSpec {
    source: Source,
    required_params: &'static [&'static str],
}

impl SourceSpec {
    const fn new(source: Source) -> Self {
        let required_params = match source {
            Source::Focus => FOCUS_PARAMS,
            Source::Selic | Source::Dolar | Source::Ibge | Source::Tesouro => DATE_PARAMS,
        };
        Self {
            source,
            required_params,
        }
    }

    /// Returns the source.
    #[must_use]
    pub const fn source(&self) -> Source {
        self.source
    }

    /// Returns the canonical name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.source.as_str()
    }

    /// Returns a human-readable description.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        self.source.description()
    }

    /// Returns the parameter names the source requires.
    #[must_use]
    pub const fn required_params(&self) -> &'static [&'static str] {
        self.required_params
    }

    /// Validates `params` into a runnable transform.
    ///
    /// # Errors
    ///
    /// Returns an error if a required parameter is missing or malformed.
    pub fn prepare(&self, params: &TransformParams) -> Result<SourceTransform, ParamError> {
        SourceTransform::from_params(self.source, params)
    }
}

/// Registry of the supported sources.
#[derive(Debug)]
pub struct SourceRegistry {
    specs: HashMap<&'static str, SourceSpec>,
}

impl SourceRegistry {
    /// Returns the global source registry.
    ///
    /// The registry is initialized lazily on first access.
    #[must_use]
    pub fn global() -> &'static Self {
        REGISTRY.get_or_init(Self::load)
    }

    fn load() -> Self {
        let specs = Source::all()
            .iter()
            .map(|source| (source.as_str(), SourceSpec::new(*source)))
            .collect();
        Self { specs }
    }

    /// Looks up a source by name (case-insensitive).
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&SourceSpec> {
        self.specs.get(name.trim().to_lowercase().as_str())
    }

    /// Returns every entry in canonical source order.
    pub fn all(&self) -> impl Iterator<Item = &SourceSpec> {
        Source::all()
            .iter()
            .filter_map(|source| self.specs.get(source.as_str()))
    }

    /// Returns all source names sorted alphabetically.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.specs.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Returns the number of registered sources.
    #[must_use]
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    /// Returns true if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}
