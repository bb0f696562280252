//! Validated per-source transforms.

use macroetl_fetch::SourceFetcher;
use macroetl_types::{ParamError, Record, Source, TransformParams};

use crate::TransformError;
use crate::focus::FocusTransform;
use crate::ibge::IbgeTransform;
use crate::passthrough::PassThroughTransform;

/// A transform whose parameters have been validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceTransform {
    /// Selic, PTAX or treasury rows kept as-is.
    PassThrough(PassThroughTransform),
    /// Latest Focus expectations per indicator.
    Focus(FocusTransform),
    /// IPCA variables from SIDRA.
    Ibge(IbgeTransform),
}

impl SourceTransform {
    /// Validates `params` against the contract of `source`.
    ///
    /// Every source needs `date` (`dd/mm/YYYY`). Focus also needs
    /// `indicator` (a list of strings) and `temporal_series`.
    ///
    /// # Errors
    ///
    /// Returns an error if a parameter is missing or malformed.
    pub fn from_params(source: Source, params: &TransformParams) -> Result<Self, ParamError> {
        match source {
            Source::Focus => {
                let indicators = params.string_list("indicator")?;
                let date = params.br_date("date")?;
                let series = params.temporal_series("temporal_series")?;
                Ok(Self::Focus(FocusTransform::new(indicators, date, series)))
            }
            Source::Ibge => Ok(Self::Ibge(IbgeTransform::new(params.br_date("date")?))),
            Source::Selic | Source::Dolar | Source::Tesouro => {
                let date = params.br_date("date")?;
                PassThroughTransform::new(source, date)
                    .map(Self::PassThrough)
                    .ok_or(ParamError::InvalidValue {
                        name: "date",
                        reason: format!("{source} is not date-keyed"),
                    })
            }
        }
    }

    /// Returns the source this transform reads.
    #[must_use]
    pub fn source(&self) -> Source {
        match self {
            Self::PassThrough(transform) => transform.source(),
            Self::Focus(_) => Source::Focus,
            Self::Ibge(_) => Source::Ibge,
        }
    }

    /// Fetches and normalizes the source.
    ///
    /// # Errors
    ///
    /// Returns an error if a fetch fails or a payload is malformed.
    pub async fn run<F>(&self, fetcher: &F) -> Result<Vec<Record>, TransformError>
    where
        F: SourceFetcher + ?Sized,
    {
        match self {
            Self::PassThrough(transform) => transform.run(fetcher).await,
            Self::Focus(transform) => transform.run(fetcher).await,
            Self::Ibge(transform) => transform.run(fetcher).await,
        }
    }
}
