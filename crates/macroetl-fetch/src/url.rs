//! Upstream URL construction.

use chrono::{Datelike, NaiveDate};
use macroetl_types::{TemporalSeries, format_br_date};
use reqwest::Url;

use crate::{FetchError, SourceRequest};

/// BCB SGS series 11 (daily Selic rate).
pub const SELIC_URL: &str = "https://api.bcb.gov.br/dados/serie/bcdata.sgs.11/dados";

/// BCB Olinda PTAX OData service.
pub const DOLAR_URL: &str = "https://olinda.bcb.gov.br/olinda/servico/PTAX/versao/v1/odata";

/// BCB Olinda market expectations OData service.
pub const FOCUS_URL: &str =
    "https://olinda.bcb.gov.br/olinda/servico/Expectativas/versao/v1/odata";

/// IBGE SIDRA table 1737 (IPCA), variables 63 and 2265, national level.
pub const IBGE_URL: &str = "https://apisidra.ibge.gov.br/values/t/1737/n1/all/v/63,2265/p";

/// Tesouro Transparente CKAN datastore search.
pub const TESOURO_URL: &str =
    "https://www.tesourotransparente.gov.br/ckan/api/3/action/datastore_search";

/// Nager.Date public holiday API.
pub const HOLIDAYS_URL: &str = "https://date.nager.at/api/v3/PublicHolidays";

/// Base URLs for every upstream source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// Selic series endpoint.
    pub selic: String,
    /// PTAX OData service root.
    pub dolar: String,
    /// Expectations OData service root.
    pub focus: String,
    /// SIDRA values path up to the period segment.
    pub ibge: String,
    /// Datastore search endpoint.
    pub tesouro: String,
    /// Datastore resource queried for treasury data.
    pub tesouro_resource_id: Option<String>,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            selic: SELIC_URL.to_string(),
            dolar: DOLAR_URL.to_string(),
            focus: FOCUS_URL.to_string(),
            ibge: IBGE_URL.to_string(),
            tesouro: TESOURO_URL.to_string(),
            tesouro_resource_id: None,
        }
    }
}

impl Endpoints {
    /// Returns endpoints where every source is served under `base`.
    ///
    /// Paths are `{base}/selic`, `{base}/dolar`, and so on.
    #[must_use]
    pub fn rooted_at(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            selic: format!("{base}/selic"),
            dolar: format!("{base}/dolar"),
            focus: format!("{base}/focus"),
            ibge: format!("{base}/ibge"),
            tesouro: format!("{base}/tesouro"),
            tesouro_resource_id: None,
        }
    }

    /// Builds the URL for a request.
    ///
    /// # Errors
    ///
    /// Returns an error if an endpoint is not a valid URL, or if the treasury
    /// resource is requested without a configured resource id.
    pub fn url_for(&self, request: &SourceRequest) -> Result<Url, FetchError> {
        match request {
            SourceRequest::Selic { date } => sgs_url(&self.selic, *date),
            SourceRequest::Dolar { date } => ptax_url(&self.dolar, *date),
            SourceRequest::Focus {
                indicator,
                date,
                series,
            } => focus_url(&self.focus, indicator, *date, *series),
            SourceRequest::Ibge { date } => sidra_url(&self.ibge, *date),
            SourceRequest::Tesouro { date } => {
                let resource = self
                    .tesouro_resource_id
                    .as_deref()
                    .ok_or(FetchError::NotConfigured("TESOURO_RESOURCE_ID"))?;
                datastore_url(&self.tesouro, resource, *date)
            }
        }
    }
}

fn parse(url: String) -> Result<Url, FetchError> {
    Url::parse(&url).map_err(|e| FetchError::InvalidUrl {
        reason: e.to_string(),
        url,
    })
}

/// Builds an SGS series URL for a single day.
///
/// # Errors
///
/// Returns an error if `base` is not a valid URL.
pub fn sgs_url(base: &str, date: NaiveDate) -> Result<Url, FetchError> {
    let day = format_br_date(date);
    parse(format!(
        "{base}?formato=json&dataInicial={day}&dataFinal={day}"
    ))
}

/// Builds a PTAX `CotacaoDolarDia` URL.
///
/// PTAX expects the date as `MM-DD-YYYY`.
///
/// # Errors
///
/// Returns an error if `base` is not a valid URL.
pub fn ptax_url(base: &str, date: NaiveDate) -> Result<Url, FetchError> {
    parse(format!(
        "{base}/CotacaoDolarDia(dataCotacao=@dataCotacao)?@dataCotacao='{}'&$format=json",
        date.format("%m-%d-%Y")
    ))
}

/// Builds a Focus expectations URL for one indicator.
///
/// The reference period is the date's year for annual series and its
/// `MM/YYYY` month for monthly series. Results are ordered by publication
/// date so the last element is the latest revision.
///
/// # Errors
///
/// Returns an error if `base` is not a valid URL.
pub fn focus_url(
    base: &str,
    indicator: &str,
    date: NaiveDate,
    series: TemporalSeries,
) -> Result<Url, FetchError> {
    let (entity, reference) = match series {
        TemporalSeries::Anual => ("ExpectativasMercadoAnuais", date.year().to_string()),
        TemporalSeries::Mensal => (
            "ExpectativaMercadoMensais",
            date.format("%m/%Y").to_string(),
        ),
    };
    // OData string literals escape quotes by doubling them.
    let indicator = indicator.replace('\'', "''");

    parse(format!(
        "{base}/{entity}?$filter=Indicador eq '{indicator}' and DataReferencia eq '{reference}'&$orderby=Data asc&$format=json"
    ))
}

/// Builds a SIDRA URL for the month preceding `date`.
///
/// IPCA for a month is only published during the following month, so the
/// latest figure available on `date` is the previous month's.
///
/// # Errors
///
/// Returns an error if `base` is not a valid URL.
pub fn sidra_url(base: &str, date: NaiveDate) -> Result<Url, FetchError> {
    let (year, month) = if date.month() == 1 {
        (date.year() - 1, 12)
    } else {
        (date.year(), date.month() - 1)
    };
    parse(format!("{}/{year}{month:02}", base.trim_end_matches('/')))
}

/// Builds a CKAN datastore search URL matching one day.
///
/// # Errors
///
/// Returns an error if `base` is not a valid URL.
pub fn datastore_url(base: &str, resource_id: &str, date: NaiveDate) -> Result<Url, FetchError> {
    parse(format!(
        "{base}?resource_id={resource_id}&q={}",
        format_br_date(date)
    ))
}

/// Builds the holiday calendar URL for a year and ISO country code.
///
/// # Errors
///
/// Returns an error if `base` is not a valid URL.
pub fn holidays_url(base: &str, year: i32, country: &str) -> Result<Url, FetchError> {
    parse(format!("{}/{year}/{country}", base.trim_end_matches('/')))
}
