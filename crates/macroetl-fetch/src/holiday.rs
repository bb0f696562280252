//! Public holiday calendar.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::url::{HOLIDAYS_URL, holidays_url};
use crate::{FetchClient, FetchError};

/// One entry of the holiday calendar, as published by Nager.Date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HolidayEntry {
    /// Calendar date of the holiday.
    pub date: NaiveDate,
    /// Holiday name in the local language.
    pub local_name: String,
    /// Holiday kinds (`Public`, `Bank`, `School`, `Optional`, ...).
    #[serde(default)]
    pub types: Vec<String>,
    /// True when the holiday is observed nationwide.
    #[serde(default)]
    pub global: bool,
}

impl HolidayEntry {
    /// Returns true if this is a nationwide public or bank holiday.
    #[must_use]
    pub fn is_national_closure(&self) -> bool {
        self.global && self.types.iter().any(|t| t == "Public" || t == "Bank")
    }
}

/// Supplies the holiday calendar for a year.
#[async_trait]
pub trait HolidayProvider: Send + Sync {
    /// Returns every calendar entry for `year`.
    async fn holidays(&self, year: i32) -> Result<Vec<HolidayEntry>, FetchError>;
}

/// [`HolidayProvider`] backed by the Nager.Date HTTP API.
#[derive(Debug, Clone)]
pub struct HttpHolidayProvider {
    client: FetchClient,
    base_url: String,
    country: String,
}

impl HttpHolidayProvider {
    /// Creates a provider for `country` (ISO 3166 alpha-2) served at `base_url`.
    #[must_use]
    pub fn new(client: FetchClient, base_url: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            country: country.into(),
        }
    }

    /// Creates a provider for Brazil against the public endpoint.
    #[must_use]
    pub fn brazil(client: FetchClient) -> Self {
        Self::new(client, HOLIDAYS_URL, "BR")
    }
}

#[async_trait]
impl HolidayProvider for HttpHolidayProvider {
    async fn holidays(&self, year: i32) -> Result<Vec<HolidayEntry>, FetchError> {
        let url = holidays_url(&self.base_url, year, &self.country)?;
        self.client.get_json(&url).await
    }
}
