//! Business-day command implementation.

use anyhow::{Context, Result};
use macroetl_lib::prelude::*;
use macroetl_lib::url::HOLIDAYS_URL;
use macroetl_lib::{FetchClient, HttpHolidayProvider, format_br_date, parse_iso_date};

/// Prints the date `offset` business days before the reference date.
pub(crate) async fn business_day(date: Option<&str>, offset: u32) -> Result<()> {
    let reference = match date {
        Some(date) => parse_iso_date(date)?,
        None => chrono::Local::now().date_naive(),
    };

    let base_url =
        std::env::var("FERIADOS_URL").unwrap_or_else(|_| HOLIDAYS_URL.to_string());
    let country = std::env::var("HOLIDAY_COUNTRY").unwrap_or_else(|_| "BR".to_string());
    let client = FetchClient::with_defaults()?;
    let resolver = BusinessDayResolver::new(HttpHolidayProvider::new(client, base_url, country));

    let resolved = resolver
        .previous_business_day(reference, offset)
        .await
        .with_context(|| format!("Failed to resolve business day for {reference}"))?;

    println!("{resolved} ({})", format_br_date(resolved));
    Ok(())
}
