//! Business-day resolution.

use chrono::{Datelike, NaiveDate, Weekday};
use macroetl_fetch::{FetchError, HolidayProvider};
use thiserror::Error;
use tracing::{debug, info};

use crate::HolidaySet;

/// Errors raised while resolving a business day.
#[derive(Error, Debug)]
pub enum CalendarError {
    /// The holiday calendar could not be fetched.
    #[error("Failed to fetch holidays for {year}: {source}")]
    Holidays {
        /// Calendar year requested.
        year: i32,
        /// The underlying fetch error.
        source: FetchError,
    },
}

/// Returns true for Saturday and Sunday.
#[must_use]
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Returns true if `date` is neither a weekend day nor a holiday.
#[must_use]
pub fn is_business_day(date: NaiveDate, holidays: &HolidaySet) -> bool {
    !is_weekend(date) && !holidays.contains(date)
}

/// Returns the date `offset` business days before `reference`.
///
/// Walks back one calendar day at a time, counting only business days.
/// The reference date itself is never counted, so the result is strictly
/// earlier than `reference` whenever `offset >= 1`. An `offset` of zero
/// returns `reference` unchanged.
#[must_use]
pub fn resolve(reference: NaiveDate, holidays: &HolidaySet, offset: u32) -> NaiveDate {
    let mut date = reference;
    let mut counted = 0;

    while counted < offset {
        let Some(previous) = date.pred_opt() else {
            break;
        };
        date = previous;

        if is_business_day(date, holidays) {
            counted += 1;
        }
    }

    date
}

/// Resolves business days against a freshly fetched holiday calendar.
#[derive(Debug, Clone)]
pub struct BusinessDayResolver<P> {
    provider: P,
}

impl<P: HolidayProvider> BusinessDayResolver<P> {
    /// Creates a resolver over a holiday provider.
    #[must_use]
    pub const fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Returns the underlying holiday provider.
    #[must_use]
    pub const fn provider(&self) -> &P {
        &self.provider
    }

    /// Fetches the national holidays of `year`.
    ///
    /// # Errors
    ///
    /// Returns an error if the calendar cannot be fetched.
    pub async fn holiday_set(&self, year: i32) -> Result<HolidaySet, CalendarError> {
        let entries = self
            .provider
            .holidays(year)
            .await
            .map_err(|source| CalendarError::Holidays { year, source })?;
        let set = HolidaySet::from_entries(&entries);
        debug!(year, fetched = entries.len(), national = set.len(), "holiday calendar loaded");
        Ok(set)
    }

    /// Returns the date `offset` business days before `reference`.
    ///
    /// The calendar is fetched for the reference date's year on every call.
    ///
    /// # Errors
    ///
    /// Returns an error if the calendar cannot be fetched.
    pub async fn previous_business_day(
        &self,
        reference: NaiveDate,
        offset: u32,
    ) -> Result<NaiveDate, CalendarError> {
        let holidays = self.holiday_set(reference.year()).await?;
        let resolved = resolve(reference, &holidays, offset);
        info!(%reference, offset, %resolved, "resolved business day");
        Ok(resolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use macroetl_fetch::HolidayEntry;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_friday_resolves_to_thursday() {
        assert_eq!(resolve(date(2025, 11, 14), &HolidaySet::new(), 1), date(2025, 11, 13));
    }

    #[test]
    fn test_monday_skips_weekend() {
        assert_eq!(resolve(date(2025, 11, 17), &HolidaySet::new(), 1), date(2025, 11, 14));
    }

    #[test]
    fn test_sunday_resolves_to_friday() {
        assert_eq!(resolve(date(2025, 11, 16), &HolidaySet::new(), 1), date(2025, 11, 14));
    }

    #[test]
    fn test_skips_holiday() {
        // Friday 2025-11-21 follows the Thursday 2025-11-20 holiday.
        let holidays: HolidaySet = [date(2025, 11, 20)].into_iter().collect();
        assert_eq!(resolve(date(2025, 11, 21), &holidays, 1), date(2025, 11, 19));
    }

    #[test]
    fn test_skips_holiday_and_weekend() {
        // Carnival Monday and Tuesday 2025.
        let holidays: HolidaySet = [date(2025, 3, 3), date(2025, 3, 4)].into_iter().collect();
        assert_eq!(resolve(date(2025, 3, 5), &holidays, 1), date(2025, 2, 28));
    }

    #[test]
    fn test_offset_zero_is_noop() {
        let reference = date(2025, 11, 16);
        assert_eq!(resolve(reference, &HolidaySet::new(), 0), reference);
    }

    #[test]
    fn test_multiple_offsets() {
        assert_eq!(resolve(date(2025, 11, 14), &HolidaySet::new(), 5), date(2025, 11, 7));
    }

    struct FixedProvider(Vec<HolidayEntry>);

    #[async_trait]
    impl HolidayProvider for FixedProvider {
        async fn holidays(&self, _year: i32) -> Result<Vec<HolidayEntry>, FetchError> {
            Ok(self.0.clone())
        }
    }

    struct FailingProvider;

    #[async_trait]
    impl HolidayProvider for FailingProvider {
        async fn holidays(&self, _year: i32) -> Result<Vec<HolidayEntry>, FetchError> {
            Err(FetchError::Status {
                url: "http://holidays/2025/BR".to_string(),
                status: 503,
            })
        }
    }

    #[tokio::test]
    async fn test_resolver_uses_fetched_holidays() {
        let provider = FixedProvider(vec![
            HolidayEntry {
                date: date(2025, 11, 20),
                local_name: "Dia Nacional de Zumbi e da Consciência Negra".to_string(),
                types: vec!["Public".to_string()],
                global: true,
            },
            HolidayEntry {
                date: date(2025, 11, 19),
                local_name: "Feriado municipal".to_string(),
                types: vec!["Public".to_string()],
                global: false,
            },
        ]);
        let resolver = BusinessDayResolver::new(provider);

        let resolved = resolver
            .previous_business_day(date(2025, 11, 21), 1)
            .await
            .unwrap();
        assert_eq!(resolved, date(2025, 11, 19));
    }

    #[tokio::test]
    async fn test_resolver_fails_loudly() {
        let resolver = BusinessDayResolver::new(FailingProvider);
        let err = resolver
            .previous_business_day(date(2025, 11, 14), 1)
            .await
            .unwrap_err();
        assert!(matches!(err, CalendarError::Holidays { year: 2025, .. }));
    }

    fn arb_date() -> impl Strategy<Value = NaiveDate> {
        (0i64..20_000).prop_map(|days| date(1990, 1, 1) + chrono::TimeDelta::days(days))
    }

    fn arb_case() -> impl Strategy<Value = (NaiveDate, HolidaySet)> {
        arb_date().prop_flat_map(|reference| {
            proptest::collection::vec(1i64..60, 0..20).prop_map(move |back| {
                let holidays = back
                    .into_iter()
                    .map(|days| reference - chrono::TimeDelta::days(days))
                    .collect();
                (reference, holidays)
            })
        })
    }

    proptest! {
        #[test]
        fn prop_result_is_earlier_business_day((reference, holidays) in arb_case(), offset in 1u32..15) {
            let resolved = resolve(reference, &holidays, offset);
            prop_assert!(resolved < reference);
            prop_assert!(!is_weekend(resolved));
            prop_assert!(!holidays.contains(resolved));
        }

        #[test]
        fn prop_steps_compose((reference, holidays) in arb_case(), offset in 1u32..15) {
            let stepped = resolve(resolve(reference, &holidays, offset), &holidays, 1);
            prop_assert_eq!(stepped, resolve(reference, &holidays, offset + 1));
        }

        #[test]
        fn prop_skips_exactly_offset_business_days((reference, holidays) in arb_case(), offset in 1u32..15) {
            let resolved = resolve(reference, &holidays, offset);
            let between = resolved
                .iter_days()
                .take_while(|d| *d < reference)
                .filter(|d| is_business_day(*d, &holidays))
                .count();
            prop_assert_eq!(between, offset as usize);
        }
    }
}
