//! Business-day calendar for the macroetl job.
//!
//! - [`HolidaySet`] - National public/bank holidays of one year
//! - [`resolve`] - Pure business-day walk over a [`HolidaySet`]
//! - [`BusinessDayResolver`] - Fetches the calendar and resolves in one call

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod business_day;
mod holidays;

pub use business_day::{BusinessDayResolver, CalendarError, is_business_day, is_weekend, resolve};
pub use holidays::HolidaySet;
