//! CLI command implementations.

pub(crate) mod business_day;
pub(crate) mod run;
pub(crate) mod sources;
