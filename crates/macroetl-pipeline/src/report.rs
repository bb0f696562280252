//! Run reports.

use chrono::NaiveDate;
use macroetl_types::{TransformParams, format_br_date};
use serde::{Deserialize, Serialize};

/// Message recorded for sources that returned nothing.
pub const NO_DATA: &str = "no data";

/// Outcome of one source within a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiStatus {
    /// Records were produced and stored.
    Ok,
    /// The source returned no records.
    NoData,
    /// The source raised an error.
    Failed,
}

/// Report entry for one source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiRun {
    /// Source name as requested.
    pub api: String,
    /// Number of records produced.
    pub registros: usize,
    /// Parameters passed to the dispatcher.
    pub params_usados: TransformParams,
    /// Outcome.
    pub status: ApiStatus,
    /// Error text for `no_data` and `failed` entries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub erro: Option<String>,
    /// Location of the stored file for `ok` entries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arquivo: Option<String>,
}

impl ApiRun {
    /// Entry for a source whose records were stored at `arquivo`.
    #[must_use]
    pub fn ok(api: impl Into<String>, params: TransformParams, records: usize, arquivo: String) -> Self {
        Self {
            api: api.into(),
            registros: records,
            params_usados: params,
            status: ApiStatus::Ok,
            erro: None,
            arquivo: Some(arquivo),
        }
    }

    /// Entry for a source that returned nothing.
    #[must_use]
    pub fn no_data(api: impl Into<String>, params: TransformParams) -> Self {
        Self {
            api: api.into(),
            registros: 0,
            params_usados: params,
            status: ApiStatus::NoData,
            erro: Some(NO_DATA.to_string()),
            arquivo: None,
        }
    }

    /// Entry for a source that raised `error`.
    #[must_use]
    pub fn failed(api: impl Into<String>, params: TransformParams, error: impl ToString) -> Self {
        Self {
            api: api.into(),
            registros: 0,
            params_usados: params,
            status: ApiStatus::Failed,
            erro: Some(error.to_string()),
            arquivo: None,
        }
    }
}

/// Result of one invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    /// Always `ok` for a completed run.
    pub status: String,
    /// Resolved business day (`dd/mm/YYYY`).
    pub data_util_processada: String,
    /// One entry per source, in run order.
    pub apis_executadas: Vec<ApiRun>,
}

impl RunReport {
    /// Creates an empty report for a business day.
    #[must_use]
    pub fn new(business_day: NaiveDate) -> Self {
        Self {
            status: "ok".to_string(),
            data_util_processada: format_br_date(business_day),
            apis_executadas: Vec::new(),
        }
    }

    /// Appends an entry.
    pub fn push(&mut self, run: ApiRun) {
        self.apis_executadas.push(run);
    }

    /// Returns the entries with the given status.
    pub fn with_status(&self, status: ApiStatus) -> impl Iterator<Item = &ApiRun> {
        self.apis_executadas
            .iter()
            .filter(move |run| run.status == status)
    }

    /// Returns the total number of records produced.
    #[must_use]
    pub fn total_records(&self) -> usize {
        self.apis_executadas.iter().map(|run| run.registros).sum()
    }
}
