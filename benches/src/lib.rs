//! Synthetic payloads for the macroetl benchmarks.
//!
//! Run with: `cargo bench --package macroetl-bench`

use chrono::{Datelike, Duration, NaiveDate};
use macroetl_lib::{HolidaySet, Record};
use serde_json::{Value, json};

/// SIDRA variable codes cycled through by [`sidra_payload`]; two of the four
/// survive the IPCA filter.
const SIDRA_CODES: [&str; 4] = ["63", "69", "2265", "2266"];

/// Returns a SIDRA response with a header row followed by `rows` data rows.
#[must_use]
pub fn sidra_payload(rows: usize) -> Value {
    let header = json!({
        "NC": "Nível Territorial (Código)", "V": "Valor",
        "D2C": "Mês (Código)", "D3C": "Variável (Código)", "D3N": "Variável"
    });
    let data = (0..rows).map(|i| {
        json!({
            "NC": "1", "NN": "Brasil",
            "V": format!("{:.2}", (i % 100) as f64 / 100.0),
            "D2C": format!("2025{:02}", i % 12 + 1),
            "D3C": SIDRA_CODES[i % SIDRA_CODES.len()],
            "D3N": "IPCA"
        })
    });
    Value::Array(std::iter::once(header).chain(data).collect())
}

/// Returns an SGS-style list of `rows` daily observations.
#[must_use]
pub fn sgs_payload(rows: usize) -> Value {
    Value::Array(
        (0..rows)
            .map(|i| json!({"data": "13/11/2025", "valor": format!("0.{:06}", 55_000 + i)}))
            .collect(),
    )
}

/// Returns `rows` records mixing string, float, integer and boolean columns.
#[must_use]
pub fn mixed_records(rows: usize) -> Vec<Record> {
    (0..rows)
        .filter_map(|i| {
            json!({
                "Indicador": "IPCA",
                "Data": "2025-11-13",
                "Mediana": 4.5 + (i % 10) as f64 / 100.0,
                "numeroRespondentes": i % 150,
                "revisado": i % 2 == 0,
                "execution_date": "2025-11-13"
            })
            .as_object()
            .cloned()
        })
        .collect()
}

/// Returns a holiday set with `count` weekday holidays before `end`.
#[must_use]
pub fn dense_holidays(end: NaiveDate, count: usize) -> HolidaySet {
    let mut set = HolidaySet::new();
    let mut date = end;
    while set.len() < count {
        date -= Duration::days(1);
        if date.weekday().number_from_monday() <= 5 && date.day() % 3 == 0 {
            set.insert(date, "synthetic");
        }
    }
    set
}
