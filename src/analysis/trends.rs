//! Per-item price history with the current lowest price appended.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use serde_json::{json, Value};

use crate::error::{Result, SkinBaronError};
use crate::table::{type_name, Row, Table};

/// Format dates are written back in.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// [`price_trend_at`] for the current local date.
pub fn price_trend(report: &Table) -> Result<Table> {
    price_trend_at(report, Local::now().date_naive())
}

/// Extend each row's sales history with today's lowest listing price.
///
/// Rows without `dateSold` or `price` are dropped. `today` is appended to
/// `dateSold` and `lowestPrice` to `price`; rows whose lists then differ in
/// length (no current listing) are dropped too. The remaining pairs are
/// sorted chronologically, dates are rewritten as `YYYY-MM-DD`, and a
/// `label` column ("name | exterior phase") is added.
///
/// # Errors
///
/// [`SkinBaronError::DataShape`] for dates or prices that cannot be parsed.
pub fn price_trend_at(report: &Table, today: NaiveDate) -> Result<Table> {
    let mut columns: Vec<&str> = report.columns().iter().map(String::as_str).collect();
    if !report.has_column("label") {
        columns.push("label");
    }
    let mut out = Table::with_columns(&columns);

    for row in report.rows() {
        let (Some(mut dates), Some(mut prices)) = (
            sequence(row.get("dateSold")),
            sequence(row.get("price")),
        ) else {
            continue;
        };

        dates.push(json!(today.format(DATE_FORMAT).to_string()));
        if let Some(lowest) = row.get("lowestPrice").filter(|v| !v.is_null()) {
            prices.push(lowest.clone());
        }
        if dates.len() != prices.len() {
            log::debug!(
                "Dropping '{}': {} dates but {} prices",
                label(row),
                dates.len(),
                prices.len()
            );
            continue;
        }

        let mut pairs = dates
            .iter()
            .zip(&prices)
            .map(|(d, p)| Ok((parse_date(d)?, parse_price(p)?)))
            .collect::<Result<Vec<(NaiveDate, f64)>>>()?;
        pairs.sort_by(|a, b| a.0.cmp(&b.0).then(a.1.total_cmp(&b.1)));

        let mut updated = row.clone();
        updated.insert(
            "dateSold".to_string(),
            pairs
                .iter()
                .map(|(d, _)| json!(d.format(DATE_FORMAT).to_string()))
                .collect(),
        );
        updated.insert(
            "price".to_string(),
            pairs.iter().map(|(_, p)| json!(p)).collect(),
        );
        updated.insert("label".to_string(), json!(label(row)));
        out.push_row(updated);
    }

    Ok(out)
}

/// Display name of a report row: item name, exterior and doppler phase.
pub fn label(row: &Row) -> String {
    let text = |key: &str| row.get(key).and_then(Value::as_str).filter(|s| !s.is_empty());

    let mut label = text("itemName").unwrap_or_default().to_string();
    if let Some(exterior) = text("exteriorName") {
        label.push_str(" | ");
        label.push_str(exterior);
    }
    if let Some(phase) = text("dopplerPhase") {
        label.push(' ');
        label.push_str(phase);
    }
    label
}

/// A list cell, also accepting the stringified form `"['a', 'b']"`.
pub(crate) fn sequence(cell: Option<&Value>) -> Option<Vec<Value>> {
    match cell? {
        Value::Array(items) => Some(items.clone()),
        Value::String(s) if s.trim_start().starts_with('[') => {
            serde_json::from_str(&s.replace('\'', "\"")).ok()
        }
        _ => None,
    }
}

/// Parse a sale date (`YYYY-MM-DD`, `YYYY-MM-DD HH:MM:SS` or RFC 3339).
pub(crate) fn parse_date(value: &Value) -> Result<NaiveDate> {
    let s = value.as_str().ok_or_else(|| {
        SkinBaronError::DataShape(format!("expected a date string, got {}", type_name(value)))
    })?;
    let s = s.trim();

    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").map(|dt| dt.date()))
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").map(|dt| dt.date()))
        .or_else(|_| DateTime::parse_from_rfc3339(s).map(|dt| dt.date_naive()))
        .map_err(|_| SkinBaronError::DataShape(format!("unrecognized date '{}'", s)))
}

/// Parse a price given as a JSON number or a numeric string.
pub(crate) fn parse_price(value: &Value) -> Result<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
    .ok_or_else(|| SkinBaronError::DataShape(format!("'{}' is not a price", value)))
}
