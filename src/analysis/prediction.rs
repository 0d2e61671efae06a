//! Seven-day linear price forecast on top of [`price_trend`](super::trends::price_trend).
//!
//! Seven days because an item bought today cannot be resold for a week.

use chrono::{Duration, Local, NaiveDate};
use serde_json::json;

use crate::analysis::regression::LinearModel;
use crate::analysis::trends::{label, parse_date, parse_price, sequence};
use crate::error::{Result, SkinBaronError};
use crate::table::Table;

/// Days between today and the forecast date.
pub const FORECAST_HORIZON_DAYS: i64 = 7;

/// Columns of the forecast table, in order.
pub const FORECAST_COLUMNS: [&str; 12] = [
    "predicted_price_7_days",
    "itemName",
    "exteriorName",
    "dopplerPhase",
    "price",
    "dateSold",
    "statTrak",
    "souvenir",
    "lowestPrice",
    "quantity",
    "url",
    "label",
];

/// [`price_prediction_at`] for the current local date.
pub fn price_prediction(trend: &Table) -> Result<Table> {
    price_prediction_at(trend, Local::now().date_naive())
}

/// Forecast each row's price seven days after `today`.
///
/// Dates become day offsets from the row's earliest sale and a line is
/// fitted through (offset, price). Rows without samples are skipped. With
/// one sample, or all samples on the same day, the fitted slope is zero and
/// the forecast equals the mean price.
///
/// # Errors
///
/// [`SkinBaronError::DataShape`] if a row's `dateSold` and `price` lists
/// differ in length or hold unparseable values.
pub fn price_prediction_at(trend: &Table, today: NaiveDate) -> Result<Table> {
    let target = today + Duration::days(FORECAST_HORIZON_DAYS);
    let mut out = Table::with_columns(&FORECAST_COLUMNS);

    for row in trend.rows() {
        let dates = sequence(row.get("dateSold"))
            .unwrap_or_default()
            .iter()
            .map(parse_date)
            .collect::<Result<Vec<_>>>()?;
        let prices = sequence(row.get("price"))
            .unwrap_or_default()
            .iter()
            .map(parse_price)
            .collect::<Result<Vec<_>>>()?;

        if dates.len() != prices.len() {
            return Err(SkinBaronError::DataShape(format!(
                "'{}' has {} dates but {} prices",
                label(row),
                dates.len(),
                prices.len()
            )));
        }
        let Some(&start) = dates.iter().min() else {
            log::warn!("Skipping forecast for '{}': no sales", label(row));
            continue;
        };

        let offsets: Vec<f64> = dates
            .iter()
            .map(|d| (*d - start).num_days() as f64)
            .collect();
        let Some(model) = LinearModel::fit(&offsets, &prices) else {
            continue;
        };
        let predicted = model.predict((target - start).num_days() as f64);

        let mut forecast = row.clone();
        forecast.insert("predicted_price_7_days".to_string(), json!(predicted));
        out.push_row(forecast);
    }

    Ok(out.select(&FORECAST_COLUMNS))
}
