use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// PriceListEntry: One row of the GetPriceList response
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceListEntry {
    pub market_hash_name: String,
    pub stat_trak: Option<bool>,
    pub souvenir: Option<bool>,
    pub lowest_price: Option<f64>,
    pub quantity: Option<i64>,
    pub url: Option<String>,
    pub doppler_class_name: Option<String>,
}

// ---------------------------------------------------------------------------
// ReportRow: Sales history of one item variant joined with its listing
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRow {
    pub item_name: String,
    pub exterior_name: Option<String>,
    pub doppler_phase: Option<String>,
    #[serde(default)]
    pub price: Vec<f64>,
    #[serde(default)]
    pub date_sold: Vec<String>,
    pub stat_trak: Option<bool>,
    pub souvenir: Option<bool>,
    pub lowest_price: Option<f64>,
    pub quantity: Option<i64>,
    pub url: Option<String>,
}

impl ReportRow {
    /// Number of trades in the last 30 days.
    pub fn trade_count(&self) -> usize {
        self.price.len()
    }
}

// ---------------------------------------------------------------------------
// PriceTrendRow: Report row with the current price appended and sorted
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceTrendRow {
    #[serde(flatten)]
    pub row: ReportRow,
    pub label: String,
}

// ---------------------------------------------------------------------------
// ForecastRow: Price trend plus the 7-day linear forecast
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastRow {
    pub predicted_price_7_days: f64,
    #[serde(flatten)]
    pub trend: PriceTrendRow,
}
