use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Sale: One completed trade from the 30-day sales history
// ---------------------------------------------------------------------------

/// A sale as returned by `GetNewestSales30Days`.
///
/// `item_name` arrives combined with the exterior, e.g.
/// `"P90 | Freight (Well-Worn)"`; the report pipeline splits it into
/// `item_name` and `exterior_name`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    pub item_name: String,
    pub exterior_name: Option<String>,
    pub doppler_phase: Option<String>,
    pub price: f64,
    pub date_sold: String,
}
