use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

// ---------------------------------------------------------------------------
// Sticker: One sticker applied to a listed item
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Sticker {
    pub localized_name: String,
    #[serde(default, deserialize_with = "lenient_slot")]
    pub slot: Option<i64>,
    #[serde(default, deserialize_with = "lenient_wear")]
    pub wear: Option<f64>,
}

impl Sticker {
    /// Parse a raw `stickers` cell.
    ///
    /// Returns `None` for anything that is not a list of sticker objects
    /// with a `localizedName`. Malformed `slot` or `wear` values are read
    /// as absent.
    pub fn parse_list(value: &Value) -> Option<Vec<Sticker>> {
        match value {
            Value::Array(_) => serde_json::from_value(value.clone()).ok(),
            _ => None,
        }
    }
}

/// Whole-numbered slot given as an integer, a float such as `1.0`, or a string.
fn lenient_slot<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    Ok(number(&raw).filter(|v| v.fract() == 0.0).map(|v| v as i64))
}

fn lenient_wear<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    Ok(number(&raw))
}

fn number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn lenient_stickers<'de, D>(deserializer: D) -> Result<Option<Vec<Sticker>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    Ok(Sticker::parse_list(&raw))
}

// ---------------------------------------------------------------------------
// Listing: An item currently for sale (NewestItems / BestDeals)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub sales_id: Option<Value>,
    pub item_name: Option<String>,
    pub rarity_name: Option<String>,
    pub exterior_name: Option<String>,
    pub variant_type_name: Option<String>,
    pub is_souvenir: Option<bool>,
    pub item_price: Option<f64>,
    pub wear: Option<f64>,
    pub is_wear_precise: Option<bool>,
    pub stackable: Option<bool>,
    pub trade_lock_hours_left: Option<f64>,
    #[serde(default, deserialize_with = "lenient_stickers")]
    pub stickers: Option<Vec<Sticker>>,

    // -- Derived by the item filter --
    #[serde(rename = "sticker_count", default)]
    pub sticker_count: Option<i64>,
    #[serde(rename = "sticker_list", default)]
    pub sticker_list: Option<Vec<String>>,
}
