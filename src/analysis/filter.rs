//! Merges the newest-items and best-deals listings and filters them by item
//! attributes.

use serde_json::{json, Value};
use std::collections::HashSet;

use crate::config;
use crate::models::Sticker;
use crate::table::{Row, Table};

// ---------------------------------------------------------------------------
// FilterParams
// ---------------------------------------------------------------------------

/// Attribute filters for [`ItemFilter::filter_items`].
///
/// All fields are optional. When `None`, the corresponding filter is skipped;
/// the filters that are set must all match.
#[derive(Debug, Clone, Default)]
pub struct FilterParams {
    pub item_name: Option<String>,
    pub rarity_name: Option<String>,
    pub exterior_name: Option<String>,
    pub variant_type_name: Option<String>,
    pub is_souvenir: Option<bool>,
    pub item_price: Option<f64>,
    /// Compared against the listing's wear rounded to an integer.
    pub wear: Option<i64>,
    pub is_wear_precise: Option<bool>,
    pub stackable: Option<bool>,
    /// Compared against the remaining trade lock rounded to whole hours.
    pub trade_lock_hours_left: Option<i64>,
    pub sticker_count: Option<i64>,
    /// Sticker names that must all be present on the item.
    pub sticker_list: Option<Vec<String>>,
}

// ---------------------------------------------------------------------------
// ItemFilter
// ---------------------------------------------------------------------------

/// Combines two listing tables into one view and filters it.
pub struct ItemFilter<'a> {
    new_items: &'a Table,
    best_deals: &'a Table,
}

impl<'a> ItemFilter<'a> {
    /// Create a filter over the normalized `NewestItems` and `BestDeals` tables.
    pub fn new(new_items: &'a Table, best_deals: &'a Table) -> Self {
        Self {
            new_items,
            best_deals,
        }
    }

    /// Merge both tables and return the listings matching `params`.
    ///
    /// The tables are outer-joined on `salesId`; where both carry a value for
    /// the same attribute, the newest-items value wins. Every output row gets
    /// `sticker_count` and `sticker_list` columns.
    ///
    /// With default params, every listing of both tables is returned.
    pub fn filter_items(&self, params: &FilterParams) -> Table {
        let mut merged = self
            .new_items
            .outer_join_coalesce(self.best_deals, config::LISTING_KEY);

        merged.derive_column("sticker_list", |row| {
            sticker_summary(row).1.map_or(Value::Null, |names| json!(names))
        });
        merged.derive_column("sticker_count", |row| match row.get("sticker_list") {
            Some(Value::Array(names)) => json!(names.len()),
            _ => json!(0),
        });

        let unreadable = merged
            .rows()
            .iter()
            .filter(|row| {
                row.get("stickers").is_some_and(|v| !v.is_null())
                    && row.get("sticker_list").is_some_and(Value::is_null)
            })
            .count();
        if unreadable > 0 {
            log::debug!("{} listings have unreadable stickers; using defaults", unreadable);
        }

        merged.retain(|row| matches(row, params));
        merged
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Sticker count and localized names of one row.
///
/// A missing or malformed `stickers` cell yields `(0, None)` for that row only.
pub fn sticker_summary(row: &Row) -> (i64, Option<Vec<String>>) {
    match row.get("stickers").and_then(Sticker::parse_list) {
        Some(stickers) => {
            let names = stickers.into_iter().map(|s| s.localized_name).collect::<Vec<_>>();
            (names.len() as i64, Some(names))
        }
        None => (0, None),
    }
}

fn matches(row: &Row, p: &FilterParams) -> bool {
    eq_str(row, "itemName", &p.item_name)
        && eq_str(row, "rarityName", &p.rarity_name)
        && eq_str(row, "exteriorName", &p.exterior_name)
        && eq_str(row, "variantTypeName", &p.variant_type_name)
        && eq_bool(row, "isSouvenir", p.is_souvenir)
        && p.item_price
            .map_or(true, |price| number(row, "itemPrice") == Some(price))
        && eq_rounded(row, "wear", p.wear)
        && eq_bool(row, "isWearPrecise", p.is_wear_precise)
        && eq_bool(row, "stackable", p.stackable)
        && eq_rounded(row, "tradeLockHoursLeft", p.trade_lock_hours_left)
        && p.sticker_count.map_or(true, |count| {
            row.get("sticker_count").and_then(Value::as_i64) == Some(count)
        })
        && p.sticker_list.as_ref().map_or(true, |wanted| has_stickers(row, wanted))
}

fn eq_str(row: &Row, column: &str, wanted: &Option<String>) -> bool {
    match wanted {
        Some(w) => row.get(column).and_then(Value::as_str) == Some(w.as_str()),
        None => true,
    }
}

fn eq_bool(row: &Row, column: &str, wanted: Option<bool>) -> bool {
    match wanted {
        Some(w) => row.get(column).and_then(Value::as_bool) == Some(w),
        None => true,
    }
}

fn eq_rounded(row: &Row, column: &str, wanted: Option<i64>) -> bool {
    match wanted {
        Some(w) => number(row, column).map(|v| v.round_ties_even() as i64) == Some(w),
        None => true,
    }
}

fn number(row: &Row, column: &str) -> Option<f64> {
    row.get(column).and_then(Value::as_f64)
}

/// Rows without a sticker list never match; otherwise every wanted name must
/// be on the item.
fn has_stickers(row: &Row, wanted: &[String]) -> bool {
    let Some(Value::Array(names)) = row.get("sticker_list") else {
        return false;
    };
    let present: HashSet<&str> = names.iter().filter_map(Value::as_str).collect();
    wanted.iter().all(|w| present.contains(w.as_str()))
}
