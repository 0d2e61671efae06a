//! Joins the 30-day sales history of an item with its current market listing.

use std::collections::BTreeMap;
use std::fmt::Write;

use serde_json::{json, Value};

use crate::client::MarketApi;
use crate::error::{Result, SkinBaronError};
use crate::matcher::split_name_and_condition;
use crate::models::{PriceListEntry, ReportRow, Sale};
use crate::normalize::json_to_table;
use crate::table::{Row, Table};

/// Columns of the projected price list.
pub const LISTING_COLUMNS: [&str; 8] = [
    "itemName",
    "exteriorName",
    "statTrak",
    "souvenir",
    "lowestPrice",
    "quantity",
    "url",
    "dopplerPhase",
];

/// Columns identifying one item variant.
pub const GROUP_KEYS: [&str; 3] = ["itemName", "exteriorName", "dopplerPhase"];

const RULE: &str = "======================================================================";

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

/// Sales history joined with current listings, plus a readable summary.
#[derive(Debug, Clone)]
pub struct Report {
    /// One row per (item name, exterior, doppler phase) with `price` and
    /// `dateSold` lists and the listing columns.
    pub table: Table,
    pub summary: String,
}

impl Report {
    /// The report table as typed rows.
    pub fn rows(&self) -> Result<Vec<ReportRow>> {
        self.table.into_records()
    }
}

// ---------------------------------------------------------------------------
// ReportGenerator
// ---------------------------------------------------------------------------

/// Builds item reports from any [`MarketApi`].
pub struct ReportGenerator<'a> {
    api: &'a dyn MarketApi,
}

impl<'a> ReportGenerator<'a> {
    pub fn new(api: &'a dyn MarketApi) -> Self {
        Self { api }
    }

    /// Fetch the price list and the sales history of `item_name` and join them.
    ///
    /// `item_name` may be vague (at least three characters); the API decides
    /// which items match.
    ///
    /// # Errors
    ///
    /// [`SkinBaronError::FetchFailed`] if either request fails; no partial
    /// report is produced. Malformed responses fail with
    /// [`SkinBaronError::DataShape`].
    pub fn build_report(
        &self,
        item_name: &str,
        stat_trak: bool,
        souvenir: bool,
        doppler_phase: Option<&str>,
    ) -> Result<Report> {
        let price_list = self
            .api
            .get_price_list()
            .ok_or_else(|| SkinBaronError::FetchFailed("price list".to_string()))?;
        let listings = current_listings(&json_to_table(&price_list)?)?;

        let history = self
            .api
            .newest_sales_30_days(item_name, stat_trak, souvenir, doppler_phase)
            .ok_or_else(|| {
                SkinBaronError::FetchFailed(format!("30-day sales of '{}'", item_name))
            })?;
        let sales = split_sales(&json_to_table(&history)?)?;

        Self::cheapest(&listings, &sales)
    }

    /// Group `sales` by item variant and attach the matching listing.
    ///
    /// `listings` uses the [`LISTING_COLUMNS`] layout and `sales` has its
    /// exterior already split off. Variants without a listing keep `null`
    /// listing columns. Groups come out sorted by item name, exterior and
    /// doppler phase.
    pub fn cheapest(listings: &Table, sales: &Table) -> Result<Report> {
        let sales: Vec<Sale> = sales
            .into_records()
            .map_err(|e| shape_error("sales history", e))?;

        let mut groups: BTreeMap<(String, Option<String>, Option<String>), (Vec<f64>, Vec<String>)> =
            BTreeMap::new();
        for sale in sales {
            let (prices, dates) = groups
                .entry((sale.item_name, sale.exterior_name, sale.doppler_phase))
                .or_default();
            prices.push(sale.price);
            dates.push(sale.date_sold);
        }

        let grouped = Table::from_rows(
            groups
                .into_iter()
                .map(|((name, exterior, phase), (prices, dates))| {
                    let mut row = Row::new();
                    row.insert("itemName".to_string(), json!(name));
                    row.insert("exteriorName".to_string(), json!(exterior));
                    row.insert("dopplerPhase".to_string(), json!(phase));
                    row.insert("price".to_string(), json!(prices));
                    row.insert("dateSold".to_string(), json!(dates));
                    row
                })
                .collect(),
        );
        let grouped = if grouped.columns().is_empty() {
            Table::with_columns(&["itemName", "exteriorName", "dopplerPhase", "price", "dateSold"])
        } else {
            grouped
        };

        let table = grouped.left_join(&listings.select(&LISTING_COLUMNS), &GROUP_KEYS);
        let summary = summarize(&table.into_records()?);
        log::info!("{}", summary);

        Ok(Report { table, summary })
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Project a normalized price list onto [`LISTING_COLUMNS`], splitting each
/// market name into item name and exterior.
pub fn current_listings(price_list: &Table) -> Result<Table> {
    let entries: Vec<PriceListEntry> = price_list
        .into_records()
        .map_err(|e| shape_error("price list", e))?;

    let mut listings = Table::from_records(&entries)?;
    listings.rename_column("dopplerClassName", "dopplerPhase");
    listings.derive_column("exteriorName", |row| {
        json!(split_name_and_condition(market_name(row)).1)
    });
    listings.derive_column("itemName", |row| {
        json!(split_name_and_condition(market_name(row)).0)
    });

    Ok(listings.select(&LISTING_COLUMNS))
}

fn market_name(row: &Row) -> &str {
    row.get("marketHashName")
        .and_then(Value::as_str)
        .unwrap_or_default()
}

/// Split the combined `itemName` of each sale into `itemName` and `exteriorName`.
pub fn split_sales(history: &Table) -> Result<Table> {
    let mut sales: Vec<Sale> = history
        .into_records()
        .map_err(|e| shape_error("sales history", e))?;
    for sale in &mut sales {
        let (name, exterior) = split_name_and_condition(&sale.item_name);
        sale.item_name = name;
        sale.exterior_name = exterior;
    }
    Table::from_records(&sales)
}

fn shape_error(what: &str, err: SkinBaronError) -> SkinBaronError {
    match err {
        SkinBaronError::Json(e) => SkinBaronError::DataShape(format!("{}: {}", what, e)),
        other => other,
    }
}

fn or_na<T: ToString>(value: &Option<T>) -> String {
    value
        .as_ref()
        .map_or_else(|| "n/a".to_string(), |v| v.to_string())
}

/// Render the report text. Rows with the highest trade count are flagged.
pub fn summarize(rows: &[ReportRow]) -> String {
    let most_trades = rows.iter().map(ReportRow::trade_count).max().unwrap_or(0);

    let mut out = String::new();
    writeln!(out, "Report based on your search:").ok();
    writeln!(out, "There are a total of {} items matching your search", rows.len()).ok();

    for (i, row) in rows.iter().enumerate() {
        writeln!(out, "{}", RULE).ok();
        writeln!(
            out,
            "Item {}: {}, condition: {}, doppler phase: {}",
            i + 1,
            row.item_name,
            or_na(&row.exterior_name),
            or_na(&row.doppler_phase)
        )
        .ok();
        writeln!(
            out,
            "Historical trading info: traded {} times in the past 30 days on {:?} at prices {:?}",
            row.trade_count(),
            row.date_sold,
            row.price
        )
        .ok();
        writeln!(
            out,
            "Current market info: {} listed for sale, lowest price {}, link: {}",
            or_na(&row.quantity),
            or_na(&row.lowest_price),
            or_na(&row.url)
        )
        .ok();
        if row.trade_count() == most_trades {
            writeln!(out, "Note: this is the most frequently traded item of the past 30 days!").ok();
        }
    }
    out.push_str("=======================end of the report=======================");
    out
}
