//! Shared fixtures for the SkinBaron SDK integration tests.
//!
//! Provides canned API responses shaped like the real endpoints and
//! `FakeMarket`, a `MarketApi` that serves them without a network.

#![allow(dead_code)]

use serde_json::{json, Value};
use skinbaron_sdk::MarketApi;
use std::cell::RefCell;

fn sticker(name: &str, slot: i64) -> Value {
    json!({ "localizedName": name, "slot": slot, "wear": 0.0 })
}

// -- Listings ---------------------------------------------------------------

/// `NewestItems` response with three listings (s1, s2, s3).
///
/// s1 carries four stickers, s2 an empty sticker list and s3 a malformed one.
pub fn new_items_response() -> Value {
    json!({
        "newestItems": [
            {
                "salesId": "s1",
                "itemName": "SG 553 | Bleached",
                "rarityName": "Consumer Grade",
                "exteriorName": "Factory New",
                "variantTypeName": "Rifle",
                "isSouvenir": false,
                "itemPrice": 0.04,
                "wear": 0.06,
                "isWearPrecise": true,
                "stackable": false,
                "tradeLockHoursLeft": 6.4,
                "stickers": [
                    sticker("Dust II (Gold)", 0),
                    sticker("IEM (Gold) | Rio 2022", 1),
                    sticker("Crown (Foil)", 2),
                    sticker("Howling Dawn", 3)
                ]
            },
            {
                "salesId": "s2",
                "itemName": "AK-47 | Redline",
                "rarityName": "Classified",
                "exteriorName": "Field-Tested",
                "variantTypeName": "Rifle",
                "isSouvenir": false,
                "itemPrice": 12.5,
                "wear": 0.21,
                "isWearPrecise": true,
                "stackable": false,
                "tradeLockHoursLeft": 0,
                "stickers": []
            },
            {
                "salesId": "s3",
                "itemName": "P90 | Freight",
                "rarityName": "Industrial Grade",
                "exteriorName": "Well-Worn",
                "variantTypeName": "SMG",
                "isSouvenir": true,
                "itemPrice": 0.1,
                "wear": 0.6,
                "isWearPrecise": false,
                "stackable": false,
                "tradeLockHoursLeft": 120.0,
                "stickers": "not-a-sticker-list"
            }
        ]
    })
}

/// `BestDeals` response whose ids do not overlap with [`new_items_response`].
pub fn best_deals_response() -> Value {
    json!({
        "bestDeals": [
            {
                "salesId": "s4",
                "itemName": "SG 553 | Bleached",
                "rarityName": "Consumer Grade",
                "exteriorName": "Factory New",
                "variantTypeName": "Rifle",
                "isSouvenir": false,
                "itemPrice": 0.05,
                "wear": 0.03,
                "isWearPrecise": true,
                "stackable": false,
                "tradeLockHoursLeft": 0,
                "discount": 12,
                "stickers": [sticker("Dust II (Gold)", 0)]
            },
            {
                "salesId": "s5",
                "itemName": "M4A1-S | Hot Rod",
                "rarityName": "Classified",
                "exteriorName": "Factory New",
                "variantTypeName": "Rifle",
                "isSouvenir": false,
                "itemPrice": 250.0,
                "wear": 0.5,
                "isWearPrecise": true,
                "stackable": false,
                "tradeLockHoursLeft": 0,
                "discount": 4
            }
        ]
    })
}

/// `BestDeals` response sharing listing s2 with [`new_items_response`], with
/// a different price and no rarity.
pub fn overlapping_best_deals_response() -> Value {
    json!({
        "bestDeals": [
            {
                "salesId": "s2",
                "itemName": "AK-47 | Redline",
                "rarityName": null,
                "exteriorName": "Field-Tested",
                "itemPrice": 11.0,
                "discount": 9
            },
            {
                "salesId": "s6",
                "itemName": "Glock-18 | Fade",
                "rarityName": "Restricted",
                "exteriorName": "Factory New",
                "itemPrice": 900.0,
                "discount": 2
            }
        ]
    })
}

// -- Price list and sales ---------------------------------------------------

pub fn price_list_response() -> Value {
    json!({
        "map": [
            {
                "marketHashName": "★ Butterfly Knife | Gamma Doppler (Factory New)",
                "statTrak": false,
                "souvenir": false,
                "lowestPrice": 1500.0,
                "quantity": 3,
                "url": "https://skinbaron.de/offers/butterfly-gamma-fn-p1",
                "dopplerClassName": "Phase 1"
            },
            {
                "marketHashName": "★ Butterfly Knife | Gamma Doppler (Minimal Wear)",
                "statTrak": false,
                "souvenir": false,
                "lowestPrice": 1300.0,
                "quantity": 1,
                "url": "https://skinbaron.de/offers/butterfly-gamma-mw-p2",
                "dopplerClassName": "Phase 2"
            },
            {
                "marketHashName": "P90 | Freight (Well-Worn)",
                "statTrak": false,
                "souvenir": false,
                "lowestPrice": 0.1,
                "quantity": 20,
                "url": "https://skinbaron.de/offers/p90-freight-ww",
                "dopplerClassName": null
            }
        ]
    })
}

/// 30-day sales: three Factory New Phase 1 trades, one Minimal Wear Phase 2
/// trade and one Field-Tested Phase 3 trade that has no current listing.
pub fn sales_response() -> Value {
    json!({
        "newestSales30Days": [
            {
                "itemName": "★ Butterfly Knife | Gamma Doppler (Factory New)",
                "dopplerPhase": "Phase 1",
                "price": 1450.0,
                "dateSold": "2023-01-01"
            },
            {
                "itemName": "★ Butterfly Knife | Gamma Doppler (Factory New)",
                "dopplerPhase": "Phase 1",
                "price": 1480.0,
                "dateSold": "2023-01-05"
            },
            {
                "itemName": "★ Butterfly Knife | Gamma Doppler (Factory New)",
                "dopplerPhase": "Phase 1",
                "price": 1520.0,
                "dateSold": "2023-01-03"
            },
            {
                "itemName": "★ Butterfly Knife | Gamma Doppler (Minimal Wear)",
                "dopplerPhase": "Phase 2",
                "price": 1250.0,
                "dateSold": "2023-01-02"
            },
            {
                "itemName": "★ Butterfly Knife | Gamma Doppler (Field-Tested)",
                "dopplerPhase": "Phase 3",
                "price": 1100.0,
                "dateSold": "2023-01-04"
            }
        ]
    })
}

// -- FakeMarket -------------------------------------------------------------

/// Arguments of one `newest_sales_30_days` call.
#[derive(Debug, Clone, PartialEq)]
pub struct SalesQuery {
    pub item_name: String,
    pub stat_trak: bool,
    pub souvenir: bool,
    pub doppler_phase: Option<String>,
}

/// In-memory `MarketApi`. A `None` response simulates a failed request.
pub struct FakeMarket {
    pub price_list: Option<Value>,
    pub new_items: Option<Value>,
    pub best_deals: Option<Value>,
    pub sales: Option<Value>,
    pub sales_queries: RefCell<Vec<SalesQuery>>,
}

impl FakeMarket {
    /// A market serving every fixture above.
    pub fn new() -> Self {
        Self {
            price_list: Some(price_list_response()),
            new_items: Some(new_items_response()),
            best_deals: Some(best_deals_response()),
            sales: Some(sales_response()),
            sales_queries: RefCell::new(Vec::new()),
        }
    }
}

impl MarketApi for FakeMarket {
    fn get_price_list(&self) -> Option<Value> {
        self.price_list.clone()
    }

    fn newest_items(&self, _size: usize) -> Option<Value> {
        self.new_items.clone()
    }

    fn best_deals(&self, _size: usize) -> Option<Value> {
        self.best_deals.clone()
    }

    fn newest_sales_30_days(
        &self,
        item_name: &str,
        stat_trak: bool,
        souvenir: bool,
        doppler_phase: Option<&str>,
    ) -> Option<Value> {
        self.sales_queries.borrow_mut().push(SalesQuery {
            item_name: item_name.to_string(),
            stat_trak,
            souvenir,
            doppler_phase: doppler_phase.map(str::to_string),
        });
        self.sales.clone()
    }
}
