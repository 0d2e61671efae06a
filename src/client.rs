//! Blocking HTTP client for the SkinBaron API.
//!
//! Every endpoint is a JSON POST whose body carries the account credentials.
//! Transport failures never propagate: they are logged and surface as `None`.

use crate::config::{self, Credentials};
use crate::error::Result;
use reqwest::blocking::Client;
use serde_json::{json, Map, Value};
use std::time::Duration;

/// Source of raw marketplace responses.
///
/// [`SkinBaronClient`] is the network-backed implementation. The report
/// pipeline only depends on this trait, so any other source (a recorded
/// response set, a test double) can drive it.
pub trait MarketApi {
    /// Current lowest price and quantity for every item on the market.
    fn get_price_list(&self) -> Option<Value>;

    /// The `size` most recently listed items (at most 100).
    fn newest_items(&self, size: usize) -> Option<Value>;

    /// The `size` best deals currently listed (at most 100).
    fn best_deals(&self, size: usize) -> Option<Value>;

    /// Completed sales of the last 30 days for an item.
    ///
    /// `item_name` does not need to be exact; the API matches it loosely.
    fn newest_sales_30_days(
        &self,
        item_name: &str,
        stat_trak: bool,
        souvenir: bool,
        doppler_phase: Option<&str>,
    ) -> Option<Value>;
}

/// Sends requests to the SkinBaron API on behalf of one account.
#[derive(Debug)]
pub struct SkinBaronClient {
    /// Host all endpoint paths are appended to.
    pub base_url: String,
    credentials: Credentials,
    client: Client,
}

impl SkinBaronClient {
    /// Create a client for the given account.
    ///
    /// If `base_url` is `None`, the public API host is used.
    pub fn new(credentials: Credentials, base_url: Option<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.unwrap_or_else(|| config::BASE_URL.to_string()),
            credentials,
            client,
        })
    }

    /// The application id requests are sent with.
    pub fn app_id(&self) -> &str {
        &self.credentials.app_id
    }

    /// POST `body` (plus credentials) to an endpoint and decode the JSON reply.
    fn post(&self, endpoint: &str, mut body: Map<String, Value>) -> Option<Value> {
        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), endpoint);
        body.insert("apikey".to_string(), json!(self.credentials.api_key));
        body.insert("appId".to_string(), json!(self.credentials.app_id));
        log::debug!("POST {}", url);

        match self.send(&url, &body) {
            Ok(value) => Some(value),
            Err(e) => {
                log::error!("Request to {} failed: {}", endpoint, e);
                None
            }
        }
    }

    fn send(&self, url: &str, body: &Map<String, Value>) -> Result<Value> {
        let mut request = self.client.post(url).json(body);
        for (name, value) in config::default_headers() {
            request = request.header(name, value);
        }
        let resp = request.send()?.error_for_status()?;
        Ok(resp.json()?)
    }
}

fn page_size(size: usize) -> usize {
    if size > config::MAX_PAGE_SIZE {
        log::warn!(
            "Requested {} items but the API returns at most {}; clamping",
            size,
            config::MAX_PAGE_SIZE
        );
        config::MAX_PAGE_SIZE
    } else {
        size
    }
}

impl MarketApi for SkinBaronClient {
    fn get_price_list(&self) -> Option<Value> {
        self.post(config::PRICE_LIST_ENDPOINT, Map::new())
    }

    fn newest_items(&self, size: usize) -> Option<Value> {
        let mut body = Map::new();
        body.insert("size".to_string(), json!(page_size(size)));
        self.post(config::NEWEST_ITEMS_ENDPOINT, body)
    }

    fn best_deals(&self, size: usize) -> Option<Value> {
        let mut body = Map::new();
        body.insert("size".to_string(), json!(page_size(size)));
        self.post(config::BEST_DEALS_ENDPOINT, body)
    }

    fn newest_sales_30_days(
        &self,
        item_name: &str,
        stat_trak: bool,
        souvenir: bool,
        doppler_phase: Option<&str>,
    ) -> Option<Value> {
        let mut body = Map::new();
        body.insert("itemName".to_string(), json!(item_name));
        body.insert("statTrak".to_string(), json!(stat_trak));
        body.insert("souvenir".to_string(), json!(souvenir));
        if let Some(phase) = doppler_phase.filter(|p| !p.is_empty()) {
            body.insert("dopplerPhase".to_string(), json!(phase));
        }
        self.post(config::NEWEST_SALES_ENDPOINT, body)
    }
}
