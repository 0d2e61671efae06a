//! SkinBaron SDK for Rust.
//!
//! Provides a client for the SkinBaron marketplace API together with a small
//! analysis toolkit. Responses are normalized into [`Table`]s which can be
//! merged and filtered, joined into item reports, and extended with price
//! trends and a seven-day linear forecast.
//!
//! # Quick start
//!
//! ```no_run
//! use skinbaron_sdk::analysis::{price_prediction, price_trend, FilterParams};
//! use skinbaron_sdk::SkinBaronSdk;
//!
//! let sdk = SkinBaronSdk::builder()
//!     .credentials("api-key", "app-id")
//!     .build()
//!     .unwrap();
//!
//! // Newest listings and best deals, merged and filtered
//! let params = FilterParams {
//!     item_name: Some("SG 553 | Bleached".to_string()),
//!     ..Default::default()
//! };
//! let listings = sdk.filter_items(100, &params).unwrap();
//!
//! // Sales history joined with the price list, then a forecast
//! let report = sdk
//!     .reports()
//!     .build_report("★ Butterfly Knife | Gamma Doppler", false, false, None)
//!     .unwrap();
//! let forecast = price_prediction(&price_trend(&report.table).unwrap()).unwrap();
//! ```

pub mod analysis;
pub mod client;
pub mod config;
pub mod error;
pub mod matcher;
pub mod models;
pub mod normalize;
pub mod table;

pub use client::{MarketApi, SkinBaronClient};
pub use config::Credentials;
pub use error::{Result, SkinBaronError};
pub use table::{Row, Table};

use std::fmt;
use std::time::Duration;

use analysis::{FilterParams, ItemFilter, ReportGenerator};
use normalize::json_to_table;

// ---------------------------------------------------------------------------
// SkinBaronSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`SkinBaronSdk`] instance.
///
/// Use [`SkinBaronSdk::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](SkinBaronSdkBuilder::build) to create the SDK.
pub struct SkinBaronSdkBuilder {
    credentials: Option<Credentials>,
    base_url: Option<String>,
    timeout: Duration,
}

impl Default for SkinBaronSdkBuilder {
    fn default() -> Self {
        Self {
            credentials: None,
            base_url: None,
            timeout: config::DEFAULT_TIMEOUT,
        }
    }
}

impl SkinBaronSdkBuilder {
    /// Set the API key and application id of the SkinBaron account. Required.
    pub fn credentials(mut self, api_key: impl Into<String>, app_id: impl Into<String>) -> Self {
        self.credentials = Some(Credentials::new(api_key, app_id));
        self
    }

    /// Send requests to a different host than the public API.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the HTTP request timeout.
    ///
    /// Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the SDK and its HTTP client. No request is sent yet.
    pub fn build(self) -> Result<SkinBaronSdk> {
        let credentials = self.credentials.ok_or_else(|| {
            SkinBaronError::InvalidArgument("credentials are required".to_string())
        })?;
        let client = SkinBaronClient::new(credentials, self.base_url, self.timeout)?;
        Ok(SkinBaronSdk { client })
    }
}

// ---------------------------------------------------------------------------
// SkinBaronSdk
// ---------------------------------------------------------------------------

/// The main entry point for the SkinBaron SDK.
///
/// Wraps a [`SkinBaronClient`] and exposes fetch-and-normalize helpers plus
/// the report generator as a lightweight borrowing wrapper.
///
/// Created via [`SkinBaronSdk::builder()`].
#[derive(Debug)]
pub struct SkinBaronSdk {
    client: SkinBaronClient,
}

impl SkinBaronSdk {
    /// Create a new builder for configuring the SDK.
    pub fn builder() -> SkinBaronSdkBuilder {
        SkinBaronSdkBuilder::default()
    }

    /// Return a reference to the underlying [`SkinBaronClient`] for raw responses.
    pub fn client(&self) -> &SkinBaronClient {
        &self.client
    }

    /// Access the report generator, backed by this SDK's client.
    pub fn reports(&self) -> ReportGenerator<'_> {
        ReportGenerator::new(&self.client)
    }

    // -- Fetch and normalize -------------------------------------------------

    /// Current price list, one row per market item.
    pub fn price_list(&self) -> Result<Table> {
        fetched(self.client.get_price_list(), "price list")
    }

    /// The `size` newest listings (at most 100).
    pub fn newest_items(&self, size: usize) -> Result<Table> {
        fetched(self.client.newest_items(size), "newest items")
    }

    /// The `size` best deals (at most 100).
    pub fn best_deals(&self, size: usize) -> Result<Table> {
        fetched(self.client.best_deals(size), "best deals")
    }

    /// Sales of the last 30 days for an item, with the raw combined item names.
    pub fn newest_sales_30_days(
        &self,
        item_name: &str,
        stat_trak: bool,
        souvenir: bool,
        doppler_phase: Option<&str>,
    ) -> Result<Table> {
        fetched(
            self.client
                .newest_sales_30_days(item_name, stat_trak, souvenir, doppler_phase),
            "30-day sales",
        )
    }

    /// Fetch `size` newest items and best deals, merge them, and apply `params`.
    pub fn filter_items(&self, size: usize, params: &FilterParams) -> Result<Table> {
        let new_items = self.newest_items(size)?;
        let best_deals = self.best_deals(size)?;
        Ok(ItemFilter::new(&new_items, &best_deals).filter_items(params))
    }
}

fn fetched(response: Option<serde_json::Value>, what: &str) -> Result<Table> {
    let response = response.ok_or_else(|| SkinBaronError::FetchFailed(what.to_string()))?;
    json_to_table(&response)
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for SkinBaronSdk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SkinBaronSdk(base_url={}, app_id={})",
            self.client.base_url,
            self.client.app_id()
        )
    }
}
