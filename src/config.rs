use std::time::Duration;

pub const BASE_URL: &str = "https://api.skinbaron.de";

pub const PRICE_LIST_ENDPOINT: &str = "GetPriceList";
pub const NEWEST_ITEMS_ENDPOINT: &str = "NewestItems";
pub const BEST_DEALS_ENDPOINT: &str = "BestDeals";
pub const NEWEST_SALES_ENDPOINT: &str = "GetNewestSales30Days";

/// Largest `size` the listing endpoints accept.
pub const MAX_PAGE_SIZE: usize = 100;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Column the listing tables are joined on.
pub const LISTING_KEY: &str = "salesId";

/// Headers attached to every request besides `Content-Type`.
pub fn default_headers() -> [(&'static str, &'static str); 1] {
    [("x-requested-with", "XMLHttpRequest")]
}

/// API key and application id of a SkinBaron account.
///
/// Every request body carries both values. Each account has its own app id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub api_key: String,
    pub app_id: String,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, app_id: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            app_id: app_id.into(),
        }
    }
}
