//! Analysis modules for the SkinBaron SDK.
//!
//! Each module works on [`Table`](crate::table::Table)s produced by the
//! [normalizer](crate::normalize): the item filter merges listing tables, the
//! report generator joins sales history with the price list, and the trend
//! and prediction modules extend a report with a short-term forecast.

pub mod filter;
pub mod prediction;
pub mod regression;
pub mod report;
pub mod trends;

pub use filter::{FilterParams, ItemFilter};
pub use prediction::{price_prediction, price_prediction_at};
pub use regression::LinearModel;
pub use report::{Report, ReportGenerator};
pub use trends::{price_trend, price_trend_at};
