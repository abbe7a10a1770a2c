//! Canonical in-memory representation of one daily price bar (OHLCV).
//!
//! This struct is the standard output of every
//! [`MarketDataProvider`](crate::providers::MarketDataProvider)
//! implementation and the external representation served on cache hits.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One daily OHLCV record for a symbol on a trading date.
///
/// Prices are [`Decimal`] rather than floating point so that figures like
/// `180.33` survive storage and re-serialization without rounding drift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyBar {
    /// Ticker symbol the bar belongs to (e.g. "AAPL").
    pub symbol: String,

    /// Trading date of the bar.
    pub date: NaiveDate,

    /// Shares traded during the session. Not supplied by every feed.
    pub volume: Option<i64>,

    /// Closing price.
    pub close: Decimal,

    /// Session high.
    pub high: Decimal,

    /// Session low.
    pub low: Decimal,

    /// Opening price.
    pub open: Decimal,
}
