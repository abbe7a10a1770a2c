use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Last trade reported by the upstream feed for one symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LastTrade {
    /// Ticker symbol the trade belongs to.
    pub symbol: String,

    /// Price of the last trade.
    pub price: Decimal,

    /// Size of the last trade in shares.
    #[serde(default)]
    pub size: Option<i64>,

    /// Trade time as epoch milliseconds, as reported by the feed.
    #[serde(default)]
    pub time: Option<i64>,
}
