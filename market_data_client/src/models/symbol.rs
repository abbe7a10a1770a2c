use serde::{Deserialize, Serialize};

/// One entry of the upstream symbol directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymbolListing {
    /// Ticker symbol (e.g. "AAPL").
    pub symbol: String,

    /// Company or instrument name.
    #[serde(default)]
    pub name: String,

    /// Whether the symbol is currently enabled for trading on the feed.
    #[serde(rename = "isEnabled", default)]
    pub is_enabled: bool,
}
