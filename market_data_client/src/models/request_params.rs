use serde::{Deserialize, Serialize};

/// Parameters identifying one historical daily-bar request.
///
/// The triple (symbol, range, date) is also the cache key used by the
/// lookup layer, so the fields are kept as the caller supplied them:
/// an empty `range` or `date` means "not supplied" and is a distinct,
/// first-class key rather than a wildcard.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct HistoricalBarsRequest {
    /// Ticker symbol to request (e.g. "AAPL").
    pub symbol: String,

    /// Relative range such as "6m" or "1y"; empty when not supplied.
    ///
    /// Interpretation of the value is left to the provider; the cache
    /// layer treats it as an opaque string.
    #[serde(default)]
    pub range: String,

    /// Absolute date in `YYYYMMDD` form; empty when not supplied.
    ///
    /// When present, providers return the bars for that single trading
    /// day and `range` is ignored.
    #[serde(default)]
    pub date: String,
}

impl HistoricalBarsRequest {
    /// Convenience constructor taking the triple as string slices.
    pub fn new(symbol: &str, range: &str, date: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            range: range.to_string(),
            date: date.to_string(),
        }
    }
}
