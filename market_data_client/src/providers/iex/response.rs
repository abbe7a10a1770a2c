use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::bar::DailyBar;

/// One row of the vendor's chart payload.
///
/// The vendor omits `symbol` on some chart variants, so it is optional here
/// and backfilled from the request when missing.
#[derive(Deserialize, Debug)]
pub struct IexChartRow {
    pub date: NaiveDate,
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub close: Decimal,
    #[serde(default)]
    pub volume: Option<i64>,
    #[serde(default)]
    pub symbol: Option<String>,
}

impl IexChartRow {
    /// Converts the vendor row into the canonical bar, filling the symbol
    /// from the request when the payload left it out.
    pub fn into_daily_bar(self, requested_symbol: &str) -> DailyBar {
        DailyBar {
            symbol: self
                .symbol
                .unwrap_or_else(|| requested_symbol.to_string()),
            date: self.date,
            volume: self.volume,
            close: self.close,
            high: self.high,
            low: self.low,
            open: self.open,
        }
    }
}
