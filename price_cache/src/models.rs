//! Row types for the cache index and the bar store.
//!
//! Prices travel as [`Decimal`] in memory but are persisted as their exact
//! text form, so a cached `180.33` re-reads as `180.33` regardless of how
//! the database backend handles numerics.

use std::str::FromStr;

use chrono::NaiveDate;
use diesel::prelude::*;
use market_data_client::models::bar::DailyBar;
use rust_decimal::Decimal;

use crate::errors::StoreError;
use crate::schema::{historical_queries, price_bars};

/// One cache index entry: a (symbol, range, date) triple that has been
/// served before. `range` and `date` hold the empty string when the
/// original request did not supply them.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable, Identifiable)]
#[diesel(table_name = historical_queries)]
pub struct HistoricalQuery {
    pub id: i32,
    pub symbol: String,
    pub range: String,
    pub date: String,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = historical_queries)]
pub struct NewHistoricalQuery<'a> {
    pub symbol: &'a str,
    pub range: &'a str,
    pub date: &'a str,
}

/// One cached provider response row, owned by its query.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable, Identifiable, Associations)]
#[diesel(table_name = price_bars)]
#[diesel(belongs_to(HistoricalQuery, foreign_key = query_id))]
pub struct PriceBarRow {
    pub id: i32,
    pub query_id: i32,
    /// Position of this bar in the provider response that created it.
    pub seq: i32,
    pub symbol: String,
    pub date: NaiveDate,
    pub volume: Option<i64>,
    pub close: String,
    pub high: String,
    pub low: String,
    pub open: String,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = price_bars)]
pub struct NewPriceBar {
    pub query_id: i32,
    pub seq: i32,
    pub symbol: String,
    pub date: NaiveDate,
    pub volume: Option<i64>,
    pub close: String,
    pub high: String,
    pub low: String,
    pub open: String,
}

impl NewPriceBar {
    /// Builds the insertable row for one bar of a provider response.
    pub fn from_bar(query_id: i32, seq: i32, bar: &DailyBar) -> Self {
        Self {
            query_id,
            seq,
            symbol: bar.symbol.clone(),
            date: bar.date,
            volume: bar.volume,
            close: bar.close.to_string(),
            high: bar.high.to_string(),
            low: bar.low.to_string(),
            open: bar.open.to_string(),
        }
    }
}

fn parse_price(row_id: i32, field: &str, text: &str) -> Result<Decimal, StoreError> {
    Decimal::from_str(text).map_err(|e| {
        StoreError::Corrupt(format!("bar {row_id}: bad {field} value {text:?}: {e}"))
    })
}

impl TryFrom<PriceBarRow> for DailyBar {
    type Error = StoreError;

    fn try_from(row: PriceBarRow) -> Result<Self, StoreError> {
        Ok(DailyBar {
            close: parse_price(row.id, "close", &row.close)?,
            high: parse_price(row.id, "high", &row.high)?,
            low: parse_price(row.id, "low", &row.low)?,
            open: parse_price(row.id, "open", &row.open)?,
            symbol: row.symbol,
            date: row.date,
            volume: row.volume,
        })
    }
}
