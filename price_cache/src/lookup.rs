//! Cache-or-fetch orchestration.
//!
//! [`PriceLookupService`] is the single inbound operation of the engine:
//! probe the index, serve a hit straight from the store, and on a miss
//! call the upstream provider exactly once, persisting its response as
//! one atomic batch for every future identical query.
//!
//! The probe-then-create window is raced by concurrent misses on the same
//! triple. The schema's unique key on (symbol, range, date) closes it:
//! the loser's transaction rolls back with a unique violation and the
//! loser serves the bars it already fetched, so the index never holds two
//! entries for one logical triple and every caller receives correct data.

use std::sync::Arc;

use diesel::SqliteConnection;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use market_data_client::models::{
    bar::DailyBar, request_params::HistoricalBarsRequest, symbol::SymbolListing, trade::LastTrade,
};
use market_data_client::providers::MarketDataProvider;

use crate::db::connection::DbPool;
use crate::errors::{LookupError, StoreError};
use crate::index::{QueryIndex, SqliteQueryIndex};
use crate::models::NewPriceBar;
use crate::store::{PriceBarStore, SqlitePriceBarStore};

/// Serves historical price lookups from the cache, falling back to the
/// upstream provider exactly once per distinct query triple.
///
/// Also carries the two uncached passthrough operations (symbol directory
/// and last trade prices), which forward to the provider 1:1.
pub struct PriceLookupService {
    provider: Arc<dyn MarketDataProvider>,
    pool: DbPool,
    index: SqliteQueryIndex,
    store: SqlitePriceBarStore,
}

impl PriceLookupService {
    pub fn new(provider: Arc<dyn MarketDataProvider>, pool: DbPool) -> Self {
        Self {
            provider,
            pool,
            index: SqliteQueryIndex,
            store: SqlitePriceBarStore,
        }
    }

    /// Look up the historical daily bars for (symbol, range, date).
    ///
    /// On a hit the provider is not called at all: the cost is one index
    /// probe plus one bounded read. On a miss the provider is called once,
    /// the full response is persisted as one transaction, and the fetched
    /// bars are returned directly. A provider failure propagates without
    /// writing anything, so the next identical request retries the fetch.
    pub async fn lookup_historical_prices(
        &self,
        symbol: &str,
        range: &str,
        date: &str,
    ) -> Result<Vec<DailyBar>, LookupError> {
        {
            let mut conn = self.pool.get().map_err(StoreError::from)?;
            if let Some(query) = self.index.find_query(&mut conn, symbol, range, date)? {
                tracing::debug!(symbol, range, date, query_id = query.id, "cache hit");
                let rows = self.store.find_bars(&mut conn, query.id)?;
                let bars = rows
                    .into_iter()
                    .map(DailyBar::try_from)
                    .collect::<Result<Vec<_>, StoreError>>()?;
                return Ok(bars);
            }
            // The probe connection returns to the pool before the provider
            // round-trip; it is not held across the await.
        }

        tracing::info!(symbol, range, date, "query not cached, fetching from provider");
        let params = HistoricalBarsRequest::new(symbol, range, date);
        let bars = self.provider.fetch_daily_bars(&params).await?;

        let mut conn = self.pool.get().map_err(StoreError::from)?;
        match self.persist_response(&mut conn, symbol, range, date, &bars) {
            Ok(query_id) => {
                tracing::debug!(query_id, bar_count = bars.len(), "cached provider response");
            }
            Err(StoreError::Database(DieselError::DatabaseError(
                DatabaseErrorKind::UniqueViolation,
                _,
            ))) => {
                // A concurrent miss on the same triple committed first; its
                // rows are authoritative and ours rolled back.
                tracing::debug!(symbol, range, date, "lost cache-fill race, serving fetched bars");
            }
            Err(e) => return Err(e.into()),
        }

        Ok(bars)
    }

    /// Writes the index entry and every bar of the response as one unit,
    /// so a reader never observes a query with a partial bar set.
    fn persist_response(
        &self,
        conn: &mut SqliteConnection,
        symbol: &str,
        range: &str,
        date: &str,
        bars: &[DailyBar],
    ) -> Result<i32, StoreError> {
        conn.immediate_transaction(|conn| {
            let query = self.index.create_query(conn, symbol, range, date)?;
            for (seq, bar) in bars.iter().enumerate() {
                self.store
                    .save_bar(conn, NewPriceBar::from_bar(query.id, seq as i32, bar))?;
            }
            Ok(query.id)
        })
    }

    /// Uncached forward of the provider's symbol directory.
    pub async fn list_symbols(&self) -> Result<Vec<SymbolListing>, LookupError> {
        Ok(self.provider.list_symbols().await?)
    }

    /// Uncached forward of last trade prices. An empty symbol list
    /// short-circuits to an empty response without a provider call.
    pub async fn last_trade_prices(
        &self,
        symbols: &[String],
    ) -> Result<Vec<LastTrade>, LookupError> {
        if symbols.is_empty() {
            return Ok(vec![]);
        }
        Ok(self.provider.last_trade_prices(symbols).await?)
    }
}
