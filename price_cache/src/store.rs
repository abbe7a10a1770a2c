//! Price bar store: the cached rows owned by each index entry.

use diesel::prelude::*;

use crate::errors::StoreError;
use crate::models::{NewPriceBar, PriceBarRow};
use crate::schema::price_bars::dsl as pb;

/// Reads and writes of cached bars, keyed by the owning query's id.
pub trait PriceBarStore {
    /// All bars owned by the query, in the order the provider returned
    /// them. An unknown or empty query yields an empty vec, not an error.
    fn find_bars(
        &self,
        conn: &mut SqliteConnection,
        query_id: i32,
    ) -> Result<Vec<PriceBarRow>, StoreError>;

    /// Persists one bar. Called once per provider bar, inside the miss
    /// transaction; failures propagate to the caller without retry.
    fn save_bar(
        &self,
        conn: &mut SqliteConnection,
        bar: NewPriceBar,
    ) -> Result<PriceBarRow, StoreError>;
}

/// SQLite-backed [`PriceBarStore`] over the `price_bars` table.
pub struct SqlitePriceBarStore;

impl PriceBarStore for SqlitePriceBarStore {
    fn find_bars(
        &self,
        conn: &mut SqliteConnection,
        query_id: i32,
    ) -> Result<Vec<PriceBarRow>, StoreError> {
        let rows = pb::price_bars
            .filter(pb::query_id.eq(query_id))
            .order(pb::seq.asc())
            .select(PriceBarRow::as_select())
            .load(conn)?;
        Ok(rows)
    }

    fn save_bar(
        &self,
        conn: &mut SqliteConnection,
        bar: NewPriceBar,
    ) -> Result<PriceBarRow, StoreError> {
        let saved = diesel::insert_into(pb::price_bars)
            .values(&bar)
            .returning(PriceBarRow::as_returning())
            .get_result(conn)?;
        Ok(saved)
    }
}
