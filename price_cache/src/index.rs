//! Query index: answers "has this exact triple been served before?".
//!
//! Matching is exact on all three fields and case-insensitive on each of
//! them: the key columns carry NOCASE collation, so `aapl` finds the
//! entry created for `AAPL` without any normalization in application
//! code. An empty `range` or `date` is a first-class key, distinct from
//! any present value; it is never treated as a wildcard.

use diesel::prelude::*;

use crate::errors::StoreError;
use crate::models::{HistoricalQuery, NewHistoricalQuery};
use crate::schema::historical_queries::dsl as hq;

/// Lookup and creation of cache index entries.
pub trait QueryIndex {
    /// Exact-match probe for an existing entry. `None` means the triple
    /// has never been cached.
    fn find_query(
        &self,
        conn: &mut SqliteConnection,
        symbol: &str,
        range: &str,
        date: &str,
    ) -> Result<Option<HistoricalQuery>, StoreError>;

    /// Inserts a new entry for the triple and returns it.
    ///
    /// This does not check for an existing duplicate; that is the
    /// orchestrator's responsibility. A concurrent duplicate surfaces as
    /// a `UniqueViolation` database error from the schema's unique key.
    fn create_query(
        &self,
        conn: &mut SqliteConnection,
        symbol: &str,
        range: &str,
        date: &str,
    ) -> Result<HistoricalQuery, StoreError>;
}

/// SQLite-backed [`QueryIndex`] over the `historical_queries` table.
pub struct SqliteQueryIndex;

impl QueryIndex for SqliteQueryIndex {
    fn find_query(
        &self,
        conn: &mut SqliteConnection,
        symbol: &str,
        range: &str,
        date: &str,
    ) -> Result<Option<HistoricalQuery>, StoreError> {
        let found = hq::historical_queries
            .filter(hq::symbol.eq(symbol))
            .filter(hq::range.eq(range))
            .filter(hq::date.eq(date))
            .select(HistoricalQuery::as_select())
            .first(conn)
            .optional()?;
        Ok(found)
    }

    fn create_query(
        &self,
        conn: &mut SqliteConnection,
        symbol: &str,
        range: &str,
        date: &str,
    ) -> Result<HistoricalQuery, StoreError> {
        let row = NewHistoricalQuery {
            symbol,
            range,
            date,
        };
        let created = diesel::insert_into(hq::historical_queries)
            .values(&row)
            .returning(HistoricalQuery::as_returning())
            .get_result(conn)?;
        Ok(created)
    }
}
