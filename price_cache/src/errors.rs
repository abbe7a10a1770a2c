use market_data_client::providers::ProviderError;
use thiserror::Error;

/// Errors surfaced by the index and store persistence layers.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The underlying database rejected or failed an operation.
    #[error("database error: {0}")]
    Database(#[from] diesel::result::Error),

    /// No connection could be checked out of the pool.
    #[error("connection pool error: {0}")]
    Pool(#[from] r2d2::Error),

    /// A persisted row could not be decoded back into a bar.
    #[error("corrupt cache row: {0}")]
    Corrupt(String),
}

/// Errors surfaced by a cache-or-fetch lookup.
///
/// Provider failures never mutate the cache; store failures fail the
/// lookup rather than silently falling back to an uncached response.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The upstream provider call failed; the cache was left untouched.
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// The durable store failed during the probe or the persist step.
    #[error(transparent)]
    Store(#[from] StoreError),
}
