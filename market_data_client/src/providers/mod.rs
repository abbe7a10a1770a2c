//! Provider abstraction for market data sources.
//!
//! This module defines the [`MarketDataProvider`] trait, a unified interface
//! for fetching historical daily bars and reference data from any market
//! data vendor. Each concrete implementation (such as [`IexProvider`])
//! handles vendor-specific endpoints, authentication, and error mapping.
//!
//! The trait is designed for async usage and supports dynamic dispatch
//! (`dyn MarketDataProvider`) so the serving layer can hold a provider
//! without naming the concrete vendor type.

pub mod errors;
pub mod iex;

pub use errors::{ProviderError, ProviderInitError};
pub use iex::IexProvider;

use async_trait::async_trait;

use crate::models::{
    bar::DailyBar, request_params::HistoricalBarsRequest, symbol::SymbolListing, trade::LastTrade,
};

/// Unified interface to an upstream market-data vendor.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Fetch the historical daily bars for one request triple, in the
    /// order the vendor returns them.
    ///
    /// Fails with [`ProviderError::UnknownSymbol`] when the vendor reports
    /// the symbol does not exist.
    async fn fetch_daily_bars(
        &self,
        params: &HistoricalBarsRequest,
    ) -> Result<Vec<DailyBar>, ProviderError>;

    /// Fetch the vendor's full symbol directory.
    async fn list_symbols(&self) -> Result<Vec<SymbolListing>, ProviderError>;

    /// Fetch the last trade for each of the given symbols.
    async fn last_trade_prices(&self, symbols: &[String])
        -> Result<Vec<LastTrade>, ProviderError>;
}
