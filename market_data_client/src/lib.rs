//! Client library for the upstream market-data vendor.
//!
//! Defines the vendor-agnostic [`providers::MarketDataProvider`] trait, the
//! canonical data models returned by it, and the concrete IEX Cloud
//! implementation used in production.

pub mod models;
pub mod providers;
