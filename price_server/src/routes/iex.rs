use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use std::sync::Arc;

use market_data_client::models::{bar::DailyBar, symbol::SymbolListing, trade::LastTrade};

use crate::error::ApiError;
use crate::state::AppState;

// ── Query params ─────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct HistoricalPriceQuery {
    #[serde(default)]
    symbol: String,
    #[serde(default)]
    range: String,
    #[serde(default)]
    date: String,
}

#[derive(Debug, Deserialize)]
pub struct LastTradedPriceQuery {
    /// Comma-separated list of symbols.
    #[serde(default)]
    symbols: String,
}

// ── Route definitions ────────────────────────────────────────────────────

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/iex/symbols", get(symbols))
        .route("/iex/lastTradedPrice", get(last_traded_price))
        .route("/iex/historicalPrice", get(historical_price))
}

// ── Handlers ─────────────────────────────────────────────────────────────

async fn historical_price(
    State(state): State<Arc<AppState>>,
    Query(q): Query<HistoricalPriceQuery>,
) -> Result<Json<Vec<DailyBar>>, ApiError> {
    if q.symbol.is_empty() {
        return Err(ApiError::BadRequest(
            "symbol query parameter is required".to_string(),
        ));
    }

    let bars = state
        .service
        .lookup_historical_prices(&q.symbol, &q.range, &q.date)
        .await?;
    Ok(Json(bars))
}

async fn symbols(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<SymbolListing>>, ApiError> {
    let listings = state.service.list_symbols().await?;
    Ok(Json(listings))
}

async fn last_traded_price(
    State(state): State<Arc<AppState>>,
    Query(q): Query<LastTradedPriceQuery>,
) -> Result<Json<Vec<LastTrade>>, ApiError> {
    let symbols = parse_symbols_csv(&q.symbols);
    let trades = state.service.last_trade_prices(&symbols).await?;
    Ok(Json(trades))
}

fn parse_symbols_csv(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
