use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use market_data_client::providers::ProviderError;
use price_cache::errors::LookupError;
use serde_json::json;
use thiserror::Error;

/// Unified error type for API responses.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("bad_request: {0}")]
    BadRequest(String),

    #[error("not_found: {0}")]
    NotFound(String),

    #[error("upstream_error: {0}")]
    Upstream(String),

    #[error("internal_error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_str) = match &self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            Self::Upstream(msg) => (StatusCode::BAD_GATEWAY, format!("upstream_error: {msg}")),
            Self::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, format!("internal_error: {msg}"))
            }
        };

        let body = json!({ "error": error_str });
        (status, axum::Json(body)).into_response()
    }
}

impl From<LookupError> for ApiError {
    fn from(e: LookupError) -> Self {
        match e {
            LookupError::Provider(ProviderError::UnknownSymbol(symbol)) => {
                Self::NotFound(format!("unknown symbol: {symbol}"))
            }
            LookupError::Provider(other) => Self::Upstream(other.to_string()),
            LookupError::Store(store) => Self::Internal(store.to_string()),
        }
    }
}
