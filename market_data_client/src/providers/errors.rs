use thiserror::Error;

/// Errors that can occur within a `MarketDataProvider` implementation.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// An error during an API request (e.g., network failure, timeout).
    #[error("API request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The vendor's API returned a non-success status with an error body.
    #[error("API error: {0}")]
    Api(String),

    /// The vendor reported that the requested symbol does not exist.
    #[error("unknown symbol: {0}")]
    UnknownSymbol(String),
}

/// Errors raised while constructing a provider, before any request is made.
#[derive(Debug, Error)]
pub enum ProviderInitError {
    /// A required environment variable is not set.
    #[error("missing environment variable: {0}")]
    MissingEnvVar(String),

    /// The underlying HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),
}
