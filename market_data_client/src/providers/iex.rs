pub mod params;
pub mod response;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, SecretString};

use crate::{
    models::{
        bar::DailyBar, request_params::HistoricalBarsRequest, symbol::SymbolListing,
        trade::LastTrade,
    },
    providers::{
        MarketDataProvider, ProviderError, ProviderInitError,
        iex::{params::chart_path, response::IexChartRow},
    },
};

const DEFAULT_BASE_URL: &str = "https://cloud.iexapis.com/stable";

/// Name of the environment variable holding the IEX Cloud API token.
pub const TOKEN_ENV_VAR: &str = "IEX_API_TOKEN";

/// Name of the environment variable overriding the IEX base URL.
/// Mainly useful to point the client at a local stub server.
pub const BASE_URL_ENV_VAR: &str = "IEX_BASE_URL";

/// IEX Cloud implementation of [`MarketDataProvider`].
///
/// Every request carries the account token as a `token` query parameter,
/// which is how IEX meters usage.
pub struct IexProvider {
    client: Client,
    base_url: String,
    token: SecretString,
}

impl IexProvider {
    /// Creates a provider against the given base URL with the given token.
    pub fn new(base_url: impl Into<String>, token: SecretString) -> Result<Self, ProviderInitError> {
        let client = Client::builder().build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
            token,
        })
    }

    /// Creates a provider from the environment.
    ///
    /// Reads the API token from `IEX_API_TOKEN` and an optional base URL
    /// override from `IEX_BASE_URL`.
    pub fn from_env() -> Result<Self, ProviderInitError> {
        let token = std::env::var(TOKEN_ENV_VAR)
            .map_err(|_| ProviderInitError::MissingEnvVar(TOKEN_ENV_VAR.to_string()))?;
        let base_url =
            std::env::var(BASE_URL_ENV_VAR).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url, SecretString::new(token.into()))
    }

    /// Issues an authenticated GET and decodes the JSON body, mapping the
    /// vendor's 404 onto [`ProviderError::UnknownSymbol`].
    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        extra_query: &[(&str, String)],
        symbol_for_404: Option<&str>,
    ) -> Result<T, ProviderError> {
        let url = format!("{}{}", self.base_url, path);
        let mut query: Vec<(&str, String)> = vec![("token", self.token.expose_secret().to_string())];
        query.extend(extra_query.iter().cloned());

        let response = self.client.get(&url).query(&query).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            if let Some(symbol) = symbol_for_404 {
                return Err(ProviderError::UnknownSymbol(symbol.to_string()));
            }
        }
        if !response.status().is_success() {
            let error_msg = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown API error".to_string());
            return Err(ProviderError::Api(error_msg));
        }

        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl MarketDataProvider for IexProvider {
    async fn fetch_daily_bars(
        &self,
        params: &HistoricalBarsRequest,
    ) -> Result<Vec<DailyBar>, ProviderError> {
        let path = chart_path(params);
        let extra: Vec<(&str, String)> = if params.date.is_empty() {
            vec![]
        } else {
            // Date-scoped charts come back minute-by-minute unless the
            // vendor is told to collapse them into one daily bar.
            vec![("chartByDay", "true".to_string())]
        };

        let rows: Vec<IexChartRow> = self
            .get_json(&path, &extra, Some(params.symbol.as_str()))
            .await?;

        Ok(rows
            .into_iter()
            .map(|row| row.into_daily_bar(&params.symbol))
            .collect())
    }

    async fn list_symbols(&self) -> Result<Vec<SymbolListing>, ProviderError> {
        self.get_json("/ref-data/symbols", &[], None).await
    }

    async fn last_trade_prices(
        &self,
        symbols: &[String],
    ) -> Result<Vec<LastTrade>, ProviderError> {
        if symbols.is_empty() {
            return Ok(vec![]);
        }
        let joined = symbols.join(",");
        self.get_json("/tops/last", &[("symbols", joined)], None)
            .await
    }
}
