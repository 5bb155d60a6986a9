use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

use crate::external::quote_provider::{QuoteProvider, QuoteProviderError};

// Quote fetches must not stall an add-asset request indefinitely
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

pub struct FinnhubProvider {
    client: reqwest::Client,
    api_key: String,
}

impl FinnhubProvider {
    pub fn from_env() -> Result<Self, QuoteProviderError> {
        let api_key = std::env::var("FINNHUB_API_KEY")
            .map_err(|_| QuoteProviderError::BadResponse("FINNHUB_API_KEY not set".into()))?;
        Self::new(api_key)
    }

    pub fn new(api_key: String) -> Result<Self, QuoteProviderError> {
        let client = reqwest::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            .map_err(|e| QuoteProviderError::Network(e.to_string()))?;
        Ok(Self { client, api_key })
    }
}

#[derive(Debug, Deserialize)]
struct FinnhubQuote {
    // /quote returns { "c": <current>, "h": ..., "l": ..., "o": ..., "pc": ... }
    c: Option<f64>,
}

#[async_trait]
impl QuoteProvider for FinnhubProvider {
    async fn fetch_quote(&self, symbol: &str) -> Result<f64, QuoteProviderError> {
        let url = "https://finnhub.io/api/v1/quote";

        let resp = self
            .client
            .get(url)
            .query(&[("symbol", symbol), ("token", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| QuoteProviderError::Network(e.to_string()))?;

        let body = resp
            .json::<FinnhubQuote>()
            .await
            .map_err(|e| QuoteProviderError::Parse(e.to_string()))?;

        body.c
            .ok_or_else(|| QuoteProviderError::BadResponse("missing price field".into()))
    }
}
