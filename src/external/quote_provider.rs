use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuoteProviderError {
    #[error("network error: {0}")]
    Network(String),

    #[error("bad response: {0}")]
    BadResponse(String),

    #[error("parse error: {0}")]
    Parse(String),
}

/// External collaborator returning the current price for a symbol. Callers
/// that cannot tolerate a failure degrade to a zero price instead of
/// propagating the error.
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    async fn fetch_quote(&self, symbol: &str) -> Result<f64, QuoteProviderError>;
}
