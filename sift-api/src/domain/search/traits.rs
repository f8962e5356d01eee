use async_trait::async_trait;
use thiserror::Error;

use super::types::SearchResult;

/// Failure taxonomy shared by all providers. Every variant is recovered
/// locally by the aggregator; none of them reach an HTTP response.
#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    #[error("provider call timed out")]
    Timeout,
    #[error("provider rejected our credentials")]
    BadCredentials,
    #[error("upstream error: {0}")]
    UpstreamError(String),
    #[error("provider returned an empty or malformed response")]
    EmptyResponse,
}

/// One external search source, normalized.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Stable name used in logs.
    fn name(&self) -> &'static str;

    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, ProviderError>;
}
