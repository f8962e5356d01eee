//! Mock provider implementation for testing.

use std::time::Duration;

use async_trait::async_trait;

use crate::domain::search::traits::{ProviderError, SearchProvider};
use crate::domain::search::types::SearchResult;

/// Mock provider with a fixed outcome, optionally delayed.
#[allow(dead_code)]
pub struct MockProvider {
    name: &'static str,
    outcome: Result<Vec<SearchResult>, ProviderError>,
    delay: Option<Duration>,
}

#[allow(dead_code)]
impl MockProvider {
    /// A provider that always succeeds with the given hits.
    pub fn returning(name: &'static str, results: Vec<SearchResult>) -> Self {
        Self {
            name,
            outcome: Ok(results),
            delay: None,
        }
    }

    /// A provider that always fails.
    pub fn failing(name: &'static str, error: ProviderError) -> Self {
        Self {
            name,
            outcome: Err(error),
            delay: None,
        }
    }

    /// A provider that sleeps before answering, for timeout tests.
    pub fn delayed(name: &'static str, delay: Duration, results: Vec<SearchResult>) -> Self {
        Self {
            name,
            outcome: Ok(results),
            delay: Some(delay),
        }
    }
}

#[async_trait]
impl SearchProvider for MockProvider {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn search(&self, _query: &str) -> Result<Vec<SearchResult>, ProviderError> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.outcome.clone()
    }
}
