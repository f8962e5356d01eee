use async_trait::async_trait;
use serp_scholar::{ScholarClient, ScholarError};

use crate::domain::search::traits::{ProviderError, SearchProvider};
use crate::domain::search::types::SearchResult;

/// Google Scholar-backed academic source (via SerpApi).
pub struct ScholarSource {
    client: ScholarClient,
}

impl ScholarSource {
    pub fn new(client: ScholarClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SearchProvider for ScholarSource {
    fn name(&self) -> &'static str {
        "scholar"
    }

    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, ProviderError> {
        let results = self.client.search(query).await?;

        Ok(results
            .into_iter()
            .map(|result| SearchResult::Academic {
                citations: result.citations(),
                title: result.title,
                link: result.link,
                snippet: result.snippet,
                publication_info: result.publication_info,
            })
            .collect())
    }
}

impl From<ScholarError> for ProviderError {
    fn from(err: ScholarError) -> Self {
        match err {
            ScholarError::Unauthorized => ProviderError::BadCredentials,
            ScholarError::MissingOrganicResults => ProviderError::EmptyResponse,
            ScholarError::ResponseError(msg) | ScholarError::ParsingError(msg) => {
                ProviderError::UpstreamError(msg)
            }
        }
    }
}
