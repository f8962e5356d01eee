use thiserror::Error;

use crate::models::{OrganicResult, ScholarResponse};

const DEFAULT_BASE_URL: &str = "https://serpapi.com/search";

pub struct ScholarClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl ScholarClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Point the client at a different endpoint, used by tests.
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url: base_url.into(),
        }
    }

    /// Run a Google Scholar search.
    ///
    /// A 200 response without an `organic_results` array is an error, not
    /// an empty result: SerpApi uses that shape for malformed or failed
    /// upstream queries, and callers must be able to tell the difference.
    #[tracing::instrument(skip(self))]
    pub async fn search(&self, query: &str) -> Result<Vec<OrganicResult>, ScholarError> {
        let resp = self
            .http
            .get(&self.base_url)
            .query(&[
                ("engine", "google_scholar"),
                ("q", query),
                ("api_key", self.api_key.as_str()),
                ("hl", "en"),
            ])
            .send()
            .await
            .map_err(|e| ScholarError::ResponseError(e.to_string()))?;

        if resp.status() == 401 || resp.status() == 403 {
            return Err(ScholarError::Unauthorized);
        }
        if !resp.status().is_success() {
            return Err(ScholarError::ResponseError(format!(
                "unexpected status {}",
                resp.status()
            )));
        }

        let data = resp.json::<ScholarResponse>().await.map_err(|e| {
            ScholarError::ParsingError(format!("failed to parse response as JSON: {e}"))
        })?;

        let results = data
            .organic_results
            .ok_or(ScholarError::MissingOrganicResults)?;

        tracing::debug!(hits = results.len(), "scholar search completed");

        Ok(results)
    }
}

#[derive(Error, Debug)]
pub enum ScholarError {
    #[error("Unauthorized")]
    Unauthorized,
    #[error("ResponseError: {0}")]
    ResponseError(String),
    #[error("ParsingError: {0}")]
    ParsingError(String),
    #[error("Response contained no organic_results field")]
    MissingOrganicResults,
}
