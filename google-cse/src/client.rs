use thiserror::Error;

use crate::models::{CseResponse, WebItem};

const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/customsearch/v1";

/// Client for one Programmable Search Engine instance: the API key and
/// the engine id (`cx`) together select which engine answers.
pub struct CseClient {
    http: reqwest::Client,
    api_key: String,
    engine_id: String,
    base_url: String,
}

impl CseClient {
    pub fn new(api_key: impl Into<String>, engine_id: impl Into<String>) -> Self {
        Self::with_base_url(api_key, engine_id, DEFAULT_BASE_URL)
    }

    /// Point the client at a different endpoint, used by tests.
    pub fn with_base_url(
        api_key: impl Into<String>,
        engine_id: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            engine_id: engine_id.into(),
            base_url: base_url.into(),
        }
    }

    /// Run a search, returning items in the engine's ranking order.
    #[tracing::instrument(skip(self))]
    pub async fn search(&self, query: &str) -> Result<Vec<WebItem>, CseError> {
        let resp = self
            .http
            .get(&self.base_url)
            .query(&[
                ("key", self.api_key.as_str()),
                ("cx", self.engine_id.as_str()),
                ("q", query),
            ])
            .send()
            .await
            .map_err(|e| CseError::ResponseError(e.to_string()))?;

        if resp.status() == 401 || resp.status() == 403 {
            return Err(CseError::Unauthorized);
        }
        if !resp.status().is_success() {
            return Err(CseError::ResponseError(format!(
                "unexpected status {}",
                resp.status()
            )));
        }

        let data = resp.json::<CseResponse>().await.map_err(|e| {
            CseError::ParsingError(format!("failed to parse response as JSON: {e}"))
        })?;

        tracing::debug!(hits = data.items.len(), "custom search completed");

        Ok(data.items)
    }
}

#[derive(Error, Debug)]
pub enum CseError {
    #[error("Unauthorized")]
    Unauthorized,
    #[error("ResponseError: {0}")]
    ResponseError(String),
    #[error("ParsingError: {0}")]
    ParsingError(String),
}
