use std::collections::HashMap;

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::models::{SearchItem, SearchListResponse, Video, VideoListResponse, VideoStatistics};

const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

/// Candidates requested per search; the statistics lookup is batched over
/// exactly these ids, so it stays a single call.
const MAX_RESULTS: &str = "15";

pub struct YouTubeClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl YouTubeClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Point the client at a different host, used by tests.
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url: base_url.into(),
        }
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<T, YouTubeError> {
        let resp = self
            .http
            .get(format!("{}/{}", self.base_url, path))
            .query(&[("key", self.api_key.as_str())])
            .query(params)
            .send()
            .await
            .map_err(|e| YouTubeError::ResponseError(e.to_string()))?;

        if resp.status() == 401 || resp.status() == 403 {
            return Err(YouTubeError::Unauthorized);
        }
        if !resp.status().is_success() {
            return Err(YouTubeError::ResponseError(format!(
                "unexpected status {}",
                resp.status()
            )));
        }

        resp.json::<T>().await.map_err(|e| {
            YouTubeError::ParsingError(format!("failed to parse response as JSON: {e}"))
        })
    }

    /// Search for videos matching `query` and attach view/like statistics
    /// to each hit. Two calls: keyword search, then one batched
    /// statistics lookup for the returned ids.
    #[tracing::instrument(skip(self))]
    pub async fn search_videos(&self, query: &str) -> Result<Vec<Video>, YouTubeError> {
        let search: SearchListResponse = self
            .fetch(
                "search",
                &[
                    ("part", "snippet"),
                    ("type", "video"),
                    ("maxResults", MAX_RESULTS),
                    ("q", query),
                ],
            )
            .await?;

        if search.items.is_empty() {
            return Ok(vec![]);
        }

        let ids = search
            .items
            .iter()
            .map(|item| item.id.video_id.as_str())
            .collect::<Vec<_>>()
            .join(",");

        let stats: VideoListResponse = self
            .fetch("videos", &[("part", "statistics"), ("id", &ids)])
            .await?;

        tracing::debug!(hits = search.items.len(), "youtube search completed");

        Ok(join_statistics(search.items, stats))
    }
}

/// Attach statistics to search hits by video id. Hits keep their search
/// order; a hit the statistics call did not cover gets zeroed counts.
/// The join is keyed rather than positional, so a reordered statistics
/// response cannot mis-attribute counts.
fn join_statistics(items: Vec<SearchItem>, stats: VideoListResponse) -> Vec<Video> {
    let mut by_id: HashMap<String, VideoStatistics> = stats
        .items
        .into_iter()
        .map(|item| (item.id, item.statistics))
        .collect();

    items
        .into_iter()
        .map(|item| {
            let stats = by_id.remove(&item.id.video_id).unwrap_or_default();
            Video {
                thumbnail_url: item
                    .snippet
                    .thumbnails
                    .preferred_url()
                    .unwrap_or_default()
                    .to_string(),
                id: item.id.video_id,
                title: item.snippet.title,
                description: item.snippet.description,
                views: stats.views(),
                likes: stats.likes(),
            }
        })
        .collect()
}

#[derive(Error, Debug)]
pub enum YouTubeError {
    #[error("Unauthorized")]
    Unauthorized,
    #[error("ResponseError: {0}")]
    ResponseError(String),
    #[error("ParsingError: {0}")]
    ParsingError(String),
}
