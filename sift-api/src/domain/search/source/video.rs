use async_trait::async_trait;
use youtube_data::{YouTubeClient, YouTubeError};

use crate::domain::search::traits::{ProviderError, SearchProvider};
use crate::domain::search::types::SearchResult;

/// YouTube-backed video source.
pub struct VideoSource {
    client: YouTubeClient,
}

impl VideoSource {
    pub fn new(client: YouTubeClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SearchProvider for VideoSource {
    fn name(&self) -> &'static str {
        "youtube"
    }

    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, ProviderError> {
        let videos = self.client.search_videos(query).await?;

        Ok(videos
            .into_iter()
            .map(|video| SearchResult::Video {
                link: video.watch_url(),
                title: video.title,
                thumbnail: video.thumbnail_url,
                description: video.description,
                views: video.views,
                likes: video.likes,
            })
            .collect())
    }
}

impl From<YouTubeError> for ProviderError {
    fn from(err: YouTubeError) -> Self {
        match err {
            YouTubeError::Unauthorized => ProviderError::BadCredentials,
            YouTubeError::ResponseError(msg) | YouTubeError::ParsingError(msg) => {
                ProviderError::UpstreamError(msg)
            }
        }
    }
}
