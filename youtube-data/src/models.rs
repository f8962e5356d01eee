use serde::Deserialize;

/// Response from the `search` endpoint (`part=snippet`).
#[derive(Debug, Deserialize)]
pub struct SearchListResponse {
    #[serde(default)]
    pub items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
pub struct SearchItem {
    pub id: VideoId,
    pub snippet: Snippet,
}

#[derive(Debug, Deserialize)]
pub struct VideoId {
    #[serde(rename = "videoId")]
    pub video_id: String,
}

#[derive(Debug, Deserialize)]
pub struct Snippet {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub thumbnails: Thumbnails,
}

#[derive(Debug, Default, Deserialize)]
pub struct Thumbnails {
    pub default: Option<Thumbnail>,
    pub medium: Option<Thumbnail>,
    pub high: Option<Thumbnail>,
}

impl Thumbnails {
    /// The medium rendition, falling back to whatever the API sent.
    pub fn preferred_url(&self) -> Option<&str> {
        self.medium
            .as_ref()
            .or(self.high.as_ref())
            .or(self.default.as_ref())
            .map(|t| t.url.as_str())
    }
}

#[derive(Debug, Deserialize)]
pub struct Thumbnail {
    pub url: String,
}

/// Response from the `videos` endpoint (`part=statistics`).
#[derive(Debug, Deserialize)]
pub struct VideoListResponse {
    #[serde(default)]
    pub items: Vec<VideoStatisticsItem>,
}

#[derive(Debug, Deserialize)]
pub struct VideoStatisticsItem {
    pub id: String,
    #[serde(default)]
    pub statistics: VideoStatistics,
}

/// Counts come back as JSON strings and may be absent entirely (e.g. the
/// like count on videos with ratings hidden). Absent or non-numeric
/// values read as 0.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VideoStatistics {
    #[serde(rename = "viewCount")]
    pub view_count: Option<String>,
    #[serde(rename = "likeCount")]
    pub like_count: Option<String>,
}

impl VideoStatistics {
    pub fn views(&self) -> u64 {
        parse_count(self.view_count.as_deref())
    }

    pub fn likes(&self) -> u64 {
        parse_count(self.like_count.as_deref())
    }
}

fn parse_count(raw: Option<&str>) -> u64 {
    raw.and_then(|s| s.parse().ok()).unwrap_or(0)
}

/// A search hit with its statistics attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Video {
    pub id: String,
    pub title: String,
    pub description: String,
    pub thumbnail_url: String,
    pub views: u64,
    pub likes: u64,
}

impl Video {
    /// Canonical watch URL for this video.
    pub fn watch_url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_search_response() {
        let json = r#"{
            "kind": "youtube#searchListResponse",
            "items": [
                {
                    "id": { "kind": "youtube#video", "videoId": "dQw4w9WgXcQ" },
                    "snippet": {
                        "title": "Some video",
                        "description": "About things",
                        "thumbnails": {
                            "default": { "url": "https://i.ytimg.com/vi/dQw4w9WgXcQ/default.jpg" },
                            "medium": { "url": "https://i.ytimg.com/vi/dQw4w9WgXcQ/mqdefault.jpg" }
                        }
                    }
                }
            ]
        }"#;

        let response: SearchListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.items.len(), 1);
        let item = &response.items[0];
        assert_eq!(item.id.video_id, "dQw4w9WgXcQ");
        assert_eq!(
            item.snippet.thumbnails.preferred_url(),
            Some("https://i.ytimg.com/vi/dQw4w9WgXcQ/mqdefault.jpg")
        );
    }

    #[test]
    fn deserialize_statistics_response() {
        let json = r#"{
            "items": [
                { "id": "a", "statistics": { "viewCount": "1000", "likeCount": "200" } },
                { "id": "b", "statistics": { "viewCount": "17" } },
                { "id": "c", "statistics": {} }
            ]
        }"#;

        let response: VideoListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.items[0].statistics.views(), 1000);
        assert_eq!(response.items[0].statistics.likes(), 200);
        assert_eq!(response.items[1].statistics.likes(), 0);
        assert_eq!(response.items[2].statistics.views(), 0);
    }

    #[test]
    fn non_numeric_counts_read_as_zero() {
        let stats = VideoStatistics {
            view_count: Some("not-a-number".to_string()),
            like_count: None,
        };
        assert_eq!(stats.views(), 0);
        assert_eq!(stats.likes(), 0);
    }

    #[test]
    fn watch_url_points_at_video() {
        let video = Video {
            id: "abc123".to_string(),
            title: String::new(),
            description: String::new(),
            thumbnail_url: String::new(),
            views: 0,
            likes: 0,
        };
        assert_eq!(video.watch_url(), "https://www.youtube.com/watch?v=abc123");
    }
}
