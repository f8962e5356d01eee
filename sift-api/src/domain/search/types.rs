use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A provider-agnostic search hit, discriminated by `type` on the wire.
///
/// `relevance` on web hits is always recomputed from the provider's
/// return order, never taken from the provider itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SearchResult {
    Video {
        title: String,
        /// Canonical watch URL.
        link: String,
        thumbnail: String,
        description: String,
        views: u64,
        likes: u64,
    },
    Article {
        title: String,
        link: String,
        snippet: String,
        /// In [0, 1], from return-order position (first hit highest).
        relevance: f64,
    },
    Blog {
        title: String,
        link: String,
        snippet: String,
        relevance: f64,
    },
    Academic {
        title: String,
        link: String,
        snippet: String,
        /// Authors/venue/year block, passed through untouched.
        #[serde(skip_serializing_if = "Option::is_none")]
        publication_info: Option<Value>,
        citations: u64,
    },
}

/// A scored hit with its dense 1-based rank in the merged result set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedResult {
    #[serde(flatten)]
    pub result: SearchResult,
    pub score: f64,
    pub rank: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn video_serializes_with_type_tag() {
        let result = SearchResult::Video {
            title: "t".into(),
            link: "https://www.youtube.com/watch?v=abc".into(),
            thumbnail: "https://thumbs/abc.jpg".into(),
            description: "d".into(),
            views: 10,
            likes: 2,
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["type"], "video");
        assert_eq!(json["views"], 10);
    }

    #[test]
    fn ranked_result_flattens_the_hit() {
        let ranked = RankedResult {
            result: SearchResult::Blog {
                title: "t".into(),
                link: "l".into(),
                snippet: "s".into(),
                relevance: 0.5,
            },
            score: 50.0,
            rank: 1,
        };

        let json = serde_json::to_value(&ranked).unwrap();
        assert_eq!(json["type"], "blog");
        assert_eq!(json["score"], 50.0);
        assert_eq!(json["rank"], 1);
    }

    #[test]
    fn academic_omits_absent_publication_info() {
        let result = SearchResult::Academic {
            title: "t".into(),
            link: "l".into(),
            snippet: "s".into(),
            publication_info: None,
            citations: 0,
        };

        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("publication_info").is_none());
    }
}
