use async_trait::async_trait;
use google_cse::{CseClient, CseError, WebItem};

use crate::domain::search::traits::{ProviderError, SearchProvider};
use crate::domain::search::types::SearchResult;

/// Google Custom Search-backed source for web articles and blogs.
pub struct WebSource {
    client: CseClient,
}

impl WebSource {
    pub fn new(client: CseClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SearchProvider for WebSource {
    fn name(&self) -> &'static str {
        "google"
    }

    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, ProviderError> {
        let items = self.client.search(query).await?;
        Ok(normalize(items))
    }
}

/// Classify each hit by its declared `og:type` and derive relevance from
/// the return-order position: `1 - index/total`, so the first hit scores
/// highest and relevance never reaches 0 for a finite result list.
fn normalize(items: Vec<WebItem>) -> Vec<SearchResult> {
    let total = items.len();

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let relevance = 1.0 - index as f64 / total as f64;
            let is_article = item.og_type() == Some("article");

            if is_article {
                SearchResult::Article {
                    title: item.title,
                    link: item.link,
                    snippet: item.snippet,
                    relevance,
                }
            } else {
                SearchResult::Blog {
                    title: item.title,
                    link: item.link,
                    snippet: item.snippet,
                    relevance,
                }
            }
        })
        .collect()
}

impl From<CseError> for ProviderError {
    fn from(err: CseError) -> Self {
        match err {
            CseError::Unauthorized => ProviderError::BadCredentials,
            CseError::ResponseError(msg) | CseError::ParsingError(msg) => {
                ProviderError::UpstreamError(msg)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(title: &str, og_type: Option<&str>) -> WebItem {
        let pagemap = match og_type {
            Some(t) => serde_json::json!({ "metatags": [{ "og:type": t }] }),
            None => serde_json::json!({ "metatags": [] }),
        };
        serde_json::from_value(serde_json::json!({
            "title": title,
            "link": format!("https://example.com/{title}"),
            "snippet": "s",
            "pagemap": pagemap
        }))
        .unwrap()
    }

    #[test]
    fn relevance_decays_with_position() {
        let results = normalize(vec![
            item("a", None),
            item("b", None),
            item("c", None),
            item("d", None),
        ]);

        let relevances: Vec<f64> = results
            .iter()
            .map(|r| match r {
                SearchResult::Article { relevance, .. } | SearchResult::Blog { relevance, .. } => {
                    *relevance
                }
                _ => unreachable!(),
            })
            .collect();

        assert_eq!(relevances, vec![1.0, 0.75, 0.5, 0.25]);
    }

    #[test]
    fn og_type_article_classifies_as_article() {
        let results = normalize(vec![
            item("a", Some("article")),
            item("b", Some("website")),
            item("c", None),
        ]);

        assert!(matches!(results[0], SearchResult::Article { .. }));
        assert!(matches!(results[1], SearchResult::Blog { .. }));
        assert!(matches!(results[2], SearchResult::Blog { .. }));
    }

    #[test]
    fn empty_input_normalizes_to_empty() {
        assert!(normalize(vec![]).is_empty());
    }
}
