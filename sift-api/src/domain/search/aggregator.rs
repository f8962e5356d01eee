use std::cmp::Ordering;
use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;

use super::score::score;
use super::traits::{ProviderError, SearchProvider};
use super::types::{RankedResult, SearchResult};

/// Fans a query out to every provider concurrently and merges the hits
/// into one dense ranking.
///
/// Providers are queried in parallel so end-to-end latency is bounded by
/// the slowest provider, and each call carries its own timeout so one
/// hung upstream cannot stall the rest. The provider list order is the
/// concatenation order of the merged set (video, web, academic), which
/// only matters for tie-breaking between equal scores.
pub struct Aggregator {
    providers: Vec<Arc<dyn SearchProvider>>,
    provider_timeout: Duration,
}

impl Aggregator {
    pub fn new(providers: Vec<Arc<dyn SearchProvider>>, provider_timeout: Duration) -> Self {
        Self {
            providers,
            provider_timeout,
        }
    }

    /// Never fails as a whole: a provider error or timeout is logged and
    /// substituted with an empty list, and an empty ranking is a valid
    /// outcome even when every provider failed.
    #[tracing::instrument(skip(self))]
    pub async fn aggregate(&self, query: &str) -> Vec<RankedResult> {
        let calls = self.providers.iter().map(|provider| {
            let provider = Arc::clone(provider);
            let query = query.to_string();
            let timeout = self.provider_timeout;
            async move {
                let outcome = match tokio::time::timeout(timeout, provider.search(&query)).await {
                    Ok(result) => result,
                    Err(_) => Err(ProviderError::Timeout),
                };
                (provider.name(), outcome)
            }
        });

        // join_all keeps the provider list order in its output.
        let outcomes = join_all(calls).await;

        let mut merged: Vec<SearchResult> = Vec::new();
        for (name, outcome) in outcomes {
            match outcome {
                Ok(results) => {
                    tracing::debug!(provider = name, count = results.len(), "provider returned");
                    merged.extend(results);
                }
                Err(err) => {
                    tracing::warn!(provider = name, error = %err, "provider failed, contributing no results");
                }
            }
        }

        rank(merged)
    }
}

/// Score every hit, sort descending and assign dense 1-based ranks.
/// `sort_by` is stable, so equal scores keep their concatenation order.
fn rank(results: Vec<SearchResult>) -> Vec<RankedResult> {
    let mut scored: Vec<(SearchResult, f64)> = results
        .into_iter()
        .map(|result| {
            let score = score(&result);
            (result, score)
        })
        .collect();

    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    scored
        .into_iter()
        .enumerate()
        .map(|(index, (result, score))| RankedResult {
            result,
            score,
            rank: index as u32 + 1,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::search::source::MockProvider;

    fn video(title: &str, views: u64, likes: u64) -> SearchResult {
        SearchResult::Video {
            title: title.into(),
            link: format!("https://www.youtube.com/watch?v={title}"),
            thumbnail: String::new(),
            description: String::new(),
            views,
            likes,
        }
    }

    fn blog(title: &str, relevance: f64) -> SearchResult {
        SearchResult::Blog {
            title: title.into(),
            link: format!("https://example.com/{title}"),
            snippet: String::new(),
            relevance,
        }
    }

    fn paper(title: &str, citations: u64) -> SearchResult {
        SearchResult::Academic {
            title: title.into(),
            link: format!("https://scholar.example/{title}"),
            snippet: String::new(),
            publication_info: None,
            citations,
        }
    }

    fn aggregator(providers: Vec<Arc<dyn SearchProvider>>) -> Aggregator {
        Aggregator::new(providers, Duration::from_secs(1))
    }

    fn titles(ranked: &[RankedResult]) -> Vec<&str> {
        ranked
            .iter()
            .map(|r| match &r.result {
                SearchResult::Video { title, .. }
                | SearchResult::Article { title, .. }
                | SearchResult::Blog { title, .. }
                | SearchResult::Academic { title, .. } => title.as_str(),
            })
            .collect()
    }

    #[tokio::test]
    async fn ranks_are_dense_and_follow_scores() {
        let providers: Vec<Arc<dyn SearchProvider>> = vec![
            Arc::new(MockProvider::returning(
                "videos",
                vec![video("v1", 1000, 200)], // 680
            )),
            Arc::new(MockProvider::returning(
                "web",
                vec![blog("b1", 1.0), blog("b2", 0.75)], // 100, 75
            )),
            Arc::new(MockProvider::returning("scholar", vec![paper("p1", 5)])), // 50
        ];

        let ranked = aggregator(providers).aggregate("query").await;

        assert_eq!(titles(&ranked), vec!["v1", "b1", "b2", "p1"]);
        assert_eq!(
            ranked.iter().map(|r| r.rank).collect::<Vec<_>>(),
            vec![1, 2, 3, 4]
        );
        for pair in ranked.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[tokio::test]
    async fn ties_keep_concatenation_order() {
        // All score 100: video with views*0.6+likes*0.4 = 100, web hit with
        // relevance 1.0, paper with 10 citations.
        let providers: Vec<Arc<dyn SearchProvider>> = vec![
            Arc::new(MockProvider::returning("videos", vec![video("v", 100, 100)])),
            Arc::new(MockProvider::returning("web", vec![blog("b", 1.0)])),
            Arc::new(MockProvider::returning("scholar", vec![paper("p", 10)])),
        ];

        let ranked = aggregator(providers).aggregate("query").await;

        assert_eq!(titles(&ranked), vec!["v", "b", "p"]);
    }

    #[tokio::test]
    async fn failed_provider_removes_nothing_else() {
        let web = vec![blog("b1", 1.0), blog("b2", 0.5)];
        let papers = vec![paper("p1", 20)];

        let with_failure: Vec<Arc<dyn SearchProvider>> = vec![
            Arc::new(MockProvider::failing(
                "videos",
                ProviderError::UpstreamError("boom".into()),
            )),
            Arc::new(MockProvider::returning("web", web.clone())),
            Arc::new(MockProvider::returning("scholar", papers.clone())),
        ];
        let without_failed_source: Vec<Arc<dyn SearchProvider>> = vec![
            Arc::new(MockProvider::returning("web", web)),
            Arc::new(MockProvider::returning("scholar", papers)),
        ];

        let a = aggregator(with_failure).aggregate("query").await;
        let b = aggregator(without_failed_source).aggregate("query").await;

        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn all_providers_failing_yields_empty_ranking() {
        let providers: Vec<Arc<dyn SearchProvider>> = vec![
            Arc::new(MockProvider::failing("videos", ProviderError::Timeout)),
            Arc::new(MockProvider::failing("web", ProviderError::BadCredentials)),
            Arc::new(MockProvider::failing("scholar", ProviderError::EmptyResponse)),
        ];

        let ranked = aggregator(providers).aggregate("query").await;
        assert!(ranked.is_empty());
    }

    #[tokio::test]
    async fn slow_provider_times_out_without_blocking_others() {
        let providers: Vec<Arc<dyn SearchProvider>> = vec![
            Arc::new(MockProvider::delayed(
                "videos",
                Duration::from_secs(60),
                vec![video("never", 1, 1)],
            )),
            Arc::new(MockProvider::returning("web", vec![blog("b1", 1.0)])),
        ];

        let aggregator = Aggregator::new(providers, Duration::from_millis(50));
        let ranked = aggregator.aggregate("query").await;

        assert_eq!(titles(&ranked), vec!["b1"]);
    }
}
