use super::types::SearchResult;

const VIEW_WEIGHT: f64 = 0.6;
const LIKE_WEIGHT: f64 = 0.4;
const RELEVANCE_SCALE: f64 = 100.0;
const CITATION_WEIGHT: f64 = 10.0;

/// Heuristic cross-type score used to merge the three sources into one
/// ranking. A fixed linear weighting, not a learned model: popularity
/// for videos, return-order relevance (scaled up to be comparable with
/// video scores) for web hits, citations for papers.
pub fn score(result: &SearchResult) -> f64 {
    match result {
        SearchResult::Video { views, likes, .. } => {
            *views as f64 * VIEW_WEIGHT + *likes as f64 * LIKE_WEIGHT
        }
        SearchResult::Article { relevance, .. } | SearchResult::Blog { relevance, .. } => {
            relevance * RELEVANCE_SCALE
        }
        SearchResult::Academic { citations, .. } => *citations as f64 * CITATION_WEIGHT,
    }
}
