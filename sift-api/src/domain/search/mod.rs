//! Multi-source search aggregation.
//!
//! Three independent providers (YouTube videos, Google Custom Search for
//! web articles/blogs, Google Scholar for academic papers) are queried
//! concurrently, their hits normalized into [`SearchResult`], scored with
//! a fixed cross-type weighting, and merged into one dense ranking.
//!
//! The aggregation never fails as a whole: a provider that errors or
//! times out contributes an empty list and the rest of the merge is
//! unaffected.

mod aggregator;
mod score;
mod traits;
mod types;

pub mod source;

pub use aggregator::Aggregator;
pub use score::score;
pub use traits::{ProviderError, SearchProvider};
pub use types::{RankedResult, SearchResult};
