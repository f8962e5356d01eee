//! Concrete [`SearchProvider`](super::SearchProvider) implementations,
//! one per provider client crate, plus a mock for tests.

mod mock;
mod scholar;
mod video;
mod web;

pub use mock::MockProvider;
pub use scholar::ScholarSource;
pub use video::VideoSource;
pub use web::WebSource;
