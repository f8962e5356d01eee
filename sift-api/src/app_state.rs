use std::sync::Arc;
use std::time::Duration;

use google_cse::CseClient;
use serp_scholar::ScholarClient;
use sqlx::PgPool;
use youtube_data::YouTubeClient;

use crate::{
    auth::TokenSigner,
    config::Settings,
    domain::search::{
        source::{ScholarSource, VideoSource, WebSource},
        Aggregator, SearchProvider,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub db_pool: Arc<PgPool>,
    pub aggregator: Arc<Aggregator>,
    pub token_signer: TokenSigner,
}

impl AppState {
    pub fn new(db_pool: PgPool, config: &Settings) -> Self {
        // Provider list order is the merge's concatenation order:
        // video, then web, then academic.
        let providers: Vec<Arc<dyn SearchProvider>> = vec![
            Arc::new(VideoSource::new(YouTubeClient::new(
                config.providers.youtube_api_key.clone(),
            ))),
            Arc::new(WebSource::new(CseClient::new(
                config.providers.google_api_key.clone(),
                config.providers.google_engine_id.clone(),
            ))),
            Arc::new(ScholarSource::new(ScholarClient::new(
                config.providers.serpapi_api_key.clone(),
            ))),
        ];

        let aggregator = Aggregator::new(
            providers,
            Duration::from_secs(config.providers.timeout_secs),
        );

        Self {
            db_pool: Arc::new(db_pool),
            aggregator: Arc::new(aggregator),
            token_signer: TokenSigner::new(&config.auth.token_secret, config.auth.token_ttl_hours),
        }
    }
}
