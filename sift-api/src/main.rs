mod app_state;
mod auth;
mod config;
mod domain;
mod repositories;
mod router;
mod routes;

pub use app_state::AppState;

use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,sift_api=debug")),
        )
        .init();

    let config = config::read_config().expect("Failed to read configuration");

    let connection_pool = PgPoolOptions::new()
        .acquire_timeout(std::time::Duration::from_secs(5))
        .connect_lazy_with(config.database.with_db());

    sqlx::migrate!().run(&connection_pool).await?;

    let address = format!(
        "{}:{}",
        config.application.host, config.application.port
    );
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!("listening on {address}");

    let app = router::create(connection_pool, config);
    axum::serve(listener, app).await?;

    Ok(())
}
