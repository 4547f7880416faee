use anyhow::Context;
use tracing_subscriber::EnvFilter;

use course_recommender::{
    api::{create_router, AppState},
    config::Config,
    services::CourseCatalog,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("course_recommender=debug,tower_http=debug")),
        )
        .init();

    // The dataset is loaded exactly once; a bad file stops startup.
    let catalog = CourseCatalog::load(&config.dataset_path)
        .with_context(|| format!("Failed to load dataset from {}", config.dataset_path))?;

    tracing::info!(
        filter_mode = ?config.filter_mode,
        limit = config.recommendation_limit,
        "Recommendation settings"
    );

    let state = AppState::from_config(catalog, &config);
    let app = create_router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    tracing::info!(%addr, "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}
