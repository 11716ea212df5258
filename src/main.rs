use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use stream_planner_api::{
    config::Config,
    routes::{create_router, AppState},
    services::loaders::loader_for_source,
};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    config.validate()?;

    info!(
        data_source = %config.data_source,
        max_combination_size = config.max_combination_size,
        "Starting stream planner"
    );

    let loader = loader_for_source(&config.data_source);
    let state = AppState::load(loader, config.ranking()).await?;

    let app = create_router(Arc::new(state));

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    info!("Server running on http://{}", config.bind_addr());
    axum::serve(listener, app).await?;

    Ok(())
}
