use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use passaporte_backend::config::AppConfig;
use passaporte_backend::{create_router, initialize_backend};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env()?;
    let state = initialize_backend(&config).await?;
    let app = create_router(state, &config)?;

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("📚 Passaporte do Leitor listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
