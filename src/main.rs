use anyhow::{Context, Result};
use bhasha_kosha::{config::Config, server, Catalog};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("bhasha_kosha=info".parse()?),
        )
        .init();

    info!("Starting Bhasha Kosha");

    // Load configuration from environment
    let config = Config::from_env()?;

    let catalog = match &config.catalog_path {
        Some(path) => {
            info!("Loading language table from {}", path.display());
            Catalog::load(path)
                .with_context(|| format!("Failed to load language table {}", path.display()))?
        }
        None => Catalog::builtin().clone(),
    };
    info!(
        "Loaded {} languages across {} states",
        catalog.len(),
        catalog.state_names().len()
    );

    let app = server::create_router(server::AppState::new(catalog, config.geo.clone()));

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("✓ Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
