use anyhow::Result;
use clap::Parser;
use oasis_login::{app, config::Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "oasis_login=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Parse configuration from CLI args and environment variables
    let config = Config::parse();

    if !config.static_dir.is_dir() {
        tracing::warn!(
            "Static directory {} does not exist, stylesheets will not be served",
            config.static_dir.display()
        );
    }

    let app = app::router(&config.static_dir);

    let addr = config.get_bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Login page listening on http://{}", addr);
    tracing::info!("Base URL: {}", config.get_base_url());

    axum::serve(listener, app).await?;

    Ok(())
}
