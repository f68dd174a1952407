use anyhow::Result;
use site_ti::{config::Config, server};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("site_ti=info".parse()?),
        )
        .init();

    info!("Starting Site TI");

    // Load configuration from environment
    let config = Config::from_env()?;
    info!("Default locale: {}", config.default_locale);

    let state = server::AppState::from_config(config);
    server::serve(state).await
}
