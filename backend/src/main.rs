//! # Backend Service Entry Point

use backend::config::Config;
use backend::price_book::PriceBook;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("backend=debug,info")),
        )
        .with_target(true)
        .init();

    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    let price_book = PriceBook::new();
    price_book.clone().start_background_refresh(config.price_refresh_secs);

    let app = backend::app(price_book);

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    info!(address = %config.bind_address, "Token explorer backend listening");
    axum::serve(listener, app).await?;

    Ok(())
}
