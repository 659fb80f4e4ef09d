use anyhow::{Context, Result};
use quire_server::config::ServerConfig;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration from quire.toml and QUIRE_* environment variables
    let config = ServerConfig::load().context("Failed to load configuration")?;

    // Run the server using the library's run function
    quire_server::run(config).await.context("Server error")?;

    Ok(())
}
