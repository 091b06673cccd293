use chatcounter::{
    bot, config,
    errors::{Error, Result},
};
use dotenvy::dotenv;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Load .env file first so RUST_LOG from it applies to the subscriber
    let dotenv_loaded = dotenv().is_ok(); // Non-fatal, env vars can be set externally

    // 2. Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    if !dotenv_loaded {
        info!(".env file not found, using process environment only.");
    }

    // 3. Load settings (config.toml, or defaults when absent)
    let settings = config::load_default_settings()
        .inspect_err(|e| error!("Critical error loading settings: {}", e))?;
    info!("Successfully processed bot settings.");

    // 4. Run the bot
    // DISCORD_BOT_TOKEN is loaded here, directly before use, not stored in Settings
    let token = config::env::discord_token()
        .inspect_err(|e| error!("{} not usable: {}", config::env::TOKEN_VAR, e))?;

    bot::run_bot(token, Arc::new(settings), config::env::dev_guild_id())
        .await
        .map_err(Error::from)?;

    Ok(())
}
