//! Main entry point for nowbot.

use nowbot::{BotResult, NowBot};
use nowbot_common::init_logging;
use nowbot_config::ConfigLoader;
use tracing::{error, info};

#[tokio::main]
async fn main() -> BotResult<()> {
    let loader = ConfigLoader::from_env();
    let config = loader.load().await?;

    init_logging(&config.logging)?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        config = %loader.path().display(),
        default_timezone = %config.time.default_timezone,
        language = %config.language,
        "Starting nowbot"
    );

    let bot = NowBot::new(config);

    if let Err(e) = bot.start().await {
        error!("Bot stopped with an error: {}", e);
        return Err(e);
    }

    info!("nowbot stopped");
    Ok(())
}
