//! Core bot logic using the Poise framework.

use crate::error::BotResult;
use nowbot_commands::{create_framework, Data};
use nowbot_config::Config;
use poise::serenity_prelude as serenity;
use std::sync::Arc;
use tracing::{error, info};

/// Main bot structure.
pub struct NowBot {
    config: Arc<Config>,
}

impl NowBot {
    /// Creates a new bot instance.
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// The configuration the bot runs with.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Builds the data shared by all commands.
    pub fn build_data(&self) -> BotResult<Data> {
        Ok(Data::new(Arc::clone(&self.config))?)
    }

    /// Starts the bot and runs until the gateway connection ends or Ctrl-C
    /// is received.
    pub async fn start(&self) -> BotResult<()> {
        let data = self.build_data()?;
        let builder = create_framework(&data.translations);

        let framework = builder
            .setup(move |ctx, ready, framework| {
                Box::pin(async move {
                    info!(user = %ready.user.name, "Connected to Discord");
                    let commands = &framework.options().commands;
                    poise::builtins::register_globally(ctx, commands).await?;
                    info!(commands = commands.len(), "Registered commands globally");
                    Ok(data)
                })
            })
            .build();

        let mut client = serenity::ClientBuilder::new(
            self.config.discord.token.expose(),
            serenity::GatewayIntents::non_privileged(),
        )
        .framework(framework)
        .await?;

        let shard_manager = Arc::clone(&client.shard_manager);
        tokio::spawn(async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                error!("Failed to listen for shutdown signal: {:?}", e);
                return;
            }
            info!("Received shutdown signal, stopping shards");
            shard_manager.shutdown_all().await;
        });

        client.start().await?;
        Ok(())
    }
}
