//! Application-wide error types using thiserror.

use nowbot_common::NowBotError;
use poise::serenity_prelude as serenity;

/// Main application error type.
#[derive(thiserror::Error, Debug)]
pub enum BotError {
    /// Configuration, logging or startup data error.
    #[error("Configuration error: {0}")]
    Config(#[from] NowBotError),

    /// Discord/Serenity error.
    #[error("Discord error: {0}")]
    Discord(#[from] serenity::Error),
}

/// Result type for the bot application.
pub type BotResult<T> = Result<T, BotError>;
