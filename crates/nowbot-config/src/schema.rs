//! Configuration schema definitions using serde.

use nowbot_common::{BotToken, LoggingConfig, Result};
use nowbot_zones::TimeStyle;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure for nowbot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Discord configuration.
    pub discord: DiscordConfig,
    /// Time formatting configuration.
    pub time: TimeConfig,
    /// Language code for user-visible messages.
    pub language: String,
    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Discord bot configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscordConfig {
    /// Discord bot token.
    pub token: BotToken,
    /// File the token is read from when `token` is empty.
    pub token_file: Option<PathBuf>,
}

/// Time formatting configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeConfig {
    /// IANA zone used when a command is invoked without one.
    pub default_timezone: String,
    /// strftime pattern of `/now`.
    pub short_format: String,
    /// strftime pattern of `/longnow`.
    pub long_format: String,
}

impl TimeConfig {
    /// Pattern configured for `style`.
    #[must_use]
    pub fn pattern(&self, style: TimeStyle) -> &str {
        match style {
            TimeStyle::Short => &self.short_format,
            TimeStyle::Long => &self.long_format,
        }
    }
}

impl Config {
    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        crate::ConfigValidator::validate(self)
    }
}
