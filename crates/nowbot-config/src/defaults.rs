//! Default values for every configuration section.

use crate::schema::*;
use nowbot_common::{BotToken, LoggingConfig};
use nowbot_zones::{DEFAULT_TIMEZONE, LONG_TIME_FORMAT, SHORT_TIME_FORMAT};

/// Token file read when no token is configured.
pub const DEFAULT_TOKEN_FILE: &str = "token.txt";

/// Language used when none is configured.
pub const DEFAULT_LANGUAGE: &str = "en-US";

impl Default for Config {
    fn default() -> Self {
        Self {
            discord: DiscordConfig::default(),
            time: TimeConfig::default(),
            language: DEFAULT_LANGUAGE.to_string(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for DiscordConfig {
    fn default() -> Self {
        Self {
            token: BotToken::default(),
            token_file: Some(DEFAULT_TOKEN_FILE.into()),
        }
    }
}

impl Default for TimeConfig {
    fn default() -> Self {
        Self {
            default_timezone: DEFAULT_TIMEZONE.to_string(),
            short_format: SHORT_TIME_FORMAT.to_string(),
            long_format: LONG_TIME_FORMAT.to_string(),
        }
    }
}
