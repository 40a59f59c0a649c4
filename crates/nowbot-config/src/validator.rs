//! Runtime validation of a loaded configuration.

use crate::schema::Config;
use nowbot_common::{NowBotError, Result};
use nowbot_zones::{parse_zone, validate_pattern};

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validates a configuration, reporting the first problem found.
    pub fn validate(config: &Config) -> Result<()> {
        if config.discord.token.is_empty() {
            return Err(NowBotError::config(
                "Discord token cannot be empty; set discord.token, DISCORD_TOKEN or a token file",
            ));
        }

        parse_zone(&config.time.default_timezone).map_err(|_| {
            NowBotError::validation(
                "time.default_timezone",
                format!("'{}' is not an IANA timezone", config.time.default_timezone),
            )
        })?;

        for (field, pattern) in [
            ("time.short_format", &config.time.short_format),
            ("time.long_format", &config.time.long_format),
        ] {
            validate_pattern(pattern).map_err(|e| NowBotError::validation(field, e.to_string()))?;
        }

        if config.language.trim().is_empty() {
            return Err(NowBotError::validation("language", "language cannot be empty"));
        }

        config.logging.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nowbot_common::BotToken;

    fn valid_config() -> Config {
        let mut config = Config::default();
        config.discord.token = BotToken::new("test_token");
        config
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(ConfigValidator::validate(&valid_config()).is_ok());
    }

    #[test]
    fn test_bad_default_timezone() {
        let mut config = valid_config();
        config.time.default_timezone = "Europe/Atlantis".to_string();
        let err = ConfigValidator::validate(&config).unwrap_err();
        assert!(matches!(
            err,
            NowBotError::Validation { field: Some(ref f), .. } if f == "time.default_timezone"
        ));
    }

    #[test]
    fn test_bad_pattern_names_its_field() {
        let mut config = valid_config();
        config.time.long_format = "%Q".to_string();
        let err = ConfigValidator::validate(&config).unwrap_err();
        assert!(matches!(
            err,
            NowBotError::Validation { field: Some(ref f), .. } if f == "time.long_format"
        ));
    }

    #[test]
    fn test_empty_language() {
        let mut config = valid_config();
        config.language = "  ".to_string();
        assert!(ConfigValidator::validate(&config).is_err());
    }
}
