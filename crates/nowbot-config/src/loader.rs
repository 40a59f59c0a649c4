//! Configuration loading from YAML, environment variables and token files.

use crate::schema::Config;
use nowbot_common::{BotToken, NowBotError, Result};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Environment variable naming the configuration file.
pub const CONFIG_PATH_ENV: &str = "NOWBOT_CONFIG";

/// Configuration file used when [`CONFIG_PATH_ENV`] is unset.
pub const DEFAULT_CONFIG_PATH: &str = "config.yml";

/// Environment variable holding the Discord bot token.
pub const TOKEN_ENV: &str = "DISCORD_TOKEN";

/// Environment variable overriding [`Config::language`].
pub const LANGUAGE_ENV: &str = "NOWBOT_LANGUAGE";

/// Environment variable overriding the log level.
pub const LOG_LEVEL_ENV: &str = "NOWBOT_LOG_LEVEL";

/// Environment variable overriding the default timezone.
pub const DEFAULT_TIMEZONE_ENV: &str = "NOWBOT_DEFAULT_TIMEZONE";

/// Configuration loader.
pub struct ConfigLoader {
    path: PathBuf,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates a loader for the file named by `NOWBOT_CONFIG`, or
    /// `config.yml` when unset.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.into()))
    }

    /// Path of the configuration file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads, completes and validates the configuration using the process
    /// environment.
    pub async fn load(&self) -> Result<Config> {
        self.load_with_env(|key| std::env::var(key).ok()).await
    }

    /// Loads, completes and validates the configuration, looking up
    /// environment overrides through `env`.
    pub async fn load_with_env<F>(&self, env: F) -> Result<Config>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = self.read_file().await?;
        apply_env_overrides(&mut config, env);
        resolve_token(&mut config).await?;
        config.validate()?;
        Ok(config)
    }

    /// Reads the configuration file, falling back to defaults when it does
    /// not exist.
    pub async fn read_file(&self) -> Result<Config> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => {
                info!(path = %self.path.display(), "Loading configuration file");
                parse_config(&contents)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(
                    path = %self.path.display(),
                    "Configuration file not found, using defaults"
                );
                Ok(Config::default())
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// Parses a YAML configuration document.
pub fn parse_config(contents: &str) -> Result<Config> {
    if contents.trim().is_empty() {
        return Ok(Config::default());
    }
    Ok(serde_yaml::from_str(contents)?)
}

/// Applies environment overrides on top of `config`.
pub fn apply_env_overrides<F>(config: &mut Config, env: F)
where
    F: Fn(&str) -> Option<String>,
{
    let non_empty = |key: &str| env(key).filter(|value| !value.trim().is_empty());

    if let Some(token) = non_empty(TOKEN_ENV) {
        debug!("Using Discord token from {}", TOKEN_ENV);
        config.discord.token = BotToken::new(token);
    }
    if let Some(language) = non_empty(LANGUAGE_ENV) {
        config.language = language.trim().to_string();
    }
    if let Some(level) = non_empty(LOG_LEVEL_ENV) {
        config.logging.level = level.trim().to_string();
    }
    if let Some(zone) = non_empty(DEFAULT_TIMEZONE_ENV) {
        config.time.default_timezone = zone.trim().to_string();
    }
}

/// Fills in the token from the token file when no token is set yet.
pub async fn resolve_token(config: &mut Config) -> Result<()> {
    if !config.discord.token.is_empty() {
        return Ok(());
    }
    let Some(path) = config.discord.token_file.clone() else {
        return Ok(());
    };

    match tokio::fs::read_to_string(&path).await {
        Ok(contents) => {
            debug!(path = %path.display(), "Read Discord token from file");
            config.discord.token = BotToken::new(contents);
            Ok(())
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Err(NowBotError::config(format!(
            "no Discord token configured and token file '{}' does not exist",
            path.display()
        ))),
        Err(e) => Err(e.into()),
    }
}
