//! Error types shared across the nowbot workspace.

use thiserror::Error;

/// Result type alias for nowbot operations.
pub type Result<T> = std::result::Result<T, NowBotError>;

/// Application-wide error type.
#[derive(Error, Debug)]
pub enum NowBotError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Localization error.
    #[error("Localization error: {message}")]
    Localization {
        /// What went wrong.
        message: String,
        /// Locale the error relates to, if any.
        locale: Option<String>,
    },

    /// The given input does not name a timezone known to the bot.
    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),

    /// Validation error for user input or configuration values.
    #[error("Validation error: {message}")]
    Validation {
        /// What went wrong.
        message: String,
        /// Offending field, if any.
        field: Option<String>,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_yaml::Error),
}

impl NowBotError {
    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates a validation error tied to a field.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// Creates a localization error.
    pub fn localization(message: impl Into<String>, locale: Option<&str>) -> Self {
        Self::Localization {
            message: message.into(),
            locale: locale.map(ToString::to_string),
        }
    }

    /// Whether the error was caused by user input rather than the bot itself.
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        matches!(self, Self::UnknownTimezone(_) | Self::Validation { .. })
    }
}
