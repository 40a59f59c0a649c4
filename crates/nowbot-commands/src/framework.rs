//! Poise framework setup and command registration logic.

use crate::localize::localize_command;
use nowbot_config::Config;
use nowbot_i18n::Translations;
use nowbot_zones::TimezoneCatalog;
use poise::CreateReply;
use std::sync::Arc;
use tracing::{debug, error};

/// Application data accessible in all commands.
///
/// Everything in here is built once during setup and only read afterwards.
pub struct Data {
    /// Application configuration.
    pub config: Arc<Config>,
    /// Timezones offered by autocomplete and accepted by the commands.
    pub catalog: Arc<TimezoneCatalog>,
    /// Every shipped translation.
    pub translations: Arc<Translations>,
}

impl Data {
    /// Builds the command data from a validated configuration, using the
    /// bundled timezone database.
    pub fn new(config: Arc<Config>) -> nowbot_common::Result<Self> {
        let translations = Translations::load(&config.language)?;
        Ok(Self {
            config,
            catalog: Arc::new(TimezoneCatalog::bundled()),
            translations: Arc::new(translations),
        })
    }
}

/// Application error type for commands.
pub type Error = Box<dyn std::error::Error + Send + Sync>;

/// Command context type.
pub type Context<'a> = poise::Context<'a, Data, Error>;

/// All commands, with names and descriptions localized.
pub fn commands(translations: &Translations) -> Vec<poise::Command<Data, Error>> {
    let mut commands = vec![crate::time::now(), crate::time::longnow()];
    for command in &mut commands {
        localize_command(command, translations);
    }
    commands
}

/// Creates a new Poise framework.
pub fn create_framework(translations: &Translations) -> poise::FrameworkBuilder<Data, Error> {
    poise::Framework::builder().options(poise::FrameworkOptions {
        commands: commands(translations),
        on_error: |error| Box::pin(on_error(error)),
        ..Default::default()
    })
}

/// Global error handler for the framework.
async fn on_error(error: poise::FrameworkError<'_, Data, Error>) {
    match error {
        poise::FrameworkError::Setup { error, .. } => {
            error!(?error, "Failed to set up the framework");
        }
        poise::FrameworkError::Command { error, ctx, .. } => {
            error!(command = %ctx.command().name, ?error, "Command failed");

            let messages = ctx.data().translations.for_locale(ctx.locale());
            let reply = CreateReply::default()
                .content(messages.command_failed())
                .ephemeral(true);
            if let Err(e) = ctx.send(reply).await {
                error!(error = ?e, "Failed to report command failure");
            }
        }
        error => {
            debug!("Delegating framework error: {}", error);
            if let Err(e) = poise::builtins::on_error(error).await {
                error!(error = ?e, "Error while handling error");
            }
        }
    }
}
