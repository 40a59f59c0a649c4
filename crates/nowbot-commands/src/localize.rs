//! Localized command names and descriptions.

use crate::framework::{Data, Error};
use nowbot_i18n::{keys, Messages, Translations};

/// Message key holding the name and description of a command or option.
#[must_use]
pub fn message_key(name: &str) -> &str {
    match name {
        "timezone" => keys::TIMEZONE_OPTION,
        other => other,
    }
}

/// Fills the name and description localizations of `command` and its
/// parameters from every translation. Descriptions in the default language
/// replace the ones from the doc comments.
pub fn localize_command(command: &mut poise::Command<Data, Error>, translations: &Translations) {
    let key = message_key(&command.name).to_string();
    if let Some(description) = translations.default_messages().description(&key) {
        command.description = Some(description);
    }

    for messages in translations.iter() {
        let locale = messages.discord_locale().to_string();
        if let Some((name, description)) = metadata(messages, &key) {
            command.name_localizations.insert(locale.clone(), name);
            command.description_localizations.insert(locale.clone(), description);
        }

        for parameter in &mut command.parameters {
            let parameter_key = message_key(&parameter.name);
            if let Some((name, description)) = metadata(messages, parameter_key) {
                parameter.name_localizations.insert(locale.clone(), name);
                parameter
                    .description_localizations
                    .insert(locale.clone(), description);
            }
        }
    }

    for parameter in &mut command.parameters {
        let parameter_key = message_key(&parameter.name).to_string();
        if let Some(description) = translations.default_messages().description(&parameter_key) {
            parameter.description = Some(description);
        }
    }
}

fn metadata(messages: &Messages, key: &str) -> Option<(String, String)> {
    let name = messages.try_get(key, None)?;
    let description = messages.description(key)?;
    Some((name, description))
}
