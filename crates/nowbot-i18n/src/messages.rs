//! Typed access to translated messages.

use crate::loader::{fallback_locale, load_bundle, negotiate, LocaleResource, LOCALES};
use fluent_bundle::concurrent::FluentBundle;
use fluent_bundle::{FluentArgs, FluentError, FluentResource};
use nowbot_common::Result;
use std::fmt;
use tracing::warn;

/// Message identifiers present in every translation.
pub mod keys {
    /// Name and description of `/now`.
    pub const NOW: &str = "now";
    /// Name and description of `/longnow`.
    pub const LONGNOW: &str = "longnow";
    /// Name and description of the `timezone` option.
    pub const TIMEZONE_OPTION: &str = "timezone-option";
    /// Reply to an unknown timezone; takes `$timezone`.
    pub const INVALID_TIMEZONE: &str = "invalid-timezone";
    /// Reply when a command fails unexpectedly.
    pub const COMMAND_FAILED: &str = "command-failed";

    /// All keys, for completeness checks.
    pub const ALL: &[&str] = &[NOW, LONGNOW, TIMEZONE_OPTION, INVALID_TIMEZONE, COMMAND_FAILED];
}

/// Attribute holding a command or option description.
pub const DESCRIPTION_ATTRIBUTE: &str = "description";

/// Messages of one language.
pub struct Messages {
    locale: &'static LocaleResource,
    bundle: FluentBundle<FluentResource>,
}

impl fmt::Debug for Messages {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Messages")
            .field("language", &self.locale.language)
            .finish_non_exhaustive()
    }
}

impl Messages {
    /// Loads the translation best matching `language`, falling back to
    /// English.
    pub fn load(language: &str) -> Result<Self> {
        Self::for_locale(negotiate_or_fallback(language))
    }

    /// Loads a shipped translation.
    pub fn for_locale(locale: &'static LocaleResource) -> Result<Self> {
        Ok(Self {
            locale,
            bundle: load_bundle(locale)?,
        })
    }

    /// BCP 47 tag of this translation.
    #[must_use]
    pub fn language(&self) -> &'static str {
        self.locale.language
    }

    /// Discord locale code of this translation.
    #[must_use]
    pub fn discord_locale(&self) -> &'static str {
        self.locale.discord_locale
    }

    /// Whether the translation defines `key`.
    #[must_use]
    pub fn has_message(&self, key: &str) -> bool {
        self.bundle.has_message(key)
    }

    /// Formats `key`, or `None` if it is missing.
    #[must_use]
    pub fn try_get(&self, key: &str, args: Option<&FluentArgs<'_>>) -> Option<String> {
        let message = self.bundle.get_message(key)?;
        let mut errors = Vec::new();
        let value = self
            .bundle
            .format_pattern(message.value()?, args, &mut errors);
        self.report(key, &errors);
        Some(value.into_owned())
    }

    /// Formats the `attribute` of `key`, or `None` if it is missing.
    #[must_use]
    pub fn try_get_attribute(&self, key: &str, attribute: &str) -> Option<String> {
        let message = self.bundle.get_message(key)?;
        let attribute = message.get_attribute(attribute)?;
        let mut errors = Vec::new();
        let value = self
            .bundle
            .format_pattern(attribute.value(), None, &mut errors);
        self.report(key, &errors);
        Some(value.into_owned())
    }

    /// Formats `key`; a missing key is logged and the key itself returned.
    #[must_use]
    pub fn get(&self, key: &str) -> String {
        self.try_get(key, None).unwrap_or_else(|| self.missing(key))
    }

    /// Formats `key` with string arguments.
    #[must_use]
    pub fn get_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, *value);
        }
        self.try_get(key, Some(&fluent_args))
            .unwrap_or_else(|| self.missing(key))
    }

    /// Description attached to a command or option message.
    #[must_use]
    pub fn description(&self, key: &str) -> Option<String> {
        self.try_get_attribute(key, DESCRIPTION_ATTRIBUTE)
    }

    /// Reply to a timezone the bot does not know.
    #[must_use]
    pub fn invalid_timezone(&self, input: &str) -> String {
        self.get_with_args(keys::INVALID_TIMEZONE, &[("timezone", input)])
    }

    /// Reply when a command fails unexpectedly.
    #[must_use]
    pub fn command_failed(&self) -> String {
        self.get(keys::COMMAND_FAILED)
    }

    fn report(&self, key: &str, errors: &[FluentError]) {
        if !errors.is_empty() {
            warn!(key, language = self.language(), ?errors, "Message formatted with errors");
        }
    }

    fn missing(&self, key: &str) -> String {
        warn!(key, language = self.language(), "Missing translation");
        key.to_string()
    }
}

/// Every shipped translation, with one chosen as the default.
#[derive(Debug)]
pub struct Translations {
    default_index: usize,
    all: Vec<Messages>,
}

impl Translations {
    /// Loads all translations; `default_language` picks the one used when a
    /// user's locale has no translation.
    pub fn load(default_language: &str) -> Result<Self> {
        let all = LOCALES
            .iter()
            .map(Messages::for_locale)
            .collect::<Result<Vec<_>>>()?;

        let default = negotiate_or_fallback(default_language);
        let default_index = all
            .iter()
            .position(|messages| messages.language() == default.language)
            .unwrap_or(0);

        Ok(Self { default_index, all })
    }

    /// Messages in the configured default language.
    #[must_use]
    pub fn default_messages(&self) -> &Messages {
        &self.all[self.default_index]
    }

    /// Messages for a Discord user locale, or the default language when the
    /// locale is unknown or absent.
    #[must_use]
    pub fn for_locale(&self, locale: Option<&str>) -> &Messages {
        locale
            .and_then(negotiate)
            .and_then(|wanted| {
                self.all
                    .iter()
                    .find(|messages| messages.language() == wanted.language)
            })
            .unwrap_or_else(|| self.default_messages())
    }

    /// All loaded translations.
    pub fn iter(&self) -> impl Iterator<Item = &Messages> {
        self.all.iter()
    }
}

fn negotiate_or_fallback(language: &str) -> &'static LocaleResource {
    negotiate(language).unwrap_or_else(|| {
        let fallback = fallback_locale();
        warn!(
            requested = language,
            fallback = fallback.language,
            "No translation for language, falling back"
        );
        fallback
    })
}
