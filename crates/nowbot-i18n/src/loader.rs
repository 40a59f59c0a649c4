//! Embedded Fluent resources and language negotiation.

use fluent_bundle::concurrent::FluentBundle;
use fluent_bundle::FluentResource;
use nowbot_common::{NowBotError, Result};
use unic_langid::LanguageIdentifier;

/// A translation shipped with the bot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleResource {
    /// BCP 47 language tag of the translation.
    pub language: &'static str,
    /// Locale code Discord uses for this language.
    pub discord_locale: &'static str,
    /// Fluent source.
    pub source: &'static str,
}

/// Language used when nothing else matches.
pub const FALLBACK_LANGUAGE: &str = "en-US";

/// Every translation shipped with the bot. The first entry is the fallback.
pub const LOCALES: &[LocaleResource] = &[
    LocaleResource {
        language: "en-US",
        discord_locale: "en-US",
        source: include_str!("../locales/en-US/nowbot.ftl"),
    },
    LocaleResource {
        language: "fi-FI",
        discord_locale: "fi",
        source: include_str!("../locales/fi-FI/nowbot.ftl"),
    },
];

/// Parses a language tag.
pub fn parse_language(tag: &str) -> Result<LanguageIdentifier> {
    tag.trim()
        .parse::<LanguageIdentifier>()
        .map_err(|e| NowBotError::localization(e.to_string(), Some(tag)))
}

/// Finds the shipped translation best matching `requested`.
///
/// Matches the full tag first, then the Discord locale code, then the
/// primary language alone ("fi" or "fi-SE" both select `fi-FI`).
#[must_use]
pub fn negotiate(requested: &str) -> Option<&'static LocaleResource> {
    let requested = requested.trim();

    let exact = LOCALES.iter().find(|locale| {
        locale.language.eq_ignore_ascii_case(requested)
            || locale.discord_locale.eq_ignore_ascii_case(requested)
    });
    if exact.is_some() {
        return exact;
    }

    let wanted = parse_language(requested).ok()?;
    LOCALES.iter().find(|locale| {
        parse_language(locale.language)
            .map(|lang| lang.language == wanted.language)
            .unwrap_or(false)
    })
}

/// The fallback translation.
#[must_use]
pub fn fallback_locale() -> &'static LocaleResource {
    &LOCALES[0]
}

/// Builds a Fluent bundle for `locale`.
pub fn load_bundle(locale: &LocaleResource) -> Result<FluentBundle<FluentResource>> {
    let language = parse_language(locale.language)?;

    let resource = FluentResource::try_new(locale.source.to_string()).map_err(|(_, errors)| {
        NowBotError::localization(
            format!("{} syntax error(s) in translation: {errors:?}", errors.len()),
            Some(locale.language),
        )
    })?;

    let mut bundle = FluentBundle::new_concurrent(vec![language]);
    bundle.set_use_isolating(false);
    bundle.add_resource(resource).map_err(|errors| {
        NowBotError::localization(
            format!("conflicting messages in translation: {errors:?}"),
            Some(locale.language),
        )
    })?;

    Ok(bundle)
}
