//! The `/now` and `/longnow` commands and their timezone autocomplete.

use crate::framework::{Context, Data, Error};
use chrono::{DateTime, Utc};
use nowbot_common::{sanitize_for_display, truncate_string, DISCORD_CHOICE_MAX_CHARS};
use nowbot_zones::{format_in_zone, parse_zone, TimeStyle, TimezoneCatalog};
use poise::serenity_prelude as serenity;
use poise::CreateReply;
use tracing::{debug, warn};

/// Shows the current time
#[allow(missing_docs)]
#[poise::command(slash_command)]
pub async fn now(
    ctx: Context<'_>,
    #[description = "Timezone to show the time in"]
    #[autocomplete = "autocomplete_timezone"]
    timezone: Option<String>,
) -> Result<(), Error> {
    respond(ctx, timezone.as_deref(), TimeStyle::Short).await
}

/// Shows the current date and time
#[allow(missing_docs)]
#[poise::command(slash_command)]
pub async fn longnow(
    ctx: Context<'_>,
    #[description = "Timezone to show the time in"]
    #[autocomplete = "autocomplete_timezone"]
    timezone: Option<String>,
) -> Result<(), Error> {
    respond(ctx, timezone.as_deref(), TimeStyle::Long).await
}

async fn respond(ctx: Context<'_>, timezone: Option<&str>, style: TimeStyle) -> Result<(), Error> {
    debug!(command = %ctx.command().name, timezone, "Time requested");

    match time_reply(ctx.data(), timezone, style, Utc::now(), ctx.locale())? {
        TimeReply::Time(text) => {
            ctx.say(text).await?;
        }
        TimeReply::InvalidTimezone(text) => {
            warn!(input = timezone.unwrap_or_default(), "Rejected unknown timezone");
            ctx.send(CreateReply::default().content(text).ephemeral(true))
                .await?;
        }
    }
    Ok(())
}

/// What a time command answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeReply {
    /// The formatted time, shown to everyone in the channel.
    Time(String),
    /// Localized rejection of an unknown timezone, shown only to the caller.
    InvalidTimezone(String),
}

/// Builds the answer to a time command invoked at `instant`.
///
/// `timezone` is resolved against the catalog; without one the configured
/// default zone is used. `locale` is the caller's Discord locale and picks
/// the language of a rejection.
pub fn time_reply(
    data: &Data,
    timezone: Option<&str>,
    style: TimeStyle,
    instant: DateTime<Utc>,
    locale: Option<&str>,
) -> nowbot_common::Result<TimeReply> {
    let zone = match timezone {
        Some(input) => match data.catalog.resolve(input) {
            Ok(zone) => zone,
            Err(e) if e.is_user_error() => {
                let shown = sanitize_for_display(&truncate_string(input, DISCORD_CHOICE_MAX_CHARS));
                let messages = data.translations.for_locale(locale);
                return Ok(TimeReply::InvalidTimezone(messages.invalid_timezone(&shown)));
            }
            Err(e) => return Err(e),
        },
        None => parse_zone(&data.config.time.default_timezone)?,
    };

    let rendered = format_in_zone(instant, zone, data.config.time.pattern(style))?;
    Ok(TimeReply::Time(rendered))
}

/// One autocomplete entry: the label shown and the zone identifier sent
/// back when picked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimezoneChoice {
    /// Label, at most 100 characters.
    pub name: String,
    /// IANA zone identifier.
    pub value: &'static str,
}

impl From<TimezoneChoice> for serenity::AutocompleteChoice {
    fn from(choice: TimezoneChoice) -> Self {
        Self::new(choice.name, choice.value)
    }
}

/// Ranked autocomplete entries for `partial`.
pub fn suggestion_choices(catalog: &TimezoneCatalog, partial: &str) -> Vec<TimezoneChoice> {
    let choices: Vec<TimezoneChoice> = catalog
        .suggest(partial)
        .into_iter()
        .map(|suggestion| TimezoneChoice {
            name: truncate_string(suggestion.label, DISCORD_CHOICE_MAX_CHARS),
            value: suggestion.zone_id(),
        })
        .collect();

    debug!(query = partial, choices = choices.len(), "Timezone autocomplete");
    choices
}

/// Autocomplete callback of the `timezone` option.
pub async fn autocomplete_timezone(
    ctx: Context<'_>,
    partial: &str,
) -> Vec<serenity::AutocompleteChoice> {
    suggestion_choices(&ctx.data().catalog, partial)
        .into_iter()
        .map(Into::into)
        .collect()
}
