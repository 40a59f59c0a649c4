//! Integration tests for nowbot-commands crate.
//!
//! These tests drive the command logic without a Discord connection.

use nowbot_commands::{commands, suggestion_choices, time_reply, Data, TimeReply};
use nowbot_common::test_utils::{init_test_logging, mock_timestamp};
use nowbot_common::BotToken;
use nowbot_config::Config;
use nowbot_i18n::Translations;
use nowbot_zones::{TimeStyle, MAX_SUGGESTIONS};
use std::sync::Arc;

fn test_data(configure: impl FnOnce(&mut Config)) -> Data {
    init_test_logging();

    let mut config = Config::default();
    config.discord.token = BotToken::new("test_token");
    configure(&mut config);
    Data::new(Arc::new(config)).unwrap()
}

#[test]
fn test_now_uses_default_timezone() {
    let data = test_data(|_| {});
    let reply = time_reply(
        &data,
        None,
        TimeStyle::Short,
        mock_timestamp(2024, 1, 15, 12, 0, 0),
        None,
    )
    .unwrap();
    assert_eq!(reply, TimeReply::Time("14:00 (EET)".to_string()));
}

#[test]
fn test_longnow_with_zone_identifier() {
    let data = test_data(|_| {});
    let reply = time_reply(
        &data,
        Some("America/New_York"),
        TimeStyle::Long,
        mock_timestamp(2024, 1, 15, 12, 0, 0),
        Some("en-US"),
    )
    .unwrap();
    assert_eq!(
        reply,
        TimeReply::Time("Monday 15 January 2024 07:00:00 (EST)".to_string())
    );
}

#[test]
fn test_label_input_is_accepted() {
    let data = test_data(|_| {});
    let reply = time_reply(
        &data,
        Some("tokyo"),
        TimeStyle::Short,
        mock_timestamp(2024, 7, 1, 12, 0, 0),
        None,
    )
    .unwrap();
    assert_eq!(reply, TimeReply::Time("21:00 (JST)".to_string()));
}

#[test]
fn test_configured_patterns_are_used() {
    let data = test_data(|config| {
        config.time.default_timezone = "UTC".to_string();
        config.time.short_format = "%H.%M".to_string();
    });
    let reply = time_reply(
        &data,
        None,
        TimeStyle::Short,
        mock_timestamp(2024, 1, 15, 8, 5, 0),
        None,
    )
    .unwrap();
    assert_eq!(reply, TimeReply::Time("08.05".to_string()));
}

#[test]
fn test_unknown_timezone_is_rejected_in_callers_language() {
    let data = test_data(|_| {});
    let instant = mock_timestamp(2024, 1, 15, 12, 0, 0);

    let english = time_reply(&data, Some("Mars/Olympus"), TimeStyle::Short, instant, None).unwrap();
    assert_eq!(
        english,
        TimeReply::InvalidTimezone(
            "Mars/Olympus is not a valid timezone. Please pick one from the list.".to_string()
        )
    );

    let finnish =
        time_reply(&data, Some("Mars/Olympus"), TimeStyle::Long, instant, Some("fi")).unwrap();
    assert_eq!(
        finnish,
        TimeReply::InvalidTimezone(
            "Mars/Olympus ei ole kelvollinen aikavyöhyke. Valitse jokin listasta.".to_string()
        )
    );
}

#[test]
fn test_blank_timezone_is_rejected_not_failed() {
    let data = test_data(|_| {});
    let reply = time_reply(
        &data,
        Some("   "),
        TimeStyle::Short,
        mock_timestamp(2024, 1, 15, 12, 0, 0),
        None,
    );
    assert!(matches!(reply, Ok(TimeReply::InvalidTimezone(_))));
}

#[test]
fn test_rejected_input_is_sanitized() {
    let data = test_data(|_| {});
    let reply = time_reply(
        &data,
        Some("@everyone"),
        TimeStyle::Short,
        mock_timestamp(2024, 1, 15, 12, 0, 0),
        None,
    )
    .unwrap();

    let TimeReply::InvalidTimezone(text) = reply else {
        panic!("expected a rejection");
    };
    assert!(text.starts_with("@\u{200B}everyone "));
}

#[test]
fn test_autocomplete_choices() {
    let data = test_data(|_| {});

    let choices = suggestion_choices(&data.catalog, "Helsinki");
    assert_eq!(choices[0].name, "Helsinki");
    assert_eq!(choices[0].value, "Europe/Helsinki");

    let everything = suggestion_choices(&data.catalog, "");
    assert_eq!(everything.len(), MAX_SUGGESTIONS);
    for choice in &everything {
        assert!(choice.name.chars().count() <= 100);
        assert!(data.catalog.contains_zone(choice.value));
    }

    assert!(suggestion_choices(&data.catalog, "qqqqqqqqqqqq").is_empty());
}

#[test]
fn test_commands_are_localized() {
    let translations = Translations::load("en-US").unwrap();
    let commands = commands(&translations);

    let names: Vec<&str> = commands.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["now", "longnow"]);

    let now = &commands[0];
    assert_eq!(now.description.as_deref(), Some("Shows the current time"));
    assert_eq!(now.name_localizations.get("fi").map(String::as_str), Some("nyt"));
    assert_eq!(
        now.description_localizations.get("fi").map(String::as_str),
        Some("Näyttää kellonajan")
    );

    let timezone = &now.parameters[0];
    assert_eq!(timezone.name, "timezone");
    assert_eq!(
        timezone.name_localizations.get("fi").map(String::as_str),
        Some("aikavyöhyke")
    );
    assert_eq!(
        timezone.description.as_deref(),
        Some("Timezone to show the time in")
    );
}

#[test]
fn test_default_language_sets_descriptions() {
    let translations = Translations::load("fi-FI").unwrap();
    let commands = commands(&translations);

    assert_eq!(
        commands[1].description.as_deref(),
        Some("Näyttää päivämäärän ja kellonajan")
    );
    // names stay the canonical English ones
    assert_eq!(commands[1].name, "longnow");
}
