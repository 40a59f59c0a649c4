//! Rendering instants in a timezone.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use nowbot_common::{NowBotError, Result};
use std::fmt::Write;

/// Zone used when a command is invoked without one.
pub const DEFAULT_TIMEZONE: &str = "Europe/Helsinki";

/// Pattern of the `now` command.
pub const SHORT_TIME_FORMAT: &str = "%H:%M (%Z)";

/// Pattern of the `longnow` command.
pub const LONG_TIME_FORMAT: &str = "%A %d %B %Y %H:%M:%S (%Z)";

/// How much of the current instant a command shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeStyle {
    /// Hours and minutes.
    Short,
    /// Full date and time.
    Long,
}

impl TimeStyle {
    /// Built-in pattern for this style.
    #[must_use]
    pub const fn default_pattern(self) -> &'static str {
        match self {
            Self::Short => SHORT_TIME_FORMAT,
            Self::Long => LONG_TIME_FORMAT,
        }
    }
}

/// Checks that `pattern` is a non-empty, well-formed strftime pattern.
pub fn validate_pattern(pattern: &str) -> Result<()> {
    if pattern.trim().is_empty() {
        return Err(NowBotError::validation("pattern", "time pattern is empty"));
    }
    if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        return Err(NowBotError::validation(
            "pattern",
            format!("'{pattern}' is not a valid time pattern"),
        ));
    }
    Ok(())
}

/// Parses an IANA zone identifier.
pub fn parse_zone(zone_id: &str) -> Result<Tz> {
    zone_id
        .parse::<Tz>()
        .map_err(|_| NowBotError::UnknownTimezone(zone_id.to_string()))
}

/// Formats `instant` as wall-clock time in `zone`.
pub fn format_in_zone(instant: DateTime<Utc>, zone: Tz, pattern: &str) -> Result<String> {
    validate_pattern(pattern)?;

    let mut rendered = String::new();
    write!(rendered, "{}", instant.with_timezone(&zone).format(pattern)).map_err(|_| {
        NowBotError::validation("pattern", format!("could not render '{pattern}'"))
    })?;
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use chrono_tz::{America, Asia, Europe};

    fn instant(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    #[test]
    fn test_short_format_in_winter_and_summer() {
        let winter = format_in_zone(instant(2024, 1, 15, 12), Europe::Helsinki, SHORT_TIME_FORMAT);
        assert_eq!(winter.unwrap(), "14:00 (EET)");

        let summer = format_in_zone(instant(2024, 7, 1, 12), Europe::Helsinki, SHORT_TIME_FORMAT);
        assert_eq!(summer.unwrap(), "15:00 (EEST)");
    }

    #[test]
    fn test_long_format() {
        let rendered =
            format_in_zone(instant(2024, 1, 15, 12), America::New_York, LONG_TIME_FORMAT).unwrap();
        assert_eq!(rendered, "Monday 15 January 2024 07:00:00 (EST)");
    }

    #[test]
    fn test_half_hour_offset() {
        let rendered =
            format_in_zone(instant(2024, 1, 15, 12), Asia::Kolkata, SHORT_TIME_FORMAT).unwrap();
        assert_eq!(rendered, "17:30 (IST)");
    }

    #[test]
    fn test_invalid_patterns_are_rejected() {
        assert!(validate_pattern("%H:%M").is_ok());
        assert!(validate_pattern("%Q").is_err());
        assert!(validate_pattern("").is_err());
        assert!(format_in_zone(Utc::now(), Tz::UTC, "%").is_err());
    }

    #[test]
    fn test_parse_zone() {
        assert_eq!(parse_zone(DEFAULT_TIMEZONE).unwrap(), Europe::Helsinki);
        assert!(matches!(
            parse_zone("Nowhere/Special"),
            Err(NowBotError::UnknownTimezone(_))
        ));
    }

    #[test]
    fn test_style_patterns() {
        assert_eq!(TimeStyle::Short.default_pattern(), "%H:%M (%Z)");
        assert_eq!(TimeStyle::Long.default_pattern(), "%A %d %B %Y %H:%M:%S (%Z)");
    }
}
