//! Time parsing and duration formatting utilities.
//!
//! All user-facing durations use the "HH:MM" pattern; the live countdown
//! additionally uses "HH:MM:SS". Signed figures (balances) carry their sign
//! exactly once, applied to the whole magnitude, e.g. `-01:30`.
//!
//! Parsing is deliberately forgiving in shape but strict in range: an
//! out-of-range or non-numeric input yields `None`, never an error or a
//! panic, so that malformed times degrade to "absent" in the calculator.

use chrono::{Duration, NaiveTime};

/// Qualitative sign of a computed balance, used by renderers for styling.
///
/// The calculator hands renderers fully-formed values; polarity is the only
/// styling hint it produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    /// Overtime: more time worked than the target requires.
    Positive,
    /// Undertime: the target has not been reached.
    Negative,
    /// The day balances exactly.
    Zero,
}

impl Polarity {
    /// Derives the polarity of a signed duration.
    pub fn of(duration: &Duration) -> Self {
        match duration.num_seconds() {
            s if s > 0 => Polarity::Positive,
            s if s < 0 => Polarity::Negative,
            _ => Polarity::Zero,
        }
    }
}

/// Parses a wall-clock time of day from a "HH:MM" string.
///
/// Accepts single-digit hours ("9:05"). Out-of-range components ("24:00",
/// "12:60") and non-numeric input return `None`.
pub fn parse_time(input: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(input.trim(), "%H:%M").ok()
}

/// Parses a signed duration from a "HH:MM" string with an optional leading
/// sign, e.g. `-01:30` or `+12:45`.
///
/// Unlike [`parse_time`], hours are unbounded since this is a quantity and
/// not a wall-clock time. Malformed input returns `None`.
pub fn parse_signed_duration(input: &str) -> Option<Duration> {
    let trimmed = input.trim();
    let (negative, body) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let (hours, minutes) = body.split_once(':')?;
    let hours: i64 = hours.parse().ok()?;
    let minutes: i64 = minutes.parse().ok()?;
    if minutes > 59 {
        return None;
    }

    let total = hours * 60 + minutes;
    Some(Duration::minutes(if negative { -total } else { total }))
}

/// Formats a duration as an unsigned "HH:MM" string.
///
/// Negative durations are clamped to "00:00"; use [`format_signed_duration`]
/// for balances that may legitimately be negative.
pub fn format_duration(duration: &Duration) -> String {
    let hours = duration.num_hours();
    let mins = duration.num_minutes() % 60;

    format!("{:02}:{:02}", hours.max(0), mins.max(0))
}

/// Formats a signed duration as "+HH:MM" / "-HH:MM" / "00:00".
///
/// The sign is applied once, to the whole magnitude, so minus one and a half
/// hours renders as `-01:30` rather than `-01:-30`.
pub fn format_signed_duration(duration: &Duration) -> String {
    let total_minutes = duration.num_minutes();
    let magnitude = total_minutes.abs();
    let body = format!("{:02}:{:02}", magnitude / 60, magnitude % 60);

    match total_minutes {
        m if m > 0 => format!("+{}", body),
        m if m < 0 => format!("-{}", body),
        _ => body,
    }
}

/// Formats a non-negative duration as "HH:MM:SS" for the countdown display.
pub fn format_clock_duration(duration: &Duration) -> String {
    let total_seconds = duration.num_seconds().max(0);
    let hours = total_seconds / 3600;
    let mins = (total_seconds % 3600) / 60;
    let secs = total_seconds % 60;

    format!("{:02}:{:02}:{:02}", hours, mins, secs)
}

/// Formats an optional time of day, using "--:--" for absent values.
pub fn format_time(time: Option<NaiveTime>) -> String {
    time.map_or_else(|| "--:--".to_string(), |t| t.format("%H:%M").to_string())
}
