//! Parsing of the free-text start/end strings stored on an event.
//!
//! Event times are display strings entered by users. The lifecycle sweep needs an actual
//! instant, so it accepts the handful of formats people paste in practice and skips
//! anything else.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serenity::all::Timestamp;
use thiserror::Error;

use crate::error::internal::InternalError;

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M", "%Y-%m-%d %H:%M:%S"];

#[derive(Error, Debug, PartialEq, Eq)]
#[error("Unrecognized event time '{0}'")]
pub struct TimeParseError(pub String);

/// Parses an event time string into a UTC instant.
///
/// Accepted forms:
/// - Discord timestamp markup: `<t:1700000000>` or `<t:1700000000:F>`
/// - A bare unix timestamp in seconds: `1700000000`
/// - RFC 3339: `2026-10-17T20:00:00+02:00`
/// - `YYYY-MM-DD HH:MM` (optionally with seconds), interpreted as UTC
///
/// # Returns
/// - `Ok(DateTime<Utc>)` - The parsed instant
/// - `Err(TimeParseError)` - The string matches none of the accepted forms
pub fn parse_event_time(value: &str) -> Result<DateTime<Utc>, TimeParseError> {
    let trimmed = value.trim();
    let err = || TimeParseError(value.to_string());

    if trimmed.is_empty() {
        return Err(err());
    }

    if let Some(inner) = trimmed
        .strip_prefix("<t:")
        .and_then(|rest| rest.strip_suffix('>'))
    {
        let seconds = inner.split(':').next().unwrap_or_default();
        return from_unix(seconds).ok_or_else(err);
    }

    if trimmed.chars().all(|c| c.is_ascii_digit()) {
        return from_unix(trimmed).ok_or_else(err);
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(parsed.with_timezone(&Utc));
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .map(|naive| Utc.from_utc_datetime(&naive))
        .ok_or_else(err)
}

/// Converts an instant to a Discord timestamp.
///
/// # Returns
/// - `Ok(Timestamp)` - The instant in Discord's representation
/// - `Err(InternalError::InvalidDiscordTimestamp)` - The instant is out of Discord's range
pub fn discord_timestamp(instant: DateTime<Utc>) -> Result<Timestamp, InternalError> {
    let seconds = instant.timestamp();
    Timestamp::from_unix_timestamp(seconds).map_err(|e| InternalError::InvalidDiscordTimestamp {
        timestamp: seconds,
        reason: e.to_string(),
    })
}

fn from_unix(seconds: &str) -> Option<DateTime<Utc>> {
    let seconds = seconds.parse::<i64>().ok()?;
    DateTime::from_timestamp(seconds, 0)
}
