//! Resolving a raw `date` parameter to an absolute target instant.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc};
use thiserror::Error;

use crate::models::page::DEFAULT_DATE;
use crate::utils::date::{split_offset, OffsetSplit};

const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];
const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TargetError {
    #[error("invalid target date: {0:?}")]
    InvalidDate(String),
    #[error("invalid UTC offset: {0:?}")]
    InvalidOffset(String),
    #[error("local time {0} does not exist in the viewer's timezone")]
    NonexistentLocalTime(NaiveDateTime),
}

/// Resolve `raw` to a UTC instant. Strings without an offset are read in
/// `local`; ambiguous local times take the earlier instant.
pub fn resolve_target<Tz: TimeZone>(raw: &str, local: &Tz) -> Result<DateTime<Utc>, TargetError> {
    resolve_split(&split_offset(raw.trim()), local)
}

/// Resolve an already split date, so callers showing the offset label and
/// counting down work from the same split.
pub fn resolve_split<Tz: TimeZone>(split: &OffsetSplit<'_>, local: &Tz) -> Result<DateTime<Utc>, TargetError> {
    let naive = parse_naive(split.naive_date_part)?;

    match parse_fixed_offset(split.offset_part)? {
        Some(offset) => offset
            .from_local_datetime(&naive)
            .single()
            .map(|dt| dt.with_timezone(&Utc))
            .ok_or_else(|| TargetError::InvalidDate(split.naive_date_part.to_string())),
        None => local
            .from_local_datetime(&naive)
            .earliest()
            .map(|dt| dt.with_timezone(&Utc))
            .ok_or(TargetError::NonexistentLocalTime(naive)),
    }
}

/// Like [`resolve_target`], but falls back to the long-past default date so
/// a bad link shows an elapsed countdown instead of failing.
pub fn resolve_target_or_sentinel<Tz: TimeZone>(raw: &str, local: &Tz) -> DateTime<Utc> {
    resolve_target(raw, local).unwrap_or_else(|err| {
        log::warn!("Falling back to {} for target {:?}: {}", DEFAULT_DATE, raw, err);
        sentinel_target()
    })
}

/// The default target, read as UTC.
pub fn sentinel_target() -> DateTime<Utc> {
    NaiveDateTime::parse_from_str(DEFAULT_DATE, "%Y-%m-%dT%H:%M:%S")
        .map(|naive| naive.and_utc())
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

/// Convert an offset token to a [`FixedOffset`]. An empty token means no
/// offset (`Ok(None)`).
pub fn parse_fixed_offset(offset_part: &str) -> Result<Option<FixedOffset>, TargetError> {
    if offset_part.is_empty() {
        return Ok(None);
    }
    if offset_part.eq_ignore_ascii_case("z") {
        return Ok(FixedOffset::east_opt(0));
    }

    let invalid = || TargetError::InvalidOffset(offset_part.to_string());
    let (sign, digits) = if let Some(rest) = offset_part.strip_prefix('+') {
        (1, rest)
    } else if let Some(rest) = offset_part.strip_prefix('-') {
        (-1, rest)
    } else {
        return Err(invalid());
    };

    if !digits.is_ascii() {
        return Err(invalid());
    }

    // HH, HHMM or HH:MM only
    let (hour_text, minute_text) = match (digits.len(), digits.as_bytes().get(2)) {
        (2, _) => (digits, "00"),
        (4, _) => digits.split_at(2),
        (5, Some(b':')) => (&digits[..2], &digits[3..]),
        _ => return Err(invalid()),
    };
    let is_two_digits = |text: &str| text.len() == 2 && text.bytes().all(|b| b.is_ascii_digit());
    if !is_two_digits(hour_text) || !is_two_digits(minute_text) {
        return Err(invalid());
    }
    let hours = hour_text.parse::<i32>().map_err(|_| invalid())?;
    let minutes = minute_text.parse::<i32>().map_err(|_| invalid())?;

    if hours > 23 || minutes > 59 {
        return Err(invalid());
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
        .map(Some)
        .ok_or_else(invalid)
}

fn parse_naive(naive: &str) -> Result<NaiveDateTime, TargetError> {
    DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(naive, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(naive, DATE_FORMAT)
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .ok_or_else(|| TargetError::InvalidDate(naive.to_string()))
}
