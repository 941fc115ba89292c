//! Splitting a trailing UTC offset off an ISO-like date string.
//!
//! Parsing here is purely textual. Whether the naive part is a real calendar
//! date is decided later, when a target instant is resolved from the pieces.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

fn offset_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?:[Zz]|[+-][0-9]{2}(?::?[0-9]{2})?)$").expect("offset pattern is valid")
    })
}

/// A raw date string separated into its naive part and its offset token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OffsetSplit<'a> {
    pub naive_date_part: &'a str,
    /// `Z`, `z`, `±HH`, `±HHMM` or `±HH:MM`; empty means viewer-local time.
    pub offset_part: &'a str,
}

impl<'a> OffsetSplit<'a> {
    pub fn has_offset(&self) -> bool {
        !self.offset_part.is_empty()
    }

    pub fn is_utc(&self) -> bool {
        self.offset_part.eq_ignore_ascii_case("z")
    }

    pub fn label(&self) -> OffsetLabel {
        OffsetLabel::from_offset_part(self.offset_part)
    }
}

/// Split `raw` into naive date and trailing offset.
///
/// A numeric token only counts as an offset when the naive part carries a
/// time component, so the day of a bare `2025-06-01` is not read as `-01`.
pub fn split_offset(raw: &str) -> OffsetSplit<'_> {
    let no_offset = OffsetSplit {
        naive_date_part: raw,
        offset_part: "",
    };

    let Some(found) = offset_pattern().find(raw) else {
        return no_offset;
    };

    let naive_date_part = &raw[..found.start()];
    let offset_part = found.as_str();
    let numeric = offset_part.starts_with(['+', '-']);
    if numeric && !has_time_component(naive_date_part) {
        return no_offset;
    }

    OffsetSplit {
        naive_date_part,
        offset_part,
    }
}

fn has_time_component(naive: &str) -> bool {
    naive.contains(['T', 't', ' '])
}

/// Human-facing name for the timezone of a target date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OffsetLabel {
    Utc,
    Fixed(String),
    ViewerLocal,
}

impl OffsetLabel {
    pub fn from_offset_part(offset_part: &str) -> Self {
        if offset_part.is_empty() {
            Self::ViewerLocal
        } else if offset_part.eq_ignore_ascii_case("z") {
            Self::Utc
        } else {
            Self::Fixed(offset_part.to_string())
        }
    }
}

impl fmt::Display for OffsetLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Utc => f.write_str("UTC"),
            Self::Fixed(offset) => write!(f, "UTC{offset}"),
            Self::ViewerLocal => f.write_str("Viewer's Local Time"),
        }
    }
}
