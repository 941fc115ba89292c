//! Time left until a countdown target, split into clock components.

use serde::{Deserialize, Serialize};

pub const SECONDS_PER_MINUTE: u64 = 60;
pub const SECONDS_PER_HOUR: u64 = 60 * SECONDS_PER_MINUTE;
pub const SECONDS_PER_DAY: u64 = 24 * SECONDS_PER_HOUR;

/// Non-negative duration until a target instant.
///
/// `hours`, `minutes` and `seconds` always stay within their clock range;
/// `days` is unbounded. An elapsed target is represented by [`TimeRemaining::ZERO`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TimeRemaining {
    pub days: u64,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
    pub total_seconds: u64,
}

impl TimeRemaining {
    pub const ZERO: Self = Self {
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
        total_seconds: 0,
    };

    /// Decompose a whole number of seconds into days/hours/minutes/seconds.
    pub fn from_total_seconds(total_seconds: u64) -> Self {
        Self {
            days: total_seconds / SECONDS_PER_DAY,
            hours: ((total_seconds % SECONDS_PER_DAY) / SECONDS_PER_HOUR) as u32,
            minutes: ((total_seconds % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE) as u32,
            seconds: (total_seconds % SECONDS_PER_MINUTE) as u32,
            total_seconds,
        }
    }

    /// True once the target has been reached (or was already in the past).
    pub fn is_elapsed(&self) -> bool {
        self.total_seconds == 0
    }

    /// Whole days folded into the hour count, e.g. 2 days 3 hours -> 51.
    /// Saturates for hand-built values too large to fold.
    pub fn total_hours(&self) -> u64 {
        self.days.saturating_mul(24).saturating_add(u64::from(self.hours))
    }
}
