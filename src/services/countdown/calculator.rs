use chrono::{DateTime, Utc};

use crate::models::time_remaining::TimeRemaining;

/// Time left from `now` until `target`.
///
/// Targets in the past collapse to [`TimeRemaining::ZERO`]. Partial seconds
/// are discarded, so 1.9s left reads as 1 second.
pub fn calculate_time_remaining(target: DateTime<Utc>, now: DateTime<Utc>) -> TimeRemaining {
    let diff = target.signed_duration_since(now);
    if diff < chrono::Duration::zero() {
        return TimeRemaining::ZERO;
    }

    // num_seconds truncates toward zero, which is floor for a positive diff
    TimeRemaining::from_total_seconds(diff.num_seconds() as u64)
}
