use crate::models::display::DisplayFragments;
use crate::models::time_remaining::TimeRemaining;

/// Render a [`TimeRemaining`] into display fragments.
///
/// With `include_days` and at least one whole day left, days get their own
/// fragment and the clock shows the sub-day remainder. Otherwise days fold
/// into an unbounded hour count (`51:00:00` for 2 days 3 hours).
pub fn format_time_remaining(remaining: &TimeRemaining, include_days: bool) -> DisplayFragments {
    if remaining.total_seconds == 0 {
        return DisplayFragments::elapsed();
    }

    if include_days && remaining.days > 0 {
        DisplayFragments {
            days_text: format!("{} days", remaining.days),
            time_text: clock_text(u64::from(remaining.hours), remaining.minutes, remaining.seconds),
        }
    } else {
        DisplayFragments {
            days_text: String::new(),
            time_text: clock_text(remaining.total_hours(), remaining.minutes, remaining.seconds),
        }
    }
}

fn clock_text(hours: u64, minutes: u32, seconds: u32) -> String {
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}
