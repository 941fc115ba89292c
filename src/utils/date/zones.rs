//! IANA timezone catalogue used when picking an offset for a new countdown.

use chrono::{DateTime, Offset, Utc};
use chrono_tz::{Tz, TZ_VARIANTS};

pub const VIEWER_LOCAL_CHOICE: &str = "Viewer's local timezone";

/// One selectable entry in the timezone list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimezoneChoice {
    pub label: String,
    /// `±HH:MM`, or `None` for the viewer-local entry.
    pub offset: Option<String>,
    pub zone: Option<String>,
}

impl TimezoneChoice {
    fn viewer_local() -> Self {
        Self {
            label: VIEWER_LOCAL_CHOICE.to_string(),
            offset: None,
            zone: None,
        }
    }

    fn for_zone(tz: Tz, at: DateTime<Utc>) -> Self {
        let offset = format_offset_as_hours(zone_offset_seconds(tz, at));
        Self {
            label: format!("UTC{} {}", offset, tz.name()),
            offset: Some(offset),
            zone: Some(tz.name().to_string()),
        }
    }
}

/// Format an offset in seconds as `+HH:MM` / `-HH:MM`. Sub-minute remainders
/// are dropped.
pub fn format_offset_as_hours(offset_seconds: i32) -> String {
    let sign = if offset_seconds >= 0 { '+' } else { '-' };
    let total_minutes = offset_seconds.unsigned_abs() / 60;
    format!("{}{:02}:{:02}", sign, total_minutes / 60, total_minutes % 60)
}

/// UTC offset of `tz` at the given instant, in seconds east of UTC.
pub fn zone_offset_seconds(tz: Tz, at: DateTime<Utc>) -> i32 {
    at.with_timezone(&tz).offset().fix().local_minus_utc()
}

/// Build the timezone list: the viewer-local entry first, then the viewer's
/// own zone (when known), then every IANA zone. Zone entries are kept when
/// their label contains `filter`, compared case-insensitively.
pub fn timezone_choices(filter: &str, at: DateTime<Utc>, viewer_zone: Option<Tz>) -> Vec<TimezoneChoice> {
    let filter = filter.to_lowercase();
    let zones = viewer_zone.into_iter().chain(TZ_VARIANTS.iter().copied());

    std::iter::once(TimezoneChoice::viewer_local())
        .chain(
            zones
                .map(|tz| TimezoneChoice::for_zone(tz, at))
                .filter(|choice| choice.label.to_lowercase().contains(&filter)),
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn winter_instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_format_offset_as_hours() {
        assert_eq!(format_offset_as_hours(0), "+00:00");
        assert_eq!(format_offset_as_hours(19_800), "+05:30");
        assert_eq!(format_offset_as_hours(-18_000), "-05:00");
        assert_eq!(format_offset_as_hours(20_700), "+05:45");
    }

    #[test]
    fn test_zone_offset_follows_daylight_saving() {
        let summer = Utc.with_ymd_and_hms(2025, 7, 15, 12, 0, 0).unwrap();
        assert_eq!(zone_offset_seconds(chrono_tz::America::New_York, winter_instant()), -5 * 3600);
        assert_eq!(zone_offset_seconds(chrono_tz::America::New_York, summer), -4 * 3600);
    }

    #[test]
    fn test_choices_start_with_viewer_local() {
        let choices = timezone_choices("", winter_instant(), Some(chrono_tz::Europe::Paris));
        assert_eq!(choices[0].label, VIEWER_LOCAL_CHOICE);
        assert_eq!(choices[0].offset, None);
        assert_eq!(choices[1].label, "UTC+01:00 Europe/Paris");
        assert_eq!(choices.len(), TZ_VARIANTS.len() + 2);
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let choices = timezone_choices("KOLKATA", winter_instant(), None);
        assert_eq!(choices.len(), 2);
        assert_eq!(choices[1].label, "UTC+05:30 Asia/Kolkata");
        assert_eq!(choices[1].offset.as_deref(), Some("+05:30"));
    }

    #[test]
    fn test_filter_matches_offset_text() {
        let choices = timezone_choices("utc+05:45", winter_instant(), None);
        assert!(choices.iter().skip(1).all(|c| c.offset.as_deref() == Some("+05:45")));
        assert!(choices.iter().any(|c| c.zone.as_deref() == Some("Asia/Kathmandu")));
    }
}
