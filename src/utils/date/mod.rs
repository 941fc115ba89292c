// Date utility functions

pub mod offset;
pub mod zones;

pub use offset::{split_offset, OffsetLabel, OffsetSplit};
pub use zones::{format_offset_as_hours, timezone_choices, zone_offset_seconds, TimezoneChoice};
