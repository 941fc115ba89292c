mod calculator;
mod formatter;
mod refresh;
mod surface;
mod target;

pub use calculator::calculate_time_remaining;
pub use formatter::format_time_remaining;
pub use refresh::{
    Clock, CountdownHandle, LoopState, RefreshConfig, RefreshLoop, StopReason, SystemClock,
    DEFAULT_TICK_INTERVAL,
};
pub use surface::{DisplaySurface, JsonLinesSurface, SurfaceUnavailable, TerminalSurface};
pub use target::{
    parse_fixed_offset, resolve_split, resolve_target, resolve_target_or_sentinel, sentinel_target, TargetError,
};
