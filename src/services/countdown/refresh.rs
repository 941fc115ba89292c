//! The once-per-second tick that keeps a countdown display current.
//!
//! Each loop owns its target, settings and surface. Ticks render and then
//! sleep, so one tick always finishes before the next is scheduled.

use std::sync::Arc;
use std::time::Duration as StdDuration;

use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tokio::task::{JoinError, JoinHandle};

use super::calculator::calculate_time_remaining;
use super::formatter::format_time_remaining;
use super::surface::DisplaySurface;
use crate::models::display::DisplayFragments;
use crate::models::time_remaining::TimeRemaining;

pub const DEFAULT_TICK_INTERVAL: StdDuration = StdDuration::from_secs(1);

/// Source of the current time for a refresh loop.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshConfig {
    pub tick_interval: StdDuration,
    pub include_days: bool,
    /// Stop once the countdown reaches zero instead of re-rendering
    /// `00:00:00` every tick.
    pub stop_when_elapsed: bool,
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            tick_interval: DEFAULT_TICK_INTERVAL,
            include_days: true,
            stop_when_elapsed: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// `CountdownHandle::stop` was called or the handle was dropped.
    Cancelled,
    /// The display surface refused a render.
    SurfaceUnavailable,
    /// The target was reached and `stop_when_elapsed` is set.
    Elapsed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopped(StopReason),
}

#[derive(Debug, Clone)]
pub struct RefreshLoop {
    target: DateTime<Utc>,
    config: RefreshConfig,
}

impl RefreshLoop {
    pub fn new(target: DateTime<Utc>, config: RefreshConfig) -> Self {
        Self { target, config }
    }

    pub fn target(&self) -> DateTime<Utc> {
        self.target
    }

    pub fn config(&self) -> &RefreshConfig {
        &self.config
    }

    /// Compute what one tick at `now` would display.
    pub fn tick_at(&self, now: DateTime<Utc>) -> (TimeRemaining, DisplayFragments) {
        let remaining = calculate_time_remaining(self.target, now);
        let fragments = format_time_remaining(&remaining, self.config.include_days);
        (remaining, fragments)
    }

    /// Run ticks until cancelled through `stop`, the surface goes away, or
    /// (with `stop_when_elapsed`) the target is reached. A dropped sender
    /// counts as cancellation.
    pub async fn run<S, C>(&self, surface: &mut S, clock: &C, mut stop: watch::Receiver<bool>) -> StopReason
    where
        S: DisplaySurface + ?Sized,
        C: Clock + ?Sized,
    {
        log::info!("Countdown started for {}", self.target);

        loop {
            if *stop.borrow_and_update() {
                return self.stopped(StopReason::Cancelled);
            }

            let (remaining, fragments) = self.tick_at(clock.now());
            log::debug!("tick: {} ({}s left)", fragments, remaining.total_seconds);

            if let Err(err) = surface.render(&fragments) {
                log::warn!("Stopping countdown: {}", err);
                return self.stopped(StopReason::SurfaceUnavailable);
            }

            if self.config.stop_when_elapsed && remaining.is_elapsed() {
                return self.stopped(StopReason::Elapsed);
            }

            tokio::select! {
                biased;
                changed = stop.changed() => {
                    if changed.is_err() || *stop.borrow() {
                        return self.stopped(StopReason::Cancelled);
                    }
                }
                _ = tokio::time::sleep(self.config.tick_interval) => {}
            }
        }
    }

    /// Start the loop on the tokio runtime and return a handle to control it.
    pub fn spawn<S, C>(self, mut surface: S, clock: C) -> CountdownHandle
    where
        S: DisplaySurface + 'static,
        C: Clock + 'static,
    {
        let (stop_tx, stop_rx) = watch::channel(false);
        let (state_tx, state_rx) = watch::channel(LoopState::Running);

        let task = tokio::spawn(async move {
            let reason = self.run(&mut surface, &clock, stop_rx).await;
            state_tx.send_replace(LoopState::Stopped(reason));
            reason
        });

        CountdownHandle {
            stop_tx,
            state_rx,
            task,
        }
    }

    fn stopped(&self, reason: StopReason) -> StopReason {
        log::info!("Countdown for {} stopped: {:?}", self.target, reason);
        reason
    }
}

/// Control handle for a spawned refresh loop. Dropping it cancels the loop.
#[derive(Debug)]
pub struct CountdownHandle {
    stop_tx: watch::Sender<bool>,
    state_rx: watch::Receiver<LoopState>,
    task: JoinHandle<StopReason>,
}

impl CountdownHandle {
    /// Ask the loop to stop. Takes effect before the next tick, even mid-sleep.
    pub fn stop(&self) {
        self.stop_tx.send_replace(true);
    }

    pub fn state(&self) -> LoopState {
        *self.state_rx.borrow()
    }

    pub fn is_running(&self) -> bool {
        self.state() == LoopState::Running
    }

    /// Wait for the loop to finish and report why it stopped.
    pub async fn join(self) -> Result<StopReason, JoinError> {
        let Self { stop_tx, task, .. } = self;
        let reason = task.await;
        drop(stop_tx);
        reason
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::countdown::surface::{MockDisplaySurface, SurfaceUnavailable};
    use chrono::TimeZone;

    struct FixedClock(DateTime<Utc>);

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_tick_at_formats_remaining_time() {
        let refresh = RefreshLoop::new(now() + chrono::Duration::seconds(90_061), RefreshConfig::default());
        let (remaining, fragments) = refresh.tick_at(now());
        assert_eq!(remaining.total_seconds, 90_061);
        assert_eq!(fragments.days_text, "1 days");
        assert_eq!(fragments.time_text, "01:01:01");
    }

    #[tokio::test]
    async fn test_stops_when_surface_fails() {
        let mut surface = MockDisplaySurface::new();
        surface
            .expect_render()
            .times(1)
            .returning(|_| Err(SurfaceUnavailable::new("element removed")));

        let (_stop_tx, stop_rx) = watch::channel(false);
        let refresh = RefreshLoop::new(now(), RefreshConfig::default());
        let reason = refresh.run(&mut surface, &FixedClock(now()), stop_rx).await;
        assert_eq!(reason, StopReason::SurfaceUnavailable);
    }

    #[tokio::test]
    async fn test_elapsed_stop_is_opt_in() {
        let mut surface = MockDisplaySurface::new();
        surface
            .expect_render()
            .withf(|fragments| fragments.time_text == "00:00:00")
            .times(1)
            .returning(|_| Ok(()));

        let config = RefreshConfig {
            stop_when_elapsed: true,
            ..RefreshConfig::default()
        };
        let (_stop_tx, stop_rx) = watch::channel(false);
        let refresh = RefreshLoop::new(now(), config);
        let reason = refresh.run(&mut surface, &FixedClock(now()), stop_rx).await;
        assert_eq!(reason, StopReason::Elapsed);
    }

    #[tokio::test]
    async fn test_stop_before_first_tick_renders_nothing() {
        let mut surface = MockDisplaySurface::new();
        surface.expect_render().never();

        let (stop_tx, stop_rx) = watch::channel(false);
        stop_tx.send_replace(true);
        let refresh = RefreshLoop::new(now(), RefreshConfig::default());
        let reason = refresh.run(&mut surface, &FixedClock(now()), stop_rx).await;
        assert_eq!(reason, StopReason::Cancelled);
    }
}
