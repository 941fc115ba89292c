// Test fixtures - reusable test data
// Provides consistent instants, clocks and surfaces across test files

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use chrono::{DateTime, TimeZone, Utc};
use countdown_page::models::display::DisplayFragments;
use countdown_page::services::countdown::{Clock, DisplaySurface, SurfaceUnavailable};

/// Sample instants for testing
pub mod instants {
    use super::*;

    /// Returns June 1, 2025 at noon UTC
    pub fn noon_june_1_2025() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    /// Returns Dec 31, 2025 at 23:59:59 UTC (New Year's Eve)
    pub fn new_years_eve_2025() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 12, 31, 23, 59, 59).unwrap()
    }
}

/// Clock that follows tokio's (possibly paused) time from a fixed start.
pub struct TokioClock {
    start: DateTime<Utc>,
    started_at: tokio::time::Instant,
}

impl TokioClock {
    pub fn starting_at(start: DateTime<Utc>) -> Self {
        Self {
            start,
            started_at: tokio::time::Instant::now(),
        }
    }
}

impl Clock for TokioClock {
    fn now(&self) -> DateTime<Utc> {
        let elapsed = self.started_at.elapsed();
        self.start + chrono::Duration::from_std(elapsed).unwrap()
    }
}

/// Surface that records every frame and can be detached to simulate the
/// display disappearing.
#[derive(Clone, Default)]
pub struct RecordingSurface {
    frames: Arc<Mutex<Vec<DisplayFragments>>>,
    detach_after: Option<usize>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Refuse renders once `frames` frames have been shown.
    pub fn detaching_after(frames: usize) -> Self {
        Self {
            detach_after: Some(frames),
            ..Self::default()
        }
    }

    pub fn frames(&self) -> Vec<DisplayFragments> {
        self.frames.lock().unwrap().clone()
    }

    pub fn clock_texts(&self) -> Vec<String> {
        self.frames().into_iter().map(|f| f.time_text).collect()
    }
}

impl DisplaySurface for RecordingSurface {
    fn render(&mut self, fragments: &DisplayFragments) -> Result<(), SurfaceUnavailable> {
        let mut frames = self.frames.lock().unwrap();
        if self.detach_after.is_some_and(|limit| frames.len() >= limit) {
            return Err(SurfaceUnavailable::new("countdown element removed"));
        }
        frames.push(fragments.clone());
        Ok(())
    }
}
