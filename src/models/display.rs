//! Text fragments written to a countdown display each tick.

use std::fmt;

use serde::{Deserialize, Serialize};

pub const ELAPSED_TIME_TEXT: &str = "00:00:00";

/// The two writable regions of a countdown display.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DisplayFragments {
    /// Empty, or a phrase such as `"3 days"`.
    pub days_text: String,
    /// Zero-padded clock text, never empty.
    pub time_text: String,
}

impl DisplayFragments {
    /// Fragments shown once the target has passed.
    pub fn elapsed() -> Self {
        Self {
            days_text: String::new(),
            time_text: ELAPSED_TIME_TEXT.to_string(),
        }
    }

    pub fn has_days(&self) -> bool {
        !self.days_text.is_empty()
    }
}

impl fmt::Display for DisplayFragments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_days() {
            write!(f, "{} {}", self.days_text, self.time_text)
        } else {
            f.write_str(&self.time_text)
        }
    }
}
