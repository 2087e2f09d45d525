//! Popup and activity-tracker timings.
//!
//! All values are milliseconds so the struct can be supplied as plain JSON
//! (e.g. from a `data-popup-config` attribute). Missing fields take the
//! defaults from [`crate::defaults`].

use crate::defaults;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PopupConfig {
    pub presentation_delay_ms: u64,
    pub settle_delay_ms: u64,
    pub slide_transition_ms: u64,
    pub autoplay_interval_ms: u64,
    pub close_transition_ms: u64,
    pub resume_window_ms: u64,
    pub activity_debounce_ms: u64,
}

impl Default for PopupConfig {
    fn default() -> Self {
        Self {
            presentation_delay_ms: defaults::PRESENTATION_DELAY_MS,
            settle_delay_ms: defaults::SETTLE_DELAY_MS,
            slide_transition_ms: defaults::SLIDE_TRANSITION_MS,
            autoplay_interval_ms: defaults::AUTOPLAY_INTERVAL_MS,
            close_transition_ms: defaults::CLOSE_TRANSITION_MS,
            resume_window_ms: defaults::RESUME_WINDOW_MS,
            activity_debounce_ms: defaults::ACTIVITY_DEBOUNCE_MS,
        }
    }
}

impl PopupConfig {
    /// Parse a JSON override. Unknown fields are ignored, missing ones defaulted.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn presentation_delay(&self) -> Duration {
        Duration::from_millis(self.presentation_delay_ms)
    }

    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    pub fn slide_transition(&self) -> Duration {
        Duration::from_millis(self.slide_transition_ms)
    }

    /// Autoplay interval, never zero (a zero interval would spin the event loop).
    pub fn autoplay_interval(&self) -> Duration {
        Duration::from_millis(self.autoplay_interval_ms.max(1))
    }

    pub fn close_transition(&self) -> Duration {
        Duration::from_millis(self.close_transition_ms)
    }
}
