//! Welcome popup
//!
//! A once-per-tab-session onboarding carousel. [`WelcomePopupController`] is a
//! pure state machine: the host feeds it [`PopupEvent`]s and executes the
//! timer [`Effect`]s it returns, which keeps every transition steppable in
//! tests.

mod controller;
pub mod slides;
mod types;


pub use controller::WelcomePopupController;
pub use types::{Effect, PopupEvent, PopupPhase, PopupState, SlideStyle, TimerKind};

use crate::config::PopupConfig;
use crate::session_flags::SessionFlags;
use crate::storage::SessionStore;
use chrono::{DateTime, Utc};

/// Errors from popup navigation and construction
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PopupError {
    #[error("Slide index {index} out of range (popup has {count} slides)")]
    SlideOutOfRange { index: usize, count: usize },

    #[error("Popup needs at least one slide")]
    EmptySlideSet,

    #[error("Popup is not presenting")]
    NotPresenting,
}

/// Eligibility gate, evaluated once per page load.
///
/// 1. Already dismissed this session: never.
/// 2. Activity recorded within the resume window: the tab was resumed, not
///    freshly visited. A timestamp in the future counts as recent.
/// 3. Otherwise present.
///
/// If the shown flag cannot be read at all the popup is not presented.
pub fn should_present<S: SessionStore>(
    flags: &SessionFlags<S>,
    now: DateTime<Utc>,
    config: &PopupConfig,
) -> bool {
    match flags.popup_shown() {
        Ok(false) => {}
        Ok(true) => return false,
        Err(e) => {
            log::warn!("Session storage unreadable, skipping welcome popup: {}", e);
            return false;
        }
    }

    match flags.last_active_at() {
        Some(last_active) => {
            let idle_ms = now.signed_duration_since(last_active).num_milliseconds();
            let window_ms = i64::try_from(config.resume_window_ms).unwrap_or(i64::MAX);
            idle_ms >= window_ms
        }
        None => true,
    }
}
