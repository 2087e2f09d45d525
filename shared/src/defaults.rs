/// Session storage key for the "popup already dismissed this tab" flag.
pub const POPUP_SHOWN_KEY: &str = "dataPricePopupShown";

/// Session storage key for the last user-activity timestamp (epoch millis).
pub const LAST_ACTIVE_KEY: &str = "dataPriceLastActive";

/// Delay between page load and mounting the popup.
pub const PRESENTATION_DELAY_MS: u64 = 1_000;

/// Delay between mounting the popup and applying its "active" class, so the
/// CSS transition has a starting frame to animate from.
pub const SETTLE_DELAY_MS: u64 = 100;

/// Delay between leaving one slide and activating the next.
pub const SLIDE_TRANSITION_MS: u64 = 100;

/// Autoplay advance interval.
pub const AUTOPLAY_INTERVAL_MS: u64 = 3_000;

/// Length of the closing animation before the popup is unmounted.
pub const CLOSE_TRANSITION_MS: u64 = 300;

/// Activity newer than this means the tab was resumed, not freshly visited (5 minutes).
pub const RESUME_WINDOW_MS: u64 = 5 * 60 * 1_000;

/// Minimum spacing between pointer-move driven activity writes.
pub const ACTIVITY_DEBOUNCE_MS: u64 = 1_000;
