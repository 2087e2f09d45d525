//! Session activity tracking
//!
//! Keeps `lastActiveAt` fresh so the popup gate can tell a brand new visit
//! from a tab that was only hidden for a moment.

use crate::config::PopupConfig;
use crate::session_flags::SessionFlags;
use crate::storage::SessionStore;
use chrono::{DateTime, Utc};

/// User-activity signals the page forwards to the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityEvent {
    /// Page finished loading. Recorded after the popup gate has run
    Load,
    /// Document visibility changed to visible
    BecameVisible,
    /// Window regained focus
    Focus,
    /// Pointer moved (high frequency, debounced)
    PointerMove,
    /// Any key press
    KeyPress,
}

pub struct SessionActivityTracker<S> {
    flags: SessionFlags<S>,
    debounce_ms: i64,
    last_written: Option<DateTime<Utc>>,
}

impl<S: SessionStore> SessionActivityTracker<S> {
    pub fn new(config: &PopupConfig, flags: SessionFlags<S>) -> Self {
        Self {
            flags,
            debounce_ms: i64::try_from(config.activity_debounce_ms).unwrap_or(i64::MAX),
            last_written: None,
        }
    }

    /// Record that the user was active at `now`.
    ///
    /// Pointer moves within the debounce window of the previous write are
    /// skipped, and a timestamp older than the previous one is never written.
    /// Storage failures are logged and dropped.
    pub fn record_activity(&mut self, event: ActivityEvent, now: DateTime<Utc>) {
        let previous = self.last_written.or_else(|| self.flags.last_active_at());
        if let Some(previous) = previous {
            if now < previous {
                return;
            }
            if event == ActivityEvent::PointerMove
                && now.signed_duration_since(previous).num_milliseconds() < self.debounce_ms
            {
                return;
            }
        }

        match self.flags.set_last_active_at(now) {
            Ok(()) => self.last_written = Some(now),
            Err(e) => log::debug!("Dropped activity timestamp ({:?}): {}", event, e),
        }
    }

    /// Timestamp of the last successful write made by this tracker.
    pub fn last_recorded(&self) -> Option<DateTime<Utc>> {
        self.last_written
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{FailingStore, MemoryStore};
    use chrono::{Duration, TimeZone};

    fn t(millis: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(1_718_000_000_000 + millis).unwrap()
    }

    fn tracker(store: MemoryStore) -> SessionActivityTracker<MemoryStore> {
        SessionActivityTracker::new(&PopupConfig::default(), SessionFlags::new(store))
    }

    #[test]
    fn records_each_event_kind() {
        let store = MemoryStore::new();
        let flags = SessionFlags::new(store.clone());
        let mut tracker = tracker(store);

        for (i, event) in [
            ActivityEvent::Load,
            ActivityEvent::BecameVisible,
            ActivityEvent::Focus,
            ActivityEvent::KeyPress,
        ]
        .into_iter()
        .enumerate()
        {
            let now = t(i as i64 * 10);
            tracker.record_activity(event, now);
            assert_eq!(flags.last_active_at(), Some(now));
        }
    }

    #[test]
    fn pointer_moves_are_debounced() {
        let store = MemoryStore::new();
        let flags = SessionFlags::new(store.clone());
        let mut tracker = tracker(store);

        tracker.record_activity(ActivityEvent::PointerMove, t(0));
        tracker.record_activity(ActivityEvent::PointerMove, t(400));
        tracker.record_activity(ActivityEvent::PointerMove, t(999));
        assert_eq!(flags.last_active_at(), Some(t(0)));

        tracker.record_activity(ActivityEvent::PointerMove, t(1_000));
        assert_eq!(flags.last_active_at(), Some(t(1_000)));
    }

    #[test]
    fn key_press_bypasses_debounce() {
        let store = MemoryStore::new();
        let flags = SessionFlags::new(store.clone());
        let mut tracker = tracker(store);

        tracker.record_activity(ActivityEvent::PointerMove, t(0));
        tracker.record_activity(ActivityEvent::KeyPress, t(5));
        assert_eq!(flags.last_active_at(), Some(t(5)));
    }

    #[test]
    fn never_moves_backwards() {
        let store = MemoryStore::new();
        let flags = SessionFlags::new(store.clone());
        let mut tracker = tracker(store);

        tracker.record_activity(ActivityEvent::Focus, t(10_000));
        tracker.record_activity(ActivityEvent::Focus, t(10_000) - Duration::seconds(30));
        assert_eq!(flags.last_active_at(), Some(t(10_000)));
        assert_eq!(tracker.last_recorded(), Some(t(10_000)));
    }

    #[test]
    fn respects_timestamp_from_previous_page() {
        let store = MemoryStore::new();
        let flags = SessionFlags::new(store.clone());
        flags.set_last_active_at(t(0)).unwrap();

        let mut tracker = tracker(store);
        tracker.record_activity(ActivityEvent::PointerMove, t(200));
        assert_eq!(flags.last_active_at(), Some(t(0)));
        assert!(tracker.last_recorded().is_none());
    }

    #[test]
    fn write_failures_are_ignored() {
        let mut tracker = SessionActivityTracker::new(
            &PopupConfig::default(),
            SessionFlags::new(FailingStore {
                fail_writes: true,
                ..Default::default()
            }),
        );
        tracker.record_activity(ActivityEvent::KeyPress, t(0));
        assert!(tracker.last_recorded().is_none());
    }
}
