//! Typed access to the popup's two session-storage keys.
//!
//! Only [`POPUP_SHOWN_KEY`] and [`LAST_ACTIVE_KEY`] are ever touched; the
//! auth display and other page scripts keep their own keys in the same store.

use crate::defaults::{LAST_ACTIVE_KEY, POPUP_SHOWN_KEY};
use crate::storage::{SessionStore, StorageError};
use chrono::{DateTime, TimeZone, Utc};

pub struct SessionFlags<S> {
    store: S,
}

impl<S: SessionStore> SessionFlags<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Whether the popup was already dismissed in this tab session.
    ///
    /// Any stored value other than `false` counts as shown, so a corrupted
    /// flag never re-shows the popup. Read failures are returned to the caller,
    /// which decides how to fail.
    pub fn popup_shown(&self) -> Result<bool, StorageError> {
        Ok(self
            .store
            .get(POPUP_SHOWN_KEY)?
            .is_some_and(|value| value.trim() != "false"))
    }

    /// Set the shown flag. Write-once: an already-set flag is left alone and
    /// write failures are dropped.
    pub fn mark_popup_shown(&self) {
        if matches!(self.popup_shown(), Ok(true)) {
            return;
        }
        if let Err(e) = self.store.set(POPUP_SHOWN_KEY, "true") {
            log::debug!("Could not persist popup flag: {}", e);
        }
    }

    /// Last recorded activity, or `None` when absent, unreadable or garbled.
    pub fn last_active_at(&self) -> Option<DateTime<Utc>> {
        let raw = match self.store.get(LAST_ACTIVE_KEY) {
            Ok(raw) => raw?,
            Err(e) => {
                log::debug!("Could not read last activity: {}", e);
                return None;
            }
        };
        let millis = raw.trim().parse::<i64>().ok()?;
        Utc.timestamp_millis_opt(millis).single()
    }

    pub fn set_last_active_at(&self, at: DateTime<Utc>) -> Result<(), StorageError> {
        self.store
            .set(LAST_ACTIVE_KEY, &at.timestamp_millis().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{FailingStore, MemoryStore};

    #[test]
    fn absent_flags() {
        let flags = SessionFlags::new(MemoryStore::new());
        assert_eq!(flags.popup_shown(), Ok(false));
        assert!(flags.last_active_at().is_none());
    }

    #[test]
    fn popup_flag_is_write_once() {
        let store = MemoryStore::new();
        let flags = SessionFlags::new(store.clone());
        flags.mark_popup_shown();
        assert_eq!(flags.popup_shown(), Ok(true));
        assert_eq!(store.get(POPUP_SHOWN_KEY).unwrap().as_deref(), Some("true"));

        flags.mark_popup_shown();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn unknown_flag_value_counts_as_shown() {
        let store = MemoryStore::new();
        store.set(POPUP_SHOWN_KEY, "1").unwrap();
        assert_eq!(SessionFlags::new(store.clone()).popup_shown(), Ok(true));

        store.set(POPUP_SHOWN_KEY, "false").unwrap();
        assert_eq!(SessionFlags::new(store).popup_shown(), Ok(false));
    }

    #[test]
    fn last_active_roundtrips_as_epoch_millis() {
        let store = MemoryStore::new();
        let flags = SessionFlags::new(store.clone());
        let at = Utc.timestamp_millis_opt(1_718_000_000_123).unwrap();
        flags.set_last_active_at(at).unwrap();

        assert_eq!(
            store.get(LAST_ACTIVE_KEY).unwrap().as_deref(),
            Some("1718000000123")
        );
        assert_eq!(flags.last_active_at(), Some(at));
    }

    #[test]
    fn garbled_last_active_is_ignored() {
        let store = MemoryStore::new();
        store.set(LAST_ACTIVE_KEY, "yesterday").unwrap();
        assert!(SessionFlags::new(store).last_active_at().is_none());
    }

    #[test]
    fn foreign_keys_are_untouched() {
        let store = MemoryStore::new();
        store.set("dataPriceLoggedIn", "true").unwrap();
        store.set("dataPriceUserEmail", "ana@acme.io").unwrap();

        let flags = SessionFlags::new(store.clone());
        flags.mark_popup_shown();
        flags.set_last_active_at(Utc::now()).unwrap();

        assert_eq!(
            store.get("dataPriceLoggedIn").unwrap().as_deref(),
            Some("true")
        );
        assert_eq!(
            store.get("dataPriceUserEmail").unwrap().as_deref(),
            Some("ana@acme.io")
        );
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn storage_failures_are_swallowed() {
        let flags = SessionFlags::new(FailingStore {
            fail_reads: true,
            fail_writes: true,
            ..Default::default()
        });
        assert!(flags.popup_shown().is_err());
        assert!(flags.last_active_at().is_none());
        // Must not panic
        flags.mark_popup_shown();
        assert!(flags.set_last_active_at(Utc::now()).is_err());
    }
}
