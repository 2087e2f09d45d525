//! `window.sessionStorage` behind the [`SessionStore`] trait.

use shared::{SessionStore, StorageError};
use wasm_bindgen::JsValue;

/// Handle to the tab's session storage.
///
/// Browsers may deny storage entirely (privacy modes, sandboxed iframes); the
/// handle then reports [`StorageError::Unavailable`] on every call instead of
/// panicking.
#[derive(Clone)]
pub struct BrowserSessionStore {
    storage: Option<web_sys::Storage>,
}

impl BrowserSessionStore {
    pub fn open() -> Self {
        let storage = web_sys::window().and_then(|w| w.session_storage().ok().flatten());
        if storage.is_none() {
            log::warn!("sessionStorage unavailable");
        }
        Self { storage }
    }

    fn storage(&self) -> Result<&web_sys::Storage, StorageError> {
        self.storage.as_ref().ok_or(StorageError::Unavailable)
    }
}

fn describe(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

impl SessionStore for BrowserSessionStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage()?
            .get_item(key)
            .map_err(|e| StorageError::Read {
                key: key.to_string(),
                reason: describe(e),
            })
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Write {
                key: key.to_string(),
                reason: describe(e),
            })
    }
}
