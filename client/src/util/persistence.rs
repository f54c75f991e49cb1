//! Browser localStorage helpers for state persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! These helpers centralize hydrate-only read/write behavior so state modules
//! can persist values without repeating web-sys glue. On the server they are
//! no-ops.

#[cfg(test)]
#[path = "persistence_test.rs"]
mod persistence_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

#[cfg(feature = "hydrate")]
fn storage() -> Option<web_sys::Storage> {
    match web_sys::window()?.local_storage() {
        Ok(storage) => storage,
        Err(_) => None,
    }
}

/// Load a JSON value from `localStorage` for `key`.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    #[cfg(feature = "hydrate")]
    {
        let raw = match storage()?.get_item(key) {
            Ok(raw) => raw?,
            Err(_) => return None,
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                log::warn!("discarding unreadable {key} from storage: {e}");
                None
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Save a JSON value to `localStorage` for `key`.
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = storage() else {
            return;
        };
        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("cannot serialize {key} for storage: {e}");
                return;
            }
        };
        if storage.set_item(key, &raw).is_err() {
            log::warn!("storage rejected write for {key}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}
