//! Durable key-value storage.
//!
//! Backed by `window.localStorage` in the browser. Host builds keep a
//! thread-local map instead, so persistence-dependent logic stays exercisable
//! from native tests.

/// Serialized [`crate::state::session::Session`] user record.
pub const USER_KEY: &str = "user";

/// Preferred UI language, sent as `Accept-Language` on every request.
pub const LANGUAGE_KEY: &str = "language";

#[cfg(target_arch = "wasm32")]
mod imp {
    use web_sys::Storage;

    fn local_storage() -> Option<Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }

    pub fn get_item(key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    pub fn set_item(key: &str, value: &str) -> Result<(), String> {
        local_storage()
            .ok_or_else(|| "No localStorage".to_string())?
            .set_item(key, value)
            .map_err(|_| format!("Failed to store {key}"))
    }

    pub fn remove_item(key: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }

    pub fn clear() {
        if let Some(storage) = local_storage() {
            let _ = storage.clear();
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod imp {
    use std::cell::RefCell;
    use std::collections::HashMap;

    thread_local! {
        static STORE: RefCell<HashMap<String, String>> = RefCell::new(HashMap::new());
    }

    pub fn get_item(key: &str) -> Option<String> {
        STORE.with(|store| store.borrow().get(key).cloned())
    }

    pub fn set_item(key: &str, value: &str) -> Result<(), String> {
        STORE.with(|store| {
            store
                .borrow_mut()
                .insert(key.to_string(), value.to_string())
        });
        Ok(())
    }

    pub fn remove_item(key: &str) {
        STORE.with(|store| store.borrow_mut().remove(key));
    }

    pub fn clear() {
        STORE.with(|store| store.borrow_mut().clear());
    }
}

pub use imp::{clear, get_item, remove_item, set_item};
