//! Hard navigation.
//!
//! The login redirect after a session teardown must drop all in-memory state,
//! so it goes through `location.href` rather than the client-side router. Host
//! builds record the target instead, which is what the tests assert on.

#[cfg(target_arch = "wasm32")]
mod imp {
    pub fn assign(path: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }

    pub fn current_path() -> Option<String> {
        web_sys::window()?.location().pathname().ok()
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod imp {
    use std::cell::RefCell;

    thread_local! {
        static LAST_ASSIGNED: RefCell<Option<String>> = RefCell::new(None);
    }

    pub fn assign(path: &str) {
        LAST_ASSIGNED.with(|last| *last.borrow_mut() = Some(path.to_string()));
    }

    pub fn current_path() -> Option<String> {
        None
    }

    pub fn last_assigned() -> Option<String> {
        LAST_ASSIGNED.with(|last| last.borrow().clone())
    }

    pub fn reset() {
        LAST_ASSIGNED.with(|last| *last.borrow_mut() = None);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use imp::{last_assigned, reset};
pub use imp::{assign, current_path};
