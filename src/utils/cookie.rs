//! Cookie access for the auth token.
//!
//! Same platform split as [`super::storage`]: `document.cookie` in the
//! browser, a thread-local jar on the host target.

/// Bearer token issued by the auth service.
pub const TOKEN_COOKIE: &str = "token";

#[cfg(target_arch = "wasm32")]
mod imp {
    use wasm_bindgen::JsCast;
    use web_sys::HtmlDocument;

    fn html_document() -> Option<HtmlDocument> {
        web_sys::window()?
            .document()?
            .dyn_into::<HtmlDocument>()
            .ok()
    }

    pub fn get(name: &str) -> Option<String> {
        let raw = html_document()?.cookie().ok()?;
        raw.split(';').map(str::trim).find_map(|pair| {
            let (key, value) = pair.split_once('=')?;
            (key == name).then(|| value.to_string())
        })
    }

    pub fn set(name: &str, value: &str, max_age_days: u32) -> Result<(), String> {
        let document = html_document().ok_or_else(|| "No document".to_string())?;
        let max_age = max_age_days * 24 * 60 * 60;
        document
            .set_cookie(&format!(
                "{name}={value}; max-age={max_age}; path=/; samesite=lax"
            ))
            .map_err(|_| format!("Failed to set cookie {name}"))
    }

    pub fn remove(name: &str) {
        if let Some(document) = html_document() {
            let _ = document.set_cookie(&format!("{name}=; max-age=0; path=/"));
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod imp {
    use std::cell::RefCell;
    use std::collections::HashMap;

    thread_local! {
        static JAR: RefCell<HashMap<String, String>> = RefCell::new(HashMap::new());
    }

    pub fn get(name: &str) -> Option<String> {
        JAR.with(|jar| jar.borrow().get(name).cloned())
    }

    pub fn set(name: &str, value: &str, _max_age_days: u32) -> Result<(), String> {
        JAR.with(|jar| {
            jar.borrow_mut()
                .insert(name.to_string(), value.to_string())
        });
        Ok(())
    }

    pub fn remove(name: &str) {
        JAR.with(|jar| jar.borrow_mut().remove(name));
    }
}

pub use imp::{get, remove, set};
