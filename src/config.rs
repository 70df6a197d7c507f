use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
}

/// Fallback when no deployment config is present (local REST service).
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:4000/api";

static API_BASE_URL: OnceLock<String> = OnceLock::new();

fn cache_base_url(value: &str) -> String {
    let value = value.trim_end_matches('/').to_string();
    let _ = API_BASE_URL.set(value.clone());
    value
}

#[cfg(target_arch = "wasm32")]
fn get_from_env_js() -> Option<String> {
    // Expect optional global object: window.__STAFFDESK_ENV = { API_BASE_URL: "..." }
    let window = web_sys::window()?;
    let any = js_sys::Reflect::get(&window, &"__STAFFDESK_ENV".into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    // Try upper and lower case keys
    let val = js_sys::Reflect::get(&obj, &"API_BASE_URL".into())
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
        .or_else(|| js_sys::Reflect::get(&obj, &"api_base_url".into()).ok());
    val.and_then(|v| v.as_string())
}

#[cfg(target_arch = "wasm32")]
fn get_from_window_config() -> Option<String> {
    // Expect optional global object: window.__STAFFDESK_CONFIG = { api_base_url: "..." }
    let window = web_sys::window()?;
    let any = js_sys::Reflect::get(&window, &"__STAFFDESK_CONFIG".into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    let val = js_sys::Reflect::get(&obj, &"api_base_url".into())
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
        .or_else(|| js_sys::Reflect::get(&obj, &"API_BASE_URL".into()).ok());
    val.and_then(|v| v.as_string())
}

#[cfg(target_arch = "wasm32")]
fn snapshot_from_globals() -> Option<String> {
    if let Some(env_url) = get_from_env_js() {
        return Some(env_url);
    }
    get_from_window_config()
}

#[cfg(target_arch = "wasm32")]
fn write_window_config(cfg: &RuntimeConfig) {
    if cfg.api_base_url.is_none() {
        return;
    }
    let window = match web_sys::window() {
        Some(win) => win,
        None => return,
    };
    let obj = js_sys::Object::new();
    if let Some(url) = &cfg.api_base_url {
        let _ = js_sys::Reflect::set(
            &obj,
            &"api_base_url".into(),
            &wasm_bindgen::JsValue::from_str(url),
        );
    }
    let _ = js_sys::Reflect::set(&window, &"__STAFFDESK_CONFIG".into(), &obj);
}

#[cfg(target_arch = "wasm32")]
async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let resp = reqwest::get("./config.json").await.ok()?;
    if !resp.status().is_success() {
        return None;
    }
    resp.json::<RuntimeConfig>().await.ok()
}

pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(existing) = snapshot_from_globals() {
            return cache_base_url(&existing);
        }
        if let Some(cfg) = fetch_runtime_config().await {
            write_window_config(&cfg);
            if let Some(url) = cfg.api_base_url {
                return cache_base_url(&url);
            }
        }
    }
    cache_base_url(DEFAULT_API_BASE_URL)
}

pub async fn init() {
    let _ = await_api_base_url().await;
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;

    #[tokio::test]
    async fn resolves_default_and_caches_it() {
        let first = await_api_base_url().await;
        assert_eq!(first, DEFAULT_API_BASE_URL);
        // Second call must hit the cache, not re-resolve.
        assert_eq!(await_api_base_url().await, first);
    }
}
