use log::warn;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT_LANGUAGE, AUTHORIZATION};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    api::types::ApiError,
    config,
    utils::{cookie, nav, storage},
};

/// `Accept-Language` fallback when the user never picked one.
pub const DEFAULT_LANGUAGE: &str = "en";

/// REST client shared by every data-bearing view.
///
/// Every request flows through [`ApiClient::send`], the single pipeline stage
/// where credentials are attached and authorization failures tear the session
/// down. Endpoint methods live in sibling modules and never handle auth
/// themselves.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    /// Pin the base URL instead of resolving runtime config; used by tests.
    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
        }
    }

    async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    fn request_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Some(token) = cookie::get(cookie::TOKEN_COOKIE) {
            if let Ok(value) = HeaderValue::from_str(&format!("Bearer {token}")) {
                headers.insert(AUTHORIZATION, value);
            }
        }
        let language = storage::get_item(storage::LANGUAGE_KEY)
            .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());
        if let Ok(value) = HeaderValue::from_str(&language) {
            headers.insert(ACCEPT_LANGUAGE, value);
        }
        headers
    }

    async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ApiError> {
        let response = builder
            .headers(Self::request_headers())
            .send()
            .await
            .map_err(|err| {
                warn!("request failed without a response: {err}");
                ApiError::network()
            })?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            Self::expire_session();
            return Err(ApiError::session_expired());
        }
        if status.is_success() {
            response
                .json::<T>()
                .await
                .map_err(|e| ApiError::unknown(format!("Failed to parse response: {e}")))
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_error_body(&body))
        }
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<T, ApiError> {
        let base_url = self.resolved_base_url().await;
        let mut builder = self.client.get(format!("{base_url}{path}"));
        if !query.is_empty() {
            builder = builder.query(query);
        }
        self.send(builder).await
    }

    pub(crate) async fn post_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let base_url = self.resolved_base_url().await;
        self.send(self.client.post(format!("{base_url}{path}")).json(body))
            .await
    }

    /// Authorization failed: the session is destroyed as a whole (token cookie
    /// plus all durable storage) and the app returns to the login flow. The
    /// caller only ever observes the SESSION_EXPIRED error.
    fn expire_session() {
        warn!("authorization failure: clearing session and returning to login");
        cookie::remove(cookie::TOKEN_COOKIE);
        storage::clear();
        Self::redirect_to_login_if_needed();
    }

    fn redirect_to_login_if_needed() {
        if nav::current_path().as_deref() == Some("/login") {
            return;
        }
        nav::assign("/login");
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
