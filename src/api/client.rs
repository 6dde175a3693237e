use std::sync::{Arc, RwLock};
use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::errors::{ApiError, ApiResult};

const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Shared JSON client for the storefront backend.
///
/// Holds the session token behind a lock so the same client instance can be
/// reused across login/logout without being rebuilt.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    session_token: Arc<RwLock<Option<String>>>,
}

/// Error body shape used by the backend for non-2xx responses
#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl ApiClient {
    /// Create a new client for the given backend base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            session_token: Arc::new(RwLock::new(None)),
        }
    }

    /// Set or clear the bearer token attached to subsequent requests
    pub fn set_session_token(&self, token: Option<String>) {
        *self.session_token.write().unwrap() = token;
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut builder = self.client.request(method, url);
        if let Some(token) = self.session_token.read().unwrap().as_ref() {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let response = self.request(Method::GET, path).send().await?;
        Self::handle(response).await
    }

    /// GET where the resource may legitimately not exist: 404 and JSON
    /// `null` both resolve to `None` instead of an error.
    pub(crate) async fn get_optional<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> ApiResult<Option<T>> {
        let response = self.request(Method::GET, path).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        Self::handle::<Option<T>>(response).await
    }

    pub(crate) async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let response = self.request(Method::POST, path).json(body).send().await?;
        Self::handle(response).await
    }

    pub(crate) async fn put_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let response = self.request(Method::PUT, path).json(body).send().await?;
        Self::handle(response).await
    }

    pub(crate) async fn delete_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let response = self.request(Method::DELETE, path).send().await?;
        Self::handle(response).await
    }

    async fn handle<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
        let status = response.status();
        if status.is_success() {
            return response
                .json::<T>()
                .await
                .map_err(|e| ApiError::Parse(e.to_string()));
        }

        let body = response.text().await.unwrap_or_default();
        Err(ApiError::Remote(extract_error_message(&body).unwrap_or_else(
            || format!("Request failed with status {}", status),
        )))
    }
}

/// Pulls the `message` field out of an error body, if there is one
fn extract_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.message)
        .filter(|message| !message.trim().is_empty())
}
