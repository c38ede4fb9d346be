//! HTTP client for the catalog admin REST API.
//!
//! Wraps `reqwest` with API-key header management, base-URL normalization,
//! status triage, and typed response decoding. Every mutation is a single
//! fire-and-forget request; the remote API is the sole arbiter of
//! concurrent writes.

mod accounts;
mod brands;
mod categories;
mod discounts;
mod logistics;
mod products;
mod reference;
mod taxes;
mod upload;

use std::time::Duration;

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;

pub use reference::FormReferences;

pub(crate) const API_KEY_HEADER: &str = "X-API-Key";

const USER_AGENT: &str = "shopctl/0.1 (catalog-admin)";
const DEFAULT_PREFETCH_TIMEOUT_SECS: u64 = 15;

/// Which credential a request is sent with.
///
/// Most endpoints validate the catalog key; deliveries and warranties are
/// served by a separate backend with its own key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum KeyScope {
    Catalog,
    Logistics,
}

/// API credentials, injected explicitly and never written to any persistent
/// store.
#[derive(Clone)]
pub struct Credentials {
    pub api_key: String,
    pub logistics_api_key: Option<String>,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"[redacted]")
            .field(
                "logistics_api_key",
                &self.logistics_api_key.as_ref().map(|_| "[redacted]"),
            )
            .finish()
    }
}

/// Client for the catalog admin REST API.
///
/// Use [`CatalogClient::new`] with the production base URL, or point it at a
/// mock server in tests.
pub struct CatalogClient {
    http: Client,
    base_url: Url,
    credentials: Credentials,
    prefetch_timeout: Duration,
}

impl CatalogClient {
    /// Creates a client for the API at `base_url`.
    ///
    /// `timeout_secs` bounds every request end to end; the connect timeout
    /// is fixed at 10 s.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the underlying `reqwest::Client` cannot
    /// be constructed, or [`ApiError::InvalidBaseUrl`] if `base_url` does
    /// not parse.
    pub fn new(
        base_url: &str,
        credentials: Credentials,
        timeout_secs: u64,
    ) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(USER_AGENT)
            .build()?;

        // Normalise: ensure the base URL ends with exactly one slash so that
        // joins append a path segment instead of replacing the last one.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let parsed = Url::parse(&normalised).map_err(|e| ApiError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            http,
            base_url: parsed,
            credentials,
            prefetch_timeout: Duration::from_secs(DEFAULT_PREFETCH_TIMEOUT_SECS),
        })
    }

    /// Overrides the per-request timeout used by the form-reference
    /// prefetch (15 s by default).
    #[must_use]
    pub fn with_prefetch_timeout(mut self, secs: u64) -> Self {
        self.prefetch_timeout = Duration::from_secs(secs);
        self
    }

    pub(crate) fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path)
            .map_err(|e| ApiError::InvalidBaseUrl {
                base_url: format!("{}{path}", self.base_url),
                reason: e.to_string(),
            })
    }

    pub(crate) fn key_for(&self, scope: KeyScope) -> &str {
        match scope {
            KeyScope::Catalog => &self.credentials.api_key,
            // Endpoints behind the logistics backend fall back to the
            // catalog key when no dedicated key is configured.
            KeyScope::Logistics => self
                .credentials
                .logistics_api_key
                .as_deref()
                .unwrap_or(&self.credentials.api_key),
        }
    }

    /// Sends the request, triages the status, and parses the body as JSON.
    /// An empty body (e.g. a 204 delete response) decodes to `Null`.
    pub(crate) async fn execute(
        &self,
        request: reqwest::RequestBuilder,
        url: &Url,
    ) -> Result<serde_json::Value, ApiError> {
        let response = request.send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound {
                url: url.to_string(),
            });
        }
        if !status.is_success() {
            return Err(ApiError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        if body.trim().is_empty() {
            return Ok(serde_json::Value::Null);
        }
        serde_json::from_str(&body).map_err(|e| ApiError::Deserialize {
            context: url.to_string(),
            source: e,
        })
    }

    pub(crate) async fn get_json(
        &self,
        url: Url,
        scope: KeyScope,
    ) -> Result<serde_json::Value, ApiError> {
        let request = self
            .http
            .get(url.clone())
            .header(API_KEY_HEADER, self.key_for(scope));
        self.execute(request, &url).await
    }

    pub(crate) async fn post_json<B>(
        &self,
        url: Url,
        scope: KeyScope,
        body: &B,
    ) -> Result<serde_json::Value, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let request = self
            .http
            .post(url.clone())
            .header(API_KEY_HEADER, self.key_for(scope))
            .json(body);
        self.execute(request, &url).await
    }

    pub(crate) async fn put_json<B>(
        &self,
        url: Url,
        scope: KeyScope,
        body: &B,
    ) -> Result<serde_json::Value, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let request = self
            .http
            .put(url.clone())
            .header(API_KEY_HEADER, self.key_for(scope))
            .json(body);
        self.execute(request, &url).await
    }

    pub(crate) async fn delete_request(&self, url: Url, scope: KeyScope) -> Result<(), ApiError> {
        let request = self
            .http
            .delete(url.clone())
            .header(API_KEY_HEADER, self.key_for(scope));
        self.execute(request, &url).await.map(|_| ())
    }

    pub(crate) fn decode<T: DeserializeOwned>(
        body: serde_json::Value,
        context: &str,
    ) -> Result<T, ApiError> {
        serde_json::from_value(body).map_err(|e| ApiError::Deserialize {
            context: context.to_owned(),
            source: e,
        })
    }
}
