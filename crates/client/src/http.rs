//! Request plumbing shared by every endpoint group.
//!
//! [`ApiClient`] owns a pooled [`reqwest::Client`], the base URL, and an
//! optional [`Session`]. The endpoint methods live in sibling modules
//! (`campaigns`, `applications`, ...) as further `impl ApiClient`
//! blocks; they all funnel through the helpers here so success checking,
//! envelope unwrapping, and error-body handling stay in one place.

use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::session::Session;

/// Typed client for the platform REST API.
///
/// Cloning is cheap; clones share the underlying connection pool and
/// carry the same session.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Option<Session>,
}

impl ApiClient {
    /// Build a client from configuration. No session is attached.
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            session: None,
        })
    }

    /// A copy of this client that authenticates as `session`.
    pub fn with_session(&self, session: Session) -> Self {
        Self {
            http: self.http.clone(),
            base_url: self.base_url.clone(),
            session: Some(session),
        }
    }

    /// The attached session, when signed in.
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // -----------------------------------------------------------------------
    // Request plumbing
    // -----------------------------------------------------------------------

    /// Start a request for `path`, joined to the base URL. The bearer
    /// header is attached when a session is present.
    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let builder = self.http.request(method, url);
        match &self.session {
            Some(session) => builder.header(reqwest::header::AUTHORIZATION, session.bearer()),
            None => builder,
        }
    }

    /// Send, expecting a JSON payload decoding to `T`.
    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        context: &'static str,
    ) -> Result<T, ApiError> {
        let response = builder.send().await?;
        Self::parse_response(response, context).await
    }

    /// Send, expecting only a success status; the body is discarded.
    pub(crate) async fn send_unit(
        &self,
        builder: RequestBuilder,
        context: &'static str,
    ) -> Result<(), ApiError> {
        let response = builder.send().await?;
        Self::ensure_success(response, context).await?;
        Ok(())
    }

    /// Check the response status. On a non-success status the server's
    /// `message`/`error` field is surfaced verbatim when its body carries
    /// one, otherwise a generic fallback naming the status.
    async fn ensure_success(
        response: Response,
        context: &'static str,
    ) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = error_message(&body)
            .unwrap_or_else(|| format!("Request failed with status {}", status.as_u16()));

        tracing::debug!(context, status = status.as_u16(), %message, "API request refused");

        Err(ApiError::Api {
            status: status.as_u16(),
            message,
        })
    }

    /// Decode a successful response body, unwrapping the `data` envelope
    /// when present.
    async fn parse_response<T: DeserializeOwned>(
        response: Response,
        context: &'static str,
    ) -> Result<T, ApiError> {
        let response = Self::ensure_success(response, context).await?;
        let bytes = response.bytes().await?;

        let value: serde_json::Value = serde_json::from_slice(&bytes)
            .map_err(|source| ApiError::Decode { context, source })?;

        serde_json::from_value(unwrap_envelope(value))
            .map_err(|source| ApiError::Decode { context, source })
    }
}

/// Most endpoints wrap their payload as `{"success": ..., "data": ...}`;
/// a few return the payload bare. Pull `data` out when the envelope is
/// there, otherwise hand the body back unchanged.
fn unwrap_envelope(value: serde_json::Value) -> serde_json::Value {
    match value {
        serde_json::Value::Object(mut map) => match map.remove("data") {
            Some(data) => data,
            None => serde_json::Value::Object(map),
        },
        other => other,
    }
}

/// The human-readable message of a JSON error body, when there is one.
fn error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .or_else(|| value.get("error"))
        .and_then(serde_json::Value::as_str)
        .map(str::to_owned)
}
