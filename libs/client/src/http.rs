//! HTTP transport for the StudySync API
//!
//! A thin wrapper over `reqwest` that owns the base URL, applies the
//! configured timeout, and maps non-2xx replies to [`ClientError::Api`]
//! with the server's detail message surfaced verbatim.

use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

use common::config::ClientConfig;

use crate::error::{ClientError, ClientResult};
use crate::session::Session;

/// HTTP client for the StudySync API
#[derive(Debug, Clone)]
pub struct HttpApi {
    http: reqwest::Client,
    base_url: String,
}

impl HttpApi {
    /// Build a client from the loaded configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(HttpApi {
            http,
            base_url: config.api_base_url.clone(),
        })
    }

    /// Absolute URL for an API path
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET a path within the public endpoint group
    pub(crate) fn get(&self, path: &str) -> RequestBuilder {
        self.http.get(self.url(path))
    }

    /// GET a path with the session's bearer token attached
    pub(crate) fn get_authed(&self, path: &str, session: &Session) -> RequestBuilder {
        self.http.get(self.url(path)).bearer_auth(&session.token)
    }

    /// POST a path within the public endpoint group
    pub(crate) fn post(&self, path: &str) -> RequestBuilder {
        self.http.post(self.url(path))
    }

    /// POST a path with the session's bearer token attached
    pub(crate) fn post_authed(&self, path: &str, session: &Session) -> RequestBuilder {
        self.http.post(self.url(path)).bearer_auth(&session.token)
    }

    /// DELETE a path within the public endpoint group
    pub(crate) fn delete(&self, path: &str) -> RequestBuilder {
        self.http.delete(self.url(path))
    }

    /// Send a request and deserialize the 2xx body
    pub(crate) async fn execute<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> ClientResult<T> {
        let response = request.send().await?;
        let status = response.status();
        debug!("API replied with status {}", status);

        if !status.is_success() {
            return Err(ClientError::Api {
                status: status.as_u16(),
                detail: error_detail(status, response).await,
            });
        }

        Ok(response.json::<T>().await?)
    }

    /// Send a request, require a 2xx reply, and discard the body
    pub(crate) async fn execute_unit(&self, request: RequestBuilder) -> ClientResult<()> {
        let response = request.send().await?;
        let status = response.status();
        debug!("API replied with status {}", status);

        if !status.is_success() {
            return Err(ClientError::Api {
                status: status.as_u16(),
                detail: error_detail(status, response).await,
            });
        }

        Ok(())
    }
}

/// Extract the user-facing message from a non-2xx reply
///
/// The API reports failures as JSON with a `detail` field (an `error`
/// field is accepted too). Anything unparseable falls back to the raw
/// body, then to the status reason.
async fn error_detail(status: StatusCode, response: Response) -> String {
    let fallback = || {
        status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string()
    };

    let Ok(body) = response.text().await else {
        return fallback();
    };

    if let Ok(value) = serde_json::from_str::<serde_json::Value>(&body) {
        match value.get("detail").or_else(|| value.get("error")) {
            Some(serde_json::Value::String(s)) => return s.clone(),
            Some(other) => return other.to_string(),
            None => {}
        }
    }

    if body.trim().is_empty() {
        fallback()
    } else {
        body
    }
}
