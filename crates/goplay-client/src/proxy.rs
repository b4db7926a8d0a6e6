//! HTTP gateway to the goplay compile/share proxy.
//!
//! Wraps the two remote operations as typed calls. Failures of any
//! flavor surface as [`PlayError::RemoteService`]; the client imposes
//! no timeout and never retries.

use reqwest::multipart::Form;
use tracing::{debug, instrument};

use crate::error::{PlayError, Result};
use crate::model::CompileResult;

/// Default public proxy endpoint.
pub const DEFAULT_PROXY_URL: &str = "https://goplay.ggicci.me";

/// Canonical share-link prefix on the upstream playground.
pub const SHARE_BASE_URL: &str = "https://go.dev/play/p";

/// Protocol version marker sent with every compile request.
const PROTO_VERSION: &str = "2";

/// Client for one goplay proxy instance.
///
/// Cheap to clone; the underlying `reqwest::Client` pools connections.
#[derive(Debug, Clone)]
pub struct GoplayProxy {
    base_url: String,
    http: reqwest::Client,
}

impl Default for GoplayProxy {
    fn default() -> Self {
        Self::new(DEFAULT_PROXY_URL)
    }
}

impl GoplayProxy {
    /// Create a client for the proxy at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        GoplayProxy {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    /// Submit `source` for remote compilation and execution.
    ///
    /// Sends a multipart form with the fixed protocol fields
    /// (`version=2`, `withVet=true`) plus the source code, and the
    /// `backend` query parameter (empty string selects the service's
    /// default backend).
    ///
    /// # Errors
    ///
    /// [`PlayError::RemoteService`] on transport failure or non-2xx
    /// status; the message is the status phrase, suffixed with the
    /// response body when one is present.
    #[instrument(skip(self, source), fields(bytes = source.len()))]
    pub async fn compile(&self, source: &str, backend: Option<&str>) -> Result<CompileResult> {
        let url = format!("{}/_/compile", self.base_url);
        let form = Form::new()
            .text("version", PROTO_VERSION)
            .text("withVet", "true")
            .text("body", source.to_string());

        let response = self
            .http
            .post(&url)
            .query(&[("backend", backend.unwrap_or(""))])
            .multipart(form)
            .send()
            .await?;
        let response = Self::raise_for_status(response).await?;

        let result = response.json::<CompileResult>().await?;
        debug!(
            build_failed = result.is_build_failure(),
            events = result.events().len(),
            "compile finished"
        );
        Ok(result)
    }

    /// Persist `source` in the remote share store and return the
    /// canonical share URL.
    ///
    /// The proxy answers with an opaque identifier as plain text;
    /// `go_version` is appended as a `?v=` query parameter when given.
    ///
    /// # Errors
    ///
    /// Same handling as [`GoplayProxy::compile`].
    #[instrument(skip(self, source), fields(bytes = source.len()))]
    pub async fn share(&self, source: &str, go_version: Option<&str>) -> Result<String> {
        let url = format!("{}/_/share", self.base_url);
        let response = self.http.post(&url).body(source.to_string()).send().await?;
        let response = Self::raise_for_status(response).await?;

        let id = response.text().await?;
        let url = share_url(id.trim_end(), go_version);
        debug!(%url, "snippet shared");
        Ok(url)
    }

    /// Turn a non-2xx response into a `RemoteService` error carrying
    /// the status phrase, suffixed with the body text when non-empty.
    async fn raise_for_status(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let phrase = status
            .canonical_reason()
            .unwrap_or_else(|| status.as_str())
            .to_string();
        let body = response.text().await.unwrap_or_default();
        Err(PlayError::remote(failure_message(&phrase, &body)))
    }
}

/// Build the canonical share URL for an identifier returned by the
/// remote store.
pub fn share_url(id: &str, go_version: Option<&str>) -> String {
    match go_version {
        Some(version) if !version.is_empty() => format!("{SHARE_BASE_URL}/{id}?v={version}"),
        _ => format!("{SHARE_BASE_URL}/{id}"),
    }
}

fn failure_message(phrase: &str, body: &str) -> String {
    if body.is_empty() {
        phrase.to_string()
    } else {
        format!("{phrase}: {body}")
    }
}
