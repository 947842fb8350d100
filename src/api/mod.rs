//! Backend HTTP client.
//!
//! Typed wrappers for every `/api/*` endpoint, grouped by resource. All calls share
//! one cookie jar so the admin session credential set by the backend is attached to
//! later privileged requests.

mod admin;
mod calls;
mod offers;

use std::sync::Arc;
use std::time::Duration;

use reqwest::cookie::Jar;
use reqwest::{RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;

use crate::auth::AdminHint;
use crate::config::Config;
use crate::errors::{ClientError, ClientResult};

/// Client for the Skrymi backend.
///
/// Cheap to clone: clones share the connection pool and the cookie jar.
#[derive(Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: Url,
    jar: Arc<Jar>,
    request_timeout: Duration,
}

impl BackendClient {
    /// Build a client for the configured backend.
    pub fn new(config: &Config) -> ClientResult<Self> {
        let jar = Arc::new(Jar::default());
        let http = reqwest::Client::builder()
            .cookie_provider(jar.clone())
            .build()?;

        Ok(Self {
            http,
            base_url: config.backend_url.clone(),
            jar,
            request_timeout: config.request_timeout,
        })
    }

    /// Display-only admin flag backed by this client's cookie jar.
    pub fn admin_hint(&self) -> AdminHint {
        AdminHint::new(self.jar.clone(), self.base_url.clone())
    }

    /// Resolve an `/api/...` path against the base URL, keeping any base path prefix.
    fn url(&self, path: &str) -> ClientResult<Url> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Url::parse(&format!("{base}{path}"))
            .map_err(|e| ClientError::InvalidInput(format!("Invalid URL for {path}: {e}")))
    }

    /// `path` followed by one escaped `segment`, so ids cannot reach another route.
    fn segment_url(&self, path: &str, segment: &str) -> ClientResult<Url> {
        let mut url = self.url(path)?;
        url.path_segments_mut()
            .map_err(|()| ClientError::InvalidInput(format!("Cannot extend {path} with a segment")))?
            .push(segment);
        Ok(url)
    }

    /// Send a bounded request and turn non-success statuses into errors.
    async fn send(&self, request: RequestBuilder) -> ClientResult<Response> {
        let response = request.timeout(self.request_timeout).send().await?;
        ensure_success(response).await
    }

    /// Send a request whose response body is irrelevant.
    async fn send_status(&self, request: RequestBuilder) -> ClientResult<()> {
        self.send(request).await.map(|_| ())
    }

    /// Send a request and decode its JSON body.
    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> ClientResult<T> {
        let response = self.send(request).await?;
        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }
}

/// Map a non-success response to [`ClientError::Status`], keeping a body excerpt.
async fn ensure_success(response: Response) -> ClientResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ClientError::status(status, &body))
}
