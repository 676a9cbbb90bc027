//! Reqwest-backed catalog source adapter.
//!
//! This adapter owns transport details only: endpoint construction, the
//! per-attempt timeout, bounded retries, and JSON decoding. Upstream status
//! fields are passed through untouched for the domain to interpret.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde_json::{Value, json};
use tracing::{Instrument, Span, debug, info_span, warn};

use crate::domain::ports::CatalogSource;
use crate::domain::{
    CallOutcome, CatalogKey, CatalogPayload, RetryPolicy, RetrySleeper, Retryable, TokioSleeper,
    retry,
};

/// Catalog used when no base URL is configured.
pub const DEFAULT_CATALOG_BASE_URL: &str = "http://openlibrary.org";

const DEFAULT_USER_AGENT: &str = "wishlist-backend/0.1";
const EDITION_TYPE: &str = "/type/edition";

/// Errors raised while constructing the adapter.
#[derive(Debug, thiserror::Error)]
pub enum CatalogClientError {
    /// The base URL cannot carry path segments.
    #[error("catalog base URL cannot be used as a base: {url}")]
    InvalidBaseUrl { url: String },
    /// The reqwest client could not be built.
    #[error("failed to build catalog HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Failure of a single HTTP attempt.
#[derive(Debug, thiserror::Error)]
enum AttemptError {
    #[error("request timed out: {0}")]
    Timeout(String),
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("unexpected status {0}")]
    Status(String),
    #[error("invalid catalog JSON payload: {0}")]
    Decode(String),
}

impl Retryable for AttemptError {
    fn is_retryable(&self) -> bool {
        !matches!(self, Self::Decode(_))
    }
}

/// Catalog source adapter performing HTTP GET requests.
pub struct OpenLibraryHttpSource {
    client: Client,
    detail_endpoint: Url,
    search_endpoint: Url,
    policy: RetryPolicy,
    sleeper: Arc<dyn RetrySleeper>,
    span: Span,
}

impl OpenLibraryHttpSource {
    /// Build an adapter rooted at `base_url` with a per-attempt timeout.
    ///
    /// Retries follow [`RetryPolicy::default`] until overridden.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogClientError`] when `base_url` cannot be extended with
    /// API paths or the reqwest client cannot be constructed.
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, CatalogClientError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(DEFAULT_USER_AGENT)
            .build()?;
        Ok(Self {
            client,
            detail_endpoint: endpoint(&base_url, &["api", "get"])?,
            search_endpoint: endpoint(&base_url, &["api", "things"])?,
            policy: RetryPolicy::default(),
            sleeper: Arc::new(TokioSleeper),
            span: info_span!("catalog_client"),
        })
    }

    /// Override the retry policy.
    pub fn with_retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Override how the adapter pauses between attempts.
    pub fn with_sleeper(mut self, sleeper: Arc<dyn RetrySleeper>) -> Self {
        self.sleeper = sleeper;
        self
    }

    /// Replace the log context this adapter records its events under.
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    async fn call(&self, url: Url) -> CallOutcome {
        let result = retry(&self.policy, self.sleeper.as_ref(), |attempt| {
            let url = url.clone();
            async move {
                debug!(attempt, url = %url, "calling catalog");
                self.attempt(url).await.inspect_err(|error| {
                    warn!(attempt, %error, "catalog attempt failed");
                })
            }
        })
        .await;

        match result {
            Ok(body) => CallOutcome::Success(CatalogPayload::new(body)),
            Err(AttemptError::Decode(_)) => CallOutcome::FatalError,
            Err(_) => CallOutcome::RecoverableFailure,
        }
    }

    async fn attempt(&self, url: Url) -> Result<Value, AttemptError> {
        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }

        serde_json::from_slice(body.as_ref())
            .map_err(|error| AttemptError::Decode(error.to_string()))
    }
}

#[async_trait]
impl CatalogSource for OpenLibraryHttpSource {
    async fn fetch_by_key(&self, key: &CatalogKey) -> CallOutcome {
        let url = with_query(&self.detail_endpoint, "key", key.as_str());
        self.call(url).instrument(self.span.clone()).await
    }

    async fn search_by_title(&self, title: &str) -> CallOutcome {
        let url = with_query(&self.search_endpoint, "query", &title_query(title));
        self.call(url).instrument(self.span.clone()).await
    }
}

fn endpoint(base: &Url, segments: &[&str]) -> Result<Url, CatalogClientError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|()| CatalogClientError::InvalidBaseUrl {
            url: base.to_string(),
        })?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

fn with_query(endpoint: &Url, name: &str, value: &str) -> Url {
    let mut url = endpoint.clone();
    url.query_pairs_mut().append_pair(name, value);
    url
}

fn title_query(title: &str) -> String {
    json!({ "title~": title, "type": EDITION_TYPE }).to_string()
}

fn map_transport_error(error: reqwest::Error) -> AttemptError {
    if error.is_timeout() {
        AttemptError::Timeout(error.to_string())
    } else {
        AttemptError::Transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> AttemptError {
    let body_preview = body_preview(body);
    if body_preview.is_empty() {
        AttemptError::Status(status.as_u16().to_string())
    } else {
        AttemptError::Status(format!("{}: {}", status.as_u16(), body_preview))
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
