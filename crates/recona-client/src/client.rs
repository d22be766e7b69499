//! Main Recona API client implementation.

use std::sync::Arc;
use std::time::Duration;

use recona_core::{ReconaError, Result, Search, SearchPage, SearchRequest};
use reqwest::{Client as HttpClient, Method, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::api::*;
use crate::limiter::RateLimiter;
use crate::transport;

/// The Recona API base URL
const DEFAULT_BASE_URL: &str = "https://api.recona.io";

/// Default request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Default rate limit in requests per second
const DEFAULT_REQUESTS_PER_SEC: f64 = 10.0;

/// Default burst capacity for the rate limiter
const DEFAULT_BURST_SIZE: u32 = 2;

/// Records fetched per page during exhaustive search
const SEARCH_PAGE_SIZE: usize = 100;

/// Safety ceiling on records one exhaustive search will collect
const SEARCH_MAX_RESULTS: usize = 10_000;

/// Main Recona API client.
///
/// Cloning is cheap and clones share one connection pool and one
/// rate-limit budget. Separate clients (one per credential, say) are
/// fully independent.
#[derive(Clone, Debug)]
pub struct ReconaClient {
    inner: Arc<ClientInner>,
}

#[derive(Debug)]
struct ClientInner {
    http: HttpClient,
    token: String,
    base_url: String,
    limiter: RateLimiter,
    timeout: Duration,
}

impl ReconaClient {
    /// Create a new client with the given API token using default settings
    pub fn new(token: impl Into<String>) -> Result<Self> {
        ReconaClientBuilder::new(token).build()
    }

    /// Create a builder for custom configuration
    #[must_use]
    pub fn builder(token: impl Into<String>) -> ReconaClientBuilder {
        ReconaClientBuilder::new(token)
    }

    /// Access domain endpoints
    #[must_use]
    pub fn domains(&self) -> DomainsApi<'_> {
        DomainsApi::new(self)
    }

    /// Access host endpoints
    #[must_use]
    pub fn hosts(&self) -> HostsApi<'_> {
        HostsApi::new(self)
    }

    /// Access certificate endpoints
    #[must_use]
    pub fn certificates(&self) -> CertificatesApi<'_> {
        CertificatesApi::new(self)
    }

    /// Access CVE and CWE endpoints
    #[must_use]
    pub fn cves(&self) -> CvesApi<'_> {
        CvesApi::new(self)
    }

    /// Access autonomous system endpoints
    #[must_use]
    pub fn autonomous_systems(&self) -> AutonomousSystemsApi<'_> {
        AutonomousSystemsApi::new(self)
    }

    /// Access account endpoints
    #[must_use]
    pub fn account(&self) -> AccountApi<'_> {
        AccountApi::new(self)
    }

    /// Replace the rate limit at runtime.
    ///
    /// Applies immediately to subsequent admissions without draining
    /// in-flight calls. Non-positive values fail validation and leave
    /// the previous configuration intact.
    pub async fn set_rate_limit(&self, requests_per_sec: f64, burst_size: u32) -> Result<()> {
        self.inner.limiter.reconfigure(requests_per_sec, burst_size).await
    }

    /// Current rate limit as (requests per second, burst size)
    pub async fn rate_limit(&self) -> (f64, u32) {
        self.inner.limiter.config().await
    }

    /// Perform one rate-limited, authenticated request.
    ///
    /// Blocks on token-bucket admission first; the wait is bounded by
    /// the configured timeout and fails with
    /// [`ReconaError::AdmissionCancelled`] when it elapses. On
    /// admission the call is handed to the transport exactly once and
    /// its classified result returned unchanged.
    pub(crate) async fn request<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Response> {
        tokio::time::timeout(self.inner.timeout, self.inner.limiter.acquire())
            .await
            .map_err(|_| ReconaError::AdmissionCancelled)?;

        let url = format!("{}{}", self.inner.base_url, path);
        debug!(method = %method, url = %url, "API request");

        transport::send(&self.inner.http, method, &url, &self.inner.token, body).await
    }

    /// Perform a GET request and decode the JSON response
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.request(Method::GET, path, None::<&()>).await?;
        Self::decode(response).await
    }

    /// Perform a POST request with a JSON body and decode the response
    pub(crate) async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let response = self.request(Method::POST, path, Some(body)).await?;
        Self::decode(response).await
    }

    /// Exhaustively page through a search endpoint, concatenating
    /// results in server order.
    ///
    /// Pages are fetched strictly serially at increasing offsets, 100
    /// records at a time, up to a hard cap of 10 000 collected records.
    /// An empty page or a short page ends the walk. A failed page
    /// aborts the whole aggregation: the error is annotated with the
    /// offset of the failing page and no partial results are returned.
    ///
    /// A short page is always treated as the last one even when the
    /// server's reported total suggests otherwise, so a backend that
    /// clamps page sizes below the requested limit will under-collect.
    pub(crate) async fn search_all<P>(&self, path: &str, base: Search) -> Result<Vec<P::Item>>
    where
        P: SearchPage + DeserializeOwned,
    {
        let mut collected: Vec<P::Item> = Vec::new();
        let mut offset = 0usize;

        while offset < SEARCH_MAX_RESULTS {
            // Never request past the cap.
            let limit = SEARCH_PAGE_SIZE.min(SEARCH_MAX_RESULTS - offset);

            let request = SearchRequest {
                search: base.clone(),
                pagination: recona_core::Pagination {
                    limit: limit as u32,
                    offset: offset as u32,
                },
            };

            let page: P = self
                .post(path, &request)
                .await
                .map_err(|e| ReconaError::Search {
                    offset,
                    source: Box::new(e),
                })?;

            let items = page.into_items();
            if items.is_empty() {
                break;
            }

            let returned = items.len();
            collected.extend(items);
            offset += returned;

            // A short page signals the end of the data.
            if returned < limit {
                break;
            }
        }

        Ok(collected)
    }

    /// Decode a successful response body as JSON
    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
        let body = response
            .text()
            .await
            .map_err(|e| ReconaError::Transport(e.to_string()))?;
        serde_json::from_str(&body).map_err(ReconaError::Decoding)
    }
}

/// Builder for configuring a [`ReconaClient`]
pub struct ReconaClientBuilder {
    token: String,
    base_url: String,
    timeout: Duration,
    requests_per_sec: f64,
    burst_size: u32,
}

impl ReconaClientBuilder {
    /// Create a new builder with the given API token
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            requests_per_sec: DEFAULT_REQUESTS_PER_SEC,
            burst_size: DEFAULT_BURST_SIZE,
        }
    }

    /// Set the base URL (useful for testing)
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the request timeout, which also bounds the rate-limit wait
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the steady request rate in requests per second
    #[must_use]
    pub const fn requests_per_sec(mut self, rate: f64) -> Self {
        self.requests_per_sec = rate;
        self
    }

    /// Set the burst capacity of the rate limiter
    #[must_use]
    pub const fn burst_size(mut self, burst: u32) -> Self {
        self.burst_size = burst;
        self
    }

    /// Build the client
    pub fn build(self) -> Result<ReconaClient> {
        if self.token.is_empty() {
            return Err(ReconaError::Config("token is required".to_string()));
        }
        if self.requests_per_sec <= 0.0 || !self.requests_per_sec.is_finite() {
            return Err(ReconaError::Config(format!(
                "requests per second must be positive, got: {}",
                self.requests_per_sec
            )));
        }
        if self.burst_size == 0 {
            return Err(ReconaError::Config(
                "burst size must be positive, got: 0".to_string(),
            ));
        }
        url::Url::parse(&self.base_url)
            .map_err(|e| ReconaError::Config(format!("invalid base URL {}: {e}", self.base_url)))?;

        let http = HttpClient::builder()
            .timeout(self.timeout)
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(90))
            .gzip(true)
            .build()
            .map_err(|e| ReconaError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(ReconaClient {
            inner: Arc::new(ClientInner {
                http,
                token: self.token,
                base_url: self.base_url,
                limiter: RateLimiter::new(self.requests_per_sec, self.burst_size),
                timeout: self.timeout,
            }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_rejects_empty_token() {
        let err = ReconaClient::new("").unwrap_err();
        assert!(matches!(err, ReconaError::Config(_)));
    }

    #[test]
    fn build_rejects_non_positive_rate() {
        let err = ReconaClient::builder("token")
            .requests_per_sec(0.0)
            .build()
            .unwrap_err();
        assert!(matches!(err, ReconaError::Config(_)));

        let err = ReconaClient::builder("token")
            .burst_size(0)
            .build()
            .unwrap_err();
        assert!(matches!(err, ReconaError::Config(_)));
    }

    #[test]
    fn build_rejects_invalid_base_url() {
        let err = ReconaClient::builder("token")
            .base_url("not a url")
            .build()
            .unwrap_err();
        assert!(matches!(err, ReconaError::Config(_)));
    }

    #[tokio::test]
    async fn defaults_match_documented_configuration() {
        let client = ReconaClient::new("token").unwrap();
        assert_eq!(client.rate_limit().await, (10.0, 2));
    }

    #[tokio::test]
    async fn set_rate_limit_validates_and_applies() {
        let client = ReconaClient::new("token").unwrap();

        assert!(client.set_rate_limit(0.0, 5).await.is_err());
        assert!(client.set_rate_limit(5.0, 0).await.is_err());
        assert_eq!(client.rate_limit().await, (10.0, 2));

        client.set_rate_limit(25.0, 5).await.unwrap();
        assert_eq!(client.rate_limit().await, (25.0, 5));
    }
}
