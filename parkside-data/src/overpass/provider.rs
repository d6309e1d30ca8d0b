//! HTTP-based `FeatureSource` using the Overpass API.
//!
//! This module provides [`HttpOverpassSource`], an implementation of the
//! [`FeatureSource`] trait that POSTs an Overpass QL query and normalises the
//! JSON response.
//!
//! # Architecture
//!
//! The [`FeatureSource`] trait is synchronous to keep the core library
//! embeddable in synchronous contexts. This source bridges the async HTTP
//! call to the sync interface by blocking on a Tokio runtime internally.

use std::time::Duration;

use log::debug;
use parkside_core::{FeatureSource, FetchError, SearchArea, TaggedPoint};
use reqwest::Client;
use thiserror::Error;
use tokio::runtime::{Handle, Runtime, RuntimeFlavor};

use super::query::build_query;
use crate::parse_response;

/// Error type for [`HttpOverpassSource`] construction failures.
#[derive(Debug, Error)]
pub enum SourceBuildError {
    /// Failed to build the HTTP client.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
    /// Failed to build the Tokio runtime.
    #[error("failed to build Tokio runtime: {0}")]
    Runtime(#[source] std::io::Error),
}

/// Public Overpass interpreter used when no endpoint is configured.
pub const DEFAULT_ENDPOINT: &str = "https://overpass-api.de/api/interpreter";

/// Default user agent for Overpass requests.
pub const DEFAULT_USER_AGENT: &str = "parkside/0.1";

/// Default client-side request timeout in seconds.
///
/// Slightly longer than the server-side query timeout so the server's own
/// timeout response can arrive.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for [`HttpOverpassSource`].
#[derive(Debug, Clone)]
pub struct HttpOverpassSourceConfig {
    /// Overpass interpreter URL.
    pub endpoint: String,
    /// Request timeout duration.
    pub timeout: Duration,
    /// User agent string for requests.
    pub user_agent: String,
}

impl Default for HttpOverpassSourceConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

impl HttpOverpassSourceConfig {
    /// Create a new configuration with the given endpoint.
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Default::default()
        }
    }

    /// Set the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// HTTP feature source backed by an Overpass interpreter.
///
/// # Runtime behaviour
///
/// When called from outside any Tokio runtime, the source uses its own
/// stored runtime. When called from within a multi-threaded Tokio runtime it
/// uses that runtime's handle with [`tokio::task::block_in_place`]. Inside a
/// `current_thread` runtime, which cannot be blocked in place, the request
/// runs on the stored runtime from a scoped worker thread while the calling
/// thread waits for it.
///
/// The stored runtime is shut down in the background on drop, so the source
/// may be dropped from async code.
///
/// The source does not retry. Failures surface as [`FetchError`] so the
/// caller can report them and offer a retry.
pub struct HttpOverpassSource {
    client: Client,
    config: HttpOverpassSourceConfig,
    // Only `None` while dropping.
    runtime: Option<Runtime>,
}

impl std::fmt::Debug for HttpOverpassSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpOverpassSource")
            .field("client", &self.client)
            .field("config", &self.config)
            .field("runtime", &"<tokio::runtime::Runtime>")
            .finish()
    }
}

impl HttpOverpassSource {
    /// Create a new source with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or Tokio runtime fails to build.
    pub fn new(endpoint: impl Into<String>) -> Result<Self, SourceBuildError> {
        Self::with_config(HttpOverpassSourceConfig::new(endpoint))
    }

    /// Create a new source with explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or Tokio runtime fails to build.
    pub fn with_config(config: HttpOverpassSourceConfig) -> Result<Self, SourceBuildError> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .connect_timeout(config.timeout)
            .timeout(config.timeout)
            .build()
            .map_err(SourceBuildError::HttpClient)?;
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(SourceBuildError::Runtime)?;
        Ok(Self {
            client,
            config,
            runtime: Some(runtime),
        })
    }

    /// The configuration this source was built with.
    #[must_use]
    pub const fn config(&self) -> &HttpOverpassSourceConfig {
        &self.config
    }

    /// Fetch and normalise the features around `area` asynchronously.
    async fn fetch_async(&self, area: &SearchArea) -> Result<Vec<TaggedPoint>, FetchError> {
        let url = self.config.endpoint.as_str();
        let query = build_query(area.center, area.radius_m);
        debug!("posting {} byte Overpass query to {url}", query.len());

        let response = self
            .client
            .post(url)
            .header(reqwest::header::CONTENT_TYPE, "text/plain; charset=utf-8")
            .body(query)
            .send()
            .await
            .map_err(|err| self.convert_reqwest_error(&err, url))?
            .error_for_status()
            .map_err(|err| self.convert_reqwest_error(&err, url))?;

        let body = response
            .text()
            .await
            .map_err(|err| self.convert_reqwest_error(&err, url))?;

        parse_response(&body)
    }

    /// Convert a reqwest error to a `FetchError`.
    fn convert_reqwest_error(&self, error: &reqwest::Error, url: &str) -> FetchError {
        if error.is_timeout() {
            return FetchError::Timeout {
                url: url.to_owned(),
                timeout_secs: self.config.timeout.as_secs(),
            };
        }

        if let Some(status) = error.status() {
            return FetchError::Http {
                url: url.to_owned(),
                status: status.as_u16(),
                message: error.to_string(),
            };
        }

        if error.is_decode() {
            return FetchError::Parse {
                message: error.to_string(),
            };
        }

        FetchError::Network {
            url: url.to_owned(),
            message: error.to_string(),
        }
    }
}

impl FeatureSource for HttpOverpassSource {
    /// Fetch the features around `area`.
    ///
    /// # Runtime requirements
    ///
    /// Safe to call from synchronous code and from either Tokio runtime
    /// flavour. Inside a `current_thread` runtime the calling task is blocked
    /// until the request completes, so other tasks on that runtime stall for
    /// the duration.
    fn fetch(&self, area: &SearchArea) -> Result<Vec<TaggedPoint>, FetchError> {
        match Handle::try_current() {
            Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
                tokio::task::block_in_place(|| handle.block_on(self.fetch_async(area)))
            }
            Ok(_) => std::thread::scope(|scope| {
                scope
                    .spawn(|| self.fetch_on_own_runtime(area))
                    .join()
                    .unwrap_or_else(|_| Err(self.worker_failed()))
            }),
            Err(_) => self.fetch_on_own_runtime(area),
        }
    }
}

impl HttpOverpassSource {
    fn fetch_on_own_runtime(&self, area: &SearchArea) -> Result<Vec<TaggedPoint>, FetchError> {
        match &self.runtime {
            Some(runtime) => runtime.block_on(self.fetch_async(area)),
            None => Err(self.worker_failed()),
        }
    }

    fn worker_failed(&self) -> FetchError {
        FetchError::Network {
            url: self.config.endpoint.clone(),
            message: "request worker stopped before completing".to_owned(),
        }
    }
}

impl Drop for HttpOverpassSource {
    fn drop(&mut self) {
        if let Some(runtime) = self.runtime.take() {
            runtime.shutdown_background();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn config_builder_pattern() {
        let config = HttpOverpassSourceConfig::new("http://overpass.example.com/api/interpreter")
            .with_timeout(Duration::from_secs(60))
            .with_user_agent("test-agent/1.0");

        assert_eq!(
            config.endpoint,
            "http://overpass.example.com/api/interpreter"
        );
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert_eq!(config.user_agent, "test-agent/1.0");
    }

    #[rstest]
    fn default_config_targets_public_interpreter() {
        let config = HttpOverpassSourceConfig::default();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert!(config.timeout.as_secs() > u64::from(crate::QUERY_TIMEOUT_SECS));
    }

    #[rstest]
    fn source_keeps_its_configuration() {
        let source = HttpOverpassSource::new("http://localhost:12345/api/interpreter")
            .expect("source should build");
        assert_eq!(
            source.config().endpoint,
            "http://localhost:12345/api/interpreter"
        );
    }

    // Port 9 (discard) on localhost is expected to refuse connections; a
    // configured system proxy may answer with an HTTP error instead.
    fn unreachable_source() -> HttpOverpassSource {
        HttpOverpassSource::with_config(
            HttpOverpassSourceConfig::new("http://127.0.0.1:9/api/interpreter")
                .with_timeout(Duration::from_secs(2)),
        )
        .expect("source should build")
    }

    fn assert_transport_error(result: Result<Vec<TaggedPoint>, FetchError>) {
        let err = result.expect_err("nothing listens on port 9");
        assert!(
            matches!(
                err,
                FetchError::Network { .. } | FetchError::Timeout { .. } | FetchError::Http { .. }
            ),
            "expected a transport error, got {err:?}"
        );
    }

    #[rstest]
    fn unreachable_endpoint_reports_network_error() {
        let source = unreachable_source();
        let area = SearchArea::new(59.9139, 10.7522, 500.0).expect("valid area");

        assert_transport_error(source.fetch(&area));
    }

    #[tokio::test]
    async fn fetch_inside_current_thread_runtime_reports_error() {
        let source = unreachable_source();
        let area = SearchArea::new(59.9139, 10.7522, 500.0).expect("valid area");

        assert_transport_error(source.fetch(&area));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn fetch_inside_multi_thread_runtime_reports_error() {
        let source = unreachable_source();
        let area = SearchArea::new(59.9139, 10.7522, 500.0).expect("valid area");

        assert_transport_error(source.fetch(&area));
    }
}
