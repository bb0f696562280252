//! HTTP client for the upstream JSON APIs.

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Configuration for the fetch client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Request timeout, covering connect, send and body download.
    pub timeout: Duration,
    /// Connection timeout.
    pub connect_timeout: Duration,
    /// User agent string.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            user_agent: format!("macroetl/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Returns a configuration with the given request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Errors that can occur while fetching upstream data.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The request could not be sent or the connection failed.
    #[error("HTTP error for {url}: {source}")]
    Http {
        /// Requested URL.
        url: String,
        /// The underlying client error.
        source: reqwest::Error,
    },

    /// The request exceeded the configured timeout.
    #[error("Request to {url} timed out after {seconds}s")]
    Timeout {
        /// Requested URL.
        url: String,
        /// Configured timeout in seconds.
        seconds: u64,
    },

    /// Server returned a non-success status.
    #[error("Server returned {status} for {url}")]
    Status {
        /// Requested URL.
        url: String,
        /// HTTP status code.
        status: u16,
    },

    /// The response body was not the expected JSON.
    #[error("Invalid JSON from {url}: {source}")]
    Decode {
        /// Requested URL.
        url: String,
        /// The underlying decode error.
        source: reqwest::Error,
    },

    /// A URL could not be built from the configured endpoint.
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl {
        /// The rejected URL.
        url: String,
        /// Parser message.
        reason: String,
    },

    /// A setting needed for this request is missing.
    #[error("{0} is not configured")]
    NotConfigured(&'static str),
}

/// HTTP client issuing single-shot JSON GET requests.
#[derive(Debug, Clone)]
pub struct FetchClient {
    client: Client,
    config: ClientConfig,
}

impl FetchClient {
    /// Creates a new fetch client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent)
            .gzip(true)
            .build()?;
        Ok(Self { client, config })
    }

    /// Creates a client with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults() -> Result<Self, reqwest::Error> {
        Self::new(ClientConfig::default())
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Fetches `url` and decodes the body as JSON.
    ///
    /// The request is attempted exactly once.
    ///
    /// # Errors
    ///
    /// Returns an error on connection failure, timeout, non-2xx status, or a
    /// body that does not decode into `T`.
    pub async fn get_json<T: DeserializeOwned>(&self, url: &Url) -> Result<T, FetchError> {
        debug!(%url, "GET");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| self.classify(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.json::<T>().await.map_err(|e| {
            if e.is_decode() {
                FetchError::Decode {
                    url: url.to_string(),
                    source: e,
                }
            } else {
                self.classify(url, e)
            }
        })
    }

    fn classify(&self, url: &Url, error: reqwest::Error) -> FetchError {
        if error.is_timeout() {
            FetchError::Timeout {
                url: url.to_string(),
                seconds: self.config.timeout.as_secs(),
            }
        } else {
            FetchError::Http {
                url: url.to_string(),
                source: error,
            }
        }
    }
}
