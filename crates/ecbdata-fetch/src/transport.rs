//! Transport port and its default reqwest-backed implementation.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;

/// Errors that can occur while talking to the data API.
#[derive(Error, Debug)]
pub enum TransportError {
    /// The HTTP request itself failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a status outside `200..=299`.
    #[error("unexpected response status {status} for {url}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// The requested URL.
        url: String,
    },
}

/// A decoded HTTP response.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body decoded to text.
    pub body: String,
}

/// Port for issuing a single HTTP GET.
///
/// The fetch pipeline needs nothing else from HTTP: one GET, the status code
/// and the body decoded to text. Implementations own all timeout and
/// cancellation policy. Callers construct one implementation and pass it to
/// [`EcbClient`](crate::EcbClient); there is no process-wide default
/// instance.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Issues a GET for `url` with the given request headers.
    ///
    /// # Errors
    ///
    /// Returns an error on connection or decoding failure. A non-success
    /// status is *not* an error at this level; the pipeline checks the range
    /// itself.
    async fn get(
        &self,
        url: &str,
        headers: &[(&str, &str)],
    ) -> Result<TransportResponse, TransportError>;
}

#[async_trait]
impl<T: HttpTransport + ?Sized> HttpTransport for std::sync::Arc<T> {
    async fn get(
        &self,
        url: &str,
        headers: &[(&str, &str)],
    ) -> Result<TransportResponse, TransportError> {
        (**self).get(url, headers).await
    }
}

/// Configuration for [`ReqwestTransport`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Request timeout.
    pub timeout: Duration,
    /// Connection timeout (separate from the request timeout).
    pub connect_timeout: Duration,
    /// User agent string.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(60),
            connect_timeout: Duration::from_secs(10),
            user_agent: format!("ecbdata/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Default [`HttpTransport`] backed by a pooled reqwest client.
///
/// The client is cheap to clone and safe to share across tasks; each fetch
/// issues exactly one request, with no retries.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Creates a transport with the given configuration.
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
        Ok(Self { client })
    }

    /// Creates a transport with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults() -> Result<Self, reqwest::Error> {
        Self::new(ClientConfig::default())
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(
        &self,
        url: &str,
        headers: &[(&str, &str)],
    ) -> Result<TransportResponse, TransportError> {
        let mut request = self.client.get(url);
        for (name, value) in headers {
            request = request.header(*name, *value);
        }
        let response = request.send().await?;
        let status = response.status().as_u16();
        // text() decodes per the response charset, defaulting to UTF-8.
        let body = response.text().await?;
        Ok(TransportResponse { status, body })
    }
}
