use std::future::Future;
use std::time::Duration;

/// Status and body of a completed HTTP GET.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body:   String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// A `200 OK` response with the given body.
    pub fn ok(body: impl Into<String>) -> Self { Self::new(200, body) }
}

/// Asynchronous HTTP client abstraction.
///
/// This trait provides the minimal interface needed to talk to the random
/// integer service. Implementations handle their own connection setup,
/// TLS and redirect following.
///
/// # Implementations
///
/// - [`ReqwestClient`]: Production implementation using `reqwest`
/// - Stub implementations for testing
pub trait HttpClient: Send + Sync {
    /// Error type for HTTP operations.
    type Error: std::error::Error + Send + 'static;

    /// Send a GET request without a body and read the whole response.
    ///
    /// # Arguments
    ///
    /// * `url` - The URL to fetch, query string included
    /// * `timeout` - Bound on connecting and reading the response
    ///
    /// # Errors
    ///
    /// Returns an error if the exchange fails (DNS failure, connection error,
    /// timeout, undecodable body). A non-2xx status is not an error at this
    /// level; it is returned in [`HttpResponse::status`].
    fn get(
        &self,
        url: &str,
        timeout: Duration,
    ) -> impl Future<Output = std::result::Result<HttpResponse, Self::Error>> + Send;
}

#[cfg(feature = "reqwest")]
mod reqwest_impl {
    use super::*;
    use crate::data::options::DEFAULT_TIMEOUT;
    use crate::error::{Error, Result};

    /// Production HTTP client implementation using reqwest.
    #[derive(Debug, Clone)]
    pub struct ReqwestClient {
        client: reqwest::Client,
    }

    impl ReqwestClient {
        /// Create a new ReqwestClient with the default 120s connect timeout.
        pub fn new() -> Result<Self> { Self::with_connect_timeout(DEFAULT_TIMEOUT) }

        pub fn with_connect_timeout(connect_timeout: Duration) -> Result<Self> {
            let client = reqwest::Client::builder()
                .connect_timeout(connect_timeout)
                .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
                .build()
                .map_err(|e| Error::Client(e.to_string()))?;
            Ok(Self { client })
        }
    }

    impl HttpClient for ReqwestClient {
        type Error = reqwest::Error;

        async fn get(
            &self,
            url: &str,
            timeout: Duration,
        ) -> std::result::Result<HttpResponse, Self::Error> {
            let response = self.client.get(url).timeout(timeout).send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;

            Ok(HttpResponse { status, body })
        }
    }
}

#[cfg(feature = "reqwest")]
pub use reqwest_impl::ReqwestClient;
