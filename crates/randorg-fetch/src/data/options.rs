use std::fmt;
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::Duration;

use super::progress::Progress;

/// The random.org integer generator endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://www.random.org/integers/";

/// Maximum number of integers the service returns per request.
pub const DEFAULT_CHUNK_LIMIT: NonZeroUsize = match NonZeroUsize::new(10_000) {
    Some(limit) => limit,
    None => unreachable!(),
};

/// Connect and read timeout applied to every chunk.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// Configuration for random integer fetching.
///
/// # Examples
///
/// ```
/// use randorg_fetch::FetchOptions;
/// use std::time::Duration;
///
/// let options = FetchOptions::default()
///     .endpoint("http://localhost:8080/integers/")
///     .timeout(Duration::from_secs(10));
/// ```
#[derive(Clone)]
pub struct FetchOptions {
    /// Base URL the query string is appended to.
    ///
    /// Default: [`DEFAULT_ENDPOINT`]
    pub endpoint: String,

    /// Upper bound on a single chunk's HTTP exchange.
    ///
    /// A chunk that does not complete in time fails the whole call.
    ///
    /// Default: 120s
    pub timeout: Duration,

    /// Largest number of integers requested in one call.
    ///
    /// Default: 10000
    pub chunk_limit: NonZeroUsize,

    /// Progress callback invoked after each completed chunk.
    ///
    /// Default: None
    pub on_progress: Option<Arc<dyn Fn(&Progress) + Send + Sync>>,
}

impl fmt::Debug for FetchOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FetchOptions")
            .field("endpoint", &self.endpoint)
            .field("timeout", &self.timeout)
            .field("chunk_limit", &self.chunk_limit)
            .field("on_progress", &"{ ... }")
            .finish()
    }
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            endpoint:    DEFAULT_ENDPOINT.to_string(),
            timeout:     DEFAULT_TIMEOUT,
            chunk_limit: DEFAULT_CHUNK_LIMIT,
            on_progress: None,
        }
    }
}

impl FetchOptions {
    #[must_use]
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn chunk_limit(mut self, chunk_limit: NonZeroUsize) -> Self {
        self.chunk_limit = chunk_limit;
        self
    }

    /// Set the progress callback.
    ///
    /// # Examples
    ///
    /// ```
    /// use randorg_fetch::FetchOptions;
    /// use std::sync::Arc;
    ///
    /// let options = FetchOptions::default()
    ///     .on_progress(Arc::new(|progress| {
    ///         println!("chunk {}/{}", progress.chunk + 1, progress.chunks);
    ///     }));
    /// ```
    #[must_use]
    pub fn on_progress(mut self, on_progress: Arc<dyn Fn(&Progress) + Send + Sync>) -> Self {
        self.on_progress = Some(on_progress);
        self
    }
}
