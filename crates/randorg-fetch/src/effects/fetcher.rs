use tracing::{debug, info, warn};

use crate::core::{chunk_url, is_success, parse_response, plan_chunks};
use crate::data::{ChunkSpec, FetchOptions, Progress, RequestSpec};
use crate::effects::http::HttpClient;
use crate::error::{Error, ParseError, Result, TransportError};

/// Fetches random integers, one service-sized chunk at a time.
pub struct Fetcher<C: HttpClient> {
    client:  C,
    options: FetchOptions,
}

impl<C: HttpClient> Fetcher<C> {
    /// Create a new fetcher with the provided HTTP client and default options.
    pub fn new(client: C) -> Self {
        Self {
            client,
            options: FetchOptions::default(),
        }
    }

    pub fn with_options(mut self, options: FetchOptions) -> Self {
        self.options = options;
        self
    }

    /// Fetch every integer described by `request`.
    ///
    /// Chunks are requested strictly in plan order and the result holds
    /// exactly `request.count()` integers in the order the service emitted
    /// them. The first failing chunk aborts the call; integers already
    /// received are discarded.
    pub async fn fetch(&self, request: &RequestSpec) -> Result<Vec<i64>> {
        let plan = plan_chunks(request, self.options.chunk_limit);
        let chunks = plan.len();
        // Reserve at most one chunk up front.
        let mut ints = Vec::with_capacity(request.count().min(self.options.chunk_limit.get()));

        for (index, chunk) in plan.enumerate() {
            let url = chunk_url(&self.options.endpoint, &chunk)?;
            debug!(chunk = index, chunks, num = chunk.num, %url, "requesting chunk");

            let body = self.get(index, &url).await?;
            let values = Self::parse_chunk(&chunk, &body).map_err(|source| {
                warn!(chunk = index, error = %source, "malformed response");
                Error::Parse {
                    chunk: index,
                    source,
                }
            })?;
            ints.extend(values);

            self.report_progress(Progress {
                chunk: index,
                chunks,
                received: ints.len(),
                total: request.count(),
            });
        }

        info!(count = ints.len(), chunks, "fetched random integers");
        Ok(ints)
    }

    async fn get(&self, chunk: usize, url: &str) -> Result<String> {
        let timeout = self.options.timeout;

        let response = match tokio::time::timeout(timeout, self.client.get(url, timeout)).await {
            Ok(Ok(response)) => Ok(response),
            Ok(Err(e)) => Err(Self::map_error(e)),
            Err(_) => Err(TransportError::Timeout(timeout)),
        };

        let response = response.and_then(|response| {
            debug!(chunk, status = response.status, "response status");
            if is_success(response.status) {
                Ok(response)
            } else {
                Err(TransportError::Status(response.status))
            }
        });

        match response {
            Ok(response) => Ok(response.body),
            Err(source) => {
                warn!(chunk, error = %source, "chunk request failed");
                Err(Error::Transport { chunk, source })
            }
        }
    }

    fn parse_chunk(chunk: &ChunkSpec, body: &str) -> std::result::Result<Vec<i64>, ParseError> {
        let values = parse_response(body)?;
        if values.len() != chunk.num {
            return Err(ParseError::CountMismatch {
                expected: chunk.num,
                actual:   values.len(),
            });
        }
        Ok(values)
    }

    fn map_error<E: std::error::Error + Send + 'static>(e: E) -> TransportError {
        TransportError::Network(e.to_string())
    }

    /// Report progress if callback is configured.
    fn report_progress(&self, progress: Progress) {
        if let Some(ref callback) = self.options.on_progress {
            callback(&progress);
        }
    }
}

/// Fetch `count` integers in `min..=max` from random.org with default options.
///
/// Rows are `columns` wide on the wire; the result is flat and row-major.
#[cfg(feature = "reqwest")]
pub async fn get_rand_ints(min: i64, max: i64, count: usize, columns: usize) -> Result<Vec<i64>> {
    let columns = std::num::NonZeroUsize::new(columns)
        .ok_or_else(|| Error::InvalidRequest("columns must be at least 1".to_string()))?;
    let request = RequestSpec::new(min, max, count, columns)?;

    let client = crate::effects::http::ReqwestClient::new()?;
    Fetcher::new(client).fetch(&request).await
}
