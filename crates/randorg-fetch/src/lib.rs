//! Chunked fetching of true random integers from random.org.
//!
//! # Architecture
//!
//! This crate follows the three-layer pattern:
//! - [`data`] - Immutable request and configuration types
//! - [`core`] - Pure transformations (chunk planning, query encoding, response parsing)
//! - [`effects`] - I/O operations with trait abstraction
//!
//! # Key Features
//!
//! - **Chunked**: Requests larger than the service's per-call limit are split
//!   into several calls and reassembled in order
//! - **Sequential**: One chunk in flight at a time, bounded by a per-chunk timeout
//! - **Explicit failures**: Transport, encoding and parse failures surface as
//!   distinct [`Error`] variants; a failed call never yields a partial list
//!
//! # Example
//!
//! ```no_run
//! use randorg_fetch::{Fetcher, ReqwestClient, RequestSpec};
//! use std::num::NonZeroUsize;
//!
//! # async fn run() -> randorg_fetch::Result<()> {
//! let request = RequestSpec::new(0, 255, 128 * 128, NonZeroUsize::new(128).unwrap())?;
//! let fetcher = Fetcher::new(ReqwestClient::new()?);
//! let ints = fetcher.fetch(&request).await?;
//! assert_eq!(ints.len(), 128 * 128);
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod data;
mod effects;
mod error;

pub use self::core::{ChunkPlan, chunk_url, encode_query, is_success, parse_response, plan_chunks};
pub use data::{ChunkSpec, FetchOptions, Progress, RequestSpec};
pub use effects::{Fetcher, HttpClient, HttpResponse};

#[cfg(feature = "reqwest")]
pub use effects::{ReqwestClient, get_rand_ints};

pub use error::{EncodingError, Error, ParseError, Result, TransportError};
