//! I/O operations for random integer fetching.
//!
//! The network is reached only through the [`HttpClient`] trait; the
//! [`Fetcher`] drives the pure planning, encoding and parsing functions from
//! [`crate::core`] around it.

mod fetcher;
mod http;

pub use fetcher::Fetcher;
pub use http::{HttpClient, HttpResponse};

#[cfg(feature = "reqwest")]
pub use fetcher::get_rand_ints;
#[cfg(feature = "reqwest")]
pub use http::ReqwestClient;
