//! Error types for randorg-fetch.

use std::num::ParseIntError;
use std::str::Utf8Error;
use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("transport failed on chunk {chunk}: {source}")]
    Transport {
        chunk:  usize,
        #[source]
        source: TransportError,
    },

    #[error(transparent)]
    Encoding(#[from] EncodingError),

    #[error("malformed response for chunk {chunk}: {source}")]
    Parse {
        chunk:  usize,
        #[source]
        source: ParseError,
    },

    #[error("failed to build HTTP client: {0}")]
    Client(String),
}

/// Failure of a single HTTP exchange.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    #[error("unexpected HTTP status {0}")]
    Status(u16),

    #[error("network error: {0}")]
    Network(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("cannot encode query parameter {key:?}: {source}")]
pub struct EncodingError {
    pub key:    String,
    #[source]
    pub source: Utf8Error,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("line {line}: {token:?} is not a base-10 integer")]
    InvalidToken {
        line:   usize,
        token:  String,
        #[source]
        source: ParseIntError,
    },

    #[error("expected {expected} integers, got {actual}")]
    CountMismatch { expected: usize, actual: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
