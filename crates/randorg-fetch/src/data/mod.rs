//! Immutable data types for random integer fetching.
//!
//! This module contains the request description, the per-call chunk derived
//! from it, and the configuration and progress types used by the fetcher.
//! These types are immutable and designed to be passed between functions
//! without mutation.

pub mod options;
pub mod progress;
pub mod request;

pub use options::FetchOptions;
pub use progress::Progress;
pub use request::{ChunkSpec, RequestSpec};
