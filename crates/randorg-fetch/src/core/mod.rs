//! Pure transformations for random integer fetching.
//!
//! This module contains the functions that transform data without
//! performing I/O: splitting a request into service-sized chunks,
//! encoding a chunk as a query string, and parsing the plain-text body
//! the service answers with.

mod parse;
mod plan;
mod query;
mod validation;

pub use parse::parse_response;
pub use plan::{ChunkPlan, plan_chunks};
pub use query::{chunk_url, encode_query};
pub use validation::is_success;
