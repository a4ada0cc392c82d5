use std::num::NonZeroUsize;

use crate::error::{Error, Result};

/// The overall set of integers a caller wants.
///
/// # Examples
///
/// ```
/// use randorg_fetch::RequestSpec;
/// use std::num::NonZeroUsize;
///
/// let request = RequestSpec::new(0, 255, 4, NonZeroUsize::new(2).unwrap()).unwrap();
/// assert_eq!(request.count(), 4);
///
/// assert!(RequestSpec::new(10, 1, 4, NonZeroUsize::MIN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestSpec {
    min:     i64,
    max:     i64,
    count:   usize,
    columns: NonZeroUsize,
}

impl RequestSpec {
    /// Describe `count` integers in `min..=max`, laid out `columns` per row.
    ///
    /// Fails with [`Error::InvalidRequest`] if `min > max`.
    pub fn new(min: i64, max: i64, count: usize, columns: NonZeroUsize) -> Result<Self> {
        if min > max {
            return Err(Error::InvalidRequest(format!(
                "min ({min}) is greater than max ({max})"
            )));
        }
        Ok(Self {
            min,
            max,
            count,
            columns,
        })
    }

    pub fn min(&self) -> i64 { self.min }

    pub fn max(&self) -> i64 { self.max }

    pub fn count(&self) -> usize { self.count }

    pub fn columns(&self) -> NonZeroUsize { self.columns }
}

/// One HTTP request's worth of a [`RequestSpec`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkSpec {
    /// Number of integers requested by this call.
    pub num:     usize,
    pub min:     i64,
    pub max:     i64,
    pub columns: NonZeroUsize,
}

impl ChunkSpec {
    pub const BASE: &'static str = "10";
    pub const FORMAT: &'static str = "plain";
    pub const RANDOMIZATION: &'static str = "new";

    /// Query parameters for this chunk in their canonical order.
    pub fn params(&self) -> [(&'static str, String); 7] {
        [
            ("num", self.num.to_string()),
            ("min", self.min.to_string()),
            ("max", self.max.to_string()),
            ("col", self.columns.to_string()),
            ("base", Self::BASE.to_string()),
            ("format", Self::FORMAT.to_string()),
            ("rnd", Self::RANDOMIZATION.to_string()),
        ]
    }
}
