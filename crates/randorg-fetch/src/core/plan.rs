use std::iter::FusedIterator;
use std::num::NonZeroUsize;

use crate::data::{ChunkSpec, RequestSpec};

/// Split a request into chunks no larger than `limit`.
///
/// Each step emits `min(remaining, limit)` integers and then takes a full
/// `limit` off the remaining count, so every chunk but the last is exactly
/// `limit` long. A request for zero integers yields no chunks.
///
/// # Examples
///
/// ```
/// use randorg_fetch::{RequestSpec, plan_chunks};
/// use std::num::NonZeroUsize;
///
/// let request = RequestSpec::new(0, 255, 25_000, NonZeroUsize::MIN).unwrap();
/// let sizes: Vec<_> = plan_chunks(&request, NonZeroUsize::new(10_000).unwrap())
///     .map(|chunk| chunk.num)
///     .collect();
/// assert_eq!(sizes, [10_000, 10_000, 5_000]);
/// ```
pub fn plan_chunks(request: &RequestSpec, limit: NonZeroUsize) -> ChunkPlan {
    ChunkPlan {
        remaining: request.count(),
        limit: limit.get(),
        min: request.min(),
        max: request.max(),
        columns: request.columns(),
    }
}

/// Iterator over the chunks of a [`RequestSpec`], in request order.
#[derive(Debug, Clone)]
pub struct ChunkPlan {
    remaining: usize,
    limit:     usize,
    min:       i64,
    max:       i64,
    columns:   NonZeroUsize,
}

impl Iterator for ChunkPlan {
    type Item = ChunkSpec;

    fn next(&mut self) -> Option<ChunkSpec> {
        if self.remaining == 0 {
            return None;
        }

        let num = self.remaining.min(self.limit);
        // Saturates at zero on the final, shorter chunk.
        self.remaining = self.remaining.saturating_sub(self.limit);

        Some(ChunkSpec {
            num,
            min: self.min,
            max: self.max,
            columns: self.columns,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.remaining.div_ceil(self.limit);
        (len, Some(len))
    }
}

impl ExactSizeIterator for ChunkPlan {}

impl FusedIterator for ChunkPlan {}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(count: usize) -> RequestSpec {
        RequestSpec::new(0, 255, count, NonZeroUsize::new(128).unwrap()).unwrap()
    }

    fn limit(n: usize) -> NonZeroUsize { NonZeroUsize::new(n).unwrap() }

    #[test]
    fn zero_count_has_no_chunks() {
        let plan = plan_chunks(&request(0), limit(10_000));
        assert_eq!(plan.len(), 0);
        assert_eq!(plan.count(), 0);
    }

    #[test]
    fn count_below_limit_is_one_chunk() {
        let chunks: Vec<_> = plan_chunks(&request(16_384 - 10_000), limit(10_000)).collect();
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].num, 6_384);
    }

    #[test]
    fn exact_multiple_of_limit() {
        let sizes: Vec<_> = plan_chunks(&request(20_000), limit(10_000))
            .map(|c| c.num)
            .collect();
        assert_eq!(sizes, [10_000, 10_000]);
    }

    #[test]
    fn remainder_goes_last() {
        let sizes: Vec<_> = plan_chunks(&request(25_000), limit(10_000))
            .map(|c| c.num)
            .collect();
        assert_eq!(sizes, [10_000, 10_000, 5_000]);
    }

    #[test]
    fn chunks_carry_request_bounds() {
        let request = RequestSpec::new(-3, 9, 5, NonZeroUsize::new(2).unwrap()).unwrap();
        for chunk in plan_chunks(&request, limit(2)) {
            assert_eq!(chunk.min, -3);
            assert_eq!(chunk.max, 9);
            assert_eq!(chunk.columns.get(), 2);
        }
    }

    #[test]
    fn sizes_sum_to_count_and_respect_limit() {
        for limit_value in [1, 2, 3, 7, 100, 10_000] {
            for count in [0, 1, 2, 6, 7, 8, 99, 100, 101, 12_345, 30_000] {
                let plan = plan_chunks(&request(count), limit(limit_value));
                let expected_len = count.div_ceil(limit_value);
                assert_eq!(plan.len(), expected_len, "count={count} limit={limit_value}");

                let sizes: Vec<_> = plan.map(|c| c.num).collect();
                assert_eq!(sizes.len(), expected_len);
                assert_eq!(sizes.iter().sum::<usize>(), count);
                assert!(sizes.iter().all(|&n| (1..=limit_value).contains(&n)));
            }
        }
    }

    #[test]
    fn size_hint_shrinks_as_chunks_are_taken() {
        let mut plan = plan_chunks(&request(25_000), limit(10_000));
        assert_eq!(plan.len(), 3);
        plan.next();
        assert_eq!(plan.len(), 2);
        plan.next();
        plan.next();
        assert_eq!(plan.len(), 0);
        assert!(plan.next().is_none());
    }
}
