/// State of a multi-chunk fetch, reported after each completed chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// Index of the chunk that just completed (0-based).
    pub chunk: usize,

    /// Total number of chunks in the plan.
    pub chunks: usize,

    /// Integers received so far across all chunks.
    pub received: usize,

    /// Integers requested in total.
    pub total: usize,
}

impl Progress {
    pub fn is_complete(&self) -> bool { self.received >= self.total }

    pub fn percentage(&self) -> f32 {
        if self.total == 0 {
            100.0
        } else {
            (self.received as f32 / self.total as f32) * 100.0
        }
    }
}
