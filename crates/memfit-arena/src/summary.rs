//! Read-only end-of-run snapshot of the chunk table.

/// One chunk as reported to the driver.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChunkInfo {
    /// Offset from the arena base, in bytes.
    pub start: usize,
    /// Length in bytes.
    pub size: usize,
    /// Whether the chunk is owned by a live allocation.
    pub allocated: bool,
}

/// Snapshot of the arena's partition for end-of-run reporting.
///
/// Produced by [`Allocator::summary`](crate::Allocator::summary); a
/// plain value with no ties back to the table, so the driver may hold
/// it as long as it likes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Summary {
    /// Number of chunks in the table.
    pub chunk_count: usize,
    /// Total arena size in bytes.
    pub total_size: usize,
    /// Bytes owned by live allocations, overhead included.
    pub allocated_bytes: usize,
    /// Bytes free.
    pub free_bytes: usize,
    /// The per-allocation bookkeeping overhead the run was charged.
    pub block_overhead: usize,
    /// Every chunk, in ascending start order.
    pub chunks: Vec<ChunkInfo>,
}

impl Summary {
    /// Size of the largest free chunk, or zero if none is free.
    pub fn largest_free_chunk(&self) -> usize {
        self.chunks
            .iter()
            .filter(|c| !c.allocated)
            .map(|c| c.size)
            .max()
            .unwrap_or(0)
    }

    /// Number of free chunks.
    pub fn free_chunk_count(&self) -> usize {
        self.chunks.iter().filter(|c| !c.allocated).count()
    }
}
