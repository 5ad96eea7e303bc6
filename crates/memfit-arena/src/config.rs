//! Allocator configuration parameters.

use memfit_core::{ConfigError, Strategy};

/// Configuration for an [`Allocator`](crate::Allocator).
///
/// Validated at construction; all values are immutable for the
/// lifetime of the run.
#[derive(Clone, Debug)]
pub struct AllocatorConfig {
    /// Total arena size in bytes. Must be positive.
    pub total_size: usize,

    /// The placement strategy, fixed for the run.
    pub strategy: Strategy,

    /// Ceiling on the number of chunks the table may hold. Must be
    /// positive.
    ///
    /// Default: 100. An allocation whose split would breach this is
    /// denied with `CapacityExceeded` rather than corrupting the table.
    pub max_chunks: usize,

    /// Fixed per-allocation bookkeeping cost in bytes.
    ///
    /// Default: 16. Charged against the arena on every allocation but
    /// invisible to the requester's usable size: an allocation of `n`
    /// bytes consumes `n + block_overhead` bytes of arena, and the
    /// offset returned to the caller points just past the overhead.
    pub block_overhead: usize,
}

impl AllocatorConfig {
    /// Default chunk-count ceiling.
    pub const DEFAULT_MAX_CHUNKS: usize = 100;

    /// Default per-allocation bookkeeping overhead in bytes.
    pub const DEFAULT_BLOCK_OVERHEAD: usize = 16;

    /// Create a config with default capacity and overhead.
    pub fn new(total_size: usize, strategy: Strategy) -> Self {
        Self {
            total_size,
            strategy,
            max_chunks: Self::DEFAULT_MAX_CHUNKS,
            block_overhead: Self::DEFAULT_BLOCK_OVERHEAD,
        }
    }

    /// Check structural validity. Called by `Allocator::new`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.total_size == 0 {
            return Err(ConfigError::ZeroArenaSize);
        }
        if self.max_chunks == 0 {
            return Err(ConfigError::ZeroChunkCapacity);
        }
        Ok(())
    }
}
