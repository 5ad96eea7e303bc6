//! Allocate/release semantics over the chunk table.

use memfit_core::{AllocError, ConfigError, ReleaseError, RequestId, Strategy};

use crate::config::AllocatorConfig;
use crate::placement;
use crate::summary::{ChunkInfo, Summary};
use crate::table::ChunkTable;

/// A simulated allocator over one fixed-size arena.
///
/// Owns its [`ChunkTable`] exclusively; all interaction with the table
/// goes through [`allocate`](Allocator::allocate),
/// [`release`](Allocator::release), and
/// [`summary`](Allocator::summary). One request is fully processed —
/// invariants restored — before the next is accepted; a denied request
/// leaves the table bit-for-bit unchanged.
///
/// # Example
///
/// ```
/// use memfit_arena::{Allocator, AllocatorConfig};
/// use memfit_core::{RequestId, Strategy};
///
/// let mut alloc = Allocator::new(AllocatorConfig::new(1000, Strategy::FirstFit)).unwrap();
/// let offset = alloc.allocate(RequestId(1), 100).unwrap();
/// assert_eq!(offset, 16); // start 0 + 16 bytes of bookkeeping overhead
/// assert_eq!(alloc.release(RequestId(1)).unwrap(), offset);
/// ```
pub struct Allocator {
    table: ChunkTable,
    strategy: Strategy,
    block_overhead: usize,
    requests_processed: u64,
}

impl Allocator {
    /// Create an allocator from a validated configuration.
    ///
    /// The table starts as a single free chunk spanning the arena.
    pub fn new(config: AllocatorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            table: ChunkTable::new(config.total_size, config.max_chunks)?,
            strategy: config.strategy,
            block_overhead: config.block_overhead,
            requests_processed: 0,
        })
    }

    /// The placement strategy this allocator runs under.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// The per-allocation bookkeeping overhead in bytes.
    pub fn block_overhead(&self) -> usize {
        self.block_overhead
    }

    /// Number of requests processed so far, successful or not.
    pub fn requests_processed(&self) -> u64 {
        self.requests_processed
    }

    /// Reserve `size` usable bytes under `id`.
    ///
    /// Charges `size + block_overhead` against the arena and returns
    /// the offset just past the overhead region — the address the
    /// caller would receive from a real allocator.
    ///
    /// # Errors
    ///
    /// - `InvalidRequest` for a zero size, or one so large that
    ///   charging the overhead overflows `usize`;
    /// - `DuplicateId` if `id` is already live;
    /// - `NoFit` when no free chunk can hold the request — a normal,
    ///   expected outcome under fragmentation;
    /// - `CapacityExceeded` when splitting would breach the chunk
    ///   ceiling; the allocation is denied as a whole.
    pub fn allocate(&mut self, id: RequestId, size: usize) -> Result<usize, AllocError> {
        self.requests_processed += 1;
        if size == 0 {
            return Err(AllocError::InvalidRequest { size });
        }
        if self.table.chunks().iter().any(|c| c.owner() == Some(id)) {
            return Err(AllocError::DuplicateId { id });
        }
        let total_size = size
            .checked_add(self.block_overhead)
            .ok_or(AllocError::InvalidRequest { size })?;
        let index = placement::select(&self.table, self.strategy, total_size)
            .ok_or(AllocError::NoFit {
                requested: total_size,
            })?;
        self.table.split(index, total_size, id)?;
        Ok(self.table.chunks()[index].start + self.block_overhead)
    }

    /// Release the allocation made under `id`.
    ///
    /// Coalesces adjacent free chunks unconditionally afterwards and
    /// returns the offset originally handed out by the corresponding
    /// [`allocate`](Allocator::allocate).
    pub fn release(&mut self, id: RequestId) -> Result<usize, ReleaseError> {
        self.requests_processed += 1;
        let start = self.table.mark_free(id)?;
        self.table.coalesce();
        Ok(start + self.block_overhead)
    }

    /// Read-only snapshot of the table for end-of-run reporting.
    pub fn summary(&self) -> Summary {
        Summary {
            chunk_count: self.table.chunk_count(),
            total_size: self.table.total_size(),
            allocated_bytes: self.table.allocated_bytes(),
            free_bytes: self.table.free_bytes(),
            block_overhead: self.block_overhead,
            chunks: self
                .table
                .chunks()
                .iter()
                .map(|c| ChunkInfo {
                    start: c.start,
                    size: c.size,
                    allocated: !c.is_free(),
                })
                .collect(),
        }
    }

    /// Direct read access to the table, for tests and metrics.
    pub fn table(&self) -> &ChunkTable {
        &self.table
    }
}
