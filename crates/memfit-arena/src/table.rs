//! The ordered chunk table tiling the arena.

use memfit_core::{AllocError, ConfigError, ReleaseError, RequestId};

use crate::chunk::{Chunk, ChunkState};

/// An ordered partition of the arena into contiguous chunks.
///
/// The table owns the tiling invariant: chunks are kept in ascending
/// start order, the first chunk starts at zero, each chunk ends where
/// the next begins, and the last chunk ends at the arena size. It is
/// mutated only through [`split`](ChunkTable::split),
/// [`mark_free`](ChunkTable::mark_free), and
/// [`coalesce`](ChunkTable::coalesce); the [`Allocator`](crate::Allocator)
/// is its sole client.
///
/// Storage is a `Vec` with in-order insertion and removal. The chunk
/// count is bounded by a fixed ceiling; a split that would breach it
/// fails with `CapacityExceeded` before any mutation.
#[derive(Clone, Debug)]
pub struct ChunkTable {
    chunks: Vec<Chunk>,
    total_size: usize,
    max_chunks: usize,
}

impl ChunkTable {
    /// Create a table holding one free chunk spanning the whole arena.
    ///
    /// `max_chunks` must be positive: the table must at least hold its
    /// initial chunk.
    pub fn new(total_size: usize, max_chunks: usize) -> Result<Self, ConfigError> {
        if total_size == 0 {
            return Err(ConfigError::ZeroArenaSize);
        }
        if max_chunks == 0 {
            return Err(ConfigError::ZeroChunkCapacity);
        }
        let table = Self {
            chunks: vec![Chunk {
                start: 0,
                size: total_size,
                state: ChunkState::Free,
            }],
            total_size,
            max_chunks,
        };
        Ok(table)
    }

    /// Total arena size in bytes.
    pub fn total_size(&self) -> usize {
        self.total_size
    }

    /// Number of chunks currently in the table.
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// The chunk-count ceiling.
    pub fn max_chunks(&self) -> usize {
        self.max_chunks
    }

    /// All chunks in ascending start order.
    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    /// Lazy iterator over `(index, chunk)` for currently free chunks,
    /// in ascending start order. Restartable: each call scans afresh.
    pub fn free_chunks(&self) -> impl Iterator<Item = (usize, &Chunk)> {
        self.chunks
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_free())
    }

    /// Bytes currently allocated, inclusive of bookkeeping overhead.
    pub fn allocated_bytes(&self) -> usize {
        self.chunks
            .iter()
            .filter(|c| !c.is_free())
            .map(|c| c.size)
            .sum()
    }

    /// Bytes currently free.
    pub fn free_bytes(&self) -> usize {
        self.chunks
            .iter()
            .filter(|c| c.is_free())
            .map(|c| c.size)
            .sum()
    }

    /// Carve an allocation of `total_size` bytes out of the free chunk
    /// at `index`, marking it owned by `owner`.
    ///
    /// If the chunk is strictly larger than `total_size`, a new free
    /// chunk covering the remainder is inserted immediately after,
    /// preserving order. This is the only place chunks are created.
    ///
    /// Fails with `CapacityExceeded` — before any mutation — if the
    /// remainder insertion would push the table past its ceiling.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds, the chunk is not free, or
    /// its size is below `total_size`. Callers select candidates via
    /// [`free_chunks`](ChunkTable::free_chunks), which rules all of
    /// these out.
    pub fn split(
        &mut self,
        index: usize,
        total_size: usize,
        owner: RequestId,
    ) -> Result<(), AllocError> {
        let chunk = self.chunks[index];
        assert!(chunk.is_free(), "split target must be free");
        assert!(chunk.size >= total_size, "split target too small");

        let remainder = chunk.size - total_size;
        if remainder > 0 && self.chunks.len() >= self.max_chunks {
            return Err(AllocError::CapacityExceeded {
                max_chunks: self.max_chunks,
            });
        }

        self.chunks[index].size = total_size;
        self.chunks[index].state = ChunkState::Allocated(owner);
        if remainder > 0 {
            self.chunks.insert(
                index + 1,
                Chunk {
                    start: chunk.start + total_size,
                    size: remainder,
                    state: ChunkState::Free,
                },
            );
        }
        self.debug_validate();
        Ok(())
    }

    /// Mark the allocated chunk owned by `id` free, returning its
    /// start offset. Linear scan; ids are not indexed here.
    ///
    /// Does not coalesce — callers invoke
    /// [`coalesce`](ChunkTable::coalesce) afterwards.
    pub fn mark_free(&mut self, id: RequestId) -> Result<usize, ReleaseError> {
        for chunk in &mut self.chunks {
            if chunk.owner() == Some(id) {
                chunk.state = ChunkState::Free;
                return Ok(chunk.start);
            }
        }
        Err(ReleaseError::NotFound { id })
    }

    /// Merge every maximal run of adjacent free chunks into one.
    ///
    /// Single left-to-right pass; idempotent — a second call in a row
    /// changes nothing. After this returns, no two adjacent chunks are
    /// both free.
    pub fn coalesce(&mut self) {
        let mut i = 0;
        while i + 1 < self.chunks.len() {
            if self.chunks[i].is_free() && self.chunks[i + 1].is_free() {
                self.chunks[i].size += self.chunks[i + 1].size;
                self.chunks.remove(i + 1);
            } else {
                i += 1;
            }
        }
        self.debug_validate();
    }

    /// Debug-build check that the table exactly tiles the arena.
    fn debug_validate(&self) {
        debug_assert!(!self.chunks.is_empty());
        debug_assert_eq!(self.chunks[0].start, 0);
        debug_assert!(self.chunks.windows(2).all(|w| w[0].end() == w[1].start));
        debug_assert_eq!(
            self.chunks.last().map(Chunk::end),
            Some(self.total_size)
        );
        debug_assert!(self.chunks.iter().all(|c| c.size > 0));
        debug_assert!(self.chunks.len() <= self.max_chunks);
    }
}
