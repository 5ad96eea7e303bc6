//! A single chunk of the partitioned arena.

use memfit_core::RequestId;

/// Whether a chunk is free or owned by a live allocation.
///
/// The owner id is only representable while the chunk is allocated, so
/// "owner meaningful only when allocated" holds by construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChunkState {
    /// Available for allocation.
    Free,
    /// Owned by the live allocation with this id.
    Allocated(RequestId),
}

/// A maximal contiguous byte range of the arena treated as one unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Chunk {
    /// Offset from the arena base, in bytes.
    pub start: usize,
    /// Length in bytes. Always positive inside a valid table.
    pub size: usize,
    /// Free or allocated-with-owner.
    pub state: ChunkState,
}

impl Chunk {
    /// One past the last byte of this chunk.
    pub fn end(&self) -> usize {
        self.start + self.size
    }

    /// Whether this chunk is available for allocation.
    pub fn is_free(&self) -> bool {
        matches!(self.state, ChunkState::Free)
    }

    /// The owning request id, if the chunk is allocated.
    pub fn owner(&self) -> Option<RequestId> {
        match self.state {
            ChunkState::Free => None,
            ChunkState::Allocated(id) => Some(id),
        }
    }
}
