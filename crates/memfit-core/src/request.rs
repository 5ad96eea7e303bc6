//! The unit of work fed to the allocator.

use crate::id::RequestId;

/// A single scripted action against the arena.
///
/// Requests arrive already parsed and validated for shape — the core
/// never sees raw text. Sizes are the caller's usable byte count,
/// exclusive of the per-allocation bookkeeping overhead the allocator
/// charges internally.
///
/// # Examples
///
/// ```
/// use memfit_core::{Request, RequestId};
///
/// let alloc = Request::Allocate { id: RequestId(1), size: 100 };
/// let free = Request::Release { id: RequestId(1) };
///
/// assert!(matches!(alloc, Request::Allocate { .. }));
/// assert!(matches!(free, Request::Release { .. }));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Request {
    /// Reserve `size` usable bytes under `id`.
    Allocate {
        /// Identifier for the new allocation.
        id: RequestId,
        /// Usable bytes requested, exclusive of bookkeeping overhead.
        size: usize,
    },
    /// Release the allocation previously made under `id`.
    Release {
        /// Identifier of the allocation to release.
        id: RequestId,
    },
}

impl Request {
    /// The id this request targets, regardless of variant.
    pub fn id(&self) -> RequestId {
        match self {
            Self::Allocate { id, .. } | Self::Release { id } => *id,
        }
    }
}
