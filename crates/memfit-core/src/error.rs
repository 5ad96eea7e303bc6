//! Error types for the memfit simulator.
//!
//! Organized by subsystem: configuration (fatal at initialization),
//! allocation, and release. Allocation and release failures are
//! expected, recoverable outcomes — the run reports them and continues.

use std::error::Error;
use std::fmt;

use crate::id::RequestId;

/// Errors that abort initialization. No run occurs after one of these.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The arena size is zero. An empty arena cannot satisfy anything.
    ZeroArenaSize,
    /// The chunk-count ceiling is zero. A table must at least hold the
    /// initial free chunk spanning the arena.
    ZeroChunkCapacity,
    /// The strategy token is not one of `first`, `best`, `worst`.
    UnknownStrategy {
        /// The unrecognized token.
        name: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroArenaSize => write!(f, "arena size must be positive"),
            Self::ZeroChunkCapacity => write!(f, "chunk capacity must be positive"),
            Self::UnknownStrategy { name } => {
                write!(f, "unknown fit strategy '{name}' (expected first, best, or worst)")
            }
        }
    }
}

impl Error for ConfigError {}

/// Why an allocation request was denied.
///
/// None of these abort the run, and none leave the chunk table
/// modified — a failed allocation is a no-op on the arena.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AllocError {
    /// The size is unsatisfiable by construction: zero bytes, or so
    /// large that adding the bookkeeping overhead overflows `usize`.
    InvalidRequest {
        /// The offending size.
        size: usize,
    },
    /// An allocation with this id is still live.
    DuplicateId {
        /// The id already in use.
        id: RequestId,
    },
    /// No free chunk is large enough for the request plus overhead.
    NoFit {
        /// Bytes needed, inclusive of bookkeeping overhead.
        requested: usize,
    },
    /// Splitting would push the chunk table past its capacity.
    CapacityExceeded {
        /// The table's chunk-count ceiling.
        max_chunks: usize,
    },
}

impl fmt::Display for AllocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRequest { size } => {
                write!(f, "invalid allocation size {size}")
            }
            Self::DuplicateId { id } => {
                write!(f, "allocation id {id} is already live")
            }
            Self::NoFit { requested } => {
                write!(f, "no free chunk can hold {requested} bytes")
            }
            Self::CapacityExceeded { max_chunks } => {
                write!(f, "chunk table full ({max_chunks} chunks)")
            }
        }
    }
}

impl Error for AllocError {}

/// Why a release request was denied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReleaseError {
    /// No live allocation carries this id.
    NotFound {
        /// The id that was not found.
        id: RequestId,
    },
}

impl fmt::Display for ReleaseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { id } => write!(f, "no live allocation with id {id}"),
        }
    }
}

impl Error for ReleaseError {}
