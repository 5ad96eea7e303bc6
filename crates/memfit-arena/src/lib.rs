//! Chunk-partition allocator core for the memfit simulator.
//!
//! Simulates a user-space allocator over a single fixed-size arena.
//! The arena is never materialized as bytes — only its partition into
//! chunks is tracked.
//!
//! # Architecture
//!
//! ```text
//! Allocator (allocate / release / summary)
//! ├── Strategy (first / best / worst fit, via placement::select)
//! └── ChunkTable (ordered partition of [0, total_size))
//!     └── Chunk[] (free | allocated, exact tiling, no adjacent frees)
//! ```
//!
//! # Invariants
//!
//! After every operation the chunk table holds:
//!
//! - chunks are ordered by ascending start and exactly tile the arena;
//! - no two adjacent chunks are both free (restored by coalescing
//!   immediately after every release);
//! - at most one live allocation per id;
//! - the chunk count never exceeds the configured ceiling — an
//!   operation that would breach it fails cleanly, leaving the table
//!   untouched.
//!
//! Every failure is atomic: a denied request is a no-op on the table.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod allocator;
pub mod chunk;
pub mod config;
pub mod placement;
pub mod summary;
pub mod table;

pub use allocator::Allocator;
pub use chunk::{Chunk, ChunkState};
pub use config::AllocatorConfig;
pub use summary::{ChunkInfo, Summary};
pub use table::ChunkTable;
