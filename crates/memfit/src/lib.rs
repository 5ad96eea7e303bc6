//! memfit: a fixed-arena allocation simulator comparing first-, best-,
//! and worst-fit placement.
//!
//! This is the top-level facade crate re-exporting the public API from
//! the memfit sub-crates. For most users, adding `memfit` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use memfit::prelude::*;
//!
//! let requests = memfit::script::parse_script(
//!     "alloc 1 100\nalloc 2 200\nfree 1\n".as_bytes(),
//! ).unwrap();
//!
//! let config = RunConfig::new(1000, Strategy::BestFit);
//! let report = run_requests(&config, requests).unwrap();
//!
//! assert_eq!(report.receipts[0].outcome, Outcome::Allocated { offset: 16 });
//! assert_eq!(report.summary.allocated_bytes, 216);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `memfit-core` | IDs, requests, strategies, errors |
//! | [`arena`] | `memfit-arena` | Chunk table, allocator, summary |
//! | [`script`] | `memfit-script` | Action-script reader and writer |
//! | [`engine`] | `memfit-engine` | Run driver, metrics, reporting |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types: ids, requests, strategies, and the error taxonomy.
pub mod types {
    pub use memfit_core::*;
}

/// The chunk-partition allocator core.
pub mod arena {
    pub use memfit_arena::*;
}

/// Action-script parsing and serialization.
pub mod script {
    pub use memfit_script::*;
}

/// The run driver: sessions, receipts, metrics, and report rendering.
pub mod engine {
    pub use memfit_engine::*;
}

/// The types most runs need, importable in one line.
pub mod prelude {
    pub use memfit_arena::{Allocator, AllocatorConfig, Summary};
    pub use memfit_core::{AllocError, ConfigError, ReleaseError, Request, RequestId, Strategy};
    pub use memfit_engine::{
        run_requests, FragmentationMetrics, Outcome, Receipt, Run, RunConfig, RunReport,
    };
}
