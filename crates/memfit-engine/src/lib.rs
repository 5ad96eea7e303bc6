//! Run driver and reporting for the memfit allocation simulator.
//!
//! The engine owns everything the allocator core treats as external:
//! it feeds one request at a time to the
//! [`Allocator`](memfit_arena::Allocator), collects a structured
//! [`Receipt`] per request, tracks the set of still-live allocations,
//! and renders the human-readable trace and end-of-run summary.
//!
//! # Quick start
//!
//! ```
//! use memfit_core::Strategy;
//! use memfit_engine::{run_requests, Outcome, RunConfig};
//! use memfit_script::parse_script;
//!
//! let requests = parse_script("alloc 1 100\nfree 1\n".as_bytes()).unwrap();
//! let config = RunConfig::new(1000, Strategy::FirstFit);
//! let report = run_requests(&config, requests).unwrap();
//!
//! assert_eq!(report.requests_processed, 2);
//! assert!(matches!(report.receipts[0].outcome, Outcome::Allocated { offset: 16 }));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod metrics;
pub mod report;
pub mod run;

pub use config::{RunConfig, Verbosity};
pub use metrics::FragmentationMetrics;
pub use report::write_report;
pub use run::{run_requests, Outcome, Receipt, Run, RunReport};
