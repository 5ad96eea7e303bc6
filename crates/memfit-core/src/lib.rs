//! Core types and errors for the memfit allocation simulator.
//!
//! This crate defines the shared vocabulary used by every other memfit
//! crate: strongly-typed request identifiers, the [`Request`] type fed
//! to the allocator, the [`Strategy`] selection rule, and the error
//! taxonomy. It has no dependencies and no behavior of its own — the
//! allocation semantics live in `memfit-arena`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;
pub mod request;
pub mod strategy;

pub use error::{AllocError, ConfigError, ReleaseError};
pub use id::RequestId;
pub use request::Request;
pub use strategy::Strategy;
