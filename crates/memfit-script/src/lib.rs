//! Action-script parsing and serialization for the memfit simulator.
//!
//! A script is a line-oriented text file describing the request
//! sequence a run feeds to the allocator:
//!
//! ```text
//! # comment lines and blank lines are skipped
//! alloc <id> <size>
//! free <id>
//! ```
//!
//! [`ScriptReader`] streams requests from any `BufRead` source;
//! [`parse_script`] collects a whole script at once;
//! [`write_script`] serializes a request slice back to the same
//! format, round-tripping exactly.
//!
//! Parsing rejects malformed input (negative or non-numeric fields,
//! unknown directives, wrong arity) with a line-numbered
//! [`ScriptError`] — the allocator core only ever sees well-formed
//! [`Request`](memfit_core::Request) values.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod reader;
pub mod writer;

pub use error::ScriptError;
pub use reader::{parse_script, Requests, ScriptReader};
pub use writer::write_script;
