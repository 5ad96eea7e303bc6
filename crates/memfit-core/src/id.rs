//! Strongly-typed request identifiers.

use std::fmt;

/// Identifies an allocation request within a run.
///
/// Ids are chosen by the script author, not allocated by the simulator.
/// At most one *live* allocation may carry a given id at a time; once
/// released, the id may be reused by a later request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(pub u32);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for RequestId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}
