//! The run session: one request at a time against one allocator.

use indexmap::IndexMap;

use memfit_arena::{Allocator, Summary};
use memfit_core::{AllocError, ConfigError, ReleaseError, Request, RequestId, Strategy};

use crate::config::RunConfig;

/// What happened to one request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The allocation succeeded at this caller-visible offset.
    Allocated {
        /// Offset returned to the requester (past the overhead region).
        offset: usize,
    },
    /// The release succeeded, freeing this caller-visible offset.
    Freed {
        /// The offset originally returned by the matching allocation.
        offset: usize,
    },
    /// The allocation was denied. The run continues.
    AllocFailed(AllocError),
    /// The release was denied. The run continues.
    FreeFailed(ReleaseError),
}

impl Outcome {
    /// Whether the request succeeded.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Allocated { .. } | Self::Freed { .. })
    }
}

/// The record of one processed request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Receipt {
    /// Zero-based position of the request within the run.
    pub index: u64,
    /// The request as fed to the allocator.
    pub request: Request,
    /// What the allocator did with it.
    pub outcome: Outcome,
}

/// Everything a completed run produced.
#[derive(Clone, Debug, PartialEq)]
pub struct RunReport {
    /// The strategy the run used.
    pub strategy: Strategy,
    /// Per-request receipts, in request order.
    pub receipts: Vec<Receipt>,
    /// Final snapshot of the arena partition.
    pub summary: Summary,
    /// Allocations still live at end of run, in allocation order:
    /// `(id, caller-visible offset)`.
    pub outstanding: Vec<(RequestId, usize)>,
    /// Total requests processed, successes and failures alike.
    pub requests_processed: u64,
}

/// A run in progress.
///
/// Feeds requests to an owned [`Allocator`] one at a time — each
/// request is fully processed, with all table invariants restored,
/// before the next is accepted. The session also keeps a ledger of
/// live allocations in insertion order, which becomes the leak report
/// at the end of the run.
pub struct Run {
    allocator: Allocator,
    outstanding: IndexMap<RequestId, usize>,
    receipts: Vec<Receipt>,
}

impl Run {
    /// Validate the configuration and initialize the arena.
    pub fn new(config: &RunConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            allocator: Allocator::new(config.arena_config())?,
            outstanding: IndexMap::new(),
            receipts: Vec::new(),
        })
    }

    /// Process one request and record its receipt.
    pub fn apply(&mut self, request: Request) -> &Receipt {
        let outcome = match request {
            Request::Allocate { id, size } => match self.allocator.allocate(id, size) {
                Ok(offset) => {
                    self.outstanding.insert(id, offset);
                    Outcome::Allocated { offset }
                }
                Err(e) => Outcome::AllocFailed(e),
            },
            Request::Release { id } => match self.allocator.release(id) {
                Ok(offset) => {
                    self.outstanding.shift_remove(&id);
                    Outcome::Freed { offset }
                }
                Err(e) => Outcome::FreeFailed(e),
            },
        };
        self.receipts.push(Receipt {
            index: self.receipts.len() as u64,
            request,
            outcome,
        });
        // Just pushed, so the vector is non-empty.
        self.receipts.last().unwrap()
    }

    /// The allocator driving this run.
    pub fn allocator(&self) -> &Allocator {
        &self.allocator
    }

    /// Live allocations in allocation order.
    pub fn outstanding(&self) -> impl Iterator<Item = (RequestId, usize)> + '_ {
        self.outstanding.iter().map(|(id, offset)| (*id, *offset))
    }

    /// Finish the run, producing the report.
    pub fn finish(self) -> RunReport {
        RunReport {
            strategy: self.allocator.strategy(),
            summary: self.allocator.summary(),
            outstanding: self
                .outstanding
                .iter()
                .map(|(id, offset)| (*id, *offset))
                .collect(),
            requests_processed: self.allocator.requests_processed(),
            receipts: self.receipts,
        }
    }
}

/// Run a whole request sequence to completion.
///
/// Recoverable failures (denied allocations, unknown releases) are
/// recorded in their receipts and the run continues; only an invalid
/// configuration aborts before processing anything.
pub fn run_requests(
    config: &RunConfig,
    requests: impl IntoIterator<Item = Request>,
) -> Result<RunReport, ConfigError> {
    let mut run = Run::new(config)?;
    for request in requests {
        run.apply(request);
    }
    Ok(run.finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alloc(id: u32, size: usize) -> Request {
        Request::Allocate {
            id: RequestId(id),
            size,
        }
    }

    fn free(id: u32) -> Request {
        Request::Release { id: RequestId(id) }
    }

    #[test]
    fn receipts_preserve_request_order() {
        let config = RunConfig::new(1000, Strategy::FirstFit);
        let report = run_requests(&config, vec![alloc(1, 100), free(9), alloc(2, 50)]).unwrap();
        assert_eq!(report.receipts.len(), 3);
        assert_eq!(report.receipts[0].index, 0);
        assert_eq!(report.receipts[1].index, 1);
        assert!(matches!(
            report.receipts[1].outcome,
            Outcome::FreeFailed(ReleaseError::NotFound { .. })
        ));
        assert_eq!(report.requests_processed, 3);
    }

    #[test]
    fn failed_requests_do_not_stop_the_run() {
        let config = RunConfig::new(200, Strategy::BestFit);
        let report = run_requests(
            &config,
            vec![alloc(1, 1000), alloc(2, 100), free(3), free(2)],
        )
        .unwrap();
        assert!(!report.receipts[0].outcome.is_success());
        assert!(report.receipts[1].outcome.is_success());
        assert!(!report.receipts[2].outcome.is_success());
        assert!(report.receipts[3].outcome.is_success());
    }

    #[test]
    fn outstanding_tracks_leaks_in_allocation_order() {
        let config = RunConfig::new(1000, Strategy::FirstFit);
        let report = run_requests(
            &config,
            vec![alloc(5, 10), alloc(3, 10), alloc(8, 10), free(3)],
        )
        .unwrap();
        let ids: Vec<u32> = report.outstanding.iter().map(|(id, _)| id.0).collect();
        assert_eq!(ids, vec![5, 8]);
    }

    #[test]
    fn outstanding_offsets_match_receipts() {
        let config = RunConfig::new(1000, Strategy::FirstFit);
        let report = run_requests(&config, vec![alloc(1, 100), alloc(2, 100)]).unwrap();
        for (id, offset) in &report.outstanding {
            let matching = report.receipts.iter().find(|r| r.request.id() == *id);
            assert_eq!(
                matching.map(|r| &r.outcome),
                Some(&Outcome::Allocated { offset: *offset })
            );
        }
    }

    #[test]
    fn zero_arena_aborts_before_processing() {
        let config = RunConfig::new(0, Strategy::WorstFit);
        assert!(run_requests(&config, vec![alloc(1, 10)]).is_err());
    }
}
