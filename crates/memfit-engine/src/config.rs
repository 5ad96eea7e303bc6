//! Run configuration and validation.

use memfit_arena::AllocatorConfig;
use memfit_core::{ConfigError, Strategy};

/// How much trace output a run's report should carry.
///
/// Informational only: verbosity gates what the report renderer
/// prints, never what the allocator does.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Verbosity {
    /// Summary only.
    Quiet,
    /// One trace line per request, then the summary.
    #[default]
    Trace,
}

/// Configuration bundle for one run.
///
/// Validated by [`Run::new`](crate::Run::new); a run's configuration
/// never changes after initialization.
#[derive(Clone, Debug)]
pub struct RunConfig {
    /// Total arena size in bytes. Must be positive.
    pub total_size: usize,
    /// Placement strategy, fixed for the run.
    pub strategy: Strategy,
    /// Report verbosity.
    pub verbosity: Verbosity,
}

impl RunConfig {
    /// Create a config with default (trace) verbosity.
    pub fn new(total_size: usize, strategy: Strategy) -> Self {
        Self {
            total_size,
            strategy,
            verbosity: Verbosity::default(),
        }
    }

    /// Check structural validity.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.arena_config().validate()
    }

    /// The allocator configuration this run drives.
    pub fn arena_config(&self) -> AllocatorConfig {
        AllocatorConfig::new(self.total_size, self.strategy)
    }
}
