//! Fragmentation measurements over a run summary.

use memfit_arena::Summary;

/// How fragmented the arena's free space is.
///
/// The quantity this simulator exists to observe: the same request
/// stream under different strategies produces visibly different
/// numbers here.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FragmentationMetrics {
    /// Number of distinct free chunks.
    pub free_chunks: usize,
    /// Size of the largest free chunk in bytes.
    pub largest_free: usize,
    /// Total free bytes.
    pub free_bytes: usize,
    /// External fragmentation ratio: `1 - largest_free / free_bytes`.
    ///
    /// Zero when all free space is one chunk (or there is none);
    /// approaches one as free space shatters into small pieces.
    pub external_fragmentation: f64,
}

impl FragmentationMetrics {
    /// Measure a summary snapshot.
    pub fn measure(summary: &Summary) -> Self {
        let largest_free = summary.largest_free_chunk();
        let free_bytes = summary.free_bytes;
        let external_fragmentation = if free_bytes == 0 {
            0.0
        } else {
            1.0 - largest_free as f64 / free_bytes as f64
        };
        Self {
            free_chunks: summary.free_chunk_count(),
            largest_free,
            free_bytes,
            external_fragmentation,
        }
    }
}
