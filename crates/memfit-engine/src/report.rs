//! Human-readable trace and summary rendering.
//!
//! The allocator core produces only structured receipts; every piece
//! of text a run emits is rendered here, against any `io::Write` sink.

use std::io::{self, Write};

use memfit_core::Request;

use crate::config::{RunConfig, Verbosity};
use crate::run::{Outcome, Receipt, RunReport};

/// Write the run banner.
pub fn write_header(mut sink: impl Write, config: &RunConfig) -> io::Result<()> {
    writeln!(
        sink,
        "Running a {} model in {} (0x{:x}) bytes of memory.",
        config.strategy, config.total_size, config.total_size
    )
}

/// Write the one-line trace for a processed request.
pub fn write_receipt(mut sink: impl Write, receipt: &Receipt) -> io::Result<()> {
    match (&receipt.request, &receipt.outcome) {
        (Request::Allocate { size, .. }, Outcome::Allocated { offset }) => {
            writeln!(sink, "alloc {size} bytes: SUCCESS - return location {offset}")
        }
        (Request::Allocate { size, .. }, Outcome::AllocFailed(_)) => {
            writeln!(sink, "alloc {size} bytes: FAIL")
        }
        (Request::Release { .. }, Outcome::Freed { offset }) => {
            writeln!(sink, "free location {offset}")
        }
        (Request::Release { id }, Outcome::FreeFailed(_)) => {
            writeln!(sink, "free {id}: FAIL (ID not found)")
        }
        // Outcome variants always pair with their request variant.
        _ => Ok(()),
    }
}

/// Write the end-of-run summary block.
pub fn write_summary(mut sink: impl Write, report: &RunReport) -> io::Result<()> {
    let summary = &report.summary;
    writeln!(sink, "-------------------------------------------------")?;
    writeln!(sink, "SUMMARY:")?;
    writeln!(sink, "-------------------------------------------------")?;
    writeln!(
        sink,
        "{} ALLOCATION CHUNKS (after merging adjacent free blocks):",
        summary.chunk_count
    )?;
    for (i, chunk) in summary.chunks.iter().enumerate() {
        writeln!(
            sink,
            "chunk {i} location {}:{} bytes - {}",
            chunk.start,
            chunk.size,
            if chunk.allocated { "allocated" } else { "free" }
        )?;
    }
    writeln!(sink, "ALLOCATED/FREE BYTES:")?;
    writeln!(sink, "{} bytes allocated", summary.allocated_bytes)?;
    writeln!(sink, "{} bytes free (merged)", summary.free_bytes)?;
    let live = summary.chunks.iter().filter(|c| c.allocated).count();
    writeln!(
        sink,
        "Total overhead: {} bytes ({} bytes per allocation)",
        summary.block_overhead * live,
        summary.block_overhead
    )?;
    if !report.outstanding.is_empty() {
        writeln!(sink, "STILL ALLOCATED AT END OF RUN:")?;
        for (id, offset) in &report.outstanding {
            writeln!(sink, "id {id} at location {offset}")?;
        }
    }
    Ok(())
}

/// Write a complete run report: banner, per-request trace (at
/// [`Verbosity::Trace`]), and summary.
pub fn write_report(
    mut sink: impl Write,
    config: &RunConfig,
    report: &RunReport,
) -> io::Result<()> {
    write_header(&mut sink, config)?;
    if config.verbosity == Verbosity::Trace {
        for receipt in &report.receipts {
            write_receipt(&mut sink, receipt)?;
        }
    }
    write_summary(&mut sink, report)
}

/// Render a complete report to a `String`, for tests and callers that
/// want the text rather than a sink.
pub fn render_report(config: &RunConfig, report: &RunReport) -> String {
    let mut buf = Vec::new();
    // Writing to a Vec cannot fail.
    write_report(&mut buf, config, report).expect("write to Vec<u8>");
    String::from_utf8(buf).expect("report output is UTF-8")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::run::run_requests;
    use memfit_core::{RequestId, Strategy};

    fn sample_report() -> (RunConfig, RunReport) {
        let config = RunConfig::new(1000, Strategy::FirstFit);
        let requests = vec![
            Request::Allocate {
                id: RequestId(1),
                size: 100,
            },
            Request::Allocate {
                id: RequestId(2),
                size: 2000,
            },
            Request::Release { id: RequestId(9) },
            Request::Release { id: RequestId(1) },
        ];
        let report = run_requests(&config, requests).unwrap();
        (config, report)
    }

    #[test]
    fn header_names_strategy_and_size() {
        let config = RunConfig::new(1000, Strategy::BestFit);
        let mut buf = Vec::new();
        write_header(&mut buf, &config).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "Running a best-fit model in 1000 (0x3e8) bytes of memory.\n"
        );
    }

    #[test]
    fn trace_lines_match_outcomes() {
        let (config, report) = sample_report();
        let text = render_report(&config, &report);
        assert!(text.contains("alloc 100 bytes: SUCCESS - return location 16"));
        assert!(text.contains("alloc 2000 bytes: FAIL"));
        assert!(text.contains("free 9: FAIL (ID not found)"));
        assert!(text.contains("free location 16"));
    }

    #[test]
    fn quiet_verbosity_skips_the_trace() {
        let (mut config, report) = sample_report();
        config.verbosity = Verbosity::Quiet;
        let text = render_report(&config, &report);
        assert!(!text.contains("SUCCESS"));
        assert!(text.contains("SUMMARY:"));
    }

    #[test]
    fn summary_lists_every_chunk() {
        let (config, report) = sample_report();
        let text = render_report(&config, &report);
        // Everything was freed: one merged chunk spanning the arena.
        assert!(text.contains("1 ALLOCATION CHUNKS"));
        assert!(text.contains("chunk 0 location 0:1000 bytes - free"));
        assert!(text.contains("0 bytes allocated"));
        assert!(text.contains("1000 bytes free (merged)"));
    }

    #[test]
    fn leaked_allocations_are_listed() {
        let config = RunConfig::new(1000, Strategy::FirstFit);
        let requests = vec![Request::Allocate {
            id: RequestId(4),
            size: 50,
        }];
        let report = run_requests(&config, requests).unwrap();
        let text = render_report(&config, &report);
        assert!(text.contains("STILL ALLOCATED AT END OF RUN:"));
        assert!(text.contains("id 4 at location 16"));
    }
}
