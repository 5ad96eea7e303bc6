//! Minimal end-to-end run: parse a script, run it under each
//! strategy, and print the trace and summary.
//!
//! Run with: `cargo run --example quickstart -p memfit-engine`

use memfit_core::Strategy;
use memfit_engine::{report, run_requests, FragmentationMetrics, RunConfig};
use memfit_script::parse_script;

const SCRIPT: &str = "\
# fragment the arena, then squeeze in one more allocation
alloc 1 134
alloc 2 34
alloc 3 284
alloc 4 34
free 1
free 3
alloc 10 134
alloc 11 284
";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    for strategy in Strategy::ALL {
        let requests = parse_script(SCRIPT.as_bytes())?;
        let config = RunConfig::new(550, strategy);
        let run = run_requests(&config, requests)?;

        report::write_report(std::io::stdout().lock(), &config, &run)?;

        let metrics = FragmentationMetrics::measure(&run.summary);
        println!(
            "fragmentation: {:.2} ({} free chunks, largest {} of {} free bytes)\n",
            metrics.external_fragmentation,
            metrics.free_chunks,
            metrics.largest_free,
            metrics.free_bytes
        );
    }
    Ok(())
}
