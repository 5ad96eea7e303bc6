//! Criterion micro-benchmarks comparing the three placement strategies
//! under an identical fragmentation-heavy workload.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use memfit_arena::{Allocator, AllocatorConfig};
use memfit_core::{RequestId, Strategy};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// One scripted action in the generated workload.
enum Op {
    Alloc(RequestId, usize),
    Free(RequestId),
}

/// Build a deterministic allocate/release workload.
///
/// Roughly two allocations per release so the arena stays populated
/// and fragmented. Ids cycle through a small live set; the RNG is
/// seeded so every strategy sees the identical request stream.
fn make_workload(len: usize, seed: u64) -> Vec<Op> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut live: Vec<u32> = Vec::new();
    let mut next_id = 0u32;
    let mut ops = Vec::with_capacity(len);

    for _ in 0..len {
        let release = !live.is_empty() && rng.random_range(0..3) == 0;
        if release {
            let idx = rng.random_range(0..live.len());
            ops.push(Op::Free(RequestId(live.swap_remove(idx))));
        } else {
            let size = rng.random_range(16..512);
            ops.push(Op::Alloc(RequestId(next_id), size));
            live.push(next_id);
            next_id += 1;
        }
    }
    ops
}

fn run_workload(strategy: Strategy, ops: &[Op]) -> usize {
    let mut config = AllocatorConfig::new(1 << 20, strategy);
    config.max_chunks = 4096;
    let mut a = Allocator::new(config).unwrap();
    let mut satisfied = 0;
    for op in ops {
        match *op {
            Op::Alloc(id, size) => {
                if a.allocate(id, size).is_ok() {
                    satisfied += 1;
                }
            }
            Op::Free(id) => {
                let _ = a.release(id);
            }
        }
    }
    satisfied
}

fn bench_strategies(c: &mut Criterion) {
    let ops = make_workload(2000, 42);
    let mut group = c.benchmark_group("placement");
    for strategy in Strategy::ALL {
        group.bench_function(strategy.token(), |b| {
            b.iter(|| run_workload(black_box(strategy), &ops));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_strategies);
criterion_main!(benches);
