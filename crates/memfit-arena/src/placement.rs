//! Candidate selection for the three placement strategies.

use memfit_core::Strategy;

use crate::table::ChunkTable;

/// Select the index of the free chunk that should satisfy a request of
/// `total_size` bytes (inclusive of overhead) under `strategy`.
///
/// All strategies scan the free chunks in ascending start order.
/// First-fit stops at the first sufficient chunk; best- and worst-fit
/// examine every sufficient candidate and keep the smallest or largest
/// respectively, with strict comparisons so a tie goes to the chunk
/// encountered first. Returns `None` when no free chunk is large
/// enough — a normal outcome, not an error.
pub fn select(table: &ChunkTable, strategy: Strategy, total_size: usize) -> Option<usize> {
    let mut sufficient = table
        .free_chunks()
        .filter(|(_, c)| c.size >= total_size);

    match strategy {
        Strategy::FirstFit => sufficient.next().map(|(i, _)| i),
        Strategy::BestFit => {
            let mut best: Option<(usize, usize)> = None;
            for (i, c) in sufficient {
                match best {
                    Some((_, size)) if c.size >= size => {}
                    _ => best = Some((i, c.size)),
                }
            }
            best.map(|(i, _)| i)
        }
        Strategy::WorstFit => {
            let mut worst: Option<(usize, usize)> = None;
            for (i, c) in sufficient {
                match worst {
                    Some((_, size)) if c.size <= size => {}
                    _ => worst = Some((i, c.size)),
                }
            }
            worst.map(|(i, _)| i)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use memfit_core::RequestId;

    /// Build a table whose free chunks have the given sizes, in order,
    /// separated by one-byte allocated chunks so they cannot coalesce.
    fn table_with_free_sizes(sizes: &[usize]) -> ChunkTable {
        let total: usize = sizes.iter().sum::<usize>() + sizes.len();
        let mut t = ChunkTable::new(total, 100).unwrap();
        // Lay out [gap][sep][gap][sep]... by allocating everything,
        // then freeing the gaps.
        for (n, &size) in sizes.iter().enumerate() {
            let free_index = t.chunk_count() - 1;
            t.split(free_index, size, RequestId(n as u32)).unwrap();
            let sep_index = t.chunk_count() - 1;
            t.split(sep_index, 1, RequestId(1000 + n as u32)).unwrap();
        }
        for n in 0..sizes.len() {
            t.mark_free(RequestId(n as u32)).unwrap();
        }
        t
    }

    #[test]
    fn first_fit_takes_lowest_start() {
        let t = table_with_free_sizes(&[50, 200, 100]);
        assert_eq!(select(&t, Strategy::FirstFit, 100), Some(2));
    }

    #[test]
    fn best_fit_takes_smallest_sufficient() {
        let t = table_with_free_sizes(&[300, 120, 150]);
        assert_eq!(select(&t, Strategy::BestFit, 100), Some(2));
    }

    #[test]
    fn worst_fit_takes_largest() {
        let t = table_with_free_sizes(&[300, 120, 450]);
        assert_eq!(select(&t, Strategy::WorstFit, 100), Some(4));
    }

    #[test]
    fn ties_go_to_the_first_encountered() {
        let t = table_with_free_sizes(&[200, 200]);
        assert_eq!(select(&t, Strategy::BestFit, 100), Some(0));
        assert_eq!(select(&t, Strategy::WorstFit, 100), Some(0));
    }

    #[test]
    fn no_sufficient_chunk_yields_none() {
        let t = table_with_free_sizes(&[50, 60]);
        for strategy in Strategy::ALL {
            assert_eq!(select(&t, strategy, 1000), None);
        }
    }

    #[test]
    fn exact_size_chunk_is_sufficient() {
        let t = table_with_free_sizes(&[100]);
        assert_eq!(select(&t, Strategy::FirstFit, 100), Some(0));
    }
}
