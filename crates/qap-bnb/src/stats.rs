// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Search counters and end-of-run statistics.
//!
//! `SearchCounters` is the live, shared form: plain atomics bumped from the
//! worker threads with `Relaxed` ordering (the numbers are informational and
//! never drive control flow). `SolverStatistics` is the frozen snapshot
//! returned to the caller once the search has drained.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Live event counters shared across search workers.
#[derive(Debug, Default)]
pub struct SearchCounters {
    /// Number of tree nodes entered.
    nodes_explored: AtomicU64,
    /// Number of complete assignments evaluated exactly.
    leaves_evaluated: AtomicU64,
    /// Number of subtrees cut off by the relaxation bound.
    prunings_bound: AtomicU64,
    /// Number of times a candidate replaced the incumbent.
    solutions_found: AtomicU64,
}

impl SearchCounters {
    /// Creates a fresh set of counters, all zero.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn on_node(&self) {
        self.nodes_explored.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn on_leaf(&self) {
        self.leaves_evaluated.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn on_bound_pruning(&self) {
        self.prunings_bound.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn on_improvement(&self) {
        self.solutions_found.fetch_add(1, Ordering::Relaxed);
    }

    /// Freezes the counters into a `SolverStatistics` snapshot.
    pub fn snapshot(&self, used_threads: usize, solve_duration: Duration) -> SolverStatistics {
        SolverStatistics {
            nodes_explored: self.nodes_explored.load(Ordering::Relaxed),
            leaves_evaluated: self.leaves_evaluated.load(Ordering::Relaxed),
            prunings_bound: self.prunings_bound.load(Ordering::Relaxed),
            solutions_found: self.solutions_found.load(Ordering::Relaxed),
            used_threads,
            solve_duration,
        }
    }
}

/// Statistics collected during the solving process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverStatistics {
    /// Number of tree nodes entered during the solving process.
    pub nodes_explored: u64,
    /// Number of complete assignments evaluated exactly.
    pub leaves_evaluated: u64,
    /// Number of subtrees cut off by the relaxation bound.
    pub prunings_bound: u64,
    /// Number of incumbent improvements during the solving process.
    pub solutions_found: u64,
    /// Number of threads used during the solving process.
    pub used_threads: usize,
    /// Total duration of the solving process.
    pub solve_duration: Duration,
}

impl std::fmt::Display for SolverStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Solver Statistics:")?;
        writeln!(f, "  Nodes Explored: {}", self.nodes_explored)?;
        writeln!(f, "  Leaves Evaluated: {}", self.leaves_evaluated)?;
        writeln!(f, "  Prunings (bound): {}", self.prunings_bound)?;
        writeln!(f, "  Solutions Found: {}", self.solutions_found)?;
        writeln!(f, "  Used Threads: {}", self.used_threads)?;
        writeln!(
            f,
            "  Solve Duration (secs): {:.3}",
            self.solve_duration.as_secs_f64()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_counters_start_at_zero() {
        let counters = SearchCounters::new();
        let stats = counters.snapshot(1, Duration::ZERO);

        assert_eq!(stats.nodes_explored, 0);
        assert_eq!(stats.leaves_evaluated, 0);
        assert_eq!(stats.prunings_bound, 0);
        assert_eq!(stats.solutions_found, 0);
        assert_eq!(stats.used_threads, 1);
        assert_eq!(stats.solve_duration, Duration::ZERO);
    }

    #[test]
    fn test_counters_accumulate() {
        let counters = SearchCounters::new();

        counters.on_node();
        counters.on_node();
        counters.on_node();
        counters.on_leaf();
        counters.on_bound_pruning();
        counters.on_improvement();

        let stats = counters.snapshot(4, Duration::from_millis(12));
        assert_eq!(stats.nodes_explored, 3);
        assert_eq!(stats.leaves_evaluated, 1);
        assert_eq!(stats.prunings_bound, 1);
        assert_eq!(stats.solutions_found, 1);
        assert_eq!(stats.used_threads, 4);
    }

    #[test]
    fn test_counters_are_thread_safe() {
        let counters = Arc::new(SearchCounters::new());

        let mut handles = Vec::new();
        for _ in 0..4 {
            let counters = Arc::clone(&counters);
            handles.push(thread::spawn(move || {
                for _ in 0..1000 {
                    counters.on_node();
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }

        let stats = counters.snapshot(4, Duration::ZERO);
        assert_eq!(stats.nodes_explored, 4000);
    }

    #[test]
    fn test_display_formats_all_fields() {
        let stats = SolverStatistics {
            nodes_explored: 10,
            leaves_evaluated: 5,
            prunings_bound: 3,
            solutions_found: 2,
            used_threads: 4,
            solve_duration: Duration::from_millis(1234),
        };

        let rendered = format!("{}", stats);

        assert!(rendered.contains("Solver Statistics:"), "missing header");
        assert!(rendered.contains("Nodes Explored: 10"));
        assert!(rendered.contains("Leaves Evaluated: 5"));
        assert!(rendered.contains("Prunings (bound): 3"));
        assert!(rendered.contains("Solutions Found: 2"));
        assert!(rendered.contains("Used Threads: 4"));
        assert!(
            rendered.contains("Solve Duration (secs): 1.234"),
            "duration not formatted to 3 decimals"
        );
    }
}
