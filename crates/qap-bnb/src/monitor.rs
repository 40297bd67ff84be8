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

//! # Search Monitors
//!
//! Observation hooks for the search. A `SearchMonitor` receives a callback
//! whenever the incumbent improves and once more when the search finishes.
//! Monitors are shared across all worker threads, so the callbacks take
//! `&self` and implementations must be `Send + Sync`.
//!
//! Two implementations ship with the crate: `NoOpMonitor` (the default,
//! silent) and `LogMonitor`, which prints each improvement with the elapsed
//! wall-clock time since the monitor was created.

use crate::{num::SolverNumeric, stats::SolverStatistics};
use qap_model::solution::Solution;
use std::time::Instant;

/// Observer for search progress events.
///
/// Callbacks may fire concurrently from different workers. `on_improvement`
/// is invoked after a candidate has been installed as the incumbent;
/// `on_search_end` is invoked exactly once, after all workers have drained.
pub trait SearchMonitor<T>: Send + Sync
where
    T: SolverNumeric,
{
    fn name(&self) -> &str;
    fn on_improvement(&self, solution: &Solution<T>);
    fn on_search_end(&self, statistics: &SolverStatistics);
}

impl<T> std::fmt::Debug for dyn SearchMonitor<T>
where
    T: SolverNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SearchMonitor({})", self.name())
    }
}

/// A monitor that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpMonitor;

impl NoOpMonitor {
    #[inline]
    pub fn new() -> Self {
        NoOpMonitor
    }
}

impl<T> SearchMonitor<T> for NoOpMonitor
where
    T: SolverNumeric,
{
    fn name(&self) -> &str {
        "NoOpMonitor"
    }

    fn on_improvement(&self, _solution: &Solution<T>) {}

    fn on_search_end(&self, _statistics: &SolverStatistics) {}
}

/// A monitor that logs incumbent improvements and the final statistics to
/// standard output.
#[derive(Debug)]
pub struct LogMonitor {
    start: Instant,
}

impl Default for LogMonitor {
    fn default() -> Self {
        Self::new()
    }
}

impl LogMonitor {
    /// Creates a new `LogMonitor`. The elapsed times it prints are measured
    /// from this call.
    #[inline]
    pub fn new() -> Self {
        LogMonitor {
            start: Instant::now(),
        }
    }
}

impl<T> SearchMonitor<T> for LogMonitor
where
    T: SolverNumeric,
{
    fn name(&self) -> &str {
        "LogMonitor"
    }

    fn on_improvement(&self, solution: &Solution<T>) {
        println!(
            "[{:>10.3}s] improved incumbent: cost = {}",
            self.start.elapsed().as_secs_f64(),
            solution.cost()
        );
    }

    fn on_search_end(&self, statistics: &SolverStatistics) {
        println!("{}", statistics);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qap_model::permutation::Permutation;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::time::Duration;

    struct CountingMonitor {
        improvements: AtomicU64,
        ends: AtomicU64,
    }

    impl SearchMonitor<i64> for CountingMonitor {
        fn name(&self) -> &str {
            "CountingMonitor"
        }

        fn on_improvement(&self, _solution: &Solution<i64>) {
            self.improvements.fetch_add(1, Ordering::Relaxed);
        }

        fn on_search_end(&self, _statistics: &SolverStatistics) {
            self.ends.fetch_add(1, Ordering::Relaxed);
        }
    }

    fn dummy_statistics() -> SolverStatistics {
        SolverStatistics {
            nodes_explored: 0,
            leaves_evaluated: 0,
            prunings_bound: 0,
            solutions_found: 0,
            used_threads: 1,
            solve_duration: Duration::ZERO,
        }
    }

    #[test]
    fn test_custom_monitor_receives_events() {
        let monitor = CountingMonitor {
            improvements: AtomicU64::new(0),
            ends: AtomicU64::new(0),
        };
        let solution = Solution::new(42i64, Permutation::identity(3));

        monitor.on_improvement(&solution);
        monitor.on_improvement(&solution);
        monitor.on_search_end(&dummy_statistics());

        assert_eq!(monitor.improvements.load(Ordering::Relaxed), 2);
        assert_eq!(monitor.ends.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn test_noop_monitor_accepts_events() {
        let monitor = NoOpMonitor::new();
        let solution = Solution::new(7i64, Permutation::identity(2));

        SearchMonitor::<i64>::on_improvement(&monitor, &solution);
        SearchMonitor::<i64>::on_search_end(&monitor, &dummy_statistics());
        assert_eq!(SearchMonitor::<i64>::name(&monitor), "NoOpMonitor");
    }

    #[test]
    fn test_debug_for_dyn_monitor_uses_name() {
        let monitor = NoOpMonitor::new();
        let dynamic: &dyn SearchMonitor<i64> = &monitor;
        assert_eq!(format!("{:?}", dynamic), "SearchMonitor(NoOpMonitor)");
    }
}
