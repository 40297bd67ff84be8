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

use crate::stats::SolverStatistics;
use num_traits::PrimInt;
use qap_model::solution::Solution;

/// The outcome of an exhaustive solve: the proven-optimal solution together
/// with the statistics of the search that produced it.
///
/// The search always runs to completion, so there is no feasible-but-unproven
/// state; every returned solution is optimal for its instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverOutcome<T> {
    solution: Solution<T>,
    statistics: SolverStatistics,
}

impl<T> SolverOutcome<T> {
    #[inline]
    pub fn new(solution: Solution<T>, statistics: SolverStatistics) -> Self {
        Self {
            solution,
            statistics,
        }
    }

    /// Returns the optimal solution.
    #[inline]
    pub fn solution(&self) -> &Solution<T> {
        &self.solution
    }

    /// Returns the search statistics.
    #[inline]
    pub fn statistics(&self) -> &SolverStatistics {
        &self.statistics
    }

    /// Consumes the outcome and returns its parts.
    #[inline]
    pub fn into_parts(self) -> (Solution<T>, SolverStatistics) {
        (self.solution, self.statistics)
    }
}

impl<T> std::fmt::Display for SolverOutcome<T>
where
    T: PrimInt + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.solution)?;
        write!(f, "{}", self.statistics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qap_model::permutation::Permutation;
    use std::time::Duration;

    fn dummy_statistics() -> SolverStatistics {
        SolverStatistics {
            nodes_explored: 9,
            leaves_evaluated: 4,
            prunings_bound: 2,
            solutions_found: 2,
            used_threads: 2,
            solve_duration: Duration::from_millis(5),
        }
    }

    #[test]
    fn test_accessors_and_into_parts() {
        let solution = Solution::new(42i64, Permutation::identity(3));
        let outcome = SolverOutcome::new(solution.clone(), dummy_statistics());

        assert_eq!(outcome.solution(), &solution);
        assert_eq!(outcome.statistics().nodes_explored, 9);

        let (s, stats) = outcome.into_parts();
        assert_eq!(s.cost(), 42);
        assert_eq!(stats.used_threads, 2);
    }

    #[test]
    fn test_display_contains_solution_and_statistics() {
        let outcome = SolverOutcome::new(
            Solution::new(42i64, Permutation::identity(2)),
            dummy_statistics(),
        );

        let rendered = format!("{}", outcome);
        assert!(rendered.contains("Cost: 42"));
        assert!(rendered.contains("Solver Statistics:"));
    }
}
