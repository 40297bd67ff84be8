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

//! # Solver Facade
//!
//! The convenience layer over `qap_bnb::bnb::BnbSolver`. Callers that just
//! want "instance in, optimum out" configure a `Solver` through
//! `SolverBuilder` and never touch the engine, the pool, or the monitors
//! directly.
//!
//! ## Usage
//!
//! ```rust
//! use qap_model::{instance::QapInstance, matrix::SquareMatrix};
//! use qap_solver::solver::SolverBuilder;
//!
//! let distance = SquareMatrix::from_rows(vec![
//!     vec![0, 1, 2],
//!     vec![1, 0, 3],
//!     vec![2, 3, 0],
//! ]);
//! let flow = SquareMatrix::from_rows(vec![
//!     vec![0, 5, 1],
//!     vec![5, 0, 2],
//!     vec![1, 2, 0],
//! ]);
//! let instance = QapInstance::new(distance, flow);
//!
//! let solver = SolverBuilder::new().with_workers(2).build();
//! let outcome = solver.solve(&instance);
//! assert_eq!(outcome.solution().cost(), 24);
//! ```

use qap_bnb::{
    bnb::BnbSolver,
    monitor::{LogMonitor, NoOpMonitor},
    num::SolverNumeric,
    result::SolverOutcome,
};
use qap_model::instance::QapInstance;

/// A configured, reusable solver front end.
#[derive(Debug, Clone)]
pub struct Solver {
    engine: BnbSolver,
    log_improvements: bool,
}

impl Default for Solver {
    fn default() -> Self {
        SolverBuilder::new().build()
    }
}

impl Solver {
    /// Returns the number of worker threads the underlying engine will use.
    #[inline]
    pub fn num_workers(&self) -> usize {
        self.engine.num_workers()
    }

    /// Solves the given instance to proven optimality.
    pub fn solve<T>(&self, instance: &QapInstance<T>) -> SolverOutcome<T>
    where
        T: SolverNumeric,
    {
        if self.log_improvements {
            self.engine.solve_with_monitor(instance, LogMonitor::new())
        } else {
            self.engine.solve_with_monitor(instance, NoOpMonitor::new())
        }
    }
}

/// Builder for `Solver`.
#[derive(Debug, Clone, Default)]
pub struct SolverBuilder {
    num_workers: Option<usize>,
    log_improvements: bool,
}

impl SolverBuilder {
    /// Creates a builder with defaults: one worker per hardware thread,
    /// improvement logging off.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an explicit worker count.
    ///
    /// # Panics
    ///
    /// Panics if `num_workers` is zero.
    #[inline]
    pub fn with_workers(mut self, num_workers: usize) -> Self {
        assert!(
            num_workers > 0,
            "called `SolverBuilder::with_workers` with zero workers"
        );
        self.num_workers = Some(num_workers);
        self
    }

    /// Enables logging of incumbent improvements and final statistics to
    /// standard output.
    #[inline]
    pub fn with_improvement_logging(mut self) -> Self {
        self.log_improvements = true;
        self
    }

    /// Builds the configured `Solver`.
    #[inline]
    pub fn build(self) -> Solver {
        let engine = match self.num_workers {
            Some(workers) => BnbSolver::with_workers(workers),
            None => BnbSolver::new(),
        };
        Solver {
            engine,
            log_improvements: self.log_improvements,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qap_model::matrix::SquareMatrix;

    fn instance_3x3() -> QapInstance<i64> {
        let distance = SquareMatrix::from_rows(vec![vec![0, 1, 2], vec![1, 0, 3], vec![2, 3, 0]]);
        let flow = SquareMatrix::from_rows(vec![vec![0, 5, 1], vec![5, 0, 2], vec![1, 2, 0]]);
        QapInstance::new(distance, flow)
    }

    #[test]
    fn test_default_solver_solves() {
        let solver = Solver::default();
        let outcome = solver.solve(&instance_3x3());
        assert_eq!(outcome.solution().cost(), 24);
    }

    #[test]
    fn test_builder_worker_count_is_applied() {
        let solver = SolverBuilder::new().with_workers(3).build();
        assert_eq!(solver.num_workers(), 3);
    }

    #[test]
    fn test_builder_solver_is_reusable() {
        let solver = SolverBuilder::new().with_workers(2).build();
        let first = solver.solve(&instance_3x3());
        let second = solver.solve(&instance_3x3());
        assert_eq!(first.solution().cost(), second.solution().cost());
    }

    #[test]
    #[should_panic(expected = "zero workers")]
    fn test_builder_rejects_zero_workers() {
        let _ = SolverBuilder::new().with_workers(0);
    }
}
