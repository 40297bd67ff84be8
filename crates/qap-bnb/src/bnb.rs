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

//! Parallel branch-and-bound solver for the quadratic assignment problem.
//!
//! The solver enumerates facility-to-location assignments as a swap tree:
//! each node at `level` holds a complete permutation whose positions below
//! `level` are fixed, and branching swaps position `level` with each later
//! position in turn, restoring the array before moving to the next sibling.
//! A node whose relaxation bound cannot beat the incumbent is pruned; every
//! surviving leaf is evaluated exactly and offered to the shared incumbent.
//!
//! Parallelism is confined to the top of the tree. `solve` submits one job
//! per root branch (position 0 swapped with each facility) to a `TaskPool`;
//! each job owns a private copy of the permutation and runs its entire
//! subtree depth-first on the worker that picked it up. No further jobs are
//! spawned below the root, so at most `n` units of work are ever schedulable
//! and the recursion depth is bounded by `n`.
//!
//! The search always runs to exhaustion of the pruned tree. Because pruning
//! compares the relaxation bound (never a heuristic estimate) against the
//! incumbent, the reported cost is the exact optimum and does not depend on
//! worker count or scheduling order; only the identity of the returned
//! permutation may vary among cost ties.

use crate::{
    bound::{exact_cost, reduced_cost_bound},
    incumbent::SharedIncumbent,
    monitor::{NoOpMonitor, SearchMonitor},
    num::SolverNumeric,
    result::SolverOutcome,
    stats::SearchCounters,
};
use qap_model::{
    index::LocationIndex, instance::QapInstance, permutation::Permutation, solution::Solution,
};
use qap_pool::TaskPool;
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::Instant;

/// Shared per-solve state, handed to every root job behind an `Arc`.
struct SearchContext<T>
where
    T: SolverNumeric,
{
    instance: QapInstance<T>,
    incumbent: SharedIncumbent<T>,
    counters: SearchCounters,
    monitor: Box<dyn SearchMonitor<T>>,
}

/// A parallel exact solver for the quadratic assignment problem.
///
/// The solver itself is cheap to construct and holds no per-instance state;
/// the same `BnbSolver` can solve any number of instances.
#[derive(Debug, Clone)]
pub struct BnbSolver {
    num_workers: usize,
}

impl Default for BnbSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl BnbSolver {
    /// Creates a solver using one worker per available hardware thread.
    #[inline]
    pub fn new() -> Self {
        let num_workers = std::thread::available_parallelism()
            .map(NonZeroUsize::get)
            .unwrap_or(1);
        Self { num_workers }
    }

    /// Creates a solver with an explicit worker count.
    ///
    /// # Panics
    ///
    /// Panics if `num_workers` is zero.
    #[inline]
    pub fn with_workers(num_workers: usize) -> Self {
        assert!(
            num_workers > 0,
            "called `BnbSolver::with_workers` with zero workers"
        );
        Self { num_workers }
    }

    /// Returns the number of worker threads this solver will use.
    #[inline]
    pub fn num_workers(&self) -> usize {
        self.num_workers
    }

    /// Solves the given instance to proven optimality.
    pub fn solve<T>(&self, instance: &QapInstance<T>) -> SolverOutcome<T>
    where
        T: SolverNumeric,
    {
        self.solve_with_monitor(instance, NoOpMonitor::new())
    }

    /// Solves the given instance to proven optimality, reporting incumbent
    /// improvements and the final statistics to `monitor`.
    pub fn solve_with_monitor<T, M>(&self, instance: &QapInstance<T>, monitor: M) -> SolverOutcome<T>
    where
        T: SolverNumeric,
        M: SearchMonitor<T> + 'static,
    {
        let start = Instant::now();
        let n = instance.n();

        let context = Arc::new(SearchContext {
            instance: instance.clone(),
            incumbent: SharedIncumbent::new(),
            counters: SearchCounters::new(),
            monitor: Box::new(monitor),
        });

        // The empty instance has exactly one assignment: the empty one.
        if n == 0 {
            let solution = Solution::new(T::zero(), Permutation::identity(0));
            let statistics = context.counters.snapshot(0, start.elapsed());
            context.monitor.on_search_end(&statistics);
            return SolverOutcome::new(solution, statistics);
        }

        let mut pool = TaskPool::new(self.num_workers);
        for root in 0..n {
            let context = Arc::clone(&context);
            pool.submit(move || root_branch(&context, root));
        }
        pool.start();
        pool.wait_until_idle();
        pool.stop();

        // The incumbent starts at the i64::MAX sentinel, so no prune can fire
        // before the first leaf has been installed; a non-empty instance
        // therefore always ends with an incumbent in place.
        let solution = context
            .incumbent
            .snapshot()
            .expect("finished search on a non-empty instance must hold an incumbent");

        let statistics = context.counters.snapshot(self.num_workers, start.elapsed());
        context.monitor.on_search_end(&statistics);
        SolverOutcome::new(solution, statistics)
    }
}

/// Entry point of a root job: fixes position 0 to one facility on a private
/// copy of the identity permutation and explores that subtree.
fn root_branch<T>(context: &SearchContext<T>, root: usize)
where
    T: SolverNumeric,
{
    let n = context.instance.n();
    let mut permutation = Permutation::identity(n);
    permutation.swap(LocationIndex::new(0), LocationIndex::new(root));
    explore(context, &mut permutation, 1);
}

/// Recursive depth-first search over the swap tree below `level`.
///
/// The permutation is mutated in place; every swap performed on the way down
/// is undone on the way back up, so the array is unchanged when the call
/// returns.
fn explore<T>(context: &SearchContext<T>, permutation: &mut Permutation, level: usize)
where
    T: SolverNumeric,
{
    let n = context.instance.n();
    debug_assert!(
        level <= n,
        "called `explore` with level {} on an instance of size {}",
        level,
        n
    );
    debug_assert!(permutation.is_valid_assignment());

    context.counters.on_node();

    if level == n {
        context.counters.on_leaf();
        let cost = exact_cost(&context.instance, permutation);

        // Cheap pre-check against the atomic hint before cloning the
        // permutation; `try_install` re-compares under the lock.
        let cost_hint: i64 = cost.into();
        if cost_hint < context.incumbent.upper_bound() {
            let candidate = Solution::new(cost, permutation.clone());
            if context.incumbent.try_install(&candidate) {
                context.counters.on_improvement();
                context.monitor.on_improvement(&candidate);
            }
        }
        return;
    }

    // A stale hint read here can only under-prune, never over-prune: the
    // incumbent cost is non-increasing, so the bound comparison that failed
    // now would also fail against any later value.
    let bound: i64 = reduced_cost_bound(&context.instance, permutation).into();
    if bound >= context.incumbent.upper_bound() {
        context.counters.on_bound_pruning();
        return;
    }

    for i in level..n {
        permutation.swap(LocationIndex::new(level), LocationIndex::new(i));
        explore(context, permutation, level + 1);
        permutation.swap(LocationIndex::new(level), LocationIndex::new(i));
    }
}
