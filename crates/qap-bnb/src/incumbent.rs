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

//! # Shared Incumbent (Best Solution Holder)
//!
//! A concurrent container for the best assignment discovered so far during
//! search. It exposes a fast, lock-free upper bound via an atomic and stores
//! the actual `Solution<T>` behind a `Mutex` as the source of truth.
//!
//! Cost and permutation form a single logical value: they are only ever
//! written together inside one critical section, so no reader can observe a
//! cost paired with the wrong permutation. The atomic hint exists purely so
//! pruning decisions can skip the lock; a hint read may be stale by the time
//! the caller acts on it, which costs wasted exploration but never
//! correctness, because `try_install` always re-compares under the lock
//! before committing.

use crate::num::SolverNumeric;
use qap_model::solution::Solution;
use std::sync::{
    Mutex,
    atomic::{AtomicI64, Ordering},
};

/// A concurrent holder for the best (incumbent) solution found during search.
///
/// The `upper_bound` hint starts at `i64::MAX`, meaning "no incumbent yet".
/// Atomic reads/writes use `Ordering::Relaxed`: the hint only short-circuits
/// work, and all correctness-sensitive state is synchronized via the mutex.
#[derive(Debug)]
pub struct SharedIncumbent<T> {
    /// Cost of the incumbent solution stored as `i64` for atomic access.
    upper_bound: AtomicI64,

    /// The incumbent solution, protected by a mutex for safe concurrent
    /// access. This is the source of truth; the atomic above is a hint.
    solution: Mutex<Option<Solution<T>>>,
}

impl<T> Default for SharedIncumbent<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Display for SharedIncumbent<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Incumbent(upper_bound: {})", self.upper_bound())
    }
}

impl<T> SharedIncumbent<T> {
    /// Creates a new shared incumbent with no solution installed.
    /// The initial upper bound is `i64::MAX`.
    #[inline]
    pub fn new() -> Self {
        SharedIncumbent {
            upper_bound: AtomicI64::new(i64::MAX),
            solution: Mutex::new(None),
        }
    }

    /// Returns the current upper bound.
    #[inline]
    pub fn upper_bound(&self) -> i64 {
        self.upper_bound.load(Ordering::Relaxed)
    }

    /// Returns a snapshot of the current incumbent solution, if any.
    #[inline]
    pub fn snapshot(&self) -> Option<Solution<T>>
    where
        T: Clone,
    {
        let guard = self.solution.lock().unwrap();
        guard.clone()
    }

    /// Attempts to install the given candidate solution as the new incumbent.
    /// Returns `true` if the candidate was installed, `false` otherwise.
    #[inline]
    pub fn try_install(&self, candidate: &Solution<T>) -> bool
    where
        T: SolverNumeric,
    {
        let candidate_cost: i64 = candidate.cost().into();

        // We are minimizing, so lower is better.
        if candidate_cost >= self.upper_bound() {
            return false;
        }

        let mut guard = self.solution.lock().unwrap();
        // Another thread might have installed a better solution while we were
        // waiting for the lock. Compare against the *actual* solution in the
        // mutex, not the atomic hint read earlier.
        if let Some(current) = guard.as_ref() {
            let current_cost: i64 = current.cost().into();
            if candidate_cost >= current_cost {
                return false;
            }
        }

        *guard = Some(candidate.clone());
        self.upper_bound.store(candidate_cost, Ordering::Relaxed);

        true
    }
}
