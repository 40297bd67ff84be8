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

//! # QAP Branch-and-Bound
//!
//! **The exact search engine for the quadratic assignment problem.**
//!
//! This crate turns a `qap_model::instance::QapInstance` into a proven
//! optimum. The pieces:
//!
//! - [`bnb`]: the parallel depth-first branch-and-bound engine.
//! - [`bound`]: exact objective evaluation and the reduced-cost relaxation
//!   bound used for pruning.
//! - [`incumbent`]: the shared best-solution record the workers race to
//!   improve.
//! - [`monitor`]: observation hooks for progress reporting.
//! - [`stats`] / [`result`]: counters collected during the run and the
//!   outcome handed back to the caller.
//! - [`num`]: the numeric trait alias tying it all together.
//!
//! ## Architecture
//!
//! The engine fans the root level of the search tree out over a
//! `qap_pool::TaskPool` and keeps everything below the root strictly
//! sequential within the worker that owns the branch. All cross-thread
//! coordination lives in the `SharedIncumbent`; the rest of the search state
//! is private to each worker's call stack.
//!
//! ## Example
//!
//! ```rust
//! use qap_bnb::bnb::BnbSolver;
//! use qap_model::{instance::QapInstance, matrix::SquareMatrix};
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
//! let outcome = BnbSolver::with_workers(2).solve(&instance);
//! assert_eq!(outcome.solution().cost(), 24);
//! ```

pub mod bnb;
pub mod bound;
pub mod incumbent;
pub mod monitor;
pub mod num;
pub mod result;
pub mod stats;
