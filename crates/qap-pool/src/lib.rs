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

//! # QAP Pool
//!
//! **A generic fixed-size task execution pool.**
//!
//! This crate provides `TaskPool`, a small concurrent job executor that is
//! entirely independent of the assignment domain: a fixed set of worker
//! threads pulls zero-argument jobs from a shared FIFO queue until told to
//! stop. The solving engine (`qap_bnb`) uses it to fan the top layer of the
//! search tree out across workers, but nothing in here knows about search
//! trees.
//!
//! ## Lifecycle
//!
//! A pool is created, fed jobs, started, drained, and stopped — typically
//! once per solve:
//!
//! ```rust
//! use qap_pool::TaskPool;
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//!
//! let counter = Arc::new(AtomicUsize::new(0));
//! let mut pool = TaskPool::new(4);
//! for _ in 0..16 {
//!     let counter = Arc::clone(&counter);
//!     pool.submit(move || {
//!         counter.fetch_add(1, Ordering::Relaxed);
//!     });
//! }
//! pool.start();
//! pool.wait_until_idle();
//! assert!(!pool.is_busy());
//! pool.stop();
//! assert_eq!(counter.load(Ordering::Relaxed), 16);
//! ```
//!
//! ## Guarantees
//!
//! - Every submitted job executes exactly once; execution order across jobs
//!   is unspecified and must not be relied upon.
//! - `wait_until_idle` returns only after the queue is empty and no worker is
//!   mid-job; it blocks on a condvar instead of spinning. `is_busy` is the
//!   non-blocking variant of the same signal for callers that prefer to poll.
//! - Jobs may submit further jobs from within the pool without corrupting the
//!   queue.
//! - A panicking job does not crash the other workers and leaves the busy
//!   accounting consistent; the panic is re-raised from `stop`, so a failed
//!   job is fatal to the run as a whole and never yields a partial result.

pub mod pool;

pub use pool::{TaskPool, TaskPoolHandle};
