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

//! # Solver Numeric Trait
//!
//! Unified numeric bounds for the search engine. `SolverNumeric` collects the
//! integer capabilities the engine needs into a single alias: intrinsic
//! traits (`PrimInt`, `Signed` — the reduced-cost bound can go negative),
//! conversion into `i64` for interop with the shared incumbent's atomic
//! upper-bound hint, and `Send + Sync + 'static` so values can cross into
//! the worker pool.
//!
//! Note: `i128` is intentionally excluded; it cannot be mirrored by the
//! `AtomicI64` hint.

use num_traits::{PrimInt, Signed};

/// A trait alias for numeric types that can be used in the solver.
/// These are usually the signed integer types `i8`, `i16`, `i32` and
/// `i64`.
pub trait SolverNumeric:
    PrimInt
    + Signed
    + Into<i64>
    + std::fmt::Debug
    + std::fmt::Display
    + Send
    + Sync
    + 'static
{
}

impl<T> SolverNumeric for T where
    T: PrimInt
        + Signed
        + Into<i64>
        + std::fmt::Debug
        + std::fmt::Display
        + Send
        + Sync
        + 'static
{
}
