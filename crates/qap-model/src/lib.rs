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

//! # QAP Model
//!
//! **The Core Domain Model for the Quadratic Assignment Solver.**
//!
//! This crate defines the fundamental data structures used to represent the
//! **Quadratic Assignment Problem (QAP)**: assign n facilities to n locations
//! so that `Σ distance[i][j] * flow[perm[i]][perm[j]]` is minimal. It serves
//! as the data interchange layer between the problem definition (user input)
//! and the solving engine (`qap_bnb`).
//!
//! ## Architecture
//!
//! * **`index`**: Strongly-typed wrappers (`LocationIndex`, `FacilityIndex`)
//!   to prevent logical indexing errors between the two index spaces.
//! * **`matrix`**: A flat, row-major square matrix optimized for the tight
//!   cost loops of the solver.
//! * **`instance`**: The immutable `QapInstance` (size, distance, flow).
//! * **`permutation`**: The candidate solution representation, a bijection
//!   from locations to facilities that can only be mutated through swaps.
//! * **`solution`**: The output format, pairing a permutation with its cost.
//! * **`loading`**: A robust parser turning whitespace-delimited text into a
//!   validated `QapInstance`.
//!
//! ## Design Philosophy
//!
//! 1.  **Type Safety**: Indices are distinct types. You cannot accidentally
//!     index the flow matrix with a `LocationIndex`.
//! 2.  **Memory Layout**: Matrices are flattened vectors rather than nested
//!     ones to maximize cache locality during the branch-and-bound search.
//! 3.  **Fail-Fast**: Constructors validate inputs eagerly to ensure the
//!     solver never encounters an invalid instance.

pub mod index;
pub mod instance;
pub mod loading;
pub mod matrix;
pub mod permutation;
pub mod solution;
