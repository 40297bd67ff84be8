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

use num_traits::PrimInt;

/// A dense square matrix stored as a flat, row-major vector.
///
/// The flattened layout keeps the cost and bound loops of the solver cache
/// friendly; entry `(row, col)` lives at `row * dim + col`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SquareMatrix<T> {
    dim: usize,
    data: Vec<T>,
}

impl<T> SquareMatrix<T>
where
    T: PrimInt,
{
    /// Constructs a matrix from a flat, row-major vector.
    ///
    /// # Panics
    ///
    /// Panics if `data.len() != dim * dim`.
    pub fn from_flat(dim: usize, data: Vec<T>) -> Self {
        assert_eq!(
            data.len(),
            dim * dim,
            "called `SquareMatrix::from_flat` with inconsistent data length: dim = {}, data.len() = {}",
            dim,
            data.len()
        );

        Self { dim, data }
    }

    /// Constructs a matrix from nested rows.
    ///
    /// # Panics
    ///
    /// Panics if any row's length differs from the number of rows.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Self {
        let dim = rows.len();
        let mut data = Vec::with_capacity(dim * dim);

        for (i, row) in rows.into_iter().enumerate() {
            assert_eq!(
                row.len(),
                dim,
                "called `SquareMatrix::from_rows` with a non-square shape: row {} has length {}, expected {}",
                i,
                row.len(),
                dim
            );
            data.extend(row);
        }

        Self { dim, data }
    }

    /// Constructs a `dim` x `dim` matrix with all entries set to zero.
    #[inline]
    pub fn zeros(dim: usize) -> Self {
        Self {
            dim,
            data: vec![T::zero(); dim * dim],
        }
    }

    /// Returns the dimension of the matrix.
    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Returns the entry at `(row, col)`.
    #[inline]
    pub fn at(&self, row: usize, col: usize) -> T {
        debug_assert!(
            row < self.dim && col < self.dim,
            "called `SquareMatrix::at` out of bounds: the dim is {} but the entry is ({}, {})",
            self.dim,
            row,
            col
        );

        self.data[row * self.dim + col]
    }

    /// Sets the entry at `(row, col)`.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        debug_assert!(
            row < self.dim && col < self.dim,
            "called `SquareMatrix::set` out of bounds: the dim is {} but the entry is ({}, {})",
            self.dim,
            row,
            col
        );

        self.data[row * self.dim + col] = value;
    }

    /// Returns the flat, row-major data slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl<T> std::fmt::Display for SquareMatrix<T>
where
    T: PrimInt + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.dim {
            for col in 0..self.dim {
                write!(f, "\t{}", self.at(row, col))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
