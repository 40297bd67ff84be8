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

use crate::{
    index::{FacilityIndex, LocationIndex},
    matrix::SquareMatrix,
};
use num_traits::PrimInt;

/// An immutable Quadratic Assignment Problem instance.
///
/// Holds the n x n distance matrix between locations and the n x n flow
/// matrix between facilities. No symmetry is assumed for either matrix.
/// The instance is read-only for the lifetime of a solve.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QapInstance<T> {
    distance: SquareMatrix<T>,
    flow: SquareMatrix<T>,
}

impl<T> QapInstance<T>
where
    T: PrimInt,
{
    /// Constructs a new instance from a distance and a flow matrix.
    ///
    /// # Panics
    ///
    /// Panics if the two matrices have different dimensions.
    pub fn new(distance: SquareMatrix<T>, flow: SquareMatrix<T>) -> Self {
        assert_eq!(
            distance.dim(),
            flow.dim(),
            "called `QapInstance::new` with mismatched matrices: distance is {0}x{0}, flow is {1}x{1}",
            distance.dim(),
            flow.dim()
        );

        Self { distance, flow }
    }

    /// Returns the problem size n.
    #[inline]
    pub fn n(&self) -> usize {
        self.distance.dim()
    }

    /// Returns the distance between two locations.
    #[inline]
    pub fn distance(&self, from: LocationIndex, to: LocationIndex) -> T {
        self.distance.at(from.get(), to.get())
    }

    /// Returns the flow between two facilities.
    #[inline]
    pub fn flow(&self, from: FacilityIndex, to: FacilityIndex) -> T {
        self.flow.at(from.get(), to.get())
    }

    /// Returns the distance matrix.
    #[inline]
    pub fn distance_matrix(&self) -> &SquareMatrix<T> {
        &self.distance
    }

    /// Returns the flow matrix.
    #[inline]
    pub fn flow_matrix(&self) -> &SquareMatrix<T> {
        &self.flow
    }
}

impl<T> std::fmt::Display for QapInstance<T>
where
    T: PrimInt + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "QapInstance(n = {})", self.n())?;
        writeln!(f, "Distance:")?;
        write!(f, "{}", self.distance)?;
        writeln!(f, "Flow:")?;
        write!(f, "{}", self.flow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn li(i: usize) -> LocationIndex {
        LocationIndex::new(i)
    }

    fn fi(i: usize) -> FacilityIndex {
        FacilityIndex::new(i)
    }

    #[test]
    fn test_new_and_accessors() {
        let distance = SquareMatrix::from_rows(vec![vec![0i64, 1], vec![2, 0]]);
        let flow = SquareMatrix::from_rows(vec![vec![0i64, 5], vec![7, 0]]);
        let instance = QapInstance::new(distance, flow);

        assert_eq!(instance.n(), 2);
        assert_eq!(instance.distance(li(0), li(1)), 1);
        assert_eq!(instance.distance(li(1), li(0)), 2);
        assert_eq!(instance.flow(fi(0), fi(1)), 5);
        assert_eq!(instance.flow(fi(1), fi(0)), 7);
    }

    #[test]
    #[should_panic(expected = "called `QapInstance::new` with mismatched matrices")]
    fn test_new_panics_on_dimension_mismatch() {
        let distance = SquareMatrix::<i64>::zeros(2);
        let flow = SquareMatrix::<i64>::zeros(3);
        let _ = QapInstance::new(distance, flow);
    }

    #[test]
    fn test_empty_instance() {
        let instance = QapInstance::new(SquareMatrix::<i64>::zeros(0), SquareMatrix::zeros(0));
        assert_eq!(instance.n(), 0);
    }
}
