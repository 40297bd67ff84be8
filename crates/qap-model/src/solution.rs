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
    permutation::Permutation,
};
use num_traits::PrimInt;

/// A complete assignment of facilities to locations together with its cost.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution<T> {
    /// The total cost of this assignment.
    cost: T,

    /// The assignment itself; `assignment[location]` is the facility placed
    /// at that location.
    assignment: Permutation,
}

impl<T> Solution<T>
where
    T: PrimInt,
{
    /// Constructs a new `Solution`.
    #[inline]
    pub fn new(cost: T, assignment: Permutation) -> Self {
        Self { cost, assignment }
    }

    /// Returns the total cost of this solution.
    #[inline]
    pub fn cost(&self) -> T {
        self.cost
    }

    /// Returns the assignment.
    #[inline]
    pub fn assignment(&self) -> &Permutation {
        &self.assignment
    }

    /// Returns the facility assigned to a specific location.
    #[inline]
    pub fn facility_at(&self, location: LocationIndex) -> FacilityIndex {
        self.assignment.facility_at(location)
    }

    /// Returns the number of locations in this solution.
    #[inline]
    pub fn num_locations(&self) -> usize {
        self.assignment.len()
    }
}

impl<T> std::fmt::Display for Solution<T>
where
    T: PrimInt + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Solution Summary")?;
        writeln!(f, "   Cost: {}", self.cost)?;
        writeln!(f)?;

        if self.num_locations() == 0 {
            writeln!(f, "   (No facilities assigned)")?;
            return Ok(());
        }

        writeln!(f, "   {:<10} | {:<10}", "Location", "Facility")?;
        writeln!(f, "   {:-<10}-+-{:-<10}", "", "")?;
        for i in 0..self.num_locations() {
            let facility = self.assignment.facility_at(LocationIndex::new(i));
            writeln!(f, "   {:<10} | {:<10}", i, facility.get())?;
        }

        Ok(())
    }
}
