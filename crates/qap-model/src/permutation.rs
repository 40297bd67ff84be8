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

use crate::index::{FacilityIndex, LocationIndex};

/// A bijection from locations to facilities.
///
/// `facility_at(location)` is the facility assigned to `location`. The only
/// mutation is `swap`, so a value that starts as the identity stays a
/// bijection at every observable point; there is no way to write an
/// arbitrary facility into a slot.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Permutation {
    slots: Vec<FacilityIndex>,
}

impl Permutation {
    /// Creates the identity permutation of length `n`.
    #[inline]
    pub fn identity(n: usize) -> Self {
        Self {
            slots: (0..n).map(FacilityIndex::new).collect(),
        }
    }

    /// Returns the number of locations.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if the permutation is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns the facility assigned to the given location.
    #[inline]
    pub fn facility_at(&self, location: LocationIndex) -> FacilityIndex {
        debug_assert!(
            location.get() < self.len(),
            "called `Permutation::facility_at` out of bounds: the len is {} but the index is {}",
            self.len(),
            location.get()
        );

        self.slots[location.get()]
    }

    /// Swaps the facilities assigned to two locations.
    #[inline]
    pub fn swap(&mut self, a: LocationIndex, b: LocationIndex) {
        debug_assert!(
            a.get() < self.len() && b.get() < self.len(),
            "called `Permutation::swap` out of bounds: the len is {} but the indices are ({}, {})",
            self.len(),
            a.get(),
            b.get()
        );

        self.slots.swap(a.get(), b.get());
    }

    /// Returns the assigned facilities as a slice indexed by location.
    #[inline]
    pub fn as_slice(&self) -> &[FacilityIndex] {
        &self.slots
    }

    /// Checks that every facility in `[0, n)` appears exactly once.
    ///
    /// Swap-only mutation preserves this structurally; the check backs the
    /// debug assertions in the search engine.
    pub fn is_valid_assignment(&self) -> bool {
        let n = self.len();
        let mut seen = vec![false; n];
        for &facility in &self.slots {
            if facility.get() >= n || seen[facility.get()] {
                return false;
            }
            seen[facility.get()] = true;
        }
        true
    }
}

impl std::fmt::Display for Permutation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, facility) in self.slots.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", facility.get())?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn li(i: usize) -> LocationIndex {
        LocationIndex::new(i)
    }

    #[test]
    fn test_identity() {
        let p = Permutation::identity(4);
        assert_eq!(p.len(), 4);
        for i in 0..4 {
            assert_eq!(p.facility_at(li(i)).get(), i);
        }
        assert!(p.is_valid_assignment());
    }

    #[test]
    fn test_swap_keeps_bijection() {
        let mut p = Permutation::identity(3);
        p.swap(li(0), li(2));
        assert_eq!(p.facility_at(li(0)).get(), 2);
        assert_eq!(p.facility_at(li(2)).get(), 0);
        assert!(p.is_valid_assignment());

        // Swapping back restores the identity.
        p.swap(li(0), li(2));
        assert_eq!(p, Permutation::identity(3));
    }

    #[test]
    fn test_self_swap_is_noop() {
        let mut p = Permutation::identity(3);
        p.swap(li(1), li(1));
        assert_eq!(p, Permutation::identity(3));
    }

    #[test]
    fn test_empty_permutation() {
        let p = Permutation::identity(0);
        assert!(p.is_empty());
        assert!(p.is_valid_assignment());
        assert_eq!(format!("{}", p), "[]");
    }

    #[test]
    fn test_display() {
        let mut p = Permutation::identity(3);
        p.swap(li(0), li(1));
        assert_eq!(format!("{}", p), "[1, 0, 2]");
    }
}
