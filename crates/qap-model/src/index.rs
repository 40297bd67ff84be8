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

//! # Strongly Typed Indices (Zero-Cost)
//!
//! The QAP works with two distinct index spaces: locations (rows of the
//! distance matrix, positions of a permutation) and facilities (rows of the
//! flow matrix, values of a permutation). Raw `usize` invites accidental
//! swaps between the two; these wrappers encode the intent at the type level
//! while compiling down to a transparent `usize`.

macro_rules! define_index {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[repr(transparent)]
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(usize);

        impl $name {
            /// Creates a new index from a raw `usize`.
            #[inline(always)]
            pub const fn new(index: usize) -> Self {
                Self(index)
            }

            /// Returns the underlying `usize`.
            #[inline(always)]
            pub const fn get(&self) -> usize {
                self.0
            }
        }

        impl std::fmt::Debug for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<usize> for $name {
            fn from(index: usize) -> Self {
                Self::new(index)
            }
        }

        impl From<$name> for usize {
            fn from(index: $name) -> Self {
                index.0
            }
        }
    };
}

define_index!(
    /// A typed index for locations.
    ///
    /// Locations index the distance matrix and the positions of a
    /// permutation.
    LocationIndex
);

define_index!(
    /// A typed index for facilities.
    ///
    /// Facilities index the flow matrix and are the values a permutation
    /// assigns to locations.
    FacilityIndex
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_and_get() {
        let l = LocationIndex::new(10);
        assert_eq!(l.get(), 10);
        let f = FacilityIndex::new(3);
        assert_eq!(f.get(), 3);
    }

    #[test]
    fn test_conversions() {
        let l: LocationIndex = 42.into();
        assert_eq!(l.get(), 42);

        let raw: usize = l.into();
        assert_eq!(raw, 42);
    }

    #[test]
    fn test_debug_and_display() {
        let l = LocationIndex::new(7);
        assert_eq!(format!("{}", l), "LocationIndex(7)");
        assert_eq!(format!("{:?}", l), "LocationIndex(7)");

        let f = FacilityIndex::new(2);
        assert_eq!(format!("{}", f), "FacilityIndex(2)");
        assert_eq!(format!("{:?}", f), "FacilityIndex(2)");
    }

    #[test]
    fn test_ordering() {
        assert!(FacilityIndex::new(1) < FacilityIndex::new(2));
        assert_eq!(LocationIndex::new(5), LocationIndex::new(5));
    }
}
