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

//! Objective evaluation and pruning bound for the assignment search.
//!
//! `exact_cost` is the QAP objective itself. `reduced_cost_bound` is the
//! relaxation used to prune: for every ordered pair of locations `(a, b)` it
//! takes the diagonal/off-diagonal distance difference
//! `d[a][a] - d[a][b] + d[b][b] - d[b][a]`, scales it by the flow between the
//! facilities currently placed at `a` and `b`, and sums the resulting matrix.
//! With a zero distance diagonal (the usual QAP shape) every term is
//! non-positive, so the bound never exceeds the true cost of any assignment
//! reachable from the evaluated permutation by further swaps.
//!
//! The bound is evaluated over the entire current permutation, not only the
//! fixed prefix, and both matrices may be asymmetric.

use crate::num::SolverNumeric;
use qap_model::{index::LocationIndex, instance::QapInstance, permutation::Permutation};

/// Computes the exact objective `Σ d[i][j] * flow[perm[i]][perm[j]]` in
/// O(n²).
///
/// # Panics
///
/// In debug builds, panics if the permutation length does not match the
/// instance size.
pub fn exact_cost<T>(instance: &QapInstance<T>, permutation: &Permutation) -> T
where
    T: SolverNumeric,
{
    let n = instance.n();
    debug_assert_eq!(
        permutation.len(),
        n,
        "called `exact_cost` with a permutation of length {} on an instance of size {}",
        permutation.len(),
        n
    );

    let mut total = T::zero();
    for i in 0..n {
        let from = LocationIndex::new(i);
        let facility_from = permutation.facility_at(from);
        for j in 0..n {
            let to = LocationIndex::new(j);
            let facility_to = permutation.facility_at(to);
            total = total + instance.distance(from, to) * instance.flow(facility_from, facility_to);
        }
    }
    total
}

/// Computes the reduced-cost relaxation bound for the given permutation.
///
/// # Panics
///
/// In debug builds, panics if the permutation length does not match the
/// instance size.
pub fn reduced_cost_bound<T>(instance: &QapInstance<T>, permutation: &Permutation) -> T
where
    T: SolverNumeric,
{
    let n = instance.n();
    debug_assert_eq!(
        permutation.len(),
        n,
        "called `reduced_cost_bound` with a permutation of length {} on an instance of size {}",
        permutation.len(),
        n
    );

    let mut bound = T::zero();
    for a in 0..n {
        let at_a = LocationIndex::new(a);
        let facility_a = permutation.facility_at(at_a);
        for b in 0..n {
            let at_b = LocationIndex::new(b);
            let facility_b = permutation.facility_at(at_b);

            let diff = instance.distance(at_a, at_a) - instance.distance(at_a, at_b)
                + instance.distance(at_b, at_b)
                - instance.distance(at_b, at_a);
            bound = bound + diff * instance.flow(facility_a, facility_b);
        }
    }
    bound
}

#[cfg(test)]
mod tests {
    use super::*;
    use qap_model::matrix::SquareMatrix;

    fn li(i: usize) -> LocationIndex {
        LocationIndex::new(i)
    }

    fn instance_3x3() -> QapInstance<i64> {
        let distance = SquareMatrix::from_rows(vec![vec![0, 1, 2], vec![1, 0, 3], vec![2, 3, 0]]);
        let flow = SquareMatrix::from_rows(vec![vec![0, 5, 1], vec![5, 0, 2], vec![1, 2, 0]]);
        QapInstance::new(distance, flow)
    }

    /// Enumerates all permutations of length `n` via Heap's algorithm.
    fn all_permutations(n: usize) -> Vec<Permutation> {
        fn heap(k: usize, current: &mut Permutation, out: &mut Vec<Permutation>) {
            if k <= 1 {
                out.push(current.clone());
                return;
            }
            for i in 0..k {
                heap(k - 1, current, out);
                if k % 2 == 0 {
                    current.swap(li(i), li(k - 1));
                } else {
                    current.swap(li(0), li(k - 1));
                }
            }
        }

        let mut out = Vec::new();
        let mut current = Permutation::identity(n);
        if n == 0 {
            out.push(current);
        } else {
            heap(n, &mut current, &mut out);
        }
        out
    }

    #[test]
    fn test_exact_cost_identity() {
        // Identity: cost = Σ d[i][j] * f[i][j]
        //         = 2*(1*5) + 2*(2*1) + 2*(3*2) = 26
        let instance = instance_3x3();
        let identity = Permutation::identity(3);
        assert_eq!(exact_cost(&instance, &identity), 26);
    }

    #[test]
    fn test_exact_cost_after_swap() {
        let instance = instance_3x3();
        let mut p = Permutation::identity(3);
        p.swap(li(0), li(1));
        // perm = [1, 0, 2]:
        //   d[0][1]*f[1][0] + d[1][0]*f[0][1] = 1*5 + 1*5 = 10
        //   d[0][2]*f[1][2] + d[2][0]*f[2][1] = 2*2 + 2*2 = 8
        //   d[1][2]*f[0][2] + d[2][1]*f[2][0] = 3*1 + 3*1 = 6
        assert_eq!(exact_cost(&instance, &p), 24);
    }

    #[test]
    fn test_empty_instance_costs_zero() {
        let instance = QapInstance::new(SquareMatrix::<i64>::zeros(0), SquareMatrix::zeros(0));
        let p = Permutation::identity(0);
        assert_eq!(exact_cost(&instance, &p), 0);
        assert_eq!(reduced_cost_bound(&instance, &p), 0);
    }

    #[test]
    fn test_bound_is_non_positive_for_zero_diagonal() {
        let instance = instance_3x3();
        for p in all_permutations(3) {
            assert!(reduced_cost_bound(&instance, &p) <= 0);
        }
    }

    #[test]
    fn test_bound_never_exceeds_exact_cost() {
        let instance = instance_3x3();
        for p in all_permutations(3) {
            assert!(
                reduced_cost_bound(&instance, &p) <= exact_cost(&instance, &p),
                "bound exceeded cost for {}",
                p
            );
        }
    }

    #[test]
    fn test_bound_handles_asymmetric_matrices() {
        let distance = SquareMatrix::from_rows(vec![vec![0i64, 4], vec![1, 0]]);
        let flow = SquareMatrix::from_rows(vec![vec![0i64, 2], vec![7, 0]]);
        let instance = QapInstance::new(distance, flow);
        let identity = Permutation::identity(2);

        // diff(0,1) = 0 - 4 + 0 - 1 = -5; diff(1,0) = 0 - 1 + 0 - 4 = -5
        // bound = -5*f[0][1] + -5*f[1][0] = -10 - 35 = -45
        assert_eq!(reduced_cost_bound(&instance, &identity), -45);
        // cost = 4*f[0][1] + 1*f[1][0] = 8 + 7 = 15
        assert_eq!(exact_cost(&instance, &identity), 15);
    }
}
