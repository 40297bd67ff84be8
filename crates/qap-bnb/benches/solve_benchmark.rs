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

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use qap_bnb::bnb::BnbSolver;
use qap_model::instance::QapInstance;
use qap_model::matrix::SquareMatrix;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;

/// Deterministic instance with a zero diagonal and entries in `[0, 50)`.
fn make_instance(n: usize, seed: u64) -> QapInstance<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let matrix = |rng: &mut StdRng| {
        let mut m = SquareMatrix::zeros(n);
        for i in 0..n {
            for j in 0..n {
                if i != j {
                    m.set(i, j, rng.gen_range(0..50));
                }
            }
        }
        m
    };
    let distance = matrix(&mut rng);
    let flow = matrix(&mut rng);
    QapInstance::new(distance, flow)
}

fn bench_solve_by_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve_benchmark");

    for n in [6usize, 8, 10] {
        let instance = make_instance(n, 0xbeef + n as u64);
        let solver = BnbSolver::new();

        group.bench_with_input(BenchmarkId::new("solve", n), &instance, |b, instance| {
            b.iter(|| {
                let outcome = solver.solve(black_box(instance));
                black_box(outcome.solution().cost())
            })
        });
    }
    group.finish();
}

fn bench_worker_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("worker_scaling");
    let instance = make_instance(9, 0xcafe);

    for workers in [1usize, 2, 4, 8] {
        let solver = BnbSolver::with_workers(workers);

        group.bench_with_input(
            BenchmarkId::new("workers", workers),
            &instance,
            |b, instance| {
                b.iter(|| {
                    let outcome = solver.solve(black_box(instance));
                    black_box(outcome.solution().cost())
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_solve_by_size, bench_worker_scaling);
criterion_main!(benches);
