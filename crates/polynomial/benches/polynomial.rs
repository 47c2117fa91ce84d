// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ntru_polynomial::{reduce_and_center_coefficients, Polynomial};
use rand::thread_rng;

fn create_test_polynomials(degree: usize) -> (Polynomial, Polynomial) {
    let mut coeffs1 = Vec::new();
    let mut coeffs2 = Vec::new();

    for i in 0..=degree {
        coeffs1.push(i as i64 + 1);
        coeffs2.push((i + 1) as i64 * 2);
    }

    (Polynomial::new(coeffs1), Polynomial::new(coeffs2))
}

fn benchmark_polynomial_addition(c: &mut Criterion) {
    let mut group = c.benchmark_group("polynomial_addition");

    for degree in [10, 50, 100, 500] {
        let (poly1, poly2) = create_test_polynomials(degree);

        group.bench_function(&format!("degree_{}", degree), |b| {
            b.iter(|| black_box(poly1.add(&poly2)))
        });
    }

    group.finish();
}

fn benchmark_polynomial_multiplication(c: &mut Criterion) {
    let mut group = c.benchmark_group("polynomial_multiplication");

    for degree in [5, 10, 20, 50] {
        let (poly1, poly2) = create_test_polynomials(degree);

        group.bench_function(&format!("degree_{}", degree), |b| {
            b.iter(|| black_box(poly1.mul(&poly2)))
        });
    }

    group.finish();
}

fn benchmark_polynomial_evaluation(c: &mut Criterion) {
    let mut group = c.benchmark_group("polynomial_evaluation");

    for degree in [10, 20, 30] {
        let (poly1, _) = create_test_polynomials(degree);

        group.bench_function(&format!("degree_{}", degree), |b| {
            b.iter(|| black_box(poly1.evaluate(3)))
        });
    }

    group.finish();
}

fn benchmark_cyclic_reduction(c: &mut Criterion) {
    let mut group = c.benchmark_group("cyclic_reduction");

    // Product-length inputs, as produced by multiplying two ring elements.
    for dimension in [128usize, 256, 512] {
        let (poly, _) = create_test_polynomials(2 * dimension - 2);

        group.bench_function(&format!("dimension_{}", dimension), |b| {
            b.iter(|| black_box(poly.reduce_cyclic(dimension).unwrap()))
        });
    }

    group.finish();
}

fn benchmark_coefficient_reduction(c: &mut Criterion) {
    let mut group = c.benchmark_group("coefficient_reduction");

    for degree in [128, 256, 512] {
        let (poly, _) = create_test_polynomials(degree);

        group.bench_function(&format!("centered_degree_{}", degree), |b| {
            b.iter(|| black_box(poly.reduce_and_center(2048).unwrap()))
        });

        group.bench_function(&format!("slice_centered_degree_{}", degree), |b| {
            b.iter(|| black_box(reduce_and_center_coefficients(poly.coefficients(), 2048)))
        });
    }

    group.finish();
}

fn benchmark_ternary_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("ternary_sampling");
    let mut rng = thread_rng();

    for (dimension, weight) in [(251, 72), (509, 127)] {
        group.bench_function(&format!("dimension_{}_weight_{}", dimension, weight), |b| {
            b.iter(|| black_box(Polynomial::random_ternary(dimension, weight, &mut rng).unwrap()))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_polynomial_addition,
    benchmark_polynomial_multiplication,
    benchmark_polynomial_evaluation,
    benchmark_cyclic_reduction,
    benchmark_coefficient_reduction,
    benchmark_ternary_sampling
);
criterion_main!(benches);
