use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use num_bigint::BigInt;
use num_traits::One;

use recon::interpolate::interpolate_at_zero;
use recon::share::Point;

fn fixed_points(k: usize) -> Vec<Point> {
    // deterministic polynomial with ~300-bit coefficients
    let coeffs: Vec<BigInt> = (0..k)
        .map(|i| (BigInt::one() << (250 + 7 * i)) + BigInt::from(i as u64 + 1))
        .collect();
    (1..=k as u64)
        .map(|x| {
            let x = BigInt::from(x);
            let y = coeffs.iter().rev().fold(BigInt::from(0), |acc, c| acc * &x + c);
            Point::new(x, y)
        })
        .collect()
}

fn bench_interpolate(c: &mut Criterion) {
    let mut group = c.benchmark_group("interpolate_at_zero");
    for k in [3usize, 10, 25] {
        let points = fixed_points(k);
        group.bench_with_input(BenchmarkId::from_parameter(k), &points, |b, points| {
            b.iter(|| interpolate_at_zero(points).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_interpolate);
criterion_main!(benches);
