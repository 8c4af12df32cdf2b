//! Benchmarks for the hex algebra
//!
//! Measures performance of:
//! - Ring index computation
//! - Ring index to cell conversion
//! - Rotation and reflection
//! - Ring signatures

use constellation_hex::{ring_cell, Axis, Hex, Ring, RingSignature};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

/// Benchmark cell to ring index conversion
fn bench_ring_index(c: &mut Criterion) {
    let mut group = c.benchmark_group("ring_index");

    let cells = [
        Hex::ORIGIN,
        Hex::axial(1, 0),
        Hex::axial(5, -3),
        Hex::axial(-40, 17),
        Hex::axial(300, -650),
    ];

    for cell in cells {
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::new("ring", cell.ring()), &cell, |b, &h| {
            b.iter(|| black_box(h).ring_index())
        });
    }
    group.finish();
}

/// Benchmark ring index to cell conversion
fn bench_ring_cell(c: &mut Criterion) {
    let mut group = c.benchmark_group("ring_cell");

    for &ring in &[1u64, 10, 100, 1000] {
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::from_parameter(ring), &ring, |b, &n| {
            b.iter(|| ring_cell(black_box(n), black_box(n * 3 + 1)))
        });
    }
    group.finish();
}

/// Benchmark the symmetry group action
fn bench_symmetries(c: &mut Criterion) {
    let mut group = c.benchmark_group("symmetries");
    let cell = Hex::axial(17, -5);

    group.bench_function("rotate_all", |b| {
        b.iter(|| (0..6).map(|k| black_box(cell).rotate(k)).collect::<Vec<_>>())
    });
    group.bench_function("reflect_all", |b| {
        b.iter(|| Axis::ALL.map(|axis| black_box(cell).reflect(axis)))
    });
    group.finish();
}

/// Benchmark building a signature over a full ring
fn bench_ring_signature(c: &mut Criterion) {
    let mut group = c.benchmark_group("ring_signature");

    for &ring in &[1u64, 8, 64, 512] {
        let cells: Vec<Hex> = Ring::new(ring).step_by(2).collect();
        group.throughput(Throughput::Elements(cells.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(ring), &cells, |b, cells| {
            b.iter(|| RingSignature::of(black_box(cells), ring))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_ring_index,
    bench_ring_cell,
    bench_symmetries,
    bench_ring_signature,
);

criterion_main!(benches);
