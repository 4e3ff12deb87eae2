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

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use numrange::{range, range_between, range_step};
use std::hint::black_box;

const SIZES: [u64; 3] = [1_000, 100_000, 1_000_000];

fn bench_unit_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("unit_step");

    for &n in SIZES.iter() {
        group.throughput(Throughput::Elements(n));

        group.bench_with_input(BenchmarkId::new("numrange", n), &n, |b, &n| {
            b.iter(|| {
                let mut acc = 0u64;
                for i in range(black_box(n)) {
                    acc = acc.wrapping_add(i);
                }
                black_box(acc)
            })
        });

        group.bench_with_input(BenchmarkId::new("std", n), &n, |b, &n| {
            b.iter(|| {
                let mut acc = 0u64;
                for i in 0..black_box(n) {
                    acc = acc.wrapping_add(i);
                }
                black_box(acc)
            })
        });

        group.bench_with_input(BenchmarkId::new("numrange_descending", n), &n, |b, &n| {
            b.iter(|| {
                let mut acc = 0u64;
                for i in range_between(black_box(n), 0) {
                    acc = acc.wrapping_add(i);
                }
                black_box(acc)
            })
        });
    }

    group.finish();
}

fn bench_stepped(c: &mut Criterion) {
    let mut group = c.benchmark_group("stepped");

    for &n in SIZES.iter() {
        group.throughput(Throughput::Elements(n / 3));

        group.bench_with_input(BenchmarkId::new("numrange", n), &n, |b, &n| {
            b.iter(|| {
                let mut acc = 0u64;
                for i in range_step(0, black_box(n), 3) {
                    acc = acc.wrapping_add(i);
                }
                black_box(acc)
            })
        });

        group.bench_with_input(BenchmarkId::new("std_step_by", n), &n, |b, &n| {
            b.iter(|| {
                let mut acc = 0u64;
                for i in (0..black_box(n)).step_by(3) {
                    acc = acc.wrapping_add(i);
                }
                black_box(acc)
            })
        });
    }

    group.finish();
}

fn bench_float(c: &mut Criterion) {
    let mut group = c.benchmark_group("float");

    for &n in SIZES.iter() {
        let stop = n as f64;
        group.throughput(Throughput::Elements(n));

        group.bench_with_input(BenchmarkId::new("unit", n), &stop, |b, &stop| {
            b.iter(|| {
                let mut acc = 0.0f64;
                for x in range(black_box(stop)) {
                    acc += x;
                }
                black_box(acc)
            })
        });

        group.bench_with_input(BenchmarkId::new("stepped", n), &stop, |b, &stop| {
            b.iter(|| {
                let mut acc = 0.0f64;
                for x in range_step(0.0, black_box(stop), 1.0) {
                    acc += x;
                }
                black_box(acc)
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_unit_step, bench_stepped, bench_float);
criterion_main!(benches);
