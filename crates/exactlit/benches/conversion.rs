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
use exactlit::checked::TryAddLiteral;
use exactlit::{exact, real, val};
use std::hint::black_box;

fn bench_accumulate(c: &mut Criterion) {
    let mut group = c.benchmark_group("accumulate");

    for &n in &[1_000usize, 100_000] {
        group.bench_with_input(BenchmarkId::new("native", n), &n, |b, &n| {
            b.iter(|| {
                let mut acc: i64 = 0;
                for _ in 0..n {
                    acc = black_box(acc) + 3;
                }
                acc
            })
        });

        group.bench_with_input(BenchmarkId::new("literal", n), &n, |b, &n| {
            b.iter(|| {
                let mut acc: i64 = 0;
                for _ in 0..n {
                    acc = black_box(acc) + val!(3);
                }
                acc
            })
        });

        group.bench_with_input(BenchmarkId::new("exact", n), &n, |b, &n| {
            b.iter(|| {
                let mut acc: i64 = 0;
                for _ in 0..n {
                    acc = black_box(acc) + exact!(i64, 3);
                }
                acc
            })
        });

        group.bench_with_input(BenchmarkId::new("checked", n), &n, |b, &n| {
            b.iter(|| {
                let mut acc: i64 = 0;
                for _ in 0..n {
                    acc = match black_box(acc).try_add_literal(val!(3)) {
                        Ok(v) => v,
                        Err(_) => break,
                    };
                }
                acc
            })
        });
    }

    group.finish();
}

fn bench_real_conversion(c: &mut Criterion) {
    c.bench_function("real_to_f32", |b| {
        b.iter(|| black_box(real!(0.5)).convert::<f32>())
    });
    c.bench_function("integer_to_f32", |b| {
        b.iter(|| black_box(val!(0x100_0001)).convert::<f32>())
    });
}

criterion_group!(benches, bench_accumulate, bench_real_conversion);
criterion_main!(benches);
