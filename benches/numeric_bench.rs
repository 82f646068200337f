// Copyright (c) 2026, Chad Hogan
// All rights reserved.
//
// This source code is licensed under the BSD-3-Clause license found in the
// LICENSE file in the root directory of this source tree.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use fteik::numeric::{max3, min3};

fn make_triples(n: usize) -> Vec<(f64, f64, f64)> {
    (0..n)
        .map(|i| {
            let x = i as f64;
            ((x * 0.37).sin(), (x * 1.13).cos(), (x * 0.71).sin())
        })
        .collect()
}

/// Generic helpers against the f64 inherent methods over 64k triples.
fn bench_ternary(c: &mut Criterion) {
    let triples = make_triples(1 << 16);

    c.bench_function("max3_min3_generic", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for &(x, y, z) in &triples {
                acc += max3(x, y, z) - min3(x, y, z);
            }
            black_box(acc)
        })
    });

    c.bench_function("max3_min3_f64_methods", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for &(x, y, z) in &triples {
                acc += x.max(y).max(z) - x.min(y).min(z);
            }
            black_box(acc)
        })
    });
}

criterion_group!(benches, bench_ternary);
criterion_main!(benches);
