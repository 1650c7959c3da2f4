// Copyright 2025 the Stagepad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use stagepad_coords::{CoordinateMode, Point3, cartesian_to_display, display_to_cartesian};

fn points(n: usize) -> Vec<Point3> {
    (0..n)
        .map(|i| {
            let t = i as f64 * 0.37;
            Point3::new(10.0 * t.cos(), 5.0 * t.sin(), (i % 7) as f64 * 0.5)
        })
        .collect()
}

fn bench_coords(c: &mut Criterion) {
    let mut group = c.benchmark_group("stagepad_coords");
    let pts = points(1024);
    for mode in [
        CoordinateMode::Cartesian,
        CoordinateMode::Cylindrical,
        CoordinateMode::Spherical,
    ] {
        group.bench_function(format!("round_trip({mode:?})"), |b| {
            b.iter(|| {
                let mut acc = 0.0;
                for &p in &pts {
                    let d = cartesian_to_display(mode, black_box(p));
                    acc += display_to_cartesian(mode, d).z;
                }
                black_box(acc)
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_coords);
criterion_main!(benches);
