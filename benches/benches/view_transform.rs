// Copyright 2025 the Stagepad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size, Vec2};
use stagepad_view::{PinchSample, StageGeometry, ViewLimits, ViewState, ViewTransform};

fn bench_view(c: &mut Criterion) {
    let mut group = c.benchmark_group("stagepad_view");
    let stage = StageGeometry::new(20.0, 10.0).with_origin(1.5, -2.0);
    let limits = ViewLimits::for_stage(&stage);
    let configs = [
        ("fit", ViewState::fit_stage(&stage)),
        ("zoomed", ViewState::new(Vec2::new(4.0, 2.0), 10.0, 10.0, &limits)),
        ("zoomed_out", ViewState::new(Vec2::ZERO, 100.0, 100.0, &limits)),
    ];
    let pixels: Vec<Point> = (0..1024)
        .map(|i| Point::new(f64::from(i % 32) * 30.0, f64::from(i / 32) * 15.0))
        .collect();

    for (name, state) in configs {
        let view = ViewTransform::new(state, stage, Size::new(1000.0, 500.0), 20.0);
        group.bench_function(format!("round_trip({name})"), |b| {
            b.iter(|| {
                let mut acc = 0.0;
                for &px in &pixels {
                    let m = view.canvas_to_stage(black_box(px));
                    acc += view.stage_to_canvas(m).x;
                }
                black_box(acc)
            });
        });
    }

    let view = ViewTransform::new(ViewState::fit_stage(&stage), stage, Size::new(1000.0, 500.0), 20.0);
    let sample = PinchSample {
        previous_centroid: Point::new(400.0, 200.0),
        current_centroid: Point::new(410.0, 195.0),
        previous_distance: 120.0,
        current_distance: 126.0,
    };
    group.bench_function("pan_zoom", |b| {
        b.iter(|| black_box(view.pan_zoom(black_box(&sample))));
    });
    group.finish();
}

criterion_group!(benches, bench_view);
criterion_main!(benches);
