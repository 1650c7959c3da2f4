// Copyright 2025 the Stagepad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Round-trip tests for the `stagepad_view` crate.
//!
//! These exercise `stage_to_canvas` / `canvas_to_stage` across pan and zoom
//! configurations, canvas aspect ratios and stage origin offsets.

use kurbo::{Point, Size, Vec2};
use stagepad_view::{StageGeometry, ViewLimits, ViewState, ViewTransform};

fn configurations() -> Vec<ViewTransform> {
    let stage = StageGeometry::new(20.0, 10.0);
    let offset_stage = StageGeometry::new(12.0, 8.0).with_origin(-3.0, 1.5);
    let limits = ViewLimits::for_stage(&stage);
    let offset_limits = ViewLimits::for_stage(&offset_stage);
    let wide = Size::new(1000.0, 500.0);
    let tall = Size::new(480.0, 900.0);

    vec![
        // Zero pan, stage-sized view.
        ViewTransform::new(ViewState::new(Vec2::ZERO, 20.0, 10.0, &limits), stage, wide, 20.0),
        // Fitted stage on a tall canvas.
        ViewTransform::new(ViewState::fit_stage(&stage), stage, tall, 24.0),
        // Maximum zoom-out.
        ViewTransform::new(
            ViewState::new(Vec2::ZERO, f64::MAX, f64::MAX, &limits),
            stage,
            wide,
            20.0,
        ),
        // Maximum zoom-in with a pan at the limit.
        ViewTransform::new(
            ViewState::new(Vec2::new(60.0, -60.0), 0.0, 0.0, &limits),
            stage,
            wide,
            10.0,
        ),
        // Offset stage origin with an arbitrary pan.
        ViewTransform::new(
            ViewState::new(Vec2::new(2.5, -4.0), 14.0, 30.0, &offset_limits),
            offset_stage,
            tall,
            16.0,
        ),
        // No marker inset.
        ViewTransform::new(
            ViewState::new(Vec2::new(-7.0, 3.0), 33.0, 12.0, &limits),
            stage,
            Size::new(640.0, 640.0),
            0.0,
        ),
    ]
}

#[test]
fn max_zoom_out_is_clamped() {
    let stage = StageGeometry::new(20.0, 10.0);
    let state = ViewState::new(Vec2::ZERO, f64::MAX, f64::MAX, &ViewLimits::for_stage(&stage));
    assert_eq!(state.view_width, 100.0);
    assert_eq!(state.view_height, 100.0);
}

#[test]
fn canvas_to_stage_to_canvas() {
    let pixels = [
        Point::new(0.0, 0.0),
        Point::new(20.0, 20.0),
        Point::new(333.3, 41.7),
        Point::new(480.0, 250.0),
        Point::new(999.0, 1.0),
    ];
    for view in configurations() {
        for px in pixels {
            let back = view.stage_to_canvas(view.canvas_to_stage(px));
            assert!(
                (back - px).hypot() < 1e-6,
                "{px:?} came back as {back:?} for {:?}",
                view.debug_info()
            );
        }
    }
}

#[test]
fn stage_to_canvas_to_stage() {
    let meters = [
        Point::new(0.0, 0.0),
        Point::new(10.0, 5.0),
        Point::new(-9.5, 4.25),
        Point::new(48.0, -48.0),
        Point::new(0.001, -0.002),
    ];
    for view in configurations() {
        for m in meters {
            let back = view.canvas_to_stage(view.stage_to_canvas(m));
            assert!(
                (back - m).hypot() < 1e-9,
                "{m:?} came back as {back:?} for {:?}",
                view.debug_info()
            );
        }
    }
}

#[test]
fn scale_is_uniform() {
    for view in configurations() {
        let a = view.stage_to_canvas(Point::new(0.0, 0.0));
        let b = view.stage_to_canvas(Point::new(1.0, 1.0));
        let ppm = view.pixels_per_meter();
        assert!(((b.x - a.x) - ppm).abs() < 1e-9);
        assert!(((a.y - b.y) - ppm).abs() < 1e-9);
    }
}

#[test]
fn pan_center_maps_to_canvas_center() {
    for view in configurations() {
        let pan = view.state().pan;
        let stage_pt = (pan - view.stage().origin()).to_point();
        let px = view.stage_to_canvas(stage_pt);
        assert!((px - view.canvas_center()).hypot() < 1e-9);
    }
}
