// Copyright 2025 the Stagepad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Round-trip tests for the `stagepad_coords` crate.
//!
//! These check that presentation in any [`CoordinateMode`] loses no position
//! information for non-degenerate points.

use stagepad_coords::{
    CoordinateMode, Point3, cartesian_to_cylindrical, cartesian_to_display,
    cartesian_to_spherical, cylindrical_to_cartesian, display_to_cartesian,
    spherical_to_cartesian,
};

const POINTS: [Point3; 12] = [
    Point3::new(1.0, 0.0, 0.0),
    Point3::new(0.0, 1.0, 2.0),
    Point3::new(-3.5, 2.0, 1.2),
    Point3::new(4.0, -4.0, 0.0),
    Point3::new(-0.5, -7.25, -1.0),
    Point3::new(12.0, 9.0, 3.3),
    Point3::new(0.01, 0.02, 0.5),
    Point3::new(-20.0, 0.5, 6.0),
    Point3::new(0.0, -1.0, 0.0),
    Point3::new(2.5, 2.5, -2.5),
    Point3::new(-1.0, 0.0, 10.0),
    Point3::new(33.0, -48.0, 0.75),
];

fn assert_close(a: Point3, b: Point3, tolerance: f64) {
    assert!(
        a.distance(b) < tolerance,
        "expected {a:?} and {b:?} to be within {tolerance}"
    );
}

#[test]
fn cylindrical_roundtrip() {
    for p in POINTS {
        let back = cylindrical_to_cartesian(cartesian_to_cylindrical(p));
        assert_close(back, p, 1e-3);
    }
}

#[test]
fn spherical_roundtrip() {
    for p in POINTS {
        let back = spherical_to_cartesian(cartesian_to_spherical(p));
        assert_close(back, p, 1e-3);
    }
}

#[test]
fn display_roundtrip_for_every_mode() {
    for mode in [
        CoordinateMode::Cartesian,
        CoordinateMode::Cylindrical,
        CoordinateMode::Spherical,
    ] {
        for p in POINTS {
            let shown = cartesian_to_display(mode, p);
            let back = display_to_cartesian(mode, shown);
            assert_close(back, p, 1e-3);
        }
    }
}

#[test]
fn displayed_angles_stay_in_range() {
    for p in POINTS {
        for mode in [CoordinateMode::Cylindrical, CoordinateMode::Spherical] {
            let shown = cartesian_to_display(mode, p);
            assert!(shown.v1 >= 0.0, "radius must be non-negative");
            assert!(shown.v2 > -180.0 && shown.v2 <= 180.0, "azimuth {}", shown.v2);
        }
        let s = cartesian_to_display(CoordinateMode::Spherical, p);
        assert!((-90.0..=90.0).contains(&s.v3), "elevation {}", s.v3);
    }
}

#[test]
fn single_precision_input_roundtrips() {
    let p = Point3::from([3.25_f32, -1.5, 0.75]);
    let back = display_to_cartesian(
        CoordinateMode::Spherical,
        cartesian_to_display(CoordinateMode::Spherical, p),
    );
    assert_close(back, p, 1e-3);
}
