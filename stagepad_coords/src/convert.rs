// Copyright 2025 the Stagepad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conversions between Cartesian, cylindrical and spherical representations.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use crate::angle::{RADIUS_EPSILON, clamp_elevation, normalize_angle};
use crate::point::Point3;

/// A position expressed as radius, azimuth and height.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Cylindrical {
    /// Horizontal distance from the origin, in meters.
    pub radius: f64,
    /// Azimuth in degrees from +Y toward +X, in `(-180, 180]`.
    pub azimuth: f64,
    /// Height in meters.
    pub height: f64,
}

/// A position expressed as radius, azimuth and elevation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Spherical {
    /// Distance from the origin, in meters.
    pub radius: f64,
    /// Azimuth in degrees from +Y toward +X, in `(-180, 180]`.
    pub azimuth: f64,
    /// Elevation in degrees above the floor plane, in `[-90, 90]`.
    pub elevation: f64,
}

/// Azimuth of the horizontal vector `(x, y)`, or zero when it is degenerate.
fn azimuth_of(x: f64, y: f64, horizontal_radius: f64) -> f64 {
    if horizontal_radius < RADIUS_EPSILON {
        0.0
    } else {
        normalize_angle(x.atan2(y).to_degrees())
    }
}

/// Converts a Cartesian position into cylindrical form.
#[must_use]
pub fn cartesian_to_cylindrical(p: Point3) -> Cylindrical {
    let radius = p.horizontal_radius();
    Cylindrical {
        radius,
        azimuth: azimuth_of(p.x, p.y, radius),
        height: p.z,
    }
}

/// Converts a cylindrical position into Cartesian form.
#[must_use]
pub fn cylindrical_to_cartesian(c: Cylindrical) -> Point3 {
    let theta = c.azimuth.to_radians();
    Point3::new(c.radius * theta.sin(), c.radius * theta.cos(), c.height)
}

/// Converts a Cartesian position into spherical form.
#[must_use]
pub fn cartesian_to_spherical(p: Point3) -> Spherical {
    let radius = p.radius();
    let horizontal = p.horizontal_radius();
    let elevation = if radius > RADIUS_EPSILON {
        (p.z / radius).clamp(-1.0, 1.0).asin().to_degrees()
    } else {
        0.0
    };
    Spherical {
        radius,
        azimuth: azimuth_of(p.x, p.y, horizontal),
        elevation: clamp_elevation(elevation),
    }
}

/// Converts a spherical position into Cartesian form.
#[must_use]
pub fn spherical_to_cartesian(s: Spherical) -> Point3 {
    let theta = s.azimuth.to_radians();
    let phi = s.elevation.to_radians();
    let horizontal = s.radius * phi.cos();
    Point3::new(
        horizontal * theta.sin(),
        horizontal * theta.cos(),
        s.radius * phi.sin(),
    )
}
