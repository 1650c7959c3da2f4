// Copyright 2025 the Stagepad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Radius, in meters, below which a direction is undefined.
///
/// Conversions report an azimuth (and elevation) of zero for vectors shorter
/// than this.
pub const RADIUS_EPSILON: f64 = 1e-4;

/// Reduces an angle in degrees into the half-open range `(-180, 180]`.
///
/// The wrap rule is "while above 180 subtract 360, while at or below -180
/// add 360", so `-180` itself maps to `180`. The reduction is computed with
/// a single remainder, which gives the same result as the loop without its
/// cost for large inputs.
///
/// Non-finite input returns `0.0`.
#[must_use]
pub fn normalize_angle(degrees: f64) -> f64 {
    if !degrees.is_finite() {
        return 0.0;
    }
    let mut wrapped = degrees % 360.0;
    if wrapped > 180.0 {
        wrapped -= 360.0;
    } else if wrapped <= -180.0 {
        wrapped += 360.0;
    }
    wrapped
}

/// Clamps an elevation angle in degrees into `[-90, 90]`.
#[must_use]
pub fn clamp_elevation(degrees: f64) -> f64 {
    degrees.clamp(-90.0, 90.0)
}
