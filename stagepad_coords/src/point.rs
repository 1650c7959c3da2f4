// Copyright 2025 the Stagepad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::Point;

/// A Cartesian position on the stage, in meters.
///
/// `x` grows toward stage right, `y` grows upstage and `z` grows upward.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point3 {
    /// Lateral position in meters.
    pub x: f64,
    /// Depth position in meters (positive is upstage).
    pub y: f64,
    /// Height in meters.
    pub z: f64,
}

impl Point3 {
    /// The stage origin.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Creates a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Distance from the vertical axis through the origin.
    #[must_use]
    pub fn horizontal_radius(self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Distance from the origin.
    #[must_use]
    pub fn radius(self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Projection onto the stage floor plane.
    #[must_use]
    pub fn to_plane(self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Euclidean distance to another point.
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

impl From<[f64; 3]> for Point3 {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<[f32; 3]> for Point3 {
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self::new(f64::from(x), f64::from(y), f64::from(z))
    }
}

impl From<(Point, f64)> for Point3 {
    fn from((p, z): (Point, f64)) -> Self {
        Self::new(p.x, p.y, z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radii() {
        let p = Point3::new(3.0, 4.0, 12.0);
        assert_eq!(p.horizontal_radius(), 5.0);
        assert_eq!(p.radius(), 13.0);
        assert_eq!(p.to_plane(), Point::new(3.0, 4.0));
    }

    #[test]
    fn single_precision_widens() {
        let p = Point3::from([1.5_f32, -2.25, 0.5]);
        assert_eq!(p, Point3::new(1.5, -2.25, 0.5));
    }
}
