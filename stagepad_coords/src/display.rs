// Copyright 2025 the Stagepad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::angle::{clamp_elevation, normalize_angle};
use crate::convert::{
    Cylindrical, Spherical, cartesian_to_cylindrical, cartesian_to_spherical,
    cylindrical_to_cartesian, spherical_to_cartesian,
};
use crate::point::Point3;

/// How a stage position is presented to the operator.
///
/// The numeric index (see [`CoordinateMode::index`]) matches the numbering the
/// remote engine uses for its per-input coordinate mode parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum CoordinateMode {
    /// `(x, y, z)` in meters.
    #[default]
    Cartesian,
    /// `(radius, azimuth, height)`.
    Cylindrical,
    /// `(radius, azimuth, elevation)`.
    Spherical,
}

impl CoordinateMode {
    /// Returns the mode for a numeric index, falling back to Cartesian for
    /// unknown values.
    #[must_use]
    pub fn from_index(index: u8) -> Self {
        match index {
            1 => Self::Cylindrical,
            2 => Self::Spherical,
            _ => Self::Cartesian,
        }
    }

    /// Returns the numeric index of this mode.
    #[must_use]
    pub fn index(self) -> u8 {
        match self {
            Self::Cartesian => 0,
            Self::Cylindrical => 1,
            Self::Spherical => 2,
        }
    }
}

/// Three presentation values whose meaning depends on a [`CoordinateMode`].
///
/// This is purely a projection of a [`Point3`] and is never stored on its own.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DisplayTriple {
    /// `x` or radius.
    pub v1: f64,
    /// `y` or azimuth.
    pub v2: f64,
    /// `z`, height or elevation.
    pub v3: f64,
}

impl DisplayTriple {
    /// Creates a new triple.
    #[must_use]
    pub const fn new(v1: f64, v2: f64, v3: f64) -> Self {
        Self { v1, v2, v3 }
    }
}

/// Projects a Cartesian position into the values shown for `mode`.
#[must_use]
pub fn cartesian_to_display(mode: CoordinateMode, p: Point3) -> DisplayTriple {
    match mode {
        CoordinateMode::Cartesian => DisplayTriple::new(p.x, p.y, p.z),
        CoordinateMode::Cylindrical => {
            let c = cartesian_to_cylindrical(p);
            DisplayTriple::new(c.radius, c.azimuth, c.height)
        }
        CoordinateMode::Spherical => {
            let s = cartesian_to_spherical(p);
            DisplayTriple::new(s.radius, s.azimuth, s.elevation)
        }
    }
}

/// Converts operator-entered values for `mode` back into a Cartesian position.
///
/// For the polar modes the radius is forced non-negative and the azimuth is
/// normalized first. Spherical elevation is clamped; cylindrical height is
/// passed through unchanged.
#[must_use]
pub fn display_to_cartesian(mode: CoordinateMode, t: DisplayTriple) -> Point3 {
    match mode {
        CoordinateMode::Cartesian => Point3::new(t.v1, t.v2, t.v3),
        CoordinateMode::Cylindrical => cylindrical_to_cartesian(Cylindrical {
            radius: t.v1.max(0.0),
            azimuth: normalize_angle(t.v2),
            height: t.v3,
        }),
        CoordinateMode::Spherical => spherical_to_cartesian(Spherical {
            radius: t.v1.max(0.0),
            azimuth: normalize_angle(t.v2),
            elevation: clamp_elevation(t.v3),
        }),
    }
}
