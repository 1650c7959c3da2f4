// Copyright 2025 the Stagepad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stagepad Coords: coordinate-system math for stage positions.
//!
//! Every spatial entity on the stage is stored as a Cartesian [`Point3`] in
//! meters. Operators, however, often think in terms of distance and direction
//! from the stage origin, so positions can be *presented* in one of three
//! [`CoordinateMode`]s:
//!
//! - **Cartesian**: `(x, y, z)` as stored.
//! - **Cylindrical**: `(radius, azimuth, height)`.
//! - **Spherical**: `(radius, azimuth, elevation)`.
//!
//! Azimuth is measured in degrees from +Y (upstage) toward +X and normalized
//! into `(-180, 180]`; elevation is clamped into `[-90, 90]`.
//!
//! All functions are pure and total. Degenerate input (a radius below
//! [`RADIUS_EPSILON`]) reports an azimuth of zero instead of failing.
//!
//! ## Minimal example
//!
//! ```rust
//! use stagepad_coords::{CoordinateMode, Point3, cartesian_to_display, display_to_cartesian};
//!
//! let p = Point3::new(1.0, 0.0, 0.0);
//! let shown = cartesian_to_display(CoordinateMode::Cylindrical, p);
//! assert!((shown.v1 - 1.0).abs() < 1e-9);
//! assert!((shown.v2 - 90.0).abs() < 1e-9);
//!
//! let back = display_to_cartesian(CoordinateMode::Cylindrical, shown);
//! assert!((back.x - 1.0).abs() < 1e-9);
//! ```
//!
//! Single-precision callers widen with `Point3::from([x, y, z])`; all math
//! runs in `f64`.
//!
//! This crate is `no_std`.

#![no_std]

mod angle;
mod convert;
mod display;
mod point;

pub use angle::{RADIUS_EPSILON, clamp_elevation, normalize_angle};
pub use convert::{
    Cylindrical, Spherical, cartesian_to_cylindrical, cartesian_to_spherical,
    cylindrical_to_cartesian, spherical_to_cartesian,
};
pub use display::{CoordinateMode, DisplayTriple, cartesian_to_display, display_to_cartesian};
pub use point::Point3;
