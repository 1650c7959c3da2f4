// Copyright 2025 the Stagepad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stagepad View: the mapping between stage meters and canvas pixels.
//!
//! This crate provides a small, headless model of the touchscreen's view of
//! the stage. It focuses on:
//! - View state (pan + zoom, expressed as the visible width/height in meters).
//! - Coordinate conversion between stage meters and canvas pixels.
//! - View fitting (whole stage, or a bounding box of positions).
//! - Two-finger pan/zoom updates with clamping.
//!
//! It does **not** draw anything. Callers are expected to:
//! - Keep a [`ViewState`] per screen session and rebuild a [`ViewTransform`]
//!   whenever the state, the canvas size or the stage changes.
//! - Use the transform for hit testing and for placing markers, grids and
//!   labels at a higher layer.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use stagepad_view::{StageGeometry, ViewState, ViewTransform};
//!
//! let stage = StageGeometry::new(20.0, 10.0);
//! let state = ViewState::fit_stage(&stage);
//! let view = ViewTransform::new(state, stage, Size::new(1000.0, 500.0), 20.0);
//!
//! // The stage origin sits in the middle of the canvas.
//! let center = view.stage_to_canvas(Point::ORIGIN);
//! assert!((center.x - 500.0).abs() < 1e-9);
//! assert!((center.y - 250.0).abs() < 1e-9);
//!
//! // And a touch converts back into meters.
//! let meters = view.canvas_to_stage(center);
//! assert!(meters.x.abs() < 1e-9);
//! ```
//!
//! ## Design notes
//!
//! - The scale is **uniform**: whichever axis is more constrained by the
//!   canvas aspect ratio picks the pixels-per-meter value, and the other axis
//!   shows whatever extent fits.
//! - The usable canvas is inset by the marker radius on every side so marker
//!   circles never clip the canvas edge.
//! - Canvas Y grows downward while stage Y grows upstage, so Y is inverted.
//! - [`ViewState`] updates are functional: every fit or pan/zoom returns a
//!   new value instead of mutating shared state.
//! - Degenerate canvas or view sizes never panic; conversions fall back to
//!   the canvas center or the stage origin.
//!
//! This crate is `no_std`.

#![no_std]

mod stage;
mod state;
mod transform;

pub use stage::{StageGeometry, StageShape, ViewLimits};
pub use state::{FIT_STAGE_MARGIN, PinchSample, ViewState};
pub use transform::{GRID_TARGET_PX, ViewDebugInfo, ViewTransform};
