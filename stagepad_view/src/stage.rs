// Copyright 2025 the Stagepad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Vec2;

/// Outline of the stage, used only by rendering collaborators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum StageShape {
    /// Rectangular stage of `width` × `depth`.
    #[default]
    Box,
    /// Circular stage of the given diameter.
    Cylinder,
    /// Hemispherical stage of the given diameter.
    Dome,
}

/// Physical stage dimensions, in meters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StageGeometry {
    /// Extent along X.
    pub width: f64,
    /// Extent along Y.
    pub depth: f64,
    /// Extent along Z.
    pub height: f64,
    /// Offset added to stage-relative X to get the physical position.
    pub origin_x: f64,
    /// Offset added to stage-relative Y to get the physical position.
    pub origin_y: f64,
    /// Outline used when drawing the stage.
    pub shape: StageShape,
    /// Diameter for cylinder and dome stages.
    pub diameter: f64,
}

impl StageGeometry {
    /// Creates a box stage with its origin at the physical origin.
    #[must_use]
    pub fn new(width: f64, depth: f64) -> Self {
        Self {
            width,
            depth,
            height: 0.0,
            origin_x: 0.0,
            origin_y: 0.0,
            shape: StageShape::Box,
            diameter: width.min(depth),
        }
    }

    /// Returns a copy with the given origin offset.
    #[must_use]
    pub fn with_origin(mut self, origin_x: f64, origin_y: f64) -> Self {
        self.origin_x = origin_x;
        self.origin_y = origin_y;
        self
    }

    /// Returns a copy with the given height.
    #[must_use]
    pub fn with_height(mut self, height: f64) -> Self {
        self.height = height;
        self
    }

    /// Returns a copy with the given outline.
    #[must_use]
    pub fn with_shape(mut self, shape: StageShape, diameter: f64) -> Self {
        self.shape = shape;
        self.diameter = diameter;
        self
    }

    /// Origin offset as a vector.
    #[must_use]
    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.origin_x, self.origin_y)
    }
}

impl Default for StageGeometry {
    fn default() -> Self {
        Self::new(20.0, 10.0)
    }
}

/// Bounds applied to every [`ViewState`](crate::ViewState).
///
/// Use [`ViewLimits::for_stage`] to get the limits for a stage.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewLimits {
    /// Smallest visible width or height, in meters.
    pub min_view_size: f64,
    /// Largest visible width or height, in meters.
    pub max_view_size: f64,
    /// Largest pan offset magnitude per axis, in meters.
    pub pan_limit: f64,
}

impl ViewLimits {
    /// Lower bound of [`ViewLimits::min_view_size`] regardless of stage size.
    pub const MIN_VIEW_FLOOR: f64 = 2.0;
    /// Default upper bound on the visible extent.
    pub const MAX_VIEW_SIZE: f64 = 100.0;
    /// Default pan bound.
    pub const PAN_LIMIT: f64 = 50.0;

    /// Limits for a stage: the view never zooms in past the stage's smaller
    /// dimension (or 2 m) and never out past 100 m.
    ///
    /// If the stage is so large that the lower bound exceeds the upper one,
    /// the upper bound is raised to match.
    #[must_use]
    pub fn for_stage(stage: &StageGeometry) -> Self {
        let min_view_size = stage.width.min(stage.depth).max(Self::MIN_VIEW_FLOOR);
        Self {
            min_view_size,
            max_view_size: Self::MAX_VIEW_SIZE.max(min_view_size),
            pan_limit: Self::PAN_LIMIT,
        }
    }

    /// Clamps a visible extent into `[min_view_size, max_view_size]`.
    #[must_use]
    pub fn clamp_view_size(&self, size: f64) -> f64 {
        if size.is_nan() {
            return self.max_view_size;
        }
        size.clamp(self.min_view_size, self.max_view_size)
    }

    /// Clamps each pan axis into `[-pan_limit, pan_limit]`.
    #[must_use]
    pub fn clamp_pan(&self, pan: Vec2) -> Vec2 {
        let limit = self.pan_limit.abs();
        let axis = |v: f64| if v.is_nan() { 0.0 } else { v.clamp(-limit, limit) };
        Vec2::new(axis(pan.x), axis(pan.y))
    }
}
