// Copyright 2025 the Stagepad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size, Vec2};

use crate::stage::{StageGeometry, ViewLimits};

/// Margin applied by [`ViewState::fit_stage`].
pub const FIT_STAGE_MARGIN: f64 = 1.1;

/// Smallest span a fit operation will request before clamping, in meters.
const MIN_FIT_SPAN: f64 = 2.0;

/// Pan and zoom of the stage view.
///
/// `pan` is the physical position, in meters, shown at the center of the
/// canvas. `view_width` and `view_height` are the requested visible extent in
/// meters; smaller values mean more magnification. The actual visible extent
/// also depends on the canvas aspect ratio, see
/// [`ViewTransform::visible_extent`](crate::ViewTransform::visible_extent).
///
/// Values are always built through the constructors below, which clamp them
/// into the stage's [`ViewLimits`]. Updates return a new value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    /// Physical center of the visible window, in meters.
    pub pan: Vec2,
    /// Requested visible width, in meters.
    pub view_width: f64,
    /// Requested visible height, in meters.
    pub view_height: f64,
}

impl ViewState {
    /// Creates a state clamped into `limits`.
    #[must_use]
    pub fn new(pan: Vec2, view_width: f64, view_height: f64, limits: &ViewLimits) -> Self {
        Self {
            pan: limits.clamp_pan(pan),
            view_width: limits.clamp_view_size(view_width),
            view_height: limits.clamp_view_size(view_height),
        }
    }

    /// Shows the whole stage with a small margin, centered on the origin.
    #[must_use]
    pub fn fit_stage(stage: &StageGeometry) -> Self {
        let limits = ViewLimits::for_stage(stage);
        Self::new(
            Vec2::ZERO,
            stage.width * FIT_STAGE_MARGIN,
            stage.depth * FIT_STAGE_MARGIN,
            &limits,
        )
    }

    /// Centers the view on a stage-relative bounding box and sizes it to the
    /// box's span times `margin`.
    ///
    /// Spans are never requested below 2 m and the result is clamped into the
    /// stage's limits.
    #[must_use]
    pub fn fit_to_bounds(stage: &StageGeometry, bounds: Rect, margin: f64) -> Self {
        let limits = ViewLimits::for_stage(stage);
        let bounds = bounds.abs();
        let center = bounds.center().to_vec2() + stage.origin();
        let width = (bounds.width() * margin).max(MIN_FIT_SPAN);
        let height = (bounds.height() * margin).max(MIN_FIT_SPAN);
        let state = Self::new(center, width, height, &limits);
        if state.view_width != width || state.view_height != height {
            log::debug!(
                "fit request {width:.2}x{height:.2} m clamped to {:.2}x{:.2} m",
                state.view_width,
                state.view_height
            );
        }
        state
    }

    /// Fits the bounding box of a set of stage-relative positions.
    ///
    /// Returns `None` when `positions` is empty.
    #[must_use]
    pub fn fit_to_positions<I>(stage: &StageGeometry, positions: I, margin: f64) -> Option<Self>
    where
        I: IntoIterator<Item = Point>,
    {
        let mut iter = positions.into_iter();
        let first = iter.next()?;
        let bounds = iter.fold(Rect::from_points(first, first), |r, p| r.union_pt(p));
        Some(Self::fit_to_bounds(stage, bounds, margin))
    }

    /// Requested visible extent as a size.
    #[must_use]
    pub fn view_size(&self) -> Size {
        Size::new(self.view_width, self.view_height)
    }
}

/// One frame of a two-finger pan/zoom gesture, in canvas pixels.
///
/// Produced by the gesture layer from the pointers that are not dragging
/// anything; consumed by [`ViewTransform::pan_zoom`](crate::ViewTransform::pan_zoom).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchSample {
    /// Centroid of the free pointers on the previous frame.
    pub previous_centroid: Point,
    /// Centroid of the free pointers on this frame.
    pub current_centroid: Point,
    /// Distance between the first two free pointers on the previous frame.
    pub previous_distance: f64,
    /// Distance between the first two free pointers on this frame.
    pub current_distance: f64,
}

impl PinchSample {
    /// Zoom factor applied to the view extent: `previous / current`.
    ///
    /// Spreading the fingers shrinks the extent (zooms in). Degenerate
    /// distances yield `1.0`.
    #[must_use]
    pub fn zoom_factor(&self) -> f64 {
        if self.previous_distance <= f64::EPSILON || self.current_distance <= f64::EPSILON {
            return 1.0;
        }
        self.previous_distance / self.current_distance
    }

    /// Centroid motion in canvas pixels.
    #[must_use]
    pub fn pan_delta(&self) -> Vec2 {
        self.current_centroid - self.previous_centroid
    }
}
