// Copyright 2025 the Stagepad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size, Vec2};

use crate::stage::{StageGeometry, ViewLimits};
use crate::state::{PinchSample, ViewState};

/// Minimum on-canvas distance between grid lines suggested by
/// [`ViewTransform::suggest_grid_spacing`].
pub const GRID_TARGET_PX: f64 = 64.0;

/// Mapping between stage meters and canvas pixels for one [`ViewState`].
///
/// `ViewTransform` is an immutable value derived from a view state, the
/// stage geometry, the canvas size and the marker radius. It can be used to:
/// - Convert points, deltas and rectangles between stage and canvas space.
/// - Derive the uniform pixels-per-meter scale and the visible extent.
/// - Produce the next [`ViewState`] for a two-finger pan/zoom frame.
///
/// Stage coordinates here are *stage-relative*: the stage origin offset is
/// added before the pan is applied.
#[derive(Clone, Copy, Debug)]
pub struct ViewTransform {
    state: ViewState,
    stage: StageGeometry,
    limits: ViewLimits,
    canvas: Size,
    marker_radius: f64,
    effective: Size,
    pixels_per_meter: f64,
    extent: Size,
}

impl ViewTransform {
    /// Builds the transform for `state` on a canvas of `canvas` pixels.
    ///
    /// `marker_radius` insets the drawing area on every side.
    #[must_use]
    pub fn new(state: ViewState, stage: StageGeometry, canvas: Size, marker_radius: f64) -> Self {
        let mut t = Self {
            state,
            stage,
            limits: ViewLimits::for_stage(&stage),
            canvas,
            marker_radius,
            effective: Size::ZERO,
            pixels_per_meter: 0.0,
            extent: Size::ZERO,
        };
        t.rebuild_scale();
        t
    }

    /// Returns the same canvas and stage with a different view state.
    #[must_use]
    pub fn with_state(&self, state: ViewState) -> Self {
        Self::new(state, self.stage, self.canvas, self.marker_radius)
    }

    /// Returns the view state this transform was built from.
    #[must_use]
    pub fn state(&self) -> ViewState {
        self.state
    }

    /// Returns the stage geometry.
    #[must_use]
    pub fn stage(&self) -> &StageGeometry {
        &self.stage
    }

    /// Returns the zoom and pan limits for the stage.
    #[must_use]
    pub fn limits(&self) -> ViewLimits {
        self.limits
    }

    /// Returns the full canvas size in pixels.
    #[must_use]
    pub fn canvas_size(&self) -> Size {
        self.canvas
    }

    /// Returns the marker radius in pixels.
    #[must_use]
    pub fn marker_radius(&self) -> f64 {
        self.marker_radius
    }

    /// Canvas size minus the marker inset on both sides of each axis.
    #[must_use]
    pub fn effective_canvas(&self) -> Size {
        self.effective
    }

    /// Uniform scale, or `0.0` when the transform is degenerate.
    #[must_use]
    pub fn pixels_per_meter(&self) -> f64 {
        self.pixels_per_meter
    }

    /// Inverse of [`ViewTransform::pixels_per_meter`], or `0.0` when degenerate.
    #[must_use]
    pub fn meters_per_pixel(&self) -> f64 {
        if self.is_degenerate() {
            0.0
        } else {
            1.0 / self.pixels_per_meter
        }
    }

    /// Visible width and height in meters after aspect correction.
    ///
    /// The axis that constrains the scale shows exactly the requested extent;
    /// the other axis shows more.
    #[must_use]
    pub fn visible_extent(&self) -> Size {
        self.extent
    }

    /// Returns `true` when the canvas or the view has no usable area.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        !(self.pixels_per_meter > 0.0 && self.pixels_per_meter.is_finite())
    }

    /// Center of the full canvas.
    #[must_use]
    pub fn canvas_center(&self) -> Point {
        Point::new(self.canvas.width * 0.5, self.canvas.height * 0.5)
    }

    /// Converts a stage-relative position in meters into canvas pixels.
    ///
    /// Degenerate transforms map everything to the canvas center.
    #[must_use]
    pub fn stage_to_canvas(&self, stage_pt: Point) -> Point {
        if self.is_degenerate() {
            return self.canvas_center();
        }
        let physical = stage_pt + self.stage.origin();
        let rel = physical - self.state.pan.to_point();
        let r = self.marker_radius;
        Point::new(
            (rel.x / self.extent.width + 0.5) * self.effective.width + r,
            (0.5 - rel.y / self.extent.height) * self.effective.height + r,
        )
    }

    /// Converts a canvas position in pixels into stage-relative meters.
    ///
    /// This is the exact inverse of [`ViewTransform::stage_to_canvas`].
    /// Degenerate transforms map everything to the stage origin.
    #[must_use]
    pub fn canvas_to_stage(&self, canvas_pt: Point) -> Point {
        if self.is_degenerate() {
            return Point::ORIGIN;
        }
        let r = self.marker_radius;
        let rel = Vec2::new(
            ((canvas_pt.x - r) / self.effective.width - 0.5) * self.extent.width,
            (0.5 - (canvas_pt.y - r) / self.effective.height) * self.extent.height,
        );
        (self.state.pan + rel - self.stage.origin()).to_point()
    }

    /// Converts a canvas-space motion into a stage-space motion.
    ///
    /// Y is inverted: dragging down the screen moves downstage.
    #[must_use]
    pub fn canvas_delta_to_stage(&self, delta: Vec2) -> Vec2 {
        let m = self.meters_per_pixel();
        Vec2::new(delta.x * m, -delta.y * m)
    }

    /// Converts a stage-space motion into a canvas-space motion.
    #[must_use]
    pub fn stage_delta_to_canvas(&self, delta: Vec2) -> Vec2 {
        if self.is_degenerate() {
            return Vec2::ZERO;
        }
        let s = self.pixels_per_meter;
        Vec2::new(delta.x * s, -delta.y * s)
    }

    /// Clamps a canvas position so a marker of `radius` stays fully visible.
    #[must_use]
    pub fn clamp_to_canvas(&self, pt: Point, radius: f64) -> Point {
        let clamp_axis = |v: f64, dim: f64| {
            let hi = (dim - radius).max(radius);
            v.clamp(radius, hi)
        };
        Point::new(
            clamp_axis(pt.x, self.canvas.width),
            clamp_axis(pt.y, self.canvas.height),
        )
    }

    /// Converts a stage-relative rectangle into canvas pixels.
    #[must_use]
    pub fn stage_to_canvas_rect(&self, rect: Rect) -> Rect {
        // Y flips, so take the bounding box of the transformed corners.
        let p0 = self.stage_to_canvas(Point::new(rect.x0, rect.y0));
        let p1 = self.stage_to_canvas(Point::new(rect.x1, rect.y1));
        Rect::from_points(p0, p1)
    }

    /// Converts a canvas rectangle into stage-relative meters.
    #[must_use]
    pub fn canvas_to_stage_rect(&self, rect: Rect) -> Rect {
        let p0 = self.canvas_to_stage(Point::new(rect.x0, rect.y0));
        let p1 = self.canvas_to_stage(Point::new(rect.x1, rect.y1));
        Rect::from_points(p0, p1)
    }

    /// Returns the stage-relative rectangle visible inside the marker inset.
    #[must_use]
    pub fn visible_stage_rect(&self) -> Rect {
        let r = self.marker_radius;
        self.canvas_to_stage_rect(Rect::new(
            r,
            r,
            r + self.effective.width,
            r + self.effective.height,
        ))
    }

    /// Applies one two-finger pan/zoom frame and returns the next view state.
    ///
    /// The content follows the fingers: the centroid motion is converted to
    /// meters with the current scale and subtracted from the pan (Y inverted).
    /// The extent is scaled by [`PinchSample::zoom_factor`]. Both are clamped
    /// into the stage's limits.
    #[must_use]
    pub fn pan_zoom(&self, sample: &PinchSample) -> ViewState {
        let pan = self.state.pan - self.canvas_delta_to_stage(sample.pan_delta());
        let factor = sample.zoom_factor();
        let next = ViewState::new(
            pan,
            self.state.view_width * factor,
            self.state.view_height * factor,
            &self.limits,
        );
        log::trace!(
            "pan/zoom: pan ({:.3}, {:.3}) m, view {:.3}x{:.3} m",
            next.pan.x,
            next.pan.y,
            next.view_width,
            next.view_height
        );
        next
    }

    /// Suggests a grid spacing in meters for the current zoom.
    ///
    /// Picks the smallest step on the 1, 2, 5 ladder that keeps grid lines
    /// at least [`GRID_TARGET_PX`] apart and is no smaller than `|base|`.
    /// A non-finite `base` is returned unchanged.
    #[must_use]
    pub fn suggest_grid_spacing(&self, base: f64) -> f64 {
        if !base.is_finite() {
            return base;
        }
        let wanted = (self.meters_per_pixel() * GRID_TARGET_PX)
            .max(base.abs())
            .max(f64::MIN_POSITIVE);

        // Largest power of ten not above `wanted`; both walks stop because
        // `wanted` is finite and positive.
        let mut decade = 1.0_f64;
        while decade > wanted {
            decade /= 10.0;
        }
        while decade * 10.0 <= wanted {
            decade *= 10.0;
        }

        [1.0, 2.0, 5.0]
            .into_iter()
            .map(|m| m * decade)
            .find(|step| *step >= wanted)
            .unwrap_or(decade * 10.0)
    }

    /// Snapshot of the current transform for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ViewDebugInfo {
        ViewDebugInfo {
            canvas: self.canvas,
            effective_canvas: self.effective,
            marker_radius: self.marker_radius,
            pan: self.state.pan,
            requested_extent: self.state.view_size(),
            visible_extent: self.extent,
            pixels_per_meter: self.pixels_per_meter,
            limits: self.limits,
        }
    }

    fn rebuild_scale(&mut self) {
        let r = self.marker_radius;
        self.effective = Size::new(self.canvas.width - 2.0 * r, self.canvas.height - 2.0 * r);
        let (ew, eh) = (self.effective.width, self.effective.height);
        let (vw, vh) = (self.state.view_width, self.state.view_height);
        if !(ew > 0.0 && eh > 0.0 && vw > 0.0 && vh > 0.0) {
            self.pixels_per_meter = 0.0;
            self.extent = Size::ZERO;
            return;
        }
        // ew / eh < vw / vh: the canvas is narrower than the view, so width
        // decides the scale and the height shows more than requested.
        if ew * vh < vw * eh {
            self.pixels_per_meter = ew / vw;
            self.extent = Size::new(vw, eh / self.pixels_per_meter);
        } else {
            self.pixels_per_meter = eh / vh;
            self.extent = Size::new(ew / self.pixels_per_meter, vh);
        }
    }
}

/// Debug snapshot of a [`ViewTransform`].
#[derive(Clone, Copy, Debug)]
pub struct ViewDebugInfo {
    /// Full canvas size in pixels.
    pub canvas: Size,
    /// Canvas size after the marker inset.
    pub effective_canvas: Size,
    /// Marker inset in pixels.
    pub marker_radius: f64,
    /// Physical center of the view in meters.
    pub pan: Vec2,
    /// Extent requested by the view state.
    pub requested_extent: Size,
    /// Extent actually visible after aspect correction.
    pub visible_extent: Size,
    /// Uniform scale.
    pub pixels_per_meter: f64,
    /// Limits derived from the stage.
    pub limits: ViewLimits,
}
