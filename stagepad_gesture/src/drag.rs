// Copyright 2025 the Stagepad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag state helper: follow a touch and move a clamped logical position by
//! the touch's per-frame deltas.
//!
//! ## Usage
//!
//! 1) Start a drag with [`DragState::start`], passing the touch position and
//!    the grabbed target's position (they differ when the touch lands off
//!    center).
//! 2) On each move event, call [`DragState::update`] with a clamp function;
//!    it returns the delta actually applied to the logical position.
//! 3) Drop the state when the pointer lifts; a fresh [`DragState::start`]
//!    overwrites any previous drag.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use stagepad_gesture::drag::DragState;
//!
//! let mut drag = DragState::default();
//!
//! // Touch at (10, 20) grabs a marker centered at (12, 18).
//! drag.start(Point::new(10.0, 20.0), Point::new(12.0, 18.0));
//! assert!(drag.is_dragging());
//!
//! // Move the touch by (5, 5); the marker follows.
//! let delta = drag.update(Point::new(15.0, 25.0), |p| p).unwrap();
//! assert_eq!(delta.x, 5.0);
//! assert_eq!(drag.logical_pos(), Some(Point::new(17.0, 23.0)));
//! ```

use kurbo::{Point, Vec2};

/// Tracks one pointer's touch position and the logical position it drags.
#[derive(Debug, Clone, Default, Copy)]
pub struct DragState {
    /// Position of the grabbed target when the drag started.
    pub start_pos: Option<Point>,
    /// Last recorded touch position.
    pub last_touch: Option<Point>,
    /// Current logical position of the dragged target.
    pub logical: Option<Point>,
}

impl DragState {
    /// Start tracking a new drag of a target at `target` from the touch at `touch`.
    pub fn start(&mut self, touch: Point, target: Point) {
        self.start_pos = Some(target);
        self.last_touch = Some(touch);
        self.logical = Some(target);
    }

    /// Move the touch to `touch` and the logical position by the same delta,
    /// passed through `clamp`.
    ///
    /// Returns the delta applied to the logical position, which is smaller
    /// than the touch delta when clamping kicks in.
    pub fn update(&mut self, touch: Point, clamp: impl FnOnce(Point) -> Point) -> Option<Vec2> {
        if !self.is_dragging() {
            return None;
        }
        let last_touch = self.last_touch.replace(touch)?;
        let logical = self.logical?;
        let next = clamp(logical + (touch - last_touch));
        self.logical = Some(next);
        Some(next - logical)
    }

    /// Current logical position.
    pub fn logical_pos(&self) -> Option<Point> {
        self.logical
    }

    /// Returns `true` while a drag operation is active
    pub fn is_dragging(&self) -> bool {
        self.start_pos.is_some()
    }
}
