// Copyright 2025 the Stagepad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer events and the per-pointer state record.

use kurbo::Point;
use stagepad_cluster::{ClusterId, MarkerId};

use crate::drag::DragState;
use crate::vector::{VectorControl, VectorTarget};

/// Platform pointer identifier.
pub type PointerId = u64;

/// Phase of a pointer event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerPhase {
    /// The pointer touched the screen.
    Down,
    /// The pointer moved while pressed.
    Move,
    /// The pointer lifted.
    Up,
    /// The platform lost the pointer. Handled like [`PointerPhase::Up`]
    /// without a final move.
    Cancel,
}

impl PointerPhase {
    /// Whether the pointer is pressed after this event.
    #[must_use]
    pub fn is_pressed(self) -> bool {
        matches!(self, Self::Down | Self::Move)
    }
}

/// One pointer sample in canvas pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    /// Pointer identifier.
    pub id: PointerId,
    /// Position in canvas pixels.
    pub position: Point,
    /// Event phase.
    pub phase: PointerPhase,
}

impl PointerEvent {
    /// A press at `position`.
    #[must_use]
    pub fn down(id: PointerId, position: impl Into<Point>) -> Self {
        Self::new(id, position.into(), PointerPhase::Down)
    }

    /// A move to `position`.
    #[must_use]
    pub fn moved(id: PointerId, position: impl Into<Point>) -> Self {
        Self::new(id, position.into(), PointerPhase::Move)
    }

    /// A release at `position`.
    #[must_use]
    pub fn up(id: PointerId, position: impl Into<Point>) -> Self {
        Self::new(id, position.into(), PointerPhase::Up)
    }

    /// A cancellation; `position` is the last known one.
    #[must_use]
    pub fn cancel(id: PointerId, position: impl Into<Point>) -> Self {
        Self::new(id, position.into(), PointerPhase::Cancel)
    }

    fn new(id: PointerId, position: Point, phase: PointerPhase) -> Self {
        Self {
            id,
            position,
            phase,
        }
    }
}

/// Classification of an active pointer.
///
/// A pointer is classified once, on its first pressed event, and keeps that
/// classification until it is released. [`GestureState::Idle`] pointers
/// only take part in pan/zoom.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GestureState {
    /// No target.
    Idle,
    /// Dragging a marker.
    MarkerDrag(MarkerId),
    /// Dragging the barycenter of a cluster.
    BarycenterDrag(ClusterId),
    /// Dragging the hidden first-input reference of a cluster.
    HiddenReferenceDrag(ClusterId),
    /// Second finger of a vector gesture.
    VectorControl(VectorTarget),
}

impl GestureState {
    /// Whether this state counts against the drag cap.
    #[must_use]
    pub fn is_drag(self) -> bool {
        matches!(
            self,
            Self::MarkerDrag(_) | Self::BarycenterDrag(_) | Self::HiddenReferenceDrag(_)
        )
    }

    /// The cluster targeted by a cluster drag.
    #[must_use]
    pub fn dragged_cluster(self) -> Option<ClusterId> {
        match self {
            Self::BarycenterDrag(c) | Self::HiddenReferenceDrag(c) => Some(c),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Role {
    Idle,
    Marker {
        marker: MarkerId,
        radius: f64,
        /// Set when the marker is the first-input reference of this cluster,
        /// in which case its moves translate the whole cluster.
        moves_cluster: Option<ClusterId>,
    },
    Barycenter {
        cluster: ClusterId,
    },
    HiddenReference {
        cluster: ClusterId,
        member: MarkerId,
    },
    Vector(VectorControl),
}

/// State of one active pointer.
#[derive(Clone, Debug)]
pub struct PointerContact {
    id: PointerId,
    pub(crate) role: Role,
    pub(crate) drag: DragState,
    pub(crate) position: Point,
    pub(crate) frame_start: Point,
    pub(crate) fresh: bool,
}

impl PointerContact {
    pub(crate) fn new(id: PointerId, position: Point, role: Role) -> Self {
        Self {
            id,
            role,
            drag: DragState::default(),
            position,
            frame_start: position,
            fresh: true,
        }
    }

    /// Pointer identifier.
    #[must_use]
    pub fn id(&self) -> PointerId {
        self.id
    }

    /// Current classification.
    #[must_use]
    pub fn state(&self) -> GestureState {
        match self.role {
            Role::Idle => GestureState::Idle,
            Role::Marker { marker, .. } => GestureState::MarkerDrag(marker),
            Role::Barycenter { cluster } => GestureState::BarycenterDrag(cluster),
            Role::HiddenReference { cluster, .. } => GestureState::HiddenReferenceDrag(cluster),
            Role::Vector(vc) => GestureState::VectorControl(vc.target()),
        }
    }

    /// Last touch position in canvas pixels.
    #[must_use]
    pub fn position(&self) -> Point {
        self.position
    }

    /// Clamped position of the dragged target, for drags.
    #[must_use]
    pub fn target_position(&self) -> Option<Point> {
        self.drag.logical_pos()
    }

    /// The vector gesture this pointer drives, if any.
    #[must_use]
    pub fn vector_control(&self) -> Option<&VectorControl> {
        match &self.role {
            Role::Vector(vc) => Some(vc),
            _ => None,
        }
    }

    pub(crate) fn begin_frame(&mut self) {
        self.frame_start = self.position;
        self.fresh = false;
    }

    pub(crate) fn is_free(&self) -> bool {
        matches!(self.role, Role::Idle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pressed_phases() {
        assert!(PointerPhase::Down.is_pressed());
        assert!(PointerPhase::Move.is_pressed());
        assert!(!PointerPhase::Up.is_pressed());
        assert!(!PointerPhase::Cancel.is_pressed());
    }

    #[test]
    fn drag_states_count_against_cap() {
        assert!(GestureState::MarkerDrag(1).is_drag());
        assert!(GestureState::BarycenterDrag(1).is_drag());
        assert!(GestureState::HiddenReferenceDrag(1).is_drag());
        assert!(!GestureState::Idle.is_drag());
        assert!(!GestureState::VectorControl(VectorTarget::Input(1)).is_drag());
        assert_eq!(GestureState::HiddenReferenceDrag(3).dragged_cluster(), Some(3));
        assert_eq!(GestureState::MarkerDrag(3).dragged_cluster(), None);
    }

    #[test]
    fn new_contact_is_fresh_until_next_frame() {
        let mut c = PointerContact::new(7, Point::new(1.0, 2.0), Role::Idle);
        assert!(c.fresh);
        assert_eq!(c.state(), GestureState::Idle);
        c.position = Point::new(3.0, 4.0);
        c.begin_frame();
        assert!(!c.fresh);
        assert_eq!(c.frame_start, Point::new(3.0, 4.0));
    }
}
