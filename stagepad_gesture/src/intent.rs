// Copyright 2025 the Stagepad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};
use stagepad_cluster::{ClusterId, MarkerId};

/// A change the host should apply to its authoritative state and forward to
/// the engine.
///
/// Positions and deltas are in stage meters; the resolver never mutates the
/// marker list itself.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Intent {
    /// Set a marker's stage-relative position.
    MarkerPosition {
        /// Target marker.
        marker: MarkerId,
        /// New position in meters.
        position: Point,
        /// `true` for the final position sent when the drag ends.
        committed: bool,
    },
    /// Translate every member of a cluster.
    ///
    /// The delta is converted with the current view's uniform scale, the same
    /// one used for [`Intent::MarkerPosition`], so members track the finger
    /// at any zoom.
    ClusterMove {
        /// Target cluster.
        cluster: ClusterId,
        /// Translation in meters.
        delta: Vec2,
    },
    /// Scale a cluster about its reference point.
    ///
    /// The factor is the vector gesture's distance ratio, relative to the
    /// cluster's size when the gesture attached. Each frame replaces the
    /// previous factor of the same gesture.
    ClusterScale {
        /// Target cluster.
        cluster: ClusterId,
        /// Current length over attach-time length of the control vector.
        factor: f64,
    },
    /// Rotate a cluster about its reference point.
    ///
    /// The delta is the vector gesture's angle change since it attached. Each
    /// frame replaces the previous delta of the same gesture; the total across
    /// gestures is [`GestureResolver::cluster_rotation`].
    ///
    /// [`GestureResolver::cluster_rotation`]: crate::GestureResolver::cluster_rotation
    ClusterRotation {
        /// Target cluster.
        cluster: ClusterId,
        /// Angle change in degrees, in `(-180, 180]`.
        delta_degrees: f64,
    },
    /// Set an input's height.
    InputHeight {
        /// Target marker.
        marker: MarkerId,
        /// New Z in meters.
        z: f64,
    },
    /// Set an input's rotation.
    InputRotation {
        /// Target marker.
        marker: MarkerId,
        /// New rotation in degrees, in `(-180, 180]`.
        degrees: f64,
    },
}
