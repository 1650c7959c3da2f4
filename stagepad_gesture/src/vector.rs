// Copyright 2025 the Stagepad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two-finger vector gestures: a secondary touch that rotates and scales
//! relative to the target of a primary drag.

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::Point;
use stagepad_cluster::{ClusterId, MarkerId};
use stagepad_coords::normalize_angle;

use crate::intent::Intent;

/// Smallest distance ratio forwarded as a cluster scale; a cluster is never
/// collapsed to a point.
const MIN_CLUSTER_RATIO: f64 = 1e-3;

/// What a vector gesture adjusts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VectorTarget {
    /// Height and rotation of one input.
    Input(MarkerId),
    /// Scale and rotation of a cluster.
    Cluster(ClusterId),
}

/// Values captured when a vector gesture attaches.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum VectorBaseline {
    /// The input's height and rotation at attach time.
    Input {
        /// Height in meters.
        height: f64,
        /// Rotation in degrees.
        rotation: f64,
    },
    /// The cluster's accumulated rotation at attach time.
    Cluster {
        /// Rotation in degrees.
        rotation: f64,
    },
}

/// Change of the anchor→touch vector since a gesture started.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VectorDelta {
    /// Angle change in degrees, in `(-180, 180]`.
    pub angle_change: f64,
    /// Current length over initial length.
    pub distance_ratio: f64,
}

impl VectorDelta {
    /// No change.
    pub const IDENTITY: Self = Self {
        angle_change: 0.0,
        distance_ratio: 1.0,
    };
}

/// Angle of the vector `from → to` in canvas degrees.
fn angle(from: Point, to: Point) -> f64 {
    let v = to - from;
    v.y.atan2(v.x).to_degrees()
}

/// Compares the anchor→touch vector now against when the gesture started.
///
/// If the initial vector is shorter than `min_distance` pixels the ratio is
/// reported as `1.0`.
#[must_use]
pub fn vector_delta(
    initial_anchor: Point,
    initial_touch: Point,
    anchor: Point,
    touch: Point,
    min_distance: f64,
) -> VectorDelta {
    let angle_change = normalize_angle(angle(anchor, touch) - angle(initial_anchor, initial_touch));
    let initial = initial_anchor.distance(initial_touch);
    let distance_ratio = if initial < min_distance || initial <= f64::EPSILON {
        1.0
    } else {
        anchor.distance(touch) / initial
    };
    VectorDelta {
        angle_change,
        distance_ratio,
    }
}

/// A live vector gesture attached to a primary drag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VectorControl {
    target: VectorTarget,
    baseline: VectorBaseline,
    initial_anchor: Point,
    initial_touch: Point,
    anchor: Point,
    touch: Point,
    emitted: VectorDelta,
}

impl VectorControl {
    /// Attaches to an input, capturing its height and rotation.
    pub(crate) fn input(
        marker: MarkerId,
        height: f64,
        rotation: f64,
        anchor: Point,
        touch: Point,
    ) -> Self {
        Self::new(
            VectorTarget::Input(marker),
            VectorBaseline::Input { height, rotation },
            anchor,
            touch,
        )
    }

    /// Attaches to a cluster whose accumulated rotation is `rotation`.
    pub(crate) fn cluster(cluster: ClusterId, rotation: f64, anchor: Point, touch: Point) -> Self {
        Self::new(
            VectorTarget::Cluster(cluster),
            VectorBaseline::Cluster { rotation },
            anchor,
            touch,
        )
    }

    fn new(target: VectorTarget, baseline: VectorBaseline, anchor: Point, touch: Point) -> Self {
        Self {
            target,
            baseline,
            initial_anchor: anchor,
            initial_touch: touch,
            anchor,
            touch,
            emitted: VectorDelta::IDENTITY,
        }
    }

    /// What this gesture adjusts.
    #[must_use]
    pub fn target(&self) -> VectorTarget {
        self.target
    }

    /// Values captured at attach time.
    #[must_use]
    pub fn baseline(&self) -> VectorBaseline {
        self.baseline
    }

    /// Target position when the gesture attached, in canvas pixels.
    #[must_use]
    pub fn initial_anchor(&self) -> Point {
        self.initial_anchor
    }

    /// Touch position when the gesture attached.
    #[must_use]
    pub fn initial_touch(&self) -> Point {
        self.initial_touch
    }

    /// Current target position.
    #[must_use]
    pub fn anchor(&self) -> Point {
        self.anchor
    }

    /// Current touch position.
    #[must_use]
    pub fn touch(&self) -> Point {
        self.touch
    }

    /// Change since the gesture attached.
    #[must_use]
    pub fn delta(&self, min_distance: f64) -> VectorDelta {
        vector_delta(
            self.initial_anchor,
            self.initial_touch,
            self.anchor,
            self.touch,
            min_distance,
        )
    }

    /// Rotation applied so far in this session, in degrees.
    #[must_use]
    pub fn session_rotation(&self) -> f64 {
        self.emitted.angle_change
    }

    pub(crate) fn set_anchor(&mut self, anchor: Point) {
        self.anchor = anchor;
    }

    pub(crate) fn set_touch(&mut self, touch: Point) {
        self.touch = touch;
    }

    /// Pushes the intents for the current anchor and touch.
    ///
    /// Inputs receive absolute height and rotation derived from the baseline.
    /// Clusters receive the session's distance ratio and angle change, each
    /// only when it differs from the previous call.
    pub(crate) fn emit(&mut self, min_distance: f64, out: &mut Vec<Intent>) {
        let d = self.delta(min_distance);
        match self.target {
            VectorTarget::Input(marker) => {
                let (height, rotation) = match self.baseline {
                    VectorBaseline::Input { height, rotation } => (height, rotation),
                    VectorBaseline::Cluster { rotation } => (0.0, rotation),
                };
                out.push(Intent::InputHeight {
                    marker,
                    z: height * d.distance_ratio,
                });
                out.push(Intent::InputRotation {
                    marker,
                    degrees: normalize_angle(rotation + d.angle_change),
                });
                self.emitted = d;
            }
            VectorTarget::Cluster(cluster) => {
                let ratio = d.distance_ratio.max(MIN_CLUSTER_RATIO);
                if ratio != self.emitted.distance_ratio {
                    out.push(Intent::ClusterScale {
                        cluster,
                        factor: ratio,
                    });
                }
                if d.angle_change != self.emitted.angle_change {
                    out.push(Intent::ClusterRotation {
                        cluster,
                        delta_degrees: d.angle_change,
                    });
                }
                self.emitted = VectorDelta {
                    angle_change: d.angle_change,
                    distance_ratio: ratio,
                };
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quarter_turn_keeps_ratio() {
        let d = vector_delta(
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(0.0, 0.0),
            Point::new(0.0, 10.0),
            10.0,
        );
        assert!((d.angle_change - 90.0).abs() < 1e-9);
        assert!((d.distance_ratio - 1.0).abs() < 1e-12);
    }

    #[test]
    fn short_baseline_reports_unit_ratio() {
        let d = vector_delta(
            Point::new(0.0, 0.0),
            Point::new(5.0, 0.0),
            Point::new(0.0, 0.0),
            Point::new(50.0, 0.0),
            10.0,
        );
        assert_eq!(d.distance_ratio, 1.0);
        assert_eq!(d.angle_change, 0.0);
    }

    #[test]
    fn moving_anchor_changes_delta() {
        let d = vector_delta(
            Point::new(0.0, 0.0),
            Point::new(20.0, 0.0),
            Point::new(-20.0, 0.0),
            Point::new(20.0, 0.0),
            10.0,
        );
        assert_eq!(d.angle_change, 0.0);
        assert!((d.distance_ratio - 2.0).abs() < 1e-12);
    }

    #[test]
    fn angle_change_wraps() {
        // From pointing left (180) to pointing slightly below left (-170).
        let d = vector_delta(
            Point::new(0.0, 0.0),
            Point::new(-10.0, 0.0),
            Point::new(0.0, 0.0),
            Point::new(-10.0, -1.763_269_807_084_65),
            10.0,
        );
        assert!((d.angle_change - 10.0).abs() < 1e-6);
    }

    #[test]
    fn input_emits_absolute_values() {
        let mut vc =
            VectorControl::input(3, 2.0, 170.0, Point::new(0.0, 0.0), Point::new(20.0, 0.0));
        vc.set_touch(Point::new(0.0, 40.0));
        let mut out = Vec::new();
        vc.emit(10.0, &mut out);
        assert_eq!(out.len(), 2);
        let Intent::InputHeight { marker, z } = out[0] else {
            panic!("expected a height intent");
        };
        assert_eq!(marker, 3);
        assert!((z - 4.0).abs() < 1e-9);
        let Intent::InputRotation { degrees, .. } = out[1] else {
            panic!("expected a rotation intent");
        };
        assert!((degrees - -100.0).abs() < 1e-9);
    }

    #[test]
    fn cluster_emits_session_values() {
        let mut vc = VectorControl::cluster(2, 30.0, Point::new(0.0, 0.0), Point::new(20.0, 0.0));
        let mut out = Vec::new();

        vc.set_touch(Point::new(40.0, 0.0));
        vc.emit(10.0, &mut out);
        assert_eq!(
            out,
            [Intent::ClusterScale {
                cluster: 2,
                factor: 2.0
            }]
        );

        // Still relative to the attach-time vector, not the previous frame.
        out.clear();
        vc.set_touch(Point::new(60.0, 0.0));
        vc.emit(10.0, &mut out);
        assert_eq!(
            out,
            [Intent::ClusterScale {
                cluster: 2,
                factor: 3.0
            }]
        );

        out.clear();
        vc.set_touch(Point::new(0.0, 60.0));
        vc.emit(10.0, &mut out);
        assert_eq!(out.len(), 1);
        let Intent::ClusterRotation { delta_degrees, .. } = out[0] else {
            panic!("expected a rotation");
        };
        // The accumulated baseline is not folded into the session angle.
        assert!((delta_degrees - 90.0).abs() < 1e-9);
        assert!((vc.session_rotation() - 90.0).abs() < 1e-9);

        // Nothing changed: nothing is emitted.
        out.clear();
        vc.emit(10.0, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn collapsed_cluster_vector_is_floored() {
        let mut vc = VectorControl::cluster(5, 0.0, Point::new(0.0, 0.0), Point::new(20.0, 0.0));
        let mut out = Vec::new();
        vc.set_touch(Point::new(0.0, 0.0));
        vc.emit(10.0, &mut out);
        assert!(out.contains(&Intent::ClusterScale {
            cluster: 5,
            factor: MIN_CLUSTER_RATIO
        }));
    }
}
