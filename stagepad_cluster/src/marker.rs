// Copyright 2025 the Stagepad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use kurbo::Point;

/// Stable, 1-based input identifier assigned by the host application.
pub type MarkerId = u32;

/// Cluster identifier in `1..=10`; `0` means "not clustered".
pub type ClusterId = u32;

/// On-screen handle for one input.
///
/// Markers are owned by the host's authoritative input list; gesture code
/// only reads them and produces intents.
#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
    /// Input id.
    pub id: MarkerId,
    /// Center in canvas pixels.
    pub position: Point,
    /// Radius in canvas pixels.
    pub radius: f64,
    /// Label shown next to the marker.
    pub name: String,
    /// Locked markers cannot be grabbed.
    pub locked: bool,
    /// Hidden markers are neither drawn nor grabbed.
    pub visible: bool,
    /// Owning cluster, `0` when unclustered.
    pub cluster_id: ClusterId,
    /// Current height (Z) in meters, the baseline for height gestures.
    pub height: f64,
    /// Current rotation in degrees, the baseline for rotation gestures.
    pub rotation: f64,
}

impl Marker {
    /// Creates a visible, unlocked, unclustered marker.
    #[must_use]
    pub fn new(id: MarkerId, position: Point, radius: f64) -> Self {
        Self {
            id,
            position,
            radius,
            name: String::new(),
            locked: false,
            visible: true,
            cluster_id: 0,
            height: 0.0,
            rotation: 0.0,
        }
    }

    /// Returns a copy with the given label.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Returns a copy assigned to `cluster_id`.
    #[must_use]
    pub fn with_cluster(mut self, cluster_id: ClusterId) -> Self {
        self.cluster_id = cluster_id;
        self
    }

    /// Returns a copy with the given lock flag.
    #[must_use]
    pub fn with_locked(mut self, locked: bool) -> Self {
        self.locked = locked;
        self
    }

    /// Returns a copy with the given visibility.
    #[must_use]
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Returns a copy with the given height and rotation baselines.
    #[must_use]
    pub fn with_orientation(mut self, height: f64, rotation: f64) -> Self {
        self.height = height;
        self.rotation = rotation;
        self
    }

    /// Owning cluster, if any.
    #[must_use]
    pub fn cluster(&self) -> Option<ClusterId> {
        (self.cluster_id != 0).then_some(self.cluster_id)
    }

    /// Whether a touch may pick this marker up.
    #[must_use]
    pub fn is_grabbable(&self) -> bool {
        self.visible && !self.locked
    }
}
