// Copyright 2025 the Stagepad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stage-position cache with an optimistic overlay for in-flight drags.
//!
//! The host applies intents asynchronously (typically by forwarding them to
//! the engine and waiting for the echo), so the authoritative position of a
//! dragged marker lags the finger. While a drag is in flight the resolver
//! records where the marker *should* be, and renderers draw that instead.
//!
//! An optimistic entry is dropped when the drag ends, or when an
//! authoritative update lands further than the correction threshold away
//! from it, at which point the authority wins.

use hashbrown::HashMap;
use kurbo::Point;
use stagepad_cluster::MarkerId;
use stagepad_view::ViewTransform;

/// Result of feeding an authoritative position into the cache.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reconcile {
    /// No optimistic entry existed.
    Stored,
    /// The optimistic entry is within the threshold and stays.
    Kept,
    /// The optimistic entry was too far off and was dropped.
    Snapped,
}

/// Last known stage-relative position of every marker, in meters.
///
/// Stage meters are the only representation that survives a pan or zoom;
/// use [`PositionCache::canvas_position`] to get pixels under the current view.
#[derive(Clone, Debug, Default)]
pub struct PositionCache {
    authoritative: HashMap<MarkerId, Point>,
    optimistic: HashMap<MarkerId, Point>,
    correction_threshold: f64,
}

impl PositionCache {
    /// Creates an empty cache that snaps when the authority is more than
    /// `correction_threshold` pixels away from an optimistic entry.
    #[must_use]
    pub fn new(correction_threshold: f64) -> Self {
        Self {
            authoritative: HashMap::new(),
            optimistic: HashMap::new(),
            correction_threshold,
        }
    }

    /// Records an authoritative position and reconciles the optimistic entry.
    pub fn set_authoritative(
        &mut self,
        marker: MarkerId,
        position: Point,
        view: &ViewTransform,
    ) -> Reconcile {
        self.authoritative.insert(marker, position);
        let Some(&cached) = self.optimistic.get(&marker) else {
            return Reconcile::Stored;
        };
        let off_by = view.stage_delta_to_canvas(position - cached).hypot();
        if off_by > self.correction_threshold {
            log::trace!("marker {marker}: authority is {off_by:.1} px off, snapping");
            self.optimistic.remove(&marker);
            Reconcile::Snapped
        } else {
            Reconcile::Kept
        }
    }

    /// Records where a dragged marker is expected to end up.
    pub fn set_optimistic(&mut self, marker: MarkerId, position: Point) {
        self.optimistic.insert(marker, position);
    }

    /// Drops the optimistic entry for `marker`.
    pub fn clear_optimistic(&mut self, marker: MarkerId) {
        self.optimistic.remove(&marker);
    }

    /// Commits a finished drag: the final position becomes authoritative and
    /// the optimistic entry is dropped.
    pub fn commit(&mut self, marker: MarkerId, position: Point) {
        self.authoritative.insert(marker, position);
        self.optimistic.remove(&marker);
    }

    /// Last authoritative position.
    #[must_use]
    pub fn authoritative(&self, marker: MarkerId) -> Option<Point> {
        self.authoritative.get(&marker).copied()
    }

    /// Optimistic position, while a drag is in flight.
    #[must_use]
    pub fn optimistic(&self, marker: MarkerId) -> Option<Point> {
        self.optimistic.get(&marker).copied()
    }

    /// Whether renderers should currently prefer the optimistic position.
    #[must_use]
    pub fn is_optimistic(&self, marker: MarkerId) -> bool {
        self.optimistic.contains_key(&marker)
    }

    /// Position to draw: the optimistic entry if any, else the authority.
    #[must_use]
    pub fn display_position(&self, marker: MarkerId) -> Option<Point> {
        self.optimistic(marker).or_else(|| self.authoritative(marker))
    }

    /// [`PositionCache::display_position`] in canvas pixels under `view`.
    #[must_use]
    pub fn canvas_position(&self, marker: MarkerId, view: &ViewTransform) -> Option<Point> {
        self.display_position(marker).map(|p| view.stage_to_canvas(p))
    }

    /// Forgets a marker entirely, for example when its input is removed.
    pub fn forget(&mut self, marker: MarkerId) {
        self.authoritative.remove(&marker);
        self.optimistic.remove(&marker);
    }

    /// Drops every optimistic entry.
    pub fn clear_all_optimistic(&mut self) {
        self.optimistic.clear();
    }

    /// Number of markers with an authoritative position.
    #[must_use]
    pub fn len(&self) -> usize {
        self.authoritative.len()
    }

    /// Whether no authoritative position is known.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.authoritative.is_empty()
    }
}
