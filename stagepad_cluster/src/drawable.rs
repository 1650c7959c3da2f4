// Copyright 2025 the Stagepad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Targets handed to the rendering layer, resolved once per data assembly.

use alloc::vec::Vec;

use kurbo::Point;

use crate::cluster::{ClusterConfig, ClusterMember, ClusterReference, hidden_reference, members_of};
use crate::marker::{ClusterId, Marker, MarkerId};

/// What a cluster's reference point is anchored to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReferenceKind {
    /// An externally tracked member, or `None` when the tracked input is not
    /// among the members and the reference sits at their barycenter.
    ///
    /// Never grabbable: the reference follows the tracker.
    Tracked(Option<MarkerId>),
    /// The lowest-id member.
    FirstInput(MarkerId),
    /// The lowest-id member, which is hidden; the reference is drawn and
    /// grabbed in its place.
    HiddenFirstInput(MarkerId),
    /// The mean of all members.
    Barycenter,
}

/// A cluster's reference marker and the visible members it connects to.
#[derive(Clone, Debug, PartialEq)]
pub struct ClusterDrawable {
    /// Cluster id.
    pub cluster: ClusterId,
    /// Reference point in canvas pixels.
    pub position: Point,
    /// What the reference is anchored to.
    pub kind: ReferenceKind,
    /// Visible member positions, for drawing connecting lines.
    pub visible_members: Vec<Point>,
}

impl ClusterDrawable {
    /// Whether the reference itself can be grabbed with a touch.
    #[must_use]
    pub fn is_grabbable(&self) -> bool {
        matches!(
            self.kind,
            ReferenceKind::Barycenter | ReferenceKind::HiddenFirstInput(_)
        )
    }
}

/// Something the rendering layer draws on the stage canvas.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawableTarget {
    /// An input marker.
    Marker(Marker),
    /// A cluster reference marker.
    ClusterMarker(ClusterDrawable),
}

/// Builds the draw list: visible markers first, then one reference marker per
/// non-empty cluster in `clusters` order.
#[must_use]
pub fn assemble_drawables(markers: &[Marker], clusters: &[ClusterConfig]) -> Vec<DrawableTarget> {
    let mut out: Vec<DrawableTarget> = markers
        .iter()
        .filter(|m| m.visible)
        .cloned()
        .map(DrawableTarget::Marker)
        .collect();

    for cluster in clusters {
        let members: Vec<ClusterMember> = members_of(cluster.id, markers).collect();
        let Some(reference) = ClusterReference::resolve(cluster, &members) else {
            continue;
        };
        let kind = match (cluster.tracked_input, reference.reference_member) {
            (Some(_), member) => ReferenceKind::Tracked(member),
            (None, Some(id)) => match hidden_reference(cluster, &members) {
                Some(_) => ReferenceKind::HiddenFirstInput(id),
                None => ReferenceKind::FirstInput(id),
            },
            (None, None) => ReferenceKind::Barycenter,
        };
        out.push(DrawableTarget::ClusterMarker(ClusterDrawable {
            cluster: cluster.id,
            position: reference.point,
            kind,
            visible_members: reference.visible_members.iter().map(|m| m.position).collect(),
        }));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ReferenceMode;

    fn markers() -> Vec<Marker> {
        alloc::vec![
            Marker::new(1, Point::new(0.0, 0.0), 10.0),
            Marker::new(2, Point::new(100.0, 0.0), 10.0).with_cluster(1),
            Marker::new(3, Point::new(100.0, 100.0), 10.0).with_cluster(1),
            Marker::new(4, Point::new(50.0, 50.0), 10.0)
                .with_cluster(2)
                .with_visible(false),
            Marker::new(5, Point::new(70.0, 50.0), 10.0).with_cluster(2),
        ]
    }

    #[test]
    fn hidden_markers_are_not_drawn() {
        let drawables = assemble_drawables(&markers(), &[]);
        let ids: Vec<MarkerId> = drawables
            .iter()
            .filter_map(|d| match d {
                DrawableTarget::Marker(m) => Some(m.id),
                DrawableTarget::ClusterMarker(_) => None,
            })
            .collect();
        assert_eq!(ids, alloc::vec![1, 2, 3, 5]);
    }

    #[test]
    fn clusters_resolve_kind_once() {
        let clusters = [
            ClusterConfig::new(1, ReferenceMode::Barycenter),
            ClusterConfig::new(2, ReferenceMode::FirstInput),
            ClusterConfig::new(3, ReferenceMode::Barycenter),
        ];
        let drawables = assemble_drawables(&markers(), &clusters);
        let clusters: Vec<&ClusterDrawable> = drawables
            .iter()
            .filter_map(|d| match d {
                DrawableTarget::ClusterMarker(c) => Some(c),
                DrawableTarget::Marker(_) => None,
            })
            .collect();
        // Cluster 3 has no members and is skipped.
        assert_eq!(clusters.len(), 2);

        assert_eq!(clusters[0].kind, ReferenceKind::Barycenter);
        assert_eq!(clusters[0].position, Point::new(100.0, 50.0));
        assert!(clusters[0].is_grabbable());

        assert_eq!(clusters[1].kind, ReferenceKind::HiddenFirstInput(4));
        assert_eq!(clusters[1].position, Point::new(50.0, 50.0));
        assert_eq!(clusters[1].visible_members, alloc::vec![Point::new(70.0, 50.0)]);
        assert!(clusters[1].is_grabbable());
    }

    #[test]
    fn tracked_reference_is_not_grabbable() {
        let clusters = [ClusterConfig::new(1, ReferenceMode::Barycenter).with_tracked_input(3)];
        let drawables = assemble_drawables(&markers(), &clusters);
        let Some(DrawableTarget::ClusterMarker(c)) = drawables.last() else {
            panic!("expected a cluster marker");
        };
        assert_eq!(c.kind, ReferenceKind::Tracked(Some(3)));
        assert!(!c.is_grabbable());
    }
}
