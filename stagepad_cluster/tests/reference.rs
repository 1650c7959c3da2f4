// Copyright 2025 the Stagepad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for cluster reference resolution in `stagepad_cluster`.
//!
//! These focus on reference selection being independent of member order and
//! on the eligibility rules the gesture layer relies on.

use kurbo::Point;
use stagepad_cluster::{
    ClusterConfig, ClusterMember, DrawableTarget, Marker, ReferenceKind, ReferenceMode,
    assemble_drawables, barycenter, hidden_reference, members_of, resolve_reference,
};

fn five_members() -> Vec<ClusterMember> {
    vec![
        ClusterMember::new(9, Point::new(90.0, 9.0), true),
        ClusterMember::new(4, Point::new(40.0, 4.0), true),
        ClusterMember::new(12, Point::new(120.0, 12.0), true),
        ClusterMember::new(3, Point::new(30.0, 3.0), false),
        ClusterMember::new(7, Point::new(70.0, 7.0), true),
    ]
}

#[test]
fn first_input_is_minimum_id_in_any_order() {
    let cluster = ClusterConfig::new(1, ReferenceMode::FirstInput);
    let mut members = five_members();
    for _ in 0..members.len() {
        assert_eq!(
            resolve_reference(&cluster, &members),
            Some(Point::new(30.0, 3.0))
        );
        members.rotate_left(1);
    }
    members.reverse();
    assert_eq!(
        resolve_reference(&cluster, &members),
        Some(Point::new(30.0, 3.0))
    );
}

#[test]
fn barycenter_mode_counts_hidden_members() {
    let cluster = ClusterConfig::new(1, ReferenceMode::Barycenter);
    let members = five_members();
    let expected = barycenter(members.iter().map(|m| m.position));
    assert_eq!(resolve_reference(&cluster, &members), Some(expected));
    assert_eq!(expected, Point::new(70.0, 7.0));
}

#[test]
fn eligibility_is_exclusive() {
    let members = five_members();
    let barycentric = ClusterConfig::new(1, ReferenceMode::Barycenter);
    let first = ClusterConfig::new(2, ReferenceMode::FirstInput);

    assert!(barycentric.is_barycenter_draggable());
    assert_eq!(hidden_reference(&barycentric, &members), None);

    assert!(!first.is_barycenter_draggable());
    assert_eq!(hidden_reference(&first, &members).map(|m| m.id), Some(3));
}

#[test]
fn members_are_collected_from_marker_list() {
    let markers = vec![
        Marker::new(1, Point::new(0.0, 0.0), 10.0).with_cluster(2),
        Marker::new(2, Point::new(5.0, 5.0), 10.0),
        Marker::new(3, Point::new(10.0, 0.0), 10.0).with_cluster(2),
    ];
    let ids: Vec<u32> = members_of(2, &markers).map(|m| m.id).collect();
    assert_eq!(ids, vec![1, 3]);
    assert_eq!(members_of(0, &markers).count(), 0);
}

#[test]
fn missing_tracked_input_keeps_reference_ungrabbable() {
    let markers = vec![
        Marker::new(1, Point::new(0.0, 0.0), 10.0).with_cluster(4),
        Marker::new(2, Point::new(10.0, 0.0), 10.0).with_cluster(4),
    ];
    let cluster = ClusterConfig::new(4, ReferenceMode::Barycenter).with_tracked_input(99);
    let drawables = assemble_drawables(&markers, core::slice::from_ref(&cluster));
    let Some(DrawableTarget::ClusterMarker(drawn)) = drawables.last() else {
        panic!("expected a cluster marker");
    };

    assert_eq!(drawn.position, Point::new(5.0, 0.0));
    assert_eq!(drawn.kind, ReferenceKind::Tracked(None));
    assert_eq!(drawn.is_grabbable(), cluster.is_barycenter_draggable());
    assert!(!drawn.is_grabbable());
}
