// Copyright 2025 the Stagepad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cluster configuration and reference-point geometry.

use kurbo::{Point, Vec2};
use smallvec::SmallVec;

use crate::marker::{ClusterId, Marker, MarkerId};

/// Highest cluster id; clusters are numbered `1..=MAX_CLUSTERS`.
pub const MAX_CLUSTERS: ClusterId = 10;

/// How a cluster chooses its reference point when no member is tracked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ReferenceMode {
    /// The member with the lowest id.
    #[default]
    FirstInput,
    /// The mean position of all members.
    Barycenter,
}

impl ReferenceMode {
    /// Returns the mode for the engine's numeric value (`0` or `1`), falling
    /// back to [`ReferenceMode::FirstInput`] for anything else.
    #[must_use]
    pub fn from_index(index: u8) -> Self {
        match index {
            1 => Self::Barycenter,
            _ => Self::FirstInput,
        }
    }

    /// Returns the engine's numeric value for this mode.
    #[must_use]
    pub fn index(self) -> u8 {
        match self {
            Self::FirstInput => 0,
            Self::Barycenter => 1,
        }
    }
}

/// Per-cluster settings supplied by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ClusterConfig {
    /// Cluster id in `1..=10`.
    pub id: ClusterId,
    /// Reference selection when no member is tracked.
    pub reference_mode: ReferenceMode,
    /// Member driven by an external tracking system, if any.
    pub tracked_input: Option<MarkerId>,
}

impl ClusterConfig {
    /// Creates an untracked cluster.
    #[must_use]
    pub fn new(id: ClusterId, reference_mode: ReferenceMode) -> Self {
        Self {
            id,
            reference_mode,
            tracked_input: None,
        }
    }

    /// Returns a copy tracking `input`, where `0` means "no tracked input".
    #[must_use]
    pub fn with_tracked_input(mut self, input: MarkerId) -> Self {
        self.tracked_input = (input != 0).then_some(input);
        self
    }

    /// A cluster's barycenter may be dragged directly only in barycenter
    /// mode without a tracked member.
    #[must_use]
    pub fn is_barycenter_draggable(&self) -> bool {
        self.reference_mode == ReferenceMode::Barycenter && self.tracked_input.is_none()
    }

    /// The reference is the lowest-id member and nothing tracks it.
    #[must_use]
    pub fn is_first_input_reference(&self) -> bool {
        self.reference_mode == ReferenceMode::FirstInput && self.tracked_input.is_none()
    }
}

/// The part of a marker that cluster geometry needs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClusterMember {
    /// Input id.
    pub id: MarkerId,
    /// Position, in whatever space the caller works in.
    pub position: Point,
    /// Whether the member is drawn.
    pub visible: bool,
}

impl ClusterMember {
    /// Creates a member.
    #[must_use]
    pub fn new(id: MarkerId, position: Point, visible: bool) -> Self {
        Self {
            id,
            position,
            visible,
        }
    }
}

impl From<&Marker> for ClusterMember {
    fn from(marker: &Marker) -> Self {
        Self::new(marker.id, marker.position, marker.visible)
    }
}

/// Members of `cluster` among `markers`, in list order, using canvas positions.
pub fn members_of(
    cluster: ClusterId,
    markers: &[Marker],
) -> impl Iterator<Item = ClusterMember> + '_ {
    markers
        .iter()
        .filter(move |m| cluster != 0 && m.cluster_id == cluster)
        .map(ClusterMember::from)
}

/// Arithmetic mean of `positions`.
///
/// An empty input yields [`Point::ZERO`]; callers must not draw or hit-test
/// that point.
#[must_use]
pub fn barycenter<I>(positions: I) -> Point
where
    I: IntoIterator<Item = Point>,
{
    let mut sum = Vec2::ZERO;
    let mut count = 0_u32;
    for p in positions {
        sum += p.to_vec2();
        count += 1;
    }
    if count == 0 {
        return Point::ZERO;
    }
    (sum / f64::from(count)).to_point()
}

/// The member with the lowest id, regardless of list order.
#[must_use]
pub fn first_input(members: &[ClusterMember]) -> Option<ClusterMember> {
    members.iter().copied().min_by_key(|m| m.id)
}

/// Resolves the reference point of `cluster` over all of its members.
///
/// Returns `None` for a cluster without members.
#[must_use]
pub fn resolve_reference(cluster: &ClusterConfig, members: &[ClusterMember]) -> Option<Point> {
    if members.is_empty() {
        return None;
    }
    let all = || members.iter().map(|m| m.position);
    if let Some(tracked) = cluster.tracked_input {
        return Some(
            members
                .iter()
                .find(|m| m.id == tracked)
                .map_or_else(|| barycenter(all()), |m| m.position),
        );
    }
    match cluster.reference_mode {
        ReferenceMode::FirstInput => first_input(members).map(|m| m.position),
        ReferenceMode::Barycenter => Some(barycenter(all())),
    }
}

/// The hidden first-input reference of `cluster`, if it can be dragged as a
/// stand-in for that member.
///
/// This is the case only for an untracked first-input cluster whose lowest-id
/// member is currently not visible.
#[must_use]
pub fn hidden_reference(cluster: &ClusterConfig, members: &[ClusterMember]) -> Option<ClusterMember> {
    if !cluster.is_first_input_reference() {
        return None;
    }
    first_input(members).filter(|m| !m.visible)
}

/// A cluster's resolved reference point together with its visible members.
#[derive(Clone, Debug, PartialEq)]
pub struct ClusterReference {
    /// Cluster id.
    pub cluster: ClusterId,
    /// Reference point computed over every member.
    pub point: Point,
    /// Member that is the reference, when the reference is a member.
    pub reference_member: Option<MarkerId>,
    /// Visible members, for drawing.
    pub visible_members: SmallVec<[ClusterMember; 8]>,
}

impl ClusterReference {
    /// Resolves `cluster` over `members`; `None` when it has no members.
    #[must_use]
    pub fn resolve(cluster: &ClusterConfig, members: &[ClusterMember]) -> Option<Self> {
        let point = resolve_reference(cluster, members)?;
        let reference_member = match cluster.tracked_input {
            Some(tracked) => members.iter().find(|m| m.id == tracked).map(|m| m.id),
            None if cluster.reference_mode == ReferenceMode::FirstInput => {
                first_input(members).map(|m| m.id)
            }
            None => None,
        };
        Some(Self {
            cluster: cluster.id,
            point,
            reference_member,
            visible_members: members.iter().copied().filter(|m| m.visible).collect(),
        })
    }

    /// Barycenter of the visible members only, for presentation.
    ///
    /// `None` when no member is visible.
    #[must_use]
    pub fn visible_barycenter(&self) -> Option<Point> {
        (!self.visible_members.is_empty())
            .then(|| barycenter(self.visible_members.iter().map(|m| m.position)))
    }
}
