// Copyright 2025 the Stagepad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The multi-pointer gesture resolver.

use alloc::vec::Vec;

use hashbrown::HashMap;
use kurbo::{Point, Vec2};
use smallvec::SmallVec;
use stagepad_cluster::{
    ClusterConfig, ClusterId, ClusterMember, MAX_CLUSTERS, Marker, MarkerId, barycenter,
    first_input, hidden_reference, members_of, resolve_reference,
};
use stagepad_coords::normalize_angle;
use stagepad_view::{PinchSample, ViewState, ViewTransform};

use crate::cache::PositionCache;
use crate::config::{ConfigError, GestureConfig};
use crate::contact::{GestureState, PointerContact, PointerEvent, PointerId, PointerPhase, Role};
use crate::intent::Intent;
use crate::vector::{VectorControl, VectorTarget};

/// Read-only view of the host's data for one call to
/// [`GestureResolver::process`].
#[derive(Clone, Copy, Debug)]
pub struct Scene<'a> {
    /// Markers with canvas positions under `view`.
    pub markers: &'a [Marker],
    /// Cluster settings.
    pub clusters: &'a [ClusterConfig],
    /// Current view.
    pub view: &'a ViewTransform,
}

impl<'a> Scene<'a> {
    /// Bundles the host data.
    #[must_use]
    pub fn new(markers: &'a [Marker], clusters: &'a [ClusterConfig], view: &'a ViewTransform) -> Self {
        Self {
            markers,
            clusters,
            view,
        }
    }

    fn marker(&self, id: MarkerId) -> Option<&'a Marker> {
        self.markers.iter().find(|m| m.id == id)
    }

    fn cluster(&self, id: ClusterId) -> Option<&'a ClusterConfig> {
        self.clusters.iter().find(|c| c.id == id)
    }

    fn members(&self, cluster: ClusterId) -> SmallVec<[ClusterMember; 8]> {
        members_of(cluster, self.markers).collect()
    }
}

/// What one batch of pointer events produced.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GestureOutput {
    /// Changes for the host to apply, in event order.
    pub intents: Vec<Intent>,
    /// The next view, when a pan/zoom gesture moved it.
    pub view: Option<ViewState>,
}

/// Debug snapshot of a [`GestureResolver`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GestureDebugInfo {
    /// Active pointers.
    pub contacts: usize,
    /// Marker drags.
    pub marker_drags: usize,
    /// Barycenter and hidden-reference drags.
    pub cluster_drags: usize,
    /// Live vector gestures.
    pub vector_controls: usize,
    /// Pointers without a target.
    pub idle: usize,
}

/// Resolves pointer batches into drags, vector gestures and pan/zoom.
///
/// Each pointer is classified once, on its first pressed event, in this
/// order:
///
/// 1. The nearest grabbable marker within `radius × pickup_multiplier` that
///    no other pointer drags. Equidistant markers go to the lowest id.
/// 2. Clusters `1..=10`: barycenters first, then hidden first-input
///    references, each within the pickup radius and not already dragged.
/// 3. A vector gesture on the oldest cluster drag that has none yet.
/// 4. A vector gesture on the oldest marker drag that has none yet.
/// 5. Otherwise idle.
///
/// A pointer that hits a marker or cluster while
/// [`GestureConfig::max_concurrent_drags`] drags are active is idle.
///
/// Two or more idle pointers pan and zoom the view, but only while nothing
/// is being dragged.
#[derive(Clone, Debug)]
pub struct GestureResolver {
    config: GestureConfig,
    contacts: SmallVec<[PointerContact; 12]>,
    cache: PositionCache,
    cluster_rotation: HashMap<ClusterId, f64>,
}

impl Default for GestureResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl GestureResolver {
    /// Creates a resolver with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        let config = GestureConfig::default();
        Self {
            config,
            contacts: SmallVec::new(),
            cache: PositionCache::new(config.correction_threshold),
            cluster_rotation: HashMap::new(),
        }
    }

    /// Creates a resolver with a validated configuration.
    pub fn with_config(config: GestureConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            cache: PositionCache::new(config.correction_threshold),
            ..Self::new()
        })
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Processes one batch of pointer events.
    pub fn process(&mut self, events: &[PointerEvent], scene: &Scene<'_>) -> GestureOutput {
        let mut intents = Vec::new();
        for contact in &mut self.contacts {
            contact.begin_frame();
        }
        for event in events {
            self.handle(event, scene, &mut intents);
        }
        let view = self.pan_zoom(scene.view);
        debug_assert!(self.invariants_hold(), "gesture invariants violated");
        GestureOutput { intents, view }
    }

    /// Classification of `pointer`, if it is active.
    #[must_use]
    pub fn state_of(&self, pointer: PointerId) -> Option<GestureState> {
        self.contact(pointer).map(PointerContact::state)
    }

    /// The contact for `pointer`, if it is active.
    #[must_use]
    pub fn contact(&self, pointer: PointerId) -> Option<&PointerContact> {
        self.contacts.iter().find(|c| c.id() == pointer)
    }

    /// Active contacts, oldest first.
    #[must_use]
    pub fn contacts(&self) -> &[PointerContact] {
        &self.contacts
    }

    /// Number of marker, barycenter and hidden-reference drags.
    #[must_use]
    pub fn drag_count(&self) -> usize {
        self.contacts.iter().filter(|c| c.state().is_drag()).count()
    }

    /// Whether a pointer is dragging `marker`.
    #[must_use]
    pub fn is_marker_dragged(&self, marker: MarkerId) -> bool {
        self.contacts
            .iter()
            .any(|c| c.state() == GestureState::MarkerDrag(marker))
    }

    /// Whether a pointer is dragging the barycenter or hidden reference of `cluster`.
    #[must_use]
    pub fn is_cluster_dragged(&self, cluster: ClusterId) -> bool {
        self.contacts
            .iter()
            .any(|c| c.state().dragged_cluster() == Some(cluster))
    }

    /// The live vector gesture on `target`, if any.
    #[must_use]
    pub fn vector_control_for(&self, target: VectorTarget) -> Option<&VectorControl> {
        self.contacts
            .iter()
            .filter_map(PointerContact::vector_control)
            .find(|vc| vc.target() == target)
    }

    /// Rotation accumulated on `cluster` by vector gestures, including the
    /// live one, in degrees.
    #[must_use]
    pub fn cluster_rotation(&self, cluster: ClusterId) -> f64 {
        let base = self.cluster_rotation.get(&cluster).copied().unwrap_or(0.0);
        let live = self
            .vector_control_for(VectorTarget::Cluster(cluster))
            .map_or(0.0, VectorControl::session_rotation);
        normalize_angle(base + live)
    }

    /// Stage-position cache.
    #[must_use]
    pub fn cache(&self) -> &PositionCache {
        &self.cache
    }

    /// Stage-position cache, for feeding authoritative positions.
    pub fn cache_mut(&mut self) -> &mut PositionCache {
        &mut self.cache
    }

    /// Drops every contact and optimistic position.
    ///
    /// Call this when the stage geometry changes. Rotation applied by live
    /// cluster vector gestures is kept.
    pub fn reset(&mut self) {
        for contact in &self.contacts {
            if let Some(vc) = contact.vector_control() {
                persist_rotation(&mut self.cluster_rotation, vc);
            }
        }
        self.contacts.clear();
        self.cache.clear_all_optimistic();
    }

    /// Snapshot of the current contacts for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> GestureDebugInfo {
        let mut info = GestureDebugInfo {
            contacts: self.contacts.len(),
            ..GestureDebugInfo::default()
        };
        for contact in &self.contacts {
            match contact.state() {
                GestureState::Idle => info.idle += 1,
                GestureState::MarkerDrag(_) => info.marker_drags += 1,
                GestureState::BarycenterDrag(_) | GestureState::HiddenReferenceDrag(_) => {
                    info.cluster_drags += 1;
                }
                GestureState::VectorControl(_) => info.vector_controls += 1,
            }
        }
        info
    }

    fn handle(&mut self, event: &PointerEvent, scene: &Scene<'_>, intents: &mut Vec<Intent>) {
        let Some(index) = self.contacts.iter().position(|c| c.id() == event.id) else {
            if event.phase.is_pressed() {
                self.press(event.id, event.position, scene);
            }
            return;
        };
        match event.phase {
            PointerPhase::Down | PointerPhase::Move => {
                self.move_contact(index, event.position, scene, intents);
            }
            PointerPhase::Up => {
                self.move_contact(index, event.position, scene, intents);
                self.release(index, scene, intents);
            }
            PointerPhase::Cancel => self.release(index, scene, intents),
        }
    }

    fn press(&mut self, id: PointerId, touch: Point, scene: &Scene<'_>) {
        let (role, target) = self.classify(touch, scene);
        let mut contact = PointerContact::new(id, touch, role);
        if let Some(target) = target {
            contact.drag.start(touch, target);
        }
        log::debug!("pointer {id}: {:?}", contact.state());
        self.contacts.push(contact);
    }

    fn classify(&self, touch: Point, scene: &Scene<'_>) -> (Role, Option<Point>) {
        let at_cap = self.drag_count() >= self.config.max_concurrent_drags;
        if let Some(marker) = self.pick_marker(touch, scene) {
            if at_cap {
                log::debug!("marker {} hit with the drag cap reached", marker.id);
                return (Role::Idle, None);
            }
            let moves_cluster = marker
                .cluster()
                .filter(|&cluster| is_reference_member(marker.id, cluster, scene));
            let role = Role::Marker {
                marker: marker.id,
                radius: marker.radius,
                moves_cluster,
            };
            return (role, Some(marker.position));
        }
        if let Some((role, point)) = self.pick_cluster(touch, scene) {
            if at_cap {
                log::debug!("cluster reference hit with the drag cap reached");
                return (Role::Idle, None);
            }
            return (role, Some(point));
        }
        match self.attach_vector(touch, scene) {
            Some(vc) => (Role::Vector(vc), None),
            None => (Role::Idle, None),
        }
    }

    fn pick_marker<'a>(&self, touch: Point, scene: &Scene<'a>) -> Option<&'a Marker> {
        let multiplier = self.config.pickup_multiplier;
        scene
            .markers
            .iter()
            .filter(|m| m.is_grabbable() && !self.is_marker_dragged(m.id))
            .filter_map(|m| {
                let distance = m.position.distance(touch);
                (distance <= m.radius * multiplier).then_some((distance, m))
            })
            .min_by(|(da, a), (db, b)| da.total_cmp(db).then(a.id.cmp(&b.id)))
            .map(|(_, m)| m)
    }

    fn pick_cluster(&self, touch: Point, scene: &Scene<'_>) -> Option<(Role, Point)> {
        let pickup = scene.view.marker_radius() * self.config.pickup_multiplier;
        let candidates: SmallVec<[&ClusterConfig; 10]> = (1..=MAX_CLUSTERS)
            .filter(|&id| !self.is_cluster_dragged(id))
            .filter_map(|id| scene.cluster(id))
            .collect();
        for config in candidates.iter().filter(|c| c.is_barycenter_draggable()) {
            let members = scene.members(config.id);
            if let Some(point) = resolve_reference(config, &members) {
                if point.distance(touch) <= pickup {
                    return Some((Role::Barycenter { cluster: config.id }, point));
                }
            }
        }
        for config in &candidates {
            let members = scene.members(config.id);
            if let Some(member) = hidden_reference(config, &members) {
                if member.position.distance(touch) <= pickup {
                    let role = Role::HiddenReference {
                        cluster: config.id,
                        member: member.id,
                    };
                    return Some((role, member.position));
                }
            }
        }
        None
    }

    fn attach_vector(&self, touch: Point, scene: &Scene<'_>) -> Option<VectorControl> {
        for contact in &self.contacts {
            let (Role::Barycenter { cluster } | Role::HiddenReference { cluster, .. }) = contact.role
            else {
                continue;
            };
            if self.vector_control_for(VectorTarget::Cluster(cluster)).is_some() {
                continue;
            }
            let anchor = contact.target_position().unwrap_or(contact.position());
            let rotation = self.cluster_rotation.get(&cluster).copied().unwrap_or(0.0);
            return Some(VectorControl::cluster(cluster, rotation, anchor, touch));
        }
        for contact in &self.contacts {
            let Role::Marker { marker, .. } = contact.role else {
                continue;
            };
            if self.vector_control_for(VectorTarget::Input(marker)).is_some() {
                continue;
            }
            let anchor = contact.target_position().unwrap_or(contact.position());
            let (height, rotation) = scene
                .marker(marker)
                .map_or((0.0, 0.0), |m| (m.height, m.rotation));
            return Some(VectorControl::input(marker, height, rotation, anchor, touch));
        }
        None
    }

    fn move_contact(
        &mut self,
        index: usize,
        touch: Point,
        scene: &Scene<'_>,
        intents: &mut Vec<Intent>,
    ) {
        let view = scene.view;
        let min_distance = self.config.min_vector_distance;
        let contact = &mut self.contacts[index];
        contact.position = touch;
        match contact.role {
            Role::Idle => {}
            Role::Vector(ref mut vc) => {
                if vc.touch() != touch {
                    vc.set_touch(touch);
                    vc.emit(min_distance, intents);
                }
            }
            Role::Marker {
                marker,
                radius,
                moves_cluster,
            } => {
                let Some(delta) = contact.drag.update(touch, |p| view.clamp_to_canvas(p, radius))
                else {
                    return;
                };
                let Some(logical) = contact.drag.logical_pos() else {
                    return;
                };
                if delta == Vec2::ZERO {
                    return;
                }
                let position = view.canvas_to_stage(logical);
                intents.push(match moves_cluster {
                    Some(cluster) => Intent::ClusterMove {
                        cluster,
                        delta: view.canvas_delta_to_stage(delta),
                    },
                    None => Intent::MarkerPosition {
                        marker,
                        position,
                        committed: false,
                    },
                });
                self.cache.set_optimistic(marker, position);
                self.follow_anchor(VectorTarget::Input(marker), logical, intents);
            }
            Role::Barycenter { cluster } | Role::HiddenReference { cluster, .. } => {
                let radius = view.marker_radius();
                let Some(delta) = contact.drag.update(touch, |p| view.clamp_to_canvas(p, radius))
                else {
                    return;
                };
                let Some(logical) = contact.drag.logical_pos() else {
                    return;
                };
                if delta == Vec2::ZERO {
                    return;
                }
                intents.push(Intent::ClusterMove {
                    cluster,
                    delta: view.canvas_delta_to_stage(delta),
                });
                self.follow_anchor(VectorTarget::Cluster(cluster), logical, intents);
            }
        }
    }

    /// Moves the anchor of the vector gesture on `target` and re-emits it.
    fn follow_anchor(&mut self, target: VectorTarget, anchor: Point, intents: &mut Vec<Intent>) {
        let min_distance = self.config.min_vector_distance;
        for contact in &mut self.contacts {
            if let Role::Vector(ref mut vc) = contact.role {
                if vc.target() == target {
                    vc.set_anchor(anchor);
                    vc.emit(min_distance, intents);
                }
            }
        }
    }

    fn release(&mut self, index: usize, scene: &Scene<'_>, intents: &mut Vec<Intent>) {
        let contact = self.contacts.remove(index);
        match contact.role {
            Role::Idle => {}
            Role::Marker { marker, .. } => {
                if let Some(logical) = contact.target_position() {
                    let position = scene.view.canvas_to_stage(logical);
                    intents.push(Intent::MarkerPosition {
                        marker,
                        position,
                        committed: true,
                    });
                    self.cache.commit(marker, position);
                }
                self.detach_vectors(VectorTarget::Input(marker));
                log::debug!("pointer {}: released marker {marker}", contact.id());
            }
            Role::Barycenter { cluster } | Role::HiddenReference { cluster, .. } => {
                self.detach_vectors(VectorTarget::Cluster(cluster));
                log::debug!("pointer {}: released cluster {cluster}", contact.id());
            }
            Role::Vector(vc) => persist_rotation(&mut self.cluster_rotation, &vc),
        }
    }

    /// Ends the vector gesture on `target`; its pointer stays active as idle.
    fn detach_vectors(&mut self, target: VectorTarget) {
        for contact in &mut self.contacts {
            if let Role::Vector(vc) = contact.role {
                if vc.target() == target {
                    persist_rotation(&mut self.cluster_rotation, &vc);
                    contact.role = Role::Idle;
                }
            }
        }
    }

    fn pan_zoom(&self, view: &ViewTransform) -> Option<ViewState> {
        if self.drag_count() > 0 {
            return None;
        }
        let free: SmallVec<[&PointerContact; 12]> = self
            .contacts
            .iter()
            .filter(|c| c.is_free() && !c.fresh)
            .collect();
        let [first, second, ..] = free.as_slice() else {
            return None;
        };
        let sample = PinchSample {
            previous_centroid: barycenter(free.iter().map(|c| c.frame_start)),
            current_centroid: barycenter(free.iter().map(|c| c.position)),
            previous_distance: first.frame_start.distance(second.frame_start),
            current_distance: first.position.distance(second.position),
        };
        let next = view.pan_zoom(&sample);
        (next != view.state()).then_some(next)
    }

    fn invariants_hold(&self) -> bool {
        let mut markers = SmallVec::<[MarkerId; 12]>::new();
        let mut clusters = SmallVec::<[ClusterId; 12]>::new();
        let mut vectors = SmallVec::<[VectorTarget; 12]>::new();
        for contact in &self.contacts {
            match contact.state() {
                GestureState::Idle => {}
                GestureState::MarkerDrag(m) => {
                    if markers.contains(&m) {
                        return false;
                    }
                    markers.push(m);
                }
                GestureState::BarycenterDrag(c) | GestureState::HiddenReferenceDrag(c) => {
                    if clusters.contains(&c) {
                        return false;
                    }
                    clusters.push(c);
                }
                GestureState::VectorControl(t) => {
                    if vectors.contains(&t) {
                        return false;
                    }
                    vectors.push(t);
                }
            }
        }
        let primary_alive = |t: &VectorTarget| match *t {
            VectorTarget::Input(m) => markers.contains(&m),
            VectorTarget::Cluster(c) => clusters.contains(&c),
        };
        markers.len() + clusters.len() <= self.config.max_concurrent_drags
            && vectors.iter().all(primary_alive)
    }
}

/// Whether `marker` is the first-input reference of untracked `cluster`.
fn is_reference_member(marker: MarkerId, cluster: ClusterId, scene: &Scene<'_>) -> bool {
    scene
        .cluster(cluster)
        .is_some_and(ClusterConfig::is_first_input_reference)
        && first_input(&scene.members(cluster)).is_some_and(|m| m.id == marker)
}

fn persist_rotation(rotations: &mut HashMap<ClusterId, f64>, vc: &VectorControl) {
    if let VectorTarget::Cluster(cluster) = vc.target() {
        let total = rotations.entry(cluster).or_insert(0.0);
        *total = normalize_angle(*total + vc.session_rotation());
    }
}
