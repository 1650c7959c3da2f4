// Copyright 2025 the Stagepad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stagepad Cluster: markers, clusters and cluster reference geometry.
//!
//! A [`Marker`] is the on-screen handle of one input channel. Markers may
//! belong to a cluster (ids `1..=10`), and a cluster moves, scales and
//! rotates relative to a **reference point** chosen by its
//! [`ClusterConfig`]:
//!
//! - A tracked member (driven by an external tracking system) when one is
//!   configured.
//! - Otherwise the member with the lowest id ([`ReferenceMode::FirstInput`]).
//! - Or the barycenter of every member ([`ReferenceMode::Barycenter`]).
//!
//! The reference point is always computed over **all** members, visible or
//! hidden, so that hit testing and dragging use the true position.
//! Presentation code that only draws visible members gets that subset from
//! [`ClusterReference::visible_members`].
//!
//! Drawing code consumes [`DrawableTarget`] values built once per data
//! assembly by [`assemble_drawables`], instead of inspecting entity types at
//! paint time.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use stagepad_cluster::{ClusterConfig, ClusterMember, ReferenceMode, resolve_reference};
//!
//! let cluster = ClusterConfig::new(1, ReferenceMode::Barycenter);
//! let members = [
//!     ClusterMember::new(4, Point::new(0.0, 0.0), true),
//!     ClusterMember::new(2, Point::new(10.0, 20.0), false),
//! ];
//! assert_eq!(resolve_reference(&cluster, &members), Some(Point::new(5.0, 10.0)));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod cluster;
mod drawable;
mod marker;

pub use cluster::{
    ClusterConfig, ClusterMember, ClusterReference, MAX_CLUSTERS, ReferenceMode, barycenter,
    first_input, hidden_reference, members_of, resolve_reference,
};
pub use drawable::{ClusterDrawable, DrawableTarget, ReferenceKind, assemble_drawables};
pub use marker::{ClusterId, Marker, MarkerId};
