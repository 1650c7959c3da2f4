// Copyright 2025 the Stagepad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stagepad Gesture: resolve concurrent touches into marker drags, cluster
//! drags, vector gestures and pan/zoom.
//!
//! The [`GestureResolver`] keeps one record per active pointer. On its first
//! pressed event a pointer is classified, and that classification sticks
//! until the pointer lifts:
//!
//! - [`GestureState::MarkerDrag`]: the pointer moves one input.
//! - [`GestureState::BarycenterDrag`] and [`GestureState::HiddenReferenceDrag`]:
//!   the pointer moves a cluster through a virtual reference point.
//! - [`GestureState::VectorControl`]: a second finger that rotates and scales
//!   relative to something another pointer drags (height and rotation for an
//!   input, scale and rotation for a cluster).
//! - [`GestureState::Idle`]: no target. Two or more idle pointers pan and zoom
//!   the view when nothing is dragged.
//!
//! The resolver never mutates host data. Each call to
//! [`GestureResolver::process`] returns [`Intent`]s for the host to apply and
//! forward, plus the next [`ViewState`](stagepad_view::ViewState) when the
//! view moved. Since hosts usually apply intents asynchronously, the resolver
//! also keeps a [`PositionCache`] whose optimistic entries should be drawn
//! while a drag is in flight.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use stagepad_cluster::Marker;
//! use stagepad_gesture::{GestureResolver, GestureState, Intent, PointerEvent, Scene};
//! use stagepad_view::{StageGeometry, ViewState, ViewTransform};
//!
//! let stage = StageGeometry::new(20.0, 10.0);
//! let view = ViewTransform::new(ViewState::fit_stage(&stage), stage, Size::new(1000.0, 500.0), 20.0);
//! let markers = [Marker::new(1, view.stage_to_canvas(Point::ORIGIN), 20.0)];
//! let scene = Scene::new(&markers, &[], &view);
//!
//! let mut resolver = GestureResolver::new();
//! resolver.process(&[PointerEvent::down(0, view.stage_to_canvas(Point::ORIGIN))], &scene);
//! assert_eq!(resolver.state_of(0), Some(GestureState::MarkerDrag(1)));
//!
//! // Lifting the finger commits the final stage position.
//! let out = resolver.process(&[PointerEvent::up(0, view.stage_to_canvas(Point::new(1.0, 0.5)))], &scene);
//! let Some(Intent::MarkerPosition { position, committed: true, .. }) = out.intents.last() else {
//!     panic!("expected a committed position");
//! };
//! assert!((position.x - 1.0).abs() < 1e-9 && (position.y - 0.5).abs() < 1e-9);
//! assert_eq!(resolver.state_of(0), None);
//! ```
//!
//! The [`drag`] module holds the single-pointer drag tracker the resolver is
//! built on; it is usable on its own.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod cache;
mod config;
mod contact;
pub mod drag;
mod intent;
mod resolver;
mod vector;

pub use cache::{PositionCache, Reconcile};
pub use config::{ConfigError, GestureConfig};
pub use contact::{GestureState, PointerContact, PointerEvent, PointerId, PointerPhase};
pub use intent::Intent;
pub use resolver::{GestureDebugInfo, GestureOutput, GestureResolver, Scene};
pub use vector::{VectorBaseline, VectorControl, VectorDelta, VectorTarget, vector_delta};
