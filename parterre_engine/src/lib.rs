// Copyright 2026 the Parterre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parterre Engine: the seat-map canvas engine.
//!
//! One [`SeatMapEngine`] instance per map view replaces the hover, drag,
//! and transform state that back-office screens used to duplicate inline.
//! The engine consumes a merged, immutable snapshot (see
//! `parterre_model`), takes pointer/wheel/frame input in view coordinates,
//! and produces:
//!
//! - a rendered scene (via `parterre_render`),
//! - hit-tested hover/click/selection results,
//! - tooltip payloads and cursor hints,
//! - quantity-prompt round trips for special zones, and
//! - the off-content recovery animation (via `parterre_motion`).
//!
//! Every input method returns the [`EngineEvent`]s the call produced; the
//! host wires them to its own tooltip surface, quantity selector, cursor,
//! and repaint loop. The engine never blocks on the host: a newer tooltip
//! supersedes an older one, and network concerns (applying price
//! assignments, fetching session data) stay entirely outside.
//!
//! ## Interaction model
//!
//! Two modes, one gesture at a time:
//!
//! - [`Mode::ZoomPan`] (default): dragging pans, the wheel zooms about
//!   the pointer, a click toggles a seat or opens a quantity prompt for a
//!   special zone.
//! - [`Mode::Selection`]: dragging draws a rubber band; on release the
//!   banded ids merge with the selection (exact cover clears, proper
//!   subset subtracts, anything else unions) and the mode reverts to
//!   [`Mode::ZoomPan`].
//!
//! Gestures that move less than the configured click threshold in both
//! axes count as clicks (in pan mode) or are discarded (as a rubber
//! band).
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use parterre_engine::{EngineConfig, EngineEvent, Mode, SeatMapEngine};
//! use parterre_model::{MapObject, MapSnapshot, Zone};
//!
//! let seat = MapObject::seat("s1", Rect::new(10.0, 10.0, 20.0, 20.0), 1, 1, "z1");
//! let snapshot = MapSnapshot::merge([seat], [Zone::new("z1", "Stalls")], [], &[], &[]);
//!
//! let mut engine = SeatMapEngine::new(snapshot, EngineConfig::default());
//!
//! // Click the seat: press and release inside the click threshold.
//! engine.pointer_down(Point::new(15.0, 15.0));
//! let events = engine.pointer_up(Point::new(15.0, 15.0));
//! assert!(events.contains(&EngineEvent::SeatClicked { id: "s1".into() }));
//!
//! // The scene reflects the selection on the next repaint.
//! let scene = engine.scene();
//! assert!(!scene.items.is_empty());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod engine;
mod events;

pub use config::EngineConfig;
pub use engine::SeatMapEngine;
pub use events::{CursorIcon, EngineEvent, Events, Mode, QuantityError};
