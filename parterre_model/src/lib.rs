// Copyright 2026 the Parterre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parterre Model: the canonical seat-map data model.
//!
//! This crate defines the plain-data types every other Parterre crate works
//! with ([`MapObject`], [`Zone`], [`Price`], [`PriceAssignment`]) plus the
//! **merge step** that collapses the several possibly-inconsistent data
//! sources of a back office (static seat configuration, price assignments,
//! live session/order state) into exactly one canonical [`MapObject`] per id
//! before the engine ever sees them.
//!
//! It does **not** own any rendering, hit testing, or interaction state;
//! those live in the sibling `parterre_*` crates. Callers are expected to:
//! - Load raw objects, zones, prices, assignments, and session overrides
//!   from their persistence/API layer.
//! - Build a [`MapSnapshot`] once per map-view mount via
//!   [`MapSnapshot::merge`]; the snapshot is immutable for the session.
//! - Hand the snapshot to the viewport/hit/render/engine crates.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Rect;
//! use parterre_model::{
//!     MapObject, MapSnapshot, ObjectKind, PriceAssignment, SeatStatus, Shape, Zone,
//! };
//!
//! let seat = MapObject::seat("s1", Rect::new(0.0, 0.0, 10.0, 10.0), 1, 1, "z1");
//! let zone = Zone::new("z1", "Stalls");
//!
//! let snapshot = MapSnapshot::merge([seat], [zone], [], &[], &[]);
//! let canonical = snapshot.get(&"s1".into()).unwrap();
//! assert_eq!(canonical.status, SeatStatus::Available);
//! assert!(canonical.clickable());
//! ```
//!
//! ## Shapes and degraded geometry
//!
//! Each object's [`Shape`] is interpreted relative to its world-space
//! bounding box. Outline construction is total: malformed polygon or path
//! data degrades to the plain bounding rectangle instead of failing, so a
//! single bad record can never abort a repaint.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod merge;
mod object;
mod shape;
mod types;

pub use merge::{MapSnapshot, SessionOverride};
pub use object::MapObject;
pub use shape::{PathError, Shape, parse_path_data};
pub use types::{ObjectId, ObjectKind, Price, PriceAssignment, SeatStatus, Zone};
