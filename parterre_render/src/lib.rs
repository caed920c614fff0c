// Copyright 2026 the Parterre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parterre Render: backend-agnostic scene building for the seat map.
//!
//! This crate turns the canonical map snapshot plus the current viewport
//! and interaction state into a retained display list: a [`Scene`] of
//! [`SceneItem`]s in paint order. It sits between the engine and concrete
//! rasterizers: hosts replay the items onto whatever canvas technology
//! they use (2D canvas, SVG, a GPU path renderer) applying the scene's
//! world→view affine.
//!
//! # What it owns
//!
//! - **Style resolution** ([`resolve_style`]): a deterministic first-match
//!   rule table over status, kind, selection, and price-filter membership,
//!   plus the hover/selection scale-up and glow.
//! - **Price colors** ([`color_for_price`], [`PALETTE`]): prices bucket
//!   into 100-unit bands over a fixed ~150-entry palette; pure function,
//!   stable across sessions.
//! - **Scene assembly** ([`build_scene`]): background, backdrop panel,
//!   objects large-to-small with labels, rubber-band preview and outline.
//!
//! # What it does not own
//!
//! No pixels, no text shaping, no event handling. Geometry degradation for
//! malformed shapes already happened in `parterre_model`; by the time
//! items reach a backend every outline is a plain Bézier path.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Affine, Rect};
//! use parterre_model::{MapObject, MapSnapshot};
//! use parterre_render::{SceneParams, Theme, build_scene};
//!
//! let seat = MapObject::seat("s1", Rect::new(0.0, 0.0, 10.0, 10.0), 1, 1, "z");
//! let snapshot = MapSnapshot::merge([seat], [], [], &[], &[]);
//!
//! let scene = build_scene(
//!     &snapshot,
//!     Affine::IDENTITY,
//!     &SceneParams::default(),
//!     &Theme::default(),
//! );
//! // Background, backdrop, the seat, and its label.
//! assert_eq!(scene.items.len(), 4);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod palette;
mod scene;
mod style;
mod theme;

pub use palette::{PALETTE, color_for_price};
pub use scene::{Scene, SceneItem, SceneParams, build_scene};
pub use style::{ObjectState, StrokeStyle, Style, resolve_style};
pub use theme::Theme;
