// Copyright 2026 the Parterre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parterre Capacity: special-zone expansion into virtual seat identities.
//!
//! A special zone is a single geometric object standing in for `capacity`
//! interchangeable seats with no individual geometry. This crate owns the
//! lifecycle of the derived identities:
//!
//! - [`derive_virtual_seat_id`]: the **one** canonical id derivation for
//!   capacity slot `n` of a zone object.
//! - [`expand`]: the zone's primary id plus its `capacity − 1` virtual ids.
//! - [`available_count`]: how many of those identities are currently offered
//!   to a buyer.
//! - [`collapse_for_pricing`]: widens a selection so that pricing a special
//!   zone prices its *entire* capacity, never just the primary object.
//!
//! Virtual identities are transient: they exist during selection and price
//! application and are never stored as map objects.
//!
//! ## Minimal example
//!
//! ```rust
//! use parterre_capacity::{available_count, derive_virtual_seat_id, expand};
//! use parterre_model::SeatStatus;
//!
//! let zone_id = "sz1".into();
//! let ids = expand(&zone_id, 4);
//! assert_eq!(ids.len(), 4); // primary + 3 virtual
//! assert_eq!(ids[1], derive_virtual_seat_id(&zone_id, 1));
//!
//! // Nothing sold yet: the full capacity is offered.
//! let count = available_count(&zone_id, 4, |_| SeatStatus::Available);
//! assert_eq!(count, 4);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::format;
use alloc::vec::Vec;

use parterre_model::{ObjectId, SeatStatus};

/// Canonical id for capacity slot `index` of a special-zone object.
///
/// Indices run from `1` to `capacity − 1`; slot `0` is the zone object
/// itself, which keeps its own unsuffixed id. There is exactly one
/// derivation scheme; pricing, cart, and selection all use this one.
#[must_use]
pub fn derive_virtual_seat_id(zone_object_id: &ObjectId, index: u32) -> ObjectId {
    format!("{zone_object_id}_seat_{index}").into()
}

/// Parses a virtual seat id back into its zone object id and slot index.
///
/// Returns `None` for ids not produced by [`derive_virtual_seat_id`].
#[must_use]
pub fn parse_virtual_seat_id(id: &ObjectId) -> Option<(ObjectId, u32)> {
    let (zone, index) = id.as_str().rsplit_once("_seat_")?;
    if zone.is_empty() {
        return None;
    }
    let index: u32 = index.parse().ok()?;
    Some((zone.into(), index))
}

/// Expands a special zone into its full list of addressable identities.
///
/// Returns the primary id followed by `capacity − 1` virtual ids,
/// `capacity` identities in total. A capacity of one or less degenerates to
/// a normal clickable seat: only the primary id, no expansion.
#[must_use]
pub fn expand(zone_object_id: &ObjectId, capacity: u32) -> Vec<ObjectId> {
    let mut ids = Vec::with_capacity(capacity.max(1) as usize);
    ids.push(zone_object_id.clone());
    for index in 1..capacity {
        ids.push(derive_virtual_seat_id(zone_object_id, index));
    }
    ids
}

/// Number of identities of a special zone currently offered to a buyer.
///
/// Counts one for the primary object plus every virtual identity whose
/// status (per `status_of`, typically `MapSnapshot::status_of`) is
/// available or reserved. The result never exceeds `capacity`.
///
/// Reserved slots count as offered inventory here even though reserved
/// objects are never hoverable or selectable on the map; the back office
/// treats a reservation as stock that may still convert.
#[must_use]
pub fn available_count(
    zone_object_id: &ObjectId,
    capacity: u32,
    status_of: impl Fn(&ObjectId) -> SeatStatus,
) -> u32 {
    let mut count = 1;
    for index in 1..capacity {
        let id = derive_virtual_seat_id(zone_object_id, index);
        match status_of(&id) {
            SeatStatus::Available | SeatStatus::Reserved => count += 1,
            SeatStatus::Sold | SeatStatus::Locked => {}
        }
    }
    count
}

/// Widens a selection for price assignment.
///
/// Selecting a special zone implicitly selects all of its capacity: every
/// id for which `capacity_of` reports a capacity greater than one is
/// replaced by its full expansion (primary plus virtuals); all other ids
/// pass through unchanged. Duplicates are emitted once, keeping first
/// occurrence order.
#[must_use]
pub fn collapse_for_pricing<'a>(
    selected: impl IntoIterator<Item = &'a ObjectId>,
    capacity_of: impl Fn(&ObjectId) -> Option<u32>,
) -> Vec<ObjectId> {
    let mut out: Vec<ObjectId> = Vec::new();
    let push_unique = |id: ObjectId, out: &mut Vec<ObjectId>| {
        if !out.iter().any(|existing| *existing == id) {
            out.push(id);
        }
    };
    for id in selected {
        match capacity_of(id) {
            Some(capacity) if capacity > 1 => {
                for derived in expand(id, capacity) {
                    push_unique(derived, &mut out);
                }
            }
            _ => push_unique(id.clone(), &mut out),
        }
    }
    out
}
