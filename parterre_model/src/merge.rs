// Copyright 2026 the Parterre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The merge step: one canonical [`MapObject`] per id.
//!
//! Historically, seat status and price reached the canvas through several
//! independent side channels (static seat config, the price-assignment
//! table, live session/order state) and every consumer re-implemented the
//! fallback chain. Here the chain runs exactly once, up front, and the rest
//! of the workspace only ever sees the merged result.

use alloc::vec::Vec;
use core::cmp::Ordering;

use hashbrown::HashMap;
use kurbo::Rect;

use crate::object::MapObject;
use crate::types::{ObjectId, Price, PriceAssignment, SeatStatus, Zone};

/// Live per-seat state from a session/order source.
///
/// Overrides may target virtual seat identities (derived from a special
/// zone's capacity) that have no [`MapObject`] of their own; their statuses
/// are retained and visible through [`MapSnapshot::status_of`]. Overrides
/// whose id matches nothing at all are simply inert there; stale data is
/// never an error.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionOverride {
    /// Seat or virtual seat id.
    pub seat_id: ObjectId,
    /// Live status, if the session source reports one.
    pub status: Option<SeatStatus>,
    /// Live price, if the session source reports one.
    pub price: Option<f64>,
}

/// Immutable, merged view of one map: canonical objects in paint order plus
/// the zone/price lookup tables.
///
/// Built once per map-view mount via [`MapSnapshot::merge`] and shared
/// read-only with the viewport, hit-testing, rendering, and engine crates.
///
/// Paint order is descending bounding-box area, so small objects paint over
/// large ones; hit testing walks the same order in reverse.
#[derive(Clone, Debug)]
pub struct MapSnapshot {
    objects: Vec<MapObject>,
    index_of: HashMap<ObjectId, usize>,
    zones: HashMap<ObjectId, Zone>,
    prices: HashMap<ObjectId, Price>,
    detached_statuses: HashMap<ObjectId, SeatStatus>,
    content_bounds: Option<Rect>,
}

impl MapSnapshot {
    /// Merges the raw data sources into a canonical snapshot.
    ///
    /// Resolution per object, highest priority first:
    /// 1. Session override (`status` and/or `price`).
    /// 2. Price assignment → price table (sets `price` and `price_id`;
    ///    later assignments for the same seat replace earlier ones).
    /// 3. The raw object's own fields (status defaults to available).
    ///
    /// Duplicate object ids keep the last occurrence. Assignments or
    /// overrides referencing unknown ids are skipped silently, except that
    /// status overrides for unknown ids are retained for
    /// [`MapSnapshot::status_of`]. That is how sold/locked *virtual* seat
    /// identities of a special zone are represented.
    #[must_use]
    pub fn merge(
        objects: impl IntoIterator<Item = MapObject>,
        zones: impl IntoIterator<Item = Zone>,
        prices: impl IntoIterator<Item = Price>,
        assignments: &[PriceAssignment],
        overrides: &[SessionOverride],
    ) -> Self {
        let zones: HashMap<ObjectId, Zone> =
            zones.into_iter().map(|z| (z.id.clone(), z)).collect();
        let prices: HashMap<ObjectId, Price> =
            prices.into_iter().map(|p| (p.id.clone(), p)).collect();

        // Last occurrence of a duplicated id wins.
        let mut merged: Vec<MapObject> = Vec::new();
        let mut index_of: HashMap<ObjectId, usize> = HashMap::new();
        for object in objects {
            if let Some(&idx) = index_of.get(&object.id) {
                merged[idx] = object;
            } else {
                index_of.insert(object.id.clone(), merged.len());
                merged.push(object);
            }
        }

        // Re-assignment replaces: collapse the assignment list first.
        let mut assigned: HashMap<&ObjectId, &ObjectId> = HashMap::new();
        for assignment in assignments {
            assigned.insert(&assignment.seat_id, &assignment.price_id);
        }
        for (seat_id, price_id) in assigned {
            let Some(&idx) = index_of.get(seat_id) else {
                continue;
            };
            let Some(price) = prices.get(price_id) else {
                continue;
            };
            merged[idx].price = Some(price.value);
            merged[idx].price_id = Some(price.id.clone());
        }

        let mut detached_statuses: HashMap<ObjectId, SeatStatus> = HashMap::new();
        for or in overrides {
            if let Some(&idx) = index_of.get(&or.seat_id) {
                if let Some(status) = or.status {
                    merged[idx].status = status;
                }
                if let Some(price) = or.price {
                    merged[idx].price = Some(price);
                }
            } else if let Some(status) = or.status {
                detached_statuses.insert(or.seat_id.clone(), status);
            }
        }

        let content_bounds = merged
            .iter()
            .map(|o| o.bounds)
            .reduce(|acc, b| acc.union(b));

        // Paint order: descending area, id as a deterministic tie-break.
        merged.sort_by(|a, b| {
            b.area()
                .partial_cmp(&a.area())
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.id.cmp(&b.id))
        });
        let index_of = merged
            .iter()
            .enumerate()
            .map(|(i, o)| (o.id.clone(), i))
            .collect();

        Self {
            objects: merged,
            index_of,
            zones,
            prices,
            detached_statuses,
            content_bounds,
        }
    }

    /// Canonical objects in paint order (descending bounding-box area).
    #[must_use]
    pub fn objects(&self) -> &[MapObject] {
        &self.objects
    }

    /// Looks up a canonical object by id.
    #[must_use]
    pub fn get(&self, id: &ObjectId) -> Option<&MapObject> {
        self.index_of.get(id).map(|&idx| &self.objects[idx])
    }

    /// Looks up a zone by id.
    #[must_use]
    pub fn zone(&self, id: &ObjectId) -> Option<&Zone> {
        self.zones.get(id)
    }

    /// Looks up a price record by id.
    #[must_use]
    pub fn price(&self, id: &ObjectId) -> Option<&Price> {
        self.prices.get(id)
    }

    /// Resolved status for any id, including virtual seat identities.
    ///
    /// Falls back to [`SeatStatus::Available`] for ids nothing has reported
    /// on: a virtual slot nobody has touched is offered for sale.
    #[must_use]
    pub fn status_of(&self, id: &ObjectId) -> SeatStatus {
        if let Some(object) = self.get(id) {
            object.status
        } else {
            self.detached_statuses
                .get(id)
                .copied()
                .unwrap_or(SeatStatus::Available)
        }
    }

    /// Union of all object bounding boxes, if the map is non-empty.
    #[must_use]
    pub fn content_bounds(&self) -> Option<Rect> {
        self.content_bounds
    }

    /// Number of canonical objects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Returns `true` when the map has no objects.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}
