// Copyright 2026 the Parterre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parterre Hit: point and rectangle queries over the seat map.
//!
//! Given the canonical, paint-ordered object list from `parterre_model`,
//! this crate resolves:
//! - [`hit_test`]: the topmost eligible object under a world-space point.
//! - [`intersect_rect`]: all eligible objects intersecting a world-space
//!   rectangle (the rubber-band query).
//!
//! Eligibility is expressed as a [`HitFilter`]: clickability, interactive
//! status, and optional membership of an active price filter.
//!
//! ## Bounding boxes only
//!
//! Containment is tested against the object's axis-aligned bounding box for
//! **every** shape, circles and ellipses included. Clicking the visual
//! corner of a round seat still hits it. This mirrors the behavior users of
//! the seat map already rely on and is kept deliberately: it is a
//! documented precision trade-off, not an approximation waiting to be
//! fixed. (At much larger object counts, swap the linear scans for a
//! spatial index without touching these contracts.)
//!
//! ## Z-order
//!
//! The object list is painted in descending bounding-box area, so small
//! objects draw over large ones. Hit testing walks the same list in
//! reverse: the topmost (last painted) object wins, never merely the first
//! match in storage order.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use parterre_hit::{hit_test, HitFilter};
//! use parterre_model::{MapObject, MapSnapshot};
//!
//! let big = MapObject::special_zone("zone", Rect::new(0.0, 0.0, 100.0, 100.0), 10, "z");
//! let seat = MapObject::seat("seat", Rect::new(40.0, 40.0, 50.0, 50.0), 1, 1, "z");
//! let snapshot = MapSnapshot::merge([big, seat], [], [], &[], &[]);
//!
//! // The seat paints over the zone, so it wins the hit.
//! let hit = hit_test(Point::new(45.0, 45.0), snapshot.objects(), &HitFilter::selectable());
//! assert_eq!(hit.unwrap().id.as_str(), "seat");
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

use hashbrown::HashSet;
use kurbo::{Point, Rect};
use parterre_model::{MapObject, ObjectId};

bitflags::bitflags! {
    /// Requirements an object must meet to be returned from a query.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct HitRequirements: u8 {
        /// Object must be clickable (see `MapObject::clickable`).
        const CLICKABLE = 0b0000_0001;
        /// Object status must not block interaction (excludes reserved,
        /// sold, and locked).
        const INTERACTIVE = 0b0000_0010;
    }
}

impl Default for HitRequirements {
    fn default() -> Self {
        Self::CLICKABLE | Self::INTERACTIVE
    }
}

/// Filter applied to hit-test and intersection queries.
///
/// The default (via [`HitFilter::selectable`]) admits only clickable
/// objects whose status allows interaction, the predicate behind hover and
/// selection. An active price filter additionally restricts results to
/// objects whose resolved price id is in the set; objects with no price
/// assignment never pass an active filter.
#[derive(Clone, Copy, Debug, Default)]
pub struct HitFilter<'a> {
    /// Flag requirements.
    pub requirements: HitRequirements,
    /// Optional active price filter (set of admitted price ids).
    pub active_prices: Option<&'a HashSet<ObjectId>>,
}

impl<'a> HitFilter<'a> {
    /// The hover/selection predicate: clickable, interactive status, no
    /// price restriction.
    #[must_use]
    pub fn selectable() -> Self {
        Self {
            requirements: HitRequirements::default(),
            active_prices: None,
        }
    }

    /// Admits every object. Useful for purely geometric queries.
    #[must_use]
    pub fn any() -> Self {
        Self {
            requirements: HitRequirements::empty(),
            active_prices: None,
        }
    }

    /// Returns a copy restricted to the given price-id set.
    #[must_use]
    pub fn with_active_prices(self, prices: &'a HashSet<ObjectId>) -> Self {
        Self {
            active_prices: Some(prices),
            ..self
        }
    }

    /// Whether `object` satisfies this filter.
    #[must_use]
    pub fn admits(&self, object: &MapObject) -> bool {
        if self.requirements.contains(HitRequirements::CLICKABLE) && !object.clickable() {
            return false;
        }
        if self.requirements.contains(HitRequirements::INTERACTIVE)
            && object.status.blocks_interaction()
        {
            return false;
        }
        if let Some(prices) = self.active_prices {
            match &object.price_id {
                Some(price_id) => {
                    if !prices.contains(price_id) {
                        return false;
                    }
                }
                None => return false,
            }
        }
        true
    }
}

/// Resolves the topmost eligible object under a world-space point.
///
/// `objects` must be in paint order (descending bounding-box area, as
/// produced by `MapSnapshot`); the scan runs in reverse so the object
/// painted last (the smallest one under the point) wins.
#[must_use]
pub fn hit_test<'a>(
    world_point: Point,
    objects: &'a [MapObject],
    filter: &HitFilter<'_>,
) -> Option<&'a MapObject> {
    objects
        .iter()
        .rev()
        .find(|object| object.bounds.contains(world_point) && filter.admits(object))
}

/// Collects all eligible objects whose bounding box overlaps `world_rect`.
///
/// Results come back in paint order. Overlap must have positive area;
/// merely touching edges does not select.
#[must_use]
pub fn intersect_rect<'a>(
    world_rect: Rect,
    objects: &'a [MapObject],
    filter: &HitFilter<'_>,
) -> Vec<&'a MapObject> {
    objects
        .iter()
        .filter(|object| {
            object.bounds.intersect(world_rect).area() > 0.0 && filter.admits(object)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use parterre_model::{MapSnapshot, ObjectKind, SeatStatus, Shape};

    fn snapshot() -> MapSnapshot {
        let zone = MapObject::special_zone("zone", Rect::new(0.0, 0.0, 100.0, 100.0), 8, "z");
        let seat_a = MapObject::seat("a", Rect::new(10.0, 10.0, 20.0, 20.0), 1, 1, "z");
        let mut seat_sold = MapObject::seat("sold", Rect::new(30.0, 10.0, 40.0, 20.0), 1, 2, "z");
        seat_sold.status = SeatStatus::Sold;
        let stage = MapObject::fixture(
            "stage",
            ObjectKind::Scene,
            Shape::Rect { radius: 0.0 },
            Rect::new(10.0, 60.0, 90.0, 90.0),
        );
        MapSnapshot::merge([zone, seat_a, seat_sold, stage], [], [], &[], &[])
    }

    #[test]
    fn topmost_smallest_object_wins() {
        let snapshot = snapshot();
        let hit = hit_test(
            Point::new(15.0, 15.0),
            snapshot.objects(),
            &HitFilter::selectable(),
        );
        assert_eq!(hit.unwrap().id.as_str(), "a");
    }

    #[test]
    fn sold_seat_is_geometrically_present_but_filtered() {
        let snapshot = snapshot();
        let point = Point::new(35.0, 15.0);

        // The unfiltered query proves the geometry is hit...
        let any = hit_test(point, snapshot.objects(), &HitFilter::any());
        assert_eq!(any.unwrap().id.as_str(), "sold");

        // ...but eligibility falls through to the zone underneath.
        let eligible = hit_test(point, snapshot.objects(), &HitFilter::selectable());
        assert_eq!(eligible.unwrap().id.as_str(), "zone");
    }

    #[test]
    fn fixtures_never_hit_through_selectable_filter() {
        let snapshot = snapshot();
        // Point inside the stage but outside the zone? The stage sits inside
        // the zone bounds, so the zone catches the fallthrough.
        let hit = hit_test(
            Point::new(50.0, 75.0),
            snapshot.objects(),
            &HitFilter::selectable(),
        );
        assert_eq!(hit.unwrap().id.as_str(), "zone");

        let miss = hit_test(
            Point::new(500.0, 500.0),
            snapshot.objects(),
            &HitFilter::selectable(),
        );
        assert!(miss.is_none());
    }

    #[test]
    fn circle_hit_uses_bounding_box_not_visual_shape() {
        // A circular seat: the visual corner of its box is outside the
        // circle but still hits. Deliberate, load-bearing behavior.
        let seat = MapObject::seat("round", Rect::new(0.0, 0.0, 10.0, 10.0), 1, 1, "z");
        assert_eq!(seat.shape, Shape::Circle);
        let snapshot = MapSnapshot::merge([seat], [], [], &[], &[]);
        let corner = Point::new(0.5, 0.5);
        let hit = hit_test(corner, snapshot.objects(), &HitFilter::selectable());
        assert_eq!(hit.unwrap().id.as_str(), "round");
    }

    #[test]
    fn price_filter_restricts_membership() {
        let mut seat = MapObject::seat("a", Rect::new(0.0, 0.0, 10.0, 10.0), 1, 1, "z");
        seat.price_id = Some("p1".into());
        let unpriced = MapObject::seat("b", Rect::new(20.0, 0.0, 30.0, 10.0), 1, 2, "z");
        let snapshot = MapSnapshot::merge([seat, unpriced], [], [], &[], &[]);

        let mut active: HashSet<ObjectId> = HashSet::new();
        active.insert("p1".into());
        let filter = HitFilter::selectable().with_active_prices(&active);

        let priced_hit = hit_test(Point::new(5.0, 5.0), snapshot.objects(), &filter);
        assert_eq!(priced_hit.unwrap().id.as_str(), "a");

        // No assignment at all never passes an active filter.
        let unpriced_hit = hit_test(Point::new(25.0, 5.0), snapshot.objects(), &filter);
        assert!(unpriced_hit.is_none());
    }

    #[test]
    fn intersect_rect_collects_eligible_objects_only() {
        let snapshot = snapshot();
        let band = Rect::new(5.0, 5.0, 45.0, 25.0);
        let hits = intersect_rect(band, snapshot.objects(), &HitFilter::selectable());
        let ids: Vec<&str> = hits.iter().map(|o| o.id.as_str()).collect();
        // The zone and seat "a" qualify; the sold seat is filtered out.
        assert_eq!(ids, vec!["zone", "a"]);
    }

    #[test]
    fn touching_edges_do_not_intersect() {
        let snapshot = snapshot();
        // Band that exactly abuts seat "a" on its left edge.
        let band = Rect::new(0.0, 10.0, 10.0, 20.0);
        let hits = intersect_rect(band, snapshot.objects(), &HitFilter::selectable());
        assert!(hits.iter().all(|o| o.id.as_str() != "a"));
    }
}
