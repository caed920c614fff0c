// Copyright 2026 the Parterre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parterre Tooltip: human-readable content for a hovered object.
//!
//! Resolves the three tooltip lines the host renders next to the pointer:
//!
//! 1. **Zone**: the zone's display name, falling back to the raw zone id
//!    string, or `"Unknown zone"` when the object references no zone.
//! 2. **Place**: `"Row R, seat N"` for ordinary seats, or
//!    `"<available> seats"` for special zones (live availability via
//!    `parterre_capacity`).
//! 3. **Price**: the amount with thousands grouping and the currency code
//!    (`"1 250 KZT"`), or the explicit `"no price assigned"` string.
//!
//! Missing lookups never fail; every branch lands on a fallback string.
//! Status/price precedence between the live session source and static
//! configuration is not this crate's concern: the merge step in
//! `parterre_model` already resolved it, and the resolver reads only the
//! canonical object.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Rect;
//! use parterre_model::{MapObject, MapSnapshot, Zone};
//! use parterre_tooltip::resolve;
//!
//! let seat = MapObject::seat("s1", Rect::new(0.0, 0.0, 10.0, 10.0), 3, 12, "z1");
//! let snapshot = MapSnapshot::merge([seat], [Zone::new("z1", "Stalls")], [], &[], &[]);
//!
//! let tooltip = resolve(snapshot.get(&"s1".into()).unwrap(), &snapshot);
//! assert_eq!(tooltip.zone, "Stalls");
//! assert_eq!(tooltip.place, "Row 3, seat 12");
//! assert_eq!(tooltip.price, "no price assigned");
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::format;
use alloc::string::String;
use core::fmt;

use parterre_capacity::available_count;
use parterre_model::{MapObject, MapSnapshot, ObjectKind};

/// Fallback zone line when the object references no zone at all.
pub const UNKNOWN_ZONE: &str = "Unknown zone";

/// Fallback price line when no price is assigned.
pub const NO_PRICE: &str = "no price assigned";

/// Resolved tooltip content.
///
/// The `Display` impl joins the non-empty lines with newlines, which is
/// what most hosts feed straight into their tooltip surface.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TooltipText {
    /// Zone display name (or fallback).
    pub zone: String,
    /// Row/seat or availability line; empty for non-seat kinds.
    pub place: String,
    /// Formatted price (or fallback).
    pub price: String,
}

impl fmt::Display for TooltipText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.zone)?;
        if !self.place.is_empty() {
            write!(f, "\n{}", self.place)?;
        }
        write!(f, "\n{}", self.price)
    }
}

/// Derives tooltip content for a canonical object.
#[must_use]
pub fn resolve(object: &MapObject, snapshot: &MapSnapshot) -> TooltipText {
    let zone = match &object.zone_id {
        Some(zone_id) => match snapshot.zone(zone_id) {
            Some(zone) => zone.name.clone(),
            None => zone_id.as_str().into(),
        },
        None => UNKNOWN_ZONE.into(),
    };

    let place = match object.kind {
        ObjectKind::Seat => match (object.row, object.seat_number) {
            (Some(row), Some(seat)) => format!("Row {row}, seat {seat}"),
            _ => String::new(),
        },
        ObjectKind::SpecialZone => {
            let capacity = object.capacity.unwrap_or(1);
            let available = available_count(&object.id, capacity, |id| snapshot.status_of(id));
            format!("{available} seats")
        }
        ObjectKind::Scene | ObjectKind::Decoration | ObjectKind::Passage => String::new(),
    };

    let price = match object.price {
        Some(value) => {
            let currency = object
                .price_id
                .as_ref()
                .and_then(|id| snapshot.price(id))
                .map(|price| price.currency.as_str());
            match currency {
                Some(code) => format!("{} {code}", format_amount(value)),
                None => format_amount(value),
            }
        }
        None => NO_PRICE.into(),
    };

    TooltipText { zone, place, price }
}

/// Formats an amount with space-grouped thousands and at most two decimal
/// places (`1250.0` → `"1 250"`, `1250.5` → `"1 250.50"`).
#[must_use]
pub fn format_amount(value: f64) -> String {
    let negative = value < 0.0;
    let magnitude = if negative { -value } else { value };
    // Scale to minor units in integer arithmetic; float fract() would need
    // an std/libm intrinsic.
    let scaled = (magnitude * 100.0 + 0.5) as u64;
    let whole = scaled / 100;
    let minor = scaled % 100;

    let digits = format!("{whole}");
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 4);
    let offset = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - offset) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&grouped);
    if minor != 0 {
        out.push_str(&format!(".{minor:02}"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use kurbo::Rect;
    use parterre_model::{
        MapObject, Price, PriceAssignment, SeatStatus, SessionOverride, Zone,
    };

    fn price(id: &str, value: f64, currency: &str) -> Price {
        Price {
            id: id.into(),
            value,
            currency: currency.into(),
            color: None,
            name: id.into(),
        }
    }

    #[test]
    fn zone_line_prefers_display_name_then_raw_id() {
        let named = MapObject::seat("a", Rect::new(0.0, 0.0, 10.0, 10.0), 1, 1, "z1");
        let unnamed = MapObject::seat("b", Rect::new(20.0, 0.0, 30.0, 10.0), 1, 2, "z-ghost");
        let snapshot = MapSnapshot::merge(
            [named, unnamed],
            [Zone::new("z1", "Balcony")],
            [],
            &[],
            &[],
        );

        assert_eq!(resolve(snapshot.get(&"a".into()).unwrap(), &snapshot).zone, "Balcony");
        assert_eq!(resolve(snapshot.get(&"b".into()).unwrap(), &snapshot).zone, "z-ghost");
    }

    #[test]
    fn missing_zone_reference_says_unknown() {
        let mut seat = MapObject::seat("a", Rect::new(0.0, 0.0, 10.0, 10.0), 1, 1, "z1");
        seat.zone_id = None;
        let snapshot = MapSnapshot::merge([seat], [], [], &[], &[]);
        let tooltip = resolve(snapshot.get(&"a".into()).unwrap(), &snapshot);
        assert_eq!(tooltip.zone, UNKNOWN_ZONE);
    }

    #[test]
    fn special_zone_place_reports_live_availability() {
        let zone = MapObject::special_zone("sz", Rect::new(0.0, 0.0, 50.0, 50.0), 5, "z1");
        let snapshot = MapSnapshot::merge(
            [zone],
            [Zone::new("z1", "Standing")],
            [],
            &[],
            &[
                SessionOverride {
                    seat_id: "sz_seat_1".into(),
                    status: Some(SeatStatus::Sold),
                    price: None,
                },
                SessionOverride {
                    seat_id: "sz_seat_3".into(),
                    status: Some(SeatStatus::Sold),
                    price: None,
                },
            ],
        );
        let tooltip = resolve(snapshot.get(&"sz".into()).unwrap(), &snapshot);
        assert_eq!(tooltip.place, "3 seats");
    }

    #[test]
    fn price_line_includes_currency_code() {
        let seat = MapObject::seat("a", Rect::new(0.0, 0.0, 10.0, 10.0), 1, 1, "z1");
        let snapshot = MapSnapshot::merge(
            [seat],
            [],
            [price("p1", 1250.0, "KZT")],
            &[PriceAssignment {
                seat_id: "a".into(),
                price_id: "p1".into(),
            }],
            &[],
        );
        let tooltip = resolve(snapshot.get(&"a".into()).unwrap(), &snapshot);
        assert_eq!(tooltip.price, "1 250 KZT");
    }

    #[test]
    fn override_price_without_assignment_has_no_currency() {
        let seat = MapObject::seat("a", Rect::new(0.0, 0.0, 10.0, 10.0), 1, 1, "z1");
        let snapshot = MapSnapshot::merge(
            [seat],
            [],
            [],
            &[],
            &[SessionOverride {
                seat_id: "a".into(),
                status: None,
                price: Some(900.0),
            }],
        );
        let tooltip = resolve(snapshot.get(&"a".into()).unwrap(), &snapshot);
        assert_eq!(tooltip.price, "900");
    }

    #[test]
    fn no_price_is_explicit() {
        let seat = MapObject::seat("a", Rect::new(0.0, 0.0, 10.0, 10.0), 1, 1, "z1");
        let snapshot = MapSnapshot::merge([seat], [], [], &[], &[]);
        let tooltip = resolve(snapshot.get(&"a".into()).unwrap(), &snapshot);
        assert_eq!(tooltip.price, NO_PRICE);
    }

    #[test]
    fn amount_grouping() {
        assert_eq!(format_amount(0.0), "0");
        assert_eq!(format_amount(999.0), "999");
        assert_eq!(format_amount(1250.0), "1 250");
        assert_eq!(format_amount(12_500.0), "12 500");
        assert_eq!(format_amount(1_234_567.0), "1 234 567");
        assert_eq!(format_amount(1250.5), "1 250.50");
        assert_eq!(format_amount(-1250.0), "-1 250");
    }

    #[test]
    fn display_joins_lines() {
        let tooltip = TooltipText {
            zone: "Stalls".into(),
            place: "Row 3, seat 12".into(),
            price: "1 250 KZT".into(),
        };
        assert_eq!(tooltip.to_string(), "Stalls\nRow 3, seat 12\n1 250 KZT");
    }
}
