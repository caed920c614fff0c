// Copyright 2026 the Parterre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deterministic price-to-color mapping.
//!
//! Prices are bucketed into 100-unit bands and each band indexes a large
//! fixed palette, so adjacent price levels get visually distinct (and,
//! past 150 bands, repeating) colors. The mapping is a pure function of
//! the price value: the same price renders the same color across calls,
//! frames, and sessions.

use peniko::Color;

/// Fixed display palette for price bands.
///
/// Entries follow a golden-angle hue walk through three
/// saturation/lightness tiers, keeping neighboring bands apart visually.
pub const PALETTE: [Color; 150] = [
    Color::from_rgba8(208, 57, 57, 255),
    Color::from_rgba8(119, 207, 145, 255),
    Color::from_rgba8(120, 30, 184, 255),
    Color::from_rgba8(208, 190, 57, 255),
    Color::from_rgba8(119, 193, 207, 255),
    Color::from_rgba8(184, 30, 113, 255),
    Color::from_rgba8(95, 208, 57, 255),
    Color::from_rgba8(123, 119, 207, 255),
    Color::from_rgba8(184, 82, 30, 255),
    Color::from_rgba8(57, 208, 152, 255),
    Color::from_rgba8(200, 119, 207, 255),
    Color::from_rgba8(152, 184, 30, 255),
    Color::from_rgba8(57, 132, 208, 255),
    Color::from_rgba8(207, 119, 137, 255),
    Color::from_rgba8(30, 184, 43, 255),
    Color::from_rgba8(114, 57, 208, 255),
    Color::from_rgba8(207, 178, 119, 255),
    Color::from_rgba8(30, 184, 178, 255),
    Color::from_rgba8(208, 57, 170, 255),
    Color::from_rgba8(159, 207, 119, 255),
    Color::from_rgba8(30, 55, 184, 255),
    Color::from_rgba8(208, 76, 57, 255),
    Color::from_rgba8(119, 207, 156, 255),
    Color::from_rgba8(140, 30, 184, 255),
    Color::from_rgba8(208, 208, 57, 255),
    Color::from_rgba8(119, 181, 207, 255),
    Color::from_rgba8(184, 30, 94, 255),
    Color::from_rgba8(75, 208, 57, 255),
    Color::from_rgba8(134, 119, 207, 255),
    Color::from_rgba8(184, 101, 30, 255),
    Color::from_rgba8(57, 208, 171, 255),
    Color::from_rgba8(207, 119, 203, 255),
    Color::from_rgba8(132, 184, 30, 255),
    Color::from_rgba8(57, 113, 208, 255),
    Color::from_rgba8(207, 119, 126, 255),
    Color::from_rgba8(30, 184, 63, 255),
    Color::from_rgba8(133, 57, 208, 255),
    Color::from_rgba8(207, 189, 119, 255),
    Color::from_rgba8(30, 171, 184, 255),
    Color::from_rgba8(208, 57, 151, 255),
    Color::from_rgba8(148, 207, 119, 255),
    Color::from_rgba8(30, 36, 184, 255),
    Color::from_rgba8(208, 95, 57, 255),
    Color::from_rgba8(119, 207, 167, 255),
    Color::from_rgba8(159, 30, 184, 255),
    Color::from_rgba8(189, 208, 57, 255),
    Color::from_rgba8(119, 170, 207, 255),
    Color::from_rgba8(184, 30, 74, 255),
    Color::from_rgba8(57, 208, 58, 255),
    Color::from_rgba8(145, 119, 207, 255),
    Color::from_rgba8(184, 121, 30, 255),
    Color::from_rgba8(57, 208, 191, 255),
    Color::from_rgba8(207, 119, 192, 255),
    Color::from_rgba8(112, 184, 30, 255),
    Color::from_rgba8(57, 94, 208, 255),
    Color::from_rgba8(207, 123, 119, 255),
    Color::from_rgba8(30, 184, 83, 255),
    Color::from_rgba8(153, 57, 208, 255),
    Color::from_rgba8(207, 201, 119, 255),
    Color::from_rgba8(30, 151, 184, 255),
    Color::from_rgba8(208, 57, 131, 255),
    Color::from_rgba8(137, 207, 119, 255),
    Color::from_rgba8(44, 30, 184, 255),
    Color::from_rgba8(208, 115, 57, 255),
    Color::from_rgba8(119, 207, 179, 255),
    Color::from_rgba8(179, 30, 184, 255),
    Color::from_rgba8(169, 208, 57, 255),
    Color::from_rgba8(119, 159, 207, 255),
    Color::from_rgba8(184, 30, 54, 255),
    Color::from_rgba8(57, 208, 77, 255),
    Color::from_rgba8(157, 119, 207, 255),
    Color::from_rgba8(184, 141, 30, 255),
    Color::from_rgba8(57, 207, 208, 255),
    Color::from_rgba8(207, 119, 181, 255),
    Color::from_rgba8(93, 184, 30, 255),
    Color::from_rgba8(57, 74, 208, 255),
    Color::from_rgba8(207, 135, 119, 255),
    Color::from_rgba8(30, 184, 102, 255),
    Color::from_rgba8(172, 57, 208, 255),
    Color::from_rgba8(203, 207, 119, 255),
    Color::from_rgba8(30, 131, 184, 255),
    Color::from_rgba8(208, 57, 112, 255),
    Color::from_rgba8(126, 207, 119, 255),
    Color::from_rgba8(64, 30, 184, 255),
    Color::from_rgba8(208, 134, 57, 255),
    Color::from_rgba8(119, 207, 190, 255),
    Color::from_rgba8(184, 30, 170, 255),
    Color::from_rgba8(150, 208, 57, 255),
    Color::from_rgba8(119, 148, 207, 255),
    Color::from_rgba8(184, 30, 35, 255),
    Color::from_rgba8(57, 208, 96, 255),
    Color::from_rgba8(168, 119, 207, 255),
    Color::from_rgba8(184, 160, 30, 255),
    Color::from_rgba8(57, 188, 208, 255),
    Color::from_rgba8(207, 119, 169, 255),
    Color::from_rgba8(73, 184, 30, 255),
    Color::from_rgba8(59, 57, 208, 255),
    Color::from_rgba8(207, 146, 119, 255),
    Color::from_rgba8(30, 184, 122, 255),
    Color::from_rgba8(191, 57, 208, 255),
    Color::from_rgba8(191, 207, 119, 255),
    Color::from_rgba8(30, 112, 184, 255),
    Color::from_rgba8(208, 57, 93, 255),
    Color::from_rgba8(119, 207, 124, 255),
    Color::from_rgba8(83, 30, 184, 255),
    Color::from_rgba8(208, 154, 57, 255),
    Color::from_rgba8(119, 207, 201, 255),
    Color::from_rgba8(184, 30, 150, 255),
    Color::from_rgba8(130, 208, 57, 255),
    Color::from_rgba8(119, 136, 207, 255),
    Color::from_rgba8(184, 45, 30, 255),
    Color::from_rgba8(57, 208, 116, 255),
    Color::from_rgba8(179, 119, 207, 255),
    Color::from_rgba8(184, 180, 30, 255),
    Color::from_rgba8(57, 168, 208, 255),
    Color::from_rgba8(207, 119, 158, 255),
    Color::from_rgba8(53, 184, 30, 255),
    Color::from_rgba8(78, 57, 208, 255),
    Color::from_rgba8(207, 157, 119, 255),
    Color::from_rgba8(30, 184, 142, 255),
    Color::from_rgba8(208, 57, 206, 255),
    Color::from_rgba8(180, 207, 119, 255),
    Color::from_rgba8(30, 92, 184, 255),
    Color::from_rgba8(208, 57, 73, 255),
    Color::from_rgba8(119, 207, 135, 255),
    Color::from_rgba8(103, 30, 184, 255),
    Color::from_rgba8(208, 173, 57, 255),
    Color::from_rgba8(119, 202, 207, 255),
    Color::from_rgba8(184, 30, 130, 255),
    Color::from_rgba8(111, 208, 57, 255),
    Color::from_rgba8(119, 125, 207, 255),
    Color::from_rgba8(184, 65, 30, 255),
    Color::from_rgba8(57, 208, 135, 255),
    Color::from_rgba8(190, 119, 207, 255),
    Color::from_rgba8(169, 184, 30, 255),
    Color::from_rgba8(57, 149, 208, 255),
    Color::from_rgba8(207, 119, 147, 255),
    Color::from_rgba8(34, 184, 30, 255),
    Color::from_rgba8(97, 57, 208, 255),
    Color::from_rgba8(207, 168, 119, 255),
    Color::from_rgba8(30, 184, 161, 255),
    Color::from_rgba8(208, 57, 187, 255),
    Color::from_rgba8(169, 207, 119, 255),
    Color::from_rgba8(30, 72, 184, 255),
    Color::from_rgba8(208, 60, 57, 255),
    Color::from_rgba8(119, 207, 146, 255),
    Color::from_rgba8(123, 30, 184, 255),
    Color::from_rgba8(208, 192, 57, 255),
    Color::from_rgba8(119, 191, 207, 255),
    Color::from_rgba8(184, 30, 111, 255),];

/// Maps a price to its band color.
///
/// Band `n` covers prices `[100·n, 100·(n+1))`; bands wrap around the
/// palette. Returns `None` for negative or non-finite prices; callers
/// fall back to the theme's neutral gray.
#[must_use]
pub fn color_for_price(price: f64) -> Option<Color> {
    if !price.is_finite() || price < 0.0 {
        return None;
    }
    // Truncation toward zero is floor for non-negative values; the cast
    // saturates for absurdly large prices, which still lands in a band.
    let band = (price / 100.0) as u64;
    Some(PALETTE[(band % PALETTE.len() as u64) as usize])
}
