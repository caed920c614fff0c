// Copyright 2026 the Parterre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parterre Motion: the viewport recovery animation.
//!
//! When a pan gesture ends with the map dragged entirely off-screen, the
//! engine animates the viewport offset back toward the nearest content.
//! This crate owns just that interpolation:
//!
//! - At most **one** animation is in flight; starting a new one replaces
//!   the old (there is no queue).
//! - The host drives progress by calling [`Animator::tick`] from its frame
//!   callback with its own clock; this crate never reads time itself. An
//!   animation anchors its start time on the first tick after
//!   [`Animator::start`], so starting does not require a clock either.
//! - Easing is cubic ease-out (`1 − (1 − t)³`): fast start, gentle landing.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Vec2;
//! use parterre_motion::Animator;
//!
//! let mut animator = Animator::new();
//! animator.start(Vec2::new(1000.0, 0.0), Vec2::ZERO, 500.0);
//!
//! // First tick anchors the clock and returns the starting offset.
//! assert_eq!(animator.tick(10_000.0), Some(Vec2::new(1000.0, 0.0)));
//!
//! // Halfway through the duration the offset is most of the way there
//! // (ease-out front-loads the motion).
//! let offset = animator.tick(10_250.0).unwrap();
//! assert!(offset.x < 200.0);
//!
//! // Past the end the animation lands exactly on the target and finishes.
//! assert_eq!(animator.tick(10_500.0), Some(Vec2::ZERO));
//! assert!(!animator.is_active());
//! ```
//!
//! This crate is `no_std`.

#![no_std]

use kurbo::Vec2;

/// Default recovery animation duration in milliseconds.
pub const DEFAULT_DURATION_MS: f64 = 500.0;

/// Cubic ease-out: `1 − (1 − t)³` for `t` in `[0, 1]`.
#[must_use]
pub fn ease_out_cubic(t: f64) -> f64 {
    let u = 1.0 - t;
    1.0 - u * u * u
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct OffsetAnimation {
    from: Vec2,
    to: Vec2,
    // Anchored by the first tick.
    start_ms: Option<f64>,
    duration_ms: f64,
}

/// Drives at most one offset animation at a time.
///
/// All methods are synchronous; the host's frame callback supplies the
/// clock. A tick at or past the end returns the exact target offset and
/// clears the animation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Animator {
    active: Option<OffsetAnimation>,
}

impl Animator {
    /// Creates an idle animator.
    #[must_use]
    pub const fn new() -> Self {
        Self { active: None }
    }

    /// Returns `true` while an animation is in flight.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Starts an animation from `from` to `to`, replacing any in-flight one.
    ///
    /// The start time is anchored by the first subsequent [`Animator::tick`].
    /// A non-positive `duration_ms` makes that tick land on the target
    /// immediately.
    pub fn start(&mut self, from: Vec2, to: Vec2, duration_ms: f64) {
        self.active = Some(OffsetAnimation {
            from,
            to,
            start_ms: None,
            duration_ms,
        });
    }

    /// Cancels the in-flight animation, if any, leaving the offset wherever
    /// the last tick put it.
    pub fn cancel(&mut self) {
        self.active = None;
    }

    /// Advances the animation to `now_ms`.
    ///
    /// Returns the interpolated offset to apply, or `None` when idle. The
    /// tick that reaches the end returns exactly the target offset and
    /// finishes the animation.
    pub fn tick(&mut self, now_ms: f64) -> Option<Vec2> {
        let anim = self.active.as_mut()?;
        let start_ms = *anim.start_ms.get_or_insert(now_ms);
        let t = if anim.duration_ms > 0.0 {
            ((now_ms - start_ms) / anim.duration_ms).clamp(0.0, 1.0)
        } else {
            1.0
        };
        if t >= 1.0 {
            let to = anim.to;
            self.active = None;
            return Some(to);
        }
        let eased = ease_out_cubic(t);
        Some(anim.from + (anim.to - anim.from) * eased)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ease_out_hits_endpoints_and_front_loads() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        // More than linear progress at the halfway point.
        assert!(ease_out_cubic(0.5) > 0.5);
    }

    #[test]
    fn idle_animator_ticks_to_none() {
        let mut animator = Animator::new();
        assert_eq!(animator.tick(123.0), None);
        assert!(!animator.is_active());
    }

    #[test]
    fn first_tick_anchors_the_clock() {
        let mut animator = Animator::new();
        animator.start(Vec2::new(100.0, -40.0), Vec2::ZERO, 500.0);
        // The absolute clock value is irrelevant; progress starts here.
        assert_eq!(animator.tick(99_000.0), Some(Vec2::new(100.0, -40.0)));
        assert!(animator.is_active());
    }

    #[test]
    fn animation_lands_exactly_on_target_and_finishes() {
        let mut animator = Animator::new();
        animator.start(Vec2::new(100.0, -40.0), Vec2::new(0.0, 10.0), 500.0);
        animator.tick(1000.0);

        let mid = animator.tick(1250.0).unwrap();
        assert!(animator.is_active());
        assert!(mid.x < 100.0 && mid.x > 0.0);

        assert_eq!(animator.tick(1600.0), Some(Vec2::new(0.0, 10.0)));
        assert!(!animator.is_active());
        assert_eq!(animator.tick(1700.0), None);
    }

    #[test]
    fn progress_is_monotonic_toward_target() {
        let mut animator = Animator::new();
        animator.start(Vec2::new(200.0, 0.0), Vec2::ZERO, 500.0);
        let mut last = f64::INFINITY;
        for step in 0..=10 {
            let offset = animator.tick(f64::from(step) * 50.0).unwrap_or(Vec2::ZERO);
            assert!(offset.x <= last);
            last = offset.x;
        }
    }

    #[test]
    fn starting_a_new_animation_replaces_the_old() {
        let mut animator = Animator::new();
        animator.start(Vec2::new(100.0, 0.0), Vec2::ZERO, 500.0);
        animator.tick(0.0);
        animator.tick(100.0);

        animator.start(Vec2::new(-50.0, 0.0), Vec2::new(-10.0, 0.0), 500.0);
        // Progress restarted: the next tick is the new animation's anchor.
        let offset = animator.tick(100.0).unwrap();
        assert_eq!(offset, Vec2::new(-50.0, 0.0));
    }

    #[test]
    fn ticks_before_the_anchor_never_rewind() {
        let mut animator = Animator::new();
        animator.start(Vec2::new(10.0, 10.0), Vec2::ZERO, 500.0);
        animator.tick(1000.0);
        // A clock hiccup going backwards clamps to the beginning.
        assert_eq!(animator.tick(900.0), Some(Vec2::new(10.0, 10.0)));
    }

    #[test]
    fn zero_duration_jumps_to_target() {
        let mut animator = Animator::new();
        animator.start(Vec2::new(5.0, 5.0), Vec2::ZERO, 0.0);
        assert_eq!(animator.tick(0.0), Some(Vec2::ZERO));
        assert!(!animator.is_active());
    }

    #[test]
    fn cancel_stops_mid_flight() {
        let mut animator = Animator::new();
        animator.start(Vec2::new(100.0, 0.0), Vec2::ZERO, 500.0);
        animator.tick(100.0);
        animator.cancel();
        assert_eq!(animator.tick(200.0), None);
    }
}
