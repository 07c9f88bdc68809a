// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_motion --heading-base-level=0

//! Understory Motion: frame-driven scalar animation for scroll offsets.
//!
//! This crate provides the small motion primitive that scroll containers build on:
//!
//! - [`Animatable`]: a bounded `f64` that can snap, run an eased tween
//!   ([`TweenSpec`] with an [`Easing`] curve), or decelerate from a release
//!   velocity ([`ExponentialDecay`]). Bounds can change at any time; the value is
//!   re-clamped immediately and running motions stop at whichever bound they hit.
//! - [`VelocityTracker`] / [`VelocityTracker1D`]: impulse-based release velocity
//!   estimation from timestamped pointer positions.
//!
//! There is no clock or executor in here. Hosts call [`Animatable::advance`] with
//! the frame timestamp on every animation frame, and the first frame after a
//! motion starts fixes its start time.
//!
//! ## Example
//!
//! ```rust
//! use understory_motion::{Animatable, Easing, TweenSpec};
//!
//! let mut offset = Animatable::new(0.0);
//! offset.update_bounds(Some(0.0), Some(400.0));
//! offset.animate_to(1000.0, TweenSpec::new(200, Easing::Linear));
//!
//! let mut now = 0;
//! while offset.advance(now) {
//!     now += 16_000_000;
//! }
//! // The tween stops where it meets the upper bound.
//! assert_eq!(offset.value(), 400.0);
//! ```
//!
//! This crate uses `std` for its floating point math.

mod animatable;
mod decay;
mod easing;
mod tween;
mod velocity;

pub use animatable::{Animatable, Motion};
pub use decay::ExponentialDecay;
pub use easing::Easing;
pub use tween::{DEFAULT_DURATION_MILLIS, TweenSpec};
pub use velocity::{ASSUME_STOPPED_MILLIS, VelocityTracker, VelocityTracker1D};
