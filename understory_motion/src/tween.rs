// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::Easing;

/// Default tween duration in milliseconds.
pub const DEFAULT_DURATION_MILLIS: u32 = 300;

/// Duration-based eased transition between two values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TweenSpec {
    /// Length of the transition, excluding [`TweenSpec::delay_millis`].
    pub duration_millis: u32,
    /// Time to hold the start value before the transition begins.
    pub delay_millis: u32,
    /// Curve applied to the linear progress.
    pub easing: Easing,
}

impl Default for TweenSpec {
    fn default() -> Self {
        Self {
            duration_millis: DEFAULT_DURATION_MILLIS,
            delay_millis: 0,
            easing: Easing::FastOutSlowIn,
        }
    }
}

impl TweenSpec {
    /// Creates a tween with the given duration and easing and no delay.
    #[must_use]
    pub const fn new(duration_millis: u32, easing: Easing) -> Self {
        Self {
            duration_millis,
            delay_millis: 0,
            easing,
        }
    }

    /// Returns the same tween with a start delay.
    #[must_use]
    pub const fn with_delay(mut self, delay_millis: u32) -> Self {
        self.delay_millis = delay_millis;
        self
    }

    /// Total running time including the delay, in nanoseconds.
    #[must_use]
    pub fn total_nanos(&self) -> u64 {
        (u64::from(self.duration_millis) + u64::from(self.delay_millis)) * 1_000_000
    }

    /// Eased progress in `[0, 1]` after `play_time_nanos` have elapsed.
    #[must_use]
    pub fn progress(&self, play_time_nanos: u64) -> f64 {
        let delay = u64::from(self.delay_millis) * 1_000_000;
        let elapsed = play_time_nanos.saturating_sub(delay);
        if self.duration_millis == 0 {
            return if play_time_nanos >= delay { 1.0 } else { 0.0 };
        }
        let duration = u64::from(self.duration_millis) * 1_000_000;
        #[allow(
            clippy::cast_precision_loss,
            reason = "Animation times are far below 2^52 nanoseconds."
        )]
        let fraction = elapsed as f64 / duration as f64;
        self.easing.transform(fraction)
    }

    /// Interpolated value between `from` and `to` after `play_time_nanos`.
    #[must_use]
    pub fn value_at(&self, play_time_nanos: u64, from: f64, to: f64) -> f64 {
        let progress = self.progress(play_time_nanos);
        if progress >= 1.0 {
            to
        } else {
            from + (to - from) * progress
        }
    }
}
