// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Base friction of the exponential decay curve.
const EXPONENTIAL_DECAY_FRICTION: f64 = -4.2;

/// Exponential velocity decay used for flings.
///
/// Velocity falls off as `v0 * e^(friction * t)` and the motion ends once its
/// magnitude drops below [`ExponentialDecay::abs_velocity_threshold`]. The
/// position converges to [`ExponentialDecay::target_value`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExponentialDecay {
    /// Scales how quickly velocity decays. Values are floored at `0.0001`.
    pub friction_multiplier: f64,
    /// Speed in units per second below which the motion is considered finished.
    pub abs_velocity_threshold: f64,
}

impl Default for ExponentialDecay {
    fn default() -> Self {
        Self {
            friction_multiplier: 1.0,
            abs_velocity_threshold: 0.1,
        }
    }
}

impl ExponentialDecay {
    /// Creates a decay with the given friction multiplier and the default threshold.
    #[must_use]
    pub fn new(friction_multiplier: f64) -> Self {
        Self {
            friction_multiplier,
            ..Self::default()
        }
    }

    fn friction(&self) -> f64 {
        EXPONENTIAL_DECAY_FRICTION * self.friction_multiplier.max(0.0001)
    }

    /// Time until the velocity falls below the threshold, in nanoseconds.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "The duration is positive and bounded by the ratio of finite speeds."
    )]
    #[must_use]
    pub fn duration_nanos(&self, initial_velocity: f64) -> u64 {
        let speed = initial_velocity.abs();
        if !speed.is_finite() || speed <= self.abs_velocity_threshold {
            return 0;
        }
        let seconds = (self.abs_velocity_threshold / speed).ln() / self.friction();
        (seconds * 1e9) as u64
    }

    /// Position after `play_time_nanos`, starting from `initial_value`.
    #[must_use]
    pub fn value_at(&self, play_time_nanos: u64, initial_value: f64, initial_velocity: f64) -> f64 {
        let friction = self.friction();
        let t = nanos_to_seconds(play_time_nanos);
        initial_value - initial_velocity / friction
            + initial_velocity / friction * (friction * t).exp()
    }

    /// Velocity after `play_time_nanos`.
    #[must_use]
    pub fn velocity_at(&self, play_time_nanos: u64, initial_velocity: f64) -> f64 {
        initial_velocity * (self.friction() * nanos_to_seconds(play_time_nanos)).exp()
    }

    /// Resting position of an unbounded decay.
    #[must_use]
    pub fn target_value(&self, initial_value: f64, initial_velocity: f64) -> f64 {
        initial_value - initial_velocity / self.friction()
    }
}

#[allow(
    clippy::cast_precision_loss,
    reason = "Animation times are far below 2^52 nanoseconds."
)]
fn nanos_to_seconds(nanos: u64) -> f64 {
    nanos as f64 / 1e9
}
