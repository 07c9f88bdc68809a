// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Release velocity estimation for pointer drags.

use kurbo::{Point, Vec2};

const HISTORY_SIZE: usize = 20;

/// Samples older than this, relative to the newest one, are ignored.
const HORIZON_MILLIS: i64 = 100;

/// A gap between samples longer than this means the pointer had stopped.
pub const ASSUME_STOPPED_MILLIS: i64 = 40;

#[derive(Debug, Clone, Copy)]
struct Sample {
    time_millis: i64,
    position: f64,
}

/// Impulse-based velocity estimate along one axis.
///
/// Positions are absolute. The estimate treats each pair of consecutive
/// samples as a push that adds kinetic energy, which is robust to uneven
/// sampling rates.
#[derive(Debug, Clone)]
pub struct VelocityTracker1D {
    samples: [Option<Sample>; HISTORY_SIZE],
    newest: usize,
}

impl Default for VelocityTracker1D {
    fn default() -> Self {
        Self::new()
    }
}

impl VelocityTracker1D {
    /// Creates an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self {
            samples: [None; HISTORY_SIZE],
            newest: 0,
        }
    }

    /// Records `position` at `time_millis`.
    pub fn add_position(&mut self, time_millis: i64, position: f64) {
        self.newest = (self.newest + 1) % HISTORY_SIZE;
        self.samples[self.newest] = Some(Sample {
            time_millis,
            position,
        });
    }

    /// Estimated velocity in units per second, or zero without enough recent samples.
    #[must_use]
    pub fn velocity(&self) -> f64 {
        let Some(newest) = self.samples[self.newest] else {
            return 0.0;
        };

        // Walk backwards from the newest sample; collected oldest-last.
        let mut positions = [0.0; HISTORY_SIZE];
        let mut times = [0.0; HISTORY_SIZE];
        let mut count = 0;
        let mut cursor = self.newest;
        let mut previous_time = newest.time_millis;
        while let Some(sample) = self.samples[cursor] {
            let age = newest.time_millis - sample.time_millis;
            let gap = (previous_time - sample.time_millis).abs();
            if age > HORIZON_MILLIS || gap > ASSUME_STOPPED_MILLIS {
                break;
            }
            previous_time = sample.time_millis;
            positions[count] = sample.position;
            times[count] = -(age as f64);
            count += 1;
            if count == HISTORY_SIZE {
                break;
            }
            cursor = (cursor + HISTORY_SIZE - 1) % HISTORY_SIZE;
        }

        if count < 2 {
            return 0.0;
        }
        impulse_velocity(&positions[..count], &times[..count]) * 1000.0
    }

    /// [`VelocityTracker1D::velocity`] limited to `±max_velocity`.
    #[must_use]
    pub fn velocity_with_max(&self, max_velocity: f64) -> f64 {
        if !max_velocity.is_finite() || max_velocity <= 0.0 {
            return 0.0;
        }
        let velocity = self.velocity();
        if velocity.is_nan() {
            return 0.0;
        }
        velocity.clamp(-max_velocity, max_velocity)
    }

    /// Forgets all samples.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

/// Units per millisecond from samples ordered newest first.
fn impulse_velocity(positions: &[f64], times: &[f64]) -> f64 {
    let oldest = positions.len() - 1;
    let mut work = 0.0;
    for i in (1..=oldest).rev() {
        let dt = times[i - 1] - times[i];
        if dt == 0.0 {
            continue;
        }
        let v_curr = (positions[i - 1] - positions[i]) / dt;
        let v_prev = energy_to_velocity(work);
        work += (v_curr - v_prev) * v_curr.abs();
        if i == oldest {
            work *= 0.5;
        }
    }
    energy_to_velocity(work)
}

fn energy_to_velocity(energy: f64) -> f64 {
    energy.signum() * (2.0 * energy.abs()).sqrt()
}

/// Two-axis pointer velocity tracker.
#[derive(Debug, Clone, Default)]
pub struct VelocityTracker {
    x: VelocityTracker1D,
    y: VelocityTracker1D,
}

impl VelocityTracker {
    /// Creates an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a pointer position at `time_millis`.
    pub fn add_position(&mut self, time_millis: i64, position: Point) {
        self.x.add_position(time_millis, position.x);
        self.y.add_position(time_millis, position.y);
    }

    /// Estimated velocity in units per second.
    #[must_use]
    pub fn velocity(&self) -> Vec2 {
        Vec2::new(self.x.velocity(), self.y.velocity())
    }

    /// Estimated velocity with each component limited to `±max_velocity`.
    #[must_use]
    pub fn velocity_with_max(&self, max_velocity: f64) -> Vec2 {
        Vec2::new(
            self.x.velocity_with_max(max_velocity),
            self.y.velocity_with_max(max_velocity),
        )
    }

    /// Forgets all samples.
    pub fn reset(&mut self) {
        self.x.reset();
        self.y.reset();
    }
}
