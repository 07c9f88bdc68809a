// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer gesture adapter feeding a [`PlaneState`].

use kurbo::{Point, Vec2};
use log::trace;
use understory_motion::VelocityTracker;

use crate::PlaneState;

/// Turns pointer events into scroll state transitions.
///
/// - A press stops any running motion, so touching a flinging plane catches it.
/// - Each drag sample feeds the velocity tracker and drags the content.
/// - Releasing flings with the tracked velocity.
/// - Cancelling ends the drag without a fling.
///
/// Gesture recognition (slop, multi-touch) is the host's job; this only
/// consumes its results.
#[derive(Debug, Clone, Default)]
pub struct PlaneGestures {
    tracker: VelocityTracker,
    max_fling_velocity: Option<f64>,
}

impl PlaneGestures {
    /// Creates an adapter with uncapped fling velocity.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Caps each fling velocity component to `±max`.
    #[must_use]
    pub fn with_max_fling_velocity(mut self, max: f64) -> Self {
        self.max_fling_velocity = Some(max);
        self
    }

    /// Pointer went down at `position`.
    pub fn press(&mut self, state: &mut PlaneState, position: Point, time_millis: i64) {
        state.stop_animation();
        self.tracker.reset();
        self.tracker.add_position(time_millis, position);
    }

    /// Pointer moved to `position`, `delta` since the previous sample.
    pub fn drag(&mut self, state: &mut PlaneState, position: Point, delta: Vec2, time_millis: i64) {
        self.tracker.add_position(time_millis, position);
        state.drag_by(delta);
    }

    /// Pointer went up; flings with the tracked release velocity.
    pub fn release(&mut self, state: &mut PlaneState) {
        let velocity = match self.max_fling_velocity {
            Some(max) => self.tracker.velocity_with_max(max),
            None => self.tracker.velocity(),
        };
        trace!("release velocity {velocity:?}");
        self.tracker.reset();
        state.end_drag(velocity);
    }

    /// Gesture was cancelled; no fling.
    pub fn cancel(&mut self, state: &mut PlaneState) {
        self.tracker.reset();
        state.cancel_drag();
    }
}
