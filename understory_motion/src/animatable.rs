// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A bounded scalar that moves by snapping, tweening, or decaying.

use log::{debug, trace};

use crate::{ExponentialDecay, TweenSpec};

/// What an [`Animatable`] is doing right now.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Motion {
    /// At rest.
    Idle,
    /// Running an eased transition towards `target` (before clamping).
    Tween {
        /// Requested end value.
        target: f64,
    },
    /// Decelerating from a release velocity.
    Decay {
        /// Velocity at the start of the decay, in units per second.
        initial_velocity: f64,
    },
}

#[derive(Debug, Clone, Copy)]
struct TweenRun {
    from: f64,
    target: f64,
    spec: TweenSpec,
    started: Option<u64>,
    last_frame: Option<u64>,
}

#[derive(Debug, Clone, Copy)]
struct DecayRun {
    from: f64,
    initial_velocity: f64,
    decay: ExponentialDecay,
    duration: u64,
    started: Option<u64>,
}

#[derive(Debug, Clone, Copy)]
enum Running {
    Idle,
    Tween(TweenRun),
    Decay(DecayRun),
}

/// A scalar value with optional bounds and at most one running motion.
///
/// Motions are driven by [`Animatable::advance`] with monotonically increasing
/// frame timestamps. The first frame after a motion starts fixes its start time,
/// so a motion begun between frames starts cleanly on the next one.
///
/// The value is always clamped into `[lower_bound, upper_bound]`, including
/// while a motion is running. A motion that gets clamped stops at the bound.
///
/// Starting any motion, snapping, or stopping replaces the previous motion.
#[derive(Debug, Clone)]
pub struct Animatable {
    value: f64,
    velocity: f64,
    lower_bound: Option<f64>,
    upper_bound: Option<f64>,
    running: Running,
}

impl Animatable {
    /// Creates an idle, unbounded value.
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self {
            value,
            velocity: 0.0,
            lower_bound: None,
            upper_bound: None,
            running: Running::Idle,
        }
    }

    /// Current value.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Current velocity in units per second. Zero while idle.
    #[must_use]
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Lower bound, if any.
    #[must_use]
    pub fn lower_bound(&self) -> Option<f64> {
        self.lower_bound
    }

    /// Upper bound, if any.
    #[must_use]
    pub fn upper_bound(&self) -> Option<f64> {
        self.upper_bound
    }

    /// Replaces the bounds and re-clamps the current value.
    ///
    /// A running motion keeps its target; its reachable end point is clamped
    /// by the new bounds on subsequent frames. A tween whose start or current
    /// value falls outside the new bounds restarts from the clamped value on
    /// the next frame. An upper bound below the lower bound is raised to the
    /// lower bound.
    pub fn update_bounds(&mut self, lower: Option<f64>, upper: Option<f64>) {
        let upper = match (lower, upper) {
            (Some(lo), Some(hi)) if hi < lo => Some(lo),
            _ => upper,
        };
        if self.lower_bound != lower || self.upper_bound != upper {
            debug!("bounds changed to {lower:?}..={upper:?}");
        }
        self.lower_bound = lower;
        self.upper_bound = upper;
        let clamped = self.clamp(self.value);
        if let Running::Tween(run) = &mut self.running {
            let start = clamp_to(run.from, lower, upper);
            if clamped != self.value || start != run.from {
                trace!("tween towards {} restarts from {clamped}", run.target);
                run.from = clamped;
                run.started = None;
                run.last_frame = None;
            }
        }
        self.value = clamped;
    }

    /// Clamps `value` into the current bounds.
    #[must_use]
    pub fn clamp(&self, value: f64) -> f64 {
        clamp_to(value, self.lower_bound, self.upper_bound)
    }

    /// Jumps to `target` (clamped) and cancels any running motion.
    pub fn snap_to(&mut self, target: f64) {
        self.running = Running::Idle;
        self.velocity = 0.0;
        self.value = self.clamp(target);
    }

    /// Starts an eased transition from the current value to `target`.
    pub fn animate_to(&mut self, target: f64, spec: TweenSpec) {
        debug!("tween {} -> {target} over {}ms", self.value, spec.duration_millis);
        self.running = Running::Tween(TweenRun {
            from: self.value,
            target,
            spec,
            started: None,
            last_frame: None,
        });
    }

    /// Starts a decay from the current value with `initial_velocity` in units per second.
    ///
    /// A velocity too small to move anything leaves the value idle.
    pub fn animate_decay(&mut self, initial_velocity: f64, decay: ExponentialDecay) {
        let duration = decay.duration_nanos(initial_velocity);
        if duration == 0 {
            self.stop();
            return;
        }
        debug!("decay from {} at {initial_velocity}/s", self.value);
        self.velocity = initial_velocity;
        self.running = Running::Decay(DecayRun {
            from: self.value,
            initial_velocity,
            decay,
            duration,
            started: None,
        });
    }

    /// Cancels any running motion, leaving the value where it is.
    pub fn stop(&mut self) {
        if self.is_running() {
            debug!("motion stopped at {}", self.value);
        }
        self.running = Running::Idle;
        self.velocity = 0.0;
    }

    /// Returns `true` while a tween or decay is running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        !matches!(self.running, Running::Idle)
    }

    /// The current motion.
    #[must_use]
    pub fn motion(&self) -> Motion {
        match self.running {
            Running::Idle => Motion::Idle,
            Running::Tween(run) => Motion::Tween { target: run.target },
            Running::Decay(run) => Motion::Decay {
                initial_velocity: run.initial_velocity,
            },
        }
    }

    /// Where the current motion will come to rest, clamped into the bounds.
    #[must_use]
    pub fn target_value(&self) -> f64 {
        match self.running {
            Running::Idle => self.value,
            Running::Tween(run) => self.clamp(run.target),
            Running::Decay(run) => {
                self.clamp(run.decay.target_value(run.from, run.initial_velocity))
            }
        }
    }

    /// Steps the running motion to `frame_time_nanos`.
    ///
    /// Returns `true` if the motion is still running afterwards.
    pub fn advance(&mut self, frame_time_nanos: u64) -> bool {
        match self.running {
            Running::Idle => false,
            Running::Tween(run) => self.advance_tween(run, frame_time_nanos),
            Running::Decay(run) => self.advance_decay(run, frame_time_nanos),
        }
    }

    fn advance_tween(&mut self, mut run: TweenRun, frame_time_nanos: u64) -> bool {
        let start = *run.started.get_or_insert(frame_time_nanos);
        let play_time = frame_time_nanos.saturating_sub(start);
        let raw = run.spec.value_at(play_time, run.from, run.target);
        let clamped = self.clamp(raw);

        if let Some(last) = run.last_frame {
            let dt = frame_time_nanos.saturating_sub(last);
            if dt > 0 {
                self.velocity = (clamped - self.value) / nanos_to_seconds(dt);
            }
        }
        run.last_frame = Some(frame_time_nanos);
        self.value = clamped;
        trace!("tween frame t={play_time}ns value={clamped}");

        if play_time >= run.spec.total_nanos() || clamped != raw {
            self.finish();
            return false;
        }
        self.running = Running::Tween(run);
        true
    }

    fn advance_decay(&mut self, mut run: DecayRun, frame_time_nanos: u64) -> bool {
        let start = *run.started.get_or_insert(frame_time_nanos);
        let play_time = frame_time_nanos.saturating_sub(start).min(run.duration);
        let raw = run.decay.value_at(play_time, run.from, run.initial_velocity);
        let clamped = self.clamp(raw);

        self.value = clamped;
        self.velocity = run.decay.velocity_at(play_time, run.initial_velocity);
        trace!("decay frame t={play_time}ns value={clamped}");

        if clamped != raw {
            debug!("decay reached bound at {clamped}");
            self.finish();
            return false;
        }
        if play_time >= run.duration {
            self.finish();
            return false;
        }
        self.running = Running::Decay(run);
        true
    }

    fn finish(&mut self) {
        trace!("motion finished at {}", self.value);
        self.running = Running::Idle;
        self.velocity = 0.0;
    }
}

impl Default for Animatable {
    fn default() -> Self {
        Self::new(0.0)
    }
}

fn clamp_to(value: f64, lower: Option<f64>, upper: Option<f64>) -> f64 {
    let mut clamped = value;
    if let Some(upper) = upper {
        clamped = clamped.min(upper);
    }
    if let Some(lower) = lower {
        clamped = clamped.max(lower);
    }
    clamped
}

#[allow(
    clippy::cast_precision_loss,
    reason = "Frame deltas are far below 2^52 nanoseconds."
)]
fn nanos_to_seconds(nanos: u64) -> f64 {
    nanos as f64 / 1e9
}

#[cfg(test)]
mod tests {
    use super::{Animatable, Motion};
    use crate::{Easing, ExponentialDecay, TweenSpec};

    const FRAME: u64 = 16_000_000;

    fn run_to_rest(value: &mut Animatable, mut now: u64) -> u64 {
        for _ in 0..10_000 {
            if !value.advance(now) {
                return now;
            }
            now += FRAME;
        }
        panic!("motion did not settle");
    }

    #[test]
    fn snap_clamps_and_is_exact() {
        let mut value = Animatable::new(0.0);
        value.update_bounds(Some(0.0), Some(100.0));
        value.snap_to(42.5);
        assert_eq!(value.value(), 42.5);
        value.snap_to(250.0);
        assert_eq!(value.value(), 100.0);
        value.snap_to(-1.0);
        assert_eq!(value.value(), 0.0);
        assert!(!value.is_running());
    }

    #[test]
    fn first_frame_holds_the_start_value() {
        let mut value = Animatable::new(10.0);
        value.animate_to(20.0, TweenSpec::new(100, Easing::Linear));
        assert!(value.advance(5_000_000_000), "still running after the first frame");
        assert_eq!(value.value(), 10.0);
        assert!(value.advance(5_050_000_000), "halfway");
        assert!((value.value() - 15.0).abs() < 1e-9, "got {}", value.value());
        assert!(value.velocity() > 0.0, "moving forward");
    }

    #[test]
    fn tween_converges_to_clamped_target() {
        for start in [0.0, 37.0, 100.0] {
            let mut value = Animatable::new(start);
            value.update_bounds(Some(0.0), Some(100.0));
            value.animate_to(64.0, TweenSpec::default());
            assert_eq!(value.motion(), Motion::Tween { target: 64.0 });
            run_to_rest(&mut value, 0);
            assert_eq!(value.value(), 64.0);
            assert_eq!(value.velocity(), 0.0);

            value.animate_to(500.0, TweenSpec::default());
            assert_eq!(value.target_value(), 100.0);
            run_to_rest(&mut value, 0);
            assert_eq!(value.value(), 100.0);
        }
    }

    #[test]
    fn bounds_change_keeps_target_but_clamps_endpoint() {
        let mut value = Animatable::new(0.0);
        value.update_bounds(Some(0.0), Some(1000.0));
        value.animate_to(800.0, TweenSpec::new(200, Easing::Linear));
        assert!(value.advance(0), "started");
        assert!(value.advance(FRAME), "running");
        value.update_bounds(Some(0.0), Some(300.0));
        assert_eq!(value.motion(), Motion::Tween { target: 800.0 });
        run_to_rest(&mut value, 2 * FRAME);
        assert_eq!(value.value(), 300.0);
    }

    #[test]
    fn bounds_change_keeps_reachable_target() {
        let mut value = Animatable::new(900.0);
        value.update_bounds(Some(0.0), Some(1000.0));
        value.animate_to(100.0, TweenSpec::new(200, Easing::Linear));
        assert!(value.advance(0), "started");
        assert!(value.advance(FRAME), "running");
        value.update_bounds(Some(0.0), Some(300.0));
        assert_eq!(value.value(), 300.0);
        assert_eq!(value.motion(), Motion::Tween { target: 100.0 });
        run_to_rest(&mut value, 2 * FRAME);
        assert_eq!(value.value(), 100.0);
    }

    #[test]
    fn shrinking_bounds_reclamps_idle_value() {
        let mut value = Animatable::new(0.0);
        value.update_bounds(Some(0.0), Some(500.0));
        value.snap_to(400.0);
        value.update_bounds(Some(0.0), Some(120.0));
        assert_eq!(value.value(), 120.0);
        value.update_bounds(Some(10.0), Some(5.0));
        assert_eq!(value.upper_bound(), Some(10.0));
        assert_eq!(value.value(), 10.0);
    }

    #[test]
    fn decay_stops_at_bound() {
        let mut value = Animatable::new(90.0);
        value.update_bounds(Some(0.0), Some(100.0));
        value.animate_decay(5000.0, ExponentialDecay::default());
        assert_eq!(
            value.motion(),
            Motion::Decay {
                initial_velocity: 5000.0
            }
        );
        run_to_rest(&mut value, 0);
        assert_eq!(value.value(), 100.0);
        assert!(!value.is_running());
    }

    #[test]
    fn unbounded_decay_settles_near_its_target() {
        let mut value = Animatable::new(0.0);
        let decay = ExponentialDecay::default();
        value.animate_decay(-420.0, decay);
        let target = value.target_value();
        run_to_rest(&mut value, 0);
        assert!(value.value() < 0.0, "moved backwards");
        assert!((value.value() - target).abs() < 0.1, "{} vs {target}", value.value());
    }

    #[test]
    fn tiny_fling_does_nothing() {
        let mut value = Animatable::new(3.0);
        value.animate_decay(0.01, ExponentialDecay::default());
        assert!(!value.is_running());
        assert!(!value.advance(0));
        assert_eq!(value.value(), 3.0);
    }

    #[test]
    fn stop_keeps_current_value() {
        let mut value = Animatable::new(0.0);
        value.animate_to(100.0, TweenSpec::new(100, Easing::Linear));
        value.advance(0);
        value.advance(40_000_000);
        let mid = value.value();
        value.stop();
        assert_eq!(value.value(), mid);
        assert_eq!(value.motion(), Motion::Idle);
        assert!(!value.advance(80_000_000));
        assert_eq!(value.value(), mid);
    }
}
