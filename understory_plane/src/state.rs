// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll offset state: two independently animated axes with legal bounds.

use alloc::boxed::Box;
use core::fmt;

use kurbo::{Insets, Point, Rect, Vec2};
use log::{debug, trace};
use understory_motion::{Animatable, ExponentialDecay, Motion, TweenSpec};

use crate::{Alignment, PlaneError, PositionResolver};

/// Motion parameters used by programmatic animation and flings.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMotion {
    /// Tween used by [`PlaneState::animate_to`] and item animations.
    pub tween: TweenSpec,
    /// Decay used by [`PlaneState::fling_by`].
    pub decay: ExponentialDecay,
}

/// What one scroll axis is doing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AxisPhase {
    /// At rest.
    Idle,
    /// Following a pointer drag.
    Dragging,
    /// Animating towards `target` (before clamping).
    Animating {
        /// Requested offset.
        target: f64,
    },
    /// Decelerating after a fling.
    Decaying {
        /// Offset velocity at release, in units per second.
        initial_velocity: f64,
    },
}

/// Persisted form of a scroll position.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SavedOffset {
    /// Horizontal offset.
    pub x: f64,
    /// Vertical offset.
    pub y: f64,
}

impl From<Point> for SavedOffset {
    fn from(point: Point) -> Self {
        Self {
            x: point.x,
            y: point.y,
        }
    }
}

impl From<SavedOffset> for Point {
    fn from(saved: SavedOffset) -> Self {
        Self::new(saved.x, saved.y)
    }
}

type InitialOffset = Box<dyn FnOnce(&PositionResolver) -> Point>;

/// Scroll offsets of a plane and the motions driving them.
///
/// The state starts unbound. The first [`PlaneState::update_bounds`] evaluates
/// the initial offset rule exactly once; later binds only move the bounds and
/// re-clamp. Before the first bind there are no bounds and no resolver, so
/// item-based helpers do nothing.
///
/// Every operation returns immediately. Motions progress when the host calls
/// [`PlaneState::advance`] once per frame, and each axis progresses on its own.
/// Starting a motion on an axis replaces whatever that axis was doing.
pub struct PlaneState {
    x: Animatable,
    y: Animatable,
    dragging: bool,
    initial: Option<InitialOffset>,
    resolver: Option<PositionResolver>,
    motion: ScrollMotion,
}

impl PlaneState {
    /// Creates a state that starts at the origin.
    #[must_use]
    pub fn new() -> Self {
        Self::with_initial_offset(|_| Point::ZERO)
    }

    /// Creates a state whose starting offset is computed on the first bind.
    ///
    /// The rule sees the first layout's resolver, so it can align an item.
    /// Its result is clamped into the bounds of that layout.
    #[must_use]
    pub fn with_initial_offset(rule: impl FnOnce(&PositionResolver) -> Point + 'static) -> Self {
        Self {
            x: Animatable::new(0.0),
            y: Animatable::new(0.0),
            dragging: false,
            initial: Some(Box::new(rule)),
            resolver: None,
            motion: ScrollMotion::default(),
        }
    }

    /// Creates a state that restores `saved` on the first bind.
    #[must_use]
    pub fn from_saved(saved: SavedOffset) -> Self {
        Self::with_initial_offset(move |_| saved.into())
    }

    /// Replaces the motion parameters.
    #[must_use]
    pub fn with_motion(mut self, motion: ScrollMotion) -> Self {
        self.motion = motion;
        self
    }

    /// Motion parameters used by animations and flings.
    #[must_use]
    pub fn motion(&self) -> ScrollMotion {
        self.motion
    }

    /// Replaces the motion parameters for subsequent motions.
    pub fn set_motion(&mut self, motion: ScrollMotion) {
        self.motion = motion;
    }

    /// Binds the state to a layout pass.
    ///
    /// `bounds` is the legal offset range, normally [`PositionResolver::bounds`].
    /// The current offsets are re-clamped; running motions keep their targets.
    /// On the first bind, the initial offset rule runs against `resolver`.
    pub fn update_bounds(&mut self, resolver: PositionResolver, bounds: Rect) {
        let rule = self.initial.take();
        self.bind(resolver, bounds, rule);
    }

    /// Like [`PlaneState::update_bounds`], but a first bind evaluates `initial`
    /// in place of the rule given at construction.
    ///
    /// Later binds ignore `initial`.
    pub fn update_bounds_with(
        &mut self,
        resolver: PositionResolver,
        bounds: Rect,
        initial: impl FnOnce(&PositionResolver) -> Point,
    ) {
        let rule = self.initial.take().map(|_| initial);
        self.bind(resolver, bounds, rule);
    }

    fn bind(
        &mut self,
        resolver: PositionResolver,
        bounds: Rect,
        rule: Option<impl FnOnce(&PositionResolver) -> Point>,
    ) {
        self.x.update_bounds(Some(bounds.x0), Some(bounds.x1));
        self.y.update_bounds(Some(bounds.y0), Some(bounds.y1));
        if let Some(rule) = rule {
            let start = rule(&resolver);
            debug!("first bind: initial offset {start:?} within {bounds:?}");
            self.x.snap_to(start.x);
            self.y.snap_to(start.y);
        }
        self.resolver = Some(resolver);
    }

    /// Whether a layout pass has bound the state.
    #[must_use]
    pub fn is_bound(&self) -> bool {
        self.resolver.is_some()
    }

    /// Resolver from the latest layout pass.
    pub fn resolver(&self) -> Result<&PositionResolver, PlaneError> {
        self.resolver.as_ref().ok_or(PlaneError::Unbound)
    }

    /// Legal offset range from the latest bind.
    #[must_use]
    pub fn bounds(&self) -> Option<Rect> {
        match (
            self.x.lower_bound(),
            self.y.lower_bound(),
            self.x.upper_bound(),
            self.y.upper_bound(),
        ) {
            (Some(x0), Some(y0), Some(x1), Some(y1)) => Some(Rect::new(x0, y0, x1, y1)),
            _ => None,
        }
    }

    /// Current offset.
    #[must_use]
    pub fn offset(&self) -> Point {
        Point::new(self.x.value(), self.y.value())
    }

    /// Current offset velocity in units per second.
    #[must_use]
    pub fn velocity(&self) -> Vec2 {
        Vec2::new(self.x.velocity(), self.y.velocity())
    }

    /// Moves the content with the pointer by `delta`.
    ///
    /// Dragging content towards positive coordinates decreases the offset.
    /// Running motions on both axes are cancelled.
    pub fn drag_by(&mut self, delta: Vec2) {
        self.dragging = true;
        self.x.snap_to(self.x.value() - delta.x);
        self.y.snap_to(self.y.value() - delta.y);
        trace!("drag by {delta:?} to {:?}", self.offset());
    }

    /// Ends a drag and flings with the pointer's release `velocity`.
    pub fn end_drag(&mut self, velocity: Vec2) {
        self.fling_by(velocity);
    }

    /// Ends a drag without flinging.
    pub fn cancel_drag(&mut self) {
        self.dragging = false;
    }

    /// Starts a decay on both axes from a pointer `velocity`.
    ///
    /// The offset moves against the pointer direction, so the decay runs with
    /// the negated velocity and stops at the bounds.
    pub fn fling_by(&mut self, velocity: Vec2) {
        self.dragging = false;
        debug!("fling at {velocity:?}");
        self.x.animate_decay(-velocity.x, self.motion.decay);
        self.y.animate_decay(-velocity.y, self.motion.decay);
    }

    /// Animates each given axis to its target; `None` leaves that axis alone.
    ///
    /// Targets outside the bounds are clamped.
    pub fn animate_to(&mut self, x: Option<f64>, y: Option<f64>) {
        self.dragging = false;
        if let Some(x) = x {
            self.x.animate_to(x, self.motion.tween);
        }
        if let Some(y) = y {
            self.y.animate_to(y, self.motion.tween);
        }
    }

    /// Jumps each given axis to its target; `None` leaves that axis alone.
    ///
    /// Targets outside the bounds are clamped.
    pub fn snap_to(&mut self, x: Option<f64>, y: Option<f64>) {
        self.dragging = false;
        if let Some(x) = x {
            self.x.snap_to(x);
        }
        if let Some(y) = y {
            self.y.snap_to(y);
        }
    }

    /// Cancels drags, animations, and flings on both axes, keeping the offset.
    pub fn stop_animation(&mut self) {
        self.dragging = false;
        self.x.stop();
        self.y.stop();
    }

    /// Cancels the animation or fling on the horizontal axis, keeping its offset.
    pub fn stop_x(&mut self) {
        self.x.stop();
    }

    /// Cancels the animation or fling on the vertical axis, keeping its offset.
    pub fn stop_y(&mut self) {
        self.y.stop();
    }

    /// Animates to the offset that aligns item `index`.
    ///
    /// Does nothing before the first bind.
    pub fn animate_to_item(&mut self, index: usize, alignment: Alignment, padding: Insets) {
        if let Some(target) = self.item_target(index, alignment, padding) {
            self.animate_to(Some(target.x), Some(target.y));
        }
    }

    /// Jumps to the offset that aligns item `index`.
    ///
    /// Does nothing before the first bind.
    pub fn snap_to_item(&mut self, index: usize, alignment: Alignment, padding: Insets) {
        if let Some(target) = self.item_target(index, alignment, padding) {
            self.snap_to(Some(target.x), Some(target.y));
        }
    }

    fn item_target(&self, index: usize, alignment: Alignment, padding: Insets) -> Option<Point> {
        match self.resolver() {
            Ok(resolver) => Some(resolver.offset_for(index, alignment, padding, self.offset())),
            Err(err) => {
                debug!("ignoring scroll to item {index}: {err}");
                None
            }
        }
    }

    /// What the horizontal axis is doing.
    #[must_use]
    pub fn phase_x(&self) -> AxisPhase {
        self.phase(&self.x)
    }

    /// What the vertical axis is doing.
    #[must_use]
    pub fn phase_y(&self) -> AxisPhase {
        self.phase(&self.y)
    }

    fn phase(&self, axis: &Animatable) -> AxisPhase {
        if self.dragging {
            return AxisPhase::Dragging;
        }
        match axis.motion() {
            Motion::Idle => AxisPhase::Idle,
            Motion::Tween { target } => AxisPhase::Animating { target },
            Motion::Decay { initial_velocity } => AxisPhase::Decaying { initial_velocity },
        }
    }

    /// Whether a drag, animation, or fling is in progress on either axis.
    #[must_use]
    pub fn is_scroll_in_progress(&self) -> bool {
        self.dragging || self.x.is_running() || self.y.is_running()
    }

    /// Steps both axes to `frame_time_nanos`.
    ///
    /// Returns `true` while either axis is still moving.
    pub fn advance(&mut self, frame_time_nanos: u64) -> bool {
        let x = self.x.advance(frame_time_nanos);
        let y = self.y.advance(frame_time_nanos);
        x || y
    }

    /// Current offset in its persisted form.
    #[must_use]
    pub fn saved(&self) -> SavedOffset {
        self.offset().into()
    }
}

impl Default for PlaneState {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for PlaneState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlaneState")
            .field("x", &self.x)
            .field("y", &self.y)
            .field("dragging", &self.dragging)
            .field("pending_initial_offset", &self.initial.is_some())
            .field("resolver", &self.resolver)
            .field("motion", &self.motion)
            .finish()
    }
}
