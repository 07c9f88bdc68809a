// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll state of a guide.

use alloc::boxed::Box;
use core::fmt;

use kurbo::{Point, Rect, Vec2};
use log::debug;
use understory_plane::{
    Alignment, PlaneError, PlaneState, PositionResolver, SavedOffset, ScrollMotion,
};

use crate::{HorizontalAlign, IndexMapper, ProgramGuidePositions, PxDimensions, VerticalAlign};

type GuideInitialOffset = Box<dyn FnOnce(&ProgramGuidePositions) -> Point>;

#[derive(Debug, Clone, Copy)]
struct Binding {
    mapper: IndexMapper,
    dims: PxDimensions,
}

/// Scroll offsets of a guide, with helpers that bring guide items into view.
///
/// Wraps a [`PlaneState`]; everything it can do is available through
/// [`ProgramGuideState::plane`] and [`ProgramGuideState::plane_mut`].
///
/// Item helpers do nothing until the first [`ProgramGuide::layout`] binds the
/// state. After that, an index past its kind's count is an error.
///
/// Helpers that scroll one axis stop any animation or fling on the other axis.
///
/// [`ProgramGuide::layout`]: crate::ProgramGuide::layout
pub struct ProgramGuideState {
    plane: PlaneState,
    initial: Option<GuideInitialOffset>,
    binding: Option<Binding>,
}

impl ProgramGuideState {
    /// Creates a state that starts at the origin.
    #[must_use]
    pub fn new() -> Self {
        Self::with_initial_offset(|_| Point::ZERO)
    }

    /// Creates a state whose starting offset is computed on the first layout.
    ///
    /// ```rust
    /// use understory_program_guide::{HorizontalAlign, ProgramGuideState};
    ///
    /// // Open the guide at the current time.
    /// let state = ProgramGuideState::with_initial_offset(|positions| {
    ///     let x = positions.current_time_position(HorizontalAlign::Start).unwrap_or(0.0);
    ///     kurbo::Point::new(x, 0.0)
    /// });
    /// # let _ = state;
    /// ```
    #[must_use]
    pub fn with_initial_offset(
        rule: impl FnOnce(&ProgramGuidePositions) -> Point + 'static,
    ) -> Self {
        Self {
            plane: PlaneState::new(),
            initial: Some(Box::new(rule)),
            binding: None,
        }
    }

    /// Creates a state that restores `saved` on the first layout.
    #[must_use]
    pub fn from_saved(saved: SavedOffset) -> Self {
        Self::with_initial_offset(move |_| saved.into())
    }

    /// Replaces the motion parameters.
    #[must_use]
    pub fn with_motion(mut self, motion: ScrollMotion) -> Self {
        self.plane.set_motion(motion);
        self
    }

    /// The wrapped plane state.
    #[must_use]
    pub fn plane(&self) -> &PlaneState {
        &self.plane
    }

    /// The wrapped plane state, for drags, gestures, and frame driving.
    pub fn plane_mut(&mut self) -> &mut PlaneState {
        &mut self.plane
    }

    pub(crate) fn bind(
        &mut self,
        resolver: PositionResolver,
        bounds: Rect,
        mapper: IndexMapper,
        dims: PxDimensions,
    ) {
        self.binding = Some(Binding { mapper, dims });
        let rule = self.initial.take();
        self.plane.update_bounds_with(resolver, bounds, |resolver| match rule {
            Some(rule) => {
                let positions =
                    ProgramGuidePositions::new(resolver.clone(), dims, mapper, Point::ZERO);
                rule(&positions)
            }
            None => Point::ZERO,
        });
    }

    /// Positions for the latest layout, at the current offset.
    pub fn positions(&self) -> Result<ProgramGuidePositions, PlaneError> {
        let binding = self.binding.ok_or(PlaneError::Unbound)?;
        let resolver = self.plane.resolver()?.clone();
        Ok(ProgramGuidePositions::new(
            resolver,
            binding.dims,
            binding.mapper,
            self.plane.offset(),
        ))
    }

    /// Current offset.
    #[must_use]
    pub fn offset(&self) -> Point {
        self.plane.offset()
    }

    /// Current offset in its persisted form.
    #[must_use]
    pub fn saved(&self) -> SavedOffset {
        self.plane.saved()
    }

    /// Moves the content with the pointer by `delta`.
    pub fn drag_by(&mut self, delta: Vec2) {
        self.plane.drag_by(delta);
    }

    /// Starts a fling from a pointer `velocity`.
    pub fn fling_by(&mut self, velocity: Vec2) {
        self.plane.fling_by(velocity);
    }

    /// Animates each given axis; `None` leaves that axis alone.
    pub fn animate_to(&mut self, x: Option<f64>, y: Option<f64>) {
        self.plane.animate_to(x, y);
    }

    /// Jumps each given axis; `None` leaves that axis alone.
    pub fn snap_to(&mut self, x: Option<f64>, y: Option<f64>) {
        self.plane.snap_to(x, y);
    }

    /// Cancels drags, animations, and flings, keeping the offset.
    pub fn stop_animation(&mut self) {
        self.plane.stop_animation();
    }

    /// Whether a drag, animation, or fling is in progress.
    #[must_use]
    pub fn is_scroll_in_progress(&self) -> bool {
        self.plane.is_scroll_in_progress()
    }

    /// Steps running motions to `frame_time_nanos`; `true` while still moving.
    pub fn advance(&mut self, frame_time_nanos: u64) -> bool {
        self.plane.advance(frame_time_nanos)
    }

    /// Animates to program `index`.
    pub fn animate_to_program(
        &mut self,
        index: usize,
        alignment: Alignment,
    ) -> Result<(), PlaneError> {
        if let Some(target) = self.target("program", |p| p.program_offset(index, alignment))? {
            self.plane.animate_to(Some(target.x), Some(target.y));
        }
        Ok(())
    }

    /// Jumps to program `index`.
    pub fn snap_to_program(
        &mut self,
        index: usize,
        alignment: Alignment,
    ) -> Result<(), PlaneError> {
        if let Some(target) = self.target("program", |p| p.program_offset(index, alignment))? {
            self.plane.snap_to(Some(target.x), Some(target.y));
        }
        Ok(())
    }

    /// Animates horizontally to the current time line.
    pub fn animate_to_current_time(&mut self, align: HorizontalAlign) -> Result<(), PlaneError> {
        if let Some(x) = self.target("current time", |p| p.current_time_position(align))? {
            self.plane.stop_y();
            self.plane.animate_to(Some(x), None);
        }
        Ok(())
    }

    /// Jumps horizontally to the current time line.
    pub fn snap_to_current_time(&mut self, align: HorizontalAlign) -> Result<(), PlaneError> {
        if let Some(x) = self.target("current time", |p| p.current_time_position(align))? {
            self.plane.stop_y();
            self.plane.snap_to(Some(x), None);
        }
        Ok(())
    }

    /// Animates vertically to channel `index`.
    pub fn animate_to_channel(
        &mut self,
        index: usize,
        align: VerticalAlign,
    ) -> Result<(), PlaneError> {
        if let Some(y) = self.target("channel", |p| p.channel_position(index, align))? {
            self.plane.stop_x();
            self.plane.animate_to(None, Some(y));
        }
        Ok(())
    }

    /// Jumps vertically to channel `index`.
    pub fn snap_to_channel(
        &mut self,
        index: usize,
        align: VerticalAlign,
    ) -> Result<(), PlaneError> {
        if let Some(y) = self.target("channel", |p| p.channel_position(index, align))? {
            self.plane.stop_x();
            self.plane.snap_to(None, Some(y));
        }
        Ok(())
    }

    /// Animates horizontally to timeline tick `index`.
    pub fn animate_to_timeline(
        &mut self,
        index: usize,
        align: HorizontalAlign,
    ) -> Result<(), PlaneError> {
        if let Some(x) = self.target("timeline", |p| p.timeline_position(index, align))? {
            self.plane.stop_y();
            self.plane.animate_to(Some(x), None);
        }
        Ok(())
    }

    /// Jumps horizontally to timeline tick `index`.
    pub fn snap_to_timeline(
        &mut self,
        index: usize,
        align: HorizontalAlign,
    ) -> Result<(), PlaneError> {
        if let Some(x) = self.target("timeline", |p| p.timeline_position(index, align))? {
            self.plane.stop_y();
            self.plane.snap_to(Some(x), None);
        }
        Ok(())
    }

    /// `Ok(None)` while unbound.
    fn target<T>(
        &self,
        kind: &str,
        resolve: impl FnOnce(&ProgramGuidePositions) -> Result<T, PlaneError>,
    ) -> Result<Option<T>, PlaneError> {
        match self.positions() {
            Ok(positions) => resolve(&positions).map(Some),
            Err(err) => {
                debug!("ignoring scroll to {kind}: {err}");
                Ok(None)
            }
        }
    }
}

impl Default for ProgramGuideState {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ProgramGuideState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProgramGuideState")
            .field("plane", &self.plane)
            .field("pending_initial_offset", &self.initial.is_some())
            .field("binding", &self.binding)
            .finish()
    }
}
