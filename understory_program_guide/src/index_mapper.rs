// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Guide item indices to plane indices.

use understory_plane::PlaneError;

// Interval positions of the item kinds, in declaration order.
pub(crate) const PROGRAMS: usize = 0;
pub(crate) const CURRENT_TIME: usize = 1;
pub(crate) const CHANNELS: usize = 2;
pub(crate) const TIMELINE: usize = 3;
pub(crate) const TOP_CORNER: usize = 4;

/// Maps per-kind indices to global plane indices.
///
/// Items are declared as programs, then the current time line (zero or one),
/// then channels, then timeline ticks, then the top corner (zero or one).
/// Indices past a kind's count are rejected with
/// [`PlaneError::LocalIndexOutOfRange`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IndexMapper {
    programs: usize,
    current_time: bool,
    channels: usize,
    timeline: usize,
    top_corner: bool,
}

impl IndexMapper {
    /// Creates a mapper for the given item counts.
    #[must_use]
    pub fn new(
        programs: usize,
        current_time: bool,
        channels: usize,
        timeline: usize,
        top_corner: bool,
    ) -> Self {
        Self {
            programs,
            current_time,
            channels,
            timeline,
            top_corner,
        }
    }

    /// Number of programs.
    #[must_use]
    pub fn programs(&self) -> usize {
        self.programs
    }

    /// Number of channels.
    #[must_use]
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Number of timeline ticks.
    #[must_use]
    pub fn timeline(&self) -> usize {
        self.timeline
    }

    /// Whether a current time line is declared.
    #[must_use]
    pub fn has_current_time(&self) -> bool {
        self.current_time
    }

    /// Whether a top corner is declared.
    #[must_use]
    pub fn has_top_corner(&self) -> bool {
        self.top_corner
    }

    /// Total number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.timeline_start() + self.timeline + usize::from(self.top_corner)
    }

    /// Returns `true` if nothing is declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Global index of program `index`.
    pub fn program_index(&self, index: usize) -> Result<usize, PlaneError> {
        check(PROGRAMS, index, self.programs)?;
        Ok(index)
    }

    /// Global index of the current time line.
    pub fn current_time_index(&self) -> Result<usize, PlaneError> {
        check(CURRENT_TIME, 0, usize::from(self.current_time))?;
        Ok(self.programs)
    }

    /// Global index of channel `index`.
    pub fn channel_index(&self, index: usize) -> Result<usize, PlaneError> {
        check(CHANNELS, index, self.channels)?;
        Ok(self.programs + usize::from(self.current_time) + index)
    }

    /// Global index of timeline tick `index`.
    pub fn timeline_index(&self, index: usize) -> Result<usize, PlaneError> {
        check(TIMELINE, index, self.timeline)?;
        Ok(self.timeline_start() + index)
    }

    /// Global index of the top corner.
    pub fn top_corner_index(&self) -> Result<usize, PlaneError> {
        check(TOP_CORNER, 0, usize::from(self.top_corner))?;
        Ok(self.timeline_start() + self.timeline)
    }

    fn timeline_start(&self) -> usize {
        self.programs + usize::from(self.current_time) + self.channels
    }
}

fn check(interval: usize, index: usize, count: usize) -> Result<(), PlaneError> {
    if index < count {
        Ok(())
    } else {
        Err(PlaneError::LocalIndexOutOfRange {
            interval,
            index,
            count,
        })
    }
}
