// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll targets for guide items.

use kurbo::{Insets, Point};
use understory_plane::{Alignment, AxisAlign, PlaneError, PositionResolver};

use crate::{IndexMapper, PxDimensions};

/// Horizontal placement of a guide item in the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HorizontalAlign {
    /// Right after the channel column.
    Start,
    /// Centered between the channel column and the trailing edge.
    #[default]
    Center,
    /// Against the trailing edge.
    End,
}

impl From<HorizontalAlign> for AxisAlign {
    fn from(align: HorizontalAlign) -> Self {
        match align {
            HorizontalAlign::Start => Self::Start,
            HorizontalAlign::Center => Self::Center,
            HorizontalAlign::End => Self::End,
        }
    }
}

/// Vertical placement of a guide item in the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerticalAlign {
    /// Right below the timeline row.
    Top,
    /// Centered between the timeline row and the bottom edge.
    #[default]
    Center,
    /// Against the bottom edge.
    Bottom,
}

impl From<VerticalAlign> for AxisAlign {
    fn from(align: VerticalAlign) -> Self {
        match align {
            VerticalAlign::Top => Self::Start,
            VerticalAlign::Center => Self::Center,
            VerticalAlign::Bottom => Self::End,
        }
    }
}

/// Offsets that bring guide items into view.
///
/// Wraps a plane [`PositionResolver`], translating guide indices with an
/// [`IndexMapper`]. The sticky channel column and timeline row cover the
/// leading edges of the viewport, so programs and ticks are aligned in the
/// area left next to or below them.
///
/// Positions for a single axis leave the other axis to the caller.
#[derive(Debug, Clone)]
pub struct ProgramGuidePositions {
    resolver: PositionResolver,
    dims: PxDimensions,
    mapper: IndexMapper,
    current: Point,
}

impl ProgramGuidePositions {
    /// Wraps `resolver` for a guide at offset `current`.
    #[must_use]
    pub fn new(
        resolver: PositionResolver,
        dims: PxDimensions,
        mapper: IndexMapper,
        current: Point,
    ) -> Self {
        Self {
            resolver,
            dims,
            mapper,
            current,
        }
    }

    /// The wrapped plane resolver.
    #[must_use]
    pub fn resolver(&self) -> &PositionResolver {
        &self.resolver
    }

    /// The index mapper of the guide.
    #[must_use]
    pub fn mapper(&self) -> &IndexMapper {
        &self.mapper
    }

    /// Offset that places program `index` per `alignment`.
    pub fn program_offset(&self, index: usize, alignment: Alignment) -> Result<Point, PlaneError> {
        let global = self.mapper.program_index(index)?;
        let padding = Insets::new(self.dims.channel_width, self.dims.timeline_height, 0.0, 0.0);
        Ok(self.resolver.offset_for(global, alignment, padding, self.current))
    }

    /// Horizontal offset that places the current time line per `align`.
    pub fn current_time_position(&self, align: HorizontalAlign) -> Result<f64, PlaneError> {
        let global = self.mapper.current_time_index()?;
        Ok(self.x_for(global, align))
    }

    /// Vertical offset that places channel `index` per `align`.
    pub fn channel_position(&self, index: usize, align: VerticalAlign) -> Result<f64, PlaneError> {
        let global = self.mapper.channel_index(index)?;
        let padding = Insets::new(0.0, self.dims.timeline_height, 0.0, 0.0);
        Ok(self
            .resolver
            .offset_y_for(global, align.into(), padding, self.current.y))
    }

    /// Horizontal offset that places timeline tick `index` per `align`.
    pub fn timeline_position(
        &self,
        index: usize,
        align: HorizontalAlign,
    ) -> Result<f64, PlaneError> {
        let global = self.mapper.timeline_index(index)?;
        Ok(self.x_for(global, align))
    }

    /// Offset that places the plane item at a global index, as
    /// [`PositionResolver::offset_for`] does.
    #[must_use]
    pub fn offset_for(&self, index: usize, alignment: Alignment, padding: Insets) -> Point {
        self.resolver.offset_for(index, alignment, padding, self.current)
    }

    fn x_for(&self, global: usize, align: HorizontalAlign) -> f64 {
        let padding = Insets::new(self.dims.channel_width, 0.0, 0.0, 0.0);
        self.resolver
            .offset_x_for(global, align.into(), padding, self.current.x)
    }
}

#[cfg(test)]
mod tests {
    use super::{HorizontalAlign, ProgramGuidePositions, VerticalAlign};
    use crate::{Channel, CurrentTime, GuideItem, IndexMapper, Program, PxDimensions, Timeline};
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use kurbo::{Insets, Point, Size};
    use understory_plane::{Alignment, GeometryCache, PlaneError, PositionResolver};

    /// Two programs, a current time line at 10:15, two channels, and two ticks from 8:00.
    fn positions(current: Point) -> ProgramGuidePositions {
        let dims = PxDimensions::default();
        let items: Vec<GuideItem> = Vec::from([
            Program::new(0, 8.0, 9.0).into(),
            Program::new(1, 10.0, 12.0).into(),
            CurrentTime::new(10.25).into(),
            Channel::new(0).into(),
            Channel::new(1).into(),
            Timeline::new(8.0, 9.0).into(),
            Timeline::new(9.0, 10.0).into(),
        ]);
        let geometries = items.iter().map(|item| item.to_geometry(8.0, &dims));
        let cache = GeometryCache::from_geometries(geometries, 256.0);
        let resolver = PositionResolver::new(Rc::new(cache), Size::new(300.0, 150.0), Insets::ZERO);
        ProgramGuidePositions::new(resolver, dims, IndexMapper::new(2, true, 2, 2, false), current)
    }

    #[test]
    fn programs_align_beside_the_headers() {
        let p = positions(Point::ZERO);
        // Program 1 is 256 wide at (320, 96); the free area is 236x118 at (64, 32).
        let start = p.program_offset(1, Alignment::TOP_START).unwrap();
        assert_eq!(start, Point::new(256.0, 64.0));
        let center = p.program_offset(1, Alignment::CENTER).unwrap();
        assert_eq!(center, Point::new(320.0 - 64.0 - (236.0 - 256.0) / 2.0, 96.0 - 32.0 - 27.0));
    }

    #[test]
    fn single_axis_positions() {
        let p = positions(Point::new(11.0, 22.0));
        // Line at x = 352, 2 wide.
        assert_eq!(p.current_time_position(HorizontalAlign::Center), Ok(352.0 - 64.0 - 117.0));
        assert_eq!(p.current_time_position(HorizontalAlign::Start), Ok(288.0));
        // Channel 1 at y = 96.
        assert_eq!(p.channel_position(1, VerticalAlign::Top), Ok(64.0));
        assert_eq!(p.channel_position(1, VerticalAlign::Bottom), Ok(96.0 + 64.0 - 150.0));
        // Tick 1 at x = 192, 128 wide.
        assert_eq!(p.timeline_position(1, HorizontalAlign::End), Ok(192.0 + 128.0 - 300.0));
    }

    #[test]
    fn sticky_axes_keep_the_current_offset() {
        let p = positions(Point::new(11.0, 22.0));
        // The channel column never scrolls horizontally.
        let global = p.mapper().channel_index(0).unwrap();
        assert_eq!(p.offset_for(global, Alignment::CENTER, Insets::ZERO).x, 11.0);
    }

    #[test]
    fn unknown_items_fail() {
        let p = positions(Point::ZERO);
        assert!(matches!(
            p.program_offset(2, Alignment::CENTER),
            Err(PlaneError::LocalIndexOutOfRange { index: 2, count: 2, .. })
        ));
        assert!(p.timeline_position(9, HorizontalAlign::Start).is_err());
    }
}
