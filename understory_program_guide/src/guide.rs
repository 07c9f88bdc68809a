// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The guide layout driver.

use alloc::vec::Vec;

use kurbo::Size;
use log::debug;
use understory_plane::{
    ContentType, IntervalList, ItemInterval, ItemKey, Plane, PlaneConfig, PlaneError, PlaneLayout,
};

use crate::{
    GuideContent, GuideInterval, IndexMapper, ProgramGuideDimensions, ProgramGuideState,
    PxDimensions,
};

/// A program guide: declared content laid out on a plane.
///
/// Building a guide resolves the geometry of every item. Changing the
/// content, the dimensions, or the scale means building a new guide; a
/// [`ProgramGuideState`] carries the scroll position across rebuilds.
#[derive(Debug)]
pub struct ProgramGuide<R> {
    plane: Plane<R>,
    mapper: IndexMapper,
    dims: PxDimensions,
}

impl<R: 'static> ProgramGuide<R> {
    /// Lays out `content` with `dimensions` at `scale` pixels per logical unit.
    pub fn new(content: GuideContent<R>, dimensions: ProgramGuideDimensions, scale: f64) -> Self {
        Self::with_config(content, dimensions, scale, PlaneConfig::default())
    }

    /// Like [`ProgramGuide::new`], with plane configuration.
    ///
    /// The alignment padding of `config` applies on top of the space taken by
    /// the channel column and the timeline row. Its content padding surrounds
    /// the whole guide: programs, the current time line, and timeline ticks
    /// start after it, and the channel column and timeline row keep their
    /// sticky edges.
    pub fn with_config(
        content: GuideContent<R>,
        dimensions: ProgramGuideDimensions,
        scale: f64,
        config: PlaneConfig,
    ) -> Self {
        let dims = dimensions.to_px(scale);
        let GuideContent {
            guide_start_hour,
            programs,
            current_time,
            channels,
            timeline,
            top_corner,
        } = content;
        let mapper = IndexMapper::new(
            programs.as_ref().map_or(0, GuideInterval::count),
            current_time.as_ref().is_some_and(|line| line.count() > 0),
            channels.as_ref().map_or(0, GuideInterval::count),
            timeline.as_ref().map_or(0, GuideInterval::count),
            top_corner.as_ref().is_some_and(|corner| corner.count() > 0),
        );

        let mut intervals: Vec<ItemInterval<R>> = Vec::with_capacity(5);
        intervals.extend(programs.map(|i| i.into_item_interval(guide_start_hour, dims)));
        intervals.extend(current_time.map(|i| i.into_item_interval(guide_start_hour, dims)));
        intervals.extend(channels.map(|i| i.into_item_interval(guide_start_hour, dims)));
        intervals.extend(timeline.map(|i| i.into_item_interval(guide_start_hour, dims)));
        intervals.extend(top_corner.map(|i| i.into_item_interval(guide_start_hour, dims)));
        debug!("program guide from hour {guide_start_hour}: {mapper:?}");

        Self {
            plane: Plane::new(IntervalList::new(intervals), config),
            mapper,
            dims,
        }
    }
}

impl<R> ProgramGuide<R> {
    /// Runs one layout pass: binds `state` to `viewport`, then places the
    /// items visible at its offset.
    ///
    /// The first pass evaluates the state's initial offset rule.
    pub fn layout(&self, state: &mut ProgramGuideState, viewport: Size) -> PlaneLayout {
        let (resolver, bounds) = self.plane.prepare(viewport);
        state.bind(resolver, bounds, self.mapper, self.dims);
        self.plane.place(state.offset(), viewport)
    }

    /// The underlying plane.
    #[must_use]
    pub fn plane(&self) -> &Plane<R> {
        &self.plane
    }

    /// The index mapper.
    #[must_use]
    pub fn mapper(&self) -> &IndexMapper {
        &self.mapper
    }

    /// Dimensions in pixels.
    #[must_use]
    pub fn dimensions(&self) -> &PxDimensions {
        &self.dims
    }

    /// Key of the item at a global index.
    pub fn key_of(&self, index: usize) -> Result<ItemKey, PlaneError> {
        self.plane.key_of(index)
    }

    /// Content type of the item at a global index.
    pub fn content_type_of(&self, index: usize) -> Result<Option<ContentType>, PlaneError> {
        self.plane.content_type_of(index)
    }

    /// Renders the item at a global index.
    pub fn render(&self, index: usize) -> Result<R, PlaneError> {
        self.plane.render(index)
    }
}

#[cfg(test)]
mod tests {
    use super::ProgramGuide;
    use crate::{
        Channel, CurrentTime, GuideContent, GuideInterval, HorizontalAlign, Program,
        ProgramGuideDimensions, ProgramGuideState, Timeline, TopCorner, VerticalAlign,
    };
    use alloc::format;
    use alloc::string::String;
    use alloc::vec::Vec;
    use kurbo::{Insets, Point, Rect, Size, Vec2};
    use understory_plane::{Alignment, AxisPhase, ItemKey, PlaneConfig, PlaneError, SavedOffset};

    const SCHEDULE: [(usize, f64, f64); 5] = [
        (0, 8.0, 9.0),
        (0, 9.0, 11.0),
        (1, 8.0, 10.0),
        (2, 9.5, 11.0),
        (2, 11.0, 12.0),
    ];

    const VIEWPORT: Size = Size::new(300.0, 150.0);

    /// Five programs on three channels from 8:00 to 12:00, the time is 10:15.
    ///
    /// Content is 576x224 in a 300x150 viewport, so offsets range over 276x74.
    fn guide() -> ProgramGuide<String> {
        guide_with(PlaneConfig::default())
    }

    fn guide_with(config: PlaneConfig) -> ProgramGuide<String> {
        let content = GuideContent::new()
            .guide_start_hour(8.0)
            .programs(
                GuideInterval::from_items(
                    SCHEDULE,
                    |&(channel, start, end)| Program::new(channel, start, end),
                    |&(channel, start, _)| format!("{channel}@{start}"),
                )
                .with_key(|i| 500 + i as u64),
            )
            .current_time(GuideInterval::single(CurrentTime::new(10.25), || String::from("now")))
            .channels(GuideInterval::new(3, Channel::new, |i| format!("ch{i}")))
            .timeline(GuideInterval::new(
                4,
                |i| Timeline::new(8.0 + i as f64, 9.0 + i as f64),
                |i| format!("{}:00", 8 + i),
            ))
            .top_corner(GuideInterval::single(TopCorner, || String::from("corner")));
        ProgramGuide::with_config(content, ProgramGuideDimensions::default(), 1.0, config)
    }

    fn indices(guide: &ProgramGuide<String>, state: &mut ProgramGuideState) -> Vec<usize> {
        guide.layout(state, VIEWPORT).items.iter().map(|p| p.index).collect()
    }

    #[test]
    fn first_layout_shows_headers_and_early_programs() {
        let guide = guide();
        let mut state = ProgramGuideState::new();
        // Programs 0-2, channels 0-1, ticks 8:00 and 9:00, the corner.
        assert_eq!(indices(&guide, &mut state), [0, 1, 2, 6, 7, 9, 10, 13]);
        assert_eq!(state.plane().bounds(), Some(Rect::new(0.0, 0.0, 276.0, 74.0)));
        assert_eq!(guide.render(13).unwrap(), "corner");
        assert_eq!(guide.render(3).unwrap(), "2@9.5");
        assert_eq!(guide.key_of(1), Ok(ItemKey::Stable(501)));
        assert_eq!(guide.key_of(6), Ok(ItemKey::Positional(6)));
    }

    #[test]
    fn headers_stick_while_scrolling() {
        let guide = guide();
        let mut state = ProgramGuideState::new();
        guide.layout(&mut state, VIEWPORT);
        state.drag_by(Vec2::new(-100.0, -50.0));
        let layout = guide.layout(&mut state, VIEWPORT);
        let rect_of = |index: usize| layout.items.iter().find(|p| p.index == index).map(|p| p.rect);
        assert_eq!(rect_of(9), Some(Rect::new(-36.0, 0.0, 92.0, 32.0)));
        assert_eq!(rect_of(7), Some(Rect::new(0.0, 46.0, 64.0, 110.0)));
        assert_eq!(rect_of(13), Some(Rect::new(0.0, 0.0, 64.0, 32.0)));
        // The current time line fills the viewport height at x = 352 - 100.
        assert_eq!(rect_of(5), Some(Rect::new(252.0, 0.0, 254.0, 150.0)));
    }

    #[test]
    fn item_helpers_scroll_to_guide_items() {
        let guide = guide();
        let mut state = ProgramGuideState::new();
        guide.layout(&mut state, VIEWPORT);

        state.snap_to_program(3, Alignment::CENTER).unwrap();
        // x: 256 - 22 - 64; y: 160 - 27 - 32 = 101, clamped to 74.
        assert_eq!(state.offset(), Point::new(170.0, 74.0));

        state.snap_to_channel(1, VerticalAlign::Top).unwrap();
        assert_eq!(state.offset(), Point::new(170.0, 64.0));

        state.snap_to_timeline(3, HorizontalAlign::Start).unwrap();
        assert_eq!(state.offset(), Point::new(276.0, 64.0));

        state.animate_to_current_time(HorizontalAlign::Center).unwrap();
        assert!(state.is_scroll_in_progress());
        let mut now = 0;
        while state.advance(now) {
            now += 16_000_000;
        }
        assert_eq!(state.offset(), Point::new(171.0, 64.0));
    }

    #[test]
    fn bad_indices_fail_once_bound() {
        let guide = guide();
        let mut state = ProgramGuideState::new();
        guide.layout(&mut state, VIEWPORT);
        assert_eq!(
            state.snap_to_channel(3, VerticalAlign::Top),
            Err(PlaneError::LocalIndexOutOfRange {
                interval: 2,
                index: 3,
                count: 3
            })
        );
        assert!(state.animate_to_program(5, Alignment::CENTER).is_err());
        assert!(!state.is_scroll_in_progress());
    }

    #[test]
    fn initial_offset_sees_guide_positions() {
        let guide = guide();
        let mut state = ProgramGuideState::with_initial_offset(|positions| {
            let x = positions.current_time_position(HorizontalAlign::Start).unwrap_or(0.0);
            let y = positions.channel_position(2, VerticalAlign::Top).unwrap_or(0.0);
            Point::new(x, y)
        });
        guide.layout(&mut state, VIEWPORT);
        // 288 and 128, clamped to 276 and 74.
        assert_eq!(state.offset(), Point::new(276.0, 74.0));
        state.snap_to(Some(10.0), Some(20.0));
        guide.layout(&mut state, VIEWPORT);
        assert_eq!(state.offset(), Point::new(10.0, 20.0));
    }

    #[test]
    fn state_survives_a_rebuild() {
        let mut state = ProgramGuideState::from_saved(SavedOffset { x: 100.0, y: 30.0 });
        guide().layout(&mut state, VIEWPORT);
        assert_eq!(state.offset(), Point::new(100.0, 30.0));

        // Twice the pixel density: content doubles, the offset stays.
        let dense = ProgramGuide::new(
            GuideContent::new()
                .guide_start_hour(8.0)
                .channels(GuideInterval::new(3, Channel::new, |i| format!("ch{i}"))),
            ProgramGuideDimensions::default(),
            2.0,
        );
        dense.layout(&mut state, VIEWPORT);
        assert_eq!(dense.dimensions().channel_height, 128.0);
        assert_eq!(state.offset(), Point::new(0.0, 30.0));
        assert_eq!(state.saved(), SavedOffset { x: 0.0, y: 30.0 });
    }

    #[test]
    fn empty_guide_lays_out_nothing() {
        let guide: ProgramGuide<()> =
            ProgramGuide::new(GuideContent::new(), ProgramGuideDimensions::default(), 1.0);
        let mut state = ProgramGuideState::new();
        let layout = guide.layout(&mut state, VIEWPORT);
        assert!(layout.items.is_empty());
        assert_eq!(layout.size, Size::ZERO);
        assert!(guide.mapper().is_empty());
    }

    #[test]
    fn single_axis_helpers_stop_the_other_axis() {
        let guide = guide();
        let mut state = ProgramGuideState::new();
        guide.layout(&mut state, VIEWPORT);
        state.fling_by(Vec2::new(-2000.0, 0.0));
        assert!(state.advance(0));
        assert!(state.advance(16_000_000));
        let x = state.offset().x;
        assert!(x > 0.0, "fling moved to {x}");

        state.snap_to_channel(1, VerticalAlign::Top).unwrap();
        assert_eq!(state.plane().phase_x(), AxisPhase::Idle);
        assert!(!state.is_scroll_in_progress());
        assert_eq!(state.offset(), Point::new(x, 64.0));
    }

    #[test]
    fn content_padding_surrounds_the_guide() {
        let config = PlaneConfig {
            content_padding: Insets::new(16.0, 8.0, 16.0, 8.0),
            ..PlaneConfig::default()
        };
        let guide = guide_with(config);
        let mut state = ProgramGuideState::new();
        let layout = guide.layout(&mut state, VIEWPORT);
        // 608x240 of padded content.
        assert_eq!(state.plane().bounds(), Some(Rect::new(0.0, 0.0, 308.0, 90.0)));
        let rect_of = |index: usize| layout.items.iter().find(|p| p.index == index).map(|p| p.rect);
        assert_eq!(rect_of(0), Some(Rect::new(80.0, 40.0, 208.0, 104.0)));
        // The channel column keeps x = 0, the timeline row keeps y = 0.
        assert_eq!(rect_of(6), Some(Rect::new(0.0, 40.0, 64.0, 104.0)));
        assert_eq!(rect_of(9), Some(Rect::new(80.0, 0.0, 208.0, 32.0)));
        assert_eq!(rect_of(13), Some(Rect::new(0.0, 0.0, 64.0, 32.0)));

        // Channel 1 sits at y = 96 + 8, right below the 32 high timeline row.
        state.snap_to_channel(1, VerticalAlign::Top).unwrap();
        assert_eq!(state.offset(), Point::new(0.0, 72.0));
    }
}
