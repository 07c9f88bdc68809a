// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Guide items and their placement on the plane.

use understory_plane::{Dimension, ItemGeometry, Lock};

use crate::PxDimensions;

/// A program airing on a channel between two hours.
///
/// Hours are fractional, so `9.5` is half past nine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Program {
    /// Row of the channel airing the program.
    pub channel_index: usize,
    /// Hour the program starts.
    pub start_hour: f64,
    /// Hour the program ends.
    pub end_hour: f64,
}

impl Program {
    /// Creates a program on channel `channel_index`.
    #[must_use]
    pub fn new(channel_index: usize, start_hour: f64, end_hour: f64) -> Self {
        Self {
            channel_index,
            start_hour,
            end_hour,
        }
    }
}

/// The vertical line marking the current time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurrentTime {
    /// Current hour.
    pub hour: f64,
}

impl CurrentTime {
    /// Creates the line at `hour`.
    #[must_use]
    pub fn new(hour: f64) -> Self {
        Self { hour }
    }
}

/// A channel header in the sticky left column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Channel {
    /// Row of the channel.
    pub index: usize,
}

impl Channel {
    /// Creates the header of row `index`.
    #[must_use]
    pub fn new(index: usize) -> Self {
        Self { index }
    }
}

/// A tick in the sticky timeline row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timeline {
    /// Hour the tick starts.
    pub start_hour: f64,
    /// Hour the tick ends.
    pub end_hour: f64,
}

impl Timeline {
    /// Creates a tick covering `start_hour..end_hour`.
    #[must_use]
    pub fn new(start_hour: f64, end_hour: f64) -> Self {
        Self {
            start_hour,
            end_hour,
        }
    }
}

/// The fixed cell where the channel column meets the timeline row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TopCorner;

/// Any item of a program guide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GuideItem {
    /// See [`Program`].
    Program(Program),
    /// See [`CurrentTime`].
    CurrentTime(CurrentTime),
    /// See [`Channel`].
    Channel(Channel),
    /// See [`Timeline`].
    Timeline(Timeline),
    /// See [`TopCorner`].
    TopCorner(TopCorner),
}

impl GuideItem {
    /// Places the item on the plane.
    ///
    /// Hours are measured from `guide_start_hour`. The channel column and the
    /// timeline row take the leading edges of the plane, so programs start
    /// after them. Channels stay put horizontally, and the timeline and current
    /// time line stay put vertically. The top corner never moves.
    #[must_use]
    pub fn to_geometry(&self, guide_start_hour: f64, dims: &PxDimensions) -> ItemGeometry {
        let hour_x =
            |hour: f64| (hour - guide_start_hour) * dims.timeline_hour_width + dims.channel_width;
        let row_y = |row: usize| row as f64 * dims.channel_height + dims.timeline_height;
        match *self {
            Self::Program(program) => ItemGeometry::new(
                hour_x(program.start_hour),
                row_y(program.channel_index),
                (program.end_hour - program.start_hour) * dims.timeline_hour_width,
                dims.channel_height,
            ),
            Self::CurrentTime(current) => {
                ItemGeometry::new(hour_x(current.hour), 0.0, dims.current_time_width, 0.0)
                    .with_height(Dimension::MATCH_VIEWPORT)
                    .locked(Lock::VERTICAL)
            }
            Self::Channel(channel) => ItemGeometry::new(
                0.0,
                row_y(channel.index),
                dims.channel_width,
                dims.channel_height,
            )
            .locked(Lock::HORIZONTAL),
            Self::Timeline(tick) => ItemGeometry::new(
                hour_x(tick.start_hour),
                0.0,
                (tick.end_hour - tick.start_hour) * dims.timeline_hour_width,
                dims.timeline_height,
            )
            .locked(Lock::VERTICAL),
            Self::TopCorner(TopCorner) => {
                ItemGeometry::new(0.0, 0.0, dims.channel_width, dims.timeline_height)
                    .locked(Lock::HORIZONTAL | Lock::VERTICAL)
            }
        }
    }
}

impl From<Program> for GuideItem {
    fn from(program: Program) -> Self {
        Self::Program(program)
    }
}

impl From<CurrentTime> for GuideItem {
    fn from(current: CurrentTime) -> Self {
        Self::CurrentTime(current)
    }
}

impl From<Channel> for GuideItem {
    fn from(channel: Channel) -> Self {
        Self::Channel(channel)
    }
}

impl From<Timeline> for GuideItem {
    fn from(tick: Timeline) -> Self {
        Self::Timeline(tick)
    }
}

impl From<TopCorner> for GuideItem {
    fn from(corner: TopCorner) -> Self {
        Self::TopCorner(corner)
    }
}

#[cfg(test)]
mod tests {
    use super::{Channel, CurrentTime, GuideItem, Program, Timeline, TopCorner};
    use crate::PxDimensions;
    use kurbo::{Point, Rect, Size};
    use understory_plane::{Dimension, Lock};

    #[test]
    fn program_spans_its_hours_on_its_row() {
        let dims = PxDimensions::default();
        let geometry = GuideItem::from(Program::new(2, 9.5, 11.0)).to_geometry(8.0, &dims);
        assert_eq!(geometry.origin, Point::new(256.0, 160.0));
        assert_eq!(geometry.width, Dimension::Absolute(192.0));
        assert_eq!(geometry.height, Dimension::Absolute(64.0));
        assert!(geometry.lock.is_empty());
    }

    #[test]
    fn headers_are_sticky() {
        let dims = PxDimensions::default();
        let channel = GuideItem::from(Channel::new(3)).to_geometry(8.0, &dims);
        assert_eq!(channel.rect(Size::ZERO), Rect::new(0.0, 224.0, 64.0, 288.0));
        assert_eq!(channel.lock, Lock::HORIZONTAL);

        let tick = GuideItem::from(Timeline::new(10.0, 10.5)).to_geometry(8.0, &dims);
        assert_eq!(tick.rect(Size::ZERO), Rect::new(320.0, 0.0, 384.0, 32.0));
        assert_eq!(tick.lock, Lock::VERTICAL);

        let corner = GuideItem::from(TopCorner).to_geometry(8.0, &dims);
        assert_eq!(corner.rect(Size::ZERO), Rect::new(0.0, 0.0, 64.0, 32.0));
        assert_eq!(corner.lock, Lock::all());
    }

    #[test]
    fn current_time_line_spans_the_viewport_height() {
        let dims = PxDimensions::default();
        let line = GuideItem::from(CurrentTime::new(8.25)).to_geometry(8.0, &dims);
        assert_eq!(line.origin, Point::new(96.0, 0.0));
        assert_eq!(line.width, Dimension::Absolute(2.0));
        assert_eq!(line.height, Dimension::MATCH_VIEWPORT);
        assert_eq!(line.lock, Lock::VERTICAL);
        assert_eq!(line.rect(Size::new(300.0, 500.0)).height(), 500.0);
    }

    #[test]
    fn start_hour_shifts_everything_timed() {
        let dims = PxDimensions::default();
        let early = GuideItem::from(Program::new(0, 6.0, 7.0)).to_geometry(8.0, &dims);
        assert_eq!(early.origin.x, 64.0 - 256.0);
        let tick = GuideItem::from(Timeline::new(0.0, 1.0)).to_geometry(0.0, &dims);
        assert_eq!(tick.origin.x, 64.0);
    }
}
