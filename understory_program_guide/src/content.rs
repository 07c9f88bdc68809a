// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Declaring the content of a guide.

use alloc::boxed::Box;
use alloc::rc::Rc;
use core::fmt;

use log::warn;
use understory_plane::{ContentType, ItemInterval};

use crate::{Channel, CurrentTime, GuideItem, Program, PxDimensions, Timeline, TopCorner};

type LayoutFn<T> = dyn Fn(usize) -> T;
type KeyFn = dyn Fn(usize) -> u64;
type ContentTypeFn = dyn Fn(usize) -> ContentType;
type RenderFn<R> = dyn Fn(usize) -> R;

/// A batch of guide items of one kind `T`.
///
/// The layout function returns the item at a local index; the guide turns it
/// into plane geometry once its dimensions are known.
pub struct GuideInterval<T, R> {
    count: usize,
    layout: Box<LayoutFn<T>>,
    key: Option<Box<KeyFn>>,
    content_type: Option<Box<ContentTypeFn>>,
    render: Box<RenderFn<R>>,
}

impl<T: 'static, R> GuideInterval<T, R> {
    /// Declares `count` items.
    pub fn new(
        count: usize,
        layout: impl Fn(usize) -> T + 'static,
        render: impl Fn(usize) -> R + 'static,
    ) -> Self {
        Self {
            count,
            layout: Box::new(layout),
            key: None,
            content_type: None,
            render: Box::new(render),
        }
    }

    /// Declares one item per element of `items`.
    pub fn from_items<I: 'static>(
        items: impl Into<Rc<[I]>>,
        layout: impl Fn(&I) -> T + 'static,
        render: impl Fn(&I) -> R + 'static,
    ) -> Self {
        let items: Rc<[I]> = items.into();
        let for_render = Rc::clone(&items);
        Self::new(
            items.len(),
            move |i| layout(&items[i]),
            move |i| render(&for_render[i]),
        )
    }

    /// Declares a single item.
    pub fn single(item: T, render: impl Fn() -> R + 'static) -> Self
    where
        T: Copy,
    {
        Self::new(1, move |_| item, move |_| render())
    }

    /// Adds a stable key function.
    #[must_use]
    pub fn with_key(mut self, key: impl Fn(usize) -> u64 + 'static) -> Self {
        self.key = Some(Box::new(key));
        self
    }

    /// Adds a content type function.
    #[must_use]
    pub fn with_content_type(
        mut self,
        content_type: impl Fn(usize) -> ContentType + 'static,
    ) -> Self {
        self.content_type = Some(Box::new(content_type));
        self
    }

    /// Number of items in the batch.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    /// The item at `local`.
    ///
    /// `local` must be below [`GuideInterval::count`].
    #[must_use]
    pub fn item(&self, local: usize) -> T {
        (self.layout)(local)
    }

    /// Keeps at most the first item.
    fn at_most_one(mut self, kind: &str) -> Self {
        if self.count > 1 {
            warn!("{kind} declares {} items; only the first is used", self.count);
            self.count = 1;
        }
        self
    }
}

impl<T, R> GuideInterval<T, R>
where
    T: Into<GuideItem> + 'static,
    R: 'static,
{
    /// Converts to a plane interval laid out with `dims` from `guide_start_hour`.
    pub(crate) fn into_item_interval(
        self,
        guide_start_hour: f64,
        dims: PxDimensions,
    ) -> ItemInterval<R> {
        let layout = self.layout;
        let mut interval = ItemInterval::new(
            self.count,
            move |i| {
                let item: GuideItem = layout(i).into();
                item.to_geometry(guide_start_hour, &dims)
            },
            self.render,
        );
        if let Some(key) = self.key {
            interval = interval.with_key(key);
        }
        if let Some(content_type) = self.content_type {
            interval = interval.with_content_type(content_type);
        }
        interval
    }
}

impl<T, R> fmt::Debug for GuideInterval<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GuideInterval")
            .field("count", &self.count)
            .field("has_key", &self.key.is_some())
            .field("has_content_type", &self.content_type.is_some())
            .finish_non_exhaustive()
    }
}

/// Everything shown by a guide, declared as a value.
///
/// Each kind is declared at most once; declaring it again replaces the earlier
/// declaration. The current time line and the top corner hold at most one item.
///
/// ```rust
/// use understory_program_guide::{Channel, GuideContent, GuideInterval, Program, TopCorner};
///
/// let content = GuideContent::new()
///     .guide_start_hour(6.0)
///     .programs(GuideInterval::new(
///         24,
///         |i| Program::new(i % 4, 6.0 + (i / 4) as f64, 7.0 + (i / 4) as f64),
///         |i| format!("program {i}"),
///     ))
///     .channels(GuideInterval::new(4, Channel::new, |i| format!("channel {i}")))
///     .top_corner(GuideInterval::single(TopCorner, || String::from("corner")));
/// assert_eq!(content.start_hour(), 6.0);
/// ```
pub struct GuideContent<R> {
    pub(crate) guide_start_hour: f64,
    pub(crate) programs: Option<GuideInterval<Program, R>>,
    pub(crate) current_time: Option<GuideInterval<CurrentTime, R>>,
    pub(crate) channels: Option<GuideInterval<Channel, R>>,
    pub(crate) timeline: Option<GuideInterval<Timeline, R>>,
    pub(crate) top_corner: Option<GuideInterval<TopCorner, R>>,
}

impl<R> GuideContent<R> {
    /// Empty content starting at hour zero.
    #[must_use]
    pub fn new() -> Self {
        Self {
            guide_start_hour: 0.0,
            programs: None,
            current_time: None,
            channels: None,
            timeline: None,
            top_corner: None,
        }
    }

    /// Sets the hour shown at the leading edge of the programs.
    #[must_use]
    pub fn guide_start_hour(mut self, hour: f64) -> Self {
        self.guide_start_hour = hour;
        self
    }

    /// The hour shown at the leading edge of the programs.
    #[must_use]
    pub fn start_hour(&self) -> f64 {
        self.guide_start_hour
    }

    /// Declares the programs.
    #[must_use]
    pub fn programs(mut self, programs: GuideInterval<Program, R>) -> Self {
        self.programs = Some(programs);
        self
    }

    /// Declares the current time line.
    ///
    /// Only the first item of `line` is used.
    #[must_use]
    pub fn current_time(mut self, line: GuideInterval<CurrentTime, R>) -> Self {
        self.current_time = Some(line.at_most_one("current time"));
        self
    }

    /// Declares the channel headers.
    #[must_use]
    pub fn channels(mut self, channels: GuideInterval<Channel, R>) -> Self {
        self.channels = Some(channels);
        self
    }

    /// Declares the timeline ticks.
    #[must_use]
    pub fn timeline(mut self, timeline: GuideInterval<Timeline, R>) -> Self {
        self.timeline = Some(timeline);
        self
    }

    /// Declares the top corner.
    ///
    /// Only the first item of `corner` is used.
    #[must_use]
    pub fn top_corner(mut self, corner: GuideInterval<TopCorner, R>) -> Self {
        self.top_corner = Some(corner.at_most_one("top corner"));
        self
    }
}

impl<R> Default for GuideContent<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> fmt::Debug for GuideContent<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GuideContent")
            .field("guide_start_hour", &self.guide_start_hour)
            .field("programs", &self.programs)
            .field("current_time", &self.current_time)
            .field("channels", &self.channels)
            .field("timeline", &self.timeline)
            .field("top_corner", &self.top_corner)
            .finish()
    }
}
