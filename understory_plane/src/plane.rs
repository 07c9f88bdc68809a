// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-pass layout driver.

use alloc::rc::Rc;
use alloc::vec::Vec;

use kurbo::{Insets, Point, Rect, Size, Vec2};
use log::trace;

use crate::{
    ContentType, GeometryCache, IntervalList, ItemKey, Placement, PlaneError, PlaneState,
    PositionResolver, visible_items,
};

/// Layout configuration for a [`Plane`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneConfig {
    /// Padding applied to every alignment request, on top of per-request padding.
    pub alignment_padding: Insets,
    /// Padding around the whole content, inside the viewport.
    ///
    /// It grows the scrollable area and moves scrolling items away from the
    /// leading edges. Items stay where they are on their locked axes.
    pub content_padding: Insets,
    /// Cell size of the spatial grid used for windowing.
    pub grid_cell_size: f64,
}

impl Default for PlaneConfig {
    fn default() -> Self {
        Self {
            alignment_padding: Insets::ZERO,
            content_padding: Insets::ZERO,
            grid_cell_size: 256.0,
        }
    }
}

/// Result of one layout pass.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaneLayout {
    /// Size the plane occupies: the content extent, capped by the viewport.
    pub size: Size,
    /// Visible items in ascending index order.
    pub items: Vec<Placement>,
}

/// Declared content and its geometry cache.
///
/// Build one per content declaration and call [`Plane::layout`] on every layout
/// pass. Changing content or dimensions means building a new plane; the scroll
/// state outlives it and keeps its offset.
#[derive(Debug)]
pub struct Plane<R> {
    intervals: IntervalList<R>,
    cache: Rc<GeometryCache>,
    config: PlaneConfig,
}

impl<R> Plane<R> {
    /// Resolves the geometry of every declared item.
    pub fn new(intervals: IntervalList<R>, config: PlaneConfig) -> Self {
        let cache = Rc::new(GeometryCache::new(&intervals, config.grid_cell_size));
        Self {
            intervals,
            cache,
            config,
        }
    }

    /// The declared intervals.
    #[must_use]
    pub fn intervals(&self) -> &IntervalList<R> {
        &self.intervals
    }

    /// The geometry cache.
    #[must_use]
    pub fn cache(&self) -> &GeometryCache {
        &self.cache
    }

    /// The layout configuration.
    #[must_use]
    pub fn config(&self) -> &PlaneConfig {
        &self.config
    }

    /// Total number of declared items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// Returns `true` if no items are declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Content extent of the declared items, without content padding.
    #[must_use]
    pub fn content_extent(&self) -> Size {
        self.cache.content_extent()
    }

    /// Content extent grown by the content padding.
    #[must_use]
    pub fn padded_extent(&self) -> Size {
        let extent = self.cache.content_extent();
        let pad = self.config.content_padding;
        Size::new(extent.width + pad.x0 + pad.x1, extent.height + pad.y0 + pad.y1)
    }

    /// Resolver and legal offset range for `viewport`.
    #[must_use]
    pub fn prepare(&self, viewport: Size) -> (PositionResolver, Rect) {
        let resolver = PositionResolver::new(
            Rc::clone(&self.cache),
            sanitize(viewport),
            self.config.alignment_padding,
        )
        .with_content_padding(self.config.content_padding);
        let bounds = resolver.bounds();
        (resolver, bounds)
    }

    /// Visible items at `offset`.
    ///
    /// Content padding moves the window back by its leading edges, so scrolling
    /// items land that far from the viewport's top-left corner.
    #[must_use]
    pub fn place(&self, offset: Point, viewport: Size) -> PlaneLayout {
        let viewport = sanitize(viewport);
        let extent = self.padded_extent();
        let pad = self.config.content_padding;
        let window = offset - Vec2::new(pad.x0, pad.y0);
        PlaneLayout {
            size: Size::new(
                extent.width.min(viewport.width),
                extent.height.min(viewport.height),
            ),
            items: visible_items(&self.cache, window, viewport),
        }
    }

    /// Runs one layout pass: binds `state` to `viewport`, then places the
    /// items visible at its offset.
    pub fn layout(&self, state: &mut PlaneState, viewport: Size) -> PlaneLayout {
        let (resolver, bounds) = self.prepare(viewport);
        state.update_bounds(resolver, bounds);
        let layout = self.place(state.offset(), viewport);
        trace!("layout at {:?}: {} items", state.offset(), layout.items.len());
        layout
    }

    /// Key of the item at a global index.
    pub fn key_of(&self, index: usize) -> Result<ItemKey, PlaneError> {
        self.intervals.key_of(index)
    }

    /// Content type of the item at a global index.
    pub fn content_type_of(&self, index: usize) -> Result<Option<ContentType>, PlaneError> {
        self.intervals.content_type_of(index)
    }

    /// Renders the item at a global index.
    pub fn render(&self, index: usize) -> Result<R, PlaneError> {
        self.intervals.render(index)
    }
}

/// Negative and NaN viewport lengths become zero.
fn sanitize(viewport: Size) -> Size {
    Size::new(viewport.width.max(0.0), viewport.height.max(0.0))
}
