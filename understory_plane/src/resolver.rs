// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll targets for aligning items within the viewport.

use alloc::rc::Rc;

use kurbo::{Insets, Point, Rect, Size};

use crate::{Alignment, AxisAlign, GeometryCache, ItemGeometry};

/// Computes scroll offsets that align an item within the viewport.
///
/// A resolver captures one layout pass: the geometry cache, the viewport size,
/// and a base padding that is added to the padding of every request.
/// Offsets are not clamped; the scroll state clamps them when applied.
///
/// With [content padding](PositionResolver::with_content_padding), the
/// scrollable area grows by the padding and scrolling items sit after its
/// leading edges.
#[derive(Clone, Debug)]
pub struct PositionResolver {
    cache: Rc<GeometryCache>,
    viewport: Size,
    padding: Insets,
    content_padding: Insets,
}

impl PositionResolver {
    /// Creates a resolver for one layout pass.
    #[must_use]
    pub fn new(cache: Rc<GeometryCache>, viewport: Size, padding: Insets) -> Self {
        Self {
            cache,
            viewport,
            padding,
            content_padding: Insets::ZERO,
        }
    }

    /// Sets the padding around the whole content.
    #[must_use]
    pub fn with_content_padding(mut self, content_padding: Insets) -> Self {
        self.content_padding = content_padding;
        self
    }

    /// Padding around the whole content.
    #[must_use]
    pub fn content_padding(&self) -> Insets {
        self.content_padding
    }

    /// Viewport size of the layout pass.
    #[must_use]
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Content extent of the cached geometry.
    #[must_use]
    pub fn content_extent(&self) -> Size {
        self.cache.content_extent()
    }

    /// Content extent grown by the content padding.
    #[must_use]
    pub fn padded_extent(&self) -> Size {
        let extent = self.cache.content_extent();
        let pad = self.content_padding;
        Size::new(extent.width + pad.x0 + pad.x1, extent.height + pad.y0 + pad.y1)
    }

    /// Legal scroll offsets: `0 ..= max(0, padded extent - viewport)` on each axis.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        let extent = self.padded_extent();
        Rect::new(
            0.0,
            0.0,
            (extent.width - self.viewport.width).max(0.0),
            (extent.height - self.viewport.height).max(0.0),
        )
    }

    /// Cached geometry of the item at a global index.
    #[must_use]
    pub fn item(&self, index: usize) -> Option<&ItemGeometry> {
        self.cache.get(index)
    }

    /// Scroll offset that places item `index` per `alignment` inside the viewport
    /// reduced by the base padding plus `padding`.
    ///
    /// On an axis where the item is locked, the result is `current` on that axis.
    /// Viewport-relative item sizes count as zero. An unknown index yields `current`.
    #[must_use]
    pub fn offset_for(
        &self,
        index: usize,
        alignment: Alignment,
        padding: Insets,
        current: Point,
    ) -> Point {
        Point::new(
            self.offset_x_for(index, alignment.horizontal, padding, current.x),
            self.offset_y_for(index, alignment.vertical, padding, current.y),
        )
    }

    /// Horizontal part of [`PositionResolver::offset_for`].
    #[must_use]
    pub fn offset_x_for(
        &self,
        index: usize,
        align: AxisAlign,
        padding: Insets,
        current: f64,
    ) -> f64 {
        let Some(item) = self.cache.get(index) else {
            return current;
        };
        if item.locks_horizontally() || !item.is_finite() {
            return current;
        }
        let start = self.padding.x0 + padding.x0;
        let end = self.padding.x1 + padding.x1;
        let space = (self.viewport.width - start - end).max(0.0);
        let item_start = item.origin.x + self.content_padding.x0;
        align.offset(item_start, item.alignment_size().width, space, start, current)
    }

    /// Vertical part of [`PositionResolver::offset_for`].
    #[must_use]
    pub fn offset_y_for(
        &self,
        index: usize,
        align: AxisAlign,
        padding: Insets,
        current: f64,
    ) -> f64 {
        let Some(item) = self.cache.get(index) else {
            return current;
        };
        if item.locks_vertically() || !item.is_finite() {
            return current;
        }
        let start = self.padding.y0 + padding.y0;
        let end = self.padding.y1 + padding.y1;
        let space = (self.viewport.height - start - end).max(0.0);
        let item_start = item.origin.y + self.content_padding.y0;
        align.offset(item_start, item.alignment_size().height, space, start, current)
    }
}
