// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolved geometry of every declared item, computed once per content declaration.

use alloc::vec::Vec;

use kurbo::{Rect, Size};
use log::{debug, warn};

use crate::grid::Grid;
use crate::{IntervalList, ItemGeometry};

/// Geometry of every item plus the scrollable content extent.
///
/// The cache is immutable. Content or dimension changes build a new one.
///
/// Scrolling items with absolute sizes are bucketed spatially for windowing.
/// Items that are locked on an axis or sized relative to the viewport are kept
/// in a separate list that every windowing pass tests directly.
#[derive(Debug)]
pub struct GeometryCache {
    entries: Vec<ItemGeometry>,
    extent: Size,
    grid: Grid,
    pinned: Vec<usize>,
}

impl GeometryCache {
    /// Calls each interval's geometry function once per item.
    pub fn new<R>(intervals: &IntervalList<R>, grid_cell_size: f64) -> Self {
        Self::from_geometries(intervals.geometries(), grid_cell_size)
    }

    /// Builds a cache from geometries in global index order.
    pub fn from_geometries(
        geometries: impl IntoIterator<Item = ItemGeometry>,
        grid_cell_size: f64,
    ) -> Self {
        let entries: Vec<_> = geometries.into_iter().collect();
        let mut grid = Grid::new(grid_cell_size);
        let mut pinned = Vec::new();
        let mut extent = Size::ZERO;
        let mut skipped = 0_usize;

        for (index, item) in entries.iter().enumerate() {
            if !item.is_finite() {
                skipped += 1;
                continue;
            }
            // Locked axes and viewport-relative sizes never grow the extent.
            if let (Some(width), false) = (item.width.absolute(), item.locks_horizontally()) {
                extent.width = extent.width.max(item.origin.x + width);
            }
            if let (Some(height), false) = (item.height.absolute(), item.locks_vertically()) {
                extent.height = extent.height.max(item.origin.y + height);
            }

            if item.lock.is_empty() && !item.is_viewport_relative() {
                grid.insert(index, item.rect(Size::ZERO));
            } else {
                pinned.push(index);
            }
        }

        if skipped > 0 {
            warn!("{skipped} items have non-finite geometry and will never be placed");
        }
        debug!(
            "geometry cache: {} items, {} pinned, extent {}x{}",
            entries.len(),
            pinned.len(),
            extent.width,
            extent.height
        );

        Self {
            entries,
            extent,
            grid,
            pinned,
        }
    }

    /// Number of cached items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no items are cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Geometry of the item at a global index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ItemGeometry> {
        self.entries.get(index)
    }

    /// All cached geometry in global index order.
    pub fn iter(&self) -> impl Iterator<Item = &ItemGeometry> + '_ {
        self.entries.iter()
    }

    /// Far edges of all scrolling, absolute-sized items, never negative.
    ///
    /// Each axis only counts items that scroll on that axis.
    #[must_use]
    pub fn content_extent(&self) -> Size {
        self.extent
    }

    /// Items that may intersect `view`; every pinned item is included.
    pub(crate) fn candidates(&self, view: Rect, out: &mut Vec<usize>) {
        out.extend_from_slice(&self.pinned);
        self.grid.query(view, out);
    }
}
