// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewport windowing over a [`GeometryCache`].

use alloc::vec::Vec;

use kurbo::{Point, Rect, Size, Vec2};
use log::trace;

use crate::GeometryCache;
use crate::span::{Region, Span};

/// Where one visible item goes, in viewport coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    /// Global item index.
    pub index: usize,
    /// Rectangle relative to the viewport's top-left corner.
    pub rect: Rect,
}

/// Computes the items that intersect the viewport at `offset`.
///
/// Items are tested against the viewport rectangle `offset .. offset + viewport`.
/// On an axis where an item is locked, it counts as covering the whole axis,
/// so items locked on both axes are always visible. Viewport-relative sizes
/// are resolved against `viewport` here.
///
/// Each placement is the item's rectangle translated by `-offset` on the axes
/// where it scrolls and left untranslated where it is locked.
///
/// The result is sorted by ascending global index. A viewport with zero area
/// yields no items.
#[must_use]
pub fn visible_items(cache: &GeometryCache, offset: Point, viewport: Size) -> Vec<Placement> {
    if cache.is_empty() || !(viewport.width > 0.0 && viewport.height > 0.0) {
        return Vec::new();
    }
    let view = Rect::from_origin_size(offset, viewport);
    let view_region = Region::from_rect(view);

    let mut candidates = Vec::new();
    cache.candidates(view, &mut candidates);
    candidates.sort_unstable();
    candidates.dedup();

    let mut placed = Vec::new();
    for index in candidates {
        let Some(item) = cache.get(index) else {
            continue;
        };
        if !item.is_finite() {
            continue;
        }
        let size = item.resolve_size(viewport);
        let locked_x = item.locks_horizontally();
        let locked_y = item.locks_vertically();
        let region = Region {
            x: Span::new(item.origin.x, size.width, locked_x),
            y: Span::new(item.origin.y, size.height, locked_y),
        };
        if !region.overlaps(&view_region) {
            continue;
        }
        let shift = Vec2::new(
            if locked_x { 0.0 } else { offset.x },
            if locked_y { 0.0 } else { offset.y },
        );
        placed.push(Placement {
            index,
            rect: Rect::from_origin_size(item.origin - shift, size),
        });
    }
    trace!("windowing at {offset:?}: {} of {} items visible", placed.len(), cache.len());
    placed
}

#[cfg(test)]
mod tests {
    use super::visible_items;
    use crate::{Dimension, GeometryCache, ItemGeometry, Lock};
    use alloc::vec::Vec;
    use kurbo::{Point, Rect, Size};

    /// A 10x10 grid of 100x100 cells, then a row header, a column header, and a corner.
    fn board() -> GeometryCache {
        let mut items = Vec::new();
        for row in 0..10 {
            for col in 0..10 {
                items.push(ItemGeometry::new(
                    f64::from(col) * 100.0,
                    f64::from(row) * 100.0,
                    100.0,
                    100.0,
                ));
            }
        }
        items.push(ItemGeometry::new(0.0, 250.0, 40.0, 100.0).locked(Lock::HORIZONTAL));
        items.push(ItemGeometry::new(450.0, 0.0, 100.0, 20.0).locked(Lock::VERTICAL));
        items.push(ItemGeometry::new(0.0, 0.0, 40.0, 20.0).locked(Lock::all()));
        GeometryCache::from_geometries(items, 256.0)
    }

    fn indices(cache: &GeometryCache, offset: Point, viewport: Size) -> Vec<usize> {
        visible_items(cache, offset, viewport)
            .iter()
            .map(|p| p.index)
            .collect()
    }

    #[test]
    fn only_intersecting_items_are_placed() {
        let cache = board();
        let visible = indices(&cache, Point::new(150.0, 150.0), Size::new(100.0, 100.0));
        // Cells (1,1), (1,2), (2,1), (2,2) plus the corner.
        assert_eq!(visible, [11, 12, 21, 22, 102]);
    }

    #[test]
    fn placements_are_translated_except_on_locked_axes() {
        let cache = board();
        let offset = Point::new(400.0, 200.0);
        let placed = visible_items(&cache, offset, Size::new(200.0, 200.0));
        let find = |index| placed.iter().find(|p| p.index == index).unwrap().rect;
        assert_eq!(find(24), Rect::new(0.0, 0.0, 100.0, 100.0));
        // Row header keeps x, scrolls y.
        assert_eq!(find(100), Rect::new(0.0, 50.0, 40.0, 150.0));
        // Column header keeps y, scrolls x.
        assert_eq!(find(101), Rect::new(50.0, 0.0, 150.0, 20.0));
        assert_eq!(find(102), Rect::new(0.0, 0.0, 40.0, 20.0));
    }

    #[test]
    fn locked_items_visible_at_any_scroll_position_on_their_axis() {
        let cache = board();
        let viewport = Size::new(120.0, 120.0);
        for x in [0.0, 333.0, 880.0, 1.0e12, -1.0e12] {
            let visible = indices(&cache, Point::new(x, 240.0), viewport);
            assert!(visible.contains(&100), "row header missing at x={x}");
            assert!(visible.contains(&102), "corner missing at x={x}");
        }
        for y in [0.0, 500.0, 1.0e12] {
            let visible = indices(&cache, Point::new(420.0, y), viewport);
            assert!(visible.contains(&101), "column header missing at y={y}");
        }
        // Off its scrolling axis, the row header is windowed normally.
        let far = indices(&cache, Point::new(0.0, 800.0), viewport);
        assert!(!far.contains(&100), "row header should be scrolled away");
    }

    #[test]
    fn viewport_relative_items_resolve_against_viewport() {
        let cache = GeometryCache::from_geometries(
            [ItemGeometry::new(150.0, 0.0, 2.0, 0.0)
                .with_height(Dimension::MATCH_VIEWPORT)
                .locked(Lock::VERTICAL)],
            256.0,
        );
        let placed = visible_items(&cache, Point::new(100.0, 5000.0), Size::new(300.0, 80.0));
        assert_eq!(placed.len(), 1);
        assert_eq!(placed[0].rect, Rect::new(50.0, 0.0, 52.0, 80.0));
    }

    #[test]
    fn degenerate_inputs_yield_nothing() {
        let cache = board();
        assert!(visible_items(&cache, Point::ZERO, Size::new(0.0, 100.0)).is_empty());
        assert!(visible_items(&cache, Point::ZERO, Size::new(100.0, f64::NAN)).is_empty());
        let empty = GeometryCache::from_geometries(Vec::<ItemGeometry>::new(), 256.0);
        assert!(visible_items(&empty, Point::ZERO, Size::new(100.0, 100.0)).is_empty());
    }

    #[test]
    fn output_is_deterministic() {
        let cache = board();
        let a = visible_items(&cache, Point::new(37.0, 91.0), Size::new(333.0, 222.0));
        let b = visible_items(&cache, Point::new(37.0, 91.0), Size::new(333.0, 222.0));
        assert_eq!(a, b);
        assert!(a.windows(2).all(|w| w[0].index < w[1].index));
    }
}
