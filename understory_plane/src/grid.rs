// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Uniform grid over the scrolling items of a geometry cache.
//!
//! Items are bucketed into fixed-size cells once, when content is declared.
//! Windowing then touches only the cells under the viewport, so the cost of a
//! layout pass follows the number of nearby items rather than the total.

use alloc::vec::Vec;
use core::fmt::Debug;

use hashbrown::{HashMap, HashSet};
use kurbo::Rect;
use smallvec::SmallVec;

/// Items covering more cells than this skip bucketing and are always candidates.
const MAX_CELLS_PER_ITEM: i64 = 4096;

#[derive(Default)]
struct Cell {
    items: SmallVec<[usize; 8]>,
}

/// Spatial buckets of item indices keyed by cell coordinate.
pub(crate) struct Grid {
    cell_size: f64,
    cells: HashMap<(i32, i32), Cell>,
    oversized: Vec<usize>,
    len: usize,
}

impl Debug for Grid {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Grid")
            .field("cell_size", &self.cell_size)
            .field("cells", &self.cells.len())
            .field("oversized", &self.oversized.len())
            .field("len", &self.len)
            .finish()
    }
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "Grid cell indices are intentionally i32; out-of-range values are saturated."
)]
fn cell_coord(value: f64, cell_size: f64) -> i32 {
    let t = value / cell_size;
    let coord = t as i32;

    // Round towards -∞ (the cast above has already truncated).
    if t < 0.0 && f64::from(coord) > t {
        coord.saturating_sub(1)
    } else {
        coord
    }
}

impl Grid {
    /// Creates an empty grid. Non-positive or non-finite cell sizes fall back to 256.
    pub(crate) fn new(cell_size: f64) -> Self {
        let cell_size = if cell_size.is_finite() && cell_size > 0.0 {
            cell_size
        } else {
            256.0
        };
        Self {
            cell_size,
            cells: HashMap::new(),
            oversized: Vec::new(),
            len: 0,
        }
    }

    /// Inclusive cell range covered by `rect`.
    fn cell_range(&self, rect: Rect) -> ((i32, i32), (i32, i32)) {
        (
            (cell_coord(rect.x0, self.cell_size), cell_coord(rect.y0, self.cell_size)),
            (cell_coord(rect.x1, self.cell_size), cell_coord(rect.y1, self.cell_size)),
        )
    }

    fn cell_count(min: (i32, i32), max: (i32, i32)) -> i64 {
        (i64::from(max.0) - i64::from(min.0) + 1) * (i64::from(max.1) - i64::from(min.1) + 1)
    }

    pub(crate) fn insert(&mut self, index: usize, rect: Rect) {
        self.len += 1;
        let (min, max) = self.cell_range(rect);
        if Self::cell_count(min, max) > MAX_CELLS_PER_ITEM {
            self.oversized.push(index);
            return;
        }
        for y in min.1..=max.1 {
            for x in min.0..=max.0 {
                self.cells.entry((x, y)).or_default().items.push(index);
            }
        }
    }

    /// Pushes every item that may overlap `rect` into `out`, each at most once.
    ///
    /// Candidates still need an exact overlap test.
    pub(crate) fn query(&self, rect: Rect, out: &mut Vec<usize>) {
        out.extend_from_slice(&self.oversized);
        let (min, max) = self.cell_range(rect);
        if Self::cell_count(min, max) > i64::try_from(self.cells.len()).unwrap_or(i64::MAX) {
            // Scanning the occupied cells is cheaper than probing empty ones.
            let mut seen = HashSet::new();
            for (&(x, y), cell) in &self.cells {
                if (min.0..=max.0).contains(&x) && (min.1..=max.1).contains(&y) {
                    out.extend(cell.items.iter().copied().filter(|i| seen.insert(*i)));
                }
            }
            return;
        }
        let mut seen = HashSet::new();
        for y in min.1..=max.1 {
            for x in min.0..=max.0 {
                if let Some(cell) = self.cells.get(&(x, y)) {
                    out.extend(cell.items.iter().copied().filter(|i| seen.insert(*i)));
                }
            }
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }
}
