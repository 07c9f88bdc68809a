// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis extents used by viewport windowing.
//!
//! A locked axis is represented as [`Span::Unbounded`] rather than a range with
//! float extremes, so overlap tests never do arithmetic with infinities.

use kurbo::Rect;

/// Extent of an item or viewport along one axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Span {
    /// Covers the whole axis.
    Unbounded,
    /// Covers the half-open range `start..end`.
    Bounded { start: f64, end: f64 },
}

impl Span {
    pub(crate) fn new(start: f64, length: f64, locked: bool) -> Self {
        if locked {
            Self::Unbounded
        } else {
            Self::Bounded {
                start,
                end: start + length,
            }
        }
    }

    /// Whether the two spans share an interior.
    ///
    /// Touching edges do not overlap. An unbounded span overlaps everything.
    pub(crate) fn overlaps(self, other: Self) -> bool {
        match (self, other) {
            (Self::Unbounded, _) | (_, Self::Unbounded) => true,
            (Self::Bounded { start, end }, Self::Bounded { start: s, end: e }) => {
                end > s && e > start
            }
        }
    }
}

/// Two-axis extent of an item or viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Region {
    pub(crate) x: Span,
    pub(crate) y: Span,
}

impl Region {
    pub(crate) fn from_rect(rect: Rect) -> Self {
        Self {
            x: Span::new(rect.x0, rect.width(), false),
            y: Span::new(rect.y0, rect.height(), false),
        }
    }

    pub(crate) fn overlaps(&self, other: &Self) -> bool {
        self.x.overlaps(other.x) && self.y.overlaps(other.y)
    }
}
