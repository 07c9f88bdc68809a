// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Item geometry on the plane: origin, sizes, and axis locks.

use kurbo::{Point, Rect, Size};

/// One side length of an item.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Dimension {
    /// A fixed length in plane units.
    Absolute(f64),
    /// A fraction of the viewport length on the same axis, resolved at windowing time.
    MatchViewport(f64),
}

impl Dimension {
    /// The full viewport length.
    pub const MATCH_VIEWPORT: Self = Self::MatchViewport(1.0);

    /// Resolves this dimension against the viewport length on its axis.
    ///
    /// Negative lengths resolve to zero.
    #[must_use]
    pub fn resolve(self, viewport: f64) -> f64 {
        match self {
            Self::Absolute(length) => length.max(0.0),
            Self::MatchViewport(fraction) => (viewport * fraction).max(0.0),
        }
    }

    /// The fixed length, or `None` for viewport-relative dimensions.
    #[must_use]
    pub fn absolute(self) -> Option<f64> {
        match self {
            Self::Absolute(length) => Some(length),
            Self::MatchViewport(_) => None,
        }
    }

    fn is_finite(self) -> bool {
        match self {
            Self::Absolute(value) | Self::MatchViewport(value) => value.is_finite(),
        }
    }
}

bitflags::bitflags! {
    /// Axes on which an item ignores the scroll offset.
    ///
    /// A locked item keeps its plane coordinate as its screen coordinate on that
    /// axis, which makes it behave as a sticky header.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Lock: u8 {
        /// The x position does not scroll.
        const HORIZONTAL = 0b0000_0001;
        /// The y position does not scroll.
        const VERTICAL   = 0b0000_0010;
    }
}

/// Placement of one item on the plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemGeometry {
    /// Top-left corner in plane coordinates.
    pub origin: Point,
    /// Width of the item.
    pub width: Dimension,
    /// Height of the item.
    pub height: Dimension,
    /// Axes on which the item does not scroll.
    pub lock: Lock,
}

impl ItemGeometry {
    /// Creates an unlocked item with absolute size.
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            origin: Point::new(x, y),
            width: Dimension::Absolute(width),
            height: Dimension::Absolute(height),
            lock: Lock::empty(),
        }
    }

    /// Creates an unlocked item covering `rect`.
    #[must_use]
    pub fn from_rect(rect: Rect) -> Self {
        Self::new(rect.x0, rect.y0, rect.width(), rect.height())
    }

    /// Replaces the width.
    #[must_use]
    pub fn with_width(mut self, width: Dimension) -> Self {
        self.width = width;
        self
    }

    /// Replaces the height.
    #[must_use]
    pub fn with_height(mut self, height: Dimension) -> Self {
        self.height = height;
        self
    }

    /// Adds `lock` to the locked axes.
    #[must_use]
    pub fn locked(mut self, lock: Lock) -> Self {
        self.lock |= lock;
        self
    }

    /// Whether the x position ignores the scroll offset.
    #[must_use]
    pub fn locks_horizontally(&self) -> bool {
        self.lock.contains(Lock::HORIZONTAL)
    }

    /// Whether the y position ignores the scroll offset.
    #[must_use]
    pub fn locks_vertically(&self) -> bool {
        self.lock.contains(Lock::VERTICAL)
    }

    /// Whether either side depends on the viewport size.
    #[must_use]
    pub fn is_viewport_relative(&self) -> bool {
        self.width.absolute().is_none() || self.height.absolute().is_none()
    }

    /// Whether every coordinate and length is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.origin.is_finite() && self.width.is_finite() && self.height.is_finite()
    }

    /// Size with viewport-relative dimensions resolved against `viewport`.
    #[must_use]
    pub fn resolve_size(&self, viewport: Size) -> Size {
        Size::new(
            self.width.resolve(viewport.width),
            self.height.resolve(viewport.height),
        )
    }

    /// Size used when aligning the item inside the viewport.
    ///
    /// Viewport-relative dimensions count as zero.
    #[must_use]
    pub fn alignment_size(&self) -> Size {
        Size::new(
            self.width.absolute().unwrap_or(0.0).max(0.0),
            self.height.absolute().unwrap_or(0.0).max(0.0),
        )
    }

    /// Plane rectangle with sizes resolved against `viewport`.
    #[must_use]
    pub fn rect(&self, viewport: Size) -> Rect {
        Rect::from_origin_size(self.origin, self.resolve_size(viewport))
    }
}
