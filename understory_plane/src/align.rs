// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Alignment of an item within the viewport when scrolling to it.

/// Alignment along one axis when scrolling an item into view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisAlign {
    /// Align the start (left/top edge) of the item with the viewport.
    Start,
    /// Center the item within the viewport.
    Center,
    /// Align the end (right/bottom edge) of the item with the viewport.
    End,
    /// Move just enough to make the item fully visible, preferring the
    /// smallest change from the current scroll offset.
    Nearest,
}

impl AxisAlign {
    /// Scroll offset that aligns an item on one axis.
    ///
    /// - `item_start` and `item_size` are the item's plane coordinates.
    /// - `space` is the viewport length minus both paddings.
    /// - `leading_padding` is the padding before the aligned area.
    /// - `current` is the current scroll offset, used by [`AxisAlign::Nearest`].
    ///
    /// The result is not clamped to the scroll range.
    #[must_use]
    pub fn offset(
        self,
        item_start: f64,
        item_size: f64,
        space: f64,
        leading_padding: f64,
        current: f64,
    ) -> f64 {
        let aligned_at = |within: f64| item_start - within - leading_padding;
        match self {
            Self::Start => aligned_at(0.0),
            Self::Center => aligned_at((space - item_size) / 2.0),
            Self::End => aligned_at(space - item_size),
            Self::Nearest => {
                let visible_start = current + leading_padding;
                let visible_end = visible_start + space;
                let item_end = item_start + item_size;
                if item_start >= visible_start && item_end <= visible_end {
                    current
                } else if item_start < visible_start || item_size > space {
                    // Before the viewport, or too large to fit: show its start.
                    aligned_at(0.0)
                } else {
                    aligned_at(space - item_size)
                }
            }
        }
    }
}

/// Two-axis alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alignment {
    /// Alignment on the x axis.
    pub horizontal: AxisAlign,
    /// Alignment on the y axis.
    pub vertical: AxisAlign,
}

impl Alignment {
    /// Top edge, left edge.
    pub const TOP_START: Self = Self::new(AxisAlign::Start, AxisAlign::Start);
    /// Top edge, horizontally centered.
    pub const TOP_CENTER: Self = Self::new(AxisAlign::Center, AxisAlign::Start);
    /// Top edge, right edge.
    pub const TOP_END: Self = Self::new(AxisAlign::End, AxisAlign::Start);
    /// Vertically centered, left edge.
    pub const CENTER_START: Self = Self::new(AxisAlign::Start, AxisAlign::Center);
    /// Centered on both axes.
    pub const CENTER: Self = Self::new(AxisAlign::Center, AxisAlign::Center);
    /// Vertically centered, right edge.
    pub const CENTER_END: Self = Self::new(AxisAlign::End, AxisAlign::Center);
    /// Bottom edge, left edge.
    pub const BOTTOM_START: Self = Self::new(AxisAlign::Start, AxisAlign::End);
    /// Bottom edge, horizontally centered.
    pub const BOTTOM_CENTER: Self = Self::new(AxisAlign::Center, AxisAlign::End);
    /// Bottom edge, right edge.
    pub const BOTTOM_END: Self = Self::new(AxisAlign::End, AxisAlign::End);
    /// Minimal movement on both axes.
    pub const NEAREST: Self = Self::new(AxisAlign::Nearest, AxisAlign::Nearest);

    /// Creates an alignment from per-axis alignments.
    #[must_use]
    pub const fn new(horizontal: AxisAlign, vertical: AxisAlign) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }
}

impl Default for Alignment {
    fn default() -> Self {
        Self::CENTER
    }
}

#[cfg(test)]
mod tests {
    use super::{Alignment, AxisAlign};

    #[test]
    fn centering_leaves_equal_space() {
        // 100-wide item at x=500 in a 300-wide viewport.
        let offset = AxisAlign::Center.offset(500.0, 100.0, 300.0, 0.0, 0.0);
        assert_eq!(500.0 - offset, 100.0);
    }

    #[test]
    fn start_and_end_honor_padding() {
        assert_eq!(AxisAlign::Start.offset(500.0, 100.0, 260.0, 40.0, 0.0), 460.0);
        // End: item right edge sits at padding + space = 300 from the viewport left.
        let end = AxisAlign::End.offset(500.0, 100.0, 260.0, 40.0, 0.0);
        assert_eq!(600.0 - end, 300.0);
    }

    #[test]
    fn nearest_moves_minimally() {
        let nearest = |start, current| AxisAlign::Nearest.offset(start, 50.0, 200.0, 0.0, current);
        // Fully visible: unchanged.
        assert_eq!(nearest(120.0, 100.0), 100.0);
        // Before: align start.
        assert_eq!(nearest(40.0, 100.0), 40.0);
        // After: align end.
        assert_eq!(nearest(290.0, 100.0), 140.0);
        // Too large: align start.
        assert_eq!(AxisAlign::Nearest.offset(400.0, 500.0, 200.0, 0.0, 0.0), 400.0);
    }

    #[test]
    fn presets_map_rows_to_vertical() {
        assert_eq!(Alignment::TOP_END.horizontal, AxisAlign::End);
        assert_eq!(Alignment::TOP_END.vertical, AxisAlign::Start);
        assert_eq!(Alignment::default(), Alignment::CENTER);
    }
}
