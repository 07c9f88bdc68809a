// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Guide dimensions in logical units and whole pixels.

use kurbo::Size;

/// Sizes of the guide's building blocks in logical units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgramGuideDimensions {
    /// Width of one hour on the timeline.
    pub timeline_hour_width: f64,
    /// Height of the timeline row.
    pub timeline_height: f64,
    /// Width of the channel column.
    pub channel_width: f64,
    /// Height of one channel row.
    pub channel_height: f64,
    /// Width of the current time line.
    pub current_time_width: f64,
}

impl Default for ProgramGuideDimensions {
    fn default() -> Self {
        Self {
            timeline_hour_width: 128.0,
            timeline_height: 32.0,
            channel_width: 64.0,
            channel_height: 64.0,
            current_time_width: 2.0,
        }
    }
}

impl ProgramGuideDimensions {
    /// Converts to whole pixels at `scale` pixels per logical unit.
    ///
    /// Each length is scaled, then rounded half away from zero.
    #[must_use]
    pub fn to_px(&self, scale: f64) -> PxDimensions {
        let timeline = (Size::new(self.timeline_hour_width, self.timeline_height) * scale).round();
        let channel = (Size::new(self.channel_width, self.channel_height) * scale).round();
        let current_time = (Size::new(self.current_time_width, 0.0) * scale).round();
        PxDimensions {
            timeline_hour_width: timeline.width,
            timeline_height: timeline.height,
            channel_width: channel.width,
            channel_height: channel.height,
            current_time_width: current_time.width,
        }
    }
}

/// [`ProgramGuideDimensions`] resolved to whole pixels.
///
/// Item geometry is computed from these values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PxDimensions {
    /// Width of one hour on the timeline.
    pub timeline_hour_width: f64,
    /// Height of the timeline row.
    pub timeline_height: f64,
    /// Width of the channel column.
    pub channel_width: f64,
    /// Height of one channel row.
    pub channel_height: f64,
    /// Width of the current time line.
    pub current_time_width: f64,
}

impl Default for PxDimensions {
    fn default() -> Self {
        ProgramGuideDimensions::default().to_px(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::{ProgramGuideDimensions, PxDimensions};

    #[test]
    fn unit_scale_keeps_defaults() {
        let px = ProgramGuideDimensions::default().to_px(1.0);
        assert_eq!(
            px,
            PxDimensions {
                timeline_hour_width: 128.0,
                timeline_height: 32.0,
                channel_width: 64.0,
                channel_height: 64.0,
                current_time_width: 2.0,
            }
        );
        assert_eq!(PxDimensions::default(), px);
    }

    #[test]
    fn scaled_lengths_round_to_whole_pixels() {
        let px = ProgramGuideDimensions::default().to_px(1.33);
        // 170.24, 42.56, 85.12, 85.12, 2.66
        assert_eq!(px.timeline_hour_width, 170.0);
        assert_eq!(px.timeline_height, 43.0);
        assert_eq!(px.channel_width, 85.0);
        assert_eq!(px.channel_height, 85.0);
        assert_eq!(px.current_time_width, 3.0);

        let half = ProgramGuideDimensions {
            current_time_width: 1.0,
            ..ProgramGuideDimensions::default()
        }
        .to_px(2.5);
        assert_eq!(half.current_time_width, 3.0);
        assert_eq!(half.timeline_hour_width, 320.0);
    }
}
