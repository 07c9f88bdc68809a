// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_program_guide --heading-base-level=0

//! Understory Program Guide: an electronic program guide laid out on a virtualized plane.
//!
//! A guide shows programs in a grid of channel rows and timeline columns:
//!
//! - [`Program`]s span their start and end hours on their channel's row.
//! - [`Channel`] headers form a column that stays put when scrolling sideways.
//! - [`Timeline`] ticks form a row that stays put when scrolling up and down.
//! - A [`CurrentTime`] line spans the viewport height at the current hour.
//! - A [`TopCorner`] cell never moves.
//!
//! Content is declared as a [`GuideContent`] value of [`GuideInterval`]s, and
//! sized by [`ProgramGuideDimensions`]. A [`ProgramGuide`] turns every item into
//! plane geometry, and its layout pass places the visible items. A
//! [`ProgramGuideState`] holds the scroll offset and scrolls to programs,
//! channels, timeline ticks, or the current time, using
//! [`ProgramGuidePositions`] with guide indices mapped by an [`IndexMapper`].
//!
//! Windowing, motion, and gestures come from [`understory_plane`].
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use understory_program_guide::{
//!     Channel, GuideContent, GuideInterval, Program, ProgramGuide, ProgramGuideDimensions,
//!     ProgramGuideState, Timeline, VerticalAlign,
//! };
//!
//! // Three channels airing hour-long programs from 6:00 to 18:00.
//! let content = GuideContent::new()
//!     .guide_start_hour(6.0)
//!     .programs(GuideInterval::new(
//!         36,
//!         |i| Program::new(i / 12, 6.0 + (i % 12) as f64, 7.0 + (i % 12) as f64),
//!         |i| format!("program {i}"),
//!     ))
//!     .channels(GuideInterval::new(3, Channel::new, |i| format!("channel {i}")))
//!     .timeline(GuideInterval::new(
//!         12,
//!         |i| Timeline::new(6.0 + i as f64, 7.0 + i as f64),
//!         |i| format!("{}:00", 6 + i),
//!     ));
//! let guide = ProgramGuide::new(content, ProgramGuideDimensions::default(), 1.0);
//!
//! let mut state = ProgramGuideState::new();
//! let viewport = Size::new(400.0, 160.0);
//! let layout = guide.layout(&mut state, viewport);
//! assert!(layout.items.iter().any(|p| guide.render(p.index).unwrap() == "channel 0"));
//!
//! // Bring the second channel's row right below the timeline.
//! state.snap_to_channel(1, VerticalAlign::Top).unwrap();
//! assert_eq!(state.offset(), Point::new(0.0, 64.0));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod content;
mod dimensions;
mod guide;
mod index_mapper;
mod item;
mod positions;
mod state;

pub use content::{GuideContent, GuideInterval};
pub use dimensions::{ProgramGuideDimensions, PxDimensions};
pub use guide::ProgramGuide;
pub use index_mapper::IndexMapper;
pub use item::{Channel, CurrentTime, GuideItem, Program, Timeline, TopCorner};
pub use positions::{HorizontalAlign, ProgramGuidePositions, VerticalAlign};
pub use state::ProgramGuideState;

pub use understory_plane;
