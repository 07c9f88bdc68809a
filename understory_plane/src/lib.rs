// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_plane --heading-base-level=0

//! Understory Plane: a virtualized, scrollable 2D surface of absolutely positioned items.
//!
//! Items are rectangles on an unbounded plane. Only the ones intersecting the
//! viewport are placed on each layout pass, and items can be locked on either
//! axis so they stay put while the rest of the plane scrolls (sticky headers).
//!
//! The core pieces are:
//!
//! - [`ItemInterval`] / [`IntervalList`]: batches of items declared with a geometry
//!   function, optional key and content type functions, and a render function,
//!   plus a flat global index space over all batches.
//! - [`ItemGeometry`]: origin, [`Dimension`]s (absolute or a fraction of the
//!   viewport), and [`Lock`] flags.
//! - [`GeometryCache`]: every item's geometry, resolved once per content
//!   declaration, and the scrollable content extent.
//! - [`visible_items`]: viewport windowing, a pure function of the cache, the
//!   scroll offset, and the viewport size.
//! - [`PositionResolver`]: the scroll offset that aligns an item
//!   ([`Alignment`], [`AxisAlign`]) inside the padded viewport.
//! - [`PlaneState`]: the two scroll offsets with drag, fling, animate, snap, and
//!   stop, clamped to the legal range. Motions advance per frame via
//!   [`PlaneState::advance`].
//! - [`PlaneGestures`]: feeds pointer samples into a [`PlaneState`].
//! - [`Plane`]: runs a layout pass, binding the state and windowing in order.
//!
//! This crate does not know about widgets or rendering. The render function's
//! output type `R` is opaque; hosts call [`Plane::render`] for the placed items.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Size, Vec2};
//! use understory_plane::{
//!     IntervalList, ItemGeometry, ItemInterval, Lock, Plane, PlaneConfig, PlaneState,
//! };
//!
//! // A row of 100 wide cells under a sticky header.
//! let cells = ItemInterval::new(
//!     50,
//!     |i| ItemGeometry::new(i as f64 * 100.0, 20.0, 100.0, 80.0),
//!     |i| i,
//! );
//! let header = ItemInterval::new(
//!     1,
//!     |_| ItemGeometry::new(0.0, 0.0, 300.0, 20.0).locked(Lock::HORIZONTAL),
//!     |_| usize::MAX,
//! );
//! let plane = Plane::new(IntervalList::new([cells, header]), PlaneConfig::default());
//!
//! let mut state = PlaneState::new();
//! let viewport = Size::new(300.0, 100.0);
//! let layout = plane.layout(&mut state, viewport);
//! assert_eq!(layout.items.len(), 4);
//!
//! // Drag the content left by 250: cells 2..=5 are visible, the header stays.
//! state.drag_by(Vec2::new(-250.0, 0.0));
//! let layout = plane.layout(&mut state, viewport);
//! let visible: Vec<_> = layout.items.iter().map(|p| p.index).collect();
//! assert_eq!(visible, [2, 3, 4, 5, 50]);
//! assert_eq!(layout.items[4].rect.x0, 0.0);
//! ```
//!
//! The crate's own code is `no_std` and uses `alloc`; scroll motion comes from
//! `understory_motion`, which uses `std`.

#![no_std]

extern crate alloc;

mod align;
mod cache;
mod error;
mod geometry;
mod gesture;
mod grid;
mod intervals;
mod plane;
mod resolver;
mod span;
mod state;
mod window;

pub use align::{Alignment, AxisAlign};
pub use cache::GeometryCache;
pub use error::PlaneError;
pub use geometry::{Dimension, ItemGeometry, Lock};
pub use gesture::PlaneGestures;
pub use intervals::{ContentType, IntervalList, ItemInterval, ItemKey};
pub use plane::{Plane, PlaneConfig, PlaneLayout};
pub use resolver::PositionResolver;
pub use state::{AxisPhase, PlaneState, SavedOffset, ScrollMotion};
pub use window::{Placement, visible_items};

/// Re-exported so hosts can configure motions without depending on it directly.
pub use understory_motion;
