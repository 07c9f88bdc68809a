// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Errors reported by the plane's item registry and scroll state.
///
/// The index variants indicate a logic bug in the caller (an index that was
/// never declared). [`PlaneError::Unbound`] means a layout pass has not run yet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PlaneError {
    /// A global item index at or past the total item count.
    #[error("item index {index} is out of range for {count} items")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Total number of declared items.
        count: usize,
    },
    /// A local index at or past the item count of its interval.
    #[error("local index {index} is out of range for interval {interval} with {count} items")]
    LocalIndexOutOfRange {
        /// The interval the index was resolved against.
        interval: usize,
        /// The offending local index.
        index: usize,
        /// Number of items in that interval.
        count: usize,
    },
    /// An interval number at or past the number of declared intervals.
    #[error("interval {interval} is out of range for {count} intervals")]
    IntervalOutOfRange {
        /// The offending interval number.
        interval: usize,
        /// Number of declared intervals.
        count: usize,
    },
    /// The scroll state has not been bound to a layout yet.
    #[error("scroll state has not been bound to a layout yet")]
    Unbound,
}
