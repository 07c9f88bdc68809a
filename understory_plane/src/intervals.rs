// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Declared item batches and the flat global index space over them.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::fmt;

use crate::{ItemGeometry, PlaneError};

/// Identity of an item across content declarations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ItemKey {
    /// No key function was declared; the global index stands in.
    Positional(usize),
    /// Key returned by the interval's key function.
    Stable(u64),
}

/// Tag for items whose rendered content is structurally interchangeable.
///
/// Hosts may reuse the content of one item for another with the same tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ContentType(pub u64);

type GeometryFn = dyn Fn(usize) -> ItemGeometry;
type KeyFn = dyn Fn(usize) -> u64;
type ContentTypeFn = dyn Fn(usize) -> ContentType;
type RenderFn<R> = dyn Fn(usize) -> R;

/// A batch of `count` items sharing one geometry, key, content type, and render function.
///
/// All functions receive the local index `0..count`.
pub struct ItemInterval<R> {
    count: usize,
    geometry: Box<GeometryFn>,
    key: Option<Box<KeyFn>>,
    content_type: Option<Box<ContentTypeFn>>,
    render: Box<RenderFn<R>>,
}

impl<R> ItemInterval<R> {
    /// Declares `count` items.
    pub fn new(
        count: usize,
        geometry: impl Fn(usize) -> ItemGeometry + 'static,
        render: impl Fn(usize) -> R + 'static,
    ) -> Self {
        Self {
            count,
            geometry: Box::new(geometry),
            key: None,
            content_type: None,
            render: Box::new(render),
        }
    }

    /// Declares one item per element of `items`.
    ///
    /// Key and content type functions still take the local index; capture a
    /// clone of `items` to look elements up.
    pub fn from_items<T: 'static>(
        items: impl Into<Rc<[T]>>,
        layout: impl Fn(&T) -> ItemGeometry + 'static,
        render: impl Fn(&T) -> R + 'static,
    ) -> Self {
        let items: Rc<[T]> = items.into();
        let for_render = Rc::clone(&items);
        Self::new(
            items.len(),
            move |i| layout(&items[i]),
            move |i| render(&for_render[i]),
        )
    }

    /// Adds a stable key function.
    #[must_use]
    pub fn with_key(mut self, key: impl Fn(usize) -> u64 + 'static) -> Self {
        self.key = Some(Box::new(key));
        self
    }

    /// Adds a content type function.
    #[must_use]
    pub fn with_content_type(
        mut self,
        content_type: impl Fn(usize) -> ContentType + 'static,
    ) -> Self {
        self.content_type = Some(Box::new(content_type));
        self
    }

    /// Number of items in the batch.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Geometry of the item at `local`.
    ///
    /// `local` must be below [`ItemInterval::count`].
    #[must_use]
    pub fn geometry(&self, local: usize) -> ItemGeometry {
        (self.geometry)(local)
    }
}

impl<R> fmt::Debug for ItemInterval<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ItemInterval")
            .field("count", &self.count)
            .field("has_key", &self.key.is_some())
            .field("has_content_type", &self.content_type.is_some())
            .finish_non_exhaustive()
    }
}

/// Ordered item batches with a flat index space.
///
/// Global indices follow declaration order: the first interval covers
/// `0..count0`, the next `count0..count0 + count1`, and so on. The list is
/// immutable; redeclaring content means building a new list.
pub struct IntervalList<R> {
    intervals: Vec<ItemInterval<R>>,
    // Global index of each interval's first item.
    starts: Vec<usize>,
    len: usize,
}

impl<R> IntervalList<R> {
    /// Builds the list from intervals in declaration order.
    pub fn new(intervals: impl IntoIterator<Item = ItemInterval<R>>) -> Self {
        let intervals: Vec<_> = intervals.into_iter().collect();
        let mut starts = Vec::with_capacity(intervals.len());
        let mut len = 0_usize;
        for interval in &intervals {
            starts.push(len);
            len += interval.count;
        }
        Self {
            intervals,
            starts,
            len,
        }
    }

    /// Total number of items across all intervals.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no items are declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of declared intervals, including empty ones.
    #[must_use]
    pub fn interval_count(&self) -> usize {
        self.intervals.len()
    }

    /// Returns the interval at position `interval` in declaration order.
    #[must_use]
    pub fn interval(&self, interval: usize) -> Option<&ItemInterval<R>> {
        self.intervals.get(interval)
    }

    /// Resolves a global index to `(interval, local index)`.
    pub fn locate(&self, index: usize) -> Result<(usize, usize), PlaneError> {
        if index >= self.len {
            return Err(PlaneError::IndexOutOfRange {
                index,
                count: self.len,
            });
        }
        // The last interval starting at or before `index` contains it; empty
        // intervals share their start with the next one and are skipped.
        let interval = self.starts.partition_point(|&start| start <= index) - 1;
        Ok((interval, index - self.starts[interval]))
    }

    /// Global index of the item at `local` within `interval`.
    pub fn global_index(&self, interval: usize, local: usize) -> Result<usize, PlaneError> {
        let batch = self
            .intervals
            .get(interval)
            .ok_or(PlaneError::IntervalOutOfRange {
                interval,
                count: self.intervals.len(),
            })?;
        if local >= batch.count {
            return Err(PlaneError::LocalIndexOutOfRange {
                interval,
                index: local,
                count: batch.count,
            });
        }
        Ok(self.starts[interval] + local)
    }

    /// Geometry of the item at a global index.
    pub fn geometry(&self, index: usize) -> Result<ItemGeometry, PlaneError> {
        let (interval, local) = self.locate(index)?;
        Ok(self.intervals[interval].geometry(local))
    }

    /// Key of the item at a global index.
    ///
    /// Items from intervals without a key function get [`ItemKey::Positional`].
    pub fn key_of(&self, index: usize) -> Result<ItemKey, PlaneError> {
        let (interval, local) = self.locate(index)?;
        Ok(match &self.intervals[interval].key {
            Some(key) => ItemKey::Stable(key(local)),
            None => ItemKey::Positional(index),
        })
    }

    /// Content type of the item at a global index, or `None` if its interval declares none.
    pub fn content_type_of(&self, index: usize) -> Result<Option<ContentType>, PlaneError> {
        let (interval, local) = self.locate(index)?;
        Ok(self.intervals[interval]
            .content_type
            .as_ref()
            .map(|content_type| content_type(local)))
    }

    /// Invokes the render function of the item at a global index.
    pub fn render(&self, index: usize) -> Result<R, PlaneError> {
        let (interval, local) = self.locate(index)?;
        Ok((self.intervals[interval].render)(local))
    }

    /// Geometry of every item in global index order.
    pub fn geometries(&self) -> impl Iterator<Item = ItemGeometry> + '_ {
        self.intervals
            .iter()
            .flat_map(|interval| (0..interval.count).map(|local| interval.geometry(local)))
    }
}

impl<R> Default for IntervalList<R> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<R> FromIterator<ItemInterval<R>> for IntervalList<R> {
    fn from_iter<I: IntoIterator<Item = ItemInterval<R>>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<R> fmt::Debug for IntervalList<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntervalList")
            .field("intervals", &self.intervals)
            .field("len", &self.len)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::{ContentType, IntervalList, ItemInterval, ItemKey};
    use crate::{ItemGeometry, PlaneError};
    use alloc::vec;
    use alloc::vec::Vec;

    fn row(count: usize, y: f64) -> ItemInterval<usize> {
        ItemInterval::new(
            count,
            move |i| ItemGeometry::new(i as f64 * 10.0, y, 10.0, 10.0),
            |i| i,
        )
    }

    #[test]
    fn locate_and_global_index_are_inverse() {
        let list = IntervalList::new([row(3, 0.0), row(0, 10.0), row(4, 20.0), row(1, 30.0)]);
        assert_eq!(list.len(), 8);
        assert_eq!(list.interval_count(), 4);
        for index in 0..list.len() {
            let (interval, local) = list.locate(index).unwrap();
            assert_ne!(interval, 1, "empty interval never owns an index");
            assert_eq!(list.global_index(interval, local), Ok(index));
        }
        assert_eq!(list.locate(3), Ok((2, 0)));
        assert_eq!(list.locate(7), Ok((3, 0)));
    }

    #[test]
    fn out_of_range_indices_fail() {
        let list = IntervalList::new([row(2, 0.0), row(0, 0.0)]);
        assert_eq!(
            list.locate(2),
            Err(PlaneError::IndexOutOfRange { index: 2, count: 2 })
        );
        assert_eq!(
            list.global_index(1, 0),
            Err(PlaneError::LocalIndexOutOfRange {
                interval: 1,
                index: 0,
                count: 0
            })
        );
        assert_eq!(
            list.global_index(5, 0),
            Err(PlaneError::IntervalOutOfRange {
                interval: 5,
                count: 2
            })
        );
        assert!(IntervalList::<()>::default().locate(0).is_err());
    }

    #[test]
    fn keys_fall_back_to_position() {
        let list = IntervalList::new([
            row(2, 0.0),
            row(2, 10.0)
                .with_key(|i| 100 + i as u64)
                .with_content_type(|_| ContentType(7)),
        ]);
        assert_eq!(list.key_of(1), Ok(ItemKey::Positional(1)));
        assert_eq!(list.key_of(3), Ok(ItemKey::Stable(101)));
        assert_eq!(list.content_type_of(0), Ok(None));
        assert_eq!(list.content_type_of(2), Ok(Some(ContentType(7))));
        assert_eq!(list.render(3), Ok(1));
    }

    #[test]
    fn item_lists_drive_geometry_and_render() {
        let widths = vec![5.0, 15.0, 25.0];
        let list = IntervalList::new([ItemInterval::from_items(
            widths,
            |w: &f64| ItemGeometry::new(0.0, 0.0, *w, 1.0),
            |w: &f64| *w * 2.0,
        )]);
        let rendered: Vec<_> = (0..list.len()).map(|i| list.render(i).unwrap()).collect();
        assert_eq!(rendered, [10.0, 30.0, 50.0]);
        assert_eq!(list.geometries().count(), 3);
        assert_eq!(
            list.geometry(2).unwrap(),
            ItemGeometry::new(0.0, 0.0, 25.0, 1.0)
        );
    }
}
