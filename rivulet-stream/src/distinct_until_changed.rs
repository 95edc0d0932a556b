// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Distinct-until-changed operators.
//!
//! Drop a value when it equals the previously *emitted* value. The first value is always
//! emitted. Errors pass through and end the stream.
//!
//! - [`DistinctUntilChangedExt::distinct_until_changed`] compares with `PartialEq`.
//! - [`DistinctUntilChangedByExt::distinct_until_changed_by`] takes a comparator that returns
//!   `true` when two values are considered equal.
//!
//! # Examples
//!
//! ```rust
//! use futures::{stream, StreamExt};
//! use rivulet_core::StreamItem;
//! use rivulet_stream::DistinctUntilChangedExt;
//!
//! # futures::executor::block_on(async {
//! let readings = stream::iter([1, 1, 2, 2, 2, 1].map(StreamItem::Value));
//!
//! let distinct: Vec<_> = readings
//!     .distinct_until_changed()
//!     .map(|item| item.unwrap())
//!     .collect()
//!     .await;
//!
//! assert_eq!(distinct, vec![1, 2, 1]);
//! # });
//! ```

use crate::terminate_on_error::TerminateOnErrorExt;
use futures::future::ready;
use futures::{Stream, StreamExt};
use rivulet_core::StreamItem;

pub trait DistinctUntilChangedExt<T>: Stream<Item = StreamItem<T>> + Sized
where
    T: Clone + PartialEq,
{
    fn distinct_until_changed(self) -> impl Stream<Item = StreamItem<T>> + Send;
}

impl<S, T> DistinctUntilChangedExt<T> for S
where
    S: Stream<Item = StreamItem<T>> + Send,
    T: Clone + PartialEq + Send,
{
    fn distinct_until_changed(self) -> impl Stream<Item = StreamItem<T>> + Send {
        self.distinct_until_changed_by(|current: &T, previous: &T| current == previous)
    }
}

pub trait DistinctUntilChangedByExt<T>: Stream<Item = StreamItem<T>> + Sized
where
    T: Clone,
{
    fn distinct_until_changed_by<F>(self, compare: F) -> impl Stream<Item = StreamItem<T>> + Send
    where
        F: FnMut(&T, &T) -> bool + Send;
}

impl<S, T> DistinctUntilChangedByExt<T> for S
where
    S: Stream<Item = StreamItem<T>> + Send,
    T: Clone + Send,
{
    fn distinct_until_changed_by<F>(self, mut compare: F) -> impl Stream<Item = StreamItem<T>> + Send
    where
        F: FnMut(&T, &T) -> bool + Send,
    {
        let mut last_emitted: Option<T> = None;

        self.terminate_on_error().filter_map(move |item| {
            ready(match item {
                StreamItem::Value(value) => {
                    let is_duplicate = last_emitted
                        .as_ref()
                        .is_some_and(|previous| compare(&value, previous));
                    if is_duplicate {
                        None
                    } else {
                        last_emitted = Some(value.clone());
                        Some(StreamItem::Value(value))
                    }
                }
                StreamItem::Error(error) => Some(StreamItem::Error(error)),
            })
        })
    }
}
