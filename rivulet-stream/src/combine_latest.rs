// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Combine-latest operators.
//!
//! Each input gets a latest-value slot. Nothing is emitted until every slot holds a value;
//! from then on, every update from any input emits the current snapshot of all slots.
//!
//! # Examples
//!
//! ```rust
//! use futures::StreamExt;
//! use rivulet_core::{BroadcastSource, StreamItem};
//! use rivulet_stream::CombineLatestExt;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let width = BroadcastSource::with_value(2);
//! let height = BroadcastSource::with_value(3);
//!
//! let mut area = Box::pin(
//!     width
//!         .subscribe()
//!         .combine_latest(height.subscribe())
//!         .map(|item| item.map(|(w, h)| w * h)),
//! );
//!
//! assert_eq!(area.next().await, Some(StreamItem::Value(6)));
//!
//! height.set(5);
//! assert_eq!(area.next().await, Some(StreamItem::Value(10)));
//! # }
//! ```

use crate::merge::{merge_indexed, BoxedInput, Indexed, MergeTaggedExt, Tagged2};
use futures::future::ready;
use futures::{Stream, StreamExt};
use rivulet_core::{IntoStream, StreamItem};

pub trait CombineLatestExt<A>: Stream<Item = StreamItem<A>> + Sized {
    /// Pairs the latest values of this stream and `other`.
    fn combine_latest<IS, B>(self, other: IS) -> impl Stream<Item = StreamItem<(A, B)>> + Send
    where
        IS: IntoStream<Item = StreamItem<B>>,
        IS::Stream: Send + 'static,
        B: Clone + Send + 'static;

    /// Combines the latest values of this stream and every stream in `others`.
    ///
    /// Snapshots are ordered like the inputs: this stream first, then `others` in order.
    fn combine_latest_all<IS>(self, others: Vec<IS>) -> impl Stream<Item = StreamItem<Vec<A>>> + Send
    where
        IS: IntoStream<Item = StreamItem<A>>,
        IS::Stream: Send + 'static;
}

impl<S, A> CombineLatestExt<A> for S
where
    S: Stream<Item = StreamItem<A>> + Send + 'static,
    A: Clone + Send + 'static,
{
    fn combine_latest<IS, B>(self, other: IS) -> impl Stream<Item = StreamItem<(A, B)>> + Send
    where
        IS: IntoStream<Item = StreamItem<B>>,
        IS::Stream: Send + 'static,
        B: Clone + Send + 'static,
    {
        let mut first: Option<A> = None;
        let mut second: Option<B> = None;

        self.merge_tagged(other).filter_map(move |item| {
            let output = match item {
                StreamItem::Value(Tagged2::First(a)) => {
                    first = Some(a);
                    first.clone().zip(second.clone()).map(StreamItem::Value)
                }
                StreamItem::Value(Tagged2::Second(b)) => {
                    second = Some(b);
                    first.clone().zip(second.clone()).map(StreamItem::Value)
                }
                StreamItem::Error(error) => Some(StreamItem::Error(error)),
            };
            ready(output)
        })
    }

    fn combine_latest_all<IS>(self, others: Vec<IS>) -> impl Stream<Item = StreamItem<Vec<A>>> + Send
    where
        IS: IntoStream<Item = StreamItem<A>>,
        IS::Stream: Send + 'static,
    {
        let mut inputs: Vec<BoxedInput<A>> = Vec::with_capacity(others.len() + 1);
        inputs.push(Box::pin(self));
        inputs.extend(
            others
                .into_iter()
                .map(|other| Box::pin(other.into_stream()) as BoxedInput<A>),
        );

        let mut slots = LatestSlots::new(inputs.len());
        merge_indexed(inputs).filter_map(move |item| {
            ready(match item {
                StreamItem::Value(Indexed { origin, payload }) => {
                    slots.insert(origin, payload);
                    slots.snapshot().map(StreamItem::Value)
                }
                StreamItem::Error(error) => Some(StreamItem::Error(error)),
            })
        })
    }
}

/// One latest-value slot per input.
#[derive(Debug, Clone)]
struct LatestSlots<T> {
    values: Vec<Option<T>>,
}

impl<T: Clone> LatestSlots<T> {
    fn new(size: usize) -> Self {
        Self {
            values: vec![None; size],
        }
    }

    fn insert(&mut self, index: usize, value: T) {
        if let Some(slot) = self.values.get_mut(index) {
            *slot = Some(value);
        }
    }

    /// All values, once every slot is filled.
    fn snapshot(&self) -> Option<Vec<T>> {
        self.values.iter().cloned().collect()
    }
}
