// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Concurrent merge engine.
//!
//! Fans several independent inputs into one stream of origin-tagged values. Each input is
//! driven by its own task, so a slow input never holds back a fast one: items appear in the
//! order they are produced. Within one input the order is preserved; across inputs nothing
//! is promised beyond arrival order.
//!
//! - [`MergeTaggedExt::merge_tagged`]: two inputs of possibly different types, tagged
//!   [`Tagged2::First`] / [`Tagged2::Second`].
//! - [`merge3`]: three inputs, tagged with [`Tagged3`].
//! - [`merge_indexed`]: any number of inputs of one type, tagged with their position.
//!
//! The first failure of any input becomes the merged stream's last item, and the remaining
//! inputs are cancelled. Dropping the merged stream cancels all of them as well.
//!
//! # Examples
//!
//! ```rust
//! use futures::{stream, StreamExt};
//! use rivulet_core::StreamItem;
//! use rivulet_stream::merge::{MergeTaggedExt, Tagged2};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let numbers = stream::iter(vec![StreamItem::Value(1)]);
//! let words = stream::iter(vec![StreamItem::Value("one")]);
//!
//! let mut merged: Vec<_> = numbers
//!     .merge_tagged(words)
//!     .map(|item| item.unwrap())
//!     .collect()
//!     .await;
//! merged.sort_by_key(|tagged| matches!(tagged, Tagged2::Second(_)));
//!
//! assert_eq!(merged, vec![Tagged2::First(1), Tagged2::Second("one")]);
//! # }
//! ```

mod merged_stream;
mod tagged;

pub use merged_stream::MergedStream;
pub use tagged::{Indexed, Tagged2, Tagged3};

pub(crate) use merged_stream::BoxedInput;
use futures::{Stream, StreamExt};
use rivulet_core::{IntoStream, StreamItem};

/// Merges this stream with another one, tagging every item with its origin.
pub trait MergeTaggedExt<A>: Stream<Item = StreamItem<A>> + Sized {
    fn merge_tagged<IS, B>(self, other: IS) -> MergedStream<Tagged2<A, B>>
    where
        IS: IntoStream<Item = StreamItem<B>>,
        IS::Stream: Send + 'static,
        B: Send + 'static;
}

impl<S, A> MergeTaggedExt<A> for S
where
    S: Stream<Item = StreamItem<A>> + Send + 'static,
    A: Send + 'static,
{
    fn merge_tagged<IS, B>(self, other: IS) -> MergedStream<Tagged2<A, B>>
    where
        IS: IntoStream<Item = StreamItem<B>>,
        IS::Stream: Send + 'static,
        B: Send + 'static,
    {
        MergedStream::new(vec![
            tag(self, Tagged2::First),
            tag(other.into_stream(), Tagged2::Second),
        ])
    }
}

/// Merges three inputs of possibly different types.
pub fn merge3<SA, SB, SC, A, B, C>(a: SA, b: SB, c: SC) -> MergedStream<Tagged3<A, B, C>>
where
    SA: IntoStream<Item = StreamItem<A>>,
    SA::Stream: Send + 'static,
    SB: IntoStream<Item = StreamItem<B>>,
    SB::Stream: Send + 'static,
    SC: IntoStream<Item = StreamItem<C>>,
    SC::Stream: Send + 'static,
    A: Send + 'static,
    B: Send + 'static,
    C: Send + 'static,
{
    MergedStream::new(vec![
        tag(a.into_stream(), Tagged3::First),
        tag(b.into_stream(), Tagged3::Second),
        tag(c.into_stream(), Tagged3::Third),
    ])
}

/// Merges any number of inputs of the same type, tagging items with the input's position.
///
/// One input yields its own items tagged with origin `0`; no inputs yields an empty stream.
pub fn merge_indexed<I, S, T>(inputs: I) -> MergedStream<Indexed<T>>
where
    I: IntoIterator<Item = S>,
    S: IntoStream<Item = StreamItem<T>>,
    S::Stream: Send + 'static,
    T: Send + 'static,
{
    let inputs = inputs
        .into_iter()
        .enumerate()
        .map(|(origin, input)| tag(input.into_stream(), move |payload| Indexed::new(origin, payload)))
        .collect();
    MergedStream::new(inputs)
}

fn tag<S, T, U, F>(stream: S, f: F) -> BoxedInput<U>
where
    S: Stream<Item = StreamItem<T>> + Send + 'static,
    F: Fn(T) -> U + Send + 'static,
    U: Send + 'static,
{
    Box::pin(stream.map(move |item| item.map(&f)))
}
