// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Extension methods turning channel receivers into rivulet streams.

use futures::channel::mpsc::UnboundedReceiver;
use futures::{Stream, StreamExt};
use rivulet_core::StreamItem;

/// Extension trait for `UnboundedReceiver` to create rivulet streams.
pub trait UnboundedReceiverExt<T> {
    /// Wraps every received value in [`StreamItem::Value`].
    ///
    /// The stream ends once every sender is dropped.
    ///
    /// ```rust
    /// use futures::channel::mpsc;
    /// use futures::StreamExt;
    /// use rivulet::prelude::*;
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let (tx, rx) = mpsc::unbounded();
    /// let (other_tx, other) = mpsc::unbounded();
    ///
    /// let mut pairs = Box::pin(
    ///     rx.into_rivulet_stream()
    ///         .combine_latest(other.into_rivulet_stream()),
    /// );
    ///
    /// tx.unbounded_send("temperature").unwrap();
    /// other_tx.unbounded_send(21).unwrap();
    ///
    /// assert_eq!(pairs.next().await, Some(StreamItem::Value(("temperature", 21))));
    /// # }
    /// ```
    fn into_rivulet_stream(self) -> impl Stream<Item = StreamItem<T>> + Send + Unpin;
}

impl<T: Send + 'static> UnboundedReceiverExt<T> for UnboundedReceiver<T> {
    fn into_rivulet_stream(self) -> impl Stream<Item = StreamItem<T>> + Send + Unpin {
        self.map(StreamItem::Value)
    }
}
