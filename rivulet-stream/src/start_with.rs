// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Start-with operator that emits an initial value before the source.

use crate::terminate_on_error::TerminateOnErrorExt;
use futures::future::ready;
use futures::stream::{once, Stream, StreamExt};
use rivulet_core::StreamItem;

pub trait StartWithExt<T>: Stream<Item = StreamItem<T>> + Sized {
    /// Emits `initial`, then every item of the source, including its failure.
    fn start_with(self, initial: T) -> impl Stream<Item = StreamItem<T>> + Send;
}

impl<S, T> StartWithExt<T> for S
where
    S: Stream<Item = StreamItem<T>> + Send,
    T: Send,
{
    fn start_with(self, initial: T) -> impl Stream<Item = StreamItem<T>> + Send {
        once(ready(StreamItem::Value(initial)))
            .chain(self)
            .terminate_on_error()
    }
}
