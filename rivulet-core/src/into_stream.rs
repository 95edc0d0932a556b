// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::Stream;

/// Anything that can be turned into a stream.
///
/// Operators taking a second input accept `IntoStream` so that both plain streams and
/// stream-producing handles (such as a broadcast [`Subscription`](crate::Subscription))
/// can be passed directly.
pub trait IntoStream {
    type Item;
    type Stream: Stream<Item = Self::Item>;

    fn into_stream(self) -> Self::Stream;
}

impl<S> IntoStream for S
where
    S: Stream,
{
    type Item = S::Item;
    type Stream = S;

    fn into_stream(self) -> Self::Stream {
        self
    }
}
