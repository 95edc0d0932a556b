// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! With-latest-from operator.
//!
//! Emits one `(primary, secondary)` pair per primary value, using the most recent secondary
//! value. Primary values arriving before the secondary's first value are dropped. The
//! secondary alone never triggers an emission.
//!
//! The stream completes when the primary completes, regardless of the secondary. A failure
//! of either input is forwarded and ends the stream.
//!
//! Both inputs are polled by the operator itself, secondary first: every secondary value
//! that is already available when a primary value arrives is applied before that primary
//! value is paired. A value the secondary holds when the operator starts (such as a broadcast
//! subscription's replayed value) is therefore never missed by a primary value buffered at
//! the same moment, on any runtime.
//!
//! # Examples
//!
//! ```rust
//! use futures::StreamExt;
//! use rivulet_core::{BroadcastSource, StreamItem};
//! use rivulet_stream::WithLatestFromExt;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let clicks = BroadcastSource::new();
//! let position = BroadcastSource::with_value((10, 20));
//!
//! let mut located = Box::pin(clicks.subscribe().with_latest_from(position.subscribe()));
//!
//! clicks.set("click");
//!
//! assert_eq!(located.next().await, Some(StreamItem::Value(("click", (10, 20)))));
//! # }
//! ```

use core::pin::Pin;
use core::task::{Context, Poll};
use futures::stream::{FusedStream, Stream};
use pin_project::pin_project;
use rivulet_core::{IntoStream, StreamItem};

pub trait WithLatestFromExt<A>: Stream<Item = StreamItem<A>> + Sized {
    fn with_latest_from<IS, B>(self, other: IS) -> impl Stream<Item = StreamItem<(A, B)>> + Send
    where
        IS: IntoStream<Item = StreamItem<B>>,
        IS::Stream: Send + 'static,
        B: Clone + Send + 'static;
}

impl<S, A> WithLatestFromExt<A> for S
where
    S: Stream<Item = StreamItem<A>> + Send + 'static,
    A: Send + 'static,
{
    fn with_latest_from<IS, B>(self, other: IS) -> impl Stream<Item = StreamItem<(A, B)>> + Send
    where
        IS: IntoStream<Item = StreamItem<B>>,
        IS::Stream: Send + 'static,
        B: Clone + Send + 'static,
    {
        WithLatestFrom {
            primary: self,
            secondary: other.into_stream(),
            latest: None,
            secondary_done: false,
            terminated: false,
        }
    }
}

#[pin_project]
#[must_use = "streams do nothing unless polled"]
struct WithLatestFrom<P, S, B> {
    #[pin]
    primary: P,
    #[pin]
    secondary: S,
    latest: Option<B>,
    secondary_done: bool,
    terminated: bool,
}

impl<P, S, A, B> Stream for WithLatestFrom<P, S, B>
where
    P: Stream<Item = StreamItem<A>>,
    S: Stream<Item = StreamItem<B>>,
    B: Clone,
{
    type Item = StreamItem<(A, B)>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();
        if *this.terminated {
            return Poll::Ready(None);
        }

        loop {
            while !*this.secondary_done {
                match this.secondary.as_mut().poll_next(cx) {
                    Poll::Ready(Some(StreamItem::Value(value))) => *this.latest = Some(value),
                    Poll::Ready(Some(StreamItem::Error(error))) => {
                        *this.terminated = true;
                        return Poll::Ready(Some(StreamItem::Error(error)));
                    }
                    // The last secondary value stays in use.
                    Poll::Ready(None) => *this.secondary_done = true,
                    Poll::Pending => break,
                }
            }

            match this.primary.as_mut().poll_next(cx) {
                Poll::Ready(Some(StreamItem::Value(value))) => {
                    if let Some(latest) = this.latest.as_ref() {
                        return Poll::Ready(Some(StreamItem::Value((value, latest.clone()))));
                    }
                }
                Poll::Ready(Some(StreamItem::Error(error))) => {
                    *this.terminated = true;
                    return Poll::Ready(Some(StreamItem::Error(error)));
                }
                Poll::Ready(None) => {
                    *this.terminated = true;
                    return Poll::Ready(None);
                }
                Poll::Pending => return Poll::Pending,
            }
        }
    }
}

impl<P, S, A, B> FusedStream for WithLatestFrom<P, S, B>
where
    P: Stream<Item = StreamItem<A>>,
    S: Stream<Item = StreamItem<B>>,
    B: Clone,
{
    fn is_terminated(&self) -> bool {
        self.terminated
    }
}
