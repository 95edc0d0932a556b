// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Fusing a stream after its first error.

use core::pin::Pin;
use core::task::{Context, Poll};
use futures::stream::FusedStream;
use futures::Stream;
use pin_project::pin_project;
use rivulet_core::StreamItem;

/// Ends a stream right after it yields an error.
///
/// Every rivulet operator treats errors as terminal; this is how single-input operators
/// guarantee it even when their source keeps going after a failure.
pub trait TerminateOnErrorExt<T>: Stream<Item = StreamItem<T>> + Sized {
    fn terminate_on_error(self) -> TerminateOnError<Self>;
}

impl<S, T> TerminateOnErrorExt<T> for S
where
    S: Stream<Item = StreamItem<T>>,
{
    fn terminate_on_error(self) -> TerminateOnError<Self> {
        TerminateOnError {
            stream: self,
            terminated: false,
        }
    }
}

#[pin_project]
#[derive(Debug)]
#[must_use = "streams do nothing unless polled"]
pub struct TerminateOnError<S> {
    #[pin]
    stream: S,
    terminated: bool,
}

impl<S, T> Stream for TerminateOnError<S>
where
    S: Stream<Item = StreamItem<T>>,
{
    type Item = StreamItem<T>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.project();
        if *this.terminated {
            return Poll::Ready(None);
        }

        match this.stream.poll_next(cx) {
            Poll::Ready(Some(StreamItem::Error(error))) => {
                *this.terminated = true;
                Poll::Ready(Some(StreamItem::Error(error)))
            }
            Poll::Ready(None) => {
                *this.terminated = true;
                Poll::Ready(None)
            }
            other => other,
        }
    }
}

impl<S, T> FusedStream for TerminateOnError<S>
where
    S: Stream<Item = StreamItem<T>>,
{
    fn is_terminated(&self) -> bool {
        self.terminated
    }
}
