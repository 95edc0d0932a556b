// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Leading-edge throttle.
//!
//! The first value is emitted immediately. Later values are dropped until `interval` has
//! elapsed since the last emitted value, measured with the timer's clock; the next value
//! observed after that is emitted and restarts the window. Errors pass through and end
//! the stream.

use core::pin::Pin;
use core::task::{Context, Poll};
use core::time::Duration;
use futures::stream::FusedStream;
use futures::Stream;
use pin_project::pin_project;
use rivulet_core::StreamItem;
use rivulet_runtime::Timer;

pub trait ThrottleExt<T>: Stream<Item = StreamItem<T>> + Sized {
    /// Throttles with the default timer of the enabled runtime.
    #[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
    fn throttle(self, interval: Duration) -> Throttle<Self, rivulet_runtime::DefaultTimer> {
        self.throttle_with_timer(interval, rivulet_runtime::DefaultTimer::default())
    }

    fn throttle_with_timer<TM: Timer>(self, interval: Duration, timer: TM) -> Throttle<Self, TM>;
}

impl<S, T> ThrottleExt<T> for S
where
    S: Stream<Item = StreamItem<T>>,
{
    fn throttle_with_timer<TM: Timer>(self, interval: Duration, timer: TM) -> Throttle<Self, TM> {
        Throttle {
            source: self,
            interval,
            timer,
            last_emitted: None,
            terminated: false,
        }
    }
}

/// Stream returned by [`ThrottleExt::throttle`].
#[pin_project]
#[derive(Debug)]
pub struct Throttle<S, TM: Timer> {
    #[pin]
    source: S,
    interval: Duration,
    timer: TM,
    last_emitted: Option<TM::Instant>,
    terminated: bool,
}

impl<S, T, TM> Stream for Throttle<S, TM>
where
    S: Stream<Item = StreamItem<T>>,
    TM: Timer,
{
    type Item = StreamItem<T>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        if *this.terminated {
            return Poll::Ready(None);
        }

        loop {
            match this.source.as_mut().poll_next(cx) {
                Poll::Ready(Some(StreamItem::Value(value))) => {
                    let now = this.timer.now();
                    let open = this
                        .last_emitted
                        .is_none_or(|last| now - last >= *this.interval);
                    if open {
                        *this.last_emitted = Some(now);
                        return Poll::Ready(Some(StreamItem::Value(value)));
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

impl<S, T, TM> FusedStream for Throttle<S, TM>
where
    S: Stream<Item = StreamItem<T>>,
    TM: Timer,
{
    fn is_terminated(&self) -> bool {
        self.terminated
    }
}
