// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Fixed-cadence debounce.
//!
//! The source is raced against an [`IntervalStream`] ticking every `interval`:
//!
//! - a source value replaces the pending value and emits nothing;
//! - a tick emits the pending value, if there is one, and clears it;
//! - when the source completes, the pending value is flushed and the stream ends;
//! - an error drops the pending value, is emitted right away and ends the stream.
//!
//! The tick does not restart when a value arrives, so a value can be emitted anywhere
//! between zero and one `interval` after it was received.
//!
//! # Examples
//!
//! ```rust
//! use futures::StreamExt;
//! use rivulet_core::StreamItem;
//! use rivulet_stream_time::DebounceExt;
//! use std::time::Duration;
//!
//! # #[tokio::main(flavor = "current_thread", start_paused = true)]
//! # async fn main() {
//! let burst = futures::stream::iter(vec![1, 2, 3]).map(StreamItem::Value);
//!
//! let settled: Vec<_> = burst.debounce(Duration::from_millis(50)).collect().await;
//!
//! assert_eq!(settled, vec![StreamItem::Value(3)]);
//! # }
//! ```

use crate::interval::{interval_with_timer, IntervalStream};
use crate::logging::trace;
use core::pin::Pin;
use core::task::{Context, Poll};
use core::time::Duration;
use futures::stream::FusedStream;
use futures::Stream;
use pin_project::pin_project;
use rivulet_core::StreamItem;
use rivulet_runtime::Timer;

pub trait DebounceExt<T>: Stream<Item = StreamItem<T>> + Sized {
    /// Debounces with the default timer of the enabled runtime.
    #[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
    fn debounce(self, interval: Duration) -> Debounce<Self, T, rivulet_runtime::DefaultTimer> {
        self.debounce_with_timer(interval, rivulet_runtime::DefaultTimer::default())
    }

    fn debounce_with_timer<TM: Timer>(
        self,
        interval: Duration,
        timer: TM,
    ) -> Debounce<Self, T, TM>;
}

impl<S, T> DebounceExt<T> for S
where
    S: Stream<Item = StreamItem<T>>,
{
    fn debounce_with_timer<TM: Timer>(
        self,
        interval: Duration,
        timer: TM,
    ) -> Debounce<Self, T, TM> {
        Debounce {
            source: self,
            ticks: interval_with_timer(interval, timer),
            pending: None,
            terminated: false,
        }
    }
}

/// Stream returned by [`DebounceExt::debounce`].
#[pin_project]
pub struct Debounce<S, T, TM: Timer> {
    #[pin]
    source: S,
    #[pin]
    ticks: IntervalStream<TM>,
    pending: Option<T>,
    terminated: bool,
}

impl<S, T, TM> Stream for Debounce<S, T, TM>
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
                    *this.pending = Some(value);
                }
                Poll::Ready(Some(StreamItem::Error(error))) => {
                    *this.terminated = true;
                    *this.pending = None;
                    return Poll::Ready(Some(StreamItem::Error(error)));
                }
                Poll::Ready(None) => {
                    *this.terminated = true;
                    trace!("debounce source completed, flushing pending value");
                    return Poll::Ready(this.pending.take().map(StreamItem::Value));
                }
                Poll::Pending => break,
            }
        }

        // A quiet tick re-arms the timer; a second ready tick in the same poll means the
        // timer fires immediately, so yield instead of spinning.
        for _ in 0..2 {
            match this.ticks.as_mut().poll_next(cx) {
                Poll::Ready(Some(_)) => {
                    if let Some(value) = this.pending.take() {
                        return Poll::Ready(Some(StreamItem::Value(value)));
                    }
                }
                Poll::Ready(None) | Poll::Pending => return Poll::Pending,
            }
        }

        cx.waker().wake_by_ref();
        Poll::Pending
    }
}

impl<S, T, TM> FusedStream for Debounce<S, T, TM>
where
    S: Stream<Item = StreamItem<T>>,
    TM: Timer,
{
    fn is_terminated(&self) -> bool {
        self.terminated
    }
}
