// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Fixed-period tick producer.
//!
//! [`IntervalStream`] yields `0, 1, 2, ...`, one tick per `period`. The first tick comes one
//! period after the stream is first polled; after every tick the timer is re-armed from the
//! moment the tick was observed. The stream never ends on its own.
//!
//! # Examples
//!
//! ```rust
//! use futures::StreamExt;
//! use rivulet_core::StreamItem;
//! use rivulet_stream_time::interval;
//! use std::time::Duration;
//!
//! # #[tokio::main(flavor = "current_thread", start_paused = true)]
//! # async fn main() {
//! let ticks: Vec<_> = interval(Duration::from_millis(10)).take(3).collect().await;
//!
//! assert_eq!(ticks, vec![StreamItem::Value(0), StreamItem::Value(1), StreamItem::Value(2)]);
//! # }
//! ```

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};
use core::time::Duration;
use futures::Stream;
use pin_project::pin_project;
use rivulet_core::StreamItem;
use rivulet_runtime::Timer;

/// Ticks every `period` using the default timer of the enabled runtime.
#[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
pub fn interval(period: Duration) -> IntervalStream<rivulet_runtime::DefaultTimer> {
    interval_with_timer(period, rivulet_runtime::DefaultTimer::default())
}

/// Ticks every `period` using `timer`.
pub fn interval_with_timer<TM: Timer>(period: Duration, timer: TM) -> IntervalStream<TM> {
    IntervalStream {
        timer,
        period,
        sleep: None,
        ticks: 0,
    }
}

#[pin_project]
pub struct IntervalStream<TM: Timer> {
    timer: TM,
    period: Duration,
    #[pin]
    sleep: Option<TM::Sleep>,
    ticks: u64,
}

impl<TM: Timer> IntervalStream<TM> {
    pub fn period(&self) -> Duration {
        self.period
    }
}

impl<TM: Timer> core::fmt::Debug for IntervalStream<TM> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("IntervalStream")
            .field("period", &self.period)
            .field("ticks", &self.ticks)
            .field("armed", &self.sleep.is_some())
            .finish()
    }
}

impl<TM: Timer> Stream for IntervalStream<TM> {
    type Item = StreamItem<u64>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        if this.sleep.is_none() {
            this.sleep.set(Some(this.timer.sleep_future(*this.period)));
        }

        let fired = this
            .sleep
            .as_mut()
            .as_pin_mut()
            .map(|sleep| sleep.poll(cx));

        match fired {
            Some(Poll::Ready(())) => {
                let tick = *this.ticks;
                *this.ticks += 1;
                this.sleep.set(Some(this.timer.sleep_future(*this.period)));
                Poll::Ready(Some(StreamItem::Value(tick)))
            }
            Some(Poll::Pending) | None => Poll::Pending,
        }
    }
}
