// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! First-value timeout.
//!
//! The source is raced against a one-shot timer started on the first poll. If the timer
//! fires before the first value, the stream yields [`RivuletError::TimeoutError`] and ends.
//! Once a value has arrived the timer is discarded: later gaps between values are never
//! timed. Source errors and completion are forwarded as they are.
//!
//! # Examples
//!
//! ```rust
//! use futures::StreamExt;
//! use rivulet_core::StreamItem;
//! use rivulet_stream_time::TimeoutExt;
//! use std::time::Duration;
//!
//! # #[tokio::main(flavor = "current_thread", start_paused = true)]
//! # async fn main() {
//! let silent = futures::stream::pending::<StreamItem<u32>>();
//! let mut guarded = Box::pin(silent.timeout(Duration::from_secs(1)));
//!
//! let item = guarded.next().await.unwrap();
//! assert!(item.err().is_some_and(|error| error.is_timeout()));
//! assert!(guarded.next().await.is_none());
//! # }
//! ```

use crate::logging::debug;
use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};
use core::time::Duration;
use futures::stream::FusedStream;
use futures::Stream;
use pin_project::pin_project;
use rivulet_core::{RivuletError, StreamItem};
use rivulet_runtime::Timer;

pub trait TimeoutExt<T>: Stream<Item = StreamItem<T>> + Sized {
    /// Guards the first value with the default timer of the enabled runtime.
    #[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
    fn timeout(self, duration: Duration) -> Timeout<Self, rivulet_runtime::DefaultTimer> {
        self.timeout_with_timer(duration, rivulet_runtime::DefaultTimer::default())
    }

    fn timeout_with_timer<TM: Timer>(self, duration: Duration, timer: TM) -> Timeout<Self, TM>;
}

impl<S, T> TimeoutExt<T> for S
where
    S: Stream<Item = StreamItem<T>>,
{
    fn timeout_with_timer<TM: Timer>(self, duration: Duration, timer: TM) -> Timeout<Self, TM> {
        Timeout {
            source: self,
            duration,
            timer,
            deadline: None,
            first_value_seen: false,
            terminated: false,
        }
    }
}

/// Stream returned by [`TimeoutExt::timeout`].
#[pin_project]
pub struct Timeout<S, TM: Timer> {
    #[pin]
    source: S,
    duration: Duration,
    timer: TM,
    #[pin]
    deadline: Option<TM::Sleep>,
    first_value_seen: bool,
    terminated: bool,
}

impl<S, T, TM> Stream for Timeout<S, TM>
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

        match this.source.as_mut().poll_next(cx) {
            Poll::Ready(Some(StreamItem::Value(value))) => {
                if !*this.first_value_seen {
                    *this.first_value_seen = true;
                    this.deadline.set(None);
                }
                return Poll::Ready(Some(StreamItem::Value(value)));
            }
            Poll::Ready(Some(StreamItem::Error(error))) => {
                *this.terminated = true;
                this.deadline.set(None);
                return Poll::Ready(Some(StreamItem::Error(error)));
            }
            Poll::Ready(None) => {
                *this.terminated = true;
                this.deadline.set(None);
                return Poll::Ready(None);
            }
            Poll::Pending => {}
        }

        if *this.first_value_seen {
            return Poll::Pending;
        }

        if this.deadline.is_none() {
            this.deadline.set(Some(this.timer.sleep_future(*this.duration)));
        }

        let fired = this
            .deadline
            .as_mut()
            .as_pin_mut()
            .map(|sleep| sleep.poll(cx));

        match fired {
            Some(Poll::Ready(())) => {
                debug!("no value within {:?}, timing out", this.duration);
                *this.terminated = true;
                this.deadline.set(None);
                Poll::Ready(Some(StreamItem::Error(RivuletError::timeout_error(format!(
                    "no value within {:?}",
                    this.duration
                )))))
            }
            Some(Poll::Pending) | None => Poll::Pending,
        }
    }
}

impl<S, T, TM> FusedStream for Timeout<S, TM>
where
    S: Stream<Item = StreamItem<T>>,
    TM: Timer,
{
    fn is_terminated(&self) -> bool {
        self.terminated
    }
}

impl<S, TM: Timer> core::fmt::Debug for Timeout<S, TM> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Timeout")
            .field("duration", &self.duration)
            .field("armed", &self.deadline.is_some())
            .field("first_value_seen", &self.first_value_seen)
            .field("terminated", &self.terminated)
            .finish()
    }
}
