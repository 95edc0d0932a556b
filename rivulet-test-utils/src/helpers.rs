// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Async assertions for stream tests.
//!
//! All helpers work with a paused tokio clock. With `timeout_ms == 0` they never arm a timer,
//! so the clock does not move: they poll the stream and yield to already-runnable tasks a
//! bounded number of times. A zero-length tokio sleep would round up to the next millisecond
//! and let a paused clock auto-advance.

use futures::channel::mpsc::UnboundedReceiver;
use futures::stream::{Stream, StreamExt};
use futures::FutureExt;
use rivulet_core::StreamItem;
use std::fmt::Debug;
use std::time::Duration;
use tokio::time::{sleep, timeout};

/// Scheduler rounds granted to spawned tasks when no time may pass.
const YIELD_ROUNDS: usize = 32;

/// Polls without arming a timer. `None` when nothing was ready after every round.
async fn poll_without_time<S>(stream: &mut S) -> Option<Option<S::Item>>
where
    S: Stream + Unpin,
{
    for _ in 0..YIELD_ROUNDS {
        if let Some(next) = stream.next().now_or_never() {
            return Some(next);
        }
        tokio::task::yield_now().await;
    }
    stream.next().now_or_never()
}

/// Waits up to `timeout_ms` for the next item.
///
/// # Panics
///
/// Panics if the stream ends or nothing arrives in time.
pub async fn unwrap_stream<S, T>(stream: &mut S, timeout_ms: u64) -> StreamItem<T>
where
    S: Stream<Item = StreamItem<T>> + Unpin,
{
    if timeout_ms == 0 {
        return match poll_without_time(stream).await {
            Some(Some(item)) => item,
            Some(None) => panic!("Stream ended, expected an item"),
            None => panic!("Nothing ready, expected an item"),
        };
    }

    match timeout(Duration::from_millis(timeout_ms), stream.next()).await {
        Ok(Some(item)) => item,
        Ok(None) => panic!("Stream ended, expected an item"),
        Err(_) => panic!("Timed out after {timeout_ms}ms waiting for an item"),
    }
}

/// Asserts that the stream produces nothing within `timeout_ms`.
///
/// # Panics
///
/// Panics if an item (or the end of the stream) is observed.
pub async fn assert_no_element_emitted<S, T>(stream: &mut S, timeout_ms: u64)
where
    S: Stream<Item = T> + Unpin,
    T: Debug,
{
    if timeout_ms == 0 {
        if let Some(item) = poll_without_time(stream).await {
            panic!("Unexpected emission, expected no output: {item:?}");
        }
        return;
    }

    tokio::select! {
        biased;
        item = stream.next() => {
            panic!("Unexpected emission, expected no output: {item:?}");
        }
        () = sleep(Duration::from_millis(timeout_ms)) => {}
    }
}

/// Asserts that the stream ends within `timeout_ms`.
///
/// # Panics
///
/// Panics if an item arrives instead, or the stream stays open.
pub async fn assert_stream_ended<S, T>(stream: &mut S, timeout_ms: u64)
where
    S: Stream<Item = T> + Unpin,
    T: Debug,
{
    if timeout_ms == 0 {
        match poll_without_time(stream).await {
            Some(None) => return,
            Some(Some(item)) => panic!("Expected end of stream, got {item:?}"),
            None => panic!("Stream still open, nothing ready"),
        }
    }

    match timeout(Duration::from_millis(timeout_ms), stream.next()).await {
        Ok(None) => {}
        Ok(Some(item)) => panic!("Expected end of stream, got {item:?}"),
        Err(_) => panic!("Stream still open after {timeout_ms}ms"),
    }
}

/// Receives from a result channel, giving up after `timeout_ms`.
pub async fn recv_timeout<T>(rx: &mut UnboundedReceiver<T>, timeout_ms: u64) -> Option<T> {
    timeout(Duration::from_millis(timeout_ms), rx.next())
        .await
        .ok()
        .flatten()
}
