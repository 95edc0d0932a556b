// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Sequential, cancellable consumption of a stream.
//!
//! # Examples
//!
//! ```rust
//! use rivulet_core::{BroadcastSource, CancellationToken, RivuletError};
//! use rivulet_exec::SubscribeExt;
//! use std::sync::{Arc, Mutex};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let source = BroadcastSource::with_value(1);
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let token = CancellationToken::new();
//!
//! let consumer = tokio::spawn({
//!     let seen = seen.clone();
//!     let stream = source.subscribe();
//!     let token = token.clone();
//!     async move {
//!         stream
//!             .subscribe(
//!                 move |value, _token| {
//!                     seen.lock().unwrap().push(value);
//!                     async { Ok::<(), RivuletError>(()) }
//!                 },
//!                 None::<fn(RivuletError)>,
//!                 Some(token),
//!             )
//!             .await
//!     }
//! });
//!
//! tokio::task::yield_now().await;
//! token.cancel();
//!
//! assert!(consumer.await.unwrap().is_ok());
//! assert_eq!(*seen.lock().unwrap(), vec![1]);
//! # }
//! ```

use crate::logging::{debug, error};
use async_trait::async_trait;
use core::future::Future;
use core::pin::pin;
use futures::future::{select, Either};
use futures::stream::{Stream, StreamExt};
use rivulet_core::{CancellationToken, IntoRivuletError, Result, RivuletError, StreamItem};
use std::error::Error;

#[async_trait]
pub trait SubscribeExt<T>: Stream<Item = StreamItem<T>> + Sized {
    /// Runs `on_next` for every value, one at a time, in stream order.
    ///
    /// - Returns `Ok(())` when the stream ends or `cancellation_token` is cancelled. A
    ///   handler already running is awaited; it receives the token to stop early.
    /// - Returns `Err` with the stream's error if the stream fails.
    /// - A handler error is passed to `on_error` and processing continues. Without
    ///   `on_error`, handler errors are logged and returned together as
    ///   [`RivuletError::MultipleErrors`] once the loop stops. If the stream then fails, its
    ///   error is appended last to the same list.
    async fn subscribe<F, Fut, E, OnError>(
        self,
        on_next: F,
        on_error: Option<OnError>,
        cancellation_token: Option<CancellationToken>,
    ) -> Result<()>
    where
        F: FnMut(T, CancellationToken) -> Fut + Send + 'static,
        Fut: Future<Output = core::result::Result<(), E>> + Send + 'static,
        OnError: FnMut(E) + Send + 'static,
        E: Error + Send + Sync + 'static;
}

#[async_trait]
impl<S, T> SubscribeExt<T> for S
where
    S: Stream<Item = StreamItem<T>> + Send + Unpin + 'static,
    T: Send + 'static,
{
    async fn subscribe<F, Fut, E, OnError>(
        mut self,
        mut on_next: F,
        mut on_error: Option<OnError>,
        cancellation_token: Option<CancellationToken>,
    ) -> Result<()>
    where
        F: FnMut(T, CancellationToken) -> Fut + Send + 'static,
        Fut: Future<Output = core::result::Result<(), E>> + Send + 'static,
        OnError: FnMut(E) + Send + 'static,
        E: Error + Send + Sync + 'static,
    {
        let cancellation_token = cancellation_token.unwrap_or_default();
        let mut unhandled: Vec<RivuletError> = Vec::new();

        loop {
            let next = {
                let cancelled = pin!(cancellation_token.cancelled());
                match select(cancelled, self.next()).await {
                    Either::Left(((), _)) => None,
                    Either::Right((item, _)) => item,
                }
            };

            let value = match next {
                Some(StreamItem::Value(value)) => value,
                Some(StreamItem::Error(stream_error)) => {
                    debug!("subscribed stream failed: {stream_error}");
                    if unhandled.is_empty() {
                        return Err(stream_error);
                    }
                    unhandled.push(stream_error);
                    return Err(RivuletError::from_errors(unhandled));
                }
                None => break,
            };

            if let Err(handler_error) = on_next(value, cancellation_token.clone()).await {
                match on_error.as_mut() {
                    Some(on_error) => on_error(handler_error),
                    None => {
                        error!("unhandled subscriber error: {handler_error}");
                        unhandled.push(handler_error.into_rivulet_error());
                    }
                }
            }

            if cancellation_token.is_cancelled() {
                break;
            }
        }

        if unhandled.is_empty() {
            Ok(())
        } else {
            Err(RivuletError::from_errors(unhandled))
        }
    }
}
