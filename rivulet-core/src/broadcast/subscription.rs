// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::StreamItem;
use core::pin::Pin;
use core::task::{Context, Poll};
use futures::channel::mpsc::UnboundedReceiver;
use futures::stream::FusedStream;
use futures::Stream;
use std::sync::Arc;

/// Marker whose strong count tells the source a subscription is still held.
#[derive(Debug)]
pub(super) struct LivenessMarker;

/// A consumer's view of a [`BroadcastSource`](super::BroadcastSource).
///
/// Yields the value current at subscription time (if any), then every overwrite. Ends once
/// the source is dropped and everything already delivered has been drained. Never yields an
/// error.
#[derive(Debug)]
pub struct Subscription<T> {
    receiver: UnboundedReceiver<T>,
    _liveness: Arc<LivenessMarker>,
}

impl<T> Subscription<T> {
    pub(super) fn new(receiver: UnboundedReceiver<T>, liveness: Arc<LivenessMarker>) -> Self {
        Self {
            receiver,
            _liveness: liveness,
        }
    }
}

impl<T> Stream for Subscription<T> {
    type Item = StreamItem<T>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        Pin::new(&mut self.receiver)
            .poll_next(cx)
            .map(|value| value.map(StreamItem::Value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.receiver.size_hint()
    }
}

impl<T> FusedStream for Subscription<T> {
    fn is_terminated(&self) -> bool {
        self.receiver.is_terminated()
    }
}
