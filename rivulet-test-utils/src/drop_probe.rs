// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Observing when a stream is dropped, to test cancellation.

use futures::Stream;
use pin_project::pin_project;
use std::pin::Pin;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::task::{Context, Poll};

/// Shared flag set once the probed stream has been dropped.
#[derive(Clone, Debug, Default)]
pub struct DropFlag(Arc<AtomicBool>);

impl DropFlag {
    pub fn is_dropped(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

#[derive(Debug)]
struct SetOnDrop(DropFlag);

impl Drop for SetOnDrop {
    fn drop(&mut self) {
        (self.0).0.store(true, Ordering::SeqCst);
    }
}

/// Forwards the inner stream unchanged and raises a [`DropFlag`] when dropped.
#[pin_project]
#[derive(Debug)]
pub struct ProbedStream<S> {
    #[pin]
    inner: S,
    _guard: SetOnDrop,
}

impl<S> ProbedStream<S> {
    pub fn new(inner: S) -> (Self, DropFlag) {
        let flag = DropFlag::default();
        let stream = Self {
            inner,
            _guard: SetOnDrop(flag.clone()),
        };
        (stream, flag)
    }
}

impl<S: Stream> Stream for ProbedStream<S> {
    type Item = S::Item;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.project().inner.poll_next(cx)
    }
}
