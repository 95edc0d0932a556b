// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::logging::{debug, trace, warn};
use core::pin::Pin;
use core::task::{Context, Poll};
use futures::channel::mpsc::{self, UnboundedReceiver, UnboundedSender};
use futures::future::{select, Either};
use futures::stream::FusedStream;
use futures::{Stream, StreamExt};
use rivulet_core::{CancellationToken, RivuletTask, StreamItem};

pub(crate) type BoxedInput<T> = Pin<Box<dyn Stream<Item = StreamItem<T>> + Send + 'static>>;

/// Output of the merge engine.
///
/// Input tasks are spawned on the first poll, one per input, all sharing one cancellation
/// token. Every task forwards its input's items, already tagged, into a shared unbounded
/// channel. The stream:
///
/// - ends once every input has completed;
/// - yields the first input failure and then ends, cancelling the remaining inputs;
/// - cancels every input task when dropped.
#[must_use = "streams do nothing unless polled"]
pub struct MergedStream<T> {
    inputs: Vec<BoxedInput<T>>,
    receiver: Option<UnboundedReceiver<StreamItem<T>>>,
    tasks: Vec<RivuletTask>,
    cancel: CancellationToken,
    terminated: bool,
}

impl<T: Send + 'static> MergedStream<T> {
    pub(crate) fn new(inputs: Vec<BoxedInput<T>>) -> Self {
        Self {
            inputs,
            receiver: None,
            tasks: Vec::new(),
            cancel: CancellationToken::new(),
            terminated: false,
        }
    }

    fn start(&mut self) -> UnboundedReceiver<StreamItem<T>> {
        let (sender, receiver) = mpsc::unbounded();

        trace!("merge engine starting {} input tasks", self.inputs.len());
        self.tasks = self
            .inputs
            .drain(..)
            .enumerate()
            .map(|(origin, input)| {
                let sender = sender.clone();
                RivuletTask::spawn_with_token(self.cancel.clone(), move |cancel| {
                    forward_input(origin, input, sender, cancel)
                })
            })
            .collect();

        receiver
    }

    fn terminate(&mut self) {
        self.terminated = true;
        self.receiver = None;
        self.cancel.cancel();
        self.tasks.clear();
    }
}

/// Forwards one input until it ends, fails, or the merge is cancelled.
async fn forward_input<T>(
    origin: usize,
    mut input: BoxedInput<T>,
    sender: UnboundedSender<StreamItem<T>>,
    cancel: CancellationToken,
) {
    loop {
        match select(cancel.cancelled(), input.next()).await {
            Either::Left(((), _)) => {
                debug!("merge input {origin} cancelled");
                return;
            }
            Either::Right((None, _)) => {
                trace!("merge input {origin} completed");
                return;
            }
            Either::Right((Some(StreamItem::Value(value)), _)) => {
                if sender.unbounded_send(StreamItem::Value(value)).is_err() {
                    return;
                }
            }
            Either::Right((Some(StreamItem::Error(error)), _)) => {
                warn!("merge input {origin} failed: {error}");
                let _ = sender.unbounded_send(StreamItem::Error(error));
                cancel.cancel();
                return;
            }
        }
    }
}

impl<T: Send + 'static> Stream for MergedStream<T> {
    type Item = StreamItem<T>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        if this.terminated {
            return Poll::Ready(None);
        }

        if this.receiver.is_none() {
            this.receiver = Some(this.start());
        }

        let Some(receiver) = this.receiver.as_mut() else {
            return Poll::Ready(None);
        };

        match receiver.poll_next_unpin(cx) {
            Poll::Ready(Some(StreamItem::Value(value))) => Poll::Ready(Some(StreamItem::Value(value))),
            Poll::Ready(Some(StreamItem::Error(error))) => {
                this.terminate();
                Poll::Ready(Some(StreamItem::Error(error)))
            }
            Poll::Ready(None) => {
                this.terminate();
                Poll::Ready(None)
            }
            Poll::Pending => Poll::Pending,
        }
    }
}

impl<T: Send + 'static> FusedStream for MergedStream<T> {
    fn is_terminated(&self) -> bool {
        self.terminated
    }
}

impl<T> core::fmt::Debug for MergedStream<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MergedStream")
            .field("pending_inputs", &self.inputs.len())
            .field("running_tasks", &self.tasks.len())
            .field("terminated", &self.terminated)
            .finish()
    }
}
