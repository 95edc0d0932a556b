// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use super::subscription::{LivenessMarker, Subscription};
use crate::logging::trace;
use futures::channel::mpsc::{self, UnboundedSender};
use parking_lot::Mutex;
use std::sync::{Arc, Weak};

struct SubscriberEntry<T> {
    liveness: Weak<LivenessMarker>,
    sender: UnboundedSender<T>,
}

impl<T> SubscriberEntry<T> {
    fn is_live(&self) -> bool {
        self.liveness.strong_count() > 0 && !self.sender.is_closed()
    }
}

struct BroadcastState<T> {
    current: Option<T>,
    subscribers: Vec<SubscriberEntry<T>>,
}

impl<T> BroadcastState<T> {
    fn prune(&mut self) -> usize {
        let before = self.subscribers.len();
        self.subscribers.retain(SubscriberEntry::is_live);
        before - self.subscribers.len()
    }
}

/// A hot source holding one current value, broadcast to every subscriber.
///
/// Subscribe, overwrite and prune are serialized by one mutex, so a subscriber sees either
/// the value before an overwrite followed by that overwrite, or just the new value; never a
/// gap or a duplicate. The source is not `Clone`; share it through an `Arc`.
///
/// Dropping the source closes every subscription: each one drains what it already received
/// and then ends.
///
/// # Examples
///
/// ```
/// use futures::StreamExt;
/// use rivulet_core::{BroadcastSource, StreamItem};
///
/// # futures::executor::block_on(async {
/// let source = BroadcastSource::new();
/// let mut first = source.subscribe();
///
/// source.set("a");
/// let mut late = source.subscribe();
/// source.set("b");
///
/// assert_eq!(first.next().await, Some(StreamItem::Value("a")));
/// assert_eq!(first.next().await, Some(StreamItem::Value("b")));
/// assert_eq!(late.next().await, Some(StreamItem::Value("a")));
/// assert_eq!(late.next().await, Some(StreamItem::Value("b")));
/// # });
/// ```
pub struct BroadcastSource<T> {
    state: Mutex<BroadcastState<T>>,
}

impl<T: Clone> BroadcastSource<T> {
    /// Creates a source with no current value.
    pub fn new() -> Self {
        Self {
            state: Mutex::new(BroadcastState {
                current: None,
                subscribers: Vec::new(),
            }),
        }
    }

    /// Creates a source whose current value is `value`.
    pub fn with_value(value: T) -> Self {
        let source = Self::new();
        source.state.lock().current = Some(value);
        source
    }

    /// Overwrites the current value and delivers it to every live subscriber.
    ///
    /// Dead subscribers are pruned first.
    pub fn set(&self, value: T) {
        let mut state = self.state.lock();

        let pruned = state.prune();
        if pruned > 0 {
            trace!("broadcast source pruned {pruned} dead subscribers");
        }

        state
            .subscribers
            .retain(|subscriber| subscriber.sender.unbounded_send(value.clone()).is_ok());
        state.current = Some(value);
    }

    /// Snapshot of the current value.
    pub fn value(&self) -> Option<T> {
        self.state.lock().current.clone()
    }

    /// Opens a new subscription, seeded with the current value if one is set.
    pub fn subscribe(&self) -> Subscription<T> {
        let (sender, receiver) = mpsc::unbounded();
        let liveness = Arc::new(LivenessMarker);

        let mut state = self.state.lock();
        if let Some(current) = &state.current {
            // The receiver is alive on our stack, the send cannot fail.
            let _ = sender.unbounded_send(current.clone());
        }
        state.subscribers.push(SubscriberEntry {
            liveness: Arc::downgrade(&liveness),
            sender,
        });

        Subscription::new(receiver, liveness)
    }

    /// Drops every subscriber whose subscription is gone. Returns how many were removed.
    pub fn prune(&self) -> usize {
        let pruned = self.state.lock().prune();
        if pruned > 0 {
            trace!("broadcast source pruned {pruned} dead subscribers");
        }
        pruned
    }

    /// Number of tracked subscriber entries, including dead ones not yet pruned.
    pub fn subscriber_count(&self) -> usize {
        self.state.lock().subscribers.len()
    }

    /// Number of subscribers whose subscription is still held by a consumer.
    pub fn live_subscriber_count(&self) -> usize {
        self.state
            .lock()
            .subscribers
            .iter()
            .filter(|subscriber| subscriber.is_live())
            .count()
    }
}

impl<T: Clone> Default for BroadcastSource<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> core::fmt::Debug for BroadcastSource<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let state = self.state.lock();
        f.debug_struct("BroadcastSource")
            .field("has_value", &state.current.is_some())
            .field("subscribers", &state.subscribers.len())
            .finish()
    }
}
