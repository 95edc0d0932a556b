// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Hot, replay-latest multicast of a single mutable value.
//!
//! A [`BroadcastSource`] holds an optional current value and a list of subscribers. Every
//! [`Subscription`] first receives the current value (if any) and then every later
//! [`set`](BroadcastSource::set), in order.
//!
//! Subscribers are tracked without owning them: each subscription holds a strong liveness
//! marker and the source only keeps a `Weak` to it. Dropping a subscription (or aborting the
//! task that was consuming it) releases the marker, and the entry is pruned on the next
//! overwrite.

mod source;
mod subscription;

pub use source::BroadcastSource;
pub use subscription::Subscription;
