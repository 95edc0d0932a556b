// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # Rivulet
//!
//! Composable reactive operators over asynchronous streams.
//!
//! ## Overview
//!
//! Every rivulet stream is a plain `futures::Stream<Item = StreamItem<T>>`: a value, or a
//! terminal [`RivuletError`]. Operators are extension traits over such streams and return
//! the same shape, so pipelines are built by chaining:
//!
//! - **Merge engine**: `merge_tagged`, `merge3`, `merge_indexed` fan independent inputs
//!   into one origin-tagged stream, each input driven by its own cancellable task.
//! - **Stateful operators**: `combine_latest`, `with_latest_from`,
//!   `distinct_until_changed`, `start_with`, and the time operators `debounce`, `throttle`,
//!   `timeout` and `interval`.
//! - **Broadcast source**: [`BroadcastSource`] holds a mutable value and replays it to every
//!   subscriber, pruning subscribers that went away.
//! - **Pagination**: [`paginate`] folds pages fetched on demand.
//! - **Consumers**: [`SubscribeExt::subscribe`] runs a handler per value until the stream
//!   ends or a cancellation token fires.
//!
//! ## Quick Start
//!
//! ```rust
//! use futures::StreamExt;
//! use rivulet::prelude::*;
//! use std::time::Duration;
//!
//! # #[tokio::main(flavor = "current_thread", start_paused = true)]
//! # async fn main() {
//! let query = BroadcastSource::with_value("ru");
//! let filter = BroadcastSource::with_value(true);
//!
//! let mut searches = Box::pin(
//!     query
//!         .subscribe()
//!         .distinct_until_changed()
//!         .combine_latest(filter.subscribe())
//!         .timeout(Duration::from_secs(1)),
//! );
//!
//! assert_eq!(searches.next().await, Some(StreamItem::Value(("ru", true))));
//!
//! query.set("rust");
//! assert_eq!(searches.next().await, Some(StreamItem::Value(("rust", true))));
//! # }
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

pub mod receiver_ext;

pub use rivulet_core::{
    BroadcastSource, Cancellable, CancellationBag, CancellationScope, CancellationToken,
    IntoRivuletError, IntoStream, Result, ResultExt, RivuletError, StreamItem, Subscription,
};
#[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
pub use rivulet_core::RivuletTask;
pub use rivulet_exec::SubscribeExt;
pub use rivulet_runtime::Timer;
#[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
pub use rivulet_runtime::DefaultTimer;
pub use rivulet_stream::{
    merge3, merge_indexed, paginate, CombineLatestExt, DistinctUntilChangedByExt,
    DistinctUntilChangedExt, Indexed, MergeTaggedExt, MergedStream, Page, PageRequester,
    StartWithExt, Tagged2, Tagged3, WithLatestFromExt,
};
#[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
pub use rivulet_stream_time::interval;
pub use rivulet_stream_time::{
    interval_with_timer, Debounce, DebounceExt, IntervalStream, Throttle, ThrottleExt, Timeout,
    TimeoutExt,
};

pub use receiver_ext::UnboundedReceiverExt;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::receiver_ext::UnboundedReceiverExt;
    pub use rivulet_core::{BroadcastSource, CancellationToken, RivuletError, StreamItem};
    pub use rivulet_exec::SubscribeExt;
    pub use rivulet_stream::prelude::*;
    pub use rivulet_stream_time::prelude::*;
}
