// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
//! Stream operators for rivulet.
//!
//! Every operator is an extension trait over `Stream<Item = StreamItem<T>>` and returns a
//! stream of the same shape, so operators chain freely:
//!
//! ```rust
//! use futures::StreamExt;
//! use rivulet_core::BroadcastSource;
//! use rivulet_stream::prelude::*;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let temperature = BroadcastSource::with_value(20);
//! let threshold = BroadcastSource::with_value(25);
//!
//! let mut alarms = Box::pin(
//!     temperature
//!         .subscribe()
//!         .start_with(0)
//!         .distinct_until_changed()
//!         .combine_latest(threshold.subscribe())
//!         .map(|item| item.map(|(t, limit)| t > limit)),
//! );
//!
//! assert_eq!(alarms.next().await.unwrap().unwrap(), false);
//! # }
//! ```
//!
//! The merge functions and `combine_latest` run on the [`merge`] engine, which spawns one task
//! per input on the first poll; they need an async runtime (`runtime-tokio` by default, or
//! `runtime-smol`). `with_latest_from` polls both of its inputs from the consuming task.

#[cfg(not(any(feature = "runtime-tokio", feature = "runtime-smol")))]
compile_error!("rivulet-stream needs a runtime: enable `runtime-tokio` or `runtime-smol`");

mod logging;

pub mod combine_latest;
pub mod distinct_until_changed;
pub mod merge;
pub mod pagination;
pub mod prelude;
pub mod start_with;
pub mod terminate_on_error;
pub mod with_latest_from;

pub use self::combine_latest::CombineLatestExt;
pub use self::distinct_until_changed::{DistinctUntilChangedByExt, DistinctUntilChangedExt};
pub use self::merge::{merge3, merge_indexed, Indexed, MergeTaggedExt, MergedStream, Tagged2, Tagged3};
pub use self::pagination::{paginate, Page, PageRequester};
pub use self::start_with::StartWithExt;
pub use self::terminate_on_error::{TerminateOnError, TerminateOnErrorExt};
pub use self::with_latest_from::WithLatestFromExt;
