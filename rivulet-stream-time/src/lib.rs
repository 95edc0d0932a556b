// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
//! Time-based operators for rivulet streams.
//!
//! - [`interval`] - fixed-period tick producer
//! - [`DebounceExt`] - `.debounce(interval)`, fixed-cadence flushing of the latest value
//! - [`ThrottleExt`] - `.throttle(interval)`, leading-edge rate limiting
//! - [`TimeoutExt`] - `.timeout(duration)`, fails if the first value is late
//!
//! Operators only talk to a [`Timer`], so they run on any runtime. The plain methods use
//! [`DefaultTimer`](rivulet_runtime::DefaultTimer) of the enabled runtime feature
//! (`runtime-tokio` by default, or `runtime-smol`); every operator also has a
//! `*_with_timer` form taking an explicit timer.
//!
//! # Example
//!
//! ```rust
//! use futures::StreamExt;
//! use rivulet_core::StreamItem;
//! use rivulet_stream_time::prelude::*;
//! use std::time::Duration;
//!
//! # #[tokio::main(flavor = "current_thread", start_paused = true)]
//! # async fn main() {
//! let readings = futures::stream::iter(vec![3, 3, 4]).map(StreamItem::Value);
//!
//! let mut guarded = Box::pin(
//!     readings
//!         .timeout(Duration::from_secs(1))
//!         .throttle(Duration::from_millis(100)),
//! );
//!
//! assert_eq!(guarded.next().await, Some(StreamItem::Value(3)));
//! assert_eq!(guarded.next().await, None);
//! # }
//! ```

mod logging;

pub mod debounce;
pub mod interval;
pub mod prelude;
pub mod throttle;
pub mod timeout;

pub use self::debounce::{Debounce, DebounceExt};
#[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
pub use self::interval::interval;
pub use self::interval::{interval_with_timer, IntervalStream};
pub use self::throttle::{Throttle, ThrottleExt};
pub use self::timeout::{Timeout, TimeoutExt};
pub use rivulet_runtime::Timer;
