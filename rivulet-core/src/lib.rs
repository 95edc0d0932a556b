// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
//! Core types shared by the rivulet crates.

mod logging;

pub mod broadcast;
pub mod cancellation_scope;
pub mod cancellation_token;
pub mod error;
pub mod into_stream;
pub mod stream_item;
#[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
pub mod task;

pub use self::broadcast::{BroadcastSource, Subscription};
pub use self::cancellation_scope::{Cancellable, CancellationBag, CancellationScope};
pub use self::cancellation_token::{CancelOnDrop, CancellationToken, Cancelled};
pub use self::error::{IntoRivuletError, Result, ResultExt, RivuletError};
pub use self::into_stream::IntoStream;
pub use self::stream_item::StreamItem;
#[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
pub use self::task::RivuletTask;
