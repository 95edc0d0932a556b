// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for the rivulet crates.
//!
//! Production pipelines are built from streams; tests need to push values imperatively.
//! [`test_channel`] bridges the two: the sender side takes plain values, the stream side
//! yields them as [`StreamItem::Value`]. [`test_channel_with_errors`] lets a test inject
//! failures as well.
//!
//! ```rust
//! use rivulet_test_utils::test_channel;
//! use rivulet_test_utils::test_data::person_alice;
//! use futures::StreamExt;
//!
//! # async fn example() {
//! let (tx, mut stream) = test_channel();
//!
//! tx.unbounded_send(person_alice()).unwrap();
//!
//! let item = stream.next().await.unwrap().unwrap(); // Option -> StreamItem -> value
//! assert_eq!(item, person_alice());
//! # }
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod drop_probe;
pub mod error_injection;
pub mod helpers;
pub mod test_data;

use futures::channel::mpsc;
use futures::{Stream, StreamExt};
use rivulet_core::StreamItem;

pub use drop_probe::{DropFlag, ProbedStream};
pub use error_injection::ErrorInjectingStream;
pub use helpers::{assert_no_element_emitted, assert_stream_ended, recv_timeout, unwrap_stream};
pub use test_data::TestData;

/// Creates a channel whose stream side wraps every value in `StreamItem::Value`.
pub fn test_channel<T: Send + 'static>() -> (
    mpsc::UnboundedSender<T>,
    impl Stream<Item = StreamItem<T>> + Send + Unpin,
) {
    let (tx, rx) = mpsc::unbounded();
    (tx, rx.map(StreamItem::Value))
}

/// Creates a channel that carries `StreamItem<T>` as-is, for error propagation tests.
///
/// ```rust
/// use rivulet_test_utils::test_channel_with_errors;
/// use rivulet_core::{RivuletError, StreamItem};
/// use futures::StreamExt;
///
/// # async fn example() {
/// let (tx, mut stream) = test_channel_with_errors();
///
/// tx.unbounded_send(StreamItem::Value(42)).unwrap();
/// tx.unbounded_send(StreamItem::Error(RivuletError::stream_error("test error"))).unwrap();
///
/// assert_eq!(stream.next().await, Some(StreamItem::Value(42)));
/// assert!(stream.next().await.unwrap().is_error());
/// # }
/// ```
pub fn test_channel_with_errors<T: Send + 'static>() -> (
    mpsc::UnboundedSender<StreamItem<T>>,
    impl Stream<Item = StreamItem<T>> + Send + Unpin,
) {
    mpsc::unbounded()
}
