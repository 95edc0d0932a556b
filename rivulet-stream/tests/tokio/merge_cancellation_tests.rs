// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::{stream, StreamExt};
use rivulet_core::{RivuletError, StreamItem};
use rivulet_stream::prelude::*;
use rivulet_test_utils::{assert_no_element_emitted, unwrap_stream, DropFlag, ProbedStream};
use std::time::Duration;

async fn wait_until_dropped(flag: &DropFlag) {
    tokio::time::timeout(Duration::from_secs(1), async {
        while !flag.is_dropped() {
            tokio::task::yield_now().await;
        }
    })
    .await
    .expect("input stream was not dropped");
}

#[tokio::test]
async fn test_dropping_merged_stream_cancels_every_input() -> anyhow::Result<()> {
    // Arrange
    let (a, a_dropped) = ProbedStream::new(stream::pending::<StreamItem<u8>>());
    let (b, b_dropped) = ProbedStream::new(stream::pending::<StreamItem<u8>>());
    let (c, c_dropped) = ProbedStream::new(stream::pending::<StreamItem<u8>>());
    let mut merged = merge_indexed(vec![a, b, c]);

    // Start the input tasks.
    assert_no_element_emitted(&mut merged, 10).await;
    assert!(!a_dropped.is_dropped());

    // Act
    drop(merged);

    // Assert
    wait_until_dropped(&a_dropped).await;
    wait_until_dropped(&b_dropped).await;
    wait_until_dropped(&c_dropped).await;
    Ok(())
}

#[tokio::test]
async fn test_failure_cancels_remaining_inputs() -> anyhow::Result<()> {
    // Arrange
    let failing = stream::iter(vec![StreamItem::<u8>::Error(RivuletError::stream_error("boom"))]);
    let (healthy, healthy_dropped) = ProbedStream::new(stream::pending::<StreamItem<u8>>());
    let mut merged = failing.merge_tagged(healthy);

    // Act
    let first = unwrap_stream(&mut merged, 500).await;

    // Assert
    assert!(first.is_error());
    wait_until_dropped(&healthy_dropped).await;
    Ok(())
}

#[tokio::test]
async fn test_unpolled_merge_never_starts_inputs() -> anyhow::Result<()> {
    // Arrange
    let (input, dropped) = ProbedStream::new(stream::iter(vec![StreamItem::Value(1)]));
    let merged = merge_indexed(vec![input]);

    // Act
    tokio::task::yield_now().await;

    // Assert: the input is still owned by the merged stream, not by a task.
    assert!(!dropped.is_dropped());
    drop(merged);
    assert!(dropped.is_dropped());
    Ok(())
}

#[tokio::test]
async fn test_combine_latest_drop_cancels_inputs() -> anyhow::Result<()> {
    // Arrange
    let (a, a_dropped) = ProbedStream::new(stream::pending::<StreamItem<u8>>());
    let (b, b_dropped) = ProbedStream::new(stream::pending::<StreamItem<u8>>());
    let mut combined = Box::pin(a.combine_latest(b));
    assert_no_element_emitted(&mut combined, 10).await;

    // Act
    drop(combined);

    // Assert
    wait_until_dropped(&a_dropped).await;
    wait_until_dropped(&b_dropped).await;
    Ok(())
}
