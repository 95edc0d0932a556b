// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::StreamExt;
use rivulet_core::{BroadcastSource, RivuletError, StreamItem};
use rivulet_stream::prelude::*;
use rivulet_test_utils::{
    assert_no_element_emitted, test_channel, test_channel_with_errors, unwrap_stream,
};

#[tokio::test]
async fn test_start_with_distinct_combine_latest_pipeline() -> anyhow::Result<()> {
    // Arrange
    let temperature = BroadcastSource::new();
    let threshold = BroadcastSource::with_value(25);
    let mut alarms = Box::pin(
        temperature
            .subscribe()
            .start_with(0)
            .distinct_until_changed()
            .combine_latest(threshold.subscribe())
            .map(|item| item.map(|(t, limit)| t > limit)),
    );

    // Act & Assert
    assert!(!unwrap_stream(&mut alarms, 500).await.unwrap());

    temperature.set(0);
    assert_no_element_emitted(&mut alarms, 20).await;

    temperature.set(30);
    assert!(unwrap_stream(&mut alarms, 500).await.unwrap());

    threshold.set(40);
    assert!(!unwrap_stream(&mut alarms, 500).await.unwrap());
    Ok(())
}

#[tokio::test]
async fn test_with_latest_from_over_merged_inputs() -> anyhow::Result<()> {
    // Arrange
    let (left_tx, left) = test_channel::<u32>();
    let (right_tx, right) = test_channel::<u32>();
    let (factor_tx, factor) = test_channel::<u32>();
    let mut scaled = Box::pin(
        merge_indexed(vec![left, right])
            .map(|item| item.map(Indexed::into_payload))
            .with_latest_from(factor)
            .map(|item| item.map(|(value, factor)| value * factor)),
    );

    factor_tx.unbounded_send(10)?;
    assert_no_element_emitted(&mut scaled, 20).await;

    // Act & Assert
    left_tx.unbounded_send(1)?;
    assert_eq!(unwrap_stream(&mut scaled, 500).await.unwrap(), 10);

    right_tx.unbounded_send(2)?;
    assert_eq!(unwrap_stream(&mut scaled, 500).await.unwrap(), 20);
    Ok(())
}

#[tokio::test]
async fn test_error_in_nested_pipeline_surfaces_once() -> anyhow::Result<()> {
    // Arrange
    let (numbers_tx, numbers) = test_channel_with_errors::<i32>();
    let (offsets_tx, offsets) = test_channel::<i32>();
    let mut pipeline = Box::pin(
        numbers
            .distinct_until_changed()
            .combine_latest(offsets.start_with(0))
            .map(|item| item.map(|(n, offset)| n + offset)),
    );

    numbers_tx.unbounded_send(StreamItem::Value(1))?;
    assert_eq!(unwrap_stream(&mut pipeline, 500).await.unwrap(), 1);

    // Act
    numbers_tx.unbounded_send(StreamItem::Error(RivuletError::stream_error("bad reading")))?;

    // Assert
    assert!(unwrap_stream(&mut pipeline, 500).await.is_error());
    let _ = offsets_tx.unbounded_send(5);
    assert!(pipeline.next().await.is_none());
    Ok(())
}
