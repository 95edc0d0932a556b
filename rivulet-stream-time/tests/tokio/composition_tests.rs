// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rivulet_core::BroadcastSource;
use rivulet_stream::prelude::*;
use rivulet_stream_time::prelude::*;
use rivulet_test_utils::{assert_no_element_emitted, test_channel, unwrap_stream};
use std::time::Duration;
use tokio::time::{advance, pause};

#[tokio::test]
async fn test_combine_latest_then_debounce() -> anyhow::Result<()> {
    // Arrange
    pause();
    let (width_tx, width) = test_channel::<u32>();
    let (height_tx, height) = test_channel::<u32>();
    let mut area = Box::pin(
        width
            .combine_latest(height)
            .debounce(Duration::from_millis(50)),
    );

    // Act
    width_tx.unbounded_send(2)?;
    height_tx.unbounded_send(3)?;
    width_tx.unbounded_send(4)?;
    assert_no_element_emitted(&mut area, 0).await;
    advance(Duration::from_millis(50)).await;

    // Assert
    assert_eq!(unwrap_stream(&mut area, 100).await.unwrap(), (4, 3));
    Ok(())
}

#[tokio::test]
async fn test_start_with_satisfies_timeout() -> anyhow::Result<()> {
    // Arrange
    pause();
    let (_tx, silent) = test_channel::<u32>();
    let mut guarded = Box::pin(silent.start_with(0).timeout(Duration::from_millis(100)));

    // Act
    assert_eq!(unwrap_stream(&mut guarded, 0).await.unwrap(), 0);
    advance(Duration::from_secs(10)).await;

    // Assert
    assert_no_element_emitted(&mut guarded, 0).await;
    Ok(())
}

#[tokio::test]
async fn test_throttled_distinct_broadcast() -> anyhow::Result<()> {
    // Arrange
    pause();
    let level = BroadcastSource::with_value(1);
    let mut alerts = Box::pin(
        level
            .subscribe()
            .distinct_until_changed()
            .throttle(Duration::from_millis(100)),
    );

    // Act & Assert
    assert_eq!(unwrap_stream(&mut alerts, 0).await.unwrap(), 1);

    level.set(2);
    assert_no_element_emitted(&mut alerts, 0).await;

    advance(Duration::from_millis(100)).await;
    level.set(2);
    level.set(3);
    assert_eq!(unwrap_stream(&mut alerts, 0).await.unwrap(), 3);
    Ok(())
}
