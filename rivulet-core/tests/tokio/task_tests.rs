// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rivulet_core::{Cancellable, CancellationBag, CancellationToken, RivuletTask};
use std::time::Duration;
use tokio::sync::oneshot;

#[tokio::test]
async fn test_drop_cancels_task() -> anyhow::Result<()> {
    // Arrange
    let (done_tx, done_rx) = oneshot::channel();
    let task = RivuletTask::spawn(|cancel| async move {
        cancel.cancelled().await;
        let _ = done_tx.send(());
    });

    // Act
    drop(task);

    // Assert
    tokio::time::timeout(Duration::from_secs(1), done_rx).await??;
    Ok(())
}

#[tokio::test]
async fn test_tasks_sharing_token_cancel_together() -> anyhow::Result<()> {
    // Arrange
    let token = CancellationToken::new();
    let (a_tx, a_rx) = oneshot::channel();
    let (b_tx, b_rx) = oneshot::channel();
    let a = RivuletTask::spawn_with_token(token.clone(), |cancel| async move {
        cancel.cancelled().await;
        let _ = a_tx.send(());
    });
    let _b = RivuletTask::spawn_with_token(token.clone(), |cancel| async move {
        cancel.cancelled().await;
        let _ = b_tx.send(());
    });

    // Act
    a.cancel();

    // Assert
    tokio::time::timeout(Duration::from_secs(1), a_rx).await??;
    tokio::time::timeout(Duration::from_secs(1), b_rx).await??;
    assert!(token.is_cancelled());
    Ok(())
}

#[tokio::test]
async fn test_task_registered_in_bag_is_cancelled_with_it() -> anyhow::Result<()> {
    // Arrange
    let bag = CancellationBag::new();
    let (done_tx, done_rx) = oneshot::channel();
    let task = RivuletTask::spawn(|cancel| async move {
        cancel.cancelled().await;
        let _ = done_tx.send(());
    });
    task.register_in(&bag);

    // Act
    drop(bag);

    // Assert
    tokio::time::timeout(Duration::from_secs(1), done_rx).await??;
    assert!(task.is_cancelled());
    Ok(())
}
