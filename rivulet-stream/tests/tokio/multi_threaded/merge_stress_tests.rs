// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::StreamExt;
use rivulet_core::StreamItem;
use rivulet_stream::prelude::*;
use rivulet_test_utils::test_channel;
use std::collections::HashMap;

const INPUTS: usize = 8;
const VALUES_PER_INPUT: u32 = 100;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_merge_keeps_per_input_order_under_concurrent_producers() -> anyhow::Result<()> {
    // Arrange
    let mut senders = Vec::new();
    let mut inputs = Vec::new();
    for _ in 0..INPUTS {
        let (tx, stream) = test_channel::<u32>();
        senders.push(tx);
        inputs.push(stream);
    }
    let merged = merge_indexed(inputs);

    // Act
    let producers: Vec<_> = senders
        .into_iter()
        .map(|tx| {
            tokio::spawn(async move {
                for value in 0..VALUES_PER_INPUT {
                    tx.unbounded_send(value).expect("merge dropped early");
                    if value % 10 == 0 {
                        tokio::task::yield_now().await;
                    }
                }
            })
        })
        .collect();

    let collected: Vec<StreamItem<Indexed<u32>>> = merged.collect().await;
    for producer in producers {
        producer.await?;
    }

    // Assert
    assert_eq!(collected.len(), INPUTS * VALUES_PER_INPUT as usize);
    let mut per_origin: HashMap<usize, Vec<u32>> = HashMap::new();
    for item in collected {
        let indexed = item.unwrap();
        per_origin.entry(indexed.origin).or_default().push(indexed.payload);
    }
    assert_eq!(per_origin.len(), INPUTS);
    for values in per_origin.values() {
        assert_eq!(*values, (0..VALUES_PER_INPUT).collect::<Vec<_>>());
    }
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_dropping_merge_while_producers_run() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel::<u32>();
    let (other_tx, other) = test_channel::<u32>();
    let mut merged = stream.merge_tagged(other);

    let producer = tokio::spawn(async move {
        let mut sent = 0u32;
        while tx.unbounded_send(sent).is_ok() && other_tx.unbounded_send(sent).is_ok() {
            sent += 1;
            tokio::task::yield_now().await;
        }
        sent
    });

    // Act
    for _ in 0..20 {
        assert!(merged.next().await.is_some_and(|item| item.is_value()));
    }
    drop(merged);

    // Assert: the forwarders release their inputs, which closes the channels
    let sent = tokio::time::timeout(std::time::Duration::from_secs(5), producer).await??;
    assert!(sent >= 10);
    Ok(())
}
