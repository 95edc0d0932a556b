// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::future::ready;
use futures::StreamExt;
use rivulet_core::{BroadcastSource, RivuletError, StreamItem};
use rivulet_stream::prelude::*;
use std::time::Duration;

const RUNS: usize = 500;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_early_request_is_never_lost_on_worker_threads() -> anyhow::Result<()> {
    for run in 0..RUNS {
        // Arrange
        let (requester, pages) = paginate(
            |token: Option<u32>| {
                let page = token.unwrap_or(0);
                ready(Ok::<_, RivuletError>(Some(Page {
                    content: vec![page],
                    next: page + 1,
                })))
            },
            |mut acc: Vec<u32>, page| {
                acc.extend(page);
                acc
            },
        );
        let mut pages = Box::pin(pages);

        // Act: ask for the second page before the first one exists
        requester.request_next_page();
        let delivered = tokio::time::timeout(Duration::from_secs(1), async {
            let first = pages.next().await;
            let second = pages.next().await;
            (first, second)
        })
        .await;

        // Assert
        let Ok((Some(first), Some(second))) = delivered else {
            panic!("request lost in run {run}");
        };
        assert_eq!(first.unwrap(), vec![0]);
        assert_eq!(second.unwrap(), vec![0, 1]);
    }
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_with_latest_from_pairs_buffered_primary_on_worker_threads() -> anyhow::Result<()> {
    for run in 0..RUNS {
        // Arrange: both inputs already hold a value when the operator starts
        let secondary = BroadcastSource::with_value(run);
        let primary = BroadcastSource::new();
        let mut paired = Box::pin(primary.subscribe().with_latest_from(secondary.subscribe()));
        primary.set("tick");

        // Act
        let item = tokio::time::timeout(Duration::from_secs(1), paired.next()).await;

        // Assert
        assert!(matches!(item, Ok(Some(StreamItem::Value(("tick", value)))) if value == run));
    }
    Ok(())
}
