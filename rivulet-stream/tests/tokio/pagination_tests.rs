// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::future::{ready, Ready};
use rivulet_core::{Result, RivuletError, StreamItem};
use rivulet_stream::prelude::*;
use rivulet_test_utils::{assert_no_element_emitted, assert_stream_ended, unwrap_stream};
use std::sync::{Arc, Mutex};

type FetchLog = Arc<Mutex<Vec<Option<u32>>>>;

/// Serves pages `0..=last` where page `n` contains `[n]` and points at `n + 1`.
fn numbered_pages(
    last: u32,
    log: FetchLog,
) -> impl FnMut(Option<u32>) -> Ready<Result<Option<Page<Vec<u32>, u32>>>> + Send + 'static {
    move |token| {
        log.lock().unwrap().push(token);
        let page = token.unwrap_or(0);
        ready(Ok((page <= last).then(|| Page {
            content: vec![page],
            next: page + 1,
        })))
    }
}

fn concat(mut acc: Vec<u32>, page: Vec<u32>) -> Vec<u32> {
    acc.extend(page);
    acc
}

#[tokio::test]
async fn test_pagination_fetches_exactly_one_page_per_request() -> anyhow::Result<()> {
    // Arrange
    let log = FetchLog::default();
    let (requester, pages) = paginate(numbered_pages(2, log.clone()), concat);
    let mut pages = Box::pin(pages);

    // Act & Assert: the first page needs no request
    assert_eq!(unwrap_stream(&mut pages, 500).await.unwrap(), vec![0]);
    assert_no_element_emitted(&mut pages, 50).await;

    requester.request_next_page();
    assert_eq!(unwrap_stream(&mut pages, 500).await.unwrap(), vec![0, 1]);

    requester.request_next_page();
    assert_eq!(unwrap_stream(&mut pages, 500).await.unwrap(), vec![0, 1, 2]);

    requester.request_next_page();
    assert_stream_ended(&mut pages, 500).await;

    requester.request_next_page();
    assert_eq!(
        *log.lock().unwrap(),
        vec![None, Some(1), Some(2), Some(3)]
    );
    Ok(())
}

#[tokio::test]
async fn test_pagination_queues_request_made_before_first_page() -> anyhow::Result<()> {
    // Arrange
    let log = FetchLog::default();
    let (requester, pages) = paginate(numbered_pages(5, log.clone()), concat);
    let mut pages = Box::pin(pages);

    // Act
    requester.request_next_page();

    // Assert
    assert_eq!(unwrap_stream(&mut pages, 500).await.unwrap(), vec![0]);
    assert_eq!(unwrap_stream(&mut pages, 500).await.unwrap(), vec![0, 1]);
    assert_no_element_emitted(&mut pages, 50).await;
    assert_eq!(log.lock().unwrap().len(), 2);
    Ok(())
}

#[tokio::test]
async fn test_pagination_fetch_error_ends_stream() -> anyhow::Result<()> {
    // Arrange
    let (requester, pages) = paginate(
        |token: Option<u32>| {
            ready(match token {
                None => Ok(Some(Page {
                    content: vec![0],
                    next: 1,
                })),
                Some(_) => Err(RivuletError::stream_error("backend unavailable")),
            })
        },
        concat,
    );
    let mut pages = Box::pin(pages);
    assert_eq!(unwrap_stream(&mut pages, 500).await.unwrap(), vec![0]);

    // Act
    requester.request_next_page();

    // Assert
    let item = unwrap_stream(&mut pages, 500).await;
    assert!(matches!(
        item,
        StreamItem::Error(RivuletError::StreamProcessingError { .. })
    ));

    requester.request_next_page();
    assert_stream_ended(&mut pages, 100).await;
    Ok(())
}

#[tokio::test]
async fn test_pagination_ends_when_requesters_dropped() -> anyhow::Result<()> {
    // Arrange
    let log = FetchLog::default();
    let (requester, pages) = paginate(numbered_pages(10, log.clone()), concat);
    let mut pages = Box::pin(pages);
    let second_requester = requester.clone();
    assert_eq!(unwrap_stream(&mut pages, 500).await.unwrap(), vec![0]);

    // Act & Assert: a surviving clone keeps the stream alive
    drop(requester);
    second_requester.request_next_page();
    assert_eq!(unwrap_stream(&mut pages, 500).await.unwrap(), vec![0, 1]);

    drop(second_requester);
    assert_stream_ended(&mut pages, 500).await;
    assert_eq!(log.lock().unwrap().len(), 2);
    Ok(())
}

#[tokio::test]
async fn test_pagination_with_no_pages_at_all() -> anyhow::Result<()> {
    // Arrange
    let (_requester, pages) = paginate(
        |_token: Option<u32>| ready(Ok::<Option<Page<Vec<u32>, u32>>, RivuletError>(None)),
        concat,
    );
    let mut pages = Box::pin(pages);

    // Act & Assert
    assert_stream_ended(&mut pages, 500).await;
    Ok(())
}
