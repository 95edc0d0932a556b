// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rivulet_core::{RivuletError, StreamItem};
use rivulet_exec::SubscribeExt;
use rivulet_test_utils::test_data::{person_alice, person_bob, person_charlie, TestData};
use rivulet_test_utils::{test_channel, test_channel_with_errors};
use std::sync::{Arc, Mutex};

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("Test error: {0}")]
struct TestError(String);

type Collected<T> = Arc<Mutex<Vec<T>>>;

#[tokio::test]
async fn test_subscribe_processes_items_in_order() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel();
    let results: Collected<TestData> = Collected::default();

    tx.unbounded_send(person_alice())?;
    tx.unbounded_send(person_bob())?;
    tx.unbounded_send(person_charlie())?;
    drop(tx);

    // Act
    let outcome = stream
        .subscribe(
            {
                let results = results.clone();
                move |item, _token| {
                    results.lock().unwrap().push(item);
                    async { Ok::<(), TestError>(()) }
                }
            },
            None::<fn(TestError)>,
            None,
        )
        .await;

    // Assert
    assert!(outcome.is_ok());
    assert_eq!(
        *results.lock().unwrap(),
        vec![person_alice(), person_bob(), person_charlie()]
    );
    Ok(())
}

#[tokio::test]
async fn test_subscribe_handler_errors_reach_callback() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel::<u32>();
    let processed: Collected<u32> = Collected::default();
    let errors: Collected<TestError> = Collected::default();

    for value in 1..=4 {
        tx.unbounded_send(value)?;
    }
    drop(tx);

    // Act
    let outcome = stream
        .subscribe(
            {
                let processed = processed.clone();
                move |value, _token| {
                    processed.lock().unwrap().push(value);
                    async move {
                        if value % 2 == 0 {
                            Err(TestError(format!("even value {value}")))
                        } else {
                            Ok(())
                        }
                    }
                }
            },
            Some({
                let errors = errors.clone();
                move |error| errors.lock().unwrap().push(error)
            }),
            None,
        )
        .await;

    // Assert: processing continued after each failure
    assert!(outcome.is_ok());
    assert_eq!(*processed.lock().unwrap(), vec![1, 2, 3, 4]);
    assert_eq!(
        *errors.lock().unwrap(),
        vec![
            TestError("even value 2".to_string()),
            TestError("even value 4".to_string())
        ]
    );
    Ok(())
}

#[tokio::test]
async fn test_subscribe_aggregates_unhandled_errors() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel::<u32>();
    for value in [1, 2, 3] {
        tx.unbounded_send(value)?;
    }
    drop(tx);

    // Act
    let outcome = stream
        .subscribe(
            |value, _token| async move {
                if value == 2 {
                    Ok(())
                } else {
                    Err(TestError(format!("rejected {value}")))
                }
            },
            None::<fn(TestError)>,
            None,
        )
        .await;

    // Assert
    match outcome {
        Err(RivuletError::MultipleErrors { count, errors }) => {
            assert_eq!(count, 2);
            assert!(errors.iter().all(RivuletError::is_upstream));
        }
        other => panic!("expected aggregated errors, got {other:?}"),
    }
    Ok(())
}

#[tokio::test]
async fn test_subscribe_returns_stream_error() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel_with_errors::<u32>();
    let processed: Collected<u32> = Collected::default();

    tx.unbounded_send(StreamItem::Value(1))?;
    tx.unbounded_send(StreamItem::Error(RivuletError::stream_error("feed broke")))?;
    tx.unbounded_send(StreamItem::Value(2))?;

    // Act
    let outcome = stream
        .subscribe(
            {
                let processed = processed.clone();
                move |value, _token| {
                    processed.lock().unwrap().push(value);
                    async { Ok::<(), TestError>(()) }
                }
            },
            None::<fn(TestError)>,
            None,
        )
        .await;

    // Assert
    assert!(matches!(
        outcome,
        Err(RivuletError::StreamProcessingError { .. })
    ));
    assert_eq!(*processed.lock().unwrap(), vec![1]);
    Ok(())
}

#[tokio::test]
async fn test_subscribe_stream_error_keeps_earlier_handler_errors() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel_with_errors::<u32>();
    tx.unbounded_send(StreamItem::Value(1))?;
    tx.unbounded_send(StreamItem::Error(RivuletError::stream_error("feed broke")))?;

    // Act
    let outcome = stream
        .subscribe(
            |value, _token| async move { Err::<(), _>(TestError(format!("rejected {value}"))) },
            None::<fn(TestError)>,
            None,
        )
        .await;

    // Assert: the handler error comes first, the stream error last
    match outcome {
        Err(RivuletError::MultipleErrors { count, errors }) => {
            assert_eq!(count, 2);
            assert!(errors[0].is_upstream());
            assert!(matches!(
                errors[1],
                RivuletError::StreamProcessingError { .. }
            ));
        }
        other => panic!("expected handler and stream errors together, got {other:?}"),
    }
    Ok(())
}
