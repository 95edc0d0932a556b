// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! On-demand pagination with folding.
//!
//! [`paginate`] returns a [`PageRequester`] and a stream of accumulated results:
//!
//! 1. The first page is fetched with no token as soon as the stream is polled.
//! 2. Every [`PageRequester::request_next_page`] call drives exactly one more fetch, using
//!    the token returned with the previous page.
//! 3. Each page is folded into the accumulated value with the caller's reducer; the
//!    accumulated value is what the stream yields.
//! 4. The stream ends the first time the fetch function reports no more pages, or once
//!    every `PageRequester` clone is dropped. A fetch error is yielded and ends the stream.
//!
//! Internally the next token lives in a [`BroadcastSource`] and requests are a second
//! `BroadcastSource<()>`; `requests.with_latest_from(token)` pairs each request with the token
//! it is served with. The token is published before the pagination stream polls for the next
//! request, and `with_latest_from` applies pending secondary values before pairing, so no
//! request is ever paired with a stale token or dropped. A request issued before the first
//! page is delivered is queued and served right after it.
//!
//! # Examples
//!
//! ```rust
//! use futures::StreamExt;
//! use rivulet_core::RivuletError;
//! use rivulet_stream::pagination::{paginate, Page};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let (requester, pages) = paginate(
//!     |token: Option<u32>| async move {
//!         let page = token.unwrap_or(0);
//!         Ok::<_, RivuletError>((page < 2).then(|| Page {
//!             content: vec![page],
//!             next: page + 1,
//!         }))
//!     },
//!     |mut acc: Vec<u32>, page| {
//!         acc.extend(page);
//!         acc
//!     },
//! );
//! let mut pages = Box::pin(pages);
//!
//! assert_eq!(pages.next().await.unwrap().unwrap(), vec![0]);
//!
//! requester.request_next_page();
//! assert_eq!(pages.next().await.unwrap().unwrap(), vec![0, 1]);
//!
//! requester.request_next_page();
//! assert!(pages.next().await.is_none());
//! # }
//! ```

use crate::logging::debug;
use crate::with_latest_from::WithLatestFromExt;
use core::future::Future;
use core::pin::Pin;
use futures::stream::{self, Stream, StreamExt};
use rivulet_core::{BroadcastSource, Result, StreamItem};
use std::sync::Arc;

/// One fetched page: its content and the token of the page after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T, K> {
    pub content: T,
    pub next: K,
}

/// Handle asking the pagination stream for one more page.
///
/// Clones share the same trigger. The stream ends once every clone is dropped.
#[derive(Debug, Clone)]
pub struct PageRequester {
    trigger: Arc<BroadcastSource<()>>,
}

impl PageRequester {
    pub fn request_next_page(&self) {
        self.trigger.set(());
    }
}

/// Position of the pagination: the next token and everything folded so far.
///
/// The token is published through a broadcast source; the request stream subscribes to it.
#[derive(Debug)]
struct Cursor<T, K> {
    token: BroadcastSource<K>,
    accumulated: Option<T>,
}

type RequestStream<K> = Pin<Box<dyn Stream<Item = StreamItem<((), K)>> + Send>>;

struct Pagination<T, K, F, R> {
    fetch: F,
    reduce: R,
    cursor: Cursor<T, K>,
    requests: RequestStream<K>,
    fetched_first: bool,
}

impl<T, K, F, Fut, R> Pagination<T, K, F, R>
where
    T: Clone,
    K: Clone,
    F: FnMut(Option<K>) -> Fut,
    Fut: Future<Output = Result<Option<Page<T, K>>>>,
    R: FnMut(T, T) -> T,
{
    /// Waits until a fetch is due and returns the token to fetch with.
    ///
    /// `None` once no more requests can arrive.
    async fn next_request(&mut self) -> Option<Result<Option<K>>> {
        if !self.fetched_first {
            self.fetched_first = true;
            return Some(Ok(None));
        }

        match self.requests.next().await? {
            StreamItem::Value(((), token)) => Some(Ok(Some(token))),
            StreamItem::Error(error) => Some(Err(error)),
        }
    }

    /// Folds `page` into the cursor and returns the new accumulated value.
    fn fold(&mut self, page: Page<T, K>) -> T {
        let accumulated = match self.cursor.accumulated.take() {
            Some(previous) => (self.reduce)(previous, page.content),
            None => page.content,
        };
        self.cursor.accumulated = Some(accumulated.clone());
        self.cursor.token.set(page.next);
        accumulated
    }
}

/// Creates a pagination stream driven by a [`PageRequester`].
///
/// `fetch` receives `None` for the first page and the previous page's `next` token
/// afterwards. It resolves to `Ok(None)` when there are no more pages.
pub fn paginate<T, K, F, Fut, R>(
    fetch: F,
    reduce: R,
) -> (PageRequester, impl Stream<Item = StreamItem<T>> + Send)
where
    T: Clone + Send + 'static,
    K: Clone + Send + 'static,
    F: FnMut(Option<K>) -> Fut + Send + 'static,
    Fut: Future<Output = Result<Option<Page<T, K>>>> + Send,
    R: FnMut(T, T) -> T + Send + 'static,
{
    let trigger = Arc::new(BroadcastSource::new());
    let token_source = BroadcastSource::new();
    let requests: RequestStream<K> =
        Box::pin(trigger.subscribe().with_latest_from(token_source.subscribe()));

    let pagination = Pagination {
        fetch,
        reduce,
        cursor: Cursor {
            token: token_source,
            accumulated: None,
        },
        requests,
        fetched_first: false,
    };

    let pages = stream::unfold(Some(pagination), |state| async move {
        let mut pagination = state?;

        let token = match pagination.next_request().await? {
            Ok(token) => token,
            Err(error) => return Some((StreamItem::Error(error), None)),
        };

        debug!("fetching page (first: {})", token.is_none());
        match (pagination.fetch)(token).await {
            Ok(Some(page)) => {
                let accumulated = pagination.fold(page);
                Some((StreamItem::Value(accumulated), Some(pagination)))
            }
            Ok(None) => {
                debug!("no more pages");
                None
            }
            Err(error) => Some((StreamItem::Error(error), None)),
        }
    });

    (PageRequester { trigger }, pages)
}
