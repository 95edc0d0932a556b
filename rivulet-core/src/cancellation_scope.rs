// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Ownership scopes for cancellable work.
//!
//! Rivulet never decides where a pipeline's lifetime ends. Callers describe that with a
//! [`CancellationScope`]; anything [`Cancellable`] can be registered into it and is cancelled
//! together with the scope.

use crate::logging::debug;
use crate::CancellationToken;
use parking_lot::Mutex;

/// A place cancellable work can be attached to.
pub trait CancellationScope {
    fn register(&self, token: CancellationToken);
}

/// Something that can be cancelled through a [`CancellationToken`].
pub trait Cancellable {
    fn cancellation_token(&self) -> CancellationToken;

    /// Ties this handle's lifetime to `scope`.
    fn register_in<S>(&self, scope: &S)
    where
        S: CancellationScope + ?Sized,
    {
        scope.register(self.cancellation_token());
    }
}

impl Cancellable for CancellationToken {
    fn cancellation_token(&self) -> CancellationToken {
        self.clone()
    }
}

#[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
impl Cancellable for crate::RivuletTask {
    fn cancellation_token(&self) -> CancellationToken {
        self.token().clone()
    }
}

/// A scope that cancels every registered token on [`cancel_all`](Self::cancel_all) or drop.
#[derive(Debug, Default)]
pub struct CancellationBag {
    tokens: Mutex<Vec<CancellationToken>>,
}

impl CancellationBag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel_all(&self) {
        let tokens = std::mem::take(&mut *self.tokens.lock());
        debug!("cancelling {} registered tokens", tokens.len());
        for token in tokens {
            token.cancel();
        }
    }

    pub fn len(&self) -> usize {
        self.tokens.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.lock().is_empty()
    }
}

impl CancellationScope for CancellationBag {
    fn register(&self, token: CancellationToken) {
        let mut tokens = self.tokens.lock();
        tokens.retain(|t| !t.is_cancelled());
        tokens.push(token);
    }
}

impl Drop for CancellationBag {
    fn drop(&mut self) {
        for token in self.tokens.get_mut().drain(..) {
            token.cancel();
        }
    }
}
