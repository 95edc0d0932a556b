// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// A value from one of two merged inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tagged2<A, B> {
    First(A),
    Second(B),
}

/// A value from one of three merged inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tagged3<A, B, C> {
    First(A),
    Second(B),
    Third(C),
}

/// A value from one of N homogeneous merged inputs.
///
/// `origin` is the input's position in the vector passed to
/// [`merge_indexed`](super::merge_indexed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Indexed<T> {
    pub origin: usize,
    pub payload: T,
}

impl<T> Indexed<T> {
    pub const fn new(origin: usize, payload: T) -> Self {
        Self { origin, payload }
    }

    pub fn into_payload(self) -> T {
        self.payload
    }
}
