// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Runtime abstraction for the rivulet time operators.

pub mod impls;
pub mod timer;

pub use timer::Timer;

#[cfg(feature = "runtime-tokio")]
pub use impls::tokio::TokioTimer;

#[cfg(feature = "runtime-smol")]
pub use impls::smol::{SmolSleep, SmolTimer};

/// The timer of the enabled runtime.
#[cfg(feature = "runtime-tokio")]
pub type DefaultTimer = TokioTimer;

/// The timer of the enabled runtime.
#[cfg(all(feature = "runtime-smol", not(feature = "runtime-tokio")))]
pub type DefaultTimer = SmolTimer;
