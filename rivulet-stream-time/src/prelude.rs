// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Convenience re-exports of the time operators.

pub use crate::debounce::DebounceExt;
#[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
pub use crate::interval::interval;
pub use crate::interval::interval_with_timer;
pub use crate::throttle::ThrottleExt;
pub use crate::timeout::TimeoutExt;

pub use rivulet_runtime::Timer;
