// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Prelude re-exporting every operator trait plus the core stream types.
//!
//! ```
//! use rivulet_stream::prelude::*;
//! ```

pub use crate::combine_latest::CombineLatestExt;
pub use crate::distinct_until_changed::{DistinctUntilChangedByExt, DistinctUntilChangedExt};
pub use crate::merge::{merge3, merge_indexed, Indexed, MergeTaggedExt, Tagged2, Tagged3};
pub use crate::pagination::{paginate, Page, PageRequester};
pub use crate::start_with::StartWithExt;
pub use crate::terminate_on_error::TerminateOnErrorExt;
pub use crate::with_latest_from::WithLatestFromExt;

pub use rivulet_core::{IntoStream, RivuletError, StreamItem};
