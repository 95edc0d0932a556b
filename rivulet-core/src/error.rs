// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types shared by every rivulet stream.
//!
//! Every failure travelling through a pipeline is a [`RivuletError`] wrapped in
//! [`StreamItem::Error`](crate::StreamItem::Error). Errors are terminal: the operator that
//! forwards one produces nothing afterwards.
//!
//! # Examples
//!
//! ```
//! use rivulet_core::{RivuletError, Result};
//!
//! fn load_page() -> Result<()> {
//!     Err(RivuletError::stream_error("backend not reachable"))
//! }
//!
//! assert!(load_page().is_err());
//! ```

use std::error::Error;
use std::sync::Arc;

/// Root error type for all rivulet operations.
///
/// The type is cheap to clone: upstream failures are kept behind an [`Arc`], so a clone
/// still refers to the very same source error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RivuletError {
    /// An input sequence or a caller-supplied function failed.
    #[error("Upstream failure: {0}")]
    UpstreamFailure(#[source] Arc<dyn Error + Send + Sync>),

    /// No first value arrived within the configured duration.
    #[error("Timeout error: {context}")]
    TimeoutError { context: String },

    /// A failure raised by the toolkit itself.
    #[error("Stream processing error: {context}")]
    StreamProcessingError { context: String },

    /// Several handler failures, aggregated.
    #[error("Multiple errors occurred: {count} errors")]
    MultipleErrors {
        count: usize,
        errors: Vec<RivuletError>,
    },
}

impl RivuletError {
    pub fn upstream(error: impl Error + Send + Sync + 'static) -> Self {
        Self::UpstreamFailure(Arc::new(error))
    }

    pub fn stream_error(context: impl Into<String>) -> Self {
        Self::StreamProcessingError {
            context: context.into(),
        }
    }

    pub fn timeout_error(context: impl Into<String>) -> Self {
        Self::TimeoutError {
            context: context.into(),
        }
    }

    /// Aggregates several errors into one [`RivuletError::MultipleErrors`].
    pub fn from_errors<E>(errors: Vec<E>) -> Self
    where
        E: Into<RivuletError>,
    {
        let errors: Vec<RivuletError> = errors.into_iter().map(Into::into).collect();
        Self::MultipleErrors {
            count: errors.len(),
            errors,
        }
    }

    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::TimeoutError { .. })
    }

    #[must_use]
    pub const fn is_upstream(&self) -> bool {
        matches!(self, Self::UpstreamFailure(_))
    }

    /// Returns the original upstream error, if this is an upstream failure.
    #[must_use]
    pub fn upstream_source(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        match self {
            Self::UpstreamFailure(inner) => Some(inner.as_ref()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, RivuletError>;

/// Conversion of arbitrary errors into [`RivuletError::UpstreamFailure`].
pub trait IntoRivuletError {
    fn into_rivulet_error(self) -> RivuletError;
}

impl<E: Error + Send + Sync + 'static> IntoRivuletError for E {
    fn into_rivulet_error(self) -> RivuletError {
        RivuletError::upstream(self)
    }
}

/// Adds context to a failed result, turning it into a [`RivuletError::StreamProcessingError`].
pub trait ResultExt<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Error + Send + Sync + 'static,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| RivuletError::StreamProcessingError {
            context: format!("{}: {e}", context.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| RivuletError::StreamProcessingError {
            context: format!("{}: {e}", f()),
        })
    }
}
