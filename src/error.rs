//! Structured errors returned by the enumerator and its front ends.

use std::path::PathBuf;

use thiserror::Error;

use crate::resources::ResourceCounts;

#[derive(Debug, Error)]
pub enum PartitionError {
    /// Rejected before any recursion starts (negative number, unknown mode, ...).
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    /// A configured resource limit was exceeded.
    #[error(
        "limit exceeded at {stage}: {metric} (limit={limit}, observed={observed}); \
         counts(cache_entries={}, partitions={})",
        .counts.cache_entries,
        .counts.partitions
    )]
    LimitExceeded {
        stage: &'static str,
        metric: &'static str,
        limit: u64,
        observed: u64,
        counts: ResourceCounts,
    },

    /// A `try_reserve` allocation failed for a large structure.
    #[error("allocation failed at {stage} for {structure}")]
    AllocationFailed {
        stage: &'static str,
        structure: &'static str,
        counts: ResourceCounts,
    },

    #[error("i/o error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("json encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl PartitionError {
    pub fn invalid(reason: impl Into<String>) -> Self {
        PartitionError::InvalidInput {
            reason: reason.into(),
        }
    }

    /// True for errors caused by the caller's arguments rather than by the run itself.
    #[inline]
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, PartitionError::InvalidInput { .. })
    }
}

pub type Result<T, E = PartitionError> = std::result::Result<T, E>;
