//! Resource tracking and allocation guards for enumeration.
//!
//! Partition counts grow exponentially in `n`, and the memo cache keeps every solved
//! subproblem alive. To avoid hard OOM aborts, the enumerator uses:
//! - counter-based budgets ([`ResourceLimits`])
//! - `try_reserve` wrappers to surface allocation failures as [`PartitionError`]
//!
//! Budgets are counted in entries and partitions, not bytes.

use serde::Serialize;

use crate::error::PartitionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Enumeration budgets.
///
/// - `max_cache_entries`: number of distinct subproblems kept in the memo cache
/// - `max_partitions`: total number of partitions (including shared suffixes) stored in it
pub struct ResourceLimits {
    pub max_cache_entries: usize,
    pub max_partitions: usize,
}

impl ResourceLimits {
    /// No budget at all; enumeration always runs to completion.
    pub const UNBOUNDED: Self = Self {
        max_cache_entries: usize::MAX,
        max_partitions: usize::MAX,
    };

    pub fn with_max_partitions(mut self, max: usize) -> Self {
        self.max_partitions = max;
        self
    }

    pub fn with_max_cache_entries(mut self, max: usize) -> Self {
        self.max_cache_entries = max;
        self
    }
}

impl Default for ResourceLimits {
    fn default() -> Self {
        Self::UNBOUNDED
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
/// Running counters tracked while the cache grows.
pub struct ResourceCounts {
    pub cache_entries: u64,
    pub partitions: u64,
}

#[derive(Debug, Clone)]
/// Tracks budgets/counters for one enumerator.
pub struct ResourceTracker {
    limits: ResourceLimits,
    counts: ResourceCounts,
}

impl ResourceTracker {
    #[inline]
    pub fn new(limits: ResourceLimits) -> Self {
        Self {
            limits,
            counts: ResourceCounts::default(),
        }
    }

    #[inline]
    pub fn counts(&self) -> ResourceCounts {
        self.counts
    }

    #[inline]
    pub fn bump_cache_entries(
        &mut self,
        stage: &'static str,
        delta: usize,
    ) -> Result<(), PartitionError> {
        self.bump(
            stage,
            "cache_entries",
            delta as u64,
            self.limits.max_cache_entries as u64,
            |c| &mut c.cache_entries,
        )
    }

    #[inline]
    pub fn bump_partitions(
        &mut self,
        stage: &'static str,
        delta: usize,
    ) -> Result<(), PartitionError> {
        self.bump(
            stage,
            "partitions",
            delta as u64,
            self.limits.max_partitions as u64,
            |c| &mut c.partitions,
        )
    }

    /// Forget everything counted so far (the cache was dropped).
    #[inline]
    pub fn reset(&mut self) {
        self.counts = ResourceCounts::default();
    }

    fn bump(
        &mut self,
        stage: &'static str,
        metric: &'static str,
        delta: u64,
        limit: u64,
        field: impl FnOnce(&mut ResourceCounts) -> &mut u64,
    ) -> Result<(), PartitionError> {
        let observed = {
            let v = field(&mut self.counts);
            *v = v.saturating_add(delta);
            *v
        };

        if observed > limit {
            return Err(PartitionError::LimitExceeded {
                stage,
                metric,
                limit,
                observed,
                counts: self.counts,
            });
        }

        Ok(())
    }

    pub fn try_reserve_vec<T>(
        &self,
        stage: &'static str,
        structure: &'static str,
        v: &mut Vec<T>,
        additional: usize,
    ) -> Result<(), PartitionError> {
        v.try_reserve(additional)
            .map_err(|_| PartitionError::AllocationFailed {
                stage,
                structure,
                counts: self.counts,
            })
    }

    pub fn try_reserve_map<K, V>(
        &self,
        stage: &'static str,
        structure: &'static str,
        map: &mut rustc_hash::FxHashMap<K, V>,
        additional: usize,
    ) -> Result<(), PartitionError>
    where
        K: std::hash::Hash + Eq,
    {
        map.try_reserve(additional)
            .map_err(|_| PartitionError::AllocationFailed {
                stage,
                structure,
                counts: self.counts,
            })
    }
}
