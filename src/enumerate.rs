//! Memoized enumeration.
//!
//! [`Enumerator`] owns a cache from subproblem [`Key`] to the full list of its
//! partitions. Each subproblem is solved once; overlapping recursive calls reuse the
//! shared list, so the work done is proportional to the size of the output rather
//! than to the size of the recursion tree.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use serde::Serialize;
use tracing::{debug, trace};

use crate::decompose::{Cursor, Key};
use crate::error::Result;
use crate::partition::Partition;
use crate::request::Request;
use crate::resources::{ResourceCounts, ResourceLimits, ResourceTracker};

type Solutions = Arc<Vec<Partition>>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
/// Cache statistics, cumulative over the enumerator's lifetime.
pub struct EnumeratorStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: usize,
}

/// Partition enumerator with an instance-scoped memo cache.
///
/// The cache lives as long as the enumerator. Methods take `&mut self`; share an
/// instance between threads only behind a lock.
#[derive(Debug)]
pub struct Enumerator {
    cache: FxHashMap<Key, Solutions>,
    tracker: ResourceTracker,
    hits: u64,
    misses: u64,
}

impl Default for Enumerator {
    fn default() -> Self {
        Self::new()
    }
}

impl Enumerator {
    pub fn new() -> Self {
        Self::with_limits(ResourceLimits::default())
    }

    pub fn with_limits(limits: ResourceLimits) -> Self {
        Self {
            cache: FxHashMap::default(),
            tracker: ResourceTracker::new(limits),
            hits: 0,
            misses: 0,
        }
    }

    /// All compositions of `n`.
    pub fn ordered(&mut self, n: i64) -> Result<Vec<Partition>> {
        self.run(&Request::ordered(n)?)
    }

    /// All partitions of `n` into positive parts, non-increasing.
    pub fn unordered(&mut self, n: i64) -> Result<Vec<Partition>> {
        self.run(&Request::unordered(n)?)
    }

    /// All sequences of `length` non-negative parts summing to `n`.
    pub fn fixed_length(&mut self, n: i64, length: i64, ordered: bool) -> Result<Vec<Partition>> {
        self.run(&Request::fixed_length(n, length, ordered)?)
    }

    /// Enumerate a validated request. The result is a copy; the cache keeps its own.
    pub fn run(&mut self, req: &Request) -> Result<Vec<Partition>> {
        let sols = self.run_shared(req)?;
        Ok(sols.as_ref().clone())
    }

    /// Number of partitions for `req`, without copying them out of the cache.
    pub fn count(&mut self, req: &Request) -> Result<usize> {
        Ok(self.run_shared(req)?.len())
    }

    /// Enumerate a validated request, returning the cached list itself.
    pub fn run_shared(&mut self, req: &Request) -> Result<Arc<Vec<Partition>>> {
        let sols = self.solve(req.root())?;
        let stats = self.stats();
        debug!(
            n = req.n,
            mode = %req.mode,
            results = sols.len(),
            hits = stats.hits,
            misses = stats.misses,
            entries = stats.entries,
            "enumeration finished"
        );
        Ok(sols)
    }

    pub fn stats(&self) -> EnumeratorStats {
        EnumeratorStats {
            hits: self.hits,
            misses: self.misses,
            entries: self.cache.len(),
        }
    }

    #[inline]
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    #[inline]
    pub fn resource_counts(&self) -> ResourceCounts {
        self.tracker.counts()
    }

    /// Drop every cached subproblem. Statistics are kept.
    pub fn clear(&mut self) {
        self.cache.clear();
        self.tracker.reset();
    }

    fn lookup(&mut self, key: &Key) -> Option<Solutions> {
        let hit = self.cache.get(key).map(Arc::clone);
        if hit.is_some() {
            self.hits += 1;
        }
        hit
    }

    fn store(&mut self, key: Key, sols: Vec<Partition>) -> Result<Solutions> {
        self.misses += 1;
        trace!(?key, solutions = sols.len(), "solved subproblem");

        self.tracker.bump_cache_entries("solve", 1)?;
        self.tracker.bump_partitions("solve", sols.len())?;
        self.tracker.try_reserve_map("solve", "cache", &mut self.cache, 1)?;

        let sols = Arc::new(sols);
        self.cache.insert(key, Arc::clone(&sols));
        Ok(sols)
    }

    /// Post-order walk over uncached subproblems.
    ///
    /// Fixed-length keys with a zero part peel one slot per level, so the depth can
    /// reach `length`; pending keys live on a heap stack, not the call stack.
    fn solve(&mut self, key: Key) -> Result<Solutions> {
        if let Some(hit) = self.lookup(&key) {
            return Ok(hit);
        }
        if let Some(base) = key.base() {
            return self.store(key, base.solution().into_iter().collect());
        }

        let mut root = Pending::new(key, 0);
        let mut stack: Vec<Pending> = Vec::new();
        loop {
            let top = stack.last_mut().unwrap_or(&mut root);
            if let Some(head) = top.cursor.advance() {
                let child = top.cursor.key.child(head);
                if let Some(tails) = self.lookup(&child) {
                    top.absorb(head, &tails, &self.tracker)?;
                } else if let Some(base) = child.base() {
                    let tails = self.store(child, base.solution().into_iter().collect())?;
                    top.absorb(head, &tails, &self.tracker)?;
                } else {
                    stack.push(Pending::new(child, head));
                }
                continue;
            }

            let Some(done) = stack.pop() else { break };
            let tails = self.store(done.cursor.key, done.out)?;
            let parent = stack.last_mut().unwrap_or(&mut root);
            parent.absorb(done.head, &tails, &self.tracker)?;
        }
        self.store(root.cursor.key, root.out)
    }
}

/// A subproblem whose heads are still being expanded.
struct Pending {
    cursor: Cursor,
    /// Head the parent chose to reach this key.
    head: u32,
    out: Vec<Partition>,
}

impl Pending {
    fn new(key: Key, head: u32) -> Self {
        Self {
            cursor: Cursor::new(key),
            head,
            out: Vec::new(),
        }
    }

    fn absorb(&mut self, head: u32, tails: &[Partition], tracker: &ResourceTracker) -> Result<()> {
        tracker.try_reserve_vec("solve", "solutions", &mut self.out, tails.len())?;
        self.out.extend(tails.iter().map(|t| t.prepend(head)));
        Ok(())
    }
}

/// All compositions of `n` (ordered partitions), largest first part first.
///
/// Fails with [`crate::PartitionError::InvalidInput`] if `n < 0`.
pub fn ordered_partitions(n: i64) -> Result<Vec<Partition>> {
    run_once(&Request::ordered(n)?)
}

/// All partitions of `n` as non-increasing sequences, in descending lexicographic order.
///
/// Fails with [`crate::PartitionError::InvalidInput`] if `n < 0`.
pub fn unordered_partitions(n: i64) -> Result<Vec<Partition>> {
    run_once(&Request::unordered(n)?)
}

/// All sequences of exactly `length` non-negative integers summing to `n`.
///
/// With `ordered == false` only the non-increasing representative of each multiset is
/// returned. `length == 0` yields the empty sequence for `n == 0` and nothing otherwise.
pub fn fixed_length_partitions(n: i64, length: i64, ordered: bool) -> Result<Vec<Partition>> {
    run_once(&Request::fixed_length(n, length, ordered)?)
}

fn run_once(req: &Request) -> Result<Vec<Partition>> {
    let mut e = Enumerator::new();
    let sols = e.run_shared(req)?;
    // Release the cache so the root list is uniquely owned and can be moved out.
    drop(e);
    Ok(Arc::unwrap_or_clone(sols))
}
