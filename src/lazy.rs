//! Lazy enumeration for callers that stop early.
//!
//! [`Partitions`] walks the same decomposition as [`crate::Enumerator`] with an
//! explicit stack instead of a cache, producing one partition per `next()` call. It
//! yields exactly the eager enumerator's sequence, so `.take(k)` returns the first
//! `k` results without building the rest.

use std::iter::FusedIterator;

use crate::decompose::{Base, Cursor};
use crate::partition::Partition;
use crate::request::Request;

/// Iterator over the partitions of a [`Request`], in enumeration order.
///
/// Cloning snapshots the position, so a clone resumes where the original was.
#[derive(Debug, Clone)]
pub struct Partitions {
    stack: Vec<Cursor>,
    /// Heads chosen so far; always one shorter than `stack`.
    prefix: Vec<u32>,
    /// Result of a root that needs no decomposition (`n == 0` or `length == 0`).
    root_base: Option<Partition>,
}

impl Partitions {
    pub fn new(req: &Request) -> Self {
        let root = req.root();
        match root.base() {
            Some(base) => Self {
                stack: Vec::new(),
                prefix: Vec::new(),
                root_base: base.solution(),
            },
            None => Self {
                stack: vec![Cursor::new(root)],
                prefix: Vec::new(),
                root_base: None,
            },
        }
    }
}

impl Iterator for Partitions {
    type Item = Partition;

    fn next(&mut self) -> Option<Partition> {
        if let Some(p) = self.root_base.take() {
            return Some(p);
        }

        loop {
            let top = self.stack.last_mut()?;
            let Some(head) = top.advance() else {
                self.stack.pop();
                self.prefix.pop();
                continue;
            };

            let child = top.key.child(head);
            self.prefix.push(head);
            match child.base() {
                Some(Base::Zeros(n)) => {
                    let mut parts = Vec::with_capacity(self.prefix.len() + n as usize);
                    parts.extend_from_slice(&self.prefix);
                    parts.resize(parts.len() + n as usize, 0);
                    self.prefix.pop();
                    return Some(Partition::from(parts));
                }
                Some(Base::Unsolvable) => {
                    self.prefix.pop();
                }
                None => self.stack.push(Cursor::new(child)),
            }
        }
    }
}

impl FusedIterator for Partitions {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enumerate::Enumerator;

    fn lazy(req: &Request) -> Vec<Partition> {
        Partitions::new(req).collect()
    }

    #[test]
    fn matches_memoized_order() {
        let mut e = Enumerator::new();
        let reqs = [
            Request::ordered(6).unwrap(),
            Request::unordered(9).unwrap(),
            Request::fixed_length(5, 3, true).unwrap(),
            Request::fixed_length(7, 3, false).unwrap(),
            Request::fixed_length(0, 4, false).unwrap(),
        ];
        for req in &reqs {
            assert_eq!(lazy(req), e.run(req).unwrap(), "{req:?}");
        }
    }

    #[test]
    fn roots_without_decomposition() {
        assert_eq!(lazy(&Request::unordered(0).unwrap()), vec![Partition::empty()]);
        assert_eq!(lazy(&Request::fixed_length(0, 0, true).unwrap()), vec![Partition::empty()]);
        assert_eq!(lazy(&Request::fixed_length(0, 3, false).unwrap()), vec![Partition::zeros(3)]);
        assert!(lazy(&Request::fixed_length(3, 0, true).unwrap()).is_empty());
    }

    #[test]
    fn take_stops_early_and_clone_resumes() {
        let req = Request::ordered(20).unwrap();
        let mut it = Partitions::new(&req);
        let first: Vec<_> = it.by_ref().take(3).collect();
        assert_eq!(first[0].parts(), &[20]);
        assert_eq!(first[1].parts(), &[19, 1]);
        assert_eq!(first[2].parts(), &[18, 2]);

        let snapshot = it.clone();
        assert_eq!(it.next(), snapshot.clone().next());
    }

    #[test]
    fn exhausted_stays_exhausted() {
        let mut it = Partitions::new(&Request::unordered(2).unwrap());
        assert_eq!(it.by_ref().count(), 2);
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
    }
}
