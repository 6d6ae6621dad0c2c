use std::fmt;
use std::ops::Deref;

use serde::Serialize;

/// One partition: an immutable sequence of parts.
///
/// Parts are positive for ordered/unordered enumeration and may be zero in
/// fixed-length mode. `Display` joins the parts with commas.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Partition(Vec<u32>);

impl Partition {
    /// The empty partition (the only partition of 0, and of length 0).
    #[inline]
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// `n` zero parts: the only way to fill `n` slots once the sum is used up.
    pub fn zeros(n: u32) -> Self {
        Self(vec![0; n as usize])
    }

    #[inline]
    pub fn parts(&self) -> &[u32] {
        &self.0
    }

    pub fn sum(&self) -> u64 {
        self.0.iter().map(|&p| p as u64).sum()
    }

    /// True when parts never increase left to right (canonical unordered form).
    pub fn is_non_increasing(&self) -> bool {
        self.0.windows(2).all(|w| w[0] >= w[1])
    }

    /// `head` followed by the parts of `self`.
    pub(crate) fn prepend(&self, head: u32) -> Self {
        let mut v = Vec::with_capacity(self.0.len() + 1);
        v.push(head);
        v.extend_from_slice(&self.0);
        Self(v)
    }

    /// Parts joined with `sep`.
    pub fn join(&self, sep: &str) -> String {
        let mut out = String::new();
        for (i, p) in self.0.iter().enumerate() {
            if i > 0 {
                out.push_str(sep);
            }
            out.push_str(&p.to_string());
        }
        out
    }

    #[inline]
    pub fn into_vec(self) -> Vec<u32> {
        self.0
    }
}

impl Deref for Partition {
    type Target = [u32];

    #[inline]
    fn deref(&self) -> &[u32] {
        &self.0
    }
}

impl From<Vec<u32>> for Partition {
    #[inline]
    fn from(parts: Vec<u32>) -> Self {
        Self(parts)
    }
}

impl From<&[u32]> for Partition {
    #[inline]
    fn from(parts: &[u32]) -> Self {
        Self(parts.to_vec())
    }
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.join(","))
    }
}
