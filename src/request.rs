//! Validated enumeration requests.
//!
//! All argument checking happens here, before any recursion starts: negative or
//! oversized numbers, unknown mode letters and a missing/extraneous length are
//! reported as [`PartitionError::InvalidInput`].

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::decompose::{Key, Shape};
use crate::error::{PartitionError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
/// What kind of partitions to enumerate.
pub enum Mode {
    /// Compositions: positive parts, every ordering distinct.
    Ordered,
    /// Positive parts in non-increasing order.
    Unordered,
    /// Exactly `length` non-negative parts.
    FixedLength { length: u32, ordered: bool },
}

impl Mode {
    /// Single-letter tag used on the command line and in FORM file names.
    pub fn letter(&self) -> char {
        match self {
            Mode::Ordered => 'o',
            Mode::Unordered => 'u',
            Mode::FixedLength { .. } => 'f',
        }
    }

    pub(crate) fn shape(&self) -> Shape {
        match *self {
            Mode::Ordered => Shape::Compositions,
            Mode::Unordered => Shape::Partitions,
            Mode::FixedLength { ordered: true, .. } => Shape::FixedOrdered,
            Mode::FixedLength { ordered: false, .. } => Shape::FixedUnordered,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Ordered => f.write_str("Ordered"),
            Mode::Unordered => f.write_str("Unordered"),
            Mode::FixedLength { length, .. } => write!(f, "Length-{length}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// A mode letter before the fixed length is known.
pub enum ModeLetter {
    Ordered,
    Unordered,
    FixedLength,
}

impl FromStr for ModeLetter {
    type Err = PartitionError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "o" => Ok(ModeLetter::Ordered),
            "u" => Ok(ModeLetter::Unordered),
            "f" => Ok(ModeLetter::FixedLength),
            other => Err(PartitionError::invalid(format!(
                "unknown mode {other:?}: expected o, u or f"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
/// A validated request: the number to partition and the mode.
pub struct Request {
    pub n: u32,
    pub mode: Mode,
}

impl Request {
    pub fn ordered(n: i64) -> Result<Self> {
        Ok(Self {
            n: checked("number", n)?,
            mode: Mode::Ordered,
        })
    }

    pub fn unordered(n: i64) -> Result<Self> {
        Ok(Self {
            n: checked("number", n)?,
            mode: Mode::Unordered,
        })
    }

    pub fn fixed_length(n: i64, length: i64, ordered: bool) -> Result<Self> {
        Ok(Self {
            n: checked("number", n)?,
            mode: Mode::FixedLength {
                length: checked("length", length)?,
                ordered,
            },
        })
    }

    /// Build a request from command-line pieces.
    ///
    /// `length` must be given for `f` and must be absent otherwise; `ordered` only
    /// affects fixed-length mode.
    pub fn from_parts(
        letter: ModeLetter,
        n: i64,
        length: Option<i64>,
        ordered: bool,
    ) -> Result<Self> {
        match (letter, length) {
            (ModeLetter::Ordered, None) => Self::ordered(n),
            (ModeLetter::Unordered, None) => Self::unordered(n),
            (ModeLetter::FixedLength, Some(len)) => Self::fixed_length(n, len, ordered),
            (ModeLetter::FixedLength, None) => Err(PartitionError::invalid(
                "missing length for fixed-length partitions",
            )),
            (_, Some(len)) => Err(PartitionError::invalid(format!(
                "unexpected length {len}: only fixed-length mode (f) takes a length"
            ))),
        }
    }

    /// Build a request from positional command-line operands, `[MODE] NUMBER [LENGTH]`.
    ///
    /// A leading integer means the mode letter was left out; the mode is then `o`.
    pub fn from_operands<S: AsRef<str>>(operands: &[S], ordered: bool) -> Result<Self> {
        let ops: Vec<&str> = operands.iter().map(AsRef::as_ref).collect();
        let (letter, rest) = match ops.split_first() {
            None => return Err(PartitionError::invalid("missing NUMBER")),
            Some((first, _)) if first.parse::<i64>().is_ok() => (ModeLetter::Ordered, &ops[..]),
            Some((first, rest)) => (first.parse::<ModeLetter>()?, rest),
        };

        match rest {
            [] => Err(PartitionError::invalid("missing NUMBER")),
            [n] => Self::from_parts(letter, integer("number", n)?, None, ordered),
            [n, len] => {
                let length = integer("length", len)?;
                Self::from_parts(letter, integer("number", n)?, Some(length), ordered)
            }
            [_, _, extra @ ..] => {
                Err(PartitionError::invalid(format!("unexpected operands {extra:?}")))
            }
        }
    }

    /// Root subproblem of the decomposition.
    pub(crate) fn root(&self) -> Key {
        let slots = match self.mode {
            Mode::FixedLength { length, .. } => length,
            Mode::Ordered | Mode::Unordered => 0,
        };
        Key::new(self.mode.shape(), self.n, self.n, slots)
    }

    /// File stem of the FORM export: number, mode letter, then the length if any.
    pub fn tag(&self) -> String {
        match self.mode {
            Mode::FixedLength { length, .. } => format!("{}f{}", self.n, length),
            m => format!("{}{}", self.n, m.letter()),
        }
    }
}

fn checked(what: &str, v: i64) -> Result<u32> {
    if v < 0 {
        return Err(PartitionError::invalid(format!(
            "{what} must be non-negative ({v} provided)"
        )));
    }
    u32::try_from(v).map_err(|_| PartitionError::invalid(format!("{what} {v} is too large")))
}

fn integer(what: &str, s: &str) -> Result<i64> {
    s.parse()
        .map_err(|_| PartitionError::invalid(format!("{what} must be an integer ({s:?} provided)")))
}
