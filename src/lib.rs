//! Enumeration of integer partitions: compositions (ordered), partitions in
//! non-increasing form (unordered), and fixed-length sequences of non-negative parts.
//!
//! Every mode runs on one recursive decomposition (first part + partition of the
//! rest). [`Enumerator`] memoizes it per subproblem; [`Partitions`] walks it lazily.

mod decompose;
pub mod enumerate;
pub mod error;
pub mod form;
pub mod lazy;
pub mod partition;
pub mod render;
pub mod request;
pub mod resources;

pub use enumerate::{
    fixed_length_partitions, ordered_partitions, unordered_partitions, Enumerator,
    EnumeratorStats,
};
pub use error::PartitionError;
pub use lazy::Partitions;
pub use partition::Partition;
pub use request::{Mode, ModeLetter, Request};
pub use resources::ResourceLimits;
