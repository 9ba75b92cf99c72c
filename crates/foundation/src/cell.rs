//! Cell addressing primitives.
//!
//! A crossbar row is a sequence of fixed-size partitions; a cell is
//! addressed by its partition index and its offset within the partition.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Address of a single storage cell.
///
/// Plain value with structural equality; two refs naming the same
/// (partition, offset) pair name the same cell.
///
/// # Example
/// ```
/// use lodestone_foundation::CellRef;
///
/// let cell = CellRef::new(2, 0);
/// assert_eq!(cell, CellRef { partition: 2, offset: 0 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellRef {
    /// Index of the partition holding the cell.
    pub partition: usize,
    /// Offset of the cell within its partition.
    pub offset: usize,
}

impl CellRef {
    /// Create a cell reference.
    pub const fn new(partition: usize, offset: usize) -> Self {
        Self { partition, offset }
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.partition, self.offset)
    }
}

/// Inclusive range of partition indices reserved by a gate during a step.
///
/// The physical wiring reserves the whole contiguous range between a gate's
/// lowest and highest referenced partition, not just the partitions it
/// actually touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartitionSpan {
    /// Lowest partition index in the range.
    pub min: usize,
    /// Highest partition index in the range.
    pub max: usize,
}

impl PartitionSpan {
    /// Span covering a single partition.
    pub const fn of(partition: usize) -> Self {
        Self {
            min: partition,
            max: partition,
        }
    }

    /// Extend the span to cover `partition`.
    pub fn include(self, partition: usize) -> Self {
        Self {
            min: self.min.min(partition),
            max: self.max.max(partition),
        }
    }

    /// Whether two spans share any partition index.
    ///
    /// # Example
    /// ```
    /// use lodestone_foundation::PartitionSpan;
    ///
    /// let a = PartitionSpan { min: 0, max: 2 };
    /// let b = PartitionSpan { min: 1, max: 3 };
    /// let c = PartitionSpan { min: 3, max: 4 };
    /// assert!(a.overlaps(&b));
    /// assert!(!a.overlaps(&c));
    /// ```
    pub fn overlaps(&self, other: &PartitionSpan) -> bool {
        self.min <= other.max && self.max >= other.min
    }
}

impl fmt::Display for PartitionSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}
