//! Crossbar row state and stepping.
//!
//! The row owns all cell state exclusively and advances a monotonic step
//! counter, one step per applied operation. External observers get
//! read-only views; nothing outside the row can alias its partitions.

use tracing::{info, instrument, trace};

use lodestone_foundation::{CellRef, Step};

use crate::operation::Operation;

/// A single row of a partitioned crossbar array.
#[derive(Debug)]
pub struct CrossbarRow {
    /// Cell state per partition; lengths fixed at construction.
    partitions: Vec<Vec<bool>>,
    /// Number of operations applied so far.
    step: Step,
}

impl CrossbarRow {
    /// Allocate a row with the given partition sizes, all cells at `false`.
    pub fn new(partition_sizes: &[usize]) -> Self {
        let partitions: Vec<Vec<bool>> = partition_sizes
            .iter()
            .map(|&size| vec![false; size])
            .collect();
        info!(
            partitions = partitions.len(),
            cells = partitions.iter().map(Vec::len).sum::<usize>(),
            "crossbar row created"
        );
        Self {
            partitions,
            step: 0,
        }
    }

    /// Apply one validated operation as a single physical step.
    ///
    /// Never fails: every structural check already ran when the operation
    /// was constructed.
    #[instrument(skip(self, op), fields(step = self.step, gates = op.len()))]
    pub fn apply(&mut self, op: &Operation) {
        op.apply(&mut self.partitions);
        self.step += 1;
        trace!("step complete");
    }

    /// Number of operations applied so far.
    pub fn step(&self) -> Step {
        self.step
    }

    /// Read-only view of all partitions.
    pub fn partitions(&self) -> &[Vec<bool>] {
        &self.partitions
    }

    /// Read a single cell, if it exists.
    pub fn get(&self, cell: CellRef) -> Option<bool> {
        self.partitions.get(cell.partition)?.get(cell.offset).copied()
    }

    /// Number of partitions in the row.
    pub fn partition_count(&self) -> usize {
        self.partitions.len()
    }

    /// Total number of cells across all partitions.
    pub fn cell_count(&self) -> usize {
        self.partitions.iter().map(Vec::len).sum()
    }
}
