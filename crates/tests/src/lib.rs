//! Integration test harness for Lodestone.
//!
//! This crate provides utilities for end-to-end testing of the execution
//! pipeline: build gates → validate operations → apply to a row → inspect
//! cell state.

use lodestone_foundation::{CellRef, Step};
use lodestone_runtime::{CrossbarRow, Gate, Operation, Result};

/// Test harness wrapping a crossbar row.
pub struct RowHarness {
    row: CrossbarRow,
}

impl RowHarness {
    /// Create a harness over a fresh row with the given partition sizes.
    pub fn new(partition_sizes: &[usize]) -> Self {
        Self {
            row: CrossbarRow::new(partition_sizes),
        }
    }

    /// Validate a batch of gates and apply it as one step.
    ///
    /// # Panics
    ///
    /// Panics if the batch fails validation.
    pub fn apply(&mut self, gates: Vec<Gate>) {
        let op = Operation::new(gates).expect("operation validation failed");
        self.row.apply(&op);
    }

    /// Validate a batch of gates and apply it, surfacing validation errors.
    ///
    /// The row is stepped only if validation succeeds.
    pub fn try_apply(&mut self, gates: Vec<Gate>) -> Result<()> {
        let op = Operation::new(gates)?;
        self.row.apply(&op);
        Ok(())
    }

    /// Drive the listed cells to logic 1 as one step.
    pub fn init_one(&mut self, cells: &[CellRef]) {
        let gate = Gate::init_one(cells.to_vec()).expect("initializer needs at least one cell");
        self.apply(vec![gate]);
    }

    /// Drive the listed cells to logic 0 as one step.
    pub fn init_zero(&mut self, cells: &[CellRef]) {
        let gate = Gate::init_zero(cells.to_vec()).expect("initializer needs at least one cell");
        self.apply(vec![gate]);
    }

    /// Read a cell's value.
    ///
    /// # Panics
    ///
    /// Panics if the cell does not exist.
    pub fn get(&self, partition: usize, offset: usize) -> bool {
        self.row
            .get(CellRef::new(partition, offset))
            .expect("cell out of range")
    }

    /// Number of operations applied so far.
    pub fn step(&self) -> Step {
        self.row.step()
    }

    /// Access the underlying row.
    pub fn row(&self) -> &CrossbarRow {
        &self.row
    }
}
