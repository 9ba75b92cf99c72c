//! Gate model and execution semantics.
//!
//! A gate binds a logic function to specific cells. Invert and Nor compute
//! correctly only into an output cell that was driven to `true` by an
//! InitOne in an earlier step; an uninitialized output reads back `false`
//! whatever the inputs. That precondition is a caller contract, not a
//! checked invariant. It is how the physical device behaves.

use lodestone_foundation::{CellRef, GateKind, PartitionSpan};

use crate::error::{Error, Result};

/// A single logic gate bound to input and output cells.
///
/// Constructed once, immutable thereafter. Cell counts are validated
/// against the kind's arity at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gate {
    kind: GateKind,
    inputs: Vec<CellRef>,
    outputs: Vec<CellRef>,
}

impl Gate {
    /// Create a gate, validating arity against the kind.
    ///
    /// Invert takes 1 input and 1 output, Nor takes 2 inputs and 1 output,
    /// the initializers take no inputs and at least one output.
    pub fn new(kind: GateKind, inputs: Vec<CellRef>, outputs: Vec<CellRef>) -> Result<Self> {
        let inputs_ok = inputs.len() == kind.input_arity();
        let outputs_ok = if kind.is_init() {
            !outputs.is_empty()
        } else {
            outputs.len() == 1
        };
        if !inputs_ok || !outputs_ok {
            return Err(Error::ArityMismatch {
                kind,
                inputs: inputs.len(),
                outputs: outputs.len(),
            });
        }
        Ok(Self {
            kind,
            inputs,
            outputs,
        })
    }

    /// Invert gate: `output = !input`, given a pre-initialized output.
    pub fn invert(input: CellRef, output: CellRef) -> Self {
        Self {
            kind: GateKind::Invert,
            inputs: vec![input],
            outputs: vec![output],
        }
    }

    /// Nor gate: `output = !(a || b)`, given a pre-initialized output.
    pub fn nor(a: CellRef, b: CellRef, output: CellRef) -> Self {
        Self {
            kind: GateKind::Nor,
            inputs: vec![a, b],
            outputs: vec![output],
        }
    }

    /// Initializer driving every listed cell to logic 0.
    pub fn init_zero(outputs: Vec<CellRef>) -> Result<Self> {
        Self::new(GateKind::InitZero, Vec::new(), outputs)
    }

    /// Initializer driving every listed cell to logic 1.
    pub fn init_one(outputs: Vec<CellRef>) -> Result<Self> {
        Self::new(GateKind::InitOne, Vec::new(), outputs)
    }

    /// The gate's logic function.
    pub fn kind(&self) -> GateKind {
        self.kind
    }

    /// Input cells in positional order.
    pub fn inputs(&self) -> &[CellRef] {
        &self.inputs
    }

    /// Output cells in positional order.
    pub fn outputs(&self) -> &[CellRef] {
        &self.outputs
    }

    /// Inclusive range of partition indices this gate reserves for a step.
    pub fn span(&self) -> PartitionSpan {
        let mut span = PartitionSpan::of(self.outputs[0].partition);
        for cell in self.inputs.iter().chain(&self.outputs) {
            span = span.include(cell.partition);
        }
        span
    }

    /// Apply this gate's semantics to the partition state.
    ///
    /// Writes only the cells named in `outputs`; reads only the cells named
    /// in `inputs` and `outputs`.
    pub(crate) fn apply(&self, partitions: &mut [Vec<bool>]) {
        match self.kind {
            GateKind::Invert => {
                let input = read(partitions, self.inputs[0]);
                let out = self.outputs[0];
                let current = partitions[out.partition][out.offset];
                partitions[out.partition][out.offset] = !input && current;
            }
            GateKind::Nor => {
                let a = read(partitions, self.inputs[0]);
                let b = read(partitions, self.inputs[1]);
                let out = self.outputs[0];
                let current = partitions[out.partition][out.offset];
                partitions[out.partition][out.offset] = !(a || b) && current;
            }
            GateKind::InitZero => {
                for out in &self.outputs {
                    partitions[out.partition][out.offset] = false;
                }
            }
            GateKind::InitOne => {
                for out in &self.outputs {
                    partitions[out.partition][out.offset] = true;
                }
            }
        }
    }
}

fn read(partitions: &[Vec<bool>], cell: CellRef) -> bool {
    partitions[cell.partition][cell.offset]
}

/// Whether two gates contend for partition resources within one step.
///
/// Coarse range test: each gate occupies the entire contiguous partition
/// range between its lowest- and highest-indexed cell reference, because
/// the wiring reserves that whole range during the step. Gates may touch
/// partitions outside each other's ranges without colliding.
pub fn collides(first: &Gate, second: &Gate) -> bool {
    first.span().overlaps(&second.span())
}
