//! Construction errors.
//!
//! All validation is eager: errors arise when building gates and
//! operations, never when applying them to a row.

use thiserror::Error;

use lodestone_foundation::{GateKind, PartitionSpan};

/// Runtime result type
pub type Result<T> = std::result::Result<T, Error>;

/// Construction errors
#[derive(Debug, Error)]
pub enum Error {
    #[error("arity mismatch: {kind} gate cannot take {inputs} input(s) and {outputs} output(s)")]
    ArityMismatch {
        kind: GateKind,
        inputs: usize,
        outputs: usize,
    },

    #[error("gates collide: partition spans {first} and {second} overlap")]
    Collision {
        first: PartitionSpan,
        second: PartitionSpan,
    },

    #[error("irregular operation structure: {message}")]
    IrregularStructure { message: String },

    #[error("operation contains no gates")]
    EmptyOperation,
}
