//! The closed set of gate kinds the substrate can realize.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A gate's logic function.
///
/// Invert and Nor compute in place into a pre-initialized output cell;
/// the initializers drive cells to a fixed level and take no inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GateKind {
    /// Logical NOT: one input, one output.
    Invert,
    /// Logical NOR: two inputs, one output.
    Nor,
    /// Drive one or more cells to logic 0.
    InitZero,
    /// Drive one or more cells to logic 1.
    InitOne,
}

impl GateKind {
    /// Number of input cells this kind reads.
    pub const fn input_arity(&self) -> usize {
        match self {
            GateKind::Invert => 1,
            GateKind::Nor => 2,
            GateKind::InitZero | GateKind::InitOne => 0,
        }
    }

    /// Whether this kind is a cell initializer.
    pub const fn is_init(&self) -> bool {
        matches!(self, GateKind::InitZero | GateKind::InitOne)
    }
}

impl fmt::Display for GateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GateKind::Invert => "invert",
            GateKind::Nor => "nor",
            GateKind::InitZero => "init0",
            GateKind::InitOne => "init1",
        };
        write!(f, "{}", name)
    }
}
