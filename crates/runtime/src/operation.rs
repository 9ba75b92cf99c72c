//! Validated gate batches.
//!
//! An operation is an ordered batch of gates intended to execute as one
//! simultaneous physical step. All validation happens here, at
//! construction; a value of type [`Operation`] has always passed every
//! check and can be applied without failure.

use tracing::{debug, error};

use lodestone_foundation::GateKind;

use crate::error::{Error, Result};
use crate::gate::{collides, Gate};

/// An ordered, validated batch of gates executing as one step.
#[derive(Debug, Clone)]
pub struct Operation {
    gates: Vec<Gate>,
}

impl Operation {
    /// Validate a batch of gates into an operation.
    ///
    /// Two tiers of checks run in order. Tier 1: every pair of distinct
    /// gates must be collision-free. Tier 2 (skipped when the batch is
    /// uniformly InitZero or uniformly InitOne): the batch must be
    /// realizable with a single shared wiring pattern: identical
    /// per-position intra-partition offsets, single-partition inputs, one
    /// signal direction, one input-to-output distance, and evenly spaced
    /// input partitions.
    pub fn new(gates: Vec<Gate>) -> Result<Self> {
        validate(&gates)?;
        debug!(gates = gates.len(), "operation validated");
        Ok(Self { gates })
    }

    /// Gates in application order.
    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    /// Number of gates in the batch.
    pub fn len(&self) -> usize {
        self.gates.len()
    }

    /// Whether the batch holds no gates. Always false for a validated
    /// operation; provided for completeness.
    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    /// Apply every gate in sequence order.
    ///
    /// Tier-1 validation guarantees the gates' partition ranges are
    /// pairwise disjoint, so application order cannot change the final
    /// state.
    pub(crate) fn apply(&self, partitions: &mut [Vec<bool>]) {
        for gate in &self.gates {
            gate.apply(partitions);
        }
    }
}

fn validate(gates: &[Gate]) -> Result<()> {
    if gates.is_empty() {
        error!("operation constructed without gates");
        return Err(Error::EmptyOperation);
    }

    // Tier 1: no two distinct gates may share partition resources.
    for (i, first) in gates.iter().enumerate() {
        for second in &gates[i + 1..] {
            if collides(first, second) {
                error!(first = %first.span(), second = %second.span(), "gate collision");
                return Err(Error::Collision {
                    first: first.span(),
                    second: second.span(),
                });
            }
        }
    }

    // Uniform initializer batches need no shared wiring pattern.
    let uniform_init = gates.iter().all(|g| g.kind() == GateKind::InitZero)
        || gates.iter().all(|g| g.kind() == GateKind::InitOne);
    if uniform_init {
        return Ok(());
    }

    // A batch of initializers that mixes levels cannot share one pattern.
    if gates.iter().all(|g| g.kind().is_init()) {
        return Err(irregular("initializer kinds are mixed"));
    }

    // Standardized addressing: same shape and intra-partition offsets as
    // the first gate. Partition indices may differ; offsets may not.
    let first = &gates[0];
    for gate in gates {
        if gate.inputs().len() != first.inputs().len()
            || gate.outputs().len() != first.outputs().len()
        {
            return Err(irregular("gate shapes differ within the batch"));
        }
        let offsets_match = gate
            .inputs()
            .iter()
            .zip(first.inputs())
            .chain(gate.outputs().iter().zip(first.outputs()))
            .all(|(a, b)| a.offset == b.offset);
        if !offsets_match {
            return Err(irregular("intra-partition offsets differ across gates"));
        }
    }

    // No split input: each gate reads from exactly one partition.
    for gate in gates {
        let home = gate.inputs()[0].partition;
        if gate.inputs().iter().any(|cell| cell.partition != home) {
            return Err(irregular("gate inputs span more than one partition"));
        }
    }

    // Uniform direction: signal flow points the same way for every gate.
    let forward = |g: &Gate| g.inputs()[0].partition < g.outputs()[0].partition;
    if gates.iter().any(|g| forward(g) != forward(first)) {
        return Err(irregular("signal directions are mixed"));
    }

    // Uniform distance between input and output partitions.
    let distance = |g: &Gate| g.inputs()[0].partition as i64 - g.outputs()[0].partition as i64;
    if gates.iter().any(|g| distance(g) != distance(first)) {
        return Err(irregular("input-to-output distances differ"));
    }

    // Periodicity: input partitions form an arithmetic progression in the
    // given gate order.
    let strides: Vec<i64> = gates
        .windows(2)
        .map(|pair| pair[1].inputs()[0].partition as i64 - pair[0].inputs()[0].partition as i64)
        .collect();
    if strides.windows(2).any(|pair| pair[0] != pair[1]) {
        return Err(irregular("input partitions are not evenly spaced"));
    }

    Ok(())
}

fn irregular(reason: &str) -> Error {
    error!(reason, "irregular operation structure");
    Error::IrregularStructure {
        message: reason.to_string(),
    }
}
