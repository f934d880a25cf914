//! The 2-decision layout over indirect dispatch and process control.

use crate::arms::ArmId;
use crate::contract::{ArmPair, LayoutV1};

const TABLE: [ArmPair; 2] = [
    ArmPair {
        low: ArmId::IndirectSingleShot,
        high: ArmId::IndirectLoop,
    },
    ArmPair {
        low: ArmId::SpawnSequential,
        high: ArmId::SpawnBatch,
    },
];

/// Layout behind the `control-arms` binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct ControlArms;

impl LayoutV1 for ControlArms {
    fn layout_id(&self) -> &str {
        "control_arms"
    }

    fn decision_count(&self) -> usize {
        TABLE.len()
    }

    fn arms(&self, index: usize) -> Option<ArmPair> {
        TABLE.get(index).copied()
    }
}
