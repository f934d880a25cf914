//! The 2-decision layout: merge sort or a silent increment, then search or
//! reverse.

use crate::arms::ArmId;
use crate::contract::{ArmPair, LayoutV1};

const TABLE: [ArmPair; 2] = [
    ArmPair {
        low: ArmId::MergeSort,
        high: ArmId::InlineIncrement,
    },
    ArmPair {
        low: ArmId::BinarySearch,
        high: ArmId::Reverse,
    },
];

/// Layout behind the `branches-modified` binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct TwoBranch;

impl LayoutV1 for TwoBranch {
    fn layout_id(&self) -> &str {
        "two_branch"
    }

    fn decision_count(&self) -> usize {
        TABLE.len()
    }

    fn arms(&self, index: usize) -> Option<ArmPair> {
        TABLE.get(index).copied()
    }
}
