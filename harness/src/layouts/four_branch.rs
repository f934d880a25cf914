//! The 4-decision layout over the algorithmic kernel arms.
//!
//! | index | low            | high       |
//! |-------|----------------|------------|
//! | 0     | merge sort     | quicksort  |
//! | 1     | binary search  | reverse    |
//! | 2     | primes         | Fibonacci  |
//! | 3     | substring      | compare    |
//!
//! Quicksort and reverse share `array_1`, so `"11.."` prints the reverse
//! of the sorted array.

use crate::arms::ArmId;
use crate::contract::{ArmPair, LayoutV1};

const TABLE: [ArmPair; 4] = [
    ArmPair {
        low: ArmId::MergeSort,
        high: ArmId::QuickSort,
    },
    ArmPair {
        low: ArmId::BinarySearch,
        high: ArmId::Reverse,
    },
    ArmPair {
        low: ArmId::Primes,
        high: ArmId::Fibonacci,
    },
    ArmPair {
        low: ArmId::Substring,
        high: ArmId::Compare,
    },
];

/// Layout behind the `branches` binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct FourBranch;

impl LayoutV1 for FourBranch {
    fn layout_id(&self) -> &str {
        "four_branch"
    }

    fn decision_count(&self) -> usize {
        TABLE.len()
    }

    fn arms(&self, index: usize) -> Option<ArmPair> {
        TABLE.get(index).copied()
    }
}
