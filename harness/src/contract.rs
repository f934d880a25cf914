//! Layout contract: the minimal trait a harness variant must implement.
//!
//! A layout fixes the decision count and which two arms sit at each
//! decision. Layouts may NOT decode selectors, run arms, or write output
//! (those are dispatcher and arm concerns).

use crate::arms::ArmId;
use crate::selector::Side;

/// The two arms bound to one decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArmPair {
    /// Taken on selector byte `'0'`.
    pub low: ArmId,
    /// Taken on any other byte.
    pub high: ArmId,
}

impl ArmPair {
    /// The arm bound to `side`.
    #[must_use]
    pub const fn pick(self, side: Side) -> ArmId {
        match side {
            Side::Low => self.low,
            Side::High => self.high,
        }
    }
}

/// The contract a harness variant must implement to be run.
pub trait LayoutV1 {
    /// Unique layout identifier (e.g., `"four_branch"`).
    fn layout_id(&self) -> &str;

    /// Number of decisions `K`. Every selector must cover exactly this many.
    fn decision_count(&self) -> usize;

    /// Arms at decision `index`, or `None` if `index >= decision_count()`.
    fn arms(&self, index: usize) -> Option<ArmPair>;
}
