//! Branch Dispatcher: decisions in, arm invocations out.
//!
//! The dispatcher walks decisions `0..K` in order, looks up the arm the
//! layout binds to the chosen side, and invokes it exactly once. It writes
//! nothing itself; every output byte comes from an arm. The first arm
//! error ends the walk.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::arms::{arm_entry, dispatch_table, ArmContext, ArmError, ArmHandler, ArmId};
use crate::contract::LayoutV1;
use crate::selector::Selector;
use crate::transcript::StepRecord;

/// Sequencer over one layout.
pub struct Dispatcher<'l> {
    layout: &'l dyn LayoutV1,
    handlers: BTreeMap<ArmId, ArmHandler>,
}

impl<'l> Dispatcher<'l> {
    /// A dispatcher over `layout` with the standard arm table.
    #[must_use]
    pub fn new(layout: &'l dyn LayoutV1) -> Self {
        Self::with_handlers(layout, dispatch_table())
    }

    /// A dispatcher with explicit handlers. Used to exercise the
    /// fail-closed path.
    #[must_use]
    pub fn with_handlers(layout: &'l dyn LayoutV1, handlers: BTreeMap<ArmId, ArmHandler>) -> Self {
        Self { layout, handlers }
    }

    /// Execute the path `selector` encodes.
    ///
    /// # Errors
    ///
    /// Returns the first [`ArmError`]. Decisions after the failing one are
    /// not evaluated.
    pub fn dispatch(
        &self,
        selector: &Selector,
        ctx: &mut ArmContext<'_>,
    ) -> Result<Vec<StepRecord>, ArmError> {
        let mut steps = Vec::with_capacity(selector.decisions().len());
        for decision in selector.decisions() {
            let pair = self
                .layout
                .arms(decision.index)
                .ok_or(ArmError::UnboundDecision {
                    index: decision.index,
                })?;
            let arm = pair.pick(decision.side);
            let handler = self
                .handlers
                .get(&arm)
                .copied()
                .ok_or(ArmError::UnknownArm { arm })?;
            debug!(
                index = decision.index,
                side = decision.side.as_str(),
                arm = arm.as_str(),
                "decision"
            );
            if let Err(err) = handler(ctx) {
                warn!(index = decision.index, arm = arm.as_str(), error = %err, "arm failed");
                return Err(err);
            }
            steps.push(StepRecord {
                index: decision.index,
                side: decision.side,
                arm,
                kind: arm_entry(arm).kind,
                output: ctx.out.take_captured(),
            });
        }
        Ok(steps)
    }
}
