//! The add-then-subtract accumulator loop.
//!
//! Each cycle loads the `Add` target and applies it with operand 2, then loads
//! the `Subtract` target and applies it with operand 1. Net change per cycle
//! is `+1`, so from 0 the loop halts after exactly `sentinel` cycles. The
//! accumulator is `i64` even though the default sentinel fits in 16 bits.

use super::table::{BinaryOp, DispatchError, DispatchTableV1};

/// Default sentinel the loop halts on.
pub const REFERENCE_SENTINEL: u32 = 65_535;

/// Outcome of [`run_accumulator_loop`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopReport {
    /// Complete add-then-subtract cycles executed.
    pub cycles: u64,
    /// Final accumulator value (equals the sentinel).
    pub accumulator: i64,
    /// Indirect calls made (two per cycle).
    pub indirect_calls: u64,
}

/// Run the loop until the accumulator equals `sentinel`.
///
/// The loop is bounded by `1..=sentinel` cycles, which is exactly the proven
/// cycle count.
///
/// # Errors
///
/// - [`DispatchError::InvalidSentinel`] for `sentinel == 0` (never reached
///   after a `+1` cycle from 0).
/// - [`DispatchError::MissingHandler`] if the table lacks either entry.
pub fn run_accumulator_loop(
    table: &DispatchTableV1,
    sentinel: u32,
) -> Result<LoopReport, DispatchError> {
    if sentinel == 0 {
        return Err(DispatchError::InvalidSentinel { sentinel });
    }
    let target = i64::from(sentinel);
    let mut accumulator: i64 = 0;
    let mut indirect_calls = 0;
    for cycle in 1..=u64::from(sentinel) {
        let mut call = table.target(BinaryOp::Add)?;
        accumulator = call(accumulator, 2);
        call = table.target(BinaryOp::Subtract)?;
        accumulator = call(accumulator, 1);
        indirect_calls += 2;
        if accumulator == target {
            return Ok(LoopReport {
                cycles: cycle,
                accumulator,
                indirect_calls,
            });
        }
    }
    Err(DispatchError::InvalidSentinel { sentinel })
}
