//! Indirect-dispatch arms: calls through the binary-operation table.

use std::io::Write;

use tracing::debug;

use branchtrace_kernel::indirect::{accumulator, table};

use super::{ArmContext, ArmError};

pub(super) fn single_shot(ctx: &mut ArmContext<'_>) -> Result<(), ArmError> {
    let operands = ctx.config.single_shot;
    let (op, result) = table::single_shot(
        &ctx.operations,
        operands.operator,
        operands.lhs,
        operands.rhs,
    )?;
    debug!(op = op.as_str(), result, "indirect call");
    writeln!(ctx.out, "{result}")?;
    Ok(())
}

pub(super) fn accumulator_loop(ctx: &mut ArmContext<'_>) -> Result<(), ArmError> {
    let report = accumulator::run_accumulator_loop(&ctx.operations, ctx.config.loop_sentinel)?;
    debug!(
        cycles = report.cycles,
        indirect_calls = report.indirect_calls,
        "accumulator reached sentinel"
    );
    writeln!(ctx.out, "{}", report.accumulator)?;
    Ok(())
}
