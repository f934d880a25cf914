//! Process-control arms: the configured targets under each spawn policy.

use tracing::info;

use crate::process::{self, ReapRecord, SpawnPolicy};

use super::{ArmContext, ArmError};

fn log_reaped(policy: SpawnPolicy, records: &[ReapRecord]) {
    for record in records {
        info!(
            policy = policy.as_str(),
            label = %record.label,
            pid = record.pid,
            exit_code = ?record.exit_code,
            signal = ?record.signal,
            "child reaped"
        );
    }
}

pub(super) fn sequential(ctx: &mut ArmContext<'_>) -> Result<(), ArmError> {
    let records = process::run_sequential(&ctx.config.spawn_targets, &mut ctx.out)?;
    log_reaped(SpawnPolicy::Sequential, &records);
    Ok(())
}

pub(super) fn batch(ctx: &mut ArmContext<'_>) -> Result<(), ArmError> {
    let records = process::run_batch(
        &ctx.config.spawn_targets,
        &mut ctx.out,
        ctx.config.batch_poll_interval,
    )?;
    log_reaped(SpawnPolicy::Batch, &records);
    Ok(())
}
