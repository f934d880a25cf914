//! Process control: spawn external executables and reap them.
//!
//! The harness never replaces its own image. Children are created with
//! `std::process::Command`, which forks and execs inside the standard
//! library; an exec failure is reported back to the parent as a spawn error
//! before the child can run any harness code, so a failing child never
//! races the parent's stdout.
//!
//! Reaping blocks without a timeout. A child that never exits hangs the
//! harness.
//!
//! Unix only (`argv[0]` override and signal status).

use std::io::Write;
use std::os::unix::process::{CommandExt, ExitStatusExt};
use std::process::{Child, Command};
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::config::SpawnTarget;

/// Ordering between spawns and reaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnPolicy {
    /// Spawn one child, reap it, then spawn the next.
    Sequential,
    /// Spawn every child, then reap in exit order until none remain.
    Batch,
}

impl SpawnPolicy {
    /// Canonical name for traces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sequential => "sequential",
            Self::Batch => "batch",
        }
    }
}

/// One reaped child.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReapRecord {
    /// Target label.
    pub label: String,
    /// Process id, always `> 0`.
    pub pid: u32,
    /// Exit code if the child exited normally.
    pub exit_code: Option<i32>,
    /// Terminating signal if the child was killed.
    pub signal: Option<i32>,
}

/// Fatal process-control failure. Each variant's Display is the one
/// diagnostic line the harness prints before terminating.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SpawnError {
    /// The child could not be created.
    #[error("An error occured when forking another process")]
    Fork { label: String, detail: String },
    /// The child was created but the executable could not be loaded.
    #[error("An error occured when executing execl ls")]
    Exec { label: String, detail: String },
    /// Waiting on a child failed.
    #[error("An error occured when waiting for child {pid}")]
    Wait { pid: u32, detail: String },
    /// The label line could not be written.
    #[error("failed to write spawn label: {detail}")]
    Announce { detail: String },
}

/// Spawn `target` with its configured `argv[0]` and no other arguments.
///
/// # Errors
///
/// Returns [`SpawnError::Exec`] when the executable is missing or not
/// executable, [`SpawnError::Fork`] for any other creation failure.
pub fn spawn(target: &SpawnTarget) -> Result<Child, SpawnError> {
    let result = Command::new(&target.program).arg0(&target.argv0).spawn();
    match result {
        Ok(child) => {
            info!(label = %target.label, pid = child.id(), "spawned child");
            Ok(child)
        }
        Err(err) => {
            warn!(label = %target.label, program = %target.program.display(), error = %err, "spawn failed");
            let label = target.label.clone();
            let detail = err.to_string();
            match err.kind() {
                std::io::ErrorKind::NotFound | std::io::ErrorKind::PermissionDenied => {
                    Err(SpawnError::Exec { label, detail })
                }
                _ => Err(SpawnError::Fork { label, detail }),
            }
        }
    }
}

/// Block until `child` exits and record its status.
///
/// # Errors
///
/// Returns [`SpawnError::Wait`] if the wait call fails.
pub fn reap(label: &str, mut child: Child) -> Result<ReapRecord, SpawnError> {
    let pid = child.id();
    let status = child.wait().map_err(|e| SpawnError::Wait {
        pid,
        detail: e.to_string(),
    })?;
    debug!(label, pid, ?status, "reaped child");
    Ok(ReapRecord {
        label: label.to_string(),
        pid,
        exit_code: status.code(),
        signal: status.signal(),
    })
}

/// Announce, spawn, and reap each target in turn.
///
/// A spawn failure stops before any later target is announced or spawned.
///
/// # Errors
///
/// Returns the first [`SpawnError`].
pub fn run_sequential(
    targets: &[SpawnTarget],
    out: &mut dyn Write,
) -> Result<Vec<ReapRecord>, SpawnError> {
    let mut records = Vec::with_capacity(targets.len());
    for target in targets {
        announce(out, target)?;
        let child = spawn(target)?;
        records.push(reap(&target.label, child)?);
    }
    Ok(records)
}

/// Announce and spawn every target, then reap in exit order.
///
/// Outstanding children are polled with `try_wait`, sleeping `poll` between
/// sweeps that reap nothing. If a spawn fails part-way, the children already
/// started are reaped before the error is returned.
///
/// # Errors
///
/// Returns the first [`SpawnError`].
pub fn run_batch(
    targets: &[SpawnTarget],
    out: &mut dyn Write,
    poll: Duration,
) -> Result<Vec<ReapRecord>, SpawnError> {
    let mut outstanding: Vec<(&str, Child)> = Vec::with_capacity(targets.len());
    for target in targets {
        let spawned = announce(out, target).and_then(|()| spawn(target));
        match spawned {
            Ok(child) => outstanding.push((target.label.as_str(), child)),
            Err(err) => {
                if !outstanding.is_empty() {
                    warn!(count = outstanding.len(), "reaping started children after spawn failure");
                    drain(outstanding, poll)?;
                }
                return Err(err);
            }
        }
    }
    drain(outstanding, poll)
}

fn drain(mut outstanding: Vec<(&str, Child)>, poll: Duration) -> Result<Vec<ReapRecord>, SpawnError> {
    let mut records = Vec::with_capacity(outstanding.len());
    while !outstanding.is_empty() {
        let mut reaped_any = false;
        let mut i = 0;
        while i < outstanding.len() {
            let pid = outstanding[i].1.id();
            let polled = outstanding[i].1.try_wait().map_err(|e| SpawnError::Wait {
                pid,
                detail: e.to_string(),
            })?;
            if let Some(status) = polled {
                let (label, _) = outstanding.remove(i);
                debug!(label, pid, ?status, "reaped child");
                records.push(ReapRecord {
                    label: label.to_string(),
                    pid,
                    exit_code: status.code(),
                    signal: status.signal(),
                });
                reaped_any = true;
            } else {
                i += 1;
            }
        }
        if !reaped_any {
            std::thread::sleep(poll);
        }
    }
    Ok(records)
}

fn announce(out: &mut dyn Write, target: &SpawnTarget) -> Result<(), SpawnError> {
    // Flush so the label precedes anything the child writes to the shared fd.
    writeln!(out, "{}", target.label)
        .and_then(|()| out.flush())
        .map_err(|e| SpawnError::Announce {
            detail: e.to_string(),
        })
}
