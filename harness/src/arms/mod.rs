//! Arm Library: every unit of behavior a decision can invoke.
//!
//! [`arm_registry`] is the **contract surface** (id, name, kind, datasets
//! read or written); [`dispatch_table`] is the **implementation**. Every
//! registry entry has a handler and every handler has an entry.
//!
//! Arms write to [`ArmContext::out`] and mutate datasets through the
//! registry. Nothing else is shared between arms.

mod indirect;
mod kernels;
mod spawn;

use std::collections::BTreeMap;

use branchtrace_kernel::algo::text::TextError;
use branchtrace_kernel::dataset::reference::{
    ARR_0, ARR_1, ARR_2, ARR_3, STRING, STR_7_1, STR_7_2,
};
use branchtrace_kernel::dataset::registry::{DatasetError, DatasetRegistryV1};
use branchtrace_kernel::indirect::table::{DispatchError, DispatchTableV1};

use crate::config::HarnessConfig;
use crate::process::SpawnError;
use crate::transcript::TeeWriter;

// ---------------------------------------------------------------------------
// ArmId / ArmKind
// ---------------------------------------------------------------------------

/// Closed set of arms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ArmId {
    /// Bottom-up merge sort of `ARR_0`.
    MergeSort,
    /// Three-assignment quicksort of `ARR_1`.
    QuickSort,
    /// Binary search over `ARR_2`.
    BinarySearch,
    /// In-place reverse of `ARR_3`.
    Reverse,
    /// Trial-division prime listing.
    Primes,
    /// Fibonacci terms.
    Fibonacci,
    /// Substring of `STRING`, leaked.
    Substring,
    /// Two-valued compare of `STR_7_1` and `STR_7_2`.
    Compare,
    /// Bumps the scratch counter. Silent.
    InlineIncrement,
    /// Spawn-and-reap each target in turn.
    SpawnSequential,
    /// Spawn every target, then reap in exit order.
    SpawnBatch,
    /// One indirect call through the dispatch table.
    IndirectSingleShot,
    /// Add-then-subtract loop to the sentinel.
    IndirectLoop,
}

impl ArmId {
    /// Every arm, in declaration order.
    pub const ALL: &[ArmId] = &[
        Self::MergeSort,
        Self::QuickSort,
        Self::BinarySearch,
        Self::Reverse,
        Self::Primes,
        Self::Fibonacci,
        Self::Substring,
        Self::Compare,
        Self::InlineIncrement,
        Self::SpawnSequential,
        Self::SpawnBatch,
        Self::IndirectSingleShot,
        Self::IndirectLoop,
    ];

    /// Canonical name for traces and logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MergeSort => "merge_sort",
            Self::QuickSort => "quick_sort",
            Self::BinarySearch => "binary_search",
            Self::Reverse => "reverse",
            Self::Primes => "primes",
            Self::Fibonacci => "fibonacci",
            Self::Substring => "substring",
            Self::Compare => "compare",
            Self::InlineIncrement => "inline_increment",
            Self::SpawnSequential => "spawn_sequential",
            Self::SpawnBatch => "spawn_batch",
            Self::IndirectSingleShot => "indirect_single_shot",
            Self::IndirectLoop => "indirect_loop",
        }
    }

    /// Parse from canonical name.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|id| id.as_str() == s)
    }
}

/// What an arm does besides writing stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArmKind {
    /// Pure computation over a dataset.
    AlgoKernel,
    /// Spawns and waits on OS processes.
    ProcessControl,
    /// Calls through the binary-operation table.
    IndirectDispatch,
}

impl ArmKind {
    /// Canonical name for traces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AlgoKernel => "algo_kernel",
            Self::ProcessControl => "process_control",
            Self::IndirectDispatch => "indirect_dispatch",
        }
    }
}

// ---------------------------------------------------------------------------
// Registry (contract side)
// ---------------------------------------------------------------------------

/// A single entry in the arm registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArmEntry {
    /// Arm identifier.
    pub id: ArmId,
    /// Canonical name, as recorded in traces.
    pub name: &'static str,
    /// Kind.
    pub kind: ArmKind,
    /// Dataset aliases the arm reads or writes.
    pub datasets: &'static [&'static str],
}

const fn entry(id: ArmId, kind: ArmKind, datasets: &'static [&'static str]) -> ArmEntry {
    ArmEntry {
        id,
        name: id.as_str(),
        kind,
        datasets,
    }
}

/// The registry entry for `id`.
#[must_use]
pub const fn arm_entry(id: ArmId) -> ArmEntry {
    use ArmKind::{AlgoKernel, IndirectDispatch, ProcessControl};
    match id {
        ArmId::MergeSort => entry(id, AlgoKernel, &[ARR_0]),
        ArmId::QuickSort => entry(id, AlgoKernel, &[ARR_1]),
        ArmId::BinarySearch => entry(id, AlgoKernel, &[ARR_2]),
        ArmId::Reverse => entry(id, AlgoKernel, &[ARR_3]),
        ArmId::Substring => entry(id, AlgoKernel, &[STRING]),
        ArmId::Compare => entry(id, AlgoKernel, &[STR_7_1, STR_7_2]),
        ArmId::Primes | ArmId::Fibonacci | ArmId::InlineIncrement => entry(id, AlgoKernel, &[]),
        ArmId::SpawnSequential | ArmId::SpawnBatch => entry(id, ProcessControl, &[]),
        ArmId::IndirectSingleShot | ArmId::IndirectLoop => entry(id, IndirectDispatch, &[]),
    }
}

/// All arm contracts keyed by id.
#[must_use]
pub fn arm_registry() -> BTreeMap<ArmId, ArmEntry> {
    ArmId::ALL.iter().map(|&id| (id, arm_entry(id))).collect()
}

// ---------------------------------------------------------------------------
// Dispatch table (implementation side)
// ---------------------------------------------------------------------------

/// Handler signature shared by every arm.
pub type ArmHandler = fn(&mut ArmContext<'_>) -> Result<(), ArmError>;

/// Build the table mapping arm ids to handlers.
#[must_use]
pub fn dispatch_table() -> BTreeMap<ArmId, ArmHandler> {
    let mut map: BTreeMap<ArmId, ArmHandler> = BTreeMap::new();
    map.insert(ArmId::MergeSort, kernels::merge_sort);
    map.insert(ArmId::QuickSort, kernels::quick_sort);
    map.insert(ArmId::BinarySearch, kernels::binary_search);
    map.insert(ArmId::Reverse, kernels::reverse);
    map.insert(ArmId::Primes, kernels::primes);
    map.insert(ArmId::Fibonacci, kernels::fibonacci);
    map.insert(ArmId::Substring, kernels::substring);
    map.insert(ArmId::Compare, kernels::compare);
    map.insert(ArmId::InlineIncrement, kernels::inline_increment);
    map.insert(ArmId::SpawnSequential, spawn::sequential);
    map.insert(ArmId::SpawnBatch, spawn::batch);
    map.insert(ArmId::IndirectSingleShot, indirect::single_shot);
    map.insert(ArmId::IndirectLoop, indirect::accumulator_loop);
    map
}

// ---------------------------------------------------------------------------
// ArmContext / ArmError
// ---------------------------------------------------------------------------

/// Everything an arm may touch during one run.
pub struct ArmContext<'a> {
    /// Harness-scoped datasets. Mutations persist to later arms.
    pub datasets: &'a mut DatasetRegistryV1,
    /// Run configuration.
    pub config: &'a HarnessConfig,
    /// Stdout, teed for the transcript.
    pub out: TeeWriter<'a>,
    /// Counter bumped by [`ArmId::InlineIncrement`].
    pub scratch_counter: u64,
    /// Binary-operation table for the indirect arms, built once per run.
    pub operations: DispatchTableV1,
}

impl<'a> ArmContext<'a> {
    /// A fresh context writing to `out`.
    pub fn new(
        datasets: &'a mut DatasetRegistryV1,
        config: &'a HarnessConfig,
        out: &'a mut dyn std::io::Write,
    ) -> Self {
        Self {
            datasets,
            config,
            out: TeeWriter::new(out),
            scratch_counter: 0,
            operations: DispatchTableV1::new(),
        }
    }
}

/// Fatal arm failure. The dispatcher stops at the first one.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArmError {
    /// Process creation or reaping failed.
    #[error(transparent)]
    Spawn(#[from] SpawnError),
    /// A buffer could not be acquired.
    #[error("Unable to allocate memory.")]
    Allocation { requested: usize },
    /// A text kernel rejected its input.
    #[error(transparent)]
    Text(TextError),
    /// A dataset lookup failed.
    #[error(transparent)]
    Dataset(#[from] DatasetError),
    /// Writing stdout failed.
    #[error("failed to write arm output: {detail}")]
    Output { detail: String },
    /// The indirect table could not serve a call.
    #[error(transparent)]
    Dispatch(#[from] DispatchError),
    /// The dispatch table has no handler for a registered arm.
    #[error("no handler installed for arm {}", .arm.as_str())]
    UnknownArm { arm: ArmId },
    /// The layout binds no arms at a decision the selector covers.
    #[error("layout has no arms at decision {index}")]
    UnboundDecision { index: usize },
}

impl From<TextError> for ArmError {
    fn from(err: TextError) -> Self {
        match err {
            TextError::Allocation { requested } => Self::Allocation { requested },
            other @ TextError::OutOfRange { .. } => Self::Text(other),
        }
    }
}

impl From<std::io::Error> for ArmError {
    fn from(err: std::io::Error) -> Self {
        Self::Output {
            detail: err.to_string(),
        }
    }
}
