//! Single source of truth for the locked path set.
//!
//! Used by both the `path_fixture` binary and the in-process lock tests.
//! Any change here changes both, so the cross-process comparison can never
//! drift from what the in-process tests expect.
//!
//! Process-control layouts are excluded: their traces are deterministic but
//! each run spawns real children.

use std::fmt::Write;

use branchtrace_harness::config::HarnessConfig;
use branchtrace_harness::contract::LayoutV1;
use branchtrace_harness::layouts::{FourBranch, TwoBranch};
use branchtrace_harness::runner::run;
use branchtrace_harness::transcript::PathTraceV1;
use branchtrace_kernel::algo::sort::{quick_sort_recorded, CellWrite};
use branchtrace_kernel::dataset::reference::ARRAY_1;
use branchtrace_kernel::proof::canon::canonical_json_bytes;
use branchtrace_kernel::proof::hash::{canonical_hash, ContentHash, HashDomain};

/// Layouts covered by the lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockedLayout {
    /// `branches`.
    FourBranch,
    /// `branches-modified`.
    TwoBranch,
}

impl LockedLayout {
    /// The layout value.
    #[must_use]
    pub fn layout(self) -> &'static dyn LayoutV1 {
        match self {
            Self::FourBranch => &FourBranch,
            Self::TwoBranch => &TwoBranch,
        }
    }
}

/// Every selector of the right length for `layout`, in binary order.
#[must_use]
pub fn all_selectors(layout: LockedLayout) -> Vec<String> {
    let k = layout.layout().decision_count();
    (0..1u32 << k)
        .map(|bits| {
            (0..k)
                .map(|i| if (bits >> (k - 1 - i)) & 1 == 1 { '1' } else { '0' })
                .collect()
        })
        .collect()
}

/// All locked `(layout, selector)` pairs.
#[must_use]
pub fn locked_paths() -> Vec<(LockedLayout, String)> {
    [LockedLayout::FourBranch, LockedLayout::TwoBranch]
        .into_iter()
        .flat_map(|layout| {
            all_selectors(layout)
                .into_iter()
                .map(move |selector| (layout, selector))
        })
        .collect()
}

/// Run one locked path with default config, keeping stdout in the trace only.
///
/// # Panics
///
/// Panics if the run fails. Every locked selector is well-formed, so a
/// failure is a harness bug.
#[must_use]
pub fn run_locked(layout: LockedLayout, selector: &str) -> PathTraceV1 {
    let mut sink = Vec::new();
    run(
        layout.layout(),
        selector.as_bytes(),
        &HarnessConfig::default(),
        &mut sink,
    )
    .unwrap_or_else(|e| panic!("locked path {selector} failed: {e}"))
}

/// One line per locked path:
/// `<layout_id>/<selector> path_digest=... dataset_digest=... stdout_bytes=N`.
///
/// # Panics
///
/// Panics if a locked path fails or cannot be hashed.
#[must_use]
pub fn render_digest_lines() -> String {
    let mut lines = String::new();
    for (layout, selector) in locked_paths() {
        let trace = run_locked(layout, &selector);
        let path_digest = trace.digest().expect("trace is canonical");
        let dataset_digest = trace.dataset_digest().expect("snapshot is canonical");
        let _ = writeln!(
            lines,
            "{}/{selector} path_digest={path_digest} dataset_digest={dataset_digest} stdout_bytes={}",
            trace.layout_id,
            trace.stdout().len()
        );
    }
    lines
}

/// Cell writes quicksort performs on the reference `array_1`.
#[must_use]
pub fn quicksort_write_log() -> Vec<CellWrite> {
    let mut arr = ARRAY_1;
    let mut log = Vec::new();
    quick_sort_recorded(&mut arr, &mut log);
    log
}

/// `canonical_hash(QuickSortWrites, [[index, value], ...])`.
///
/// # Panics
///
/// Panics if the write log cannot be canonicalized (it holds integers only).
#[must_use]
pub fn quicksort_write_log_digest() -> ContentHash {
    let pairs: Vec<serde_json::Value> = quicksort_write_log()
        .iter()
        .map(|w| serde_json::json!([w.index, w.value]))
        .collect();
    let bytes = canonical_json_bytes(&serde_json::Value::Array(pairs)).expect("integers only");
    canonical_hash(HashDomain::QuickSortWrites, &bytes)
}
