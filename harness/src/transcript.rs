//! Path transcript: what one run did, in canonical form.
//!
//! A [`PathTraceV1`] records the layout, the raw selector, one
//! [`StepRecord`] per decision (with the exact bytes the arm wrote), and the
//! datasets as they stood when the path finished. Its canonical JSON bytes
//! are hashed under [`HashDomain::PathTrace`]; two runs of the same selector
//! produce the same digest.
//!
//! Child-process output is not captured. Children inherit the harness's
//! stdout descriptor and write to it directly, so only the label lines the
//! harness itself prints appear in a step's `output`.

use std::io::Write;

use branchtrace_kernel::proof::canon::{canonical_json_bytes, CanonError};
use branchtrace_kernel::proof::hash::{canonical_hash, ContentHash, HashDomain};

use crate::arms::{ArmId, ArmKind};
use crate::selector::Side;

/// Schema tag embedded in every serialized trace.
pub const PATH_TRACE_SCHEMA: &str = "path_trace.v1";

// ---------------------------------------------------------------------------
// TeeWriter
// ---------------------------------------------------------------------------

/// Forwards every byte to an inner writer and keeps a copy.
///
/// Bytes reach the inner writer immediately; the copy is only for the
/// transcript.
pub struct TeeWriter<'a> {
    inner: &'a mut dyn Write,
    captured: Vec<u8>,
}

impl<'a> TeeWriter<'a> {
    /// Wrap `inner` with an empty capture buffer.
    pub fn new(inner: &'a mut dyn Write) -> Self {
        Self {
            inner,
            captured: Vec::new(),
        }
    }

    /// Bytes captured since the last call, leaving the buffer empty.
    pub fn take_captured(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.captured)
    }
}

impl Write for TeeWriter<'_> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.captured.extend_from_slice(&buf[..n]);
        Ok(n)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}

// ---------------------------------------------------------------------------
// StepRecord / PathTraceV1
// ---------------------------------------------------------------------------

/// One decision as it executed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepRecord {
    /// Decision index.
    pub index: usize,
    /// Side taken.
    pub side: Side,
    /// Arm invoked.
    pub arm: ArmId,
    /// Kind of the arm invoked.
    pub kind: ArmKind,
    /// Bytes the arm wrote to stdout.
    pub output: Vec<u8>,
}

impl StepRecord {
    fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "index": self.index,
            "side": self.side.as_str(),
            "arm": self.arm.as_str(),
            "kind": self.kind.as_str(),
            "output": String::from_utf8_lossy(&self.output),
            "output_hash": canonical_hash(HashDomain::ArmOutput, &self.output).as_str(),
        })
    }
}

/// Complete record of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathTraceV1 {
    /// Layout the run used.
    pub layout_id: String,
    /// Selector bytes as supplied.
    pub selector: Vec<u8>,
    /// Steps in decision order.
    pub steps: Vec<StepRecord>,
    /// Dataset snapshot after the last step.
    pub datasets: serde_json::Value,
    /// Final value of the inline-increment counter.
    pub scratch_counter: u64,
}

impl PathTraceV1 {
    /// Every byte the arms wrote, in order.
    #[must_use]
    pub fn stdout(&self) -> Vec<u8> {
        self.steps
            .iter()
            .flat_map(|s| s.output.iter().copied())
            .collect()
    }

    /// Arms visited, in order.
    #[must_use]
    pub fn arms(&self) -> Vec<ArmId> {
        self.steps.iter().map(|s| s.arm).collect()
    }

    /// The trace as a JSON value. Keys are not yet canonicalized.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        let steps: Vec<serde_json::Value> = self.steps.iter().map(StepRecord::to_json).collect();
        serde_json::json!({
            "schema_version": PATH_TRACE_SCHEMA,
            "layout_id": self.layout_id,
            "selector_hex": hex::encode(&self.selector),
            "steps": steps,
            "datasets": self.datasets,
            "scratch_counter": self.scratch_counter,
        })
    }

    /// Canonical JSON bytes of the trace.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if the trace holds a non-integer number.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, CanonError> {
        canonical_json_bytes(&self.to_json())
    }

    /// `canonical_hash(PathTrace, canonical_json_bytes)`.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if the trace holds a non-integer number.
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        let bytes = self.to_canonical_json_bytes()?;
        Ok(canonical_hash(HashDomain::PathTrace, &bytes))
    }

    /// Digest of the final dataset snapshot alone.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if the snapshot holds a non-integer number.
    pub fn dataset_digest(&self) -> Result<ContentHash, CanonError> {
        let bytes = canonical_json_bytes(&self.datasets)?;
        Ok(canonical_hash(HashDomain::DatasetSnapshot, &bytes))
    }
}
