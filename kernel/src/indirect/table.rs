//! `DispatchTableV1`: tag → handler for the two binary operations.
//!
//! The tag enum is the contract surface; the `BTreeMap` of function pointers
//! is the implementation. [`DispatchTableV1::call`] fails closed if a tag has
//! no handler installed.

use std::collections::BTreeMap;

/// Tag for an entry in the dispatch table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BinaryOp {
    /// `a + b`.
    Add,
    /// `a - b`.
    Subtract,
}

impl BinaryOp {
    /// Canonical name for traces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
        }
    }
}

/// Handler signature shared by every table entry.
pub type BinaryHandler = fn(i64, i64) -> i64;

/// Error type for indirect dispatch.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DispatchError {
    /// The tag is valid but no handler is installed.
    #[error("no handler installed for {}", .op.as_str())]
    MissingHandler { op: BinaryOp },
    /// The accumulator loop cannot halt for this sentinel.
    #[error("sentinel {sentinel} is unreachable from accumulator 0")]
    InvalidSentinel { sentinel: u32 },
}

/// Closed table of binary integer operations.
#[derive(Debug, Clone)]
pub struct DispatchTableV1 {
    handlers: BTreeMap<BinaryOp, BinaryHandler>,
}

impl Default for DispatchTableV1 {
    fn default() -> Self {
        Self::new()
    }
}

impl DispatchTableV1 {
    /// The standard table: `Add → add`, `Subtract → subtract`.
    #[must_use]
    pub fn new() -> Self {
        let mut handlers: BTreeMap<BinaryOp, BinaryHandler> = BTreeMap::new();
        handlers.insert(BinaryOp::Add, add);
        handlers.insert(BinaryOp::Subtract, subtract);
        Self { handlers }
    }

    /// A table with explicit entries. Used to exercise the fail-closed path.
    #[must_use]
    pub fn with_handlers(handlers: BTreeMap<BinaryOp, BinaryHandler>) -> Self {
        Self { handlers }
    }

    /// Resolve the call target for `op`.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::MissingHandler`] if `op` has no entry.
    pub fn target(&self, op: BinaryOp) -> Result<BinaryHandler, DispatchError> {
        self.handlers
            .get(&op)
            .copied()
            .ok_or(DispatchError::MissingHandler { op })
    }

    /// Invoke `op` indirectly on `(a, b)`.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::MissingHandler`] if `op` has no entry.
    pub fn call(&self, op: BinaryOp, a: i64, b: i64) -> Result<i64, DispatchError> {
        let handler = self.target(op)?;
        Ok(handler(a, b))
    }
}

/// Sign predicate on the operator value: `> 0` selects `Add`, else `Subtract`.
#[must_use]
pub const fn select(operator: i64) -> BinaryOp {
    if operator > 0 {
        BinaryOp::Add
    } else {
        BinaryOp::Subtract
    }
}

/// Select once, apply once.
///
/// # Errors
///
/// Returns [`DispatchError::MissingHandler`] if the selected op has no entry.
pub fn single_shot(
    table: &DispatchTableV1,
    operator: i64,
    a: i64,
    b: i64,
) -> Result<(BinaryOp, i64), DispatchError> {
    let op = select(operator);
    let result = table.call(op, a, b)?;
    Ok((op, result))
}

fn add(a: i64, b: i64) -> i64 {
    a.wrapping_add(b)
}

fn subtract(a: i64, b: i64) -> i64 {
    a.wrapping_sub(b)
}
