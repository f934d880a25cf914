//! Indirect dispatch: binary integer operations called through a table.
//!
//! The call target is a first-class value chosen at runtime from a closed set
//! ([`table::BinaryOp`]); callers never name `add` or `subtract` directly.

pub mod accumulator;
pub mod table;
