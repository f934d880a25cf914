//! Branchtrace Kernel: the deterministic core of the branch-routing harness.
//!
//! # API Surface
//!
//! - [`dataset::registry::DatasetRegistryV1`] -- fixed-size datasets with
//!   statically declared aliases (several names, one backing array)
//! - [`algo`] -- the algorithmic kernels the harness arms run over datasets
//! - [`indirect::table::DispatchTableV1`] -- the closed table of binary
//!   integer operations invoked through a runtime-selected call target
//! - [`proof`] -- canonical JSON and domain-separated hashing for path traces
//!
//! # Module Dependency Direction
//!
//! `proof` ← `dataset` ← (`algo`, `indirect`)
//!
//! The kernel performs no I/O and creates no processes. Rendering output and
//! process control are harness concerns.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod algo;
pub mod dataset;
pub mod indirect;
pub mod proof;
