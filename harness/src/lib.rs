//! Branchtrace Harness: selector-driven path execution over the kernel.
//!
//! A run decodes one selector, walks the layout's decisions in order, and
//! invokes exactly one arm per decision. Arms render kernel results to
//! stdout, spawn and reap child processes, or call through the indirect
//! dispatch table. The run is recorded as a [`transcript::PathTraceV1`]
//! whose digest is stable across runs and processes.
//!
//! The harness does NOT implement the algorithms; it delegates to the
//! kernel. Layouts provide decision tables only; the dispatcher owns
//! sequencing.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod arms;
pub mod config;
pub mod contract;
pub mod dispatcher;
pub mod layouts;
pub mod process;
pub mod runner;
pub mod selector;
pub mod transcript;
