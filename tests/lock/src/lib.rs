//! Shared fixtures for the lock tests and the `path_fixture` binary.

pub mod locked_paths;
