//! Canonical serialization and hashing for path-trace artifacts.

pub mod canon;
pub mod hash;
pub mod hash_domain;
