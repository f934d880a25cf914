//! Dataset Registry: process-lifetime datasets and their aliases.
//!
//! A dataset is a fixed-length integer array or a string constant. Aliases are
//! alternate names for the *same* backing dataset; mutating through one alias
//! is observable through every other alias. Nothing here ever clones a
//! dataset on alias lookup.

pub mod reference;
pub mod registry;
