//! Algorithmic kernels run by the harness arms.
//!
//! Each kernel is deterministic and operates on one dataset. Several of them
//! keep non-standard behavior on purpose (loop bounds, two-valued compare,
//! the three-assignment partition): the value of a trace is that it is
//! exactly reproducible, not that the algorithm is textbook.

pub mod reverse;
pub mod search;
pub mod sequence;
pub mod sort;
pub mod text;
