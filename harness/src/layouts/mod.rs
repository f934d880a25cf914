//! Harness variants: fixed decision tables over the arm library.

pub mod control;
pub mod four_branch;
pub mod two_branch;

pub use control::ControlArms;
pub use four_branch::FourBranch;
pub use two_branch::TwoBranch;
