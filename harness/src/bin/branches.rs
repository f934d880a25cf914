//! 4-decision layout over the algorithmic kernels.

use std::process::ExitCode;

use branchtrace_harness::layouts::FourBranch;
use branchtrace_harness::runner::{init_logging, run_cli};

fn main() -> ExitCode {
    init_logging();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_cli(&FourBranch, std::env::args_os(), &mut out)
}
