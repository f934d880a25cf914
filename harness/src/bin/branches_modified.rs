//! 2-decision layout: merge sort or a silent increment, then search or reverse.

use std::process::ExitCode;

use branchtrace_harness::layouts::TwoBranch;
use branchtrace_harness::runner::{init_logging, run_cli};

fn main() -> ExitCode {
    init_logging();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_cli(&TwoBranch, std::env::args_os(), &mut out)
}
