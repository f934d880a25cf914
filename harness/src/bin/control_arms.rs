//! 2-decision layout over indirect dispatch and process control.

use std::process::ExitCode;

use branchtrace_harness::layouts::ControlArms;
use branchtrace_harness::runner::{init_logging, run_cli};

fn main() -> ExitCode {
    init_logging();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_cli(&ControlArms, std::env::args_os(), &mut out)
}
