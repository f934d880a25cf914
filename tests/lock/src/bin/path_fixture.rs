//! Binary that runs every locked path and prints one digest line per path.
//!
//! Used by the cross-process determinism test to verify that traces do not
//! depend on cwd, locale, or unrelated environment variables.
//!
//! Usage: `path_fixture`
//! Output: one line per locked path, then
//!   `quicksort_writes`=sha256:...

use lock_tests::locked_paths::{quicksort_write_log_digest, render_digest_lines};

fn main() {
    print!("{}", render_digest_lines());
    println!("quicksort_writes={}", quicksort_write_log_digest());
}
