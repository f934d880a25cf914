//! Cross-process path determinism.
//!
//! Spawns the `path_fixture` binary under several environment variants and
//! asserts every run prints the same lines, and that those lines equal the
//! in-process rendering. Proves traces are not influenced by cwd, locale,
//! log filter, or unrelated environment variables.

use std::path::PathBuf;
use std::process::Command;

use lock_tests::locked_paths::{quicksort_write_log_digest, render_digest_lines};

/// `cargo test` puts test binaries in `target/<profile>/deps/`; the
/// `path_fixture` binary lives one level up.
fn binary_path() -> PathBuf {
    let mut path = std::env::current_exe()
        .expect("can resolve test binary path")
        .parent()
        .expect("binary dir exists")
        .parent()
        .expect("deps parent exists")
        .to_path_buf();
    path.push("path_fixture");
    path
}

fn run_variant(work_dir: &std::path::Path, env_overrides: &[(&str, &str)]) -> String {
    let bin = binary_path();
    let mut command = Command::new(&bin);
    command
        .current_dir(work_dir)
        .env_remove("LC_ALL")
        .env_remove("LC_COLLATE")
        .env_remove("LANG")
        .env_remove("LANGUAGE")
        .env_remove("BRANCHTRACE_SELECTOR_MODE");
    for &(key, val) in env_overrides {
        command.env(key, val);
    }

    let output = command.output().unwrap_or_else(|e| {
        panic!(
            "failed to spawn {} (work_dir={}, overrides={env_overrides:?}): {e}",
            bin.display(),
            work_dir.display()
        )
    });
    assert!(
        output.status.success(),
        "path_fixture exited with {}: stderr={}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("stdout is valid UTF-8")
}

#[test]
fn crossproc_determinism_env_variants() {
    let workspace_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../..")
        .canonicalize()
        .expect("workspace root exists");
    let scratch = tempfile::tempdir().unwrap();

    let baseline = run_variant(&workspace_root, &[]);
    let variants = [
        run_variant(scratch.path(), &[]),
        run_variant(&workspace_root, &[("LC_ALL", "C"), ("LANG", "C")]),
        run_variant(
            scratch.path(),
            &[("LANG", "en_US.UTF-8"), ("BRANCHTRACE_NOISE", "zzz")],
        ),
        run_variant(&workspace_root, &[("BRANCHTRACE_LOG", "trace")]),
    ];
    for (i, out) in variants.iter().enumerate() {
        assert_eq!(&baseline, out, "variant {i} diverged from baseline");
    }
}

#[test]
fn crossproc_matches_in_process() {
    let scratch = tempfile::tempdir().unwrap();
    let printed = run_variant(scratch.path(), &[]);
    let expected = format!(
        "{}quicksort_writes={}\n",
        render_digest_lines(),
        quicksort_write_log_digest()
    );
    assert_eq!(printed, expected);
}

#[test]
fn fixture_output_has_one_line_per_locked_path() {
    let scratch = tempfile::tempdir().unwrap();
    let printed = run_variant(scratch.path(), &[]);
    let path_lines = printed
        .lines()
        .filter(|l| l.contains(" path_digest=sha256:"))
        .count();
    // 16 four-branch selectors + 4 two-branch selectors.
    assert_eq!(path_lines, 20);
    assert!(printed.lines().last().unwrap().starts_with("quicksort_writes=sha256:"));
}
