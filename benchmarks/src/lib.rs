//! Shared helpers for branchtrace benchmark suites.

use branchtrace_harness::config::HarnessConfig;
use branchtrace_harness::contract::LayoutV1;
use branchtrace_harness::runner::run;
use branchtrace_harness::transcript::PathTraceV1;
use branchtrace_kernel::proof::canon::canonical_json_bytes;
use branchtrace_kernel::proof::hash::{canonical_hash, ContentHash, HashDomain};

/// Deterministic pseudo-random input of `n` values.
///
/// Linear congruential generator seeded with `seed`; identical across
/// platforms and runs.
#[must_use]
pub fn shuffled_input(n: usize, seed: u64) -> Vec<i32> {
    let mut state = seed;
    (0..n)
        .map(|_| {
            state = state
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            i32::try_from((state >> 33) % 20_001).unwrap_or(0) - 10_000
        })
        .collect()
}

/// Content hash of a benchmark input, so reports can name the exact data.
///
/// # Panics
///
/// Panics if the input cannot be canonicalized (it holds integers only).
#[must_use]
pub fn input_fingerprint(values: &[i32]) -> ContentHash {
    let bytes = canonical_json_bytes(&serde_json::json!(values)).expect("integers only");
    canonical_hash(HashDomain::BenchInput, &bytes)
}

/// Run one path with default config, discarding stdout.
///
/// # Panics
///
/// Panics if the run fails. Benchmark setup failures are fatal.
#[must_use]
pub fn run_quiet(layout: &dyn LayoutV1, selector: &[u8]) -> PathTraceV1 {
    let mut sink = std::io::sink();
    run(layout, selector, &HarnessConfig::default(), &mut sink)
        .unwrap_or_else(|e| panic!("benchmark path failed: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shuffled_input_is_reproducible() {
        assert_eq!(shuffled_input(64, 7), shuffled_input(64, 7));
        assert_ne!(shuffled_input(64, 7), shuffled_input(64, 8));
        assert_eq!(
            input_fingerprint(&shuffled_input(64, 7)),
            input_fingerprint(&shuffled_input(64, 7))
        );
    }
}
