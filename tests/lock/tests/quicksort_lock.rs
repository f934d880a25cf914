//! Quicksort write-log lock.
//!
//! The partition uses three assignments instead of a swap. The exact cell
//! writes it performs on the reference `array_1` are pinned here so any
//! change to the partition, however harmless its final order looks, fails.

use lock_tests::locked_paths::{quicksort_write_log, quicksort_write_log_digest};

const GOLDEN_WRITES: [(usize, i32); 36] = [
    (1, 2),
    (2, 2),
    (2, 33),
    (2, 11),
    (3, 11),
    (3, 33),
    (3, 23),
    (4, 23),
    (4, 33),
    (4, 9),
    (5, 9),
    (5, 33),
    (5, 8),
    (6, 8),
    (6, 33),
    (6, 7),
    (7, 7),
    (7, 33),
    (2, 9),
    (4, 23),
    (3, 11),
    (3, 8),
    (5, 23),
    (4, 11),
    (4, 7),
    (6, 23),
    (5, 11),
    (2, 8),
    (3, 8),
    (3, 9),
    (3, 7),
    (4, 7),
    (4, 9),
    (2, 7),
    (3, 7),
    (3, 8),
];

#[test]
fn write_log_matches_golden_sequence() {
    let log: Vec<(usize, i32)> = quicksort_write_log()
        .iter()
        .map(|w| (w.index, w.value))
        .collect();
    assert_eq!(log, GOLDEN_WRITES);
}

#[test]
fn replaying_golden_writes_yields_printed_order() {
    let mut arr = branchtrace_kernel::dataset::reference::ARRAY_1;
    for (index, value) in GOLDEN_WRITES {
        arr[index] = value;
    }
    assert_eq!(arr, [1, 2, 7, 8, 9, 11, 23, 33]);
}

#[test]
fn write_log_digest_is_stable() {
    let first = quicksort_write_log_digest();
    for _ in 0..9 {
        assert_eq!(first, quicksort_write_log_digest());
    }
    assert_eq!(first.algorithm(), "sha256");
}
