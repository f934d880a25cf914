//! In-process path determinism and golden output locks.
//!
//! - N=10 runs of every locked path yield identical digests.
//! - Distinct selectors of one layout yield distinct arm sequences.
//! - Golden stdout for the all-low / all-high paths.
//! - Aliasing: quicksort through `ARR_1` is what reverse through `ARR_3` sees.

use std::collections::BTreeSet;

use branchtrace_harness::arms::ArmId;
use lock_tests::locked_paths::{all_selectors, locked_paths, run_locked, LockedLayout};

#[test]
fn every_locked_path_is_deterministic_in_process() {
    for (layout, selector) in locked_paths() {
        let first = run_locked(layout, &selector);
        let digest = first.digest().unwrap();
        for run in 1..10 {
            let again = run_locked(layout, &selector);
            assert_eq!(
                digest,
                again.digest().unwrap(),
                "{selector} diverged on run {run}"
            );
            assert_eq!(first, again);
        }
    }
}

#[test]
fn each_selector_selects_a_distinct_arm_sequence() {
    for layout in [LockedLayout::FourBranch, LockedLayout::TwoBranch] {
        let selectors = all_selectors(layout);
        let k = layout.layout().decision_count();
        assert_eq!(selectors.len(), 1 << k);
        let paths: BTreeSet<Vec<ArmId>> = selectors
            .iter()
            .map(|s| run_locked(layout, s).arms())
            .collect();
        assert_eq!(paths.len(), selectors.len());
        assert!(paths.iter().all(|p| p.len() == k));
    }
}

#[test]
fn arm_choice_is_a_pure_function_of_each_character() {
    let layout = LockedLayout::FourBranch;
    for selector in all_selectors(layout) {
        let arms = run_locked(layout, &selector).arms();
        for (i, c) in selector.bytes().enumerate() {
            let pair = layout.layout().arms(i).unwrap();
            let expected = if c == b'0' { pair.low } else { pair.high };
            assert_eq!(arms[i], expected, "{selector}[{i}]");
        }
    }
}

#[test]
fn golden_all_low_stdout() {
    let trace = run_locked(LockedLayout::FourBranch, "0000");
    assert_eq!(
        String::from_utf8(trace.stdout()).unwrap(),
        "The merge-sorted array is:\n-1 0 2 3 5 7 8 9 \n\
         The element 2 is not in this array!\n\
         Enter the number of prime numbers required\n\
         First 10 prime numbers are :\n\
         2 3 5 7 11 13 17 19 23 29 \n\
         cdefghijkl\n"
    );
}

#[test]
fn golden_all_high_stdout() {
    let trace = run_locked(LockedLayout::FourBranch, "1111");
    assert_eq!(
        String::from_utf8(trace.stdout()).unwrap(),
        "The quick-sorted array is:\n1 2 7 8 9 11 23 33 \n\
         The reversed array is:\n33 23 11 9 8 7 2 1 \n\
         First 10 terms of Fibonacci series are :-\n0 1 1 2 3 5 8 13 21 34 \n\
         hallena is greater than helper\n"
    );
}

#[test]
fn quicksort_mutation_is_visible_to_reverse() {
    let sorted_then_reversed = run_locked(LockedLayout::FourBranch, "1100");
    let reversed_only = run_locked(LockedLayout::FourBranch, "0100");
    assert_eq!(
        sorted_then_reversed.datasets["array_1"],
        serde_json::json!([33, 23, 11, 9, 8, 7, 2, 1])
    );
    assert_eq!(
        reversed_only.datasets["array_1"],
        serde_json::json!([7, 8, 9, 23, 11, 2, 33, 1])
    );
    assert_ne!(
        sorted_then_reversed.dataset_digest().unwrap(),
        reversed_only.dataset_digest().unwrap()
    );
}

#[test]
fn inline_increment_emits_nothing() {
    let trace = run_locked(LockedLayout::TwoBranch, "10");
    assert_eq!(trace.steps[0].arm, ArmId::InlineIncrement);
    assert!(trace.steps[0].output.is_empty());
    assert_eq!(trace.scratch_counter, 1);
}
