//! The reference datasets and alias map used by every harness layout.
//!
//! `ARR_1` and `ARR_3` (and the unused `ARR_4`..`ARR_6`) all name
//! `array_1`: the quicksort arm and the reverse arm share one array.

use super::registry::{DatasetError, DatasetRegistryV1, DatasetValue};

/// Merge-sort input.
pub const ARR_0: &str = "ARR_0";
/// Quicksort input.
pub const ARR_1: &str = "ARR_1";
/// Binary-search input (sorted ascending).
pub const ARR_2: &str = "ARR_2";
/// Reverse input. Same backing array as [`ARR_1`].
pub const ARR_3: &str = "ARR_3";
/// Declared by the prime arm; never read.
pub const ARR_4: &str = "ARR_4";
/// Declared by the Fibonacci arm; never read.
pub const ARR_5: &str = "ARR_5";
/// Declared by the substring arm; never read.
pub const ARR_6: &str = "ARR_6";
/// Substring source text.
pub const STRING: &str = "STRING";
/// Left operand of the compare arm.
pub const STR_7_1: &str = "STR_7_1";
/// Right operand of the compare arm.
pub const STR_7_2: &str = "STR_7_2";

/// Initial contents of `array_0`.
pub const ARRAY_0: [i32; 8] = [0, 9, -1, 8, 3, 5, 7, 2];
/// Initial contents of `array_1`.
pub const ARRAY_1: [i32; 8] = [1, 33, 2, 11, 23, 9, 8, 7];
/// Initial contents of `array_2`.
pub const ARRAY_2: [i32; 8] = [3, 4, 6, 7, 9, 10, 33, 99];
/// Substring source.
pub const STR_6: &str = "abcdefghijklmnopqrstuvwxyz";
/// Compare arm, left.
pub const STR7_1: &str = "helper";
/// Compare arm, right.
pub const STR7_2: &str = "hallena";

/// Build a fresh registry holding the reference datasets.
///
/// # Errors
///
/// Returns [`DatasetError`] only if the alias table above is inconsistent.
pub fn reference_registry() -> Result<DatasetRegistryV1, DatasetError> {
    let datasets = vec![
        ("array_0".to_string(), DatasetValue::Ints(ARRAY_0.to_vec())),
        ("array_1".to_string(), DatasetValue::Ints(ARRAY_1.to_vec())),
        ("array_2".to_string(), DatasetValue::Ints(ARRAY_2.to_vec())),
        ("str_6".to_string(), DatasetValue::Text(STR_6.to_string())),
        ("str7_1".to_string(), DatasetValue::Text(STR7_1.to_string())),
        ("str7_2".to_string(), DatasetValue::Text(STR7_2.to_string())),
    ];
    let aliases = [
        (ARR_0, "array_0"),
        (ARR_1, "array_1"),
        (ARR_2, "array_2"),
        (ARR_3, "array_1"),
        (ARR_4, "array_1"),
        (ARR_5, "array_1"),
        (ARR_6, "array_1"),
        (STRING, "str_6"),
        (STR_7_1, "str7_1"),
        (STR_7_2, "str7_2"),
    ]
    .into_iter()
    .map(|(alias, target)| (alias.to_string(), target.to_string()))
    .collect();
    DatasetRegistryV1::new(datasets, aliases)
}
