//! In-place two-pointer reversal.

/// Swap positions from both ends toward the center.
///
/// Runs `len / 2` swaps; positions are exchanged, not values, so applying it
/// twice restores the input even with duplicates.
pub fn reverse(arr: &mut [i32]) {
    if arr.is_empty() {
        return;
    }
    let (mut low, mut high) = (0, arr.len() - 1);
    for _ in 0..arr.len() / 2 {
        arr.swap(low, high);
        low += 1;
        high -= 1;
    }
}
