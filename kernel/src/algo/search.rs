//! Binary search over an ascending dataset.

/// Classic closed-interval binary search.
///
/// An exact match at the midpoint wins immediately; a midpoint greater than
/// the target narrows `high = mid - 1`, otherwise `low = mid + 1`. Returns the
/// matching index or `None`, never both.
#[must_use]
pub fn binary_search(arr: &[i32], target: i32) -> Option<usize> {
    // Signed bounds: `high` reaches -1 when the target is below arr[0].
    let mut low: isize = 0;
    let mut high = isize::try_from(arr.len()).ok()? - 1;
    while low <= high {
        let mid = (low + high) / 2;
        let idx = usize::try_from(mid).ok()?;
        let value = arr[idx];
        if value == target {
            return Some(idx);
        } else if value > target {
            high = mid - 1;
        } else {
            low = mid + 1;
        }
    }
    None
}
