//! Bottom-up merge sort and the recorded three-assignment quicksort.

/// One write to a cell of the array being quicksorted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellWrite {
    /// Zero-based index written.
    pub index: usize,
    /// Value stored.
    pub value: i32,
}

/// Iterative bottom-up merge sort.
///
/// Stride starts at 1 and doubles each pass until it reaches the array
/// length. Each window `[index, index + 2*stride)` (clamped to the end) is
/// copied into a scratch buffer sized to the whole dataset and merged back
/// with `<=`, so equal keys keep their left-run order.
pub fn merge_sort(arr: &mut [i32]) {
    let n = arr.len();
    let mut scratch = vec![0; n];
    let mut stride = 1;
    while stride < n {
        let mut index = 0;
        while index + stride < n {
            let end = (index + 2 * stride - 1).min(n - 1);
            merge(arr, &mut scratch, index, index + stride, end);
            index += 2 * stride;
        }
        stride *= 2;
    }
}

/// Merge `[begin, mid)` and `[mid, end]` through `scratch`.
fn merge(arr: &mut [i32], scratch: &mut [i32], begin: usize, mid: usize, end: usize) {
    scratch[begin..=end].copy_from_slice(&arr[begin..=end]);
    let (mut i, mut j, mut pos) = (begin, mid, begin);
    while i < mid && j <= end {
        if scratch[i] <= scratch[j] {
            arr[pos] = scratch[i];
            i += 1;
        } else {
            arr[pos] = scratch[j];
            j += 1;
        }
        pos += 1;
    }
    if i == mid {
        while j <= end {
            arr[pos] = scratch[j];
            j += 1;
            pos += 1;
        }
    } else {
        while i < mid {
            arr[pos] = scratch[i];
            i += 1;
            pos += 1;
        }
    }
}

/// Recursive quicksort using a three-assignment partition.
pub fn quick_sort(arr: &mut [i32]) {
    if let Some(last) = arr.len().checked_sub(1) {
        partition_range(arr, 0, last, &mut None);
    }
}

/// [`quick_sort`], appending every cell write to `log` in execution order.
///
/// The partition does not use a swap. For each `arr[k] < pivot` it runs
///
/// ```text
/// arr[pos++] = arr[k];
/// arr[k]     = arr[pos];   // reads the cell after the one just written
/// arr[pos]   = pivot;
/// ```
///
/// and the recursion is left `[begin, pos-1]` then right `[pos+1, end]`.
/// The write log pins the exact index/value sequence.
pub fn quick_sort_recorded(arr: &mut [i32], log: &mut Vec<CellWrite>) {
    if let Some(last) = arr.len().checked_sub(1) {
        partition_range(arr, 0, last, &mut Some(log));
    }
}

fn partition_range(
    arr: &mut [i32],
    begin: usize,
    end: usize,
    log: &mut Option<&mut Vec<CellWrite>>,
) {
    if begin >= end {
        return;
    }
    let pivot = arr[begin];
    let mut pos = begin;
    for k in begin + 1..=end {
        let candidate = arr[k];
        if candidate < pivot {
            write(arr, log, pos, candidate);
            pos += 1;
            let displaced = arr[pos];
            write(arr, log, k, displaced);
            write(arr, log, pos, pivot);
        }
    }
    // Skip the left range when it is empty; `pos - 1` would underflow at 0.
    if pos > begin {
        partition_range(arr, begin, pos - 1, log);
    }
    partition_range(arr, pos + 1, end, log);
}

fn write(arr: &mut [i32], log: &mut Option<&mut Vec<CellWrite>>, index: usize, value: i32) {
    arr[index] = value;
    if let Some(log) = log {
        log.push(CellWrite { index, value });
    }
}
