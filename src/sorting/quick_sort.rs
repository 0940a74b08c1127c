/// Sorts in place via quicksort with Lomuto partitioning around the last
/// element.
///
/// Complexity: O(n·log(n)) expected; already-sorted input hits the O(n²)
/// worst case, which [`intro_sort`](super::intro_sort()) avoids
pub fn quick_sort<T: Ord>(slice: &mut [T]) {
    quick_sort_by(slice, |a, b| a < b);
}

/// Like [`quick_sort`], but ordered by a strict `less` predicate.
pub fn quick_sort_by<T, F: Fn(&T, &T) -> bool>(slice: &mut [T], less: F) {
    sort(slice, &less);
}

fn sort<T, F: Fn(&T, &T) -> bool>(slice: &mut [T], less: &F) {
    if slice.len() <= 1 {
        return;
    }
    let p = partition(slice, less);
    let (low, rest) = slice.split_at_mut(p);
    sort(low, less);
    sort(&mut rest[1..], less);
}

/// Lomuto partition around the last element. Returns the pivot's final
/// index; everything before it is `less` than the pivot.
pub(super) fn partition<T, F: Fn(&T, &T) -> bool>(slice: &mut [T], less: &F) -> usize {
    let high = slice.len() - 1;
    let mut store = 0;
    for j in 0..high {
        if less(&slice[j], &slice[high]) {
            slice.swap(store, j);
            store += 1;
        }
    }
    slice.swap(store, high);
    store
}
