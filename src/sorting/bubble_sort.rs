/// Sorts in place by repeatedly swapping adjacent out-of-order elements.
///
/// Complexity: O(n²)
pub fn bubble_sort<T: Ord>(slice: &mut [T]) {
    bubble_sort_by(slice, |a, b| a < b);
}

/// Like [`bubble_sort`], but ordered by a strict `less` predicate.
pub fn bubble_sort_by<T, F: Fn(&T, &T) -> bool>(slice: &mut [T], less: F) {
    let n = slice.len();
    for i in 0..n.saturating_sub(1) {
        // after pass i the largest i+1 elements sit at the back
        for j in 0..n - i - 1 {
            if less(&slice[j + 1], &slice[j]) {
                slice.swap(j, j + 1);
            }
        }
    }
}
