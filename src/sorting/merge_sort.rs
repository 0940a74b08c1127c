/// Sorts in place via top-down merge sort, cloning both halves as scratch
/// space at every level.
///
/// Complexity: O(n·log(n)) time, O(n) extra space
pub fn merge_sort<T: Ord + Clone>(slice: &mut [T]) {
    merge_sort_by(slice, |a, b| a < b);
}

/// Like [`merge_sort`], but ordered by a strict `less` predicate. Ties merge
/// from the right half first.
pub fn merge_sort_by<T: Clone, F: Fn(&T, &T) -> bool>(slice: &mut [T], less: F) {
    sort(slice, &less);
}

fn sort<T: Clone, F: Fn(&T, &T) -> bool>(slice: &mut [T], less: &F) {
    if slice.len() <= 1 {
        return;
    }
    let mid = slice.len() / 2;
    let mut left = slice[..mid].to_vec();
    let mut right = slice[mid..].to_vec();
    sort(&mut left, less);
    sort(&mut right, less);
    merge(slice, &left, &right, less);
}

fn merge<T: Clone, F: Fn(&T, &T) -> bool>(slice: &mut [T], left: &[T], right: &[T], less: &F) {
    let (mut i, mut j) = (0, 0);
    for slot in slice.iter_mut() {
        if i < left.len() && (j >= right.len() || less(&left[i], &right[j])) {
            *slot = left[i].clone();
            i += 1;
        } else {
            *slot = right[j].clone();
            j += 1;
        }
    }
}
