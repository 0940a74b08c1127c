/// Sorts in place by building a max-heap and repeatedly swapping the top
/// behind the shrinking heap boundary.
///
/// Complexity: O(n·log(n)), no extra space
pub fn heap_sort<T: Ord>(slice: &mut [T]) {
    heap_sort_by(slice, |a, b| a < b);
}

/// Like [`heap_sort`], but ordered by a strict `less` predicate.
pub fn heap_sort_by<T, F: Fn(&T, &T) -> bool>(slice: &mut [T], less: F) {
    let n = slice.len();
    for i in (0..n / 2).rev() {
        sift_down(slice, n, i, &less);
    }
    for end in (1..n).rev() {
        slice.swap(0, end);
        sift_down(slice, end, 0, &less);
    }
}

/// Restores the max-heap property for the subtree rooted at `i`, looking
/// only at the first `n` elements.
fn sift_down<T, F: Fn(&T, &T) -> bool>(slice: &mut [T], n: usize, mut i: usize, less: &F) {
    loop {
        let mut largest = i;
        let left = 2 * i + 1;
        let right = 2 * i + 2;
        if left < n && less(&slice[largest], &slice[left]) {
            largest = left;
        }
        if right < n && less(&slice[largest], &slice[right]) {
            largest = right;
        }
        if largest == i {
            return;
        }
        slice.swap(i, largest);
        i = largest;
    }
}
