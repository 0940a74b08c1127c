/// Binary search over a sorted slice. Returns the index of some element
/// equal to `target` (not necessarily the first of a run), `None` when
/// absent.
///
/// Complexity: O(log(n))
pub fn binary_search<T: Ord>(slice: &[T], target: &T) -> Option<usize> {
    binary_search_by(slice, target, |a, b| a < b)
}

/// Like [`binary_search`], over a slice sorted by the same strict `less`
/// predicate. Equality means neither side is `less` than the other.
pub fn binary_search_by<T, F: Fn(&T, &T) -> bool>(slice: &[T], target: &T, less: F) -> Option<usize> {
    // half-open bounds; the midpoint form avoids overflow on huge slices
    let (mut left, mut right) = (0, slice.len());
    while left < right {
        let mid = left + (right - left) / 2;
        if less(&slice[mid], target) {
            left = mid + 1;
        } else if less(target, &slice[mid]) {
            right = mid;
        } else {
            return Some(mid);
        }
    }
    None
}
