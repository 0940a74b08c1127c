/// Jump search over a sorted slice: hops ahead √n elements at a time, then
/// scans linearly inside the block that could hold `target`. Returns the
/// index of a matching element, `None` when absent.
///
/// Complexity: O(√n)
pub fn jump_search<T: Ord>(slice: &[T], target: &T) -> Option<usize> {
    jump_search_by(slice, target, |a, b| a < b)
}

/// Like [`jump_search`], over a slice sorted by the same strict `less`
/// predicate. Equality means neither side is `less` than the other.
pub fn jump_search_by<T, F: Fn(&T, &T) -> bool>(slice: &[T], target: &T, less: F) -> Option<usize> {
    let n = slice.len();
    if n == 0 {
        return None;
    }
    let stride = (n as f64).sqrt() as usize;
    let mut prev = 0;
    let mut step = stride;

    // hop whole blocks while the block's last element is still too small
    while less(&slice[step.min(n) - 1], target) {
        prev = step;
        step += stride;
        if prev >= n {
            return None;
        }
    }

    // scan inside the block for the first element not less than the target
    while less(&slice[prev], target) {
        prev += 1;
        if prev == step.min(n) {
            return None;
        }
    }

    if less(target, &slice[prev]) {
        None
    } else {
        Some(prev)
    }
}
