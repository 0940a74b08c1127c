/// Scans front to back and returns the index of the first element equal to
/// `target`, `None` if nothing matches. The only search here that works on
/// unsorted input.
///
/// Complexity: O(n)
pub fn linear_search<T: PartialEq>(slice: &[T], target: &T) -> Option<usize> {
    slice.iter().position(|item| item == target)
}
