//! Element-wise comparison of any number of lists.

/// Whether all lists hold the same elements in the same order. Vacuously
/// true for zero or one list.
pub fn compare_lists<T: PartialEq>(lists: &[&[T]]) -> bool {
    compare_lists_by(lists, |a, b| a == b)
}

/// Like [`compare_lists`], with equality decided by `eq`.
pub fn compare_lists_by<T, F: Fn(&T, &T) -> bool>(lists: &[&[T]], eq: F) -> bool {
    let Some((first, rest)) = lists.split_first() else {
        return true;
    };
    if rest.iter().any(|list| list.len() != first.len()) {
        return false;
    }
    first
        .iter()
        .enumerate()
        .all(|(i, item)| rest.iter().all(|list| eq(&list[i], item)))
}
