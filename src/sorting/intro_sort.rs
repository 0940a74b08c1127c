use super::heap_sort_by;
use super::quick_sort::partition;

/// Sorts in place via introsort: quicksort that switches to insertion sort
/// for short runs and to heapsort once the partition depth passes
/// 2·floor(log₂(len)), capping the worst case at O(n·log(n)).
pub fn intro_sort<T: Ord>(slice: &mut [T]) {
    intro_sort_by(slice, |a, b| a < b);
}

/// Like [`intro_sort`], but ordered by a strict `less` predicate.
pub fn intro_sort_by<T, F: Fn(&T, &T) -> bool>(slice: &mut [T], less: F) {
    if slice.len() <= 1 {
        return;
    }
    let max_depth = 2 * slice.len().ilog2() as usize;
    sort(slice, max_depth, &less);
}

fn sort<T, F: Fn(&T, &T) -> bool>(slice: &mut [T], depth: usize, less: &F) {
    if slice.len() <= 16 {
        insertion_sort(slice, less);
    } else if depth == 0 {
        heap_sort_by(slice, less);
    } else {
        let p = partition(slice, less);
        let (low, rest) = slice.split_at_mut(p);
        sort(low, depth - 1, less);
        sort(&mut rest[1..], depth - 1, less);
    }
}

fn insertion_sort<T, F: Fn(&T, &T) -> bool>(slice: &mut [T], less: &F) {
    for i in 1..slice.len() {
        let mut j = i;
        while j > 0 && less(&slice[j], &slice[j - 1]) {
            slice.swap(j - 1, j);
            j -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_short_runs_with_insertion_sort() {
        // below the cutoff, so only insertion sort runs
        let mut v = [9, 3, 7, 1];
        intro_sort(&mut v);
        assert_eq!(v, [1, 3, 7, 9]);
    }

    #[test]
    fn empty_and_single_are_no_ops() {
        let mut empty: [i32; 0] = [];
        intro_sort(&mut empty);

        let mut one = [42];
        intro_sort(&mut one);
        assert_eq!(one, [42]);
    }

    #[test]
    fn sorts_across_the_cutoff() {
        let mut v: Vec<i32> = (0..17).rev().collect();
        intro_sort(&mut v);
        assert_eq!(v, (0..17).collect::<Vec<_>>());
    }

    #[test]
    fn sorted_input_falls_back_to_heapsort() {
        // ascending input degenerates the last-element pivot, so the depth
        // limit has to kick in long before the recursion gets quadratic
        let mut v: Vec<u32> = (0..5_000).collect();
        intro_sort(&mut v);
        assert_eq!(v, (0..5_000).collect::<Vec<_>>());

        let mut v: Vec<u32> = (0..5_000).rev().collect();
        intro_sort(&mut v);
        assert_eq!(v, (0..5_000).collect::<Vec<_>>());
    }

    #[test]
    fn keeps_duplicates() {
        let mut v = vec![5; 40];
        v.extend(0..40);
        intro_sort(&mut v);
        let mut expected: Vec<i32> = (0..40).collect();
        expected.extend(std::iter::repeat(5).take(40));
        expected.sort();
        assert_eq!(v, expected);
    }

    #[test]
    fn by_form_sorts_descending() {
        let mut v: Vec<i32> = (0..200).collect();
        intro_sort_by(&mut v, |a, b| a > b);
        assert_eq!(v, (0..200).rev().collect::<Vec<_>>());
    }
}
