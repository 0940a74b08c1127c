//! In-place sorting over mutable slices. Each algorithm comes in an
//! `Ord`-based form and a `_by` form taking a strict `less` predicate.

mod bubble_sort;
mod heap_sort;
mod intro_sort;
mod merge_sort;
mod quick_sort;

pub use bubble_sort::{bubble_sort, bubble_sort_by};
pub use heap_sort::{heap_sort, heap_sort_by};
pub use intro_sort::{intro_sort, intro_sort_by};
pub use merge_sort::{merge_sort, merge_sort_by};
pub use quick_sort::{quick_sort, quick_sort_by};
