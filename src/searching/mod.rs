//! Index-returning searches over slices. All of them answer with
//! `Some(index)` or `None`; binary and jump search require input sorted by
//! the same order they are given.

mod binary_search;
mod jump_search;
mod linear_search;

pub use binary_search::{binary_search, binary_search_by};
pub use jump_search::{jump_search, jump_search_by};
pub use linear_search::linear_search;

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        // on sorted input all three searches must agree about membership
        #[test]
        fn searches_agree_on_membership(mut values in prop::collection::vec(any::<i32>(), 0..200), probe in any::<i32>()) {
            values.sort();
            let linear = linear_search(&values, &probe);
            let binary = binary_search(&values, &probe);
            let jump = jump_search(&values, &probe);

            prop_assert_eq!(linear.is_some(), binary.is_some());
            prop_assert_eq!(linear.is_some(), jump.is_some());

            if let Some(idx) = binary {
                prop_assert_eq!(values[idx], probe);
            }
            if let Some(idx) = jump {
                prop_assert_eq!(values[idx], probe);
            }
        }
    }
}
