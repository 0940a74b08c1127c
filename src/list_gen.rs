//! Random list generation for demos, tests, and benchmarks.

use rand::Rng;

/// Generates `length` integers drawn uniformly from `min..max` (exclusive
/// top). Panics when the range is empty, i.e. `max <= min`.
pub fn generate_list(length: usize, min: i64, max: i64) -> Vec<i64> {
    let mut rng = rand::thread_rng();
    (0..length).map(|_| rng.gen_range(min..max)).collect()
}

/// Generates `length` one-character strings whose code points are drawn
/// uniformly from `min..max`. Code points that are not valid characters
/// (surrogates and the like) become U+FFFD, the replacement character.
/// Panics when `max <= min`.
pub fn generate_string_list(length: usize, min: u32, max: u32) -> Vec<String> {
    let mut rng = rand::thread_rng();
    (0..length)
        .map(|_| {
            let code = rng.gen_range(min..max);
            char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER).to_string()
        })
        .collect()
}
