//! Shared test and benchmark tooling for in-place sort implementations.

use std::cmp::Ordering;

/// Abstracts over a sort implementation, so that the same test bodies can check it and the
/// reference implementation in the standard library.
pub trait Sort {
    fn name() -> String;

    fn sort<T>(v: &mut [T])
    where
        T: Ord;

    fn sort_by<T, F>(v: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> Ordering;

    fn sort_by_key<T, K, F>(v: &mut [T], f: F)
    where
        F: FnMut(&T) -> K,
        K: Ord;
}

pub mod patterns;
pub mod test_types;

// Used by the test instantiation macros, so that users don't need their own dependency on it.
#[doc(hidden)]
pub use paste;
