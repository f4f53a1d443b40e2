use sort_test_tools::instantiate_sort_tests;
use sort_test_tools::Sort;

// Checks the tests themselves against the unstable sort of the standard library.
struct SortImpl {}

impl Sort for SortImpl {
    fn name() -> String {
        "rust_std_unstable".into()
    }

    fn sort<T>(v: &mut [T])
    where
        T: Ord,
    {
        v.sort_unstable();
    }

    fn sort_by<T, F>(v: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> std::cmp::Ordering,
    {
        v.sort_unstable_by(compare);
    }

    fn sort_by_key<T, K, F>(v: &mut [T], f: F)
    where
        F: FnMut(&T) -> K,
        K: Ord,
    {
        v.sort_unstable_by_key(f);
    }
}

instantiate_sort_tests!(SortImpl);
