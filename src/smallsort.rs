/// Sorts `v[left..right]` with insertion sort, which is *O*(*n*^2) worst-case.
///
/// Stable within the range. Used for every range that is small enough to not be worth
/// partitioning.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub(crate) fn insertion_sort<T, F>(v: &mut [T], left: usize, right: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    // This would be a logic bug in other code.
    debug_assert!(left <= right && right <= v.len());

    // Shift each element of the unsorted region v[left + 1..right] as far left as is needed to
    // make v[left..right] sorted.
    for tail in (left + 1)..right {
        insert_tail(v, left, tail, is_less);
    }
}

/// Moves `v[tail]` left past every strictly greater element of the sorted run `v[left..tail]`.
///
/// The element under insertion stays at `tail` while its slot is searched, so every comparison
/// sees it in place and a panicking `is_less` leaves `v` untouched.
fn insert_tail<T, F>(v: &mut [T], left: usize, tail: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let mut hole = tail;
    while hole > left && is_less(&v[tail], &v[hole - 1]) {
        hole -= 1;
    }

    if hole != tail {
        v[hole..=tail].rotate_right(1);
    }
}
