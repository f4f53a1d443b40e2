use crate::pivot::choose_pivot;
use crate::smallsort::insertion_sort;
use crate::{panic_on_ord_violation, SMALL_SORT_THRESHOLD};

/// Sorts `v[left..right]` recursively.
///
/// Ranges of at most `SMALL_SORT_THRESHOLD` elements are insertion sorted. Larger ranges are
/// partitioned around the median of three and the two halves are sorted independently. Recursion
/// only goes into the shorter half, the longer one is handled by the loop, so the stack depth is
/// bounded by *O*(log(*n*)) even for degenerate inputs.
pub(crate) fn quicksort<T, F>(v: &mut [T], mut left: usize, mut right: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    debug_assert!(left <= right && right <= v.len());

    loop {
        if right - left <= SMALL_SORT_THRESHOLD {
            insertion_sort(v, left, right, is_less);
            return;
        }

        let pivot_pos = choose_pivot(v, left, right, is_less);
        let mid = partition(v, left, right, pivot_pos, is_less);

        // A total order always yields a split strictly inside the range. Anything else would stop
        // the range from shrinking.
        if mid <= left || mid >= right {
            panic_on_ord_violation();
        }

        if mid - left < right - mid {
            quicksort(v, left, mid, is_less);
            left = mid;
        } else {
            quicksort(v, mid, right, is_less);
            right = mid;
        }
    }
}

/// Partitions `v[left..right]` around the value at `pivot_pos` with the Hoare scheme.
///
/// Returns the split point `mid`. When `is_less` implements a total order, every element of
/// `v[left..mid]` is not greater than the pivot, every element of `v[mid..right]` is not less than
/// the pivot and `left < mid < right`.
///
/// `v[left]` must not be greater and `v[right - 1]` must not be less than the pivot, which is what
/// `choose_pivot` establishes. These two act as sentinels for the cursors. The pivot is never
/// copied out. If an exchange moves it, `pivot_pos` follows it.
///
/// If `is_less` does not implement a total order the resulting order and return value are
/// unspecified, and the cursors may run out of bounds and panic. All original elements will remain
/// in `v` either way.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub(crate) fn partition<T, F>(
    v: &mut [T],
    left: usize,
    right: usize,
    mut pivot_pos: usize,
    is_less: &mut F,
) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    debug_assert!(left < right && right <= v.len());
    debug_assert!(left <= pivot_pos && pivot_pos < right);

    let mut i = left;
    let mut j = right - 1;

    loop {
        while is_less(&v[i], &v[pivot_pos]) {
            i += 1;
        }
        while is_less(&v[pivot_pos], &v[j]) {
            j -= 1;
        }

        if i >= j {
            // v[j] is the last element of the lower half.
            return j + 1;
        }

        v.swap(i, j);
        if pivot_pos == i {
            pivot_pos = j;
        } else if pivot_pos == j {
            pivot_pos = i;
        }

        i += 1;
        j -= 1;
    }
}

#[cfg(test)]
mod tests {
    use super::{partition, quicksort};
    use crate::pivot::choose_pivot;

    fn is_less(a: &i32, b: &i32) -> bool {
        a < b
    }

    fn check_partition(mut v: Vec<i32>) {
        let len = v.len();
        let pivot_pos = choose_pivot(&mut v, 0, len, &mut is_less);
        let pivot = v[pivot_pos];

        let mut expected = v.clone();
        expected.sort();

        let mid = partition(&mut v, 0, len, pivot_pos, &mut is_less);
        assert!(0 < mid && mid < len, "mid: {mid} len: {len}");
        assert!(v[..mid].iter().all(|x| *x <= pivot), "{v:?} {mid}");
        assert!(v[mid..].iter().all(|x| *x >= pivot), "{v:?} {mid}");

        v.sort();
        assert_eq!(v, expected);
    }

    #[test]
    fn partition_distinct() {
        check_partition(vec![-5, 1, 12, 2, 8, 9, 5, 8, 11, -12, 37, 42, 1, 35]);
        check_partition((0..17).rev().collect());
        check_partition((0..17).collect());
    }

    #[test]
    fn partition_duplicates() {
        check_partition(vec![5; 17]);
        check_partition(vec![1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1]);
        check_partition(vec![3, 3, 3, 1, 3, 3, 3]);
    }

    #[test]
    fn partition_small_ranges() {
        check_partition(vec![1, 2, 3]);
        check_partition(vec![3, 2, 1]);
        check_partition(vec![2, 2, 1]);
        check_partition(vec![7, 7, 7, 7]);
    }

    #[test]
    fn partition_sub_range() {
        // The values outside [2, 9) are smaller and larger than everything inside, so the cursors
        // must not need them.
        let mut v = vec![-100, -100, 6, 3, 9, 1, 5, 8, 2, 100, 100];
        let pivot_pos = choose_pivot(&mut v, 2, 9, &mut is_less);
        let pivot = v[pivot_pos];
        let mid = partition(&mut v, 2, 9, pivot_pos, &mut is_less);

        assert!(2 < mid && mid < 9);
        assert!(v[2..mid].iter().all(|x| *x <= pivot));
        assert!(v[mid..9].iter().all(|x| *x >= pivot));
        assert_eq!(&v[..2], &[-100, -100]);
        assert_eq!(&v[9..], &[100, 100]);
    }

    #[test]
    fn partition_follows_moved_pivot() {
        // The left cursor stops on the pivot 4 itself and exchanges it with the 1 near the end,
        // the remaining scan must still compare against 4.
        let mut v = vec![0, 1, 2, 3, 4, 9, 8, 1, 10];
        let pivot_pos = choose_pivot(&mut v, 0, 9, &mut is_less);
        assert_eq!(v[pivot_pos], 4);

        let mid = partition(&mut v, 0, 9, pivot_pos, &mut is_less);
        assert!(v[..mid].iter().all(|x| *x <= 4), "{v:?} {mid}");
        assert!(v[mid..].iter().all(|x| *x >= 4), "{v:?} {mid}");
    }

    #[test]
    fn quicksort_sub_range() {
        let mut v = (0..200).rev().collect::<Vec<i32>>();
        quicksort(&mut v, 50, 150, &mut is_less);

        assert_eq!(v[..50], (150..200).rev().collect::<Vec<_>>()[..]);
        assert_eq!(v[50..150], (50..150).collect::<Vec<_>>()[..]);
        assert_eq!(v[150..], (0..50).rev().collect::<Vec<_>>()[..]);
    }

    #[test]
    fn quicksort_all_equal_lengths() {
        for len in [1, 2, 17, 100, 1_000] {
            let mut v = vec![66; len];
            quicksort(&mut v, 0, len, &mut is_less);
            assert_eq!(v, vec![66; len]);
        }
    }

    #[test]
    fn quicksort_counts_comparisons_on_equal() {
        // Equal elements split evenly, so all-equal input stays far from quadratic.
        let len = 10_000;
        let mut v = vec![0; len];
        let mut comps = 0u64;
        quicksort(&mut v, 0, len, &mut |a: &i32, b: &i32| {
            comps += 1;
            a < b
        });

        assert!(comps < (len as u64) * 40, "comps: {comps}");
    }

    #[test]
    #[should_panic]
    fn quicksort_always_less() {
        // A comparator that claims everything is less sends the cursors out of the range. This
        // has to panic instead of looping forever.
        let mut v = (0..100).collect::<Vec<i32>>();
        quicksort(&mut v, 0, 100, &mut |_: &i32, _: &i32| true);
    }
}
