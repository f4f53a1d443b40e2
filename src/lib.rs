//! Hybrid in-place unstable sort.
//!
//! Quicksort with a median-of-three pivot and a Hoare partition, that hands every range of at most
//! [`SMALL_SORT_THRESHOLD`] elements to insertion sort.

use core::cmp::Ordering;

mod pivot;
mod quicksort;
mod smallsort;

/// Ranges with at most this many elements are sorted with insertion sort instead of being
/// partitioned.
pub const SMALL_SORT_THRESHOLD: usize = 16;

/// Sorts the slice, but might not preserve the order of equal elements.
///
/// This sort is unstable (i.e., may reorder equal elements), in-place (i.e., does not allocate),
/// and *O*(*n* \* log(*n*)) in the expected case. There is no worst-case guarantee, specially
/// crafted inputs can still make it quadratic.
///
/// # Current implementation
///
/// Quicksort picking the median of the first, middle and last element as pivot, partitioned with
/// the Hoare scheme. Sub-slices of up to [`SMALL_SORT_THRESHOLD`] elements are finished with
/// insertion sort.
///
/// # Examples
///
/// ```
/// let mut v = [-5, 4, 1, -3, 2];
///
/// hybrid_sort::sort(&mut v);
/// assert!(v == [-5, -3, 1, 2, 4]);
/// ```
#[inline(always)]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    unstable_sort(v, |a, b| a.lt(b));
}

/// Sorts the slice with a comparator function, but might not preserve the order of equal
/// elements.
///
/// The comparator function must define a total ordering for the elements in the slice. If
/// the ordering is not total, the order of the elements is unspecified and the sort may panic,
/// but it will terminate and the slice will still contain the original elements. An order is a
/// total order if it is (for all `a`, `b` and `c`):
///
/// * total and antisymmetric: exactly one of `a < b`, `a == b` or `a > b` is true, and
/// * transitive, `a < b` and `b < c` implies `a < c`. The same must hold for both `==` and `>`.
///
/// For example, while [`f64`] doesn't implement [`Ord`] because `NaN != NaN`, we can use
/// `partial_cmp` as our sort function when we know the slice doesn't contain a `NaN`.
///
/// ```
/// let mut floats = [5f64, 4.0, 1.0, 3.0, 2.0];
/// hybrid_sort::sort_by(&mut floats, |a, b| a.partial_cmp(b).unwrap());
/// assert_eq!(floats, [1.0, 2.0, 3.0, 4.0, 5.0]);
/// ```
#[inline(always)]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    unstable_sort(v, |a, b| compare(a, b) == Ordering::Less);
}

/// Sorts the slice with a key extraction function, but might not preserve the order of equal
/// elements.
///
/// The key function is called twice per comparison, it is not cached.
///
/// ```
/// let mut v = [-5i32, 4, 1, -3, 2];
///
/// hybrid_sort::sort_by_key(&mut v, |k| k.abs());
/// assert!(v == [1, 2, -3, 4, -5]);
/// ```
#[inline(always)]
pub fn sort_by_key<T, K, F>(v: &mut [T], mut f: F)
where
    F: FnMut(&T) -> K,
    K: Ord,
{
    unstable_sort(v, |a, b| f(a).lt(&f(b)));
}

// --- IMPL ---

#[inline(always)]
fn unstable_sort<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    // Nothing to do, and the common case for tiny inputs.
    if len < 2 {
        return;
    }

    if len <= SMALL_SORT_THRESHOLD {
        smallsort::insertion_sort(v, 0, len, &mut is_less);
    } else {
        quicksort::quicksort(v, 0, len, &mut is_less);
    }
}

#[inline(never)]
#[cold]
fn panic_on_ord_violation() -> ! {
    panic!("Ord violation");
}
