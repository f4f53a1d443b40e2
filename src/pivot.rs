/// Orders `v[left]`, `v[mid]` and `v[right - 1]` in place and returns `mid`, the position of the
/// median of the three, where `mid = left + (right - left) / 2`.
///
/// The three conditional swaps always compare the values currently in place, so the second
/// comparison sees a `v[left]` that the first one may have just replaced. Afterwards
/// `v[left] <= v[mid] <= v[right - 1]`, which gives the Hoare partition a sentinel at both ends.
///
/// Requires `right - left >= 3`.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub(crate) fn choose_pivot<T, F>(v: &mut [T], left: usize, right: usize, is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    debug_assert!(left < right && right <= v.len() && right - left >= 3);

    let mid = left + (right - left) / 2;
    let last = right - 1;

    if is_less(&v[mid], &v[left]) {
        v.swap(mid, left);
    }
    if is_less(&v[last], &v[left]) {
        v.swap(last, left);
    }
    if is_less(&v[last], &v[mid]) {
        v.swap(last, mid);
    }

    mid
}
