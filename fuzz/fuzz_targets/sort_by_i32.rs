#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let original: Vec<i32> = data
        .chunks_exact(4)
        .map(|chunk| i32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect();

    // Descending, to exercise the comparator path and not only Ord.
    let mut v = original.clone();
    hybrid_sort::sort_by(&mut v, |a, b| b.cmp(a));

    let mut expected = original;
    expected.sort_unstable_by(|a, b| b.cmp(a));
    assert_eq!(v, expected);
});
