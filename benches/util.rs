use std::cell::Cell;

/// Pins the calling thread to one core, once per thread.
///
/// Doing it this way allows criterion to do other stuff with other threads, which greatly impacts
/// overall benchmark throughput. On machines with fewer cores this is a no-op.
pub fn pin_thread_to_core() {
    const PIN_CORE_ID: usize = 2;

    thread_local! { static AFFINITY_ALREADY_SET: Cell<bool> = const { Cell::new(false) }; }

    if !AFFINITY_ALREADY_SET.get() {
        if let Some(core_id) = core_affinity::get_core_ids()
            .as_ref()
            .and_then(|ids| ids.get(PIN_CORE_ID))
        {
            core_affinity::set_for_current(*core_id);
        }

        AFFINITY_ALREADY_SET.set(true);
    }
}

pub fn split_len(len: usize, part_a_percent: f64) -> (usize, usize) {
    let len_a = ((len as f64 / 100.0) * part_a_percent).round() as usize;
    let len_b = len - len_a;

    (len_a, len_b)
}

pub fn shuffle_vec<T>(mut v: Vec<T>) -> Vec<T> {
    use rand::seq::SliceRandom;

    v.shuffle(&mut rand::thread_rng());
    v
}
