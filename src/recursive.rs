//! The DIF and DIT recursive drivers (§4.3, §4.4 of the spec).
//!
//! Both halve the working slice and recurse; the only difference is whether
//! the butterfly at this stage runs before or after the recursive calls.
//! That ordering difference is also why the two aren't symmetric in where
//! parallel butterfly dispatch actually bites: DIF's butterfly runs on the
//! full, still-undivided slice at every stage before any split has happened,
//! so it is large (and above [`crate::butterfly::BUTTERFLY_THRESHOLD`]) far
//! more often than DIT's, whose butterfly only runs once the recursive calls
//! below it have already returned. This is a property of the call order,
//! not a special case in either driver below — preserved as described
//! rather than smoothed over.

use crate::butterfly::{dif_butterfly, dit_butterfly};
use crate::field::FieldElement;
use crate::parallel::fork_join;

/// Decimation-in-frequency: natural-order input, bit-reversed-order output.
pub(crate) fn dif_fft<F: FieldElement>(
    a: &mut [F],
    stage: usize,
    twiddles: &[Vec<F>],
    max_splits: i32,
    hardware_parallelism: usize,
) {
    let n = a.len();
    if n <= 1 {
        return;
    }
    let h = n / 2;
    dif_butterfly(a, &twiddles[stage], stage, max_splits, hardware_parallelism);
    if h == 1 {
        return;
    }
    let (left, right) = a.split_at_mut(h);
    fork_join(
        stage,
        max_splits,
        || dif_fft(left, stage + 1, twiddles, max_splits, hardware_parallelism),
        || dif_fft(right, stage + 1, twiddles, max_splits, hardware_parallelism),
    );
}

/// Decimation-in-time: bit-reversed-order input, natural-order output.
pub(crate) fn dit_fft<F: FieldElement>(
    a: &mut [F],
    stage: usize,
    twiddles: &[Vec<F>],
    max_splits: i32,
    hardware_parallelism: usize,
) {
    let n = a.len();
    if n <= 1 {
        return;
    }
    let h = n / 2;
    {
        let (left, right) = a.split_at_mut(h);
        fork_join(
            stage,
            max_splits,
            || dit_fft(left, stage + 1, twiddles, max_splits, hardware_parallelism),
            || dit_fft(right, stage + 1, twiddles, max_splits, hardware_parallelism),
        );
    }
    dit_butterfly(a, &twiddles[stage], stage, max_splits, hardware_parallelism);
}
