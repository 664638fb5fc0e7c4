//! Per-stage twiddle-factor tables.
//!
//! `twiddles[s][j] = ω^(j · 2^s)`, row `s` having length `(N >> s) / 2`. This
//! is the table a DIF/DIT driver at stage `s` (operating on blocks of size
//! `m = N >> s`) consults at butterfly index `j` with no arithmetic beyond
//! the index itself.

use crate::field::FieldElement;

/// Build the full per-stage twiddle table for an `n`-th root of unity `root`,
/// where `n = 2^log_n`.
#[must_use]
pub(crate) fn build_twiddle_table<F: FieldElement>(root: F, log_n: u32) -> Vec<Vec<F>> {
    (0..log_n)
        .map(|s| {
            let half = (1usize << (log_n - s)) / 2;
            let step = root.pow(1u64 << s);
            let mut row = Vec::with_capacity(half);
            let mut w = F::one();
            for _ in 0..half {
                row.push(w);
                w = w * step;
            }
            row
        })
        .collect()
}
