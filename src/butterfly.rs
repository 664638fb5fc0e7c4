//! The radix-2 Cooley-Tukey butterfly kernel, DIF and DIT forms.

use crate::field::FieldElement;
use crate::parallel::parallel_for_chunks;

/// Below this block half-size, the dispatch overhead of slicing a butterfly
/// across workers outweighs what parallel execution recovers. Calibrated
/// empirically by the source this crate's parallel policy is modeled on;
/// kept as a named constant per that design note rather than inlined.
pub(crate) const BUTTERFLY_THRESHOLD: usize = 16;

/// DIF butterfly over `[a | b]`, `a.len() == b.len() == h`, `tw.len() >= h`:
/// `a[i] <- a[i] + b[i]`, `b[i] <- (a[i]_old - b[i]) * tw[i]`, `i = 0` elided.
#[inline]
fn dif_range<F: FieldElement>(a: &mut [F], b: &mut [F], tw: &[F], start: usize) {
    for (i, (x, y)) in a.iter_mut().zip(b.iter_mut()).enumerate() {
        let t = *x;
        *x = t + *y;
        *y = if start + i == 0 {
            t - *y
        } else {
            (t - *y) * tw[start + i]
        };
    }
}

/// DIT butterfly over `[a | b]`: `tm <- b[i] * tw[i]`, `a[i] <- a[i] + tm`,
/// `b[i] <- a[i]_old - tm`, `i = 0` elided.
#[inline]
fn dit_range<F: FieldElement>(a: &mut [F], b: &mut [F], tw: &[F], start: usize) {
    for (i, (x, y)) in a.iter_mut().zip(b.iter_mut()).enumerate() {
        let tm = if start + i == 0 { *y } else { *y * tw[start + i] };
        let t = *x;
        *x = t + tm;
        *y = t - tm;
    }
}

/// Whether, at this stage, the `h`-wide inner loop should itself be sliced
/// across workers (as opposed to the recursive fan-out around it).
#[inline]
fn should_parallelize(stage: usize, max_splits: i32, h: usize) -> bool {
    (stage as i64) < i64::from(max_splits) && h > BUTTERFLY_THRESHOLD
}

/// Run a DIF butterfly at `stage` over `block` (length `m = 2h`), consulting
/// twiddle row `tw` (length `>= h`).
pub(crate) fn dif_butterfly<F: FieldElement>(
    block: &mut [F],
    tw: &[F],
    stage: usize,
    max_splits: i32,
    hardware_parallelism: usize,
) {
    let h = block.len() / 2;
    let (a, b) = block.split_at_mut(h);
    if should_parallelize(stage, max_splits, h) {
        let workers = (hardware_parallelism >> stage).max(1);
        parallel_for_chunks(a, b, workers, |a_chunk, b_chunk, start| {
            dif_range(a_chunk, b_chunk, tw, start);
        });
    } else {
        dif_range(a, b, tw, 0);
    }
}

/// Run a DIT butterfly at `stage` over `block` (length `m = 2h`), consulting
/// twiddle row `tw` (length `>= h`).
pub(crate) fn dit_butterfly<F: FieldElement>(
    block: &mut [F],
    tw: &[F],
    stage: usize,
    max_splits: i32,
    hardware_parallelism: usize,
) {
    let h = block.len() / 2;
    let (a, b) = block.split_at_mut(h);
    if should_parallelize(stage, max_splits, h) {
        let workers = (hardware_parallelism >> stage).max(1);
        parallel_for_chunks(a, b, workers, |a_chunk, b_chunk, start| {
            dit_range(a_chunk, b_chunk, tw, start);
        });
    } else {
        dit_range(a, b, tw, 0);
    }
}
