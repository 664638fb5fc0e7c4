//! The bounded fork-join policy: how many recursion levels may spawn tasks,
//! and how a single butterfly stage is sliced across workers when it does.
//!
//! Two independent levers, both driven by hardware parallelism `P`:
//! - `max_splits` bounds how many levels of the DIF/DIT recursion fork a
//!   sibling task at all (§4.3/§4.4 of the spec).
//! - `parallel_for_chunks` slices a single butterfly stage's `h` iterations
//!   into contiguous chunks when the stage is still within `max_splits` and
//!   `h` clears [`crate::butterfly::BUTTERFLY_THRESHOLD`] (§4.2).
//!
//! Everything here compiles to the sequential path when the `parallel`
//! feature is off, so the rest of the crate never needs to branch on it.

/// Hardware parallelism `P`, queried once per transform. Falls back to `1`
/// if the platform can't report it (matching the spec's "a zero or negative
/// worker count degrades to serial, not an error" guidance).
#[cfg(feature = "parallel")]
pub(crate) fn hardware_parallelism() -> usize {
    std::thread::available_parallelism()
        .map(std::num::NonZeroUsize::get)
        .unwrap_or(1)
}

#[cfg(not(feature = "parallel"))]
pub(crate) fn hardware_parallelism() -> usize {
    1
}

/// `⌊log₂(nextPowerOfTwo(P))⌋`, or `-1` if `P <= 1` (no spawning at all).
#[must_use]
pub(crate) fn max_splits(p: usize) -> i32 {
    if p <= 1 {
        return -1;
    }
    p.next_power_of_two().trailing_zeros() as i32
}

/// Run `a` and `b` concurrently if `stage < max_splits`, otherwise run them
/// inline in order. The inline branch always joins the spawned one before
/// returning (rayon's `join` guarantees this), so a panic in either half
/// propagates to the caller.
#[cfg(feature = "parallel")]
pub(crate) fn fork_join<RA, RB, A, B>(stage: usize, max_splits: i32, a: A, b: B) -> (RA, RB)
where
    A: FnOnce() -> RA + Send,
    B: FnOnce() -> RB + Send,
    RA: Send,
    RB: Send,
{
    if (stage as i64) < i64::from(max_splits) {
        rayon::join(a, b)
    } else {
        (a(), b())
    }
}

#[cfg(not(feature = "parallel"))]
pub(crate) fn fork_join<RA, RB, A, B>(_stage: usize, _max_splits: i32, a: A, b: B) -> (RA, RB)
where
    A: FnOnce() -> RA,
    B: FnOnce() -> RB,
{
    (a(), b())
}

/// Slice the two disjoint butterfly halves `a` and `b` (each of length `h`)
/// into `workers` contiguous chunks and apply `chunk_fn(a_chunk, b_chunk,
/// start)` to each, where `start` is the chunk's offset into `a`/`b`. Runs
/// inline when `workers <= 1`.
#[cfg(feature = "parallel")]
pub(crate) fn parallel_for_chunks<T, U>(
    a: &mut [T],
    b: &mut [U],
    workers: usize,
    chunk_fn: impl Fn(&mut [T], &mut [U], usize) + Sync,
) where
    T: Send,
    U: Send,
{
    debug_assert_eq!(a.len(), b.len());
    if workers <= 1 || a.len() <= 1 {
        chunk_fn(a, b, 0);
        return;
    }
    let chunk_len = a.len().div_ceil(workers).max(1);
    rayon::scope(|scope| {
        let mut a_rest = a;
        let mut b_rest = b;
        let mut start = 0usize;
        while !a_rest.is_empty() {
            let take = chunk_len.min(a_rest.len());
            let (a_chunk, a_next) = a_rest.split_at_mut(take);
            let (b_chunk, b_next) = b_rest.split_at_mut(take);
            let chunk_start = start;
            scope.spawn(move |_| chunk_fn(a_chunk, b_chunk, chunk_start));
            a_rest = a_next;
            b_rest = b_next;
            start += take;
        }
    });
}

#[cfg(not(feature = "parallel"))]
pub(crate) fn parallel_for_chunks<T, U>(
    a: &mut [T],
    b: &mut [U],
    _workers: usize,
    chunk_fn: impl Fn(&mut [T], &mut [U], usize),
) {
    chunk_fn(a, b, 0);
}

/// Slice `a` into chunks across the available hardware parallelism and
/// apply `f(chunk, start)` to each. Used for the trivially data-parallel
/// `N⁻¹` scaling pass after an inverse transform (§4.5 of the spec).
#[cfg(feature = "parallel")]
pub(crate) fn parallel_for_slice<T: Send>(a: &mut [T], workers: usize, f: impl Fn(&mut [T], usize) + Sync) {
    if workers <= 1 || a.is_empty() {
        f(a, 0);
        return;
    }
    let chunk_len = a.len().div_ceil(workers).max(1);
    rayon::scope(|scope| {
        for (chunk_idx, chunk) in a.chunks_mut(chunk_len).enumerate() {
            let start = chunk_idx * chunk_len;
            scope.spawn(move |_| f(chunk, start));
        }
    });
}

#[cfg(not(feature = "parallel"))]
pub(crate) fn parallel_for_slice<T>(a: &mut [T], _workers: usize, f: impl Fn(&mut [T], usize)) {
    f(a, 0);
}
