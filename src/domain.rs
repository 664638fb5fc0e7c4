//! The public transform surface: an evaluation domain of size `N = 2^log_n`,
//! bound to a primitive `N`-th root of unity, offering forward and inverse
//! NTTs under either decimation strategy.

use crate::error::Error;
use crate::field::{FieldElement, TwoAdicField};
use crate::parallel::{hardware_parallelism, max_splits, parallel_for_slice};
use crate::recursive::{dif_fft, dit_fft};
use crate::twiddle::build_twiddle_table;

/// Which Cooley-Tukey decomposition to run.
///
/// Both compute the same transform, but neither normalizes its buffer
/// ordering: `Dif` expects natural-order input and leaves its output
/// bit-reversed; `Dit` expects bit-reversed input and produces natural-order
/// output (§4.3/§4.4). `Domain::fft`/`Domain::fft_inverse` dispatch straight
/// to the matching recursive driver with no extra permutation pass, so a
/// round trip must pair opposite decimations: `fft(a, Dif)` then
/// `fft_inverse(_, Dit)`, or `fft(a, Dit)` then `fft_inverse(_, Dif)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decimation {
    /// Decimation-in-time: expects bit-reversed input, butterfly stages run
    /// smallest block first, output is natural order.
    Dit,
    /// Decimation-in-frequency: expects natural-order input, butterfly
    /// stages run largest block first, output is bit-reversed.
    Dif,
}

/// A fixed-size evaluation domain `{1, ω, ω², …, ω^(N-1)}` over a field `F`.
///
/// Construction derives or validates the root of unity and precomputes both
/// the forward and inverse twiddle tables; [`Domain::fft`] and
/// [`Domain::fft_inverse`] are then pure functions of an in-place buffer.
#[derive(Debug, Clone)]
pub struct Domain<F: FieldElement> {
    n: usize,
    log_n: u32,
    n_inv: F,
    forward_twiddles: Vec<Vec<F>>,
    inverse_twiddles: Vec<Vec<F>>,
}

impl<F: TwoAdicField> Domain<F> {
    /// Build the domain of size `n` by deriving `ω` from the field's own
    /// two-adic structure. `n` must be a power of two not exceeding
    /// `2^F::two_adicity()`.
    #[tracing::instrument(level = "debug", skip(n))]
    pub fn new(n: usize) -> Result<Self, Error> {
        let log_n = Self::validate_size(n, F::two_adicity())?;
        let omega = F::two_adic_generator(log_n);
        Ok(Self::from_parts(n, log_n, omega))
    }
}

impl<F: FieldElement> Domain<F> {
    /// Build the domain of size `n` from an explicit primitive `n`-th root
    /// of unity, for callers (e.g. a trusted-setup transcript) that already
    /// have one in hand and don't want to route through [`TwoAdicField`].
    ///
    /// Validates `ω^n = 1` and, for `n > 1`, `ω^(n/2) != 1` — i.e. that `ω`
    /// has order exactly `n`, not a proper divisor of it.
    #[tracing::instrument(level = "debug", skip(n, omega))]
    pub fn with_root(n: usize, omega: F) -> Result<Self, Error> {
        let log_n = Self::validate_size(n, u32::MAX)?;
        if omega.pow(n as u64) != F::one() {
            return Err(Error::UnsupportedSize { size: n });
        }
        if n > 1 && omega.pow((n / 2) as u64) == F::one() {
            return Err(Error::UnsupportedSize { size: n });
        }
        Ok(Self::from_parts(n, log_n, omega))
    }

    fn validate_size(n: usize, two_adicity: u32) -> Result<u32, Error> {
        if n == 0 || !n.is_power_of_two() {
            return Err(Error::UnsupportedSize { size: n });
        }
        let log_n = n.trailing_zeros();
        if log_n > two_adicity {
            return Err(Error::UnsupportedSize { size: n });
        }
        Ok(log_n)
    }

    fn from_parts(n: usize, log_n: u32, omega: F) -> Self {
        let omega_inv = if n <= 1 { omega } else { omega.inverse() };
        let n_inv = if n <= 1 { F::one() } else { F::from_u64(n as u64).inverse() };
        Self {
            n,
            log_n,
            n_inv,
            forward_twiddles: build_twiddle_table(omega, log_n),
            inverse_twiddles: build_twiddle_table(omega_inv, log_n),
        }
    }

    /// The domain's size `N`.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.n
    }

    /// In-place forward transform: evaluates the polynomial with
    /// coefficients `a` at every point of the domain.
    ///
    /// `a.len()` must equal [`Domain::size`]. `a`'s ordering on entry and
    /// exit follows `decimation`: [`Decimation::Dif`] wants natural-order
    /// coefficients and leaves bit-reversed evaluations; [`Decimation::Dit`]
    /// wants bit-reversed coefficients and leaves natural-order evaluations.
    #[tracing::instrument(level = "debug", skip(self, a), fields(n = self.n))]
    pub fn fft(&self, a: &mut [F], decimation: Decimation) -> Result<(), Error> {
        self.check_len(a)?;
        self.transform(a, decimation, &self.forward_twiddles);
        Ok(())
    }

    /// In-place inverse transform: recovers polynomial coefficients from
    /// domain evaluations `a`.
    ///
    /// `a.len()` must equal [`Domain::size`]. Pair this with the opposite
    /// decimation used to produce `a`: evaluations from `fft(_, Dif)`
    /// round-trip through `fft_inverse(_, Dit)`, and evaluations from
    /// `fft(_, Dit)` round-trip through `fft_inverse(_, Dif)`.
    #[tracing::instrument(level = "debug", skip(self, a), fields(n = self.n))]
    pub fn fft_inverse(&self, a: &mut [F], decimation: Decimation) -> Result<(), Error> {
        self.check_len(a)?;
        self.transform(a, decimation, &self.inverse_twiddles);
        let hw = hardware_parallelism();
        let n_inv = self.n_inv;
        parallel_for_slice(a, hw, |chunk, _start| {
            for x in chunk {
                *x = *x * n_inv;
            }
        });
        Ok(())
    }

    fn check_len(&self, a: &[F]) -> Result<(), Error> {
        if a.len() != self.n {
            return Err(Error::InvalidLength {
                got: a.len(),
                expected: self.n,
            });
        }
        Ok(())
    }

    fn transform(&self, a: &mut [F], decimation: Decimation, twiddles: &[Vec<F>]) {
        if self.n <= 1 {
            return;
        }
        let hw = hardware_parallelism();
        let splits = max_splits(hw);
        match decimation {
            Decimation::Dif => dif_fft(a, 0, twiddles, splits, hw),
            Decimation::Dit => dit_fft(a, 0, twiddles, splits, hw),
        }
    }
}
