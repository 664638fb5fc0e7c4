//! An in-place radix-2 Cooley-Tukey NTT over a caller-supplied prime field,
//! with bounded fork-join parallelism across available hardware.
//!
//! This crate owns the transform only: bit-reversal, twiddle-factor tables,
//! the DIF/DIT butterfly kernels and their recursive drivers, and the
//! parallel dispatch policy that decides how much of that recursion forks
//! into worker threads. It does not implement field arithmetic (see
//! [`FieldElement`]) and it does not know about polynomials, commitments, or
//! proof systems; those belong to whatever calls it.
//!
//! ```
//! # use radix2_fft::{Domain, Decimation, FieldElement, TwoAdicField};
//! # #[derive(Copy, Clone, Debug, PartialEq)]
//! # struct F(u64);
//! # impl std::ops::Add for F { type Output = F; fn add(self, r: F) -> F { F((self.0 + r.0) % 97) } }
//! # impl std::ops::Sub for F { type Output = F; fn sub(self, r: F) -> F { F((self.0 + 97 - r.0) % 97) } }
//! # impl std::ops::Mul for F { type Output = F; fn mul(self, r: F) -> F { F((self.0 * r.0) % 97) } }
//! # impl FieldElement for F {
//! #     fn zero() -> F { F(0) }
//! #     fn one() -> F { F(1) }
//! #     fn from_u64(v: u64) -> F { F(v % 97) }
//! #     fn inverse(self) -> F { self.pow(95) }
//! # }
//! # impl TwoAdicField for F {
//! #     fn two_adicity() -> u32 { 5 }
//! #     fn two_adic_generator(k: u32) -> F { F(7).pow((96) >> k) }
//! # }
//! let domain = Domain::<F>::new(8)?;
//! let mut coeffs = vec![F(1), F(0), F(0), F(0), F(0), F(0), F(0), F(0)];
//! domain.fft(&mut coeffs, Decimation::Dif)?;
//! assert!(coeffs.iter().all(|&x| x == F(1)));
//! domain.fft_inverse(&mut coeffs, Decimation::Dit)?;
//! assert_eq!(coeffs[0], F(1));
//! # Ok::<(), radix2_fft::Error>(())
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

mod bitreverse;
mod butterfly;
mod domain;
mod error;
mod field;
mod parallel;
mod recursive;
mod twiddle;

pub use bitreverse::bit_reverse;
pub use domain::{Decimation, Domain};
pub use error::Error;
pub use field::{FieldElement, TwoAdicField};
