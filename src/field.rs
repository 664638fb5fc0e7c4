//! The field-element contract this crate consumes but does not implement.
//!
//! Concrete prime-field arithmetic (Montgomery reduction, CIOS multiplication,
//! the modulus itself) belongs to the surrounding proving system. This crate
//! only ever calls the handful of operations below.

use std::fmt::Debug;
use std::ops::{Add, Mul, Sub};

/// An opaque element of a prime field `F_p`, supplied by the caller's field
/// arithmetic library.
///
/// All operations are associative/commutative modulo `p`; constant-time
/// execution is the implementor's concern, not this crate's.
pub trait FieldElement:
    Copy
    + Clone
    + Debug
    + PartialEq
    + Send
    + Sync
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
{
    /// The additive identity.
    fn zero() -> Self;

    /// The multiplicative identity.
    fn one() -> Self;

    /// Construct an element from a small non-negative integer, reduced mod `p`.
    fn from_u64(value: u64) -> Self;

    /// The multiplicative inverse. Callers only ever invoke this on non-zero
    /// elements produced by domain construction (`N⁻¹`, `ω⁻¹`), so a panic on
    /// zero is an acceptable contract for implementors.
    fn inverse(self) -> Self;

    /// `self^exponent`, by repeated squaring.
    fn pow(self, mut exponent: u64) -> Self {
        let mut base = self;
        let mut acc = Self::one();
        while exponent > 0 {
            if exponent & 1 == 1 {
                acc = acc * base;
            }
            base = base * base;
            exponent >>= 1;
        }
        acc
    }
}

/// A field that additionally knows a primitive `2^k`-th root of unity for
/// every `k` up to its two-adicity.
///
/// `Domain::new` uses this to derive `ω` from `N` alone; callers who already
/// have a root of unity in hand (e.g. loaded from a trusted setup) can skip
/// this trait entirely and call [`crate::domain::Domain::with_root`].
pub trait TwoAdicField: FieldElement {
    /// `log2` of the largest power of two dividing `p - 1`: the maximum `k`
    /// for which a primitive `2^k`-th root of unity exists in this field.
    fn two_adicity() -> u32;

    /// A primitive `2^k`-th root of unity, for `k <= Self::two_adicity()`.
    fn two_adic_generator(k: u32) -> Self;
}

/// A small, unoptimized reference field used only by this crate's own test
/// suite. Downstream proving systems bring their own `FieldElement` (with
/// Montgomery arithmetic, SIMD, etc.); this one exists purely so the crate's
/// tests don't need an external field dependency.
#[cfg(test)]
pub(crate) mod testutil {
    use super::{FieldElement, TwoAdicField};
    use std::ops::{Add, Mul, Sub};

    /// The Goldilocks prime, `p = 2^64 - 2^32 + 1`. Two-adicity 32, plenty
    /// for every domain size this crate's tests exercise (up to `2^12`).
    const GOLDILOCKS: u64 = 0xffff_ffff_0000_0001;

    /// `Fp64<P>`: a 64-bit prime field element, modulus `P` fixed as a const
    /// generic. Arithmetic is carried out in `u128` to avoid overflow.
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub(crate) struct Fp64<const P: u64>(u64);

    impl<const P: u64> Fp64<P> {
        fn add_raw(a: u64, b: u64) -> u64 {
            let s = u128::from(a) + u128::from(b);
            let s = if s >= u128::from(P) { s - u128::from(P) } else { s };
            s as u64
        }

        fn sub_raw(a: u64, b: u64) -> u64 {
            if a >= b {
                a - b
            } else {
                (u128::from(a) + u128::from(P) - u128::from(b)) as u64
            }
        }

        fn mul_raw(a: u64, b: u64) -> u64 {
            ((u128::from(a) * u128::from(b)) % u128::from(P)) as u64
        }
    }

    impl<const P: u64> Add for Fp64<P> {
        type Output = Self;
        fn add(self, rhs: Self) -> Self {
            Self(Self::add_raw(self.0, rhs.0))
        }
    }
    impl<const P: u64> Sub for Fp64<P> {
        type Output = Self;
        fn sub(self, rhs: Self) -> Self {
            Self(Self::sub_raw(self.0, rhs.0))
        }
    }
    impl<const P: u64> Mul for Fp64<P> {
        type Output = Self;
        fn mul(self, rhs: Self) -> Self {
            Self(Self::mul_raw(self.0, rhs.0))
        }
    }

    impl<const P: u64> FieldElement for Fp64<P> {
        fn zero() -> Self {
            Self(0)
        }
        fn one() -> Self {
            Self(1 % P)
        }
        fn from_u64(value: u64) -> Self {
            Self(value % P)
        }
        fn inverse(self) -> Self {
            assert_ne!(self.0, 0, "inverse of zero");
            self.pow(P - 2)
        }
    }

    impl<const P: u64> TwoAdicField for Fp64<P> {
        fn two_adicity() -> u32 {
            (P - 1).trailing_zeros()
        }
        fn two_adic_generator(k: u32) -> Self {
            assert!(k <= Self::two_adicity(), "k exceeds field two-adicity");
            let g = Self::from_u64(7);
            let exp = (P - 1) >> k;
            g.pow(exp)
        }
    }

    /// The field used throughout this crate's unit tests.
    pub(crate) type TestField = Fp64<GOLDILOCKS>;

    /// A field with small two-adicity (order 8 only), for exercising
    /// `UnsupportedSize` without paying for a 64-bit prime search.
    pub(crate) type SmallTestField = Fp64<97>;

    #[test]
    fn goldilocks_roots_have_expected_order() {
        for k in 1..=12 {
            let w = TestField::two_adic_generator(k);
            let n = 1u64 << k;
            assert_eq!(w.pow(n), TestField::one());
            if k > 0 {
                assert_ne!(w.pow(n / 2), TestField::one());
            }
        }
    }

    #[test]
    fn small_field_root_of_order_eight() {
        // 97 - 1 = 96 = 2^5 * 3, so two-adicity is 5.
        assert_eq!(SmallTestField::two_adicity(), 5);
        let w = SmallTestField::two_adic_generator(3);
        assert_eq!(w.pow(8), SmallTestField::one());
        assert_ne!(w.pow(4), SmallTestField::one());
    }
}
