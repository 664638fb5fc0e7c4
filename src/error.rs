//! Error taxonomy for domain construction and transform dispatch.

/// Errors surfaced by this crate. All three are programmer errors: there is
/// no retry or recovery path inside the core, and a `Result::Err` here means
/// the caller passed a size, length, or decimation the core cannot honor.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    /// `N` is not a power of two, or the field has no primitive `N`-th root
    /// of unity (insufficient two-adicity).
    #[error("unsupported domain size {size}: not a power of two within the field's two-adicity")]
    UnsupportedSize {
        /// The rejected size.
        size: usize,
    },

    /// The working vector's length does not match the domain's size.
    #[error("invalid length {got}: domain expects exactly {expected}")]
    InvalidLength {
        /// The length actually passed in.
        got: usize,
        /// The domain's size.
        expected: usize,
    },

    /// A decimation tag outside `{Dit, Dif}`.
    ///
    /// Unreachable through the public API today ([`crate::Decimation`] is an
    /// exhaustive two-variant enum) — kept so the error taxonomy matches the
    /// contract described for any future non-exhaustive extension.
    #[error("invalid decimation tag")]
    InvalidDecimation,
}
