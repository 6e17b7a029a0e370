//! Unified error types for the rangelens library.
//!
//! All fallible operations across the crate return [`LensError`] as their
//! error type, ensuring a consistent error handling experience for consumers.
//! Every failure is local to the computation that produced it; no error is
//! fatal to the process and nothing is retried inside the crate.

use thiserror::Error;

/// Crate-wide result alias using [`LensError`].
pub type Result<T> = core::result::Result<T, LensError>;

/// Unified error enum for all fallible operations in the crate.
///
/// Each variant carries a static context message describing the specific
/// violation, so callers can match on the kind and still surface a useful
/// diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LensError {
    /// A price value is zero, negative, non-finite, or cannot be
    /// logarithmically inverted.
    #[error("invalid price: {0}")]
    InvalidPrice(&'static str),

    /// A tick index falls outside the valid range `[-887272, 887272]`.
    #[error("invalid tick: {0}")]
    InvalidTick(&'static str),

    /// A tick range violates `tick_lower < tick_upper`.
    #[error("invalid tick range: {0}")]
    InvalidTickRange(&'static str),

    /// A tick spacing is zero or otherwise unusable.
    #[error("invalid tick spacing: {0}")]
    InvalidTickSpacing(&'static str),

    /// A precision parameter (e.g. token decimals) is out of range.
    #[error("invalid precision: {0}")]
    InvalidPrecision(&'static str),

    /// A computed token amount is negative or non-finite.
    #[error("invalid amount: {0}")]
    InvalidAmount(&'static str),

    /// A derived ratio evaluated to zero before a reciprocal was taken.
    #[error("division by zero")]
    DivisionByZero,

    /// An intermediate or final value exceeds the representable range.
    #[error("overflow: {0}")]
    Overflow(&'static str),
}
