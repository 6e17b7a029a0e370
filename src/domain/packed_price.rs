//! Packed square-root price in X96 fixed-point encoding.

use core::fmt;
use core::str::FromStr;

use num_bigint::BigUint;
use num_traits::{One, ToPrimitive, Zero};

use crate::error::LensError;

/// Number of fractional bits in the X96 encoding.
const X96_BITS: u32 = 96;

/// Maximum width of a packed price: the protocol stores it as `uint160`.
const MAX_BITS: u64 = 160;

/// `2^96` as `f64`, exact (a power of two).
const Q96_F64: f64 = 79_228_162_514_264_337_593_543_950_336.0;

/// A pool's packed square-root price: `sqrt(price) * 2^96`.
///
/// `price` here is the amount of token1 per unit of token0 in raw
/// (undecimaled) smallest-unit terms. The protocol stores this value as a
/// 160-bit unsigned integer, which exceeds `u128`, so it is kept as an
/// exact [`BigUint`] and only narrowed to `f64` at the point of use.
///
/// Chain nodes report the field as a decimal string; [`FromStr`] parses
/// that representation directly.
///
/// # Examples
///
/// ```
/// use rangelens::domain::PackedPrice;
///
/// // 2^96 encodes a 1:1 raw price.
/// let packed = PackedPrice::one();
/// assert!((packed.ratio_f64().expect("in range") - 1.0).abs() < f64::EPSILON);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct PackedPrice(BigUint);

impl PackedPrice {
    /// Creates a new `PackedPrice` with width validation.
    ///
    /// # Errors
    ///
    /// Returns [`LensError::InvalidPrice`] if `value` does not fit in
    /// 160 bits.
    pub fn new(value: BigUint) -> crate::error::Result<Self> {
        if value.bits() > MAX_BITS {
            return Err(LensError::InvalidPrice(
                "packed price exceeds 160 bits",
            ));
        }
        Ok(Self(value))
    }

    /// Creates a `PackedPrice` from a `u128`.
    ///
    /// Always valid: every `u128` fits in 160 bits.
    #[must_use]
    pub fn from_u128(value: u128) -> Self {
        Self(BigUint::from(value))
    }

    /// The packed encoding of a 1:1 raw price (`2^96`).
    #[must_use]
    pub fn one() -> Self {
        Self(BigUint::one() << X96_BITS)
    }

    /// Returns the underlying big integer.
    #[must_use]
    pub const fn get(&self) -> &BigUint {
        &self.0
    }

    /// Returns `true` if the packed price is zero (degenerate pool state).
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns the raw price ratio `(packed / 2^96)^2` as `f64`.
    ///
    /// This is the amount of token1 per token0 in smallest-unit terms,
    /// without any decimal adjustment. The narrowing to `f64` carries a
    /// relative error of at most ~1e-16; exact arithmetic for display
    /// prices lives in `math::compute_prices`.
    ///
    /// # Errors
    ///
    /// Returns [`LensError::InvalidPrecision`] if the value cannot be
    /// represented as a finite `f64` (cannot occur for a validated
    /// 160-bit packed price).
    pub fn ratio_f64(&self) -> crate::error::Result<f64> {
        let packed = self
            .0
            .to_f64()
            .ok_or(LensError::InvalidPrecision(
                "packed price not representable as f64",
            ))?;
        let sqrt_ratio = packed / Q96_F64;
        let ratio = sqrt_ratio * sqrt_ratio;
        if !ratio.is_finite() {
            return Err(LensError::InvalidPrecision(
                "packed price ratio not finite",
            ));
        }
        Ok(ratio)
    }
}

impl FromStr for PackedPrice {
    type Err = LensError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = BigUint::from_str(s)
            .map_err(|_| LensError::InvalidPrice("packed price must be a decimal integer"))?;
        Self::new(value)
    }
}

impl fmt::Display for PackedPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
