//! Conversion from packed square-root prices to human-readable spot
//! prices.
//!
//! A pool stores its price as `sqrt(token1/token0) * 2^96` over smallest
//! token units. [`compute_prices`] unpacks that value, squares it, adjusts
//! for the two tokens' decimal precision and returns the price quoted in
//! both directions.
//!
//! The unpacking and squaring run in arbitrary-precision decimal
//! arithmetic so that a 160-bit packed price loses no precision before
//! the final narrowing to `f64`.

use bigdecimal::BigDecimal;
use num_bigint::{BigInt, BigUint};
use num_traits::{One, ToPrimitive, Zero};

use crate::domain::{Decimals, PackedPrice, PricePair};
use crate::error::LensError;

/// `2^96` as an arbitrary-precision decimal.
fn q96() -> BigDecimal {
    BigDecimal::from(BigInt::one() << 96u32)
}

/// `10^exp` as an arbitrary-precision decimal.
fn pow10(exp: u32) -> BigDecimal {
    BigDecimal::from(BigInt::from(BigUint::from(10u8).pow(exp)))
}

/// Computes both spot prices encoded by a packed square-root price.
///
/// The returned pair quotes one unit of token0 in token1
/// (`price_of_token0`) and its reciprocal, both adjusted from smallest
/// units to display units via the tokens' decimal precision.
///
/// # Errors
///
/// - [`LensError::DivisionByZero`] if `packed` is zero, since the
///   reciprocal price would divide by zero.
/// - [`LensError::Overflow`] if a final price does not fit in `f64`.
///
/// # Examples
///
/// ```
/// use rangelens::domain::{Decimals, PackedPrice};
/// use rangelens::math::compute_prices;
///
/// let decimals = Decimals::new(6).expect("valid decimals");
/// let pair = compute_prices(&PackedPrice::one(), decimals, decimals)
///     .expect("valid packed price");
/// assert!((pair.price_of_token0() - 1.0).abs() < 1e-12);
/// assert!((pair.price_of_token1() - 1.0).abs() < 1e-12);
/// ```
#[must_use = "this returns the computed prices and does not modify state"]
pub fn compute_prices(
    packed: &PackedPrice,
    decimals0: Decimals,
    decimals1: Decimals,
) -> crate::error::Result<PricePair> {
    if packed.is_zero() {
        return Err(LensError::DivisionByZero);
    }

    let normalized = BigDecimal::from(BigInt::from(packed.get().clone())) / q96();
    let raw = &normalized * &normalized;

    // Scale by 10^(decimals0 - decimals1) to move from smallest units to
    // display units on both sides of the pair.
    let diff = i16::from(decimals0.get()) - i16::from(decimals1.get());
    let price_of_token0 = if diff >= 0 {
        raw * pow10(u32::from(diff.unsigned_abs()))
    } else {
        raw / pow10(u32::from(diff.unsigned_abs()))
    };

    if price_of_token0.is_zero() {
        return Err(LensError::DivisionByZero);
    }
    let price_of_token1 = BigDecimal::one() / &price_of_token0;

    let p0 = price_of_token0
        .to_f64()
        .filter(|v| v.is_finite())
        .ok_or(LensError::Overflow("price of token0 does not fit in f64"))?;
    let p1 = price_of_token1
        .to_f64()
        .filter(|v| v.is_finite())
        .ok_or(LensError::Overflow("price of token1 does not fit in f64"))?;
    PricePair::new(p0, p1)
}
