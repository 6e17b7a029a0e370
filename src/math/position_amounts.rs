//! Token amounts backing a concentrated liquidity position.
//!
//! A position's liquidity converts into token balances through the pool's
//! current price relative to the position's range: entirely token0 below
//! the range, entirely token1 above it, and a mix in between. The raw
//! per-unit amounts are floored before decimal adjustment, matching how
//! pools settle withdrawals in whole smallest units.

use crate::domain::{AmountPair, PackedPrice, PositionSnapshot, Tick};
use crate::error::LensError;
use crate::math::tick_math::{sqrt_ratio_at_tick, tick_from_packed_price};

/// Computes the token amounts a position holds at the given packed price.
///
/// Derives the current tick from `packed_price` and delegates to
/// [`amounts_at_tick`]. Because the derivation floors the continuous tick
/// value, a packed price sitting just past a range boundary resolves to
/// the same side as the boundary tick itself.
///
/// # Errors
///
/// - [`LensError::InvalidPrice`] if `packed_price` is zero or does not
///   invert to a valid tick.
/// - Any error from [`amounts_at_tick`].
///
/// # Examples
///
/// ```
/// use rangelens::domain::{Decimals, Liquidity, PackedPrice, PositionSnapshot, Tick, TokenMeta};
/// use rangelens::math::compute_amounts;
///
/// let meta = TokenMeta::new(Decimals::new(6).expect("valid decimals"));
/// let position = PositionSnapshot::new(
///     Tick::new(-600).expect("valid tick"),
///     Tick::new(600).expect("valid tick"),
///     Liquidity::new(1_000_000),
///     meta,
///     meta,
/// )
/// .expect("valid position");
///
/// let amounts = compute_amounts(&position, &PackedPrice::one()).expect("valid price");
/// assert!(amounts.amount0() > 0.0);
/// assert!(amounts.amount1() > 0.0);
/// ```
#[must_use = "this returns the computed amounts and does not modify state"]
pub fn compute_amounts(
    position: &PositionSnapshot,
    packed_price: &PackedPrice,
) -> crate::error::Result<AmountPair> {
    let current = tick_from_packed_price(packed_price)?;
    amounts_at_tick(position, current)
}

/// Computes the token amounts a position holds at the given current tick.
///
/// Uses the standard three-way split:
///
/// - `current <= tick_lower`: the position is entirely token0.
/// - `current > tick_upper`: the position is entirely token1.
/// - otherwise: both tokens, split at the current price.
///
/// Raw smallest-unit amounts are floored, then scaled down by each
/// token's decimal precision. A position with zero liquidity yields
/// [`AmountPair::ZERO`] in every branch.
///
/// # Errors
///
/// - [`LensError::InvalidPrice`] if a square-root price cannot be
///   computed for one of the ticks.
/// - [`LensError::DivisionByZero`] if the square-root prices collapse to
///   zero (cannot occur for valid ticks, but guarded anyway).
#[must_use = "this returns the computed amounts and does not modify state"]
pub fn amounts_at_tick(
    position: &PositionSnapshot,
    current: Tick,
) -> crate::error::Result<AmountPair> {
    let liquidity = position.liquidity().as_f64();
    let sqrt_lower = sqrt_ratio_at_tick(position.tick_lower())?;
    let sqrt_upper = sqrt_ratio_at_tick(position.tick_upper())?;

    let (raw0, raw1) = if current <= position.tick_lower() {
        let denom = sqrt_lower * sqrt_upper;
        if denom == 0.0 {
            return Err(LensError::DivisionByZero);
        }
        (liquidity * (sqrt_upper - sqrt_lower) / denom, 0.0)
    } else if current > position.tick_upper() {
        (0.0, liquidity * (sqrt_upper - sqrt_lower))
    } else {
        let sqrt_current = sqrt_ratio_at_tick(current)?;
        let denom = sqrt_current * sqrt_upper;
        if denom == 0.0 {
            return Err(LensError::DivisionByZero);
        }
        (
            liquidity * (sqrt_upper - sqrt_current) / denom,
            liquidity * (sqrt_current - sqrt_lower),
        )
    };

    let amount0 = position.token0().decimals().scale_down_f64(raw0.floor());
    let amount1 = position.token1().decimals().scale_down_f64(raw1.floor());
    AmountPair::new(amount0, amount1)
}
