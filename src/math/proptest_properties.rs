//! Property-based tests using `proptest` for the engine's invariants.
//!
//! Covers five properties:
//!
//! 1. **Reciprocal prices** — `price_of_token0 * price_of_token1 ≈ 1`.
//! 2. **Tick monotonicity** — a larger packed price never derives a
//!    smaller tick.
//! 3. **Amount non-negativity** — computed amounts are finite and ≥ 0 for
//!    any price against any range.
//! 4. **Liquidity monotonicity** — more liquidity never yields smaller
//!    amounts at the same price.
//! 5. **Grid alignment** — `nearest_usable` lands on the spacing grid
//!    inside the valid tick range.

use proptest::prelude::*;

use crate::domain::{Decimals, Liquidity, PackedPrice, PositionSnapshot, Tick, TokenMeta};
use crate::math::{amounts_at_tick, compute_prices, tick_from_packed_price};

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn meta(decimals: u8) -> TokenMeta {
    let Ok(d) = Decimals::new(decimals) else {
        panic!("valid decimals");
    };
    TokenMeta::new(d)
}

fn make_position(lower: i32, upper: i32, liquidity: u128) -> PositionSnapshot {
    let Ok(tick_lower) = Tick::new(lower) else {
        panic!("valid lower tick");
    };
    let Ok(tick_upper) = Tick::new(upper) else {
        panic!("valid upper tick");
    };
    let Ok(position) = PositionSnapshot::new(
        tick_lower,
        tick_upper,
        Liquidity::new(liquidity),
        meta(6),
        meta(18),
    ) else {
        panic!("valid position");
    };
    position
}

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Packed prices spanning roughly price 1e-12 to 1e12 around 2^96.
fn packed_strategy() -> impl Strategy<Value = u128> {
    (1u128 << 77)..(1u128 << 115)
}

/// Token decimal precision in the supported range.
fn decimals_strategy() -> impl Strategy<Value = u8> {
    0u8..=18u8
}

/// Tick range bounds away from the extremes, ordered by construction.
fn range_strategy() -> impl Strategy<Value = (i32, i32)> {
    (-400_000i32..400_000i32, 1i32..=200_000i32).prop_map(|(lower, width)| (lower, lower + width))
}

/// Liquidity magnitudes that keep f64 amounts well-conditioned.
fn liquidity_strategy() -> impl Strategy<Value = u128> {
    1u128..=1_000_000_000_000u128
}

/// Ticks inside the valid range.
fn tick_strategy() -> impl Strategy<Value = i32> {
    -887_272i32..=887_272i32
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    // -- Property 1: reciprocal prices ----------------------------------

    #[test]
    fn prop_prices_are_reciprocal(
        packed in packed_strategy(),
        d0 in decimals_strategy(),
        d1 in decimals_strategy(),
    ) {
        let Ok(dec0) = Decimals::new(d0) else {
            return Ok(());
        };
        let Ok(dec1) = Decimals::new(d1) else {
            return Ok(());
        };
        let Ok(pair) = compute_prices(&PackedPrice::from_u128(packed), dec0, dec1) else {
            return Ok(());
        };
        let product = pair.price_of_token0() * pair.price_of_token1();
        prop_assert!(
            (product - 1.0).abs() < 1e-9,
            "reciprocal product drifted: {product}"
        );
    }

    // -- Property 2: tick monotone in packed price ----------------------

    #[test]
    fn prop_tick_monotone_in_packed_price(
        a in packed_strategy(),
        b in packed_strategy(),
    ) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let Ok(tick_lo) = tick_from_packed_price(&PackedPrice::from_u128(lo)) else {
            return Ok(());
        };
        let Ok(tick_hi) = tick_from_packed_price(&PackedPrice::from_u128(hi)) else {
            return Ok(());
        };
        prop_assert!(
            tick_lo <= tick_hi,
            "tick decreased as price grew: {} -> {}",
            tick_lo.get(), tick_hi.get()
        );
    }

    // -- Property 3: amounts non-negative -------------------------------

    #[test]
    fn prop_amounts_non_negative(
        (lower, upper) in range_strategy(),
        liquidity in liquidity_strategy(),
        current in tick_strategy(),
    ) {
        let position = make_position(lower, upper, liquidity);
        let Ok(current_tick) = Tick::new(current) else {
            return Ok(());
        };
        let Ok(amounts) = amounts_at_tick(&position, current_tick) else {
            return Ok(());
        };
        prop_assert!(amounts.amount0().is_finite());
        prop_assert!(amounts.amount1().is_finite());
        prop_assert!(amounts.amount0() >= 0.0);
        prop_assert!(amounts.amount1() >= 0.0);
    }

    // -- Property 4: amounts monotone in liquidity ----------------------

    #[test]
    fn prop_amounts_monotone_in_liquidity(
        (lower, upper) in range_strategy(),
        liquidity in 1u128..=1_000_000_000u128,
        current in tick_strategy(),
    ) {
        let small = make_position(lower, upper, liquidity);
        let large = make_position(lower, upper, liquidity * 2);
        let Ok(current_tick) = Tick::new(current) else {
            return Ok(());
        };
        let Ok(a) = amounts_at_tick(&small, current_tick) else {
            return Ok(());
        };
        let Ok(b) = amounts_at_tick(&large, current_tick) else {
            return Ok(());
        };
        prop_assert!(b.amount0() >= a.amount0());
        prop_assert!(b.amount1() >= a.amount1());
    }

    // -- Property 5: nearest_usable lands on the grid -------------------

    #[test]
    fn prop_nearest_usable_is_aligned(
        tick in tick_strategy(),
        spacing in 1u16..=200u16,
    ) {
        let Ok(t) = Tick::new(tick) else {
            return Ok(());
        };
        let Ok(usable) = t.nearest_usable(spacing) else {
            return Ok(());
        };
        prop_assert!(
            usable.is_aligned(spacing),
            "tick {} with spacing {} snapped off-grid to {}",
            tick, spacing, usable.get()
        );
        let distance = (i64::from(usable.get()) - i64::from(tick)).abs();
        prop_assert!(
            distance <= i64::from(spacing),
            "snap moved {} by {} which exceeds spacing {}",
            tick, distance, spacing
        );
    }
}
