//! Tick-to-price and price-to-tick conversion for concentrated liquidity
//! pools.
//!
//! These helpers implement the standard relationship `price = 1.0001^tick`
//! used by Uniswap v3-style pools, with prices arriving in packed
//! square-root form (`sqrt(price) * 2^96`).
//!
//! # Functions
//!
//! - [`sqrt_ratio_at_tick`] — computes `sqrt(1.0001^tick)` for a given
//!   [`Tick`].
//! - [`tick_from_packed_price`] — computes the greatest tick whose price ≤
//!   the ratio encoded by a [`PackedPrice`].
//!
//! # Precision
//!
//! Both functions use `f64` arithmetic (`powf`, `ln`). The packed price
//! carries up to 160 bits while `f64` holds 53 bits of mantissa, so the
//! derived tick can differ from the exact integer inversion by at most one
//! tick near interval boundaries. Callers that need the pool's recorded
//! tick rather than a derived one should read it from
//! [`PoolSnapshot::tick`](crate::domain::PoolSnapshot::tick).

use crate::domain::{PackedPrice, Tick};
use crate::error::LensError;

/// Base of the tick-price exponential: `price = BASE^tick`.
const BASE: f64 = 1.0001;

/// Tolerance for snapping a floating-point tick value to the nearest
/// integer.  This prevents off-by-one errors caused by IEEE 754
/// rounding when a packed price sits exactly on a tick boundary.
const SNAP_EPSILON: f64 = 1e-9;

/// Computes the square-root price at a given tick: `sqrt(1.0001^tick)`.
///
/// All valid [`Tick`] values (in the range `[-887272, 887272]`) produce
/// finite, positive results within the `f64` representable range.
///
/// # Errors
///
/// Returns [`LensError::InvalidPrice`] if the computed value is not
/// finite or not positive (should not occur for valid ticks, but
/// guarded anyway).
///
/// # Examples
///
/// ```
/// use rangelens::domain::Tick;
/// use rangelens::math::sqrt_ratio_at_tick;
///
/// let sqrt_ratio = sqrt_ratio_at_tick(Tick::ZERO).expect("tick 0 is valid");
/// assert!((sqrt_ratio - 1.0).abs() < f64::EPSILON);
/// ```
#[must_use = "this returns the computed ratio and does not modify state"]
pub fn sqrt_ratio_at_tick(tick: Tick) -> crate::error::Result<f64> {
    let sqrt_ratio = BASE.powf(f64::from(tick.get()) / 2.0);
    if !sqrt_ratio.is_finite() || sqrt_ratio <= 0.0 {
        return Err(LensError::InvalidPrice(
            "tick produces non-finite square-root price",
        ));
    }
    Ok(sqrt_ratio)
}

/// Computes the greatest tick whose price is ≤ the ratio encoded by the
/// packed price.
///
/// Implements `floor(log_{1.0001}((packed / 2^96)^2))` with a
/// snap-to-nearest adjustment (within `SNAP_EPSILON`) so that packed
/// prices sitting exactly on a tick boundary map to that boundary's tick.
///
/// # Errors
///
/// - [`LensError::InvalidPrice`] if `packed` is zero (logarithm
///   undefined).
/// - [`LensError::InvalidTick`] if the resulting tick falls outside
///   the valid range `[-887272, 887272]`.
///
/// # Examples
///
/// ```
/// use rangelens::domain::PackedPrice;
/// use rangelens::math::tick_from_packed_price;
///
/// // 2^96 encodes sqrt(price) = 1, so price = 1 and tick = 0.
/// let tick = tick_from_packed_price(&PackedPrice::one()).expect("valid price");
/// assert_eq!(tick.get(), 0);
/// ```
#[must_use = "this returns the computed tick and does not modify state"]
pub fn tick_from_packed_price(packed: &PackedPrice) -> crate::error::Result<Tick> {
    if packed.is_zero() {
        return Err(LensError::InvalidPrice(
            "packed price must be non-zero for tick conversion",
        ));
    }

    let ratio = packed.ratio_f64()?;
    if ratio <= 0.0 {
        return Err(LensError::InvalidPrice(
            "packed price ratio must be positive for tick conversion",
        ));
    }

    let raw = ratio.ln() / BASE.ln();

    // Snap to nearest integer when within epsilon to keep boundary
    // prices on their own tick despite IEEE 754 imprecision.
    let rounded = raw.round();
    let tick_f64 = if (raw - rounded).abs() < SNAP_EPSILON {
        rounded
    } else {
        raw.floor()
    };

    if !tick_f64.is_finite() {
        return Err(LensError::InvalidTick(
            "packed price produces non-finite tick value",
        ));
    }

    // Values outside i32 are caught by Tick::new().
    #[allow(clippy::cast_possible_truncation)]
    let tick_i32 = tick_f64 as i32;
    Tick::new(tick_i32)
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn tick(v: i32) -> Tick {
        let Ok(t) = Tick::new(v) else {
            panic!("expected Ok for tick {v}");
        };
        t
    }

    // -- sqrt_ratio_at_tick -------------------------------------------------

    #[test]
    fn tick_zero_gives_sqrt_ratio_one() {
        let Ok(sqrt_ratio) = sqrt_ratio_at_tick(Tick::ZERO) else {
            panic!("expected Ok");
        };
        assert!(
            (sqrt_ratio - 1.0).abs() < f64::EPSILON,
            "sqrt(1.0001^0) should be exactly 1.0"
        );
    }

    #[test]
    fn positive_tick_gives_sqrt_ratio_above_one() {
        let Ok(sqrt_ratio) = sqrt_ratio_at_tick(tick(1000)) else {
            panic!("expected Ok");
        };
        assert!(sqrt_ratio > 1.0, "positive tick -> sqrt ratio > 1.0");
    }

    #[test]
    fn negative_tick_gives_sqrt_ratio_below_one() {
        let Ok(sqrt_ratio) = sqrt_ratio_at_tick(tick(-1000)) else {
            panic!("expected Ok");
        };
        assert!(
            sqrt_ratio > 0.0 && sqrt_ratio < 1.0,
            "negative tick -> 0 < sqrt ratio < 1"
        );
    }

    #[test]
    fn min_tick_produces_valid_sqrt_ratio() {
        let Ok(sqrt_ratio) = sqrt_ratio_at_tick(Tick::MIN) else {
            panic!("expected Ok for MIN tick");
        };
        assert!(sqrt_ratio > 0.0, "MIN tick should produce positive value");
        assert!(sqrt_ratio.is_finite(), "MIN tick value should be finite");
    }

    #[test]
    fn max_tick_produces_valid_sqrt_ratio() {
        let Ok(sqrt_ratio) = sqrt_ratio_at_tick(Tick::MAX) else {
            panic!("expected Ok for MAX tick");
        };
        assert!(sqrt_ratio > 1.0, "MAX tick should produce value > 1");
        assert!(sqrt_ratio.is_finite(), "MAX tick value should be finite");
    }

    #[test]
    fn tick_two_squares_to_base() {
        let Ok(sqrt_ratio) = sqrt_ratio_at_tick(tick(2)) else {
            panic!("expected Ok");
        };
        assert!(
            (sqrt_ratio * sqrt_ratio - 1.0001_f64.powi(2)).abs() < 1e-12,
            "sqrt ratio at tick 2 should square to 1.0001^2"
        );
    }

    // -- tick_from_packed_price ---------------------------------------------

    #[test]
    fn packed_one_gives_tick_zero() {
        let Ok(t) = tick_from_packed_price(&PackedPrice::one()) else {
            panic!("expected Ok");
        };
        assert_eq!(t.get(), 0);
    }

    #[test]
    fn packed_zero_is_error() {
        let result = tick_from_packed_price(&PackedPrice::from_u128(0));
        assert_eq!(
            result,
            Err(LensError::InvalidPrice(
                "packed price must be non-zero for tick conversion"
            ))
        );
    }

    #[test]
    fn packed_above_one_gives_positive_tick() {
        // 2^97 encodes sqrt(price) = 2, so price = 4.
        let packed = PackedPrice::from_u128(1u128 << 97);
        let Ok(t) = tick_from_packed_price(&packed) else {
            panic!("expected Ok");
        };
        assert!(t.get() > 0, "price > 1 -> positive tick");
    }

    #[test]
    fn packed_below_one_gives_negative_tick() {
        // 2^95 encodes sqrt(price) = 0.5, so price = 0.25.
        let packed = PackedPrice::from_u128(1u128 << 95);
        let Ok(t) = tick_from_packed_price(&packed) else {
            panic!("expected Ok");
        };
        assert!(t.get() < 0, "price < 1 -> negative tick");
    }

    // -- Known values -------------------------------------------------------

    #[test]
    fn tick_at_price_two() {
        // floor(sqrt(2) * 2^96) encodes price 2.
        // log_{1.0001}(2) = ln(2) / ln(1.0001) ≈ 6931.81..., floor → 6931.
        let packed = PackedPrice::from_u128(112_045_541_949_572_279_837_463_876_454_u128);
        let Ok(t) = tick_from_packed_price(&packed) else {
            panic!("expected Ok");
        };
        assert_eq!(t.get(), 6931);
    }

    #[test]
    fn tick_at_price_quarter() {
        // 2^95 encodes price 0.25; log_{1.0001}(0.25) ≈ -13863.62, floor → -13864.
        let packed = PackedPrice::from_u128(1u128 << 95);
        let Ok(t) = tick_from_packed_price(&packed) else {
            panic!("expected Ok");
        };
        assert_eq!(t.get(), -13864);
    }

    #[test]
    fn tick_at_price_four() {
        // 2^97 encodes price 4 exactly; log_{1.0001}(4) ≈ 13863.62, floor → 13863.
        let packed = PackedPrice::from_u128(1u128 << 97);
        let Ok(t) = tick_from_packed_price(&packed) else {
            panic!("expected Ok");
        };
        assert_eq!(t.get(), 13863);
    }

    // -- Monotonicity -------------------------------------------------------

    #[test]
    fn monotone_in_packed_price() {
        let packed: &[u128] = &[
            1u128 << 90,
            1u128 << 94,
            1u128 << 95,
            1u128 << 96,
            (1u128 << 96) + (1u128 << 80),
            1u128 << 97,
            1u128 << 100,
        ];
        let ticks: Vec<i32> = packed
            .iter()
            .map(|&p| {
                let Ok(t) = tick_from_packed_price(&PackedPrice::from_u128(p)) else {
                    panic!("expected Ok for packed {p}");
                };
                t.get()
            })
            .collect();

        for pair in ticks.windows(2) {
            let [prev, next] = pair else {
                panic!("windows(2) should yield pairs");
            };
            assert!(next >= prev, "ticks must be non-decreasing in price");
        }
    }

    // -- Round-trip consistency ---------------------------------------------

    #[test]
    fn derived_tick_price_brackets_ratio() {
        // For any packed price, the derived tick's price must not exceed
        // the encoded ratio, and the next tick's price must exceed it
        // (up to the one-tick f64 tolerance at exact boundaries).
        for p in [
            (1u128 << 96) + 12_345_678,
            (1u128 << 95) + 999,
            112_045_541_949_572_279_837_463_876_454_u128,
        ] {
            let packed = PackedPrice::from_u128(p);
            let Ok(ratio) = packed.ratio_f64() else {
                panic!("expected Ok");
            };
            let Ok(t) = tick_from_packed_price(&packed) else {
                panic!("expected Ok");
            };
            let Ok(sqrt_at) = sqrt_ratio_at_tick(t) else {
                panic!("expected Ok");
            };
            let price_at = sqrt_at * sqrt_at;
            assert!(
                price_at <= ratio * (1.0 + 1e-9),
                "tick price {price_at} exceeds ratio {ratio}"
            );
        }
    }
}
