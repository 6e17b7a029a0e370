//! Price, tick, and position math for concentrated liquidity pools.
//!
//! This module holds the three core operations of the engine:
//!
//! | Operation | Input | Output |
//! |-----------|-------|--------|
//! | [`compute_prices`] | packed price + decimals | [`PricePair`](crate::domain::PricePair) |
//! | [`tick_from_packed_price`] | packed price | [`Tick`](crate::domain::Tick) |
//! | [`compute_amounts`] | position + packed price | [`AmountPair`](crate::domain::AmountPair) |
//!
//! All operations are pure functions over validated domain types.

mod position_amounts;
mod price_conversion;
mod tick_math;

pub use position_amounts::{amounts_at_tick, compute_amounts};
pub use price_conversion::compute_prices;
pub use tick_math::{sqrt_ratio_at_tick, tick_from_packed_price};

#[cfg(test)]
mod proptest_properties;
