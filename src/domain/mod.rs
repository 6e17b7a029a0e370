//! Fundamental domain value types used throughout the engine.
//!
//! This module contains the core value types that model concentrated
//! liquidity pools: packed prices, ticks, decimals, liquidity, and the
//! pool and position snapshots the math operations consume. All types
//! use newtypes with validated constructors to enforce invariants.

mod amount_pair;
mod decimals;
mod liquidity;
mod packed_price;
mod pool_snapshot;
mod position_snapshot;
mod price_pair;
mod range_status;
mod tick;
mod token_meta;

pub use amount_pair::AmountPair;
pub use decimals::Decimals;
pub use liquidity::Liquidity;
pub use packed_price::PackedPrice;
pub use pool_snapshot::PoolSnapshot;
pub use position_snapshot::PositionSnapshot;
pub use price_pair::PricePair;
pub use range_status::RangeStatus;
pub use tick::Tick;
pub use token_meta::TokenMeta;
