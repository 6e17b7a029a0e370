//! Convenience re-exports for common types and functions.
//!
//! The prelude provides a single import to bring all commonly used items
//! into scope:
//!
//! ```rust
//! use rangelens::prelude::*;
//! ```
//!
//! This re-exports the most frequently used domain types, the three math
//! operations, and the error types so that consumers don't need to import
//! from individual submodules.

// Re-export domain types
pub use crate::domain::{
    AmountPair, Decimals, Liquidity, PackedPrice, PoolSnapshot, PositionSnapshot, PricePair,
    RangeStatus, Tick, TokenMeta,
};

// Re-export math operations
pub use crate::math::{
    amounts_at_tick, compute_amounts, compute_prices, sqrt_ratio_at_tick, tick_from_packed_price,
};

// Re-export error types
pub use crate::error::{LensError, Result};
