//! Read-only view of a liquidity position's range and holdings.

use core::fmt;

use super::{Liquidity, RangeStatus, Tick, TokenMeta};
use crate::error::LensError;

/// A liquidity position over a validated half-open tick range.
///
/// Ranges classify with `[tick_lower, tick_upper)`: a current tick equal to
/// the lower bound is in range, one equal to the upper bound is above it.
///
/// # Examples
///
/// ```
/// use rangelens::domain::{Decimals, Liquidity, PositionSnapshot, Tick, TokenMeta};
///
/// let position = PositionSnapshot::new(
///     Tick::new(-600).expect("valid tick"),
///     Tick::new(600).expect("valid tick"),
///     Liquidity::new(1_000_000),
///     TokenMeta::new(Decimals::new(6).expect("valid decimals")),
///     TokenMeta::new(Decimals::new(18).expect("valid decimals")),
/// )
/// .expect("valid position");
/// assert!(position.is_in_range(Tick::ZERO));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionSnapshot {
    tick_lower: Tick,
    tick_upper: Tick,
    liquidity: Liquidity,
    token0: TokenMeta,
    token1: TokenMeta,
}

impl PositionSnapshot {
    /// Creates a new position with a validated tick range.
    ///
    /// # Errors
    ///
    /// Returns [`LensError::InvalidTickRange`] unless `tick_lower < tick_upper`.
    pub const fn new(
        tick_lower: Tick,
        tick_upper: Tick,
        liquidity: Liquidity,
        token0: TokenMeta,
        token1: TokenMeta,
    ) -> crate::error::Result<Self> {
        if tick_lower.get() >= tick_upper.get() {
            return Err(LensError::InvalidTickRange(
                "lower tick must be less than upper tick",
            ));
        }
        Ok(Self {
            tick_lower,
            tick_upper,
            liquidity,
            token0,
            token1,
        })
    }

    /// Returns the inclusive lower bound of the range.
    #[must_use]
    pub const fn tick_lower(&self) -> Tick {
        self.tick_lower
    }

    /// Returns the exclusive upper bound of the range.
    #[must_use]
    pub const fn tick_upper(&self) -> Tick {
        self.tick_upper
    }

    /// Returns the position's liquidity.
    #[must_use]
    pub const fn liquidity(&self) -> Liquidity {
        self.liquidity
    }

    /// Returns metadata for token0.
    #[must_use]
    pub const fn token0(&self) -> TokenMeta {
        self.token0
    }

    /// Returns metadata for token1.
    #[must_use]
    pub const fn token1(&self) -> TokenMeta {
        self.token1
    }

    /// Returns the range width in ticks. Always positive.
    #[must_use]
    pub const fn width(&self) -> i32 {
        self.tick_upper.get() - self.tick_lower.get()
    }

    /// Classifies `current` against the half-open range.
    #[must_use]
    pub const fn range_status(&self, current: Tick) -> RangeStatus {
        if current.get() < self.tick_lower.get() {
            RangeStatus::Below
        } else if current.get() >= self.tick_upper.get() {
            RangeStatus::Above
        } else {
            RangeStatus::InRange
        }
    }

    /// Returns `true` when `current` falls within `[tick_lower, tick_upper)`.
    #[must_use]
    pub const fn is_in_range(&self, current: Tick) -> bool {
        self.range_status(current).is_in_range()
    }
}

impl fmt::Display for PositionSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PositionSnapshot([{}, {}), liquidity={})",
            self.tick_lower, self.tick_upper, self.liquidity
        )
    }
}
