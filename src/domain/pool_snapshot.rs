//! Read-only view of on-chain pool state at one block height.

use core::fmt;

use super::{Liquidity, PackedPrice, Tick};
use crate::error::LensError;

/// A snapshot of the pool fields the math engine consumes.
///
/// Created fresh per query from a chain read and discarded after use;
/// nothing in the crate retains or mutates it. The reported `tick` is the
/// value the pool record carried at snapshot time and may lag the packed
/// price by a block — callers wanting the live tick should derive it with
/// [`tick_from_packed_price`](crate::math::tick_from_packed_price).
///
/// # Examples
///
/// ```
/// use rangelens::domain::{Liquidity, PackedPrice, PoolSnapshot, Tick};
///
/// let snapshot = PoolSnapshot::new(
///     PackedPrice::one(),
///     Tick::ZERO,
///     60,
///     Liquidity::new(1_000_000),
/// )
/// .expect("valid snapshot");
/// assert_eq!(snapshot.tick_spacing(), 60);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolSnapshot {
    packed_price: PackedPrice,
    tick: Tick,
    tick_spacing: u16,
    liquidity: Liquidity,
}

impl PoolSnapshot {
    /// Creates a new snapshot with validated tick spacing.
    ///
    /// # Errors
    ///
    /// Returns [`LensError::InvalidTickSpacing`] if `tick_spacing` is zero.
    pub fn new(
        packed_price: PackedPrice,
        tick: Tick,
        tick_spacing: u16,
        liquidity: Liquidity,
    ) -> crate::error::Result<Self> {
        if !Tick::spacing_is_valid(tick_spacing) {
            return Err(LensError::InvalidTickSpacing(
                "pool tick spacing must be non-zero",
            ));
        }
        Ok(Self {
            packed_price,
            tick,
            tick_spacing,
            liquidity,
        })
    }

    /// Returns the pool's packed square-root price.
    #[must_use]
    pub const fn packed_price(&self) -> &PackedPrice {
        &self.packed_price
    }

    /// Returns the tick the pool record reported at snapshot time.
    #[must_use]
    pub const fn tick(&self) -> Tick {
        self.tick
    }

    /// Returns the pool's tick spacing.
    #[must_use]
    pub const fn tick_spacing(&self) -> u16 {
        self.tick_spacing
    }

    /// Returns the pool's active liquidity.
    #[must_use]
    pub const fn liquidity(&self) -> Liquidity {
        self.liquidity
    }

    /// Rounds the reported tick onto this pool's spacing grid.
    ///
    /// # Errors
    ///
    /// Never fails for a validated snapshot; the signature matches
    /// [`Tick::nearest_usable`].
    pub fn nearest_usable_tick(&self) -> crate::error::Result<Tick> {
        self.tick.nearest_usable(self.tick_spacing)
    }
}

impl fmt::Display for PoolSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PoolSnapshot(price={}, tick={}, spacing={}, liquidity={})",
            self.packed_price, self.tick, self.tick_spacing, self.liquidity
        )
    }
}
