//! Paired token holdings reported in display units.

use core::fmt;

use crate::error::LensError;

/// Token amounts backing a position, decimal-adjusted to display units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmountPair {
    amount0: f64,
    amount1: f64,
}

impl AmountPair {
    /// Both sides empty.
    pub const ZERO: Self = Self {
        amount0: 0.0,
        amount1: 0.0,
    };

    /// Creates a new pair from two finite, non-negative amounts.
    ///
    /// # Errors
    ///
    /// Returns [`LensError::InvalidAmount`] if either amount is negative,
    /// infinite, or NaN.
    pub fn new(amount0: f64, amount1: f64) -> crate::error::Result<Self> {
        if !amount0.is_finite() || amount0 < 0.0 {
            return Err(LensError::InvalidAmount(
                "amount of token0 must be finite and non-negative",
            ));
        }
        if !amount1.is_finite() || amount1 < 0.0 {
            return Err(LensError::InvalidAmount(
                "amount of token1 must be finite and non-negative",
            ));
        }
        Ok(Self { amount0, amount1 })
    }

    /// Returns the token0 amount.
    #[must_use]
    pub const fn amount0(&self) -> f64 {
        self.amount0
    }

    /// Returns the token1 amount.
    #[must_use]
    pub const fn amount1(&self) -> f64 {
        self.amount1
    }

    /// Returns `true` when both sides are zero.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.amount0 == 0.0 && self.amount1 == 0.0
    }
}

impl fmt::Display for AmountPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AmountPair({}, {})", self.amount0, self.amount1)
    }
}
