//! Paired spot prices quoted in both directions.

use core::fmt;

use crate::error::LensError;

/// Human-readable spot prices for both orientations of a pool.
///
/// `price_of_token0` is the amount of token1 one unit of token0 buys;
/// `price_of_token1` is the reciprocal. Both are decimal-adjusted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricePair {
    price_of_token0: f64,
    price_of_token1: f64,
}

impl PricePair {
    /// Creates a new pair from two finite, strictly positive prices.
    ///
    /// # Errors
    ///
    /// Returns [`LensError::InvalidPrice`] if either price is non-positive,
    /// infinite, or NaN.
    pub fn new(price_of_token0: f64, price_of_token1: f64) -> crate::error::Result<Self> {
        if !price_of_token0.is_finite() || price_of_token0 <= 0.0 {
            return Err(LensError::InvalidPrice(
                "price of token0 must be finite and positive",
            ));
        }
        if !price_of_token1.is_finite() || price_of_token1 <= 0.0 {
            return Err(LensError::InvalidPrice(
                "price of token1 must be finite and positive",
            ));
        }
        Ok(Self {
            price_of_token0,
            price_of_token1,
        })
    }

    /// Returns the price of one token0 in units of token1.
    #[must_use]
    pub const fn price_of_token0(&self) -> f64 {
        self.price_of_token0
    }

    /// Returns the price of one token1 in units of token0.
    #[must_use]
    pub const fn price_of_token1(&self) -> f64 {
        self.price_of_token1
    }
}

impl fmt::Display for PricePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PricePair(token0={}, token1={})",
            self.price_of_token0, self.price_of_token1
        )
    }
}
