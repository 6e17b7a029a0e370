//! Discrete price point on the concentrated-liquidity price grid.

use core::fmt;

use crate::error::LensError;

/// Minimum valid tick index (Uniswap v3 standard).
const MIN_TICK: i32 = -887_272;

/// Maximum valid tick index (Uniswap v3 standard).
const MAX_TICK: i32 = 887_272;

/// A discrete price point in the concentrated liquidity model.
///
/// Follows the Uniswap v3 convention where price increases exponentially
/// with the tick index: `price = 1.0001^tick`. Valid tick indices range
/// from [`MIN`](Self::MIN) (`-887272`) to [`MAX`](Self::MAX) (`887272`).
///
/// Ticks are only usable in multiples of a pool's tick spacing;
/// [`nearest_usable`](Self::nearest_usable) rounds an arbitrary tick onto
/// that grid.
///
/// # Examples
///
/// ```
/// use rangelens::domain::Tick;
///
/// let tick = Tick::new(100);
/// assert!(tick.is_ok());
/// assert_eq!(tick.unwrap_or(Tick::ZERO).get(), 100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tick(i32);

impl Tick {
    /// Minimum valid tick (`-887272`).
    pub const MIN: Self = Self(MIN_TICK);

    /// Maximum valid tick (`887272`).
    pub const MAX: Self = Self(MAX_TICK);

    /// Neutral tick where `price = 1.0001^0 = 1.0`.
    pub const ZERO: Self = Self(0);

    /// Creates a new `Tick` with range validation.
    ///
    /// # Errors
    ///
    /// Returns [`LensError::InvalidTick`] if `value` is outside
    /// the range `[-887272, 887272]`.
    pub const fn new(value: i32) -> crate::error::Result<Self> {
        if value < MIN_TICK || value > MAX_TICK {
            return Err(LensError::InvalidTick(
                "tick out of range [-887272, 887272]",
            ));
        }
        Ok(Self(value))
    }

    /// Returns the underlying `i32` tick index.
    #[must_use]
    pub const fn get(&self) -> i32 {
        self.0
    }

    /// Checked addition of a delta to this tick.
    ///
    /// Returns `None` if the result would be outside the valid tick range.
    #[must_use]
    pub const fn checked_add(&self, delta: i32) -> Option<Self> {
        match self.0.checked_add(delta) {
            Some(v) if v >= MIN_TICK && v <= MAX_TICK => Some(Self(v)),
            _ => None,
        }
    }

    /// Checked subtraction of a delta from this tick.
    ///
    /// Returns `None` if the result would be outside the valid tick range.
    #[must_use]
    pub const fn checked_sub(&self, delta: i32) -> Option<Self> {
        match self.0.checked_sub(delta) {
            Some(v) if v >= MIN_TICK && v <= MAX_TICK => Some(Self(v)),
            _ => None,
        }
    }

    /// Returns `true` if the given tick spacing is valid (non-zero).
    ///
    /// A spacing of zero would result in an infinite number of ticks and
    /// is therefore invalid.
    #[must_use]
    pub const fn spacing_is_valid(spacing: u16) -> bool {
        spacing > 0
    }

    /// Returns `true` if this tick lies on the grid defined by `spacing`.
    #[must_use]
    pub const fn is_aligned(&self, spacing: u16) -> bool {
        spacing > 0 && self.0 % (spacing as i32) == 0
    }

    /// Rounds this tick to the nearest multiple of `spacing`, clamped so
    /// the result stays inside the valid tick range.
    ///
    /// Ties round towards positive infinity, matching the Uniswap SDK's
    /// `nearestUsableTick` behaviour. If the nearest multiple falls
    /// outside `[MIN, MAX]`, the adjacent in-range multiple is returned
    /// instead.
    ///
    /// # Errors
    ///
    /// Returns [`LensError::InvalidTickSpacing`] if `spacing` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use rangelens::domain::Tick;
    ///
    /// let tick = Tick::new(-5).unwrap_or(Tick::ZERO);
    /// let usable = tick.nearest_usable(10).expect("non-zero spacing");
    /// assert_eq!(usable.get(), 0);
    /// ```
    pub const fn nearest_usable(&self, spacing: u16) -> crate::error::Result<Self> {
        if spacing == 0 {
            return Err(LensError::InvalidTickSpacing(
                "tick spacing must be non-zero",
            ));
        }
        let spacing = spacing as i32;

        let quotient = self.0.div_euclid(spacing);
        let remainder = self.0.rem_euclid(spacing);
        let mut rounded = if remainder * 2 >= spacing {
            (quotient + 1) * spacing
        } else {
            quotient * spacing
        };

        if rounded < MIN_TICK {
            rounded += spacing;
        } else if rounded > MAX_TICK {
            rounded -= spacing;
        }
        Ok(Self(rounded))
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tick({})", self.0)
    }
}
