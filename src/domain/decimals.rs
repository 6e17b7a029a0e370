//! Token decimal places.

use crate::error::LensError;

/// Maximum allowed decimal places (EVM standard).
const MAX_DECIMALS: u8 = 18;

/// Represents the number of decimal places for a token amount.
///
/// Valid range is `0..=18`, matching the common blockchain standard.
/// Construction is validated: values above 18 are rejected.
///
/// # Examples
///
/// ```
/// use rangelens::domain::Decimals;
///
/// let d = Decimals::new(6).expect("6 is valid");
/// assert_eq!(d.get(), 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Decimals(u8);

impl Default for Decimals {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Decimals {
    /// Zero decimal places.
    pub const ZERO: Self = Self(0);

    /// Maximum standard decimal places (18).
    pub const MAX: Self = Self(MAX_DECIMALS);

    /// Creates a new `Decimals` value after validating the range.
    ///
    /// # Errors
    ///
    /// Returns [`LensError::InvalidPrecision`] if `value` exceeds 18.
    pub const fn new(value: u8) -> Result<Self, LensError> {
        if value > MAX_DECIMALS {
            return Err(LensError::InvalidPrecision("decimals must be 0..=18"));
        }
        Ok(Self(value))
    }

    /// Returns the raw decimal count.
    #[must_use]
    pub const fn get(&self) -> u8 {
        self.0
    }

    /// Returns `10^decimals` as `f64`.
    ///
    /// Exact for the whole valid range: every power of ten through `10^22`
    /// is exactly representable in `f64`.
    #[must_use]
    pub fn factor_f64(&self) -> f64 {
        10f64.powi(i32::from(self.0))
    }

    /// Converts a raw smallest-unit amount to a human-readable amount.
    ///
    /// For example, with `decimals = 6`, an input of `1_500_000.0` yields
    /// `1.5`.
    #[must_use]
    pub fn scale_down_f64(&self, raw: f64) -> f64 {
        raw / self.factor_f64()
    }
}
