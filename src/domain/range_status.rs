//! Derived classification of a position relative to the current tick.

use core::fmt;

/// Where the pool's current tick sits relative to a position's range.
///
/// Derived on demand, never stored. The interval convention is half-open:
/// a position is [`InRange`](Self::InRange) when
/// `tick_lower <= current < tick_upper`.
///
/// A position that is out of range holds only one of the two tokens and
/// earns no fees until the price re-enters its range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeStatus {
    /// Current tick is below `tick_lower`: the position is entirely token0.
    Below,
    /// Current tick is inside `[tick_lower, tick_upper)`: mixed holdings.
    InRange,
    /// Current tick is at or above `tick_upper`: the position is entirely
    /// token1.
    Above,
}

impl RangeStatus {
    /// Returns `true` for the in-range variant.
    #[must_use]
    pub const fn is_in_range(&self) -> bool {
        matches!(self, Self::InRange)
    }
}

impl fmt::Display for RangeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Below => "below range",
            Self::InRange => "in range",
            Self::Above => "above range",
        };
        write!(f, "{s}")
    }
}
