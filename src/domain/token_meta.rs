//! Per-token metadata required by the math engine.

use core::fmt;

use super::Decimals;

/// The facts about one side of the pair that the math needs.
///
/// Addresses, symbols, and names belong to the contract-read layer; the
/// core only cares about the decimal scale used to convert raw integer
/// amounts to human-readable ones.
///
/// # Examples
///
/// ```
/// use rangelens::domain::{Decimals, TokenMeta};
///
/// let usdc = TokenMeta::new(Decimals::new(6).expect("valid decimals"));
/// assert_eq!(usdc.decimals().get(), 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TokenMeta {
    decimals: Decimals,
}

impl TokenMeta {
    /// Creates metadata for one token of the pair.
    #[must_use]
    pub const fn new(decimals: Decimals) -> Self {
        Self { decimals }
    }

    /// Returns the token's decimal scale.
    #[must_use]
    pub const fn decimals(&self) -> Decimals {
        self.decimals
    }
}

impl fmt::Display for TokenMeta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TokenMeta(decimals={})", self.decimals.get())
    }
}
