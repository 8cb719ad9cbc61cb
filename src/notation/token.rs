//! Numeral tokens
//!
//! A [`Token`] pairs symbol text with its value. Its classification (exponent
//! and family) is derived from the value alone, so the same token type serves
//! base symbols like `X` and subtractive compounds like `IX`.

use std::cmp::Ordering;
use std::fmt;

use smol_str::SmolStr;

/// Role of a base symbol within its power-of-ten tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    /// Leading digit 1: I, X, C, M
    One,
    /// Leading digit 5: V, L, D
    Five,
}

/// An immutable (symbol text, value) pair
///
/// Invariant: `value == leading_digit * 10^exponent` and `value > 0`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    text: SmolStr,
    value: u64,
    exponent: u32,
    leading_digit: u8,
}

impl Token {
    /// Create a token. `value` must be non-zero.
    pub fn new(text: impl Into<SmolStr>, value: u64) -> Self {
        debug_assert!(value > 0, "token value must be positive");
        let exponent = value.checked_ilog10().unwrap_or(0);
        let leading_digit = (value / 10u64.pow(exponent)) as u8;
        Self {
            text: text.into(),
            value,
            exponent,
            leading_digit,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    /// Power-of-ten tier: I and V are tier 0, X and L tier 1, ...
    pub fn exponent(&self) -> u32 {
        self.exponent
    }

    /// Value divided by `10^exponent`: 1 or 5 for base symbols, 4 or 9 for compounds
    pub fn leading_digit(&self) -> u8 {
        self.leading_digit
    }

    /// Family of a base symbol, `None` for compounds
    pub fn family(&self) -> Option<Family> {
        match self.leading_digit {
            1 => Some(Family::One),
            5 => Some(Family::Five),
            _ => None,
        }
    }

    pub fn is_one(&self) -> bool {
        self.family() == Some(Family::One)
    }

    pub fn is_five(&self) -> bool {
        self.family() == Some(Family::Five)
    }

    pub fn is_compound(&self) -> bool {
        self.family().is_none()
    }

    /// Table order: value descending, then text ascending
    pub fn table_order(&self, other: &Token) -> Ordering {
        other
            .value
            .cmp(&self.value)
            .then_with(|| self.text.cmp(&other.text))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
