//! Validated numeral values
//!
//! [`RomanNumeral`] is an integer known to lie in the default domain
//! `1..=2^31-1`. It renders through the default notation with `Display`
//! and decodes with `FromStr`.

use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

use crate::base::constants::{DOMAIN_MAX, DOMAIN_MIN};
use crate::codec::{encode, parse_with};
use crate::errors::NumeralError;
use crate::notation::{NotationTable, default_notation};

/// An integer in `1..=2_147_483_647`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RomanNumeral(NonZeroU32);

impl RomanNumeral {
    pub const MIN: RomanNumeral = RomanNumeral(NonZeroU32::MIN);
    pub const MAX: RomanNumeral = match NonZeroU32::new(DOMAIN_MAX as u32) {
        Some(max) => RomanNumeral(max),
        None => RomanNumeral(NonZeroU32::MIN),
    };

    pub fn new(value: u64) -> Result<Self, NumeralError> {
        if !(DOMAIN_MIN..=DOMAIN_MAX).contains(&value) {
            return Err(NumeralError::out_of_range(format!(
                "value {value} must be between {DOMAIN_MIN} and {DOMAIN_MAX}"
            )));
        }
        u32::try_from(value)
            .ok()
            .and_then(NonZeroU32::new)
            .map(RomanNumeral)
            .ok_or_else(|| NumeralError::out_of_range(format!("value {value} is out of range")))
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }

    /// Render with `table`
    pub fn to_numeral(self, table: &NotationTable) -> Result<String, NumeralError> {
        encode(u64::from(self.get()), table)
    }

    /// Decode `text` with `table`
    pub fn parse_with(text: &str, table: &NotationTable) -> Result<Self, NumeralError> {
        Self::new(parse_with(text, table)?)
    }
}

impl TryFrom<u32> for RomanNumeral {
    type Error = NumeralError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(u64::from(value))
    }
}

impl From<RomanNumeral> for u32 {
    fn from(numeral: RomanNumeral) -> Self {
        numeral.get()
    }
}

impl FromStr for RomanNumeral {
    type Err = NumeralError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_with(s, default_notation())
    }
}

impl fmt::Display for RomanNumeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self.to_numeral(default_notation()).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}
