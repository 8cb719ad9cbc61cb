//! Notation definitions
//!
//! A [`NotationConfig`] is the minimal description a [`NotationTable`] is
//! derived from: the base symbols smallest first, an optional escalation
//! marker, an optional zero symbol and the largest value the domain accepts.
//!
//! [`NotationTable`]: super::NotationTable

use smol_str::SmolStr;

use crate::base::constants::{DEFAULT_ESCALATION_ROUNDS, DOMAIN_MAX};
#[cfg(feature = "serde")]
use crate::errors::NotationError;

/// Repeatable marker promoting the base cycle by 1000 per application
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Escalation {
    /// Text appended to a symbol once per round, e.g. U+0305
    pub marker: SmolStr,
    /// Number of escalated cycles generated after the base cycle
    #[cfg_attr(feature = "serde", serde(default = "default_rounds"))]
    pub rounds: u8,
}

impl Escalation {
    pub fn new(marker: impl Into<SmolStr>) -> Self {
        Self {
            marker: marker.into(),
            rounds: DEFAULT_ESCALATION_ROUNDS,
        }
    }

    pub fn with_rounds(mut self, rounds: u8) -> Self {
        self.rounds = rounds;
        self
    }
}

impl From<&str> for Escalation {
    fn from(marker: &str) -> Self {
        Self::new(marker)
    }
}

impl From<SmolStr> for Escalation {
    fn from(marker: SmolStr) -> Self {
        Self::new(marker)
    }
}

/// Definition of one numeral system variant
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NotationConfig {
    /// Display name, also the registry key for built-in notations
    pub name: SmolStr,
    /// Base symbols from smallest to largest, alternating 1- and 5-family
    pub symbols: Vec<SmolStr>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub escalation: Option<Escalation>,
    /// Symbol rendered for 0, e.g. "N" (nulla)
    #[cfg_attr(feature = "serde", serde(default))]
    pub zero: Option<SmolStr>,
    /// Largest integer accepted by format and produced by parse
    #[cfg_attr(feature = "serde", serde(default = "default_max_value"))]
    pub max_value: u64,
}

impl NotationConfig {
    pub fn new<S: Into<SmolStr>>(
        name: impl Into<SmolStr>,
        symbols: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            name: name.into(),
            symbols: symbols.into_iter().map(Into::into).collect(),
            escalation: None,
            zero: None,
            max_value: DOMAIN_MAX,
        }
    }

    /// Generate higher cycles by appending a marker; a bare marker gets
    /// `DEFAULT_ESCALATION_ROUNDS` rounds
    pub fn with_escalation(mut self, escalation: impl Into<Escalation>) -> Self {
        self.escalation = Some(escalation.into());
        self
    }

    pub fn with_zero(mut self, zero: impl Into<SmolStr>) -> Self {
        self.zero = Some(zero.into());
        self
    }

    pub fn with_max_value(mut self, max_value: u64) -> Self {
        self.max_value = max_value;
        self
    }

    /// Read a definition from JSON
    ///
    /// ```ignore
    /// let config = NotationConfig::from_json(r#"{"name": "short", "symbols": ["I", "V", "X"]}"#)?;
    /// ```
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, NotationError> {
        serde_json::from_str(json).map_err(|e| NotationError::Definition(e.to_string()))
    }

    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> Result<String, NotationError> {
        serde_json::to_string_pretty(self).map_err(|e| NotationError::Definition(e.to_string()))
    }
}

#[cfg(feature = "serde")]
fn default_rounds() -> u8 {
    DEFAULT_ESCALATION_ROUNDS
}

#[cfg(feature = "serde")]
fn default_max_value() -> u64 {
    DOMAIN_MAX
}
