//! Notation tables
//!
//! A [`NotationTable`] derives every token a notation uses from its
//! [`NotationConfig`]:
//!
//! 1. Base symbols get positional values: 1, ×5, ×2, ×5, ×2, ...
//! 2. With an escalation marker the whole cycle repeats once per round, the
//!    marker appended `round` times and the value multiplied by `1000^round`.
//!    An escalated symbol whose value already exists is skipped, so `M`
//!    (1000) wins over `I̅` (1000).
//! 3. Every base symbol with a 1-family symbol one fifth or one tenth of its
//!    value below it gets a subtractive compound (`IV`, `IX`, `XL`, ...).
//!
//! Both token lists are sorted by value descending, ties broken by text.

use rustc_hash::{FxHashMap, FxHashSet};
use smol_str::SmolStr;

use super::config::{Escalation, NotationConfig};
use super::token::{Family, Token};
use crate::base::constants::{DOMAIN_MAX, ESCALATION_FACTOR, MAX_REPETITION};
use crate::errors::NotationError;

/// Immutable symbol/value table for one notation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotationTable {
    name: SmolStr,
    base_tokens: Vec<Token>,
    all_tokens: Vec<Token>,
    zero: Option<SmolStr>,
    max_value: u64,
}

impl NotationTable {
    /// Build a table from base symbols (smallest first) without escalation
    pub fn new<S: Into<SmolStr>>(
        symbols: impl IntoIterator<Item = S>,
    ) -> Result<Self, NotationError> {
        Self::from_config(&NotationConfig::new("custom", symbols))
    }

    /// Build a table whose base cycle is repeated with `marker` appended
    pub fn with_escalation<S: Into<SmolStr>>(
        symbols: impl IntoIterator<Item = S>,
        marker: impl Into<SmolStr>,
    ) -> Result<Self, NotationError> {
        Self::from_config(&NotationConfig::new("custom", symbols).with_escalation(Escalation::new(marker)))
    }

    /// A table without symbols; every encode and decode against it fails
    pub fn empty() -> Self {
        Self {
            name: SmolStr::new_static("empty"),
            base_tokens: Vec::new(),
            all_tokens: Vec::new(),
            zero: None,
            max_value: DOMAIN_MAX,
        }
    }

    pub fn from_config(config: &NotationConfig) -> Result<Self, NotationError> {
        validate_symbols(&config.symbols)?;

        let mut table = Self {
            name: config.name.clone(),
            base_tokens: Vec::new(),
            all_tokens: Vec::new(),
            zero: None,
            max_value: config.max_value,
        };

        if config.symbols.is_empty() {
            table.zero = validate_zero(config.zero.as_ref(), &[])?;
            return Ok(table);
        }

        let base = base_tokens(config)?;
        let compounds = subtractive_tokens(&base)?;
        table.zero = validate_zero(config.zero.as_ref(), &base)?;

        table.all_tokens = base.iter().cloned().chain(compounds).collect();
        table.all_tokens.sort_by(Token::table_order);
        table.base_tokens = base;
        table.base_tokens.sort_by(Token::table_order);

        tracing::debug!(
            notation = %table.name,
            base = table.base_tokens.len(),
            total = table.all_tokens.len(),
            "built notation table"
        );

        Ok(table)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Primitive symbols only, largest first
    pub fn base_tokens(&self) -> &[Token] {
        &self.base_tokens
    }

    /// Primitive symbols and subtractive compounds, largest first
    pub fn all_tokens(&self) -> &[Token] {
        &self.all_tokens
    }

    pub fn zero(&self) -> Option<&str> {
        self.zero.as_deref()
    }

    pub fn max_value(&self) -> u64 {
        self.max_value
    }

    pub fn is_empty(&self) -> bool {
        self.base_tokens.is_empty()
    }

    /// Largest base symbol
    pub fn largest(&self) -> Option<&Token> {
        self.base_tokens.first()
    }

    pub fn token(&self, text: &str) -> Option<&Token> {
        self.all_tokens.iter().find(|token| token.text() == text)
    }

    /// Largest integer the table can render, capped at `max_value`
    ///
    /// A 1-family top symbol may appear three times before everything below
    /// it (`MMMCMXCIX`). A 5-family top symbol appears once and is followed by
    /// at most three of the 1-family symbol below it (`VIII`, `LXXXIX`).
    pub fn upper_bound(&self) -> u64 {
        let Some(largest) = self.largest() else {
            return 0;
        };
        let bound = match largest.family() {
            Some(Family::Five) => largest.value().saturating_mul(9) / 5,
            _ => largest.value().saturating_mul(MAX_REPETITION + 1),
        };
        bound.saturating_sub(1).min(self.max_value)
    }
}

fn validate_symbols(symbols: &[SmolStr]) -> Result<(), NotationError> {
    let mut seen = FxHashSet::default();
    for (index, symbol) in symbols.iter().enumerate() {
        if symbol.is_empty() {
            return Err(NotationError::EmptySymbol { index });
        }
        if !seen.insert(symbol.as_str()) {
            return Err(NotationError::DuplicateSymbol(symbol.to_string()));
        }
    }
    Ok(())
}

fn validate_zero(zero: Option<&SmolStr>, base: &[Token]) -> Result<Option<SmolStr>, NotationError> {
    match zero {
        Some(zero) if zero.trim().is_empty() || base.iter().any(|t| t.text() == zero.as_str()) => {
            Err(NotationError::InvalidZero(zero.to_string()))
        }
        other => Ok(other.cloned()),
    }
}

/// Append `marker` to `symbol` `count` times
fn escalate(symbol: &str, marker: Option<&str>, count: u8) -> SmolStr {
    match marker {
        Some(marker) if count > 0 => {
            let mut text = String::from(symbol);
            for _ in 0..count {
                text.push_str(marker);
            }
            SmolStr::from(text)
        }
        _ => SmolStr::from(symbol),
    }
}

/// Step 1 and 2: positional values, repeated per escalation round
fn base_tokens(config: &NotationConfig) -> Result<Vec<Token>, NotationError> {
    let (marker, rounds) = match &config.escalation {
        Some(escalation) if escalation.marker.is_empty() => return Err(NotationError::EmptyMarker),
        Some(escalation) => (Some(escalation.marker.as_str()), escalation.rounds),
        None => (None, 0),
    };

    let mut tokens: Vec<Token> = Vec::new();
    let mut values: FxHashSet<u64> = FxHashSet::default();
    let mut texts: FxHashSet<SmolStr> = FxHashSet::default();

    for round in 0..=rounds {
        let scale = ESCALATION_FACTOR.checked_pow(u32::from(round));
        let mut value: u64 = 1;

        for (i, symbol) in config.symbols.iter().enumerate() {
            let text = escalate(symbol, marker, round);
            let scaled = scale
                .and_then(|scale| value.checked_mul(scale))
                .ok_or_else(|| NotationError::ValueOverflow(text.to_string()))?;

            if values.contains(&scaled) {
                tracing::trace!(symbol = %text, value = scaled, "escalated symbol shadowed by existing value");
            } else {
                if !texts.insert(text.clone()) {
                    return Err(NotationError::DuplicateSymbol(text.to_string()));
                }
                values.insert(scaled);
                tokens.push(Token::new(text, scaled));
            }

            if i + 1 < config.symbols.len() {
                let factor = if i % 2 == 0 { 5 } else { 2 };
                value = value
                    .checked_mul(factor)
                    .ok_or_else(|| NotationError::ValueOverflow(symbol.to_string()))?;
            }
        }
    }

    Ok(tokens)
}

/// Step 3: one compound per base symbol that has a valid subtrahend below it
fn subtractive_tokens(base: &[Token]) -> Result<Vec<Token>, NotationError> {
    let by_value: FxHashMap<u64, &Token> = base.iter().map(|t| (t.value(), t)).collect();
    let texts: FxHashSet<&str> = base.iter().map(Token::text).collect();

    let mut compounds = Vec::new();
    for major in base {
        let minor_value = match major.family() {
            Some(Family::Five) => major.value() / 5,
            Some(Family::One) if major.exponent() > 0 => major.value() / 10,
            _ => continue,
        };

        let Some(minor) = by_value.get(&minor_value).filter(|t| t.is_one()) else {
            continue;
        };

        let text = format!("{}{}", minor.text(), major.text());
        if texts.contains(text.as_str()) {
            return Err(NotationError::DuplicateSymbol(text));
        }
        compounds.push(Token::new(text, major.value() - minor.value()));
    }

    Ok(compounds)
}
