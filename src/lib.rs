//! # romana-base
//!
//! Core library for converting between integers and Roman numerals, from the
//! classic seven symbols up to notations extended with escalation markers.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! numeral   → RomanNumeral value type
//!   ↓
//! codec     → Encoder, tokenizer, validator, evaluator, batch helpers
//!   ↓
//! notation  → Tokens, notation definitions, tables, built-in notations
//!   ↓
//! errors    → ErrorKind codes, NumeralError, NotationError
//!   ↓
//! base      → Primitives (TextRange, domain constants)
//! ```
//!
//! ## Usage
//!
//! ```
//! use romana::{ErrorKind, format, parse};
//!
//! assert_eq!(format(1994).unwrap(), "MCMXCIV");
//! assert_eq!(parse("MMXIV").unwrap(), 2014);
//! assert_eq!(parse("IIII").unwrap_err().kind, ErrorKind::InvalidRepetition);
//! ```

// ============================================================================
// MODULES (dependency order: base → errors → notation → codec → numeral)
// ============================================================================

/// Foundation types: TextRange, domain constants
pub mod base;

/// Error kinds, numeral errors and notation errors
pub mod errors;

/// Tokens, notation definitions and tables
pub mod notation;

/// Encoding and decoding pipeline
pub mod codec;

/// Validated numeral value type
pub mod numeral;

// Re-export the codec boundary
pub use codec::{format, format_all, format_with, parse, parse_all, parse_with};
pub use errors::{ErrorKind, NotationError, NumeralError, ParseOutcome};
pub use notation::{NotationConfig, NotationTable, Token, default_notation, notation};
pub use numeral::RomanNumeral;

// Re-export foundation types
pub use base::{TextRange, TextSize};
