//! Error kinds for numeral diagnostics
//!
//! Every kind carries a stable code following the convention E{category}{number}:
//! - E00xx: No error (success placeholder)
//! - E01xx: Lexical errors (unrecognized characters, empty input)
//! - E02xx: Grammatical errors (recognized symbols combined illegally)
//! - E03xx: Range errors (value outside the notation's domain)

use std::fmt;

/// Classification of a numeral failure
///
/// `None` never appears inside a [`NumeralError`](super::NumeralError); it is
/// what [`ErrorKind::of`] reports for a successful outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ErrorKind {
    /// No error
    #[default]
    None,
    /// A symbol repeated more often than the grammar allows
    InvalidRepetition,
    /// A symbol subtracted from a symbol it may not precede
    InvalidSubtraction,
    /// Groups of symbols placed in an order the grammar forbids
    InvalidSequence,
    /// Value cannot be represented in (or decoded into) the domain
    OutOfRange,
    /// Empty input or characters that are not symbols of the notation
    MalformedInput,
}

/// Broad grouping of error kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Success,
    Lexical,
    Grammatical,
    Range,
}

impl ErrorKind {
    /// Kind reported for an outcome: `None` on success, the error's kind otherwise
    pub fn of<T>(outcome: &Result<T, super::NumeralError>) -> ErrorKind {
        match outcome {
            Ok(_) => ErrorKind::None,
            Err(err) => err.kind,
        }
    }

    /// Get the string representation of the code (e.g., "E0201")
    pub fn code(&self) -> &'static str {
        match self {
            Self::None => "E0000",
            Self::MalformedInput => "E0101",
            Self::InvalidRepetition => "E0201",
            Self::InvalidSubtraction => "E0202",
            Self::InvalidSequence => "E0203",
            Self::OutOfRange => "E0301",
        }
    }

    pub fn category(&self) -> Category {
        match self {
            Self::None => Category::Success,
            Self::MalformedInput => Category::Lexical,
            Self::InvalidRepetition | Self::InvalidSubtraction | Self::InvalidSequence => {
                Category::Grammatical
            }
            Self::OutOfRange => Category::Range,
        }
    }

    /// Get a short description of the error category
    pub fn category_description(&self) -> &'static str {
        match self.category() {
            Category::Success => "no error",
            Category::Lexical => "lexical error",
            Category::Grammatical => "grammatical error",
            Category::Range => "range error",
        }
    }

    /// Get the default message for this kind
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::None => "no error",
            Self::InvalidRepetition => "invalid repetition",
            Self::InvalidSubtraction => "invalid subtraction",
            Self::InvalidSequence => "invalid sequence",
            Self::OutOfRange => "value out of range",
            Self::MalformedInput => "malformed input",
        }
    }

    /// Check if this kind describes a grammar violation over recognized symbols
    pub fn is_grammatical(&self) -> bool {
        self.category() == Category::Grammatical
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
