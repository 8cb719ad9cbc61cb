//! Numeral and notation error types
//!
//! [`NumeralError`] is returned by every encode and decode operation and carries:
//! - A classified [`ErrorKind`]
//! - A human-readable message
//! - The byte range of the input it refers to
//! - An optional hint for fixing the input

use text_size::{TextRange, TextSize};
use thiserror::Error;

use super::codes::ErrorKind;

/// A failed conversion between an integer and numeral text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct NumeralError {
    /// Classified error kind
    pub kind: ErrorKind,
    /// Human-readable error message
    pub message: String,
    /// Byte range of the input the error refers to
    pub range: TextRange,
    /// Optional suggestion for fixing the input
    pub hint: Option<String>,
}

impl NumeralError {
    /// Create a new error with an empty range at offset 0
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            range: TextRange::empty(TextSize::new(0)),
            hint: None,
        }
    }

    /// Create an error carrying the kind's default message
    pub fn from_kind(kind: ErrorKind) -> Self {
        Self::new(kind, kind.default_message())
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MalformedInput, message)
    }

    pub fn out_of_range(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::OutOfRange, message)
    }

    /// Point the error at a range of the input
    pub fn at(mut self, range: TextRange) -> Self {
        self.range = range;
        self
    }

    /// Add a hint to this error
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn has_hint(&self) -> bool {
        self.hint.is_some()
    }

    /// Format the error for display, including the hint when present
    pub fn format(&self) -> String {
        let mut result = format!("{}: {}", self.kind, self.message);
        if let Some(hint) = &self.hint {
            result.push_str(&format!("\n  hint: {}", hint));
        }
        result
    }
}

/// Errors raised while building a notation table from its definition
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotationError {
    /// A base symbol was the empty string.
    #[error("symbol at index {index} is empty")]
    EmptySymbol { index: usize },

    /// The same symbol text was listed twice.
    #[error("symbol '{0}' is defined more than once")]
    DuplicateSymbol(String),

    /// The escalation marker was the empty string.
    #[error("escalation marker is empty")]
    EmptyMarker,

    /// The zero symbol collides with a base symbol or is empty.
    #[error("invalid zero symbol '{0}'")]
    InvalidZero(String),

    /// A symbol value does not fit into the integer domain.
    #[error("value of symbol '{0}' overflows")]
    ValueOverflow(String),

    /// A notation definition could not be read.
    #[error("invalid notation definition: {0}")]
    Definition(String),
}
