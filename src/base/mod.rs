//! Foundation types for the numeral codec.
//!
//! This module provides:
//! - [`TextRange`], [`TextSize`] - Byte positions in numeral text
//! - Domain constants (integer bounds, repetition ceiling, escalation factor)
//!
//! This module has NO dependencies on other romana modules.

pub mod constants;

pub use text_size::{TextRange, TextSize};

// Re-export text-size for convenience
pub use text_size;
