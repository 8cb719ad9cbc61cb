//! Error handling module
//!
//! This module provides classified errors for the numeral codec:
//! - Error kinds with stable codes for filtering and documentation
//! - Rich numeral errors pointing at the offending input
//! - Configuration errors for notation definitions

mod codes;
mod error;

pub use codes::{Category, ErrorKind};
pub use error::{NotationError, NumeralError};

/// Result of decoding numeral text
pub type ParseOutcome = Result<u64, NumeralError>;
