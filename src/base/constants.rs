//! Domain constants shared by the notation tables and the codec.

/// Largest integer the default domain accepts (2^31 - 1).
pub const DOMAIN_MAX: u64 = i32::MAX as u64;

/// Smallest non-zero integer a numeral can express.
pub const DOMAIN_MIN: u64 = 1;

/// How often a 1-family symbol may appear in a row.
pub const MAX_REPETITION: u64 = 3;

/// Factor one application of an escalation marker multiplies a symbol by.
pub const ESCALATION_FACTOR: u64 = 1000;

/// Escalation rounds applied when a notation does not say otherwise.
pub const DEFAULT_ESCALATION_ROUNDS: u8 = 2;

/// Combining overline (vinculum), U+0305.
pub const VINCULUM: &str = "\u{0305}";

/// The seven symbols of the classic notation, smallest first.
pub const CLASSIC_SYMBOLS: [&str; 7] = ["I", "V", "X", "L", "C", "D", "M"];

// Built-in notation names
pub const CLASSIC: &str = "classic";
pub const VINCULUM_NOTATION: &str = "vinculum";
pub const APOSTROPHUS: &str = "apostrophus";
pub const FRAMED: &str = "framed";
