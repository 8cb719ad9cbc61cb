//! Notation fixtures shared across tests.

use once_cell::sync::Lazy;
use romana::NotationTable;
use romana::notation::NotationConfig;

pub const CLASSIC_SYMBOLS: [&str; 7] = ["I", "V", "X", "L", "C", "D", "M"];

/// Classic symbols escalated with a caret instead of an overline
pub static CARET: Lazy<NotationTable> = Lazy::new(|| {
    NotationTable::from_config(&NotationConfig::new("caret", CLASSIC_SYMBOLS).with_escalation("^"))
        .expect("caret notation should build")
});

/// Classic symbols with a zero symbol
pub static NULLA: Lazy<NotationTable> = Lazy::new(|| {
    NotationTable::from_config(&NotationConfig::new("nulla", CLASSIC_SYMBOLS).with_zero("N"))
        .expect("nulla notation should build")
});

/// Only the first tier: I, V, X
pub static SHORT: Lazy<NotationTable> = Lazy::new(|| {
    NotationTable::new(["I", "V", "X"]).expect("short notation should build")
});
