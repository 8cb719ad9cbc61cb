//! Built-in notations
//!
//! Each built-in table is constructed once on first access and shared
//! read-only afterwards. The registry keeps registration order, so
//! [`builtin_names`] always lists `vinculum` (the default) first.

use std::sync::LazyLock;

use indexmap::IndexMap;

use super::config::NotationConfig;
use super::table::NotationTable;
use crate::base::constants::{APOSTROPHUS, CLASSIC, CLASSIC_SYMBOLS, FRAMED, VINCULUM, VINCULUM_NOTATION};

/// Names of the built-in notations, in registration order
const BUILTINS: [&str; 4] = [VINCULUM_NOTATION, CLASSIC, APOSTROPHUS, FRAMED];

/// Definition of a built-in notation
pub fn builtin_config(name: &str) -> Option<NotationConfig> {
    let config = match name {
        VINCULUM_NOTATION => {
            NotationConfig::new(VINCULUM_NOTATION, CLASSIC_SYMBOLS).with_escalation(VINCULUM)
        }
        CLASSIC => NotationConfig::new(CLASSIC, CLASSIC_SYMBOLS),
        APOSTROPHUS => NotationConfig::new(
            APOSTROPHUS,
            [
                "I", "V", "X", "L", "C", "D", "ↀ", "ↁ", "ↂ", "ↇ", "ↈ", "IↃↃↃↃ", "CCCCIↃↃↃↃ",
            ],
        ),
        FRAMED => NotationConfig::new(
            FRAMED,
            [
                "I",
                "V",
                "X",
                "L",
                "C",
                "D",
                "ↀ",
                "ↁ",
                "ↂ",
                "ↇ",
                "|I\u{0305}|",
                "|V\u{0305}|",
                "|X\u{0305}|",
            ],
        ),
        _ => return None,
    };
    Some(config)
}

static REGISTRY: LazyLock<IndexMap<&'static str, NotationTable>> = LazyLock::new(|| {
    let mut registry = IndexMap::new();
    for name in BUILTINS {
        let Some(config) = builtin_config(name) else {
            continue;
        };
        match NotationTable::from_config(&config) {
            Ok(table) => {
                registry.insert(name, table);
            }
            Err(err) => tracing::warn!(notation = name, "skipping built-in notation: {err}"),
        }
    }
    registry
});

static EMPTY: LazyLock<NotationTable> = LazyLock::new(NotationTable::empty);

/// Look up a built-in notation by name
pub fn notation(name: &str) -> Option<&'static NotationTable> {
    REGISTRY.get(name)
}

/// Names of the built-in notations, default first
pub fn builtin_names() -> impl Iterator<Item = &'static str> {
    REGISTRY.keys().copied()
}

/// The notation used by `format` and `parse`: classic symbols with up to two
/// vinculum overlines, covering the whole default domain
pub fn default_notation() -> &'static NotationTable {
    notation(VINCULUM_NOTATION).unwrap_or(&EMPTY)
}

pub fn classic() -> &'static NotationTable {
    notation(CLASSIC).unwrap_or(&EMPTY)
}

pub fn apostrophus() -> &'static NotationTable {
    notation(APOSTROPHUS).unwrap_or(&EMPTY)
}

pub fn framed() -> &'static NotationTable {
    notation(FRAMED).unwrap_or(&EMPTY)
}
