//! Notation tests
//!
//! Table construction from definitions and the built-in registry.

pub mod tests_builtin;
pub mod tests_table;
