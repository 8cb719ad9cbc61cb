//! Codec tests
//!
//! Tests for the format/parse boundary:
//! - Canonical rendering
//! - Grammar rejections with their error kinds
//! - Round trips across notations

pub mod tests_roundtrip;
