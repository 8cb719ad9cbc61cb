//! Notations: tokens, definitions and the tables derived from them
//!
//! ```text
//! NotationConfig (symbols, marker, zero, max)
//!     ↓
//! NotationTable  (base tokens + subtractive compounds, largest first)
//!     ↓
//! codec          (encode / tokenize / validate / evaluate)
//! ```

mod builtin;
mod config;
mod table;
mod token;

pub use builtin::{
    apostrophus, builtin_config, builtin_names, classic, default_notation, framed, notation,
};
pub use config::{Escalation, NotationConfig};
pub use table::NotationTable;
pub use token::{Family, Token};
