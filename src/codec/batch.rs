//! Batch conversion
//!
//! Encode and decode calls share no state, so a batch is fanned out over the
//! rayon thread pool. Results keep the order of the inputs.

use rayon::prelude::*;

use super::{encode, parse_with};
use crate::errors::{NumeralError, ParseOutcome};
use crate::notation::NotationTable;

/// Render every value with `table`
pub fn format_all(values: &[u64], table: &NotationTable) -> Vec<Result<String, NumeralError>> {
    values.par_iter().map(|value| encode(*value, table)).collect()
}

/// Decode every input with `table`
pub fn parse_all<S: AsRef<str> + Sync>(inputs: &[S], table: &NotationTable) -> Vec<ParseOutcome> {
    inputs
        .par_iter()
        .map(|input| parse_with(input.as_ref(), table))
        .collect()
}
