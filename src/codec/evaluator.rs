//! Evaluator: validated groups → integer
//!
//! One left-to-right pass over the groups the validator produced. A pair
//! already carries its difference, so the running total only ever grows and
//! the first group that pushes it past the limit is the one reported.

use super::validator::Group;
use crate::errors::NumeralError;

/// Sum `groups`, failing when the total passes `max_value`
pub fn evaluate(groups: &[Group<'_, '_>], max_value: u64) -> Result<u64, NumeralError> {
    let mut total: u64 = 0;

    for group in groups {
        total = total
            .checked_add(group.value())
            .filter(|total| *total <= max_value)
            .ok_or_else(|| too_large(max_value).at(group.range()))?;
    }

    Ok(total)
}

fn too_large(max_value: u64) -> NumeralError {
    NumeralError::out_of_range(format!(
        "the number is too large to be represented (maximum {max_value})"
    ))
}
