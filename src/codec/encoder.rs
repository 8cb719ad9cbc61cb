//! Greedy encoder: integer → numeral text
//!
//! Walks the table's tokens largest first and takes as many of each as fit.
//! Values above the table's upper bound are rejected up front; below it the
//! greedy walk never repeats a symbol more than the grammar allows.

use crate::errors::NumeralError;
use crate::notation::NotationTable;

/// Render `value` with the tokens of `table`
pub fn encode(value: u64, table: &NotationTable) -> Result<String, NumeralError> {
    if value == 0 {
        return match table.zero() {
            Some(zero) => Ok(zero.to_string()),
            None => Err(NumeralError::out_of_range(format!(
                "0 can't be represented in the {} notation",
                table.name()
            ))
            .with_hint("this notation defines no zero symbol")),
        };
    }

    if value > table.max_value() {
        return Err(NumeralError::out_of_range(format!(
            "{value} exceeds the maximum of {}",
            table.max_value()
        )));
    }

    let upper_bound = table.upper_bound();
    if value > upper_bound {
        return Err(NumeralError::out_of_range(format!(
            "{value} exceeds the maximum representable numeral"
        ))
        .with_hint(format!("the {} notation stops at {upper_bound}", table.name())));
    }

    let mut remaining = value;
    let mut out = String::new();
    for token in table.all_tokens() {
        let count = remaining / token.value();
        if count > 0 {
            remaining -= count * token.value();
            for _ in 0..count {
                out.push_str(token.text());
            }
        }
    }

    if remaining != 0 {
        return Err(NumeralError::out_of_range(format!(
            "{value} can't be represented with the symbols of the {} notation",
            table.name()
        )));
    }

    Ok(out)
}
