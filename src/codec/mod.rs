//! Numeral codec
//!
//! ```text
//! encode: integer → encoder (all tokens) → text
//!
//! decode: text → tokenizer (base tokens) → occurrences
//!              → validator (grammar)     → groups
//!              → evaluator (signed sum)  → integer
//! ```
//!
//! Every stage is a pure function of its inputs; a [`NotationTable`] is only
//! ever read, so one table can serve any number of threads.

mod batch;
mod encoder;
mod evaluator;
mod tokenizer;
mod validator;

pub use batch::{format_all, parse_all};
pub use encoder::encode;
pub use evaluator::evaluate;
pub use tokenizer::{TokenOccurrence, Tokenization, tokenize};
pub use validator::{Group, validate};

use text_size::{TextRange, TextSize};

use crate::errors::{NumeralError, ParseOutcome};
use crate::notation::{NotationTable, default_notation};

/// Render `value` with the default notation
pub fn format(value: u64) -> Result<String, NumeralError> {
    encode(value, default_notation())
}

/// Render `value` with `table`
pub fn format_with(value: u64, table: &NotationTable) -> Result<String, NumeralError> {
    encode(value, table)
}

/// Decode `text` with the default notation
pub fn parse(text: &str) -> ParseOutcome {
    parse_with(text, default_notation())
}

/// Decode `text` with `table`
pub fn parse_with(text: &str, table: &NotationTable) -> ParseOutcome {
    let outcome = decode(text, table);
    if let Err(err) = &outcome {
        tracing::trace!(input = text, notation = table.name(), code = err.kind.code(), "rejected numeral");
    }
    outcome
}

fn decode(text: &str, table: &NotationTable) -> ParseOutcome {
    let size = input_size(text.len())?;
    if text.trim().is_empty() {
        return Err(NumeralError::malformed("the input is empty and can't be parsed"));
    }

    if let Some(zero) = table.zero() {
        if text.trim() == zero {
            return Ok(0);
        }
    }

    let tokenization = tokenize(text, table.base_tokens());
    if tokenization.occurrences.is_empty() || !tokenization.is_complete() {
        let unmatched = tokenization.remainder.trim();
        return Err(NumeralError::malformed(format!("'{unmatched}' can't be parsed"))
            .at(first_unmatched(text, size, &tokenization)));
    }

    let groups = validate(&tokenization.occurrences)?;
    evaluate(&groups, table.max_value())
}

/// Byte length of the input as a [`TextSize`]; ranges are 32-bit
fn input_size(len: usize) -> Result<TextSize, NumeralError> {
    TextSize::try_from(len)
        .ok()
        .filter(|size| u32::from(*size) < u32::MAX)
        .ok_or_else(|| NumeralError::malformed(format!("the input is too long ({len} bytes) to be parsed")))
}

/// Range of the first non-whitespace character no token claimed
fn first_unmatched(text: &str, size: TextSize, tokenization: &Tokenization<'_>) -> TextRange {
    let claimed = |offset: TextSize| tokenization.occurrences.iter().any(|o| o.range.contains(offset));

    text.char_indices()
        .filter_map(|(offset, c)| TextSize::try_from(offset).ok().map(|offset| (offset, c)))
        .find(|(offset, c)| !c.is_whitespace() && !claimed(*offset))
        .map(|(offset, c)| TextRange::at(offset, TextSize::of(c)))
        .unwrap_or_else(|| TextRange::up_to(size))
}
