//! Grammar validation over a token sequence
//!
//! The scan folds the occurrences into logical groups: a single token, or a
//! subtraction pair where a token is followed by a larger one. Each new group
//! is checked against the previous one and the current repetition run; the
//! first violation in left-to-right order is reported.
//!
//! | Rule                        | Example       | Kind                 |
//! |-----------------------------|---------------|----------------------|
//! | 5-family never repeats      | `VV`          | `InvalidRepetition`  |
//! | 1-family at most 3 in a row | `IIII`        | `InvalidRepetition`  |
//! | subtrahend must be 1-family | `VX`          | `InvalidSubtraction` |
//! | minuend one step up only    | `IL`, `IC`    | `InvalidSubtraction` |
//! | nothing at or above the subtrahend after a pair | `XLX`, `IVI` | `InvalidSequence` |
//! | groups never grow           | `IIX`, `XXL`  | `InvalidSequence`    |
//! | 5-family not reused as minuend | `VIV`      | `InvalidSequence`    |

use text_size::TextRange;

use super::tokenizer::TokenOccurrence;
use crate::base::constants::MAX_REPETITION;
use crate::errors::{ErrorKind, NumeralError};
use crate::notation::Family;

/// A validated unit of the numeral
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Group<'o, 't> {
    Single(&'o TokenOccurrence<'t>),
    /// `minor` subtracted from `major`, e.g. `I` and `V` in `IV`
    Pair {
        minor: &'o TokenOccurrence<'t>,
        major: &'o TokenOccurrence<'t>,
    },
}

impl Group<'_, '_> {
    pub fn value(&self) -> u64 {
        match self {
            Group::Single(single) => single.value(),
            Group::Pair { minor, major } => major.value() - minor.value(),
        }
    }

    pub fn range(&self) -> TextRange {
        match self {
            Group::Single(single) => single.range,
            Group::Pair { minor, major } => minor.range.cover(major.range),
        }
    }

    fn text(&self) -> String {
        match self {
            Group::Single(single) => single.text().to_string(),
            Group::Pair { minor, major } => format!("{}{}", minor.text(), major.text()),
        }
    }
}

/// Consecutive identical single tokens
struct Run {
    value: u64,
    count: u64,
}

/// Check the grammar of `occurrences`, returning the groups they form
pub fn validate<'o, 't>(
    occurrences: &'o [TokenOccurrence<'t>],
) -> Result<Vec<Group<'o, 't>>, NumeralError> {
    let mut groups: Vec<Group<'o, 't>> = Vec::with_capacity(occurrences.len());
    let mut run = Run { value: 0, count: 0 };
    let mut index = 0;

    while index < occurrences.len() {
        let current = &occurrences[index];
        let group = match occurrences.get(index + 1) {
            Some(next) if next.value() > current.value() => {
                check_subtraction(current, next)?;
                index += 2;
                Group::Pair {
                    minor: current,
                    major: next,
                }
            }
            _ => {
                index += 1;
                Group::Single(current)
            }
        };

        if let Some(previous) = groups.last() {
            check_succession(previous, &group, &mut run)?;
        }

        match group {
            Group::Single(single) if single.value() == run.value => run.count += 1,
            Group::Single(single) => {
                run = Run {
                    value: single.value(),
                    count: 1,
                }
            }
            Group::Pair { .. } => run = Run { value: 0, count: 0 },
        }

        groups.push(group);
    }

    Ok(groups)
}

/// A smaller token directly before a larger one
fn check_subtraction(minor: &TokenOccurrence<'_>, major: &TokenOccurrence<'_>) -> Result<(), NumeralError> {
    let eligible = minor.token.family() == Some(Family::One)
        && match major.token.family() {
            Some(Family::One) => major.token.exponent() == minor.token.exponent() + 1,
            Some(Family::Five) => major.token.exponent() == minor.token.exponent(),
            None => false,
        };

    if eligible {
        return Ok(());
    }

    let error = NumeralError::new(
        ErrorKind::InvalidSubtraction,
        format!("'{}' can't be subtracted from '{}'", minor.text(), major.text()),
    )
    .at(minor.range.cover(major.range));

    Err(if minor.token.family() == Some(Family::Five) {
        error.with_hint(format!("'{}' is never used for subtraction", minor.text()))
    } else {
        error
    })
}

fn check_succession(
    previous: &Group<'_, '_>,
    current: &Group<'_, '_>,
    run: &mut Run,
) -> Result<(), NumeralError> {
    match (previous, current) {
        (Group::Single(before), Group::Single(single)) => {
            if single.value() == before.value() {
                return check_repetition(single, run.count + 1);
            }
            if single.value() > before.value() {
                return Err(out_of_order(previous, current));
            }
        }
        (Group::Single(before), Group::Pair { minor, major }) => {
            let reused_five = major.value() == before.value() && before.token.is_five();
            if minor.value() >= before.value() || major.value() > before.value() || reused_five {
                return Err(out_of_order(previous, current));
            }
        }
        (Group::Pair { minor: subtrahend, .. }, _) => {
            if current.value() >= subtrahend.value() {
                return Err(out_of_order(previous, current));
            }
        }
    }
    Ok(())
}

fn check_repetition(single: &TokenOccurrence<'_>, count: u64) -> Result<(), NumeralError> {
    match single.token.family() {
        Some(Family::Five) => Err(NumeralError::new(
            ErrorKind::InvalidRepetition,
            format!("'{}' can't be repeated", single.text()),
        )
        .at(single.range)),
        _ if count > MAX_REPETITION => Err(NumeralError::new(
            ErrorKind::InvalidRepetition,
            format!("'{}' can only be repeated up to three times", single.text()),
        )
        .at(single.range)),
        _ => Ok(()),
    }
}

fn out_of_order(previous: &Group<'_, '_>, current: &Group<'_, '_>) -> NumeralError {
    NumeralError::new(
        ErrorKind::InvalidSequence,
        format!(
            "the numeral '{}' cannot follow after '{}'",
            current.text(),
            previous.text()
        ),
    )
    .at(current.range())
}
