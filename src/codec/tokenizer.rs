//! Tokenizer: numeral text → positioned base tokens
//!
//! Numeral text has no separators, so symbols are found greedily: base tokens
//! are tried largest first and each match claims its bytes in an occupancy
//! array. A later, smaller token can only claim bytes nobody owns yet, which
//! is what keeps `V` from matching inside `V̅`.

use text_size::{TextRange, TextSize};

use crate::notation::Token;

/// A base token found at a byte range of the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenOccurrence<'t> {
    pub token: &'t Token,
    pub range: TextRange,
}

impl<'t> TokenOccurrence<'t> {
    pub fn value(&self) -> u64 {
        self.token.value()
    }

    pub fn text(&self) -> &'t str {
        self.token.text()
    }

    pub fn offset(&self) -> TextSize {
        self.range.start()
    }
}

/// Occurrences ordered by position plus every character no token claimed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokenization<'t> {
    pub occurrences: Vec<TokenOccurrence<'t>>,
    pub remainder: String,
}

impl Tokenization<'_> {
    /// True when nothing but whitespace was left unclaimed
    pub fn is_complete(&self) -> bool {
        self.remainder.trim().is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Free,
    /// First byte of a match of `base[index]`
    Head(usize),
    /// Any later byte of a match
    Tail,
}

/// Carve `input` into occurrences of `base` tokens (expected largest first)
///
/// Input too long for 32-bit ranges is left unclaimed as a whole.
pub fn tokenize<'t>(input: &str, base: &'t [Token]) -> Tokenization<'t> {
    if TextSize::try_from(input.len()).is_err() {
        return Tokenization {
            occurrences: Vec::new(),
            remainder: input.to_string(),
        };
    }

    let mut slots = vec![Slot::Free; input.len()];

    for (index, token) in base.iter().enumerate() {
        let needle = token.text();
        if needle.is_empty() {
            continue;
        }

        let mut from = 0;
        while let Some(found) = input[from..].find(needle) {
            let start = from + found;
            let end = start + needle.len();

            if slots[start..end].iter().all(|slot| *slot == Slot::Free) {
                slots[start] = Slot::Head(index);
                slots[start + 1..end].fill(Slot::Tail);
                from = end;
            } else {
                // Step over one character so a match straddling a claim can still be found
                from = start + input[start..].chars().next().map_or(1, char::len_utf8);
            }
        }
    }

    let occurrences = slots
        .iter()
        .enumerate()
        .filter_map(|(offset, slot)| match slot {
            Slot::Head(index) => {
                let token = &base[*index];
                let start = TextSize::try_from(offset).ok()?;
                Some(TokenOccurrence {
                    token,
                    range: TextRange::at(start, TextSize::of(token.text())),
                })
            }
            _ => None,
        })
        .collect();

    let remainder = input
        .char_indices()
        .filter(|(offset, _)| slots[*offset] == Slot::Free)
        .map(|(_, c)| c)
        .collect();

    Tokenization {
        occurrences,
        remainder,
    }
}
