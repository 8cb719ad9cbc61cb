use rstest::rstest;
use romana::notation::{NotationConfig, apostrophus, builtin_names, classic, framed, notation};
use romana::{NotationTable, RomanNumeral, format_all, format_with, parse_all, parse_with};

use crate::helpers::fixtures::{CARET, CLASSIC_SYMBOLS, NULLA, SHORT};

fn assert_round_trip(table: &NotationTable, values: impl IntoIterator<Item = u64>) {
    for value in values {
        let text = format_with(value, table)
            .unwrap_or_else(|err| panic!("{} failed to format in {}: {}", value, table.name(), err));
        assert_eq!(
            parse_with(&text, table),
            Ok(value),
            "'{}' did not decode back to {} in {}",
            text,
            value,
            table.name()
        );
    }
}

/// Values spread over every tier up to `max`
fn sample_values(max: u64) -> Vec<u64> {
    let mut values: Vec<u64> = (1..=4000).filter(|v| *v <= max).collect();
    let mut step = 7;
    let mut value = 4000;
    while value <= max {
        values.push(value);
        value += step;
        step = step * 3 / 2 + 11;
    }
    values.push(max);
    values
}

#[test]
fn test_round_trip_classic_full_range() {
    assert_round_trip(classic(), 1..=3999);
}

#[test]
fn test_round_trip_every_builtin() {
    for name in builtin_names() {
        let table = notation(name).unwrap();
        assert_round_trip(table, sample_values(table.upper_bound()));
    }
}

#[test]
fn test_round_trip_apostrophus_and_framed() {
    assert_round_trip(apostrophus(), [4000, 49_999, 444_444, 1_999_999, 3_999_999]);
    assert_round_trip(framed(), [4000, 90_000, 400_000, 1_494_949, 3_999_999]);
}

#[test]
fn test_round_trip_caret() {
    assert_round_trip(&CARET, sample_values(CARET.upper_bound()));
}

#[test]
fn test_round_trip_zero_symbol() {
    assert_round_trip(&NULLA, 0..=3999);
}

#[test]
fn test_round_trip_short() {
    assert_round_trip(&SHORT, 1..=39);
}

#[rstest]
#[case(2)]
#[case(4)]
#[case(6)]
fn test_round_trip_five_family_top_symbol(#[case] n: usize) {
    let table = NotationTable::new(CLASSIC_SYMBOLS[..n].iter().copied()).unwrap();
    assert_round_trip(&table, 1..=table.upper_bound());
    assert!(format_with(table.upper_bound() + 1, &table).is_err());
}

#[rstest]
#[case(999)]
#[case(1994)]
#[case(49)]
fn test_round_trip_capped_table(#[case] max_value: u64) {
    let config = NotationConfig::new("capped", CLASSIC_SYMBOLS).with_max_value(max_value);
    let table = NotationTable::from_config(&config).unwrap();
    assert_eq!(table.upper_bound(), max_value);
    assert_round_trip(&table, 1..=max_value);
}

#[test]
fn test_round_trip_batch() {
    let values: Vec<u64> = sample_values(CARET.upper_bound());
    let texts: Vec<String> = format_all(&values, &CARET)
        .into_iter()
        .collect::<Result<_, _>>()
        .unwrap();
    let decoded: Vec<u64> = parse_all(&texts, &CARET)
        .into_iter()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(decoded, values);
}

#[test]
fn test_round_trip_numeral_type() {
    for value in [1u32, 4, 1994, 3999, 4000, 1_000_000, i32::MAX as u32] {
        let numeral = RomanNumeral::try_from(value).unwrap();
        let reparsed: RomanNumeral = numeral.to_string().parse().unwrap();
        assert_eq!(reparsed, numeral);
    }
}
