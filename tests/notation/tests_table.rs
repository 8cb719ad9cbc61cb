use rstest::rstest;
use romana::notation::{Escalation, Family, NotationConfig};
use romana::{NotationError, NotationTable};

use crate::helpers::fixtures::{CARET, CLASSIC_SYMBOLS, SHORT};

#[rstest]
#[case(1)]
#[case(2)]
#[case(3)]
#[case(5)]
#[case(7)]
fn test_table_size_is_two_n_minus_one(#[case] n: usize) {
    let table = NotationTable::new(CLASSIC_SYMBOLS[..n].iter().copied()).unwrap();
    assert_eq!(table.base_tokens().len(), n);
    assert_eq!(table.all_tokens().len(), 2 * n - 1);
}

#[test]
fn test_empty_table() {
    let table = NotationTable::new(Vec::<&str>::new()).unwrap();
    assert!(table.is_empty());
    assert!(table.all_tokens().is_empty());
    assert_eq!(table.upper_bound(), 0);
}

#[test]
fn test_tokens_sorted_and_unique() {
    for table in [&*CARET, &*SHORT] {
        let values: Vec<u64> = table.all_tokens().iter().map(|t| t.value()).collect();
        assert!(values.windows(2).all(|w| w[0] > w[1]), "{} not strictly descending", table.name());
    }
}

#[test]
fn test_compound_tokens() {
    let table = &*SHORT;
    let texts: Vec<&str> = table.all_tokens().iter().map(|t| t.text()).collect();
    assert_eq!(texts, ["X", "IX", "V", "IV", "I"]);
    assert!(table.token("IX").unwrap().is_compound());
    assert!(!table.token("X").unwrap().is_compound());
}

#[test]
fn test_caret_escalation_tokens() {
    let table = &*CARET;
    assert_eq!(table.base_tokens().len(), 19);
    assert_eq!(table.all_tokens().len(), 37);
    assert!(table.token("I^").is_none());
    assert_eq!(table.token("V^").unwrap().value(), 5000);
    assert_eq!(table.token("M^").unwrap().value(), 1_000_000);
    assert_eq!(table.token("M^^").unwrap().value(), 1_000_000_000);
    assert_eq!(table.token("MV^").unwrap().value(), 4000);
    assert_eq!(table.token("V^").unwrap().family(), Some(Family::Five));
    assert_eq!(table.token("M^").unwrap().exponent(), 6);
}

#[test]
fn test_single_round_escalation() {
    let config = NotationConfig::new("one-round", CLASSIC_SYMBOLS)
        .with_escalation(Escalation::new("'").with_rounds(1));
    let table = NotationTable::from_config(&config).unwrap();

    assert_eq!(table.base_tokens().len(), 13);
    assert_eq!(table.largest().unwrap().text(), "M'");
    assert_eq!(table.upper_bound(), 3_999_999);
}

#[test]
fn test_max_value_caps_upper_bound() {
    let config = NotationConfig::new("capped", CLASSIC_SYMBOLS).with_max_value(2000);
    let table = NotationTable::from_config(&config).unwrap();
    assert_eq!(table.upper_bound(), 2000);
}

#[rstest]
#[case(NotationConfig::new("blank", ["I", "", "X"]))]
#[case(NotationConfig::new("twice", ["I", "V", "I"]))]
#[case(NotationConfig::new("marker", ["I", "V"]).with_escalation(""))]
#[case(NotationConfig::new("zero", ["I", "V"]).with_zero("V"))]
fn test_invalid_definitions(#[case] config: NotationConfig) {
    assert!(NotationTable::from_config(&config).is_err());
}

#[test]
fn test_duplicate_symbol_error() {
    let err = NotationTable::new(["I", "V", "I"]).unwrap_err();
    assert_eq!(err, NotationError::DuplicateSymbol("I".to_string()));
}
