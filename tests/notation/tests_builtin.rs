use romana::notation::{apostrophus, builtin_config, builtin_names, classic, framed};
use romana::{NotationTable, default_notation, notation};

#[test]
fn test_registry_lists_default_first() {
    let names: Vec<&str> = builtin_names().collect();
    assert_eq!(names.first(), Some(&"vinculum"));
    assert_eq!(names.len(), 4);
    assert!(names.contains(&"classic"));
    assert!(names.contains(&"apostrophus"));
    assert!(names.contains(&"framed"));
}

#[test]
fn test_lookup_by_name() {
    assert!(std::ptr::eq(notation("vinculum").unwrap(), default_notation()));
    assert!(std::ptr::eq(notation("classic").unwrap(), classic()));
    assert!(std::ptr::eq(notation("apostrophus").unwrap(), apostrophus()));
    assert!(std::ptr::eq(notation("framed").unwrap(), framed()));
    assert!(notation("Classic").is_none());
}

#[test]
fn test_builtin_config_rebuilds_same_table() {
    for name in builtin_names() {
        let rebuilt = NotationTable::from_config(&builtin_config(name).unwrap()).unwrap();
        assert_eq!(&rebuilt, notation(name).unwrap());
    }
}

#[test]
fn test_upper_bounds() {
    assert_eq!(classic().upper_bound(), 3999);
    assert_eq!(apostrophus().upper_bound(), 3_999_999);
    assert_eq!(framed().upper_bound(), 3_999_999);
    assert_eq!(default_notation().upper_bound(), 2_147_483_647);
}

#[test]
fn test_default_tiers() {
    let table = default_notation();
    assert_eq!(table.largest().unwrap().text(), "M\u{0305}\u{0305}");
    assert_eq!(table.token("V\u{0305}").unwrap().value(), 5000);
    assert!(table.token("I\u{0305}").is_none());
    assert!(table.zero().is_none());
}

#[test]
fn test_tables_are_shareable_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|i| std::thread::spawn(move || romana::format(1994 + i).unwrap()))
        .collect();
    let texts: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(texts, ["MCMXCIV", "MCMXCV", "MCMXCVI", "MCMXCVII"]);
}
