//! `is_equal!`.

use super::common::failure_text;
use tripwire::is_equal;

#[test]
fn equal_values_pass() {
    assert!(is_equal!(5, 5, "mismatch").is_ok());
    assert!(is_equal!("left", String::from("left"), "mismatch").is_ok());
}

#[test]
fn different_values_fail() {
    let text = failure_text(is_equal!(5, 6, "mismatch"));
    assert_eq!(text, "mismatch");
}

#[test]
fn two_absent_values_are_equal() {
    let expected: Option<&str> = None;
    let actual: Option<&str> = None;
    assert!(is_equal!(expected, actual, "mismatch").is_ok());
}

#[test]
fn exactly_one_absent_value_fails() {
    let present = Some(3);
    let absent: Option<i32> = None;
    assert!(is_equal!(present, absent, "mismatch").is_err());
    assert!(is_equal!(absent, present, "mismatch").is_err());
}

#[test]
fn structural_equality_not_identity() {
    let expected = vec![1, 2, 3];
    let actual: Vec<i32> = (1..=3).collect();
    assert!(is_equal!(expected, actual, "same contents").is_ok());
}

#[test]
fn equality_failure_carries_context() {
    let tick = 9;
    let text = failure_text(is_equal!(0, tick, "spawn before first tick", context = tick));
    assert_eq!(text, "Context object: 9spawn before first tick");
}
