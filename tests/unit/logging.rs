//! Failures are reported through the `log` facade.

use super::common::{capture_logs, logged};
use log::Level;
use tripwire::{expensive_is_true, is_true};

#[test]
fn failure_logs_at_debug() {
    capture_logs();
    let _ = is_true!(false, "logged-failure-7f3a");

    let lines = logged(Level::Debug, "logged-failure-7f3a");
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("check failed at"));
}

#[test]
fn passing_check_logs_nothing() {
    capture_logs();
    let _ = is_true!(true, "silent-pass-91c2");
    assert!(logged(Level::Debug, "silent-pass-91c2").is_empty());
}

#[test]
fn misuse_logs_at_error() {
    capture_logs();
    let line = line!() + 1;
    let _ = expensive_is_true!(None::<fn() -> bool>, "unused");

    let needle = format!("logging.rs:{}:", line);
    assert_eq!(logged(Level::Error, &needle).len(), 1);
}
