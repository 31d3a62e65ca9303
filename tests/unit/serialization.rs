//! `AssertionFailure` as a structured report.

use tripwire::is_true;

#[test]
fn failure_serializes_parts_and_location() {
    struct Player;
    let id = 3;
    let line = line!() + 1;
    let failure = is_true!(false, "no sprite", type = Player, context = id).unwrap_err();

    let json = serde_json::to_value(&failure).expect("serializes");
    assert_eq!(json["message"], "no sprite");
    assert_eq!(json["type_label"], "Player");
    assert_eq!(json["context"], "3");
    assert_eq!(json["line"], line);
    assert!(json["file"].as_str().is_some_and(|file| file.ends_with("serialization.rs")));
}

#[test]
fn missing_parts_serialize_as_null() {
    let failure = is_true!(false, "plain").unwrap_err();
    let json = serde_json::to_value(&failure).expect("serializes");
    assert!(json["type_label"].is_null());
    assert!(json["context"].is_null());
}
