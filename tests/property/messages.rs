//! The rendered message always follows `[Context object: ctx][<Type> ]message`.

use super::common::expected_text;
use proptest::prelude::*;
use tripwire::{assert, Check};

/// Type labels must be `'static`, so draw them from a fixed set.
fn label_strategy() -> impl Strategy<Value = Option<&'static str>> {
    prop::option::of(prop::sample::select(vec![
        "Player",
        "Sprite",
        "Vec<u8>",
        "",
        "<nested>",
    ]))
}

proptest! {
    #[test]
    fn rendered_message_matches_layout(
        message in ".{0,40}",
        label in label_strategy(),
        context in prop::option::of(".{0,20}"),
    ) {
        let mut check = Check::new(&message);
        if let Some(label) = label {
            check = check.labeled(label);
        }
        if let Some(context) = &context {
            check = check.context(context);
        }

        let failure = assert::is_true(false, check).unwrap_err();

        prop_assert_eq!(
            failure.to_string(),
            expected_text(&message, label, context.as_deref())
        );
        prop_assert_eq!(failure.message(), message.as_str());
        prop_assert_eq!(failure.context(), context.as_deref());
    }

    #[test]
    fn message_is_always_a_suffix(message in "[a-z ]{1,30}", context in any::<i64>()) {
        let failure = assert::is_true(false, Check::new(&message).context(&context)).unwrap_err();
        let text = failure.to_string();
        prop_assert!(text.ends_with(&message));
        let prefix = format!("Context object: {}", context);
        prop_assert!(text.starts_with(&prefix));
    }
}
