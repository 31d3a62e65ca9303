// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for failure message rendering.
//!
//! Messages and contexts are arbitrary caller text. Rendering must never panic
//! and must always produce `[Context object: ctx][<Type> ]message`.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use tripwire::{assert, Check};

#[derive(Arbitrary, Debug)]
struct Input<'a> {
    message: &'a str,
    label: Option<u8>,
    context: Option<&'a str>,
    condition: bool,
}

const LABELS: &[&str] = &["Player", "", "<>", "Vec<u8>", "ü"];

fuzz_target!(|input: Input<'_>| {
    let label = input.label.map(|i| LABELS[i as usize % LABELS.len()]);

    let mut check = Check::new(input.message);
    if let Some(label) = label {
        check = check.labeled(label);
    }
    if let Some(context) = &input.context {
        check = check.context(context);
    }

    // Property 1: a true condition never produces a failure
    let Err(failure) = assert::is_true(input.condition, check) else {
        assert!(input.condition);
        return;
    };
    assert!(!input.condition);

    // Property 2: rendering follows the documented layout exactly
    let mut expected = String::new();
    if let Some(context) = input.context {
        expected.push_str("Context object: ");
        expected.push_str(context);
    }
    if let Some(label) = label {
        expected.push('<');
        expected.push_str(label);
        expected.push_str("> ");
    }
    expected.push_str(input.message);

    assert_eq!(failure.to_string(), expected);
    assert_eq!(failure.message(), input.message);
});
