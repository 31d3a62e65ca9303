//! Build script for tripwire crate.
//!
//! Reads `TRIPWIRE_CHECKS` so a build can force checks on or off without
//! touching cargo features:
//! - `on`: checks stay active even without debug assertions
//! - `off`: checks compile out even with debug assertions
//!
//! Anything else (or unset) leaves the decision to `debug_assertions`.

use std::env;

fn main() {
    println!("cargo:rerun-if-env-changed=TRIPWIRE_CHECKS");

    let Ok(value) = env::var("TRIPWIRE_CHECKS") else {
        return;
    };

    match value.trim().to_ascii_lowercase().as_str() {
        "on" | "1" | "true" => println!("cargo:rustc-cfg=tripwire_checks=\"on\""),
        "off" | "0" | "false" => println!("cargo:rustc-cfg=tripwire_checks=\"off\""),
        "" | "auto" => {}
        other => println!(
            "cargo:warning=ignoring TRIPWIRE_CHECKS={other:?} (expected on, off or auto)"
        ),
    }
}
