// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The build-time switch that decides whether checks exist at all.
//!
//! Resolution order, first match wins:
//!
//! | Source                                   | Result   |
//! |------------------------------------------|----------|
//! | `strip-checks` feature                   | inactive |
//! | `TRIPWIRE_CHECKS=off` at build time      | inactive |
//! | `force-checks` feature                   | active   |
//! | `TRIPWIRE_CHECKS=on` at build time       | active   |
//! | otherwise                                | `debug_assertions` |
//!
//! The decision is a `const`, so `if is_active() { .. }` in the macros folds
//! away and the inactive branch (with its argument expressions) never runs.
//!
//! `debug_assertions` is read when *this* crate compiles. Cargo builds every
//! package in a profile with the same setting unless a per-package profile
//! override says otherwise.

/// Whether checks are compiled in.
pub const ACTIVE: bool = if cfg!(any(feature = "strip-checks", tripwire_checks = "off")) {
    false
} else if cfg!(any(feature = "force-checks", tripwire_checks = "on")) {
    true
} else {
    cfg!(debug_assertions)
};

/// Report whether checks are currently enabled.
///
/// Purely informational: `true` in debug builds, `false` in release builds,
/// unless overridden by a feature or `TRIPWIRE_CHECKS`.
#[inline(always)]
pub const fn is_active() -> bool {
    ACTIVE
}
