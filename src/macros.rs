// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Macros that make a check disappear when checks are inactive.
//!
//! Each macro expands to
//!
//! ```ignore
//! if tripwire::is_active() { /* evaluate arguments, run the check */ } else { Ok(()) }
//! ```
//!
//! `is_active()` is a `const fn`, so in an inactive build the first branch is
//! dead code: the condition, the message, and the context are never evaluated.
//! They are still type-checked, which keeps a stripped build from hiding a
//! broken check.
//!
//! Every macro yields a `Result`; propagate it with `?`.
//!
//! ```ignore
//! use tripwire::{is_true, is_not_null, is_equal};
//!
//! fn spawn(world: &World, player: Option<&Player>) -> Result<(), AssertionFailure> {
//!     is_not_null!(player, "spawn needs a player", type = Player)?;
//!     is_true!(world.capacity() > 0, "world is full", context = world.name())?;
//!     is_equal!(world.tick(), 0, "spawn before the first tick")?;
//!     Ok(())
//! }
//! ```
//!
//! # Describing a check
//!
//! The trailing arguments of every macro go to [`check!`]:
//!
//! | Form                                     | Message                          |
//! |------------------------------------------|----------------------------------|
//! | `"msg"`                                  | `msg`                            |
//! | `"msg", type = T`                        | `<T> msg`                        |
//! | `"msg", context = expr`                  | `Context object: {expr}msg`      |
//! | `"msg", type = T, context = expr`        | `Context object: {expr}<T> msg`  |

/// Gate a check on the build-time switch.
///
/// Not public API; the `@when` flag is explicit so the inactive path can be
/// exercised in tests.
#[doc(hidden)]
#[macro_export]
macro_rules! __gate {
    (@when $on:expr => $body:expr) => {
        if $on {
            $body
        } else {
            ::core::result::Result::Ok(())
        }
    };
    (@expensive $on:expr => $thunk:expr, $check:expr) => {
        {
            let thunk = $thunk;
            if $on {
                $crate::assert::expensive_is_true(thunk, $check)
            } else {
                $crate::assert::require_predicate(&thunk).map_err($crate::CheckError::from)
            }
        }
    };
}

/// Build a [`Check`](crate::Check) from a message and optional
/// `type = T` / `context = expr` parts.
#[macro_export]
macro_rules! check {
    ($message:expr, type = $label:ty, context = $context:expr $(,)?) => {
        $crate::Check::new($message).of::<$label>().context(&$context)
    };
    ($message:expr, type = $label:ty $(,)?) => {
        $crate::Check::new($message).of::<$label>()
    };
    ($message:expr, context = $context:expr $(,)?) => {
        $crate::Check::new($message).context(&$context)
    };
    ($message:expr $(,)?) => {
        $crate::Check::new($message)
    };
}

/// Fail when the condition is false.
#[macro_export]
macro_rules! is_true {
    ($condition:expr, $($check:tt)+) => {
        $crate::__gate!(@when $crate::is_active() =>
            $crate::assert::is_true($condition, $crate::check!($($check)+)))
    };
}

/// Fail when the condition is true.
#[macro_export]
macro_rules! is_false {
    ($condition:expr, $($check:tt)+) => {
        $crate::__gate!(@when $crate::is_active() =>
            $crate::assert::is_false($condition, $crate::check!($($check)+)))
    };
}

/// Fail when the value is absent (see [`Absent`](crate::Absent)).
#[macro_export]
macro_rules! is_not_null {
    ($value:expr, $($check:tt)+) => {
        $crate::__gate!(@when $crate::is_active() =>
            $crate::assert::is_not_null(&$value, $crate::check!($($check)+)))
    };
}

/// Fail on the first absent value in `[a, b, ..]`.
#[macro_export]
macro_rules! are_not_null {
    ([$($value:expr),+ $(,)?], $($check:tt)+) => {
        $crate::__gate!(@when $crate::is_active() =>
            $crate::assert::are_not_null(
                &[$(&$value as &dyn $crate::Absent),+],
                $crate::check!($($check)+),
            ))
    };
}

/// Fail when `expected != actual`.
#[macro_export]
macro_rules! is_equal {
    ($expected:expr, $actual:expr, $($check:tt)+) => {
        $crate::__gate!(@when $crate::is_active() =>
            $crate::assert::is_equal(&$expected, &$actual, $crate::check!($($check)+)))
    };
}

/// Run a predicate only when checks are active, and fail when it returns false.
///
/// Accepts a closure (`|| expensive()`) or an `Option` of one. A `None`
/// predicate is a [`MisuseError`](crate::MisuseError) in every build, active or
/// not; the predicate itself is never called in an inactive build.
#[macro_export]
macro_rules! expensive_is_true {
    (move || $body:expr, $($check:tt)+) => {
        $crate::expensive_is_true!(::core::option::Option::Some(move || $body), $($check)+)
    };
    (|| $body:expr, $($check:tt)+) => {
        $crate::expensive_is_true!(::core::option::Option::Some(|| $body), $($check)+)
    };
    ($thunk:expr, $($check:tt)+) => {
        $crate::__gate!(@expensive $crate::is_active() => $thunk, $crate::check!($($check)+))
    };
}

/// Fail when a `&dyn Any` value is not of the given type.
///
/// ```ignore
/// is_of_type!(Player, entity.as_any(), "entity must be a player")?;
/// ```
#[macro_export]
macro_rules! is_of_type {
    ($type:ty, $value:expr, $($check:tt)+) => {
        $crate::__gate!(@when $crate::is_active() =>
            $crate::assert::is_of_type::<$type>($value, $crate::check!($($check)+)))
    };
}
