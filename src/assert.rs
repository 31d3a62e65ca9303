// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The checks themselves.
//!
//! Every function here evaluates unconditionally: it is the macros in
//! [`crate::macros`] that decide whether a call (and its arguments) exists at
//! all. Call these directly when you want a check that survives release builds;
//! use the macros for checks that should vanish.
//!
//! | Function            | Fails when                                     |
//! |---------------------|------------------------------------------------|
//! | `is_true`           | `condition` is false                           |
//! | `is_false`          | `condition` is true                            |
//! | `is_not_null`       | `value.is_absent()`                            |
//! | `are_not_null`      | any value is absent (reports the first)        |
//! | `is_equal`          | `expected != actual`                           |
//! | `expensive_is_true` | the predicate returns false (or is missing)    |
//! | `is_of_type`        | the value is not a `T`                         |
//!
//! All of them are `#[track_caller]`: the failure's `location()` is the line
//! that wrote the check, not a line in this file.

use crate::absent::Absent;
use crate::check::{short_type_name, Check};
use crate::failure::{AssertionFailure, CheckError, MisuseError};
use std::any::Any;
use std::panic::Location;

#[track_caller]
#[cold]
fn fail(check: &Check<'_>) -> AssertionFailure {
    AssertionFailure::from_check(check, Location::caller())
}

/// Fail when `condition` is false.
#[track_caller]
#[inline]
pub fn is_true(condition: bool, check: Check<'_>) -> Result<(), AssertionFailure> {
    if condition {
        Ok(())
    } else {
        Err(fail(&check))
    }
}

/// Fail when `condition` is true.
#[track_caller]
#[inline]
pub fn is_false(condition: bool, check: Check<'_>) -> Result<(), AssertionFailure> {
    if condition {
        Err(fail(&check))
    } else {
        Ok(())
    }
}

/// Fail when `value` is absent.
///
/// Absence is whatever [`Absent::is_absent`] says, so a type that overrides it
/// to report "empty" fails here just like `None`.
#[track_caller]
#[inline]
pub fn is_not_null<T: Absent + ?Sized>(value: &T, check: Check<'_>) -> Result<(), AssertionFailure> {
    if value.is_absent() {
        Err(fail(&check))
    } else {
        Ok(())
    }
}

/// Fail on the first absent value, scanning left to right.
///
/// Values after the first absent one are never inspected.
#[track_caller]
pub fn are_not_null(values: &[&dyn Absent], check: Check<'_>) -> Result<(), AssertionFailure> {
    if values.iter().any(|value| value.is_absent()) {
        Err(fail(&check))
    } else {
        Ok(())
    }
}

/// Fail when `expected != actual`.
///
/// Both sides must support value equality. For `Option`s this means two
/// `None`s are equal and exactly one `None` is not.
#[track_caller]
#[inline]
pub fn is_equal<E, A>(expected: &E, actual: &A, check: Check<'_>) -> Result<(), AssertionFailure>
where
    E: PartialEq<A> + ?Sized,
    A: ?Sized,
{
    if expected == actual {
        Ok(())
    } else {
        Err(fail(&check))
    }
}

/// Run `thunk` and fail when it returns false.
///
/// A `None` thunk is reported as [`MisuseError::MissingPredicate`] before
/// anything else happens.
#[track_caller]
pub fn expensive_is_true<F>(thunk: Option<F>, check: Check<'_>) -> Result<(), CheckError>
where
    F: FnOnce() -> bool,
{
    let Some(predicate) = thunk else {
        return Err(MisuseError::missing_predicate(Location::caller()).into());
    };

    if predicate() {
        Ok(())
    } else {
        Err(fail(&check).into())
    }
}

/// The part of [`expensive_is_true`] that runs even when checks are compiled
/// out: reject a missing predicate without calling it.
#[track_caller]
#[inline]
pub fn require_predicate<F>(thunk: &Option<F>) -> Result<(), MisuseError>
where
    F: FnOnce() -> bool,
{
    match thunk {
        Some(_) => Ok(()),
        None => Err(MisuseError::missing_predicate(Location::caller())),
    }
}

/// Look through one level of `Box<dyn Any>`, so `&boxed` checks the boxed
/// value rather than the box.
fn unboxed(value: &dyn Any) -> &dyn Any {
    if let Some(inner) = value.downcast_ref::<Box<dyn Any>>() {
        &**inner
    } else if let Some(inner) = value.downcast_ref::<Box<dyn Any + Send>>() {
        &**inner
    } else if let Some(inner) = value.downcast_ref::<Box<dyn Any + Send + Sync>>() {
        &**inner
    } else {
        value
    }
}

/// Fail when `value` is not a `T`.
///
/// A `Box<dyn Any>` passed by reference is checked by its contents. The failure is labeled with `T`'s short name unless `check` already carries
/// a label.
#[track_caller]
pub fn is_of_type<T: Any>(value: &dyn Any, check: Check<'_>) -> Result<(), AssertionFailure> {
    if value.is::<T>() || unboxed(value).is::<T>() {
        return Ok(());
    }

    let check = if check.has_type_label() {
        check
    } else {
        check.labeled(short_type_name::<T>())
    };
    Err(fail(&check))
}
