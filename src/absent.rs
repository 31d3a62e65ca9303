// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The "is this effectively null" test behind `is_not_null` and `are_not_null`.
//!
//! Rust values are never null; absence is spelled by the type. [`Absent`] covers
//! the shapes that can be empty:
//!
//! | Type                         | Absent when                          |
//! |------------------------------|--------------------------------------|
//! | `Option<T>`                  | `None`                               |
//! | `*const T`, `*mut T`         | the pointer is null                  |
//! | `rc::Weak<T>`, `sync::Weak<T>` | no strong owners remain            |
//! | `&T`, `&mut T`, `Box<T>`, `Rc<T>`, `Arc<T>` | the target is absent  |
//!
//! A type with its own notion of "empty" (a handle to a destroyed object, a
//! sentinel id) implements `is_absent` and is treated exactly like `None`.

use std::rc::{self, Rc};
use std::sync::{self, Arc};

/// A value that can stand for "no object".
pub trait Absent {
    /// `true` when this value should be treated as null.
    fn is_absent(&self) -> bool;
}

impl<T> Absent for Option<T> {
    #[inline]
    fn is_absent(&self) -> bool {
        self.is_none()
    }
}

impl<T: ?Sized> Absent for *const T {
    #[inline]
    fn is_absent(&self) -> bool {
        self.is_null()
    }
}

impl<T: ?Sized> Absent for *mut T {
    #[inline]
    fn is_absent(&self) -> bool {
        self.is_null()
    }
}

impl<T: ?Sized> Absent for rc::Weak<T> {
    #[inline]
    fn is_absent(&self) -> bool {
        self.strong_count() == 0
    }
}

impl<T: ?Sized> Absent for sync::Weak<T> {
    #[inline]
    fn is_absent(&self) -> bool {
        self.strong_count() == 0
    }
}

impl<T: Absent + ?Sized> Absent for &T {
    #[inline]
    fn is_absent(&self) -> bool {
        (**self).is_absent()
    }
}

impl<T: Absent + ?Sized> Absent for &mut T {
    #[inline]
    fn is_absent(&self) -> bool {
        (**self).is_absent()
    }
}

impl<T: Absent + ?Sized> Absent for Box<T> {
    #[inline]
    fn is_absent(&self) -> bool {
        (**self).is_absent()
    }
}

impl<T: Absent + ?Sized> Absent for Rc<T> {
    #[inline]
    fn is_absent(&self) -> bool {
        (**self).is_absent()
    }
}

impl<T: Absent + ?Sized> Absent for Arc<T> {
    #[inline]
    fn is_absent(&self) -> bool {
        (**self).is_absent()
    }
}
