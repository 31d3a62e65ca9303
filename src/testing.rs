//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixtures to avoid duplication.

#![doc(hidden)]

use crate::absent::Absent;
use std::cell::Cell;
use std::fmt;

/// A value that always reports itself as null.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Phantom;

impl Absent for Phantom {
    fn is_absent(&self) -> bool {
        true
    }
}

/// A handle whose target may have been destroyed.
///
/// Behaves like an object with an overridden null comparison: a destroyed
/// handle is still a value, but reports itself as absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Handle {
    id: Option<u32>,
}

impl Handle {
    pub fn live(id: u32) -> Self {
        Self { id: Some(id) }
    }

    pub fn destroyed() -> Self {
        Self { id: None }
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id {
            Some(id) => write!(f, "Handle#{}", id),
            None => f.write_str("Handle#destroyed"),
        }
    }
}

impl Absent for Handle {
    fn is_absent(&self) -> bool {
        self.id.is_none()
    }
}

/// Counts how many times a check evaluated one of its arguments.
#[derive(Debug, Default)]
pub struct Probe {
    hits: Cell<usize>,
}

impl Probe {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an evaluation and pass `value` through.
    pub fn touch<T>(&self, value: T) -> T {
        self.hits.set(self.hits.get() + 1);
        value
    }

    pub fn hits(&self) -> usize {
        self.hits.get()
    }
}

/// Integer division evaluated at runtime, so the compiler can't reject `1 / 0`.
pub fn divide(numerator: i32, denominator: i32) -> i32 {
    numerator / denominator
}
