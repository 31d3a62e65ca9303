// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! What a caller says about a check: the message, and optionally a type label
//! and a context value.
//!
//! A `Check` borrows everything. Nothing is formatted until a check actually
//! fails, so a passing check with a `&'static str` message costs a bool test.
//!
//! ```ignore
//! let check = Check::new("player must have a sprite")
//!     .of::<Player>()
//!     .context(&player_id);
//! ```

use std::any::type_name;
use std::fmt;

/// Message, type label, and context for a single check.
#[derive(Clone, Copy)]
pub struct Check<'a> {
    message: &'a str,
    type_label: Option<&'static str>,
    context: Option<&'a dyn fmt::Display>,
}

impl<'a> Check<'a> {
    /// A check described by `message` alone.
    pub const fn new(message: &'a str) -> Self {
        Self {
            message,
            type_label: None,
            context: None,
        }
    }

    /// Tag the check with the short name of `T`, e.g. `Player` rather than
    /// `game::entities::Player`.
    pub fn of<T: ?Sized>(self) -> Self {
        self.labeled(short_type_name::<T>())
    }

    /// Tag the check with an explicit type label.
    pub fn labeled(mut self, label: &'static str) -> Self {
        self.type_label = Some(label);
        self
    }

    /// Attach a value whose `Display` form prefixes the failure message.
    pub fn context(mut self, context: &'a dyn fmt::Display) -> Self {
        self.context = Some(context);
        self
    }

    pub fn message(&self) -> &'a str {
        self.message
    }

    pub fn type_label(&self) -> Option<&'static str> {
        self.type_label
    }

    pub(crate) fn has_type_label(&self) -> bool {
        self.type_label.is_some()
    }

    /// Render the context value, if any.
    pub(crate) fn render_context(&self) -> Option<String> {
        self.context.map(|context| context.to_string())
    }
}

impl fmt::Debug for Check<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Check")
            .field("message", &self.message)
            .field("type_label", &self.type_label)
            .field("context", &self.render_context())
            .finish()
    }
}

/// `type_name` without the module path of the outermost type.
///
/// Generic arguments keep their full paths: `Vec<alloc::string::String>`.
/// Names that don't start with a plain path (tuples, arrays, slices,
/// references, pointers, `dyn`) are returned whole.
pub fn short_type_name<T: ?Sized>() -> &'static str {
    let full = type_name::<T>();
    let base_end = full.find('<').unwrap_or(full.len());
    let base = &full[..base_end];
    let is_path = base
        .chars()
        .all(|c| c.is_alphanumeric() || c == '_' || c == ':');
    if !is_path {
        return full;
    }
    let start = base.rfind("::").map_or(0, |i| i + 2);
    &full[start..]
}
