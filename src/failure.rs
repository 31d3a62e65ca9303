// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The two ways a check can go wrong.
//!
//! - [`AssertionFailure`]: the checked condition did not hold. Returned to the
//!   caller, who decides whether to halt, log, or recover.
//! - [`MisuseError`]: the caller used the API wrong (a missing predicate).
//!   Reported even when checks are compiled out.
//!
//! [`CheckError`] joins them for the one operation that can produce both.
//!
//! # Message format
//!
//! ```text
//! [Context object: <context>][<TypeLabel> ]<message>
//! ```
//!
//! Context comes first, then the type label, then the message, with no
//! separator between the prefixes.

use crate::check::Check;
use std::fmt;
use std::panic::Location;

/// A check whose condition did not hold.
///
/// Only built at the moment a check fails, and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssertionFailure {
    message: String,
    type_label: Option<&'static str>,
    context: Option<String>,
    location: &'static Location<'static>,
}

impl AssertionFailure {
    /// Build the failure for `check` and report it to the `log` facade.
    pub(crate) fn from_check(check: &Check<'_>, location: &'static Location<'static>) -> Self {
        let failure = Self {
            message: check.message().to_owned(),
            type_label: check.type_label(),
            context: check.render_context(),
            location,
        };
        log::debug!(target: "tripwire", "check failed at {}: {}", location, failure);
        failure
    }

    /// The caller's description of the violated condition.
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn type_label(&self) -> Option<&'static str> {
        self.type_label
    }

    /// The `Display` form of the context value, if one was attached.
    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }

    /// Where the failing check was written.
    pub fn location(&self) -> &'static Location<'static> {
        self.location
    }
}

impl fmt::Display for AssertionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(context) = &self.context {
            write!(f, "Context object: {}", context)?;
        }
        if let Some(label) = self.type_label {
            write!(f, "<{}> ", label)?;
        }
        f.write_str(&self.message)
    }
}

impl std::error::Error for AssertionFailure {}

#[cfg(feature = "serde")]
impl serde::Serialize for AssertionFailure {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("AssertionFailure", 6)?;
        state.serialize_field("message", &self.message)?;
        state.serialize_field("type_label", &self.type_label)?;
        state.serialize_field("context", &self.context)?;
        state.serialize_field("file", self.location.file())?;
        state.serialize_field("line", &self.location.line())?;
        state.serialize_field("column", &self.location.column())?;
        state.end()
    }
}

/// The assertion API itself was called incorrectly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MisuseError {
    /// `expensive_is_true` was handed `None` instead of a predicate.
    MissingPredicate {
        location: &'static Location<'static>,
    },
}

impl MisuseError {
    pub(crate) fn missing_predicate(location: &'static Location<'static>) -> Self {
        let error = MisuseError::MissingPredicate { location };
        log::error!(target: "tripwire", "{}", error);
        error
    }

    pub fn location(&self) -> &'static Location<'static> {
        match self {
            MisuseError::MissingPredicate { location } => *location,
        }
    }
}

impl fmt::Display for MisuseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MisuseError::MissingPredicate { location } => {
                write!(f, "expensive_is_true called without a predicate at {}", location)
            }
        }
    }
}

impl std::error::Error for MisuseError {}

/// Result of `expensive_is_true`: the predicate failed, or there was none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckError {
    Failed(AssertionFailure),
    Misuse(MisuseError),
}

impl CheckError {
    pub fn is_failure(&self) -> bool {
        matches!(self, CheckError::Failed(_))
    }

    pub fn is_misuse(&self) -> bool {
        matches!(self, CheckError::Misuse(_))
    }
}

impl fmt::Display for CheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckError::Failed(failure) => fmt::Display::fmt(failure, f),
            CheckError::Misuse(misuse) => fmt::Display::fmt(misuse, f),
        }
    }
}

impl std::error::Error for CheckError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CheckError::Failed(failure) => Some(failure),
            CheckError::Misuse(misuse) => Some(misuse),
        }
    }
}

impl From<AssertionFailure> for CheckError {
    fn from(failure: AssertionFailure) -> Self {
        CheckError::Failed(failure)
    }
}

impl From<MisuseError> for CheckError {
    fn from(misuse: MisuseError) -> Self {
        CheckError::Misuse(misuse)
    }
}
