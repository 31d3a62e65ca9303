//! Runtime checks that exist only while you are debugging.
//!
//! Every check validates a condition and hands a descriptive
//! [`AssertionFailure`] back to the caller when it does not hold. When checks
//! are inactive (release builds by default) the macros compile to `Ok(())` and
//! their arguments are never evaluated, so checks cost nothing in production.
//!
//! That also means checks are **not** input validation: never use them on
//! untrusted data, because a release build skips them entirely.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  macros.rs  │────▶│  assert.rs   │────▶│  failure.rs  │
//! │ (is_true!,  │     │ (is_true,    │     │ (Assertion-  │
//! │  check!)    │     │  is_equal..) │     │  Failure)    │
//! └─────────────┘     └──────────────┘     └──────────────┘
//!        │                   │
//!        ▼                   ▼
//! ┌─────────────┐     ┌──────────────┐
//! │   gate.rs   │     │  absent.rs   │
//! │ (is_active) │     │  (Absent)    │
//! └─────────────┘     └──────────────┘
//! ```
//!
//! # Turning checks on and off
//!
//! | Build                                   | Checks   |
//! |-----------------------------------------|----------|
//! | debug profile                           | active   |
//! | release profile                         | inactive |
//! | `--features force-checks`               | active   |
//! | `--features strip-checks`               | inactive |
//! | `TRIPWIRE_CHECKS=on` / `off` at build   | active / inactive |
//!
//! `strip-checks` and `TRIPWIRE_CHECKS=off` win over everything else.
//!
//! # Usage
//!
//! ```ignore
//! use tripwire::{is_not_null, is_true, expensive_is_true, AssertionFailure, CheckError};
//!
//! fn attach(parent: &Node, child: Option<&Node>) -> Result<(), AssertionFailure> {
//!     is_not_null!(child, "attach needs a child", type = Node)?;
//!     is_true!(parent.depth() < MAX_DEPTH, "tree too deep", context = parent.depth())?;
//!     Ok(())
//! }
//!
//! fn rebalance(tree: &Tree) -> Result<(), CheckError> {
//!     expensive_is_true!(|| tree.is_balanced(), "tree lost its balance")?;
//!     Ok(())
//! }
//! ```

mod absent;
pub mod assert;
mod check;
mod failure;
mod gate;
mod macros;

pub mod testing;

pub use absent::Absent;
pub use check::{short_type_name, Check};
pub use failure::{AssertionFailure, CheckError, MisuseError};
pub use gate::{is_active, ACTIVE};
