//! # outcome
//!
//! A tri-state result type and the combinators to chain it.
//!
//! An [`Outcome<T>`] is exactly one of:
//!
//! - `Success(T)` - the computation produced a value,
//! - `None` - it produced nothing, which is not an error,
//! - `Failure(Failure)` - it failed, and the error was captured.
//!
//! ## Quick Start
//!
//! ```rust
//! use outcome::prelude::*;
//!
//! fn message(input: &str) -> String {
//!     wrap(|| input.trim().parse::<i32>())
//!         .map(i32::abs)
//!         .filter(|id| *id != 0)
//!         .fold("Person Not Found".to_string(), |_, id| format!("Person Id {id}"))
//! }
//!
//! assert_eq!(message(" -123 "), "Person Id 123");
//! assert_eq!(message("0"), "Person Not Found");
//! assert_eq!(message("abc"), "Person Not Found");
//! ```
//!
//! ## Error Model
//!
//! - Errors returned by wrapped code or by `bind`/`try_map`/`try_filter`
//!   callbacks are captured into a [`Failure`] and never escape.
//! - Each freshly captured error is reported once to the active
//!   [failure hook](hook); moving a failure along a chain is silent.
//! - The terminal `try_fold`/`try_for_each` return a callback's error to the
//!   caller as [`OutcomeError`].

#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::module_name_repetitions)]

// === Core Types ===
pub mod core;

// === Combinator Library ===
pub mod combinators;

// === Failure Hook ===
pub mod hook;

// === Library Errors ===
pub mod error;

// === Public API Exports ===

/// Tri-state outcome type
pub use crate::core::{Outcome, OutcomeKind};

/// Captured error handle
pub use crate::core::Failure;

/// Conversion from outcome-like values
pub use crate::core::IntoOutcome;

/// Running fallible code into an outcome
pub use crate::core::{
    try_wrap_action_with, try_wrap_with, wrap, wrap_action, wrap_action_with, wrap_with,
};

/// Library-raised error and boxed error alias
pub use crate::error::{BoxError, OutcomeError};

/// Convenient prelude with everything you need
pub mod prelude {
    pub use crate::combinators;
    pub use crate::hook::{FailureHook, TracingHook};
    pub use crate::{
        BoxError, Failure, IntoOutcome, Outcome, OutcomeError, OutcomeKind, try_wrap_action_with,
        try_wrap_with, wrap, wrap_action, wrap_action_with, wrap_with,
    };
}
