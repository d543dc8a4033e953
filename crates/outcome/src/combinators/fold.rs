//! Terminal combinators: `fold` and `for_each`
//!
//! These leave the outcome algebra and hand back a plain value or run a side
//! effect, so there is no outcome left to hold a captured error. Their `try_`
//! forms therefore return a callback's error to the caller as
//! [`OutcomeError`] instead of capturing it.
//!
//! # Examples
//!
//! ```rust
//! use outcome::prelude::*;
//!
//! fn greet(name: Outcome<&str>) -> String {
//!     name.fold("Person Not Found".to_string(), |_, n| format!("Hello, {n}"))
//! }
//!
//! assert_eq!(greet(Outcome::success("Jack")), "Hello, Jack");
//! assert_eq!(greet(Outcome::none()), "Person Not Found");
//! ```

use crate::core::Outcome;
use crate::error::{BoxError, OutcomeError};

impl<T> Outcome<T> {
    /// Combines `initial` with the success value, or returns `initial`.
    pub fn fold<A, F>(self, initial: A, folder: F) -> A
    where
        F: FnOnce(A, T) -> A,
    {
        match self {
            Self::Success(value) => folder(initial, value),
            Self::None | Self::Failure(_) => initial,
        }
    }

    /// Like [`fold`](Self::fold) with a fallible folder.
    ///
    /// # Errors
    ///
    /// Returns [`OutcomeError::FolderFailed`] carrying the folder's error.
    pub fn try_fold<A, E, F>(self, initial: A, folder: F) -> Result<A, OutcomeError>
    where
        F: FnOnce(A, T) -> Result<A, E>,
        E: Into<BoxError>,
    {
        match self {
            Self::Success(value) => folder(initial, value).map_err(OutcomeError::folder_failed),
            Self::None | Self::Failure(_) => Ok(initial),
        }
    }

    /// Runs `action` on the success value; does nothing otherwise.
    pub fn for_each<F>(self, action: F)
    where
        F: FnOnce(T),
    {
        if let Self::Success(value) = self {
            action(value);
        }
    }

    /// Like [`for_each`](Self::for_each) with a fallible action.
    ///
    /// # Errors
    ///
    /// Returns [`OutcomeError::ActionFailed`] carrying the action's error.
    pub fn try_for_each<F, E>(self, action: F) -> Result<(), OutcomeError>
    where
        F: FnOnce(T) -> Result<(), E>,
        E: Into<BoxError>,
    {
        match self {
            Self::Success(value) => action(value).map_err(OutcomeError::action_failed),
            Self::None | Self::Failure(_) => Ok(()),
        }
    }
}

/// Folds `outcome` into `initial`. See [`Outcome::fold`].
pub fn fold<T, A, F>(outcome: Outcome<T>, initial: A, folder: F) -> A
where
    F: FnOnce(A, T) -> A,
{
    outcome.fold(initial, folder)
}

/// Folds `outcome` with a fallible folder. See [`Outcome::try_fold`].
pub fn try_fold<T, A, E, F>(outcome: Outcome<T>, initial: A, folder: F) -> Result<A, OutcomeError>
where
    F: FnOnce(A, T) -> Result<A, E>,
    E: Into<BoxError>,
{
    outcome.try_fold(initial, folder)
}

/// Runs `action` on the success value of `outcome`. See [`Outcome::for_each`].
pub fn iterate<T, F>(outcome: Outcome<T>, action: F)
where
    F: FnOnce(T),
{
    outcome.for_each(action);
}

/// Runs a fallible `action` on the success value of `outcome`.
/// See [`Outcome::try_for_each`].
pub fn try_iterate<T, F, E>(outcome: Outcome<T>, action: F) -> Result<(), OutcomeError>
where
    F: FnOnce(T) -> Result<(), E>,
    E: Into<BoxError>,
{
    outcome.try_for_each(action)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Failure;
    use crate::hook::with_hook;
    use std::error::Error as _;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn folder(state: usize, input: &str) -> usize {
        input.len() + state
    }

    #[test]
    fn test_fold() {
        let test_string = "Hello";
        let initial_state = 2;

        assert_eq!(
            fold(Outcome::success(test_string), initial_state, folder),
            test_string.len() + initial_state
        );
        assert_eq!(fold(Outcome::<&str>::none(), initial_state, folder), initial_state);
        assert_eq!(fold(Outcome::<&str>::failure("boom"), initial_state, folder), initial_state);
    }

    #[test]
    fn test_try_fold_returns_folder_error() {
        let error = try_fold(Outcome::success("Test"), 2, |_, value| {
            Err::<usize, _>(format!("rejected {value}"))
        })
        .expect_err("folder error");

        assert!(error.is_folder_failed());
        assert_eq!(error.source().map(ToString::to_string).as_deref(), Some("rejected Test"));
    }

    #[test]
    fn test_try_fold_does_not_capture() {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&calls);

        let result = with_hook(
            move |_: &Failure| {
                seen.fetch_add(1, Ordering::SeqCst);
            },
            || try_fold(Outcome::success(1), 0, |_, _| Err::<i32, _>("nope")),
        );

        assert!(result.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_try_fold_skips_folder_for_none() {
        let folded = try_fold(Outcome::<i32>::none(), 2, |_, _| Err::<i32, _>("unreachable"));
        assert_eq!(folded.ok(), Some(2));
    }

    #[test]
    fn test_iterate() {
        let mut test_string = String::new();
        let new_value = "Hello";

        iterate(Outcome::<&str>::none(), |v| test_string = v.to_string());
        assert_ne!(test_string, new_value);

        iterate(Outcome::success(new_value), |v| test_string = v.to_string());
        assert_eq!(test_string, new_value);
    }

    #[test]
    fn test_iterate_runs_action_once() {
        let mut calls = 0;
        Outcome::success(()).for_each(|()| calls += 1);
        Outcome::<()>::failure("boom").for_each(|()| calls += 1);
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_try_iterate_returns_action_error() {
        let error = try_iterate(Outcome::success("Test"), |value| Err(format!("rejected {value}")))
            .expect_err("action error");

        assert!(error.is_action_failed());
        assert_eq!(error.cause().map(ToString::to_string).as_deref(), Some("rejected Test"));
        assert!(try_iterate(Outcome::<&str>::none(), |_| Err("unreachable")).is_ok());
    }
}
