//! Conversions from outcome-like values into [`Outcome`]
//!
//! [`IntoOutcome`] is what `wrap` and `bind` accept from a callback:
//!
//! | Value | Becomes |
//! |---|---|
//! | `Outcome<T>` | itself, unchanged (never nested) |
//! | `Option<T>` | `Success` or `None` |
//! | `Result<T, E>` | `Success` or `Failure` |
//! | `Result<Option<T>, E>` | `Success`, `None` or `Failure` |
//! | `Result<Outcome<T>, E>` | the inner outcome, or `Failure` |

use super::failure::Failure;
use super::outcome::Outcome;
use crate::error::BoxError;

/// Trait for values that can be resolved into an [`Outcome`]
///
/// # Examples
///
/// ```rust
/// use outcome::prelude::*;
///
/// let parsed: Outcome<i32> = "15".parse::<i32>().into_outcome();
/// assert_eq!(parsed.value(), Some(&15));
///
/// let absent: Outcome<i32> = None.into_outcome();
/// assert!(absent.is_none());
/// ```
pub trait IntoOutcome<T>: Sized {
    /// Resolves into an outcome that needs no capture, or the raw error that
    /// still has to be captured.
    ///
    /// Keeping the raw error uncaptured lets `wrap_with` transform it before
    /// the failure hook sees it.
    fn resolve(self) -> Result<Outcome<T>, BoxError>;

    /// Resolves into an outcome, capturing any raw error as a fresh failure.
    fn into_outcome(self) -> Outcome<T> {
        match self.resolve() {
            Ok(outcome) => outcome,
            Err(error) => Outcome::Failure(Failure::new(error)),
        }
    }
}

impl<T> IntoOutcome<T> for Outcome<T> {
    fn resolve(self) -> Result<Outcome<T>, BoxError> {
        Ok(self)
    }
}

impl<T> IntoOutcome<T> for Option<T> {
    fn resolve(self) -> Result<Outcome<T>, BoxError> {
        Ok(Outcome::from_option(self))
    }
}

impl<T, E> IntoOutcome<T> for Result<T, E>
where
    E: Into<BoxError>,
{
    fn resolve(self) -> Result<Outcome<T>, BoxError> {
        self.map(Outcome::Success).map_err(Into::into)
    }
}

impl<T, E> IntoOutcome<T> for Result<Option<T>, E>
where
    E: Into<BoxError>,
{
    fn resolve(self) -> Result<Outcome<T>, BoxError> {
        self.map(Outcome::from_option).map_err(Into::into)
    }
}

impl<T, E> IntoOutcome<T> for Result<Outcome<T>, E>
where
    E: Into<BoxError>,
{
    fn resolve(self) -> Result<Outcome<T>, BoxError> {
        self.map_err(Into::into)
    }
}
