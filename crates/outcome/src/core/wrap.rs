//! Running fallible code and capturing what it produced
//!
//! `wrap` never lets the wrapped function's error escape: an `Err` always
//! ends up as [`Outcome::Failure`]. The `_with` variants transform the raw
//! error before it is captured, so the failure hook sees only the final
//! error.
//!
//! Panics are not errors-as-values and are left to unwind.
//!
//! # Examples
//!
//! ```rust
//! use outcome::{wrap, wrap_with, Outcome};
//!
//! let parsed: Outcome<i32> = wrap(|| "6".parse::<i32>());
//! assert_eq!(parsed.value(), Some(&6));
//!
//! let invalid: Outcome<i32> = wrap_with(
//!     || "six".parse::<i32>(),
//!     |error| format!("Invalid Input: {error}"),
//! );
//! assert_eq!(
//!     invalid.failure_ref().map(ToString::to_string).as_deref(),
//!     Some("Invalid Input: invalid digit found in string"),
//! );
//! ```

use super::conversion::IntoOutcome;
use super::failure::Failure;
use super::outcome::Outcome;
use crate::error::{BoxError, OutcomeError};

/// Runs `function` and captures what it returns.
///
/// `Ok` values become `Success` (or `None` for `Ok(None)`), `Err` becomes
/// `Failure`, and a returned `Outcome` is passed through unchanged.
///
/// A closure that only ever returns `Err` must name its `Ok` type
/// (`Err::<i32, _>(e)`), since `T`, `Option<T>` and `Outcome<T>` would all fit.
pub fn wrap<T, R, F>(function: F) -> Outcome<T>
where
    F: FnOnce() -> R,
    R: IntoOutcome<T>,
{
    function().into_outcome()
}

/// Runs `function`, passing any error through `handler` before capturing it.
pub fn wrap_with<T, R, F, H, M>(function: F, handler: H) -> Outcome<T>
where
    F: FnOnce() -> R,
    R: IntoOutcome<T>,
    H: FnOnce(BoxError) -> M,
    M: Into<BoxError>,
{
    match function().resolve() {
        Ok(outcome) => outcome,
        Err(error) => Outcome::Failure(Failure::new(handler(error))),
    }
}

/// Runs `function`, passing any error through a fallible `handler`.
///
/// When the handler itself fails, the failure carries
/// [`OutcomeError::HandlerFailed`] with the handler's error as its source.
///
/// ```rust
/// use outcome::{try_wrap_with, Outcome, OutcomeError};
///
/// let failed: Outcome<i32> = try_wrap_with(
///     || "six".parse::<i32>(),
///     |_| Err::<String, _>("handler gave up"),
/// );
///
/// let failure = failed.failure_ref().unwrap();
/// assert!(failure.outcome_error().is_some_and(OutcomeError::is_handler_failed));
/// ```
pub fn try_wrap_with<T, R, F, H, M, HE>(function: F, handler: H) -> Outcome<T>
where
    F: FnOnce() -> R,
    R: IntoOutcome<T>,
    H: FnOnce(BoxError) -> Result<M, HE>,
    M: Into<BoxError>,
    HE: Into<BoxError>,
{
    match function().resolve() {
        Ok(outcome) => outcome,
        Err(error) => Outcome::Failure(handle(error, handler)),
    }
}

fn handle<H, M, HE>(error: BoxError, handler: H) -> Failure
where
    H: FnOnce(BoxError) -> Result<M, HE>,
    M: Into<BoxError>,
    HE: Into<BoxError>,
{
    match handler(error) {
        Ok(mapped) => Failure::new(mapped),
        Err(handler_error) => {
            let handler_error: BoxError = handler_error.into();
            tracing::debug!(error = %handler_error, "error handler failed, original error dropped");
            Failure::new(OutcomeError::handler_failed(handler_error))
        }
    }
}

/// Runs a side-effecting `action`; success is `Success(true)`.
pub fn wrap_action<F, E>(action: F) -> Outcome<bool>
where
    F: FnOnce() -> Result<(), E>,
    E: Into<BoxError>,
{
    wrap(|| action().map(|()| true))
}

/// Runs `action`, passing any error through `handler` before capturing it.
pub fn wrap_action_with<F, E, H, M>(action: F, handler: H) -> Outcome<bool>
where
    F: FnOnce() -> Result<(), E>,
    E: Into<BoxError>,
    H: FnOnce(BoxError) -> M,
    M: Into<BoxError>,
{
    wrap_with(|| action().map(|()| true), handler)
}

/// Runs `action`, passing any error through a fallible `handler`.
pub fn try_wrap_action_with<F, E, H, M, HE>(action: F, handler: H) -> Outcome<bool>
where
    F: FnOnce() -> Result<(), E>,
    E: Into<BoxError>,
    H: FnOnce(BoxError) -> Result<M, HE>,
    M: Into<BoxError>,
    HE: Into<BoxError>,
{
    try_wrap_with(|| action().map(|()| true), handler)
}

impl<T> Outcome<T> {
    /// See [`wrap`].
    pub fn wrap<R, F>(function: F) -> Self
    where
        F: FnOnce() -> R,
        R: IntoOutcome<T>,
    {
        wrap(function)
    }

    /// See [`wrap_with`].
    pub fn wrap_with<R, F, H, M>(function: F, handler: H) -> Self
    where
        F: FnOnce() -> R,
        R: IntoOutcome<T>,
        H: FnOnce(BoxError) -> M,
        M: Into<BoxError>,
    {
        wrap_with(function, handler)
    }

    /// See [`try_wrap_with`].
    pub fn try_wrap_with<R, F, H, M, HE>(function: F, handler: H) -> Self
    where
        F: FnOnce() -> R,
        R: IntoOutcome<T>,
        H: FnOnce(BoxError) -> Result<M, HE>,
        M: Into<BoxError>,
        HE: Into<BoxError>,
    {
        try_wrap_with(function, handler)
    }
}
