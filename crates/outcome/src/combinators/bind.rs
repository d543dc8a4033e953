//! Sequencing combinators: `bind`, `map` and `try_map`
//!
//! All three run their callback only for `Success`. `None` stays `None`, and
//! a `Failure` is moved into the new outcome type as is, without reaching
//! the failure hook a second time.
//!
//! # Examples
//!
//! ```rust
//! use outcome::prelude::*;
//!
//! let parsed: Outcome<i32> = Outcome::success("15").bind(|s| s.parse::<i32>());
//! assert_eq!(parsed.value(), Some(&15));
//!
//! let doubled = parsed.map(|n| n * 2);
//! assert_eq!(doubled.value(), Some(&30));
//! ```

use crate::core::{IntoOutcome, Outcome, wrap};
use crate::error::BoxError;

impl<T> Outcome<T> {
    /// Chains a computation that itself produces something outcome-like.
    ///
    /// The binder's result is resolved like [`wrap`]: an `Err` becomes a
    /// `Failure` instead of escaping, `Ok(None)`/`None` becomes `None`, and a
    /// returned `Outcome` is used as is.
    pub fn bind<U, R, F>(self, binder: F) -> Outcome<U>
    where
        F: FnOnce(T) -> R,
        R: IntoOutcome<U>,
    {
        match self {
            Self::Success(value) => wrap(|| binder(value)),
            Self::None => Outcome::None,
            Self::Failure(failure) => Outcome::Failure(failure),
        }
    }

    /// Transforms the success value.
    ///
    /// The mapped value is kept as is, so a mapping returning `Option<U>`
    /// gives `Outcome<Option<U>>`. Use [`bind`](Self::bind) for an
    /// `Option`-returning mapping, which turns `None` into [`Outcome::None`].
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let nested = Outcome::success(1).map(|_| None::<i32>);
    /// assert!(nested.is_success());
    ///
    /// let absent: Outcome<i32> = Outcome::success(1).bind(|_| None::<i32>);
    /// assert!(absent.is_none());
    /// ```
    pub fn map<U, F>(self, mapping: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Outcome::Success(mapping(value)),
            Self::None => Outcome::None,
            Self::Failure(failure) => Outcome::Failure(failure),
        }
    }

    /// Transforms the success value with a fallible mapping.
    ///
    /// An `Err` from `mapping` becomes a `Failure`.
    pub fn try_map<U, E, F>(self, mapping: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Result<U, E>,
        E: Into<BoxError>,
    {
        self.bind(mapping)
    }
}

/// Chains `binder` onto `outcome`. See [`Outcome::bind`].
pub fn bind<T, U, R, F>(outcome: Outcome<T>, binder: F) -> Outcome<U>
where
    F: FnOnce(T) -> R,
    R: IntoOutcome<U>,
{
    outcome.bind(binder)
}

/// Maps the success value of `outcome`. See [`Outcome::map`].
pub fn map<T, U, F>(outcome: Outcome<T>, mapping: F) -> Outcome<U>
where
    F: FnOnce(T) -> U,
{
    outcome.map(mapping)
}

/// Maps the success value of `outcome` fallibly. See [`Outcome::try_map`].
pub fn try_map<T, U, E, F>(outcome: Outcome<T>, mapping: F) -> Outcome<U>
where
    F: FnOnce(T) -> Result<U, E>,
    E: Into<BoxError>,
{
    outcome.try_map(mapping)
}
