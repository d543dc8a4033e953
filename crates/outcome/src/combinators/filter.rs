//! Predicate combinators: `filter`, `exists` and `count`
//!
//! Predicates only ever see a `Success` value. `None` and `Failure` pass
//! through `filter` unchanged, answer `false` to `exists` and count as zero.

use crate::core::{Outcome, wrap};
use crate::error::BoxError;

impl<T> Outcome<T> {
    /// Keeps the success value only if `predicate` holds, otherwise `None`.
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// assert!(Outcome::success(15).filter(|v| *v == 20).is_none());
    /// assert_eq!(Outcome::success(15).filter(|v| *v < 20).value(), Some(&15));
    /// ```
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Success(value) => {
                if predicate(&value) {
                    Self::Success(value)
                } else {
                    Self::None
                }
            }
            other => other,
        }
    }

    /// Like [`filter`](Self::filter) with a fallible predicate.
    ///
    /// An `Err` from `predicate` becomes a `Failure`.
    pub fn try_filter<P, E>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> Result<bool, E>,
        E: Into<BoxError>,
    {
        match self {
            Self::Success(value) => match wrap(|| predicate(&value)) {
                Outcome::Success(true) => Self::Success(value),
                Outcome::Success(false) | Outcome::None => Self::None,
                Outcome::Failure(failure) => Self::Failure(failure),
            },
            other => other,
        }
    }

    /// Checks if this is a `Success` whose value satisfies `predicate`.
    pub fn exists<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        self.value().is_some_and(predicate)
    }

    /// Like [`exists`](Self::exists) with a fallible predicate.
    ///
    /// A failing predicate answers `false`; its error is still captured and
    /// reported to the failure hook.
    pub fn try_exists<P, E>(&self, predicate: P) -> bool
    where
        P: FnOnce(&T) -> Result<bool, E>,
        E: Into<BoxError>,
    {
        match self.value() {
            Some(value) => matches!(wrap(|| predicate(value)), Outcome::Success(true)),
            None => false,
        }
    }

    /// Returns 1 for `Success`, 0 for `None` and `Failure`.
    pub fn count(&self) -> usize {
        usize::from(self.is_success())
    }
}

/// Filters `outcome` by `predicate`. See [`Outcome::filter`].
pub fn filter<T, P>(outcome: Outcome<T>, predicate: P) -> Outcome<T>
where
    P: FnOnce(&T) -> bool,
{
    outcome.filter(predicate)
}

/// Filters `outcome` by a fallible `predicate`. See [`Outcome::try_filter`].
pub fn try_filter<T, P, E>(outcome: Outcome<T>, predicate: P) -> Outcome<T>
where
    P: FnOnce(&T) -> Result<bool, E>,
    E: Into<BoxError>,
{
    outcome.try_filter(predicate)
}

/// See [`Outcome::exists`].
pub fn exists<T, P>(outcome: &Outcome<T>, predicate: P) -> bool
where
    P: FnOnce(&T) -> bool,
{
    outcome.exists(predicate)
}

/// See [`Outcome::try_exists`].
pub fn try_exists<T, P, E>(outcome: &Outcome<T>, predicate: P) -> bool
where
    P: FnOnce(&T) -> Result<bool, E>,
    E: Into<BoxError>,
{
    outcome.try_exists(predicate)
}

/// See [`Outcome::count`].
pub fn count<T>(outcome: &Outcome<T>) -> usize {
    outcome.count()
}
