//! The tri-state `Outcome` type

use std::fmt;

use super::conversion::IntoOutcome;
use super::failure::Failure;
use crate::error::BoxError;

/// Result of a computation that produced a value, produced nothing, or failed.
///
/// The three variants are mutually exclusive and fixed at construction.
/// `Success` never holds an absent value: optional values go through
/// [`Outcome::from_option`], which maps `None` to [`Outcome::None`].
///
/// # Examples
///
/// ```rust
/// use outcome::Outcome;
///
/// let found = Outcome::success(15);
/// assert!(found.is_success());
/// assert_eq!(found.value(), Some(&15));
///
/// let missing: Outcome<i32> = Outcome::from_option(None);
/// assert!(missing.is_none());
/// assert!(!missing.is_failure());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "an `Outcome` may hold a failure that should be inspected"]
pub enum Outcome<T> {
    /// The computation produced a value.
    Success(T),
    /// The computation produced nothing. Absence is not an error.
    None,
    /// The computation failed with a captured error.
    Failure(Failure),
}

/// Variant tag of an [`Outcome`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OutcomeKind {
    /// See [`Outcome::Success`].
    Success,
    /// See [`Outcome::None`].
    None,
    /// See [`Outcome::Failure`].
    Failure,
}

impl fmt::Display for OutcomeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => f.write_str("success"),
            Self::None => f.write_str("none"),
            Self::Failure => f.write_str("failure"),
        }
    }
}

// ============================================================================
// CONSTRUCTORS
// ============================================================================

impl<T> Outcome<T> {
    /// Wraps a present value.
    pub fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Returns the empty outcome.
    pub fn none() -> Self {
        Self::None
    }

    /// Wraps an optional value, mapping absence to [`Outcome::None`].
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Success(value),
            None => Self::None,
        }
    }

    /// Captures a fresh error. The failure hook is notified once.
    pub fn failure(error: impl Into<BoxError>) -> Self {
        Self::Failure(Failure::new(error))
    }

    /// Captures `error`, or the [`NullError`](crate::OutcomeError::NullError)
    /// placeholder when it is absent. The failure hook is notified once.
    pub fn failure_or_null<E>(error: Option<E>) -> Self
    where
        E: Into<BoxError>,
    {
        Self::Failure(Failure::from_option(error))
    }

    /// Wraps an already captured failure. The failure hook is not notified.
    pub fn from_failure(failure: Failure) -> Self {
        Self::Failure(failure)
    }

    /// Converts anything outcome-like into an `Outcome`.
    ///
    /// Passing an `Outcome<T>` returns it unchanged, so wrapping never nests.
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let once = Outcome::success(10);
    /// let twice: Outcome<i32> = Outcome::ret(once.clone());
    /// assert_eq!(once, twice);
    ///
    /// let parsed: Outcome<i32> = Outcome::ret("10".parse::<i32>());
    /// assert_eq!(parsed.value(), Some(&10));
    /// ```
    pub fn ret<R>(value: R) -> Self
    where
        R: IntoOutcome<T>,
    {
        value.into_outcome()
    }
}

// ============================================================================
// INSPECTION
// ============================================================================

impl<T> Outcome<T> {
    /// Returns the variant tag.
    pub fn kind(&self) -> OutcomeKind {
        match self {
            Self::Success(_) => OutcomeKind::Success,
            Self::None => OutcomeKind::None,
            Self::Failure(_) => OutcomeKind::Failure,
        }
    }

    /// Checks if this is [`Outcome::Success`].
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Checks if this is [`Outcome::None`]. Failures are not `None`.
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Checks if this is [`Outcome::Failure`].
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Returns the success value.
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::None | Self::Failure(_) => None,
        }
    }

    /// Consumes the outcome, returning the success value.
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::None | Self::Failure(_) => None,
        }
    }

    /// Returns the captured failure.
    pub fn failure_ref(&self) -> Option<&Failure> {
        match self {
            Self::Failure(failure) => Some(failure),
            Self::Success(_) | Self::None => None,
        }
    }

    /// Consumes the outcome, returning the captured failure.
    pub fn into_failure(self) -> Option<Failure> {
        match self {
            Self::Failure(failure) => Some(failure),
            Self::Success(_) | Self::None => None,
        }
    }

    /// Converts into a std `Result`, keeping absence as `Ok(None)`.
    ///
    /// ```rust
    /// use outcome::{Failure, Outcome};
    ///
    /// fn lookup(id: u32) -> Result<Option<String>, Failure> {
    ///     let name = Outcome::from_option((id == 1).then(|| "Jack".to_string()));
    ///     name.into_result()
    /// }
    ///
    /// assert_eq!(lookup(1).unwrap(), Some("Jack".to_string()));
    /// assert_eq!(lookup(2).unwrap(), None);
    /// ```
    pub fn into_result(self) -> Result<Option<T>, Failure> {
        match self {
            Self::Success(value) => Ok(Some(value)),
            Self::None => Ok(None),
            Self::Failure(failure) => Err(failure),
        }
    }

    /// Borrows the success value.
    pub fn as_ref(&self) -> Outcome<&T> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::None => Outcome::None,
            Self::Failure(failure) => Outcome::Failure(failure.clone()),
        }
    }
}

impl<T> Outcome<Outcome<T>> {
    /// Removes one level of nesting.
    pub fn flatten(self) -> Outcome<T> {
        match self {
            Self::Success(inner) => inner,
            Self::None => Outcome::None,
            Self::Failure(failure) => Outcome::Failure(failure),
        }
    }
}

impl<T> Default for Outcome<T> {
    fn default() -> Self {
        Self::None
    }
}

impl<T> From<Option<T>> for Outcome<T> {
    fn from(value: Option<T>) -> Self {
        Self::from_option(value)
    }
}

impl<T> From<Failure> for Outcome<T> {
    fn from(failure: Failure) -> Self {
        Self::from_failure(failure)
    }
}

impl<T> IntoIterator for Outcome<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_value().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Outcome<T> {
    type Item = &'a T;
    type IntoIter = std::option::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.value().into_iter()
    }
}

// ============================================================================
// SERDE-GATED: externally tagged, failures as their message
// ============================================================================

#[cfg(feature = "serde")]
impl<T> serde::Serialize for Outcome<T>
where
    T: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Success(value) => {
                serializer.serialize_newtype_variant("Outcome", 0, "Success", value)
            }
            Self::None => serializer.serialize_unit_variant("Outcome", 1, "None"),
            Self::Failure(failure) => serializer.serialize_newtype_variant(
                "Outcome",
                2,
                "Failure",
                &failure.to_string(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OutcomeError;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_success_and_none() {
        let hello = Outcome::success("Hello");
        assert!(hello.is_success());
        assert_eq!(hello.kind(), OutcomeKind::Success);
        assert_eq!(hello.value(), Some(&"Hello"));

        let empty: Outcome<&str> = Outcome::none();
        assert!(empty.is_none());
        assert!(!empty.is_failure());
        assert_eq!(empty.value(), None);
    }

    #[test]
    fn test_absent_value_is_none() {
        let missing: Outcome<String> = Outcome::from_option(None);
        assert_eq!(missing.kind(), OutcomeKind::None);

        let present: Outcome<String> = Some("x".to_string()).into();
        assert_eq!(present, Outcome::Success("x".to_string()));
    }

    #[test]
    fn test_failure_is_not_none() {
        let failed: Outcome<u8> = Outcome::failure("boom");
        assert!(failed.is_failure());
        assert!(!failed.is_none());
        assert!(!failed.is_success());
        assert_eq!(failed.kind().to_string(), "failure");
    }

    #[test]
    fn test_failure_or_null_substitutes_placeholder() {
        let failed: Outcome<u8> = Outcome::failure_or_null(None::<String>);
        let failure = failed.failure_ref().expect("failure");
        assert!(failure.outcome_error().is_some_and(OutcomeError::is_null_error));
    }

    #[test]
    fn test_ret_does_not_nest() {
        let once = Outcome::success(10);
        let twice: Outcome<i32> = Outcome::ret(once.clone());
        assert_eq!(once, twice);

        let failed: Outcome<i32> = Outcome::failure("boom");
        let rewrapped: Outcome<i32> = Outcome::ret(failed.clone());
        assert_eq!(failed, rewrapped);
    }

    #[test]
    fn test_into_result() {
        assert_eq!(Outcome::success(1).into_result().ok(), Some(Some(1)));
        assert_eq!(Outcome::<i32>::none().into_result().ok(), Some(None));
        assert!(Outcome::<i32>::failure("boom").into_result().is_err());
    }

    #[test]
    fn test_flatten() {
        let nested = Outcome::success(Outcome::success(3));
        assert_eq!(nested.flatten(), Outcome::success(3));

        let inner_none: Outcome<Outcome<i32>> = Outcome::success(Outcome::none());
        assert!(inner_none.flatten().is_none());
    }

    #[test]
    fn test_iterates_zero_or_one_item() {
        let collected: Vec<_> = Outcome::success(4).into_iter().collect();
        assert_eq!(collected, vec![4]);
        assert_eq!(Outcome::<i32>::none().into_iter().count(), 0);

        let failed: Outcome<i32> = Outcome::failure("boom");
        let mut seen = 0;
        for _ in &failed {
            seen += 1;
        }
        assert_eq!(seen, 0);
    }

    #[test]
    fn test_as_ref_shares_failure() {
        let failed: Outcome<String> = Outcome::failure("boom");
        let borrowed = failed.as_ref();
        assert_eq!(borrowed.failure_ref(), failed.failure_ref());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serialize_externally_tagged() {
        let success = serde_json::to_string(&Outcome::success(5)).expect("json");
        let none = serde_json::to_string(&Outcome::<i32>::none()).expect("json");
        let failure = serde_json::to_string(&Outcome::<i32>::failure("boom")).expect("json");

        assert_eq!(success, r#"{"Success":5}"#);
        assert_eq!(none, r#""None""#);
        assert_eq!(failure, r#"{"Failure":"boom"}"#);
    }
}
