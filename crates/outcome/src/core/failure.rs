//! Captured errors carried by the `Failure` variant

use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

use crate::error::{BoxError, OutcomeError};
use crate::hook;

type SharedError = Arc<dyn StdError + Send + Sync + 'static>;

/// An error captured into an [`Outcome`](crate::Outcome).
///
/// `Failure` is a shared handle: cloning it, or moving it into an outcome of
/// another value type, keeps pointing at the same captured error. Only
/// [`Failure::new`] and [`Failure::from_option`] capture a *fresh* error, and
/// only they notify the failure hook.
///
/// Two failures compare equal when they share the same captured error.
#[derive(Clone)]
pub struct Failure {
    error: SharedError,
}

impl Failure {
    /// Captures a fresh error and notifies the active failure hook once.
    pub fn new(error: impl Into<BoxError>) -> Self {
        let error: BoxError = error.into();
        let failure = Self {
            error: Arc::from(error),
        };
        hook::notify(&failure);
        failure
    }

    /// Captures `error`, substituting [`OutcomeError::NullError`] when absent.
    pub fn from_option<E>(error: Option<E>) -> Self
    where
        E: Into<BoxError>,
    {
        match error {
            Some(error) => Self::new(error),
            None => Self::new(OutcomeError::NullError),
        }
    }

    /// Returns the captured error.
    pub fn error(&self) -> &(dyn StdError + Send + Sync + 'static) {
        self.error.as_ref()
    }

    /// Returns a shared handle to the captured error.
    pub fn shared_error(&self) -> SharedError {
        Arc::clone(&self.error)
    }

    /// Downcasts the captured error to a concrete type.
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: StdError + 'static,
    {
        self.error.downcast_ref::<E>()
    }

    /// Checks if the captured error is of type `E`.
    pub fn is<E>(&self) -> bool
    where
        E: StdError + 'static,
    {
        self.error.is::<E>()
    }

    /// Returns the library-raised error, if that is what was captured.
    pub fn outcome_error(&self) -> Option<&OutcomeError> {
        self.downcast_ref::<OutcomeError>()
    }

    /// Checks if both handles point at the same captured error.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.error, &other.error)
    }
}

impl PartialEq for Failure {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for Failure {}

impl fmt::Debug for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Failure").field(&self.error).finish()
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.error, f)
    }
}

impl StdError for Failure {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(self.error.as_ref())
    }
}
