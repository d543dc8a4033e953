//! Library-raised errors
//!
//! Everything a caller's closure returns as `Err` is captured into a
//! [`Failure`](crate::Failure) and never crosses the library boundary. The
//! only errors the library raises itself are the variants of
//! [`OutcomeError`]:
//!
//! - the placeholder stored when a failure is built without an error,
//! - the error stored when an error handler passed to `try_wrap_with` fails,
//! - the error returned by the terminal `try_fold` / `try_for_each`
//!   operators when their callback fails.
//!
//! # Examples
//!
//! ```rust
//! use outcome::prelude::*;
//!
//! let err = Outcome::success("Test")
//!     .try_fold(2, |_, value| Err::<usize, _>(format!("bad {value}")))
//!     .unwrap_err();
//!
//! assert!(err.is_folder_failed());
//! assert_eq!(err.cause().map(ToString::to_string), Some("bad Test".into()));
//! ```

use std::error::Error as StdError;

/// Boxed, thread-safe error accepted everywhere an error is captured.
///
/// Every `std::error::Error + Send + Sync` type converts into it, as do
/// `String` and `&str`.
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

// ============================================================================
// OUTCOME ERROR TYPE
// ============================================================================

/// Error raised by the library itself rather than by caller code.
///
/// Variants that stand in for a failing callback keep that callback's error
/// as their [`source`](StdError::source).
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum OutcomeError {
    /// A failure was constructed from an absent error.
    #[error("Null Exception Passed")]
    NullError,

    /// The error handler given to `try_wrap_with` returned an error.
    ///
    /// The original error is dropped; `source` is the handler's own error.
    #[error("Exception Handler threw an exception: {source}")]
    HandlerFailed {
        #[source]
        source: BoxError,
    },

    /// The folder given to `try_fold` returned an error.
    #[error("Folder function threw an exception: {source}")]
    FolderFailed {
        #[source]
        source: BoxError,
    },

    /// The action given to `try_for_each` returned an error.
    #[error("Iter action threw an exception: {source}")]
    ActionFailed {
        #[source]
        source: BoxError,
    },
}

// ============================================================================
// CONSTRUCTOR HELPERS
// ============================================================================

impl OutcomeError {
    /// Creates the placeholder for an absent error.
    #[must_use]
    pub fn null_error() -> Self {
        Self::NullError
    }

    /// Creates a handler failure from the handler's own error.
    pub fn handler_failed(source: impl Into<BoxError>) -> Self {
        Self::HandlerFailed {
            source: source.into(),
        }
    }

    /// Creates a folder failure from the folder's error.
    pub fn folder_failed(source: impl Into<BoxError>) -> Self {
        Self::FolderFailed {
            source: source.into(),
        }
    }

    /// Creates an action failure from the action's error.
    pub fn action_failed(source: impl Into<BoxError>) -> Self {
        Self::ActionFailed {
            source: source.into(),
        }
    }

    /// Returns the callback error this error wraps, if any.
    pub fn cause(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        match self {
            Self::NullError => None,
            Self::HandlerFailed { source }
            | Self::FolderFailed { source }
            | Self::ActionFailed { source } => Some(source.as_ref()),
        }
    }

    /// Checks if this is the absent-error placeholder.
    pub fn is_null_error(&self) -> bool {
        matches!(self, Self::NullError)
    }

    /// Checks if this error replaced a failing error handler.
    pub fn is_handler_failed(&self) -> bool {
        matches!(self, Self::HandlerFailed { .. })
    }

    /// Checks if this error came out of `try_fold`.
    pub fn is_folder_failed(&self) -> bool {
        matches!(self, Self::FolderFailed { .. })
    }

    /// Checks if this error came out of `try_for_each`.
    pub fn is_action_failed(&self) -> bool {
        matches!(self, Self::ActionFailed { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_null_error_has_no_cause() {
        let error = OutcomeError::null_error();
        assert!(error.is_null_error());
        assert!(error.cause().is_none());
        assert!(error.source().is_none());
        insta::assert_snapshot!(error.to_string(), @"Null Exception Passed");
    }

    #[test]
    fn test_handler_failed_keeps_handler_error_as_source() {
        let error = OutcomeError::handler_failed(io::Error::other("handler broke"));
        assert!(error.is_handler_failed());

        let source = error.source().expect("source");
        assert_eq!(source.to_string(), "handler broke");
        assert!(source.downcast_ref::<io::Error>().is_some());
        insta::assert_snapshot!(
            error.to_string(),
            @"Exception Handler threw an exception: handler broke"
        );
    }

    #[test]
    fn test_folder_and_action_failures() {
        let folder = OutcomeError::folder_failed("bad fold");
        let action = OutcomeError::action_failed("bad action");

        assert!(folder.is_folder_failed());
        assert!(!folder.is_action_failed());
        assert!(action.is_action_failed());
        assert_eq!(folder.cause().map(ToString::to_string).as_deref(), Some("bad fold"));
        insta::assert_snapshot!(action.to_string(), @"Iter action threw an exception: bad action");
    }
}
