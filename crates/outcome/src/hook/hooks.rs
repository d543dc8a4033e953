//! Failure hook trait and built-in hooks

use crate::core::Failure;

/// Receives every failure captured from a fresh error.
///
/// A hook is invoked synchronously, exactly once per captured error. It is
/// not invoked when an existing [`Failure`] is cloned or moved into an
/// outcome of another value type.
///
/// Any `Fn(&Failure) + Send + Sync` closure is a hook.
///
/// # Example
///
/// ```rust
/// use outcome::hook::FailureHook;
/// use outcome::Failure;
///
/// struct StderrHook;
///
/// impl FailureHook for StderrHook {
///     fn on_failure(&self, failure: &Failure) {
///         eprintln!("captured: {failure}");
///     }
/// }
/// ```
pub trait FailureHook: Send + Sync {
    /// Called with the failure that was just captured.
    ///
    /// Implementations should be fast and must not panic.
    fn on_failure(&self, failure: &Failure);
}

impl<F> FailureHook for F
where
    F: Fn(&Failure) + Send + Sync,
{
    fn on_failure(&self, failure: &Failure) {
        self(failure);
    }
}

/// Hook that ignores every failure. This is the process default.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHook;

impl FailureHook for NoopHook {
    fn on_failure(&self, _failure: &Failure) {}
}

/// Hook that reports failures as `tracing` events.
///
/// # Example
///
/// ```rust
/// use outcome::hook::{self, TracingHook};
///
/// hook::set_hook(TracingHook::new(tracing::Level::WARN));
/// # hook::reset_hook();
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TracingHook {
    level: tracing::Level,
}

impl TracingHook {
    /// Create a new tracing hook emitting at the specified level
    pub fn new(level: tracing::Level) -> Self {
        Self { level }
    }

    /// Level failures are reported at
    pub fn level(&self) -> tracing::Level {
        self.level
    }
}

impl Default for TracingHook {
    fn default() -> Self {
        Self::new(tracing::Level::ERROR)
    }
}

impl FailureHook for TracingHook {
    fn on_failure(&self, failure: &Failure) {
        let error = failure.error();

        macro_rules! log_at_level {
            ($level:expr) => {
                match $level {
                    tracing::Level::ERROR => tracing::error!(error = %error, details = ?error, "failure captured"),
                    tracing::Level::WARN => tracing::warn!(error = %error, details = ?error, "failure captured"),
                    tracing::Level::INFO => tracing::info!(error = %error, details = ?error, "failure captured"),
                    tracing::Level::DEBUG => tracing::debug!(error = %error, details = ?error, "failure captured"),
                    _ => tracing::trace!(error = %error, details = ?error, "failure captured"),
                }
            };
        }

        log_at_level!(self.level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hook::with_hook;
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[test]
    fn test_closure_is_a_hook() {
        let messages = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&messages);

        with_hook(
            move |failure: &Failure| sink.lock().push(failure.to_string()),
            || {
                let _ = Failure::new("first");
                let _ = Failure::new("second");
            },
        );

        assert_eq!(*messages.lock(), vec!["first".to_string(), "second".to_string()]);
    }

    #[test]
    fn test_tracing_hook_defaults_to_error_level() {
        assert_eq!(TracingHook::default().level(), tracing::Level::ERROR);
        assert_eq!(
            TracingHook::new(tracing::Level::DEBUG).level(),
            tracing::Level::DEBUG
        );
    }

    #[test]
    fn test_tracing_hook_runs_without_subscriber() {
        with_hook(TracingHook::new(tracing::Level::TRACE), || {
            let failure = Failure::new("no subscriber installed");
            assert_eq!(failure.to_string(), "no subscriber installed");
        });
    }
}
