//! Failure logging hook
//!
//! Every failure captured from a fresh error is handed, synchronously and
//! exactly once, to the failure hook in effect. Re-typing or cloning an
//! existing failure never reaches the hook.
//!
//! # Architecture
//!
//! - **Hooks**: implement [`FailureHook`] (or pass a closure) to observe failures
//! - **Registry**: one process-wide hook, overridable per thread with a guard
//!
//! # Example
//!
//! ```rust
//! use outcome::hook::{self, TracingHook};
//! use outcome::Outcome;
//!
//! // Report every captured failure through `tracing`
//! hook::set_hook(TracingHook::default());
//!
//! let parsed: Outcome<u8> = Outcome::wrap(|| "300".parse::<u8>());
//! assert!(parsed.is_failure());
//! # hook::reset_hook();
//! ```

mod hooks;
mod registry;

pub use hooks::{FailureHook, NoopHook, TracingHook};
pub use registry::{HookGuard, has_hook, reset_hook, set_hook, set_scoped, with_hook};

pub(crate) use registry::notify;
