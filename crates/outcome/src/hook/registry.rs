//! Process-wide and thread-scoped storage for the active failure hook
//!
//! The hook in effect for a captured failure is resolved in order:
//!
//! 1. the innermost scoped hook of the current thread ([`with_hook`],
//!    [`set_scoped`]),
//! 2. the process-wide hook ([`set_hook`]),
//! 3. nothing, which behaves like [`NoopHook`](super::NoopHook).
//!
//! # Thread Safety
//!
//! The process-wide hook sits behind a `parking_lot::RwLock`: setting it takes
//! the write lock, notifying takes the read lock just long enough to clone the
//! hook handle. The hook itself runs with no lock held, so a hook may capture
//! failures of its own.

use std::cell::RefCell;
use std::marker::PhantomData;
use std::sync::Arc;

use parking_lot::RwLock;

use super::hooks::FailureHook;
use crate::core::Failure;

type SharedHook = Arc<dyn FailureHook>;

static GLOBAL_HOOK: RwLock<Option<SharedHook>> = parking_lot::const_rwlock(None);

thread_local! {
    // innermost scoped hook last
    static SCOPED_HOOKS: RefCell<Vec<SharedHook>> = const { RefCell::new(Vec::new()) };
}

/// Install the process-wide failure hook, replacing the previous one.
///
/// # Example
///
/// ```rust
/// use outcome::hook;
/// use outcome::Failure;
///
/// hook::set_hook(|failure: &Failure| eprintln!("{failure}"));
/// # hook::reset_hook();
/// ```
pub fn set_hook<H>(hook: H)
where
    H: FailureHook + 'static,
{
    let previous = GLOBAL_HOOK.write().replace(Arc::new(hook));
    tracing::debug!(replaced = previous.is_some(), "process-wide failure hook installed");
}

/// Remove the process-wide failure hook, restoring the no-op default.
pub fn reset_hook() {
    let previous = GLOBAL_HOOK.write().take();
    tracing::debug!(replaced = previous.is_some(), "process-wide failure hook reset");
}

/// Checks if a process-wide failure hook is installed.
pub fn has_hook() -> bool {
    GLOBAL_HOOK.read().is_some()
}

/// Run `f` with `hook` as the current thread's failure hook.
///
/// The previous scoped hook is restored when `f` returns or unwinds.
///
/// # Example
///
/// ```rust
/// use outcome::hook;
/// use outcome::{Failure, Outcome};
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicUsize, Ordering};
///
/// let calls = Arc::new(AtomicUsize::new(0));
/// let seen = Arc::clone(&calls);
///
/// hook::with_hook(
///     move |_: &Failure| {
///         seen.fetch_add(1, Ordering::SeqCst);
///     },
///     || {
///         let failed: Outcome<u32> = Outcome::failure("boom");
///         assert!(failed.is_failure());
///     },
/// );
/// assert_eq!(calls.load(Ordering::SeqCst), 1);
/// ```
pub fn with_hook<H, F, R>(hook: H, f: F) -> R
where
    H: FailureHook + 'static,
    F: FnOnce() -> R,
{
    let _guard = set_scoped(hook);
    f()
}

/// Make `hook` the current thread's failure hook until the guard drops.
///
/// Scoped hooks nest. Dropping a guard removes exactly the hook it
/// installed, so guards may be dropped in any order.
pub fn set_scoped<H>(hook: H) -> HookGuard
where
    H: FailureHook + 'static,
{
    let hook: SharedHook = Arc::new(hook);
    SCOPED_HOOKS.with(|scoped| scoped.borrow_mut().push(Arc::clone(&hook)));
    HookGuard {
        installed: hook,
        _not_send: PhantomData,
    }
}

/// RAII guard for a scoped failure hook
///
/// Removes its hook from the current thread when dropped. The guard is tied
/// to the thread that created it:
///
/// ```compile_fail
/// let guard = outcome::hook::set_scoped(outcome::hook::NoopHook);
/// std::thread::spawn(move || drop(guard));
/// ```
#[must_use = "the scoped hook is removed as soon as the guard is dropped"]
pub struct HookGuard {
    installed: SharedHook,
    _not_send: PhantomData<*const ()>,
}

impl Drop for HookGuard {
    fn drop(&mut self) {
        // the slot is already gone during thread-local teardown
        let _ = SCOPED_HOOKS.try_with(|scoped| {
            let mut scoped = scoped.borrow_mut();
            if let Some(position) = scoped
                .iter()
                .rposition(|hook| Arc::ptr_eq(hook, &self.installed))
            {
                scoped.remove(position);
            }
        });
    }
}

impl std::fmt::Debug for HookGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HookGuard").finish_non_exhaustive()
    }
}

fn current() -> Option<SharedHook> {
    SCOPED_HOOKS
        .try_with(|scoped| scoped.borrow().last().cloned())
        .ok()
        .flatten()
        .or_else(|| GLOBAL_HOOK.read().clone())
}

/// Hand a freshly captured failure to the hook in effect.
pub(crate) fn notify(failure: &Failure) {
    if let Some(hook) = current() {
        hook.on_failure(failure);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hook::NoopHook;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting_hook() -> (Arc<AtomicUsize>, impl FailureHook + 'static) {
        let count = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&count);
        let hook = move |_: &Failure| {
            seen.fetch_add(1, Ordering::SeqCst);
        };
        (count, hook)
    }

    #[test]
    fn test_scoped_hook_is_restored() {
        let (outer_count, outer) = counting_hook();
        let (inner_count, inner) = counting_hook();

        let _outer = set_scoped(outer);
        {
            let _inner = set_scoped(inner);
            let _ = Failure::new("inner");
        }
        let _ = Failure::new("outer");

        assert_eq!(inner_count.load(Ordering::SeqCst), 1);
        assert_eq!(outer_count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_scoped_hook_does_not_leak_to_other_threads() {
        let (count, hook) = counting_hook();

        with_hook(hook, || {
            std::thread::spawn(|| {
                let _ = Failure::new("elsewhere");
            })
            .join()
            .expect("thread");
        });

        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_hook_may_capture_failures_itself() {
        let (count, counter) = counting_hook();

        let reentrant = move |failure: &Failure| {
            counter.on_failure(failure);
            if failure.to_string() == "outer" {
                let _guard = set_scoped(NoopHook);
                let _ = Failure::new("from inside the hook");
            }
        };

        with_hook(reentrant, || {
            let _ = Failure::new("outer");
        });

        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_guards_dropped_out_of_order_leave_no_hook() {
        let (count, hook) = counting_hook();

        let outer = set_scoped(hook);
        let inner = set_scoped(NoopHook);
        drop(outer);
        let _ = Failure::new("inner still active");
        drop(inner);
        let _ = Failure::new("no scoped hook left");

        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_out_of_order_drop_keeps_remaining_hook() {
        let (outer_count, outer) = counting_hook();
        let (inner_count, inner) = counting_hook();

        let outer = set_scoped(outer);
        let inner = set_scoped(inner);
        drop(outer);
        let _ = Failure::new("reaches inner only");
        drop(inner);

        assert_eq!(inner_count.load(Ordering::SeqCst), 1);
        assert_eq!(outer_count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_failure_during_thread_teardown_does_not_panic() {
        struct CaptureOnDrop;

        impl Drop for CaptureOnDrop {
            fn drop(&mut self) {
                let _ = Failure::new("captured while thread-locals are torn down");
            }
        }

        thread_local! {
            static LATE: RefCell<Option<CaptureOnDrop>> = const { RefCell::new(None) };
        }

        std::thread::spawn(|| {
            let _guard = set_scoped(NoopHook);
            LATE.with(|late| *late.borrow_mut() = Some(CaptureOnDrop));
        })
        .join()
        .expect("thread exits cleanly");
    }
}
