//! Combinators over [`Outcome`](crate::Outcome)
//!
//! Every combinator is available as a method and as a free function of the
//! same name taking the outcome as first argument (`iterate` is the free form
//! of [`Outcome::for_each`](crate::Outcome::for_each)).
//!
//! | Combinator | `Success(v)` | `None` | `Failure(f)` |
//! |---|---|---|---|
//! | `bind` / `try_map` | callback result, `Err` captured | `None` | `f` |
//! | `map` | `Success(map(v))` | `None` | `f` |
//! | `filter` / `try_filter` | `v` or `None`, `Err` captured | `None` | `f` |
//! | `fold` / `try_fold` | `folder(init, v)`, `Err` returned | `init` | `init` |
//! | `for_each` / `try_for_each` | `action(v)`, `Err` returned | no-op | no-op |
//! | `exists` | `predicate(v)` | `false` | `false` |
//! | `count` | `1` | `0` | `0` |
//!
//! No combinator runs a callback for `None` or `Failure`, and none reports a
//! propagated `Failure` to the failure hook again.

mod bind;
mod filter;
mod fold;

pub use bind::{bind, map, try_map};
pub use filter::{count, exists, filter, try_exists, try_filter};
pub use fold::{fold, iterate, try_fold, try_iterate};
