//! Core outcome types
//!
//! This module contains the fundamental components:
//! - [`outcome`](crate::core::outcome) - The [`Outcome`] type and its constructors
//! - [`failure`](crate::core::failure) - [`Failure`], the captured error handle
//! - [`conversion`](crate::core::conversion) - [`IntoOutcome`] for outcome-like values
//! - [`wrap`](crate::core::wrap) - Running fallible code into an [`Outcome`]

pub mod conversion;
pub mod failure;
pub mod outcome;
pub mod wrap;

pub use conversion::IntoOutcome;
pub use failure::Failure;
pub use outcome::{Outcome, OutcomeKind};
pub use wrap::{
    try_wrap_action_with, try_wrap_with, wrap, wrap_action, wrap_action_with, wrap_with,
};
