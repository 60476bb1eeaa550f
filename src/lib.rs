//! Wraps the result of a fallible computation into an [`Outcome`] that can
//! be transformed and inspected instead of propagating the error right away.

pub mod cli;
pub mod handle;
mod outcome;

#[doc(hidden)]
pub use anyhow;

pub use outcome::{wrap, Outcome};
