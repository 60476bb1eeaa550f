//! Ready-made failure handlers for [`Outcome::value_or_handle`].
//!
//! [`Outcome::value_or_handle`]: crate::Outcome::value_or_handle

use log::{error, log, Level};

/// Logs a captured failure, with its cause chain, at `error` level.
pub fn log_failure(err: anyhow::Error) {
    error!("captured failure: {:#}", err);
}

/// Same as [`log_failure`] but at the given level.
pub fn log_failure_with(level: Level) -> impl FnOnce(anyhow::Error) {
    move |err| log!(level, "captured failure: {:#}", err)
}
