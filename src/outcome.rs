use std::fmt::{self, Display};

/// Outcome of a fallible computation.
///
/// Holds either the value the computation produced or the error it
/// returned. The error channel is not generic: anything that converts into
/// [`anyhow::Error`] can be captured, and it is stored untouched, so callers
/// can still `downcast_ref` to the concrete error type.
///
/// Every combinator takes `self` by value. An existing instance is never
/// modified; a `Failure` is moved through as-is and a `Success` is rebuilt.
#[must_use]
#[derive(Debug)]
pub enum Outcome<T> {
    Success(T),
    Failure(anyhow::Error),
}

/// Runs `block` exactly once and captures its result.
///
/// Only recoverable failures are captured, i.e. the `Err` returned by
/// `block`. A panic is a non-recoverable fault (failed assertion, broken
/// invariant, arithmetic overflow in debug builds, ...) and is never caught
/// here: it unwinds through `wrap` untouched. Faults the runtime handles by
/// aborting, like allocation failure or stack overflow, never reach this
/// function either.
pub fn wrap<T, E, F>(block: F) -> Outcome<T>
where
    F: FnOnce() -> Result<T, E>,
    E: Into<anyhow::Error>,
{
    match block() {
        Ok(value) => Outcome::Success(value),
        Err(error) => Outcome::Failure(error.into()),
    }
}

/// Wraps a block of code into an [`Outcome`].
///
/// The body runs inside a closure returning `anyhow::Result`, so `?` and
/// `anyhow::bail!` can be used to fail. The last expression is the value.
///
/// ```
/// use resultwrap::Outcome;
///
/// let outcome = resultwrap::wrap! { 10 + 5 };
/// assert_eq!(outcome.value_or_none(), Some(15));
///
/// let outcome: Outcome<i32> = resultwrap::wrap! { "nope".parse::<i32>()? };
/// assert!(outcome.is_failure());
/// ```
#[macro_export]
macro_rules! wrap {
    ($($body:tt)*) => {
        $crate::wrap(|| -> $crate::anyhow::Result<_> {
            ::core::result::Result::Ok({ $($body)* })
        })
    };
}

impl<T> Outcome<T> {
    pub fn success(value: T) -> Self {
        Self::Success(value)
    }

    pub fn failure(error: impl Into<anyhow::Error>) -> Self {
        Self::Failure(error.into())
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Borrows the value without consuming the outcome.
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Borrows the captured error without consuming the outcome.
    pub fn error(&self) -> Option<&anyhow::Error> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Transforms the value of a `Success`.
    ///
    /// A `Failure` is passed through with the same error and `transform` is
    /// not called. Unlike [`wrap`], a panic inside `transform` is not turned
    /// into a `Failure`; it propagates to the caller.
    pub fn map<R, F>(self, transform: F) -> Outcome<R>
    where
        F: FnOnce(T) -> R,
    {
        match self {
            Self::Success(value) => Outcome::Success(transform(value)),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Chains another fallible step.
    ///
    /// On `Success` the outcome produced by `transform` is returned as-is,
    /// whichever variant it is. A `Failure` short-circuits without calling
    /// `transform`.
    pub fn and_then<R, F>(self, transform: F) -> Outcome<R>
    where
        F: FnOnce(T) -> Outcome<R>,
    {
        match self {
            Self::Success(value) => transform(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Adds context to a captured error. A `Success` is returned unchanged.
    ///
    /// The original error stays in the cause chain, so `downcast_ref` on the
    /// result still finds it.
    pub fn context<C>(self, context: C) -> Self
    where
        C: Display + Send + Sync + 'static,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(error) => Self::Failure(error.context(context)),
        }
    }

    /// Returns the value, or `None` for a `Failure`. Never fails.
    pub fn value_or_none(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Returns the value, or hands back the captured error itself so it can
    /// be propagated with `?`.
    ///
    /// The error is not wrapped again: it is the same `anyhow::Error`, with
    /// its concrete type, cause chain and backtrace.
    pub fn value_or_throw(self) -> anyhow::Result<T> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }

    /// Returns the value, or gives the captured error to `on_error` and
    /// returns `None`.
    ///
    /// `on_error` is called at most once and its return value is dropped.
    /// A panic inside it propagates.
    pub fn value_or_handle<U, F>(self, on_error: F) -> Option<T>
    where
        F: FnOnce(anyhow::Error) -> U,
    {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(error) => {
                on_error(error);
                None
            }
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T>
where
    E: Into<anyhow::Error>,
{
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error.into()),
        }
    }
}

impl<T> From<Outcome<T>> for anyhow::Result<T> {
    fn from(outcome: Outcome<T>) -> Self {
        outcome.value_or_throw()
    }
}

impl<T> Display for Outcome<T>
where
    T: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => write!(f, "Success({})", value),
            // alternate form prints the whole cause chain
            Self::Failure(error) => write!(f, "Failure({:#})", error),
        }
    }
}
