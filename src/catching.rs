//! Companion constructors for computations whose failure mode is a panic.
//!
//! [`attempt`] runs a zero-argument computation under
//! [`std::panic::catch_unwind`] and converts a normal return into a success
//! and an unwinding panic into a [`CapturedPanic`] failure. The recoverable
//! set is exactly the set of unwinding panics: conditions that abort the
//! process instead of unwinding (allocation-failure aborts, stack-overflow
//! aborts, panics under `panic = "abort"`) are never captured and propagate
//! as usual.
//!
//! Requires the `std` feature; `no_std` targets have no unwinding runtime to
//! hook into.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::catching::attempt;
//!
//! let ok = attempt(|| 21 * 2);
//! assert_eq!(ok.into_success(), Some(42));
//!
//! let bad = attempt(|| -> i32 { panic!("boom") });
//! assert_eq!(bad.into_failure().unwrap().message(), Some("boom"));
//! ```

use crate::outcome::core::Outcome;
use std::any::Any;
use std::boxed::Box;
use std::fmt;
use std::panic::{self, UnwindSafe};
use std::string::String;

/// The payload of a panic captured by [`attempt`].
///
/// Holds the raw panic payload and offers best-effort extraction of the
/// conventional string message. Payloads raised through `panic!` with a
/// format string are `String`; bare literals are `&'static str`; anything
/// else stays opaque behind [`into_inner`](CapturedPanic::into_inner).
pub struct CapturedPanic {
    payload: Box<dyn Any + Send + 'static>,
}

impl CapturedPanic {
    fn new(payload: Box<dyn Any + Send + 'static>) -> Self {
        Self { payload }
    }

    /// Returns the panic message when the payload is a string type.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::catching::attempt;
    ///
    /// let captured = attempt(|| -> () { panic!("bad input: {}", 7) })
    ///     .into_failure()
    ///     .unwrap();
    /// assert_eq!(captured.message(), Some("bad input: 7"));
    /// ```
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        if let Some(message) = self.payload.downcast_ref::<&'static str>() {
            Some(message)
        } else if let Some(message) = self.payload.downcast_ref::<String>() {
            Some(message)
        } else {
            None
        }
    }

    /// Unwraps the raw panic payload.
    #[must_use]
    pub fn into_inner(self) -> Box<dyn Any + Send + 'static> {
        self.payload
    }
}

impl fmt::Debug for CapturedPanic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CapturedPanic")
            .field("message", &self.message())
            .finish()
    }
}

impl fmt::Display for CapturedPanic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.message() {
            Some(message) => write!(f, "panicked: {message}"),
            None => write!(f, "panicked with a non-string payload"),
        }
    }
}

/// The failure payload of [`attempt_result`]: a returned error or a panic.
#[derive(Debug)]
pub enum Caught<E> {
    /// The computation returned `Err` normally.
    Error(E),
    /// The computation panicked and the unwind was captured.
    Panic(CapturedPanic),
}

impl<E> Caught<E> {
    /// Returns the returned error, if the computation did not panic.
    #[must_use]
    pub fn into_error(self) -> Option<E> {
        match self {
            Self::Error(error) => Some(error),
            Self::Panic(_) => None,
        }
    }

    /// Returns `true` if the computation panicked.
    #[must_use]
    pub fn is_panic(&self) -> bool {
        matches!(self, Self::Panic(_))
    }
}

impl<E: fmt::Display> fmt::Display for Caught<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error(error) => write!(f, "{error}"),
            Self::Panic(panic) => write!(f, "{panic}"),
        }
    }
}

/// Runs a computation, capturing an unwinding panic as a failure.
///
/// A normal return becomes a success wrapping the returned value. An
/// unwinding panic becomes a failure wrapping the captured payload. Aborting
/// conditions do not unwind and are never captured.
///
/// The `UnwindSafe` bound is the standard library's guard against observing
/// broken invariants across the unwind boundary; wrap captured state in
/// [`std::panic::AssertUnwindSafe`] when you can vouch for it.
///
/// # Arguments
///
/// * `computation` - The zero-argument computation to run
///
/// # Examples
///
/// ```
/// use outcome_rail::catching::attempt;
///
/// let o = attempt(|| "ok".len());
/// assert_eq!(o.into_success(), Some(2));
/// ```
#[must_use]
pub fn attempt<S, C>(computation: C) -> Outcome<S, CapturedPanic>
where
    C: FnOnce() -> S + UnwindSafe,
{
    match panic::catch_unwind(computation) {
        Ok(value) => Outcome::Success(value),
        Err(payload) => Outcome::Failure(CapturedPanic::new(payload)),
    }
}

/// Runs a `Result`-returning computation, capturing panics alongside errors.
///
/// Both failure modes land in the failure channel: a returned `Err` becomes
/// [`Caught::Error`] and an unwinding panic becomes [`Caught::Panic`].
///
/// # Arguments
///
/// * `computation` - The zero-argument fallible computation to run
///
/// # Examples
///
/// ```
/// use outcome_rail::catching::{attempt_result, Caught};
///
/// let o = attempt_result(|| "42".parse::<i32>());
/// assert_eq!(o.into_success(), Some(42));
///
/// let o = attempt_result(|| "nope".parse::<i32>());
/// assert!(matches!(o.into_failure(), Some(Caught::Error(_))));
///
/// let o = attempt_result(|| -> Result<i32, &str> { panic!("boom") });
/// assert!(o.into_failure().unwrap().is_panic());
/// ```
#[must_use]
pub fn attempt_result<S, E, C>(computation: C) -> Outcome<S, Caught<E>>
where
    C: FnOnce() -> Result<S, E> + UnwindSafe,
{
    match panic::catch_unwind(computation) {
        Ok(Ok(value)) => Outcome::Success(value),
        Ok(Err(error)) => Outcome::Failure(Caught::Error(error)),
        Err(payload) => Outcome::Failure(Caught::Panic(CapturedPanic::new(payload))),
    }
}
