//! Extension trait for moving `Result` values onto the outcome rails.
//!
//! This module provides [`ResultExt`], which converts any `Result` into an
//! [`Outcome`](crate::Outcome) in method position, so adoption does not
//! require wrapping call sites in free functions.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::traits::ResultExt;
//!
//! let outcome = "42".parse::<i32>().into_outcome();
//! assert_eq!(outcome.into_success(), Some(42));
//! ```

use crate::outcome::core::Outcome;

/// Extension trait converting `Result` values into outcomes ergonomically.
///
/// `Ok` maps to the success channel and `Err` to the failure channel, with
/// no change to either payload.
///
/// # Examples
///
/// ```
/// use outcome_rail::traits::ResultExt;
/// use outcome_rail::Outcome;
///
/// fn lookup(id: u64) -> Result<&'static str, &'static str> {
///     if id == 1 { Ok("alice") } else { Err("unknown id") }
/// }
///
/// let greeting = lookup(1)
///     .into_outcome()
///     .map_success(|name| format!("hello, {name}"))
///     .success_or_else(|e| format!("lookup failed: {e}"));
/// assert_eq!(greeting, "hello, alice");
/// ```
pub trait ResultExt<S, F> {
    /// Converts this `Result` into an [`Outcome`].
    fn into_outcome(self) -> Outcome<S, F>;
}

impl<S, F> ResultExt<S, F> for Result<S, F> {
    #[inline]
    fn into_outcome(self) -> Outcome<S, F> {
        Outcome::from_result(self)
    }
}
