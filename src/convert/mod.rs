//! Conversion helpers between `Outcome`, `Result`, and `Option`.
//!
//! These adapters make it straightforward to adopt `outcome-rail`
//! incrementally: wrap the results of legacy fallible functions, or flatten
//! outcomes back into core types when calling external APIs.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::convert::*;
//! use outcome_rail::Outcome;
//!
//! // Convert between Result and Outcome
//! let result: Result<i32, &str> = Ok(42);
//! let outcome = result_to_outcome(result);
//! assert!(outcome.is_success());
//!
//! // Collapse the failure channel when only the success matters
//! let maybe = outcome_to_option(outcome);
//! assert_eq!(maybe, Some(42));
//! ```

use crate::outcome::core::Outcome;

/// Converts a `Result` to an `Outcome`.
///
/// # Arguments
///
/// * `result` - The result to convert
///
/// # Returns
///
/// * `Outcome::Success(value)` if result is `Ok`
/// * `Outcome::Failure(failure)` if result is `Err`
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::result_to_outcome;
///
/// let outcome = result_to_outcome::<i32, &str>(Err("failed"));
/// assert!(outcome.is_failure());
/// ```
#[inline]
pub fn result_to_outcome<S, F>(result: Result<S, F>) -> Outcome<S, F> {
    Outcome::from_result(result)
}

/// Converts an `Outcome` to a `Result`.
///
/// # Arguments
///
/// * `outcome` - The outcome to convert
///
/// # Returns
///
/// * `Ok(value)` if the outcome is successful
/// * `Err(failure)` if the outcome is failed
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::outcome_to_result;
/// use outcome_rail::Outcome;
///
/// assert_eq!(outcome_to_result(Outcome::<i32, &str>::success(42)), Ok(42));
/// assert_eq!(outcome_to_result(Outcome::<i32, &str>::failure("E")), Err("E"));
/// ```
#[inline]
pub fn outcome_to_result<S, F>(outcome: Outcome<S, F>) -> Result<S, F> {
    outcome.into_result()
}

/// Collapses an `Outcome` to its success channel, discarding any failure.
///
/// # Arguments
///
/// * `outcome` - The outcome to collapse
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::outcome_to_option;
/// use outcome_rail::Outcome;
///
/// assert_eq!(outcome_to_option(Outcome::<i32, &str>::success(42)), Some(42));
/// assert_eq!(outcome_to_option(Outcome::<i32, &str>::failure("E")), None);
/// ```
#[inline]
pub fn outcome_to_option<S, F>(outcome: Outcome<S, F>) -> Option<S> {
    outcome.into_success()
}

/// Adapts a possibly-absent value into an `Outcome`.
///
/// The supplier runs only when the value is absent.
///
/// # Arguments
///
/// * `value` - The possibly-absent success value
/// * `on_absent` - Supplier for the failure value when `value` is `None`
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::option_to_outcome;
/// use outcome_rail::Outcome;
///
/// let outcome = option_to_outcome(None::<i32>, || "was absent");
/// assert_eq!(outcome, Outcome::failure("was absent"));
/// ```
#[inline]
pub fn option_to_outcome<S, F, G>(value: Option<S>, on_absent: G) -> Outcome<S, F>
where
    G: FnOnce() -> F,
{
    Outcome::from_option(value, on_absent)
}

/// Transposes the two channels of an `Outcome`.
///
/// A success becomes a failure and vice versa. Useful when a pipeline treats
/// the failure rail as the interesting one.
///
/// # Arguments
///
/// * `outcome` - The outcome to transpose
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::swap_channels;
/// use outcome_rail::Outcome;
///
/// let swapped = swap_channels(Outcome::<i32, &str>::failure("E"));
/// assert_eq!(swapped, Outcome::success("E"));
/// ```
#[inline]
pub fn swap_channels<S, F>(outcome: Outcome<S, F>) -> Outcome<F, S> {
    match outcome {
        Outcome::Success(value) => Outcome::Failure(value),
        Outcome::Failure(failure) => Outcome::Success(failure),
    }
}
