//! Ergonomic macros for producing and chaining [`Outcome`](crate::Outcome) values.
//!
//! These macros cover the two spots where method syntax gets in the way:
//!
//! - [`macro@crate::outcome`] - Wraps a `Result`-producing expression or
//!   block and converts it into an [`Outcome`](crate::Outcome).
//! - [`macro@crate::propagate`] - Unwraps a success value or early-returns
//!   the failure from the enclosing `Outcome`-returning function, the
//!   crate's stand-in for `?`.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{outcome, propagate, Outcome};
//!
//! fn parse_port(raw: &str) -> Outcome<u16, String> {
//!     let port = propagate!(outcome!(raw.parse::<u16>()).map_failure(|e| e.to_string()));
//!     Outcome::success(port)
//! }
//!
//! assert_eq!(parse_port("8080"), Outcome::success(8080));
//! assert!(parse_port("eighty").is_failure());
//! ```

/// Wraps a `Result`-producing expression or block into an
/// [`Outcome`](crate::Outcome).
///
/// This macro provides a convenient shorthand for routing existing fallible
/// expressions onto the outcome rails. It accepts either a single expression
/// or a block of code that produces a `Result`.
///
/// # Syntax
///
/// - `outcome!(expr)` - Wraps a single `Result`-producing expression
/// - `outcome!({ ... })` - Wraps a block that produces a `Result`
///
/// # Returns
///
/// An [`Outcome<S, F>`](crate::Outcome) with `Ok` on the success channel and
/// `Err` on the failure channel.
///
/// # Examples
///
/// ```rust
/// use outcome_rail::outcome;
///
/// // Simple expression
/// let o = outcome!("42".parse::<i32>());
/// assert!(o.is_success());
///
/// // Block syntax with multiple statements
/// let o = outcome!({
///     let raw = "21";
///     raw.parse::<i32>().map(|v| v * 2)
/// });
/// assert_eq!(o.into_success(), Some(42));
/// ```
#[macro_export]
macro_rules! outcome {
    ($expr:expr $(,)?) => {
        $crate::Outcome::from_result($expr)
    };
}

/// Unwraps a success value or early-returns the failure.
///
/// Evaluates an [`Outcome`](crate::Outcome)-producing expression; a success
/// unwraps to its payload, while a failure returns from the enclosing
/// function immediately, converting the failure value with
/// [`Into`](core::convert::Into). The enclosing function must itself return
/// an `Outcome` whose failure type the current one converts into.
///
/// # Examples
///
/// ```rust
/// use outcome_rail::{propagate, Outcome};
///
/// fn checked_div(a: i32, b: i32) -> Outcome<i32, &'static str> {
///     if b == 0 {
///         Outcome::failure("division by zero")
///     } else {
///         Outcome::success(a / b)
///     }
/// }
///
/// fn average_of_quotients(a: i32, b: i32, divisor: i32) -> Outcome<i32, &'static str> {
///     let left = propagate!(checked_div(a, divisor));
///     let right = propagate!(checked_div(b, divisor));
///     Outcome::success((left + right) / 2)
/// }
///
/// assert_eq!(average_of_quotients(10, 20, 2), Outcome::success(7));
/// assert_eq!(average_of_quotients(10, 20, 0), Outcome::failure("division by zero"));
/// ```
#[macro_export]
macro_rules! propagate {
    ($expr:expr $(,)?) => {
        match $expr {
            $crate::Outcome::Success(value) => value,
            $crate::Outcome::Failure(failure) => {
                return $crate::Outcome::Failure(::core::convert::Into::into(failure))
            }
        }
    };
}
