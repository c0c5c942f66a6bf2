use crate::outcome::core::Outcome;
use core::fmt;

/// Display names the populated channel and includes the payload.
///
/// The format is `Success[value]` or `Failure[value]`, so the two channels
/// are never ambiguous in rendered output.
///
/// # Examples
///
/// ```
/// use outcome_rail::Outcome;
///
/// let o = Outcome::<i32, &str>::success(3);
/// assert_eq!(o.to_string(), "Success[3]");
///
/// let o = Outcome::<i32, &str>::failure("E");
/// assert_eq!(o.to_string(), "Failure[E]");
/// ```
impl<S: fmt::Display, F: fmt::Display> fmt::Display for Outcome<S, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Success(value) => write!(f, "Success[{value}]"),
            Outcome::Failure(failure) => write!(f, "Failure[{failure}]"),
        }
    }
}

/// A plain `Result` converts losslessly into an `Outcome`.
///
/// # Examples
///
/// ```
/// use outcome_rail::Outcome;
///
/// let o: Outcome<i32, &str> = Ok(42).into();
/// assert!(o.is_success());
/// ```
impl<S, F> From<Result<S, F>> for Outcome<S, F> {
    #[inline]
    fn from(result: Result<S, F>) -> Self {
        Outcome::from_result(result)
    }
}

/// An `Outcome` converts losslessly back into a plain `Result`.
///
/// # Examples
///
/// ```
/// use outcome_rail::Outcome;
///
/// let r: Result<i32, &str> = Outcome::success(42).into();
/// assert_eq!(r, Ok(42));
/// ```
impl<S, F> From<Outcome<S, F>> for Result<S, F> {
    #[inline]
    fn from(outcome: Outcome<S, F>) -> Self {
        outcome.into_result()
    }
}
