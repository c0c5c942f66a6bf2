//! Extension trait adapting `Option` values into outcomes.
//!
//! A possibly-empty container has no failure value of its own, so the caller
//! supplies one: eagerly with [`success_or`](OptionExt::success_or) or
//! lazily with [`success_or_else`](OptionExt::success_or_else).
//!
//! # Examples
//!
//! ```
//! use outcome_rail::traits::OptionExt;
//! use outcome_rail::Outcome;
//!
//! let outcome = Some(7).success_or("was empty");
//! assert_eq!(outcome, Outcome::success(7));
//! ```

use crate::outcome::core::Outcome;

/// Extension trait converting `Option` values into outcomes.
///
/// `Some` maps to the success channel; `None` maps to a failure built from
/// the caller-supplied value or supplier.
///
/// # Examples
///
/// ```
/// use outcome_rail::traits::OptionExt;
/// use outcome_rail::Outcome;
///
/// let found = ["a", "b"].iter().position(|s| *s == "b").success_or("not present");
/// assert_eq!(found, Outcome::success(1));
///
/// let missing = ["a", "b"].iter().position(|s| *s == "z").success_or("not present");
/// assert_eq!(missing, Outcome::failure("not present"));
/// ```
pub trait OptionExt<S> {
    /// Converts this `Option` into an [`Outcome`], with an eager failure
    /// value for the empty case.
    fn success_or<F>(self, failure: F) -> Outcome<S, F>;

    /// Converts this `Option` into an [`Outcome`], building the failure
    /// value only when the option is empty.
    fn success_or_else<F, G>(self, on_absent: G) -> Outcome<S, F>
    where
        G: FnOnce() -> F;
}

impl<S> OptionExt<S> for Option<S> {
    #[inline]
    fn success_or<F>(self, failure: F) -> Outcome<S, F> {
        match self {
            Some(value) => Outcome::Success(value),
            None => Outcome::Failure(failure),
        }
    }

    #[inline]
    fn success_or_else<F, G>(self, on_absent: G) -> Outcome<S, F>
    where
        G: FnOnce() -> F,
    {
        Outcome::from_option(self, on_absent)
    }
}
