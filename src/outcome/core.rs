#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The outcome of an operation that either succeeds or fails.
///
/// `Outcome<S, F>` holds exactly one value at a time: a success of type `S`
/// or a failure of type `F`. Unlike throwing exceptions or returning
/// sentinel values, both paths of an operation travel through the return
/// value, so the caller decides what a failure means.
///
/// The container is immutable: every combinator consumes the receiver and
/// produces a new `Outcome`. There is no "empty" state — absence of a value
/// is modeled by choosing the failure channel, never by a missing payload.
///
/// # Serde Support
///
/// `Outcome` implements `Serialize` and `Deserialize` when `S` and `F` do
/// (requires the `serde` feature).
///
/// # Type Parameters
///
/// * `S` - The success value type
/// * `F` - The failure value type
///
/// # Variants
///
/// * `Success(S)` - The operation completed as intended
/// * `Failure(F)` - The operation did not complete as intended
///
/// # Examples
///
/// ```
/// use outcome_rail::Outcome;
///
/// let ok = Outcome::<i32, &str>::success(42);
/// assert!(ok.is_success());
///
/// let bad = Outcome::<i32, &str>::failure("not found");
/// assert!(bad.is_failure());
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Debug, Hash)]
pub enum Outcome<S, F> {
    Success(S),
    Failure(F),
}

impl<S, F> Outcome<S, F> {
    /// Creates a successful outcome.
    ///
    /// # Arguments
    ///
    /// * `value` - The success value to wrap
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::success(42);
    /// assert_eq!(o.into_success(), Some(42));
    /// ```
    #[must_use]
    #[inline]
    pub fn success(value: S) -> Self {
        Self::Success(value)
    }

    /// Creates a failed outcome.
    ///
    /// # Arguments
    ///
    /// * `value` - The failure value to wrap
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::failure("missing field");
    /// assert!(o.is_failure());
    /// ```
    #[must_use]
    #[inline]
    pub fn failure(value: F) -> Self {
        Self::Failure(value)
    }

    /// Adapts a possibly-absent value, failing when it is absent.
    ///
    /// `Some(value)` becomes a success; `None` becomes a failure built by
    /// `on_absent`. The supplier runs only when the value is absent.
    ///
    /// # Arguments
    ///
    /// * `value` - The possibly-absent success value
    /// * `on_absent` - Supplier for the failure value when `value` is `None`
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let present = Outcome::from_option(Some(7), || "was absent");
    /// assert_eq!(present, Outcome::success(7));
    ///
    /// let absent = Outcome::<i32, _>::from_option(None, || "was absent");
    /// assert_eq!(absent, Outcome::failure("was absent"));
    /// ```
    #[must_use]
    #[inline]
    pub fn from_option<G>(value: Option<S>, on_absent: G) -> Self
    where
        G: FnOnce() -> F,
    {
        match value {
            Some(value) => Self::Success(value),
            None => Self::Failure(on_absent()),
        }
    }

    /// Wraps a plain `Result`, keeping the channel assignment.
    ///
    /// # Arguments
    ///
    /// * `result` - The result to convert
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let parsed: Result<i32, &str> = Ok(42);
    /// assert!(Outcome::from_result(parsed).is_success());
    /// ```
    #[must_use]
    #[inline]
    pub fn from_result(result: Result<S, F>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(failure) => Self::Failure(failure),
        }
    }

    /// Converts into a plain `Result`.
    ///
    /// The success channel becomes `Ok`, the failure channel becomes `Err`,
    /// which makes `?` available at the boundary to `Result`-speaking code.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::success(42);
    /// assert_eq!(o.into_result(), Ok(42));
    /// ```
    #[must_use]
    #[inline]
    pub fn into_result(self) -> Result<S, F> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(failure) => Err(failure),
        }
    }

    /// Returns `true` if the outcome is successful.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::success(42);
    /// assert!(o.is_success());
    /// ```
    #[must_use]
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if the outcome is failed.
    ///
    /// Exactly one of [`is_success`](Self::is_success) and `is_failure` is
    /// `true` for any outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::failure("error");
    /// assert!(o.is_failure());
    /// ```
    #[must_use]
    #[inline]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Borrows the success value, if any.
    ///
    /// Returns `None` when the outcome is failed.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::success(42);
    /// assert_eq!(o.success_value(), Some(&42));
    ///
    /// let o = Outcome::<i32, &str>::failure("error");
    /// assert_eq!(o.success_value(), None);
    /// ```
    #[must_use]
    #[inline]
    pub fn success_value(&self) -> Option<&S> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Borrows the failure value, if any.
    ///
    /// Returns `None` when the outcome is successful.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::failure("error");
    /// assert_eq!(o.failure_value(), Some(&"error"));
    /// ```
    #[must_use]
    #[inline]
    pub fn failure_value(&self) -> Option<&F> {
        match self {
            Self::Success(_) => None,
            Self::Failure(failure) => Some(failure),
        }
    }

    /// Extracts the success value, if any.
    ///
    /// Returns `Some(value)` if successful, `None` if failed.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::success(42);
    /// assert_eq!(o.into_success(), Some(42));
    /// ```
    #[must_use]
    #[inline]
    pub fn into_success(self) -> Option<S> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Extracts the failure value, if any.
    ///
    /// Returns `Some(failure)` if failed, `None` if successful.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::failure("error");
    /// assert_eq!(o.into_failure(), Some("error"));
    /// ```
    #[must_use]
    #[inline]
    pub fn into_failure(self) -> Option<F> {
        match self {
            Self::Success(_) => None,
            Self::Failure(failure) => Some(failure),
        }
    }

    /// Returns the success value, or the given alternative.
    ///
    /// The alternative carries no presence constraint of its own; with an
    /// `Option`-typed success channel, `None` is an admissible alternative.
    ///
    /// # Arguments
    ///
    /// * `other` - The alternative success value
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::failure("error");
    /// assert_eq!(o.success_or(8), 8);
    /// ```
    #[must_use]
    #[inline]
    pub fn success_or(self, other: S) -> S {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => other,
        }
    }

    /// Returns the success value, or maps the failure value into one.
    ///
    /// The mapper runs only when the outcome is failed.
    ///
    /// # Arguments
    ///
    /// * `mapper` - Produces the alternative success value from the failure
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<usize, &str>::failure("error");
    /// assert_eq!(o.success_or_else(|f| f.len()), 5);
    /// ```
    #[must_use]
    #[inline]
    pub fn success_or_else<G>(self, mapper: G) -> S
    where
        G: FnOnce(F) -> S,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(failure) => mapper(failure),
        }
    }

    /// Borrows both channels, producing an `Outcome<&S, &F>`.
    ///
    /// Lets the by-value combinators run against borrowed data.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<String, &str>::success("ok".to_string());
    /// let len = o.as_ref().map_success(|s| s.len());
    /// assert_eq!(len.into_success(), Some(2));
    /// assert!(o.is_success());
    /// ```
    #[must_use]
    #[inline]
    pub fn as_ref(&self) -> Outcome<&S, &F> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(failure) => Outcome::Failure(failure),
        }
    }

    /// Mutably borrows both channels, producing an `Outcome<&mut S, &mut F>`.
    #[must_use]
    #[inline]
    pub fn as_mut(&mut self) -> Outcome<&mut S, &mut F> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(failure) => Outcome::Failure(failure),
        }
    }

    /// Runs an action with the success value, passing the outcome through.
    ///
    /// If the outcome is failed the action does not run. The receiver is
    /// returned unchanged either way, so calls chain.
    ///
    /// # Arguments
    ///
    /// * `action` - Observer for the success value
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let mut seen = None;
    /// let o = Outcome::<i32, &str>::success(42).on_success(|v| seen = Some(*v));
    /// assert_eq!(seen, Some(42));
    /// assert!(o.is_success());
    /// ```
    #[inline]
    pub fn on_success<A>(self, action: A) -> Self
    where
        A: FnOnce(&S),
    {
        if let Self::Success(value) = &self {
            action(value);
        }
        self
    }

    /// Runs an action with the failure value, passing the outcome through.
    ///
    /// If the outcome is successful the action does not run.
    ///
    /// # Arguments
    ///
    /// * `action` - Observer for the failure value
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let mut seen = None;
    /// let o = Outcome::<i32, &str>::failure("error").on_failure(|f| seen = Some(*f));
    /// assert_eq!(seen, Some("error"));
    /// assert!(o.is_failure());
    /// ```
    #[inline]
    pub fn on_failure<A>(self, action: A) -> Self
    where
        A: FnOnce(&F),
    {
        if let Self::Failure(failure) = &self {
            action(failure);
        }
        self
    }

    /// Runs exactly one of the two actions, matching the active channel.
    ///
    /// Never runs both, never runs neither. The receiver is returned
    /// unchanged.
    ///
    /// # Arguments
    ///
    /// * `success_action` - Observer for the success value
    /// * `failure_action` - Observer for the failure value
    ///
    /// # Examples
    ///
    /// ```
    /// use core::cell::RefCell;
    /// use outcome_rail::Outcome;
    ///
    /// let log = RefCell::new(Vec::new());
    /// let o = Outcome::<i32, &str>::success(42).on_either(
    ///     |v| log.borrow_mut().push(format!("ok: {v}")),
    ///     |f| log.borrow_mut().push(format!("err: {f}")),
    /// );
    /// assert!(o.is_success());
    /// assert_eq!(log.into_inner(), ["ok: 42"]);
    /// ```
    #[inline]
    pub fn on_either<A, B>(self, success_action: A, failure_action: B) -> Self
    where
        A: FnOnce(&S),
        B: FnOnce(&F),
    {
        match &self {
            Self::Success(value) => success_action(value),
            Self::Failure(failure) => failure_action(failure),
        }
        self
    }

    /// Turns an unacceptable success into a failure.
    ///
    /// Acts only on a successful outcome: when `is_acceptable` rejects the
    /// value, the value is fed to `to_failure` and a fresh failure is
    /// produced. A failed outcome passes through untouched and neither
    /// closure runs.
    ///
    /// # Arguments
    ///
    /// * `is_acceptable` - Predicate on the success value
    /// * `to_failure` - Maps a rejected success value to the failure value
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::success(5).filter(|v| *v < 3, |_| "too big");
    /// assert_eq!(o, Outcome::failure("too big"));
    ///
    /// let o = Outcome::<i32, &str>::success(2).filter(|v| *v < 3, |_| "too big");
    /// assert_eq!(o, Outcome::success(2));
    /// ```
    #[must_use]
    #[inline]
    pub fn filter<P, G>(self, is_acceptable: P, to_failure: G) -> Self
    where
        P: FnOnce(&S) -> bool,
        G: FnOnce(S) -> F,
    {
        match self {
            Self::Success(value) => {
                if is_acceptable(&value) {
                    Self::Success(value)
                } else {
                    Self::Failure(to_failure(value))
                }
            }
            failed => failed,
        }
    }

    /// Turns a recoverable failure into a success.
    ///
    /// The dual of [`filter`](Self::filter): acts only on a failed outcome.
    /// When `is_recoverable` accepts the failure value, the value is fed to
    /// `to_success` and a fresh success is produced. A successful outcome
    /// passes through untouched and neither closure runs.
    ///
    /// # Arguments
    ///
    /// * `is_recoverable` - Predicate on the failure value
    /// * `to_success` - Maps a recoverable failure value to the success value
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::failure("B").recover(|f| *f == "B", |_| 5);
    /// assert_eq!(o, Outcome::success(5));
    ///
    /// let o = Outcome::<i32, &str>::failure("A").recover(|f| *f == "B", |_| 5);
    /// assert_eq!(o, Outcome::failure("A"));
    /// ```
    #[must_use]
    #[inline]
    pub fn recover<P, G>(self, is_recoverable: P, to_success: G) -> Self
    where
        P: FnOnce(&F) -> bool,
        G: FnOnce(F) -> S,
    {
        match self {
            Self::Failure(failure) => {
                if is_recoverable(&failure) {
                    Self::Success(to_success(failure))
                } else {
                    Self::Failure(failure)
                }
            }
            succeeded => succeeded,
        }
    }
}
