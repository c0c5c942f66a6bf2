//! Mapping and flat-mapping combinators for [`Outcome`].
//!
//! Single-channel transforms (`map_success`, `map_failure`) rewrap the
//! transformed value in the same channel. Flat-map variants let the mapper
//! decide the resulting channel, with no further wrapping. The `*_either`
//! forms run exactly one of their two closures, matching the active channel.

use crate::outcome::core::Outcome;

impl<S, F> Outcome<S, F> {
    /// Transforms the success value, keeping a failure untouched.
    ///
    /// If the outcome is failed, the failure value passes through and only
    /// the success type parameter changes.
    ///
    /// # Arguments
    ///
    /// * `mapper` - Transforms the success value from `S` to `S2`
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::success(3).map_success(|v| v * 2);
    /// assert_eq!(o, Outcome::success(6));
    ///
    /// let o = Outcome::<i32, &str>::failure("E").map_success(|v| v * 2);
    /// assert_eq!(o, Outcome::failure("E"));
    /// ```
    #[must_use]
    #[inline]
    pub fn map_success<S2, M>(self, mapper: M) -> Outcome<S2, F>
    where
        M: FnOnce(S) -> S2,
    {
        match self {
            Self::Success(value) => Outcome::Success(mapper(value)),
            Self::Failure(failure) => Outcome::Failure(failure),
        }
    }

    /// Transforms the failure value, keeping a success untouched.
    ///
    /// # Arguments
    ///
    /// * `mapper` - Transforms the failure value from `F` to `F2`
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::failure("io").map_failure(|f| format!("{f} error"));
    /// assert_eq!(o, Outcome::failure("io error".to_string()));
    /// ```
    #[must_use]
    #[inline]
    pub fn map_failure<F2, M>(self, mapper: M) -> Outcome<S, F2>
    where
        M: FnOnce(F) -> F2,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(failure) => Outcome::Failure(mapper(failure)),
        }
    }

    /// Transforms whichever value is present, changing both type parameters.
    ///
    /// Exactly one of the two mappers runs.
    ///
    /// # Arguments
    ///
    /// * `success_mapper` - Transforms the success value from `S` to `S2`
    /// * `failure_mapper` - Transforms the failure value from `F` to `F2`
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::success(3).map_either(|v| v * 2, |f| f.len());
    /// assert_eq!(o, Outcome::success(6));
    ///
    /// let o = Outcome::<i32, &str>::failure("E").map_either(|v| v * 2, |f| f.len());
    /// assert_eq!(o, Outcome::failure(1));
    /// ```
    #[must_use]
    #[inline]
    pub fn map_either<S2, F2, M, N>(self, success_mapper: M, failure_mapper: N) -> Outcome<S2, F2>
    where
        M: FnOnce(S) -> S2,
        N: FnOnce(F) -> F2,
    {
        match self {
            Self::Success(value) => Outcome::Success(success_mapper(value)),
            Self::Failure(failure) => Outcome::Failure(failure_mapper(failure)),
        }
    }

    /// Chains a success into a new outcome.
    ///
    /// The monadic bind on the success channel: if successful, `mapper`
    /// produces the next outcome directly, which may itself be a failure. A
    /// failed outcome passes through unchanged.
    ///
    /// # Arguments
    ///
    /// * `mapper` - Produces the next outcome from the success value
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// fn halve(v: i32) -> Outcome<i32, &'static str> {
    ///     if v % 2 == 0 {
    ///         Outcome::success(v / 2)
    ///     } else {
    ///         Outcome::failure("odd")
    ///     }
    /// }
    ///
    /// assert_eq!(Outcome::success(4).flat_map_success(halve), Outcome::success(2));
    /// assert_eq!(Outcome::success(3).flat_map_success(halve), Outcome::failure("odd"));
    /// ```
    #[must_use]
    #[inline]
    pub fn flat_map_success<S2, M>(self, mapper: M) -> Outcome<S2, F>
    where
        M: FnOnce(S) -> Outcome<S2, F>,
    {
        match self {
            Self::Success(value) => mapper(value),
            Self::Failure(failure) => Outcome::Failure(failure),
        }
    }

    /// Chains a failure into a new outcome.
    ///
    /// The dual bind: if failed, `mapper` produces the next outcome
    /// directly, which may recover into a success. A successful outcome
    /// passes through unchanged.
    ///
    /// # Arguments
    ///
    /// * `mapper` - Produces the next outcome from the failure value
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::failure("B")
    ///     .flat_map_failure(|f| if f == "B" { Outcome::success(5) } else { Outcome::failure(f.len()) });
    /// assert_eq!(o, Outcome::success(5));
    /// ```
    #[must_use]
    #[inline]
    pub fn flat_map_failure<F2, M>(self, mapper: M) -> Outcome<S, F2>
    where
        M: FnOnce(F) -> Outcome<S, F2>,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(failure) => mapper(failure),
        }
    }

    /// Chains whichever value is present into a new outcome.
    ///
    /// Exactly one of the two mappers runs; its result is the result, with
    /// both type parameters free to change.
    ///
    /// # Arguments
    ///
    /// * `success_mapper` - Produces the next outcome from the success value
    /// * `failure_mapper` - Produces the next outcome from the failure value
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::failure("B").flat_map_either(
    ///     |v| if v < 3 { Outcome::success("small") } else { Outcome::failure(0usize) },
    ///     |f| if f == "B" { Outcome::success("recovered") } else { Outcome::failure(f.len()) },
    /// );
    /// assert_eq!(o, Outcome::success("recovered"));
    /// ```
    #[must_use]
    #[inline]
    pub fn flat_map_either<S2, F2, M, N>(
        self,
        success_mapper: M,
        failure_mapper: N,
    ) -> Outcome<S2, F2>
    where
        M: FnOnce(S) -> Outcome<S2, F2>,
        N: FnOnce(F) -> Outcome<S2, F2>,
    {
        match self {
            Self::Success(value) => success_mapper(value),
            Self::Failure(failure) => failure_mapper(failure),
        }
    }
}
