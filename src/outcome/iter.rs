use crate::outcome::core::Outcome;
use core::iter::FusedIterator;

/// Borrowing iterator over the success channel, 0 or 1 elements.
pub struct IterSuccess<'a, S> {
    inner: Option<&'a S>,
}

impl<'a, S> Iterator for IterSuccess<'a, S> {
    type Item = &'a S;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = if self.inner.is_some() { 1 } else { 0 };
        (len, Some(len))
    }
}

impl<S> ExactSizeIterator for IterSuccess<'_, S> {}
impl<S> FusedIterator for IterSuccess<'_, S> {}

/// Borrowing iterator over the failure channel, 0 or 1 elements.
pub struct IterFailure<'a, F> {
    inner: Option<&'a F>,
}

impl<'a, F> Iterator for IterFailure<'a, F> {
    type Item = &'a F;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = if self.inner.is_some() { 1 } else { 0 };
        (len, Some(len))
    }
}

impl<F> ExactSizeIterator for IterFailure<'_, F> {}
impl<F> FusedIterator for IterFailure<'_, F> {}

/// Owning iterator over the success channel, 0 or 1 elements.
pub struct IntoIterSuccess<S> {
    inner: Option<S>,
}

impl<S> Iterator for IntoIterSuccess<S> {
    type Item = S;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = if self.inner.is_some() { 1 } else { 0 };
        (len, Some(len))
    }
}

impl<S> ExactSizeIterator for IntoIterSuccess<S> {}
impl<S> FusedIterator for IntoIterSuccess<S> {}

/// Mutably borrowing iterator over the success channel, 0 or 1 elements.
pub struct IterSuccessMut<'a, S> {
    inner: Option<&'a mut S>,
}

impl<'a, S> Iterator for IterSuccessMut<'a, S> {
    type Item = &'a mut S;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = if self.inner.is_some() { 1 } else { 0 };
        (len, Some(len))
    }
}

impl<S> ExactSizeIterator for IterSuccessMut<'_, S> {}
impl<S> FusedIterator for IterSuccessMut<'_, S> {}

impl<S, F> IntoIterator for Outcome<S, F> {
    type Item = S;
    type IntoIter = IntoIterSuccess<S>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIterSuccess {
            inner: self.into_success(),
        }
    }
}

impl<'a, S, F> IntoIterator for &'a Outcome<S, F> {
    type Item = &'a S;
    type IntoIter = IterSuccess<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_success()
    }
}

impl<'a, S, F> IntoIterator for &'a mut Outcome<S, F> {
    type Item = &'a mut S;
    type IntoIter = IterSuccessMut<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_success_mut()
    }
}

impl<S, F> Outcome<S, F> {
    /// Iterates over the success channel.
    ///
    /// Yields the success value once, or nothing when failed. Each call
    /// derives a fresh iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::success(42);
    /// assert_eq!(o.iter_success().count(), 1);
    /// assert_eq!(o.iter_success().count(), 1);
    ///
    /// let o = Outcome::<i32, &str>::failure("error");
    /// assert_eq!(o.iter_success().count(), 0);
    /// ```
    pub fn iter_success(&self) -> IterSuccess<'_, S> {
        IterSuccess {
            inner: self.success_value(),
        }
    }

    /// Iterates over the failure channel.
    ///
    /// Yields the failure value once, or nothing when successful.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::failure("error");
    /// let collected: Vec<_> = o.iter_failure().collect();
    /// assert_eq!(collected, [&"error"]);
    /// ```
    pub fn iter_failure(&self) -> IterFailure<'_, F> {
        IterFailure {
            inner: self.failure_value(),
        }
    }

    /// Mutably iterates over the success channel.
    pub fn iter_success_mut(&mut self) -> IterSuccessMut<'_, S> {
        match self {
            Outcome::Success(value) => IterSuccessMut { inner: Some(value) },
            Outcome::Failure(_) => IterSuccessMut { inner: None },
        }
    }
}
