/// Result of pulling once from a sequence: either the next element, or the
/// signal that the sequence is exhausted together with its return value.
///
/// Most pull-objects complete with `()`. [`Range`](crate::Range) completes with
/// the boundary value at which it stopped, which is never part of its output.
///
/// # Examples
///
/// ```rust
/// use seqview::Step;
///
/// let next: Step<i32, ()> = Step::Yielded(42);
/// assert_eq!(next.map_yielded(|x| x * 2), Step::Yielded(84));
///
/// let done: Step<i32, f64> = Step::Complete(9.0);
/// assert_eq!(done.complete_value(), Some(9.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step<Y, D> {
    /// The sequence produced an element and may produce more.
    Yielded(Y),
    /// The sequence is exhausted.
    Complete(D),
}

impl<Y, D> Step<Y, D> {
    /// Returns `true` if the step is `Yielded`.
    #[inline]
    pub const fn is_yielded(&self) -> bool {
        matches!(self, Step::Yielded(_))
    }

    /// Returns `true` if the step is `Complete`.
    #[inline]
    pub const fn is_complete(&self) -> bool {
        matches!(self, Step::Complete(_))
    }

    /// Converts into the yielded element, discarding any return value.
    ///
    /// ```rust
    /// use seqview::Step;
    ///
    /// assert_eq!(Step::<i32, ()>::Yielded(1).yielded_value(), Some(1));
    /// assert_eq!(Step::<i32, ()>::Complete(()).yielded_value(), None);
    /// ```
    #[inline]
    pub fn yielded_value(self) -> Option<Y> {
        match self {
            Step::Yielded(y) => Some(y),
            Step::Complete(_) => None,
        }
    }

    /// Converts into the return value, discarding any yielded element.
    #[inline]
    pub fn complete_value(self) -> Option<D> {
        match self {
            Step::Yielded(_) => None,
            Step::Complete(d) => Some(d),
        }
    }

    #[inline]
    pub fn map_yielded<Y2, F>(self, f: F) -> Step<Y2, D>
    where
        F: FnOnce(Y) -> Y2,
    {
        match self {
            Step::Yielded(y) => Step::Yielded(f(y)),
            Step::Complete(d) => Step::Complete(d),
        }
    }

    #[inline]
    pub fn map_complete<D2, F>(self, f: F) -> Step<Y, D2>
    where
        F: FnOnce(D) -> D2,
    {
        match self {
            Step::Yielded(y) => Step::Yielded(y),
            Step::Complete(d) => Step::Complete(f(d)),
        }
    }

    /// Converts from `&Step<Y, D>` to `Step<&Y, &D>`.
    #[inline]
    pub const fn as_ref(&self) -> Step<&Y, &D> {
        match self {
            Step::Yielded(y) => Step::Yielded(y),
            Step::Complete(d) => Step::Complete(d),
        }
    }

    /// Returns the yielded element.
    ///
    /// # Panics
    ///
    /// Panics if the step is `Complete`.
    #[inline]
    pub fn unwrap_yielded(self) -> Y {
        match self {
            Step::Yielded(y) => y,
            Step::Complete(_) => panic!("called `Step::unwrap_yielded()` on a `Complete` value"),
        }
    }

    /// Returns the return value.
    ///
    /// # Panics
    ///
    /// Panics if the step is `Yielded`.
    #[inline]
    pub fn unwrap_complete(self) -> D {
        match self {
            Step::Yielded(_) => panic!("called `Step::unwrap_complete()` on a `Yielded` value"),
            Step::Complete(d) => d,
        }
    }
}

impl<Y> From<Option<Y>> for Step<Y, ()> {
    #[inline]
    fn from(next: Option<Y>) -> Self {
        match next {
            Some(y) => Step::Yielded(y),
            None => Step::Complete(()),
        }
    }
}
