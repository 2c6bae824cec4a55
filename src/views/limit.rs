use either::Either;
use log::{trace, warn};

use crate::{
    Bound, Error, IntoBound, Pull, Result, Resume, Sequence, Step, config::DEFAULT_SAFETY_LIMIT,
};

/// Pull-object yielding at most a fixed number of elements from a source.
///
/// The source is dropped as soon as the bound is reached or the source is
/// exhausted, so it is never asked for an element beyond the bound.
#[derive(Debug)]
pub struct Limit<P> {
    source: Option<P>,
    remaining: u64,
}

impl<P: Pull> Limit<P> {
    fn new(source: Option<P>, remaining: u64) -> Self {
        let source = source.filter(|_| remaining > 0);
        Limit { source, remaining }
    }
}

impl<P: Pull> Pull for Limit<P> {
    type Item = P::Item;
    type Return = ();

    fn step(&mut self) -> Result<Step<P::Item, ()>> {
        let Some(source) = self.source.as_mut() else {
            return Ok(Step::Complete(()));
        };
        match source.step() {
            Ok(Step::Yielded(item)) => {
                self.remaining -= 1;
                if self.remaining == 0 {
                    trace!("limit: bound reached, releasing source");
                    self.source = None;
                }
                Ok(Step::Yielded(item))
            }
            Ok(Step::Complete(_)) => {
                self.source = None;
                Ok(Step::Complete(()))
            }
            Err(err) => {
                self.source = None;
                Err(err)
            }
        }
    }
}

crate::pull_sequence! {
    impl[P: Pull] Limit<P>;
    impl[P: Pull] SafetyLimit<P>;
}

/// Push-object returned by [`limit`].
///
/// `Left` is the untouched source (unbounded limit); `Right` is the bounded
/// single-pass view.
pub type LimitView<S> = Either<<S as Sequence>::Iterable, Resume<Limit<<S as Sequence>::Iterator>>>;

/// Truncate `seq` to at most `max_size` elements.
///
/// The result is lazy: it pulls one source element per element it yields and
/// never pulls the element after the bound. With a bound of zero the source
/// is not touched at all. An unbounded limit returns `iterable(seq)`.
///
/// ```rust
/// use seqview::prelude::*;
///
/// let naturals = range_from(0.0).unwrap();
/// assert_eq!(to_vec(limit(naturals, 3).unwrap()).unwrap(), vec![0.0, 1.0, 2.0]);
/// ```
pub fn limit<S: Sequence>(seq: S, max_size: impl IntoBound) -> Result<LimitView<S>> {
    match max_size.into_bound("max_size")? {
        Bound::Unbounded => Ok(Either::Left(seq.into_iterable()?)),
        Bound::Finite(0) => Ok(Either::Right(Resume::new(Limit::new(None, 0)))),
        Bound::Finite(n) => {
            let source = seq.into_iterator()?;
            Ok(Either::Right(Resume::new(Limit::new(Some(source), n))))
        }
    }
}

/// Pull-object that fails instead of truncating once a fixed number of
/// elements has been yielded.
#[derive(Debug)]
pub struct SafetyLimit<P> {
    source: Option<P>,
    max_size: u64,
    yielded: u64,
}

impl<P: Pull> Pull for SafetyLimit<P> {
    type Item = P::Item;
    type Return = ();

    fn step(&mut self) -> Result<Step<P::Item, ()>> {
        let Some(source) = self.source.as_mut() else {
            return Ok(Step::Complete(()));
        };
        if self.yielded >= self.max_size {
            self.source = None;
            warn!("safety limit of {} elements exceeded", self.max_size);
            return Err(Error::sequence_too_long(self.yielded));
        }
        match source.step() {
            Ok(Step::Yielded(item)) => {
                self.yielded += 1;
                Ok(Step::Yielded(item))
            }
            Ok(Step::Complete(_)) => {
                self.source = None;
                Ok(Step::Complete(()))
            }
            Err(err) => {
                self.source = None;
                Err(err)
            }
        }
    }
}

/// Push-object returned by [`safety_limit`].
pub type SafetyLimitView<S> = Resume<SafetyLimit<<S as Sequence>::Iterator>>;

/// Guard `seq` against being longer than `max_size`.
///
/// Behaves like [`limit`], except that asking for an element after the
/// `max_size`-th one fails with
/// [`ErrorKind::SequenceTooLong`](crate::ErrorKind::SequenceTooLong) instead of
/// ending the sequence. The source is not pulled again when that happens.
/// The bound must be finite; [`Config::guard`](crate::Config::guard) applies
/// the configured default of 1,000,000.
///
/// ```rust
/// use seqview::prelude::*;
///
/// assert_eq!(to_vec(safety_limit(vec![1, 2], 5).unwrap()).unwrap(), vec![1, 2]);
/// assert!(to_vec(safety_limit(range_from(0.0).unwrap(), 5).unwrap()).is_err());
/// ```
pub fn safety_limit<S: Sequence>(seq: S, max_size: impl IntoBound) -> Result<SafetyLimitView<S>> {
    let Bound::Finite(max_size) = max_size.into_bound("max_size")? else {
        return Err(Error::validation(
            "max_size",
            format!("safety limit must be finite, e.g. {DEFAULT_SAFETY_LIMIT}"),
        ));
    };
    let source = if max_size == 0 {
        None
    } else {
        Some(seq.into_iterator()?)
    };
    Ok(Resume::new(SafetyLimit {
        source,
        max_size,
        yielded: 0,
    }))
}
