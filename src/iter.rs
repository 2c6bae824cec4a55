//! Iterator adapter for pull-objects.
//!
//! [`PullIter`] drives a [`Pull`] through the std [`Iterator`] interface while
//! keeping hold of the value the pull-object completes with.
//!
//! ```rust
//! use seqview::prelude::*;
//!
//! let mut iter = range(0.0, 7.0, 3.0).unwrap().pulled();
//! let values: Vec<f64> = iter.by_ref().collect::<seqview::Result<_>>().unwrap();
//! assert_eq!(values, vec![0.0, 3.0, 6.0]);
//! assert_eq!(iter.return_value(), Some(&9.0));
//! ```

use crate::{Pull, Result, Step};

/// Iterator adapter for [`Pull`]. Created by [`Pull::pulled`].
///
/// Yields `Ok(item)` for every element and stops after the pull-object
/// completes. An error from the pull-object is yielded once, after which the
/// iterator is fused.
///
/// Both `PullIter` and `&mut PullIter` implement `Iterator`, so a loop can
/// borrow it and the return value can be inspected afterwards.
pub struct PullIter<P>
where
    P: Pull,
{
    state: PullIterState<P>,
}

enum PullIterState<P>
where
    P: Pull,
{
    Active(P),
    Complete(P::Return),
    Failed,
}

impl<P> PullIter<P>
where
    P: Pull,
{
    pub fn new(pull: P) -> Self {
        Self {
            state: PullIterState::Active(pull),
        }
    }

    /// Check if the pull-object has completed normally.
    pub fn is_complete(&self) -> bool {
        matches!(self.state, PullIterState::Complete(_))
    }

    /// Consume the iterator and return the final value if complete.
    ///
    /// Returns `None` if the pull-object hasn't completed yet or failed.
    pub fn into_return(self) -> Option<P::Return> {
        match self.state {
            PullIterState::Complete(ret) => Some(ret),
            _ => None,
        }
    }

    /// Get a reference to the return value if complete.
    pub fn return_value(&self) -> Option<&P::Return> {
        match &self.state {
            PullIterState::Complete(ret) => Some(ret),
            _ => None,
        }
    }
}

impl<P> Iterator for PullIter<P>
where
    P: Pull,
{
    type Item = Result<P::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let PullIterState::Active(pull) = &mut self.state else {
            return None;
        };
        match pull.step() {
            Ok(Step::Yielded(item)) => Some(Ok(item)),
            Ok(Step::Complete(ret)) => {
                self.state = PullIterState::Complete(ret);
                None
            }
            Err(err) => {
                self.state = PullIterState::Failed;
                Some(Err(err))
            }
        }
    }
}

impl<P> std::iter::FusedIterator for PullIter<P> where P: Pull {}
