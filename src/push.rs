//! The push protocol.
//!
//! A [`Push`] is a factory of pull-objects. In-memory collections are
//! multi-pass: every call to [`Push::pull`] starts a fresh cursor at the first
//! element. [`Resume`] is the single-pass case: it owns one pull-object and
//! hands out that same pull-object on every call, so a second pass continues
//! where the first one stopped.

use std::{iter::Cloned, slice};

use either::Either;

use crate::{Pull, Result, pull::Elements};

/// Factory of pull-objects.
pub trait Push {
    type Item;

    /// The pull-object handed out by [`Push::pull`].
    type Cursor<'a>: Pull<Item = Self::Item>
    where
        Self: 'a;

    /// Produce a pull-object over this sequence.
    fn pull(&mut self) -> Result<Self::Cursor<'_>>;
}

impl<T: Clone> Push for Vec<T> {
    type Item = T;
    type Cursor<'a>
        = Elements<Cloned<slice::Iter<'a, T>>>
    where
        Self: 'a;

    fn pull(&mut self) -> Result<Self::Cursor<'_>> {
        Ok(crate::elements(self.iter().cloned()))
    }
}

impl<'s, T: Clone> Push for &'s [T] {
    type Item = T;
    type Cursor<'a>
        = Elements<Cloned<slice::Iter<'s, T>>>
    where
        Self: 'a;

    fn pull(&mut self) -> Result<Self::Cursor<'_>> {
        let items: &'s [T] = *self;
        Ok(crate::elements(items.iter().cloned()))
    }
}

impl<L, R> Push for Either<L, R>
where
    L: Push,
    R: Push<Item = L::Item>,
{
    type Item = L::Item;
    type Cursor<'a>
        = Either<L::Cursor<'a>, R::Cursor<'a>>
    where
        Self: 'a;

    fn pull(&mut self) -> Result<Self::Cursor<'_>> {
        match self {
            Either::Left(l) => Ok(Either::Left(l.pull()?)),
            Either::Right(r) => Ok(Either::Right(r.pull()?)),
        }
    }
}

/// Single-pass push adapter over an in-progress pull-object.
///
/// Every call to [`Push::pull`] returns the same wrapped pull-object, so
/// iterating twice resumes rather than restarts, and iterating after
/// exhaustion yields nothing. The adapter owns the cursor exclusively; the
/// wrapped pull-object must not be driven through any other path while the
/// adapter is in use.
///
/// Cloning a `Resume` clones the wrapped pull-object. For a cursor that owns
/// its position, such as [`Elements`], the clone is an independent fork: both
/// copies yield the remaining elements. Cursors over shared state, such as a
/// dynamic iterator object, keep advancing together.
///
/// ```rust
/// use seqview::prelude::*;
///
/// let mut rest = Resume::new(elements(vec![1, 2, 3]));
/// assert_eq!(rest.pull().unwrap().step().unwrap(), Step::Yielded(1));
/// assert_eq!(to_vec(rest.by_ref_push()).unwrap(), vec![2, 3]);
/// assert_eq!(to_vec(rest).unwrap(), Vec::<i32>::new());
/// ```
#[derive(Debug, Clone)]
pub struct Resume<P> {
    inner: P,
}

impl<P: Pull> Resume<P> {
    pub fn new(inner: P) -> Self {
        Resume { inner }
    }

    pub fn into_inner(self) -> P {
        self.inner
    }

    /// Borrow as a single-pass sequence over the same cursor.
    pub fn by_ref_push(&mut self) -> Resume<&mut P> {
        Resume::new(&mut self.inner)
    }
}

impl<P: Pull> Push for Resume<P> {
    type Item = P::Item;
    type Cursor<'a>
        = &'a mut P
    where
        Self: 'a;

    #[inline]
    fn pull(&mut self) -> Result<&mut P> {
        Ok(&mut self.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Step, elements};

    #[test]
    fn test_vec_is_multi_pass() {
        let mut v = vec!["a", "b"];
        for _ in 0..2 {
            let mut cursor = v.pull().unwrap();
            assert_eq!(cursor.step().unwrap(), Step::Yielded("a"));
            assert_eq!(cursor.step().unwrap(), Step::Yielded("b"));
            assert!(cursor.step().unwrap().is_complete());
        }
    }

    #[test]
    fn test_slice_is_multi_pass() {
        let backing = [1, 2, 3];
        let mut s: &[i32] = &backing;
        assert_eq!(s.pull().unwrap().step().unwrap(), Step::Yielded(1));
        assert_eq!(s.pull().unwrap().step().unwrap(), Step::Yielded(1));
    }

    #[test]
    fn test_resume_continues_where_it_stopped() {
        let mut resume = Resume::new(elements(vec![1, 2, 3]));
        assert_eq!(resume.pull().unwrap().step().unwrap(), Step::Yielded(1));
        assert_eq!(resume.pull().unwrap().step().unwrap(), Step::Yielded(2));
        assert_eq!(resume.pull().unwrap().step().unwrap(), Step::Yielded(3));
        assert!(resume.pull().unwrap().step().unwrap().is_complete());
        assert!(resume.pull().unwrap().step().unwrap().is_complete());
    }

    #[test]
    fn test_resume_clone_forks_an_owned_cursor() {
        let mut resume = Resume::new(elements(vec![1, 2, 3]));
        assert_eq!(resume.pull().unwrap().step().unwrap(), Step::Yielded(1));
        let fork = resume.clone();
        assert_eq!(crate::to_vec(fork).unwrap(), vec![2, 3]);
        assert_eq!(crate::to_vec(resume).unwrap(), vec![2, 3]);
    }

    #[test]
    fn test_either_push() {
        let mut left: Either<Vec<i32>, Resume<crate::Empty<i32>>> = Either::Left(vec![4]);
        assert_eq!(left.pull().unwrap().step().unwrap(), Step::Yielded(4));
        assert_eq!(left.pull().unwrap().step().unwrap(), Step::Yielded(4));

        let mut right: Either<Vec<i32>, Resume<crate::Empty<i32>>> =
            Either::Right(Resume::new(crate::empty()));
        assert!(right.pull().unwrap().step().unwrap().is_complete());
    }
}
