//! The pull protocol.
//!
//! A [`Pull`] is a single-use stepper: each call to [`Pull::step`] either yields
//! the next element or reports that the sequence is exhausted. Pull-objects
//! cannot be restarted; once [`Step::Complete`] has been returned, every further
//! call returns it again.
//!
//! This module also provides the pull adapters for the concrete source kinds
//! that are not collections:
//!
//! - [`elements`] wraps any Rust [`Iterator`],
//! - [`from_fn`] builds a generator from a closure,
//! - [`empty`] never yields.
//!
//! # Examples
//!
//! ```rust
//! use seqview::prelude::*;
//!
//! let mut n = 0;
//! let mut countdown = from_fn(move || {
//!     n += 1;
//!     if n <= 3 { Step::Yielded(n) } else { Step::Complete("liftoff") }
//! });
//! assert_eq!(countdown.step().unwrap(), Step::Yielded(1));
//! let rest: Vec<_> = countdown.by_ref().pulled().map(Result::unwrap).collect();
//! assert_eq!(rest, vec![2, 3]);
//! assert_eq!(countdown.step().unwrap(), Step::Complete("liftoff"));
//! ```

use std::{fmt, iter::Fuse, marker::PhantomData};

use either::Either;

use crate::{Result, Step, iter::PullIter};

/// Core trait for single-use steppers.
pub trait Pull {
    /// Type of the elements produced.
    type Item;
    /// Type of the value reported once the sequence is exhausted.
    type Return;

    /// Pull the next element.
    ///
    /// Errors raised while producing an element are returned here; after an
    /// error the pull-object behaves as exhausted.
    fn step(&mut self) -> Result<Step<Self::Item, Self::Return>>;

    /// Adapt into a std [`Iterator`] that remembers the return value.
    fn pulled(self) -> PullIter<Self>
    where
        Self: Sized,
    {
        PullIter::new(self)
    }

    /// Borrow this pull-object so adapters can drive it without taking ownership.
    fn by_ref(&mut self) -> &mut Self
    where
        Self: Sized,
    {
        self
    }
}

impl<P> Pull for &mut P
where
    P: Pull + ?Sized,
{
    type Item = P::Item;
    type Return = P::Return;

    #[inline]
    fn step(&mut self) -> Result<Step<Self::Item, Self::Return>> {
        (**self).step()
    }
}

impl<P> Pull for Box<P>
where
    P: Pull + ?Sized,
{
    type Item = P::Item;
    type Return = P::Return;

    #[inline]
    fn step(&mut self) -> Result<Step<Self::Item, Self::Return>> {
        (**self).step()
    }
}

impl<L, R> Pull for Either<L, R>
where
    L: Pull,
    R: Pull<Item = L::Item>,
{
    type Item = L::Item;
    type Return = Either<L::Return, R::Return>;

    fn step(&mut self) -> Result<Step<Self::Item, Self::Return>> {
        match self {
            Either::Left(l) => Ok(l.step()?.map_complete(Either::Left)),
            Either::Right(r) => Ok(r.step()?.map_complete(Either::Right)),
        }
    }
}

/// Pull adapter over a Rust iterator. Created by [`elements`].
#[derive(Debug, Clone)]
pub struct Elements<I> {
    iter: Fuse<I>,
}

/// Wrap a Rust iterator as a pull-object.
///
/// The iterator is fused, so the result stays exhausted once it has completed.
pub fn elements<I>(iter: I) -> Elements<I::IntoIter>
where
    I: IntoIterator,
{
    Elements {
        iter: iter.into_iter().fuse(),
    }
}

impl<I> Pull for Elements<I>
where
    I: Iterator,
{
    type Item = I::Item;
    type Return = ();

    #[inline]
    fn step(&mut self) -> Result<Step<Self::Item, ()>> {
        Ok(self.iter.next().into())
    }
}

/// Generator-backed pull-object. Created by [`from_fn`].
pub struct FromFn<F, D> {
    f: F,
    finished: Option<D>,
}

/// Create a pull-object from a closure.
///
/// The closure is called once per step until it returns [`Step::Complete`];
/// after that it is never called again and the same return value is reported
/// on every step.
///
/// ```rust
/// use seqview::prelude::*;
///
/// let mut once = Some(7);
/// let mut stepper = from_fn(move || Step::from(once.take()));
/// assert_eq!(stepper.step().unwrap(), Step::Yielded(7));
/// assert_eq!(stepper.step().unwrap(), Step::Complete(()));
/// ```
pub fn from_fn<Y, D, F>(f: F) -> FromFn<F, D>
where
    F: FnMut() -> Step<Y, D>,
{
    FromFn { f, finished: None }
}

impl<F, D: fmt::Debug> fmt::Debug for FromFn<F, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FromFn")
            .field("finished", &self.finished)
            .finish_non_exhaustive()
    }
}

impl<Y, D, F> Pull for FromFn<F, D>
where
    F: FnMut() -> Step<Y, D>,
    D: Clone,
{
    type Item = Y;
    type Return = D;

    fn step(&mut self) -> Result<Step<Y, D>> {
        if let Some(done) = &self.finished {
            return Ok(Step::Complete(done.clone()));
        }
        let step = (self.f)();
        if let Step::Complete(done) = &step {
            self.finished = Some(done.clone());
        }
        Ok(step)
    }
}

/// A pull-object that never yields. Created by [`empty`].
#[derive(Debug, Clone, Copy)]
pub struct Empty<T>(PhantomData<fn() -> T>);

pub fn empty<T>() -> Empty<T> {
    Empty(PhantomData)
}

impl<T> Pull for Empty<T> {
    type Item = T;
    type Return = ();

    #[inline]
    fn step(&mut self) -> Result<Step<T, ()>> {
        Ok(Step::Complete(()))
    }
}
