//! Conversion between the push and pull protocols.
//!
//! [`Sequence`] is the sum of both protocols: anything that can be viewed as
//! a push-object ([`iterable`]) or as a pull-object ([`iterator`]).
//!
//! - Push-objects are their own iterable; [`iterator`] asks them for a fresh
//!   owned cursor.
//! - Pull-objects are their own iterator; [`iterable`] wraps them in
//!   [`Resume`], which keeps handing out the same cursor.
//! - [`Value`](crate::Value) is classified at runtime and fails with
//!   [`ErrorKind::NotSequence`](crate::ErrorKind::NotSequence) when it has
//!   neither shape.

use std::{iter::Cloned, slice, vec};

use either::Either;

use crate::{
    Pull, Push, Result, Resume,
    pull::{Elements, Empty, FromFn, elements},
};

/// A value that is a push-object or a pull-object.
pub trait Sequence: Sized {
    type Item;

    /// The push-object view of this sequence.
    type Iterable: Push<Item = Self::Item> + Sequence<Item = Self::Item>;

    /// The owned pull-object view of this sequence.
    type Iterator: Pull<Item = Self::Item>;

    fn into_iterable(self) -> Result<Self::Iterable>;

    fn into_iterator(self) -> Result<Self::Iterator>;
}

/// View `seq` as a push-object.
///
/// Push-objects are returned as-is. Pull-objects are wrapped in a single-pass
/// [`Resume`] adapter: draining it twice yields the remaining elements once,
/// then nothing.
///
/// ```rust
/// use seqview::prelude::*;
///
/// let mut pull = elements(vec![1, 2, 3]);
/// pull.step().unwrap();
/// let mut rest = iterable(pull).unwrap();
/// assert_eq!(to_vec(rest.by_ref_push()).unwrap(), vec![2, 3]);
/// assert!(to_vec(rest).unwrap().is_empty());
/// ```
pub fn iterable<S: Sequence>(seq: S) -> Result<S::Iterable> {
    seq.into_iterable()
}

/// View `seq` as a pull-object.
///
/// Push-objects are asked for a fresh pull-object; pull-objects are returned
/// unchanged.
pub fn iterator<S: Sequence>(seq: S) -> Result<S::Iterator> {
    seq.into_iterator()
}

/// Implement [`Sequence`] for pull-object types.
///
/// The type becomes its own iterator and is wrapped in [`Resume`] when viewed
/// as a push-object.
///
/// ```rust
/// use seqview::prelude::*;
///
/// struct Countdown(u32);
///
/// impl Pull for Countdown {
///     type Item = u32;
///     type Return = ();
///
///     fn step(&mut self) -> seqview::Result<Step<u32, ()>> {
///         if self.0 == 0 {
///             return Ok(Step::Complete(()));
///         }
///         self.0 -= 1;
///         Ok(Step::Yielded(self.0 + 1))
///     }
/// }
///
/// seqview::pull_sequence! { impl[] Countdown; }
///
/// assert_eq!(to_vec(Countdown(3)).unwrap(), vec![3, 2, 1]);
/// ```
#[macro_export]
macro_rules! pull_sequence {
    ($(impl[$($gen:tt)*] $ty:ty;)*) => {$(
        impl<$($gen)*> $crate::Sequence for $ty
        where
            $ty: $crate::Pull,
        {
            type Item = <$ty as $crate::Pull>::Item;
            type Iterable = $crate::Resume<$ty>;
            type Iterator = $ty;

            fn into_iterable(self) -> $crate::Result<Self::Iterable> {
                Ok($crate::Resume::new(self))
            }

            fn into_iterator(self) -> $crate::Result<Self::Iterator> {
                Ok(self)
            }
        }
    )*};
}

crate::pull_sequence! {
    impl[I] Elements<I>;
    impl[F, D] FromFn<F, D>;
    impl[T] Empty<T>;
    impl['a, P: Pull + ?Sized] &'a mut P;
    impl[P: Pull + ?Sized] Box<P>;
}

impl<T: Clone> Sequence for Vec<T> {
    type Item = T;
    type Iterable = Vec<T>;
    type Iterator = Elements<vec::IntoIter<T>>;

    fn into_iterable(self) -> Result<Self::Iterable> {
        Ok(self)
    }

    fn into_iterator(self) -> Result<Self::Iterator> {
        Ok(elements(self))
    }
}

impl<'s, T: Clone> Sequence for &'s [T] {
    type Item = T;
    type Iterable = &'s [T];
    type Iterator = Elements<Cloned<slice::Iter<'s, T>>>;

    fn into_iterable(self) -> Result<Self::Iterable> {
        Ok(self)
    }

    fn into_iterator(self) -> Result<Self::Iterator> {
        Ok(elements(self.iter().cloned()))
    }
}

impl<P: Pull> Sequence for Resume<P> {
    type Item = P::Item;
    type Iterable = Self;
    type Iterator = P;

    fn into_iterable(self) -> Result<Self::Iterable> {
        Ok(self)
    }

    fn into_iterator(self) -> Result<Self::Iterator> {
        Ok(self.into_inner())
    }
}

impl<L, R> Sequence for Either<L, R>
where
    L: Sequence,
    R: Sequence<Item = L::Item>,
{
    type Item = L::Item;
    type Iterable = Either<L::Iterable, R::Iterable>;
    type Iterator = Either<L::Iterator, R::Iterator>;

    fn into_iterable(self) -> Result<Self::Iterable> {
        match self {
            Either::Left(l) => Ok(Either::Left(l.into_iterable()?)),
            Either::Right(r) => Ok(Either::Right(r.into_iterable()?)),
        }
    }

    fn into_iterator(self) -> Result<Self::Iterator> {
        match self {
            Either::Left(l) => Ok(Either::Left(l.into_iterator()?)),
            Either::Right(r) => Ok(Either::Right(r.into_iterator()?)),
        }
    }
}
