//! Count arguments for views and materialization.
//!
//! Every count accepted by [`skip`](crate::skip), [`limit`](crate::limit),
//! [`subseq`](crate::subseq), [`safety_limit`](crate::safety_limit) and
//! [`to_array`](crate::to_array) goes through [`IntoBound`], which accepts
//! Rust integers, `f64` (with `f64::INFINITY` as the unbounded sentinel) and
//! [`Bound`] itself. Validation happens before any element is pulled.

use std::fmt;

use crate::{Result, error::verify_arg};

/// Largest integer that an `f64` represents exactly together with all smaller
/// integers (2^53 - 1).
pub const MAX_SAFE_INTEGER: u64 = (1 << 53) - 1;

/// A validated count: a non-negative safe integer or no bound at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Bound {
    Finite(u64),
    Unbounded,
}

impl Bound {
    #[inline]
    pub fn is_unbounded(self) -> bool {
        matches!(self, Bound::Unbounded)
    }

    #[inline]
    pub fn finite(self) -> Option<u64> {
        match self {
            Bound::Finite(n) => Some(n),
            Bound::Unbounded => None,
        }
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bound::Finite(n) => write!(f, "{n}"),
            Bound::Unbounded => f.write_str("unbounded"),
        }
    }
}

/// Conversion of a count argument into a validated [`Bound`].
///
/// `name` identifies the argument in the validation error.
pub trait IntoBound {
    fn into_bound(self, name: &str) -> Result<Bound>;
}

impl IntoBound for Bound {
    fn into_bound(self, name: &str) -> Result<Bound> {
        if let Bound::Finite(n) = self {
            check_safe(n, name)?;
        }
        Ok(self)
    }
}

impl IntoBound for f64 {
    fn into_bound(self, name: &str) -> Result<Bound> {
        verify_arg(!self.is_nan(), name, || "not a number".to_string())?;
        if self == f64::INFINITY {
            return Ok(Bound::Unbounded);
        }
        verify_arg(self >= 0.0, name, || format!("must not be negative: {self}"))?;
        verify_arg(self.fract() == 0.0, name, || format!("must be an integer: {self}"))?;
        verify_arg(self <= MAX_SAFE_INTEGER as f64, name, || {
            format!("too large to be exact: {self}")
        })?;
        Ok(Bound::Finite(self as u64))
    }
}

fn check_safe(n: u64, name: &str) -> Result<()> {
    verify_arg(n <= MAX_SAFE_INTEGER, name, || format!("too large to be exact: {n}"))
}

macro_rules! signed_bound {
    ($($t:ty),*) => {$(
        impl IntoBound for $t {
            fn into_bound(self, name: &str) -> Result<Bound> {
                verify_arg(self >= 0, name, || format!("must not be negative: {self}"))?;
                let n = self as u64;
                check_safe(n, name)?;
                Ok(Bound::Finite(n))
            }
        }
    )*};
}

macro_rules! unsigned_bound {
    ($($t:ty),*) => {$(
        impl IntoBound for $t {
            fn into_bound(self, name: &str) -> Result<Bound> {
                let n = self as u64;
                check_safe(n, name)?;
                Ok(Bound::Finite(n))
            }
        }
    )*};
}

signed_bound!(i32, i64, isize);
unsigned_bound!(u32, u64, usize);
