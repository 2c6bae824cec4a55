use log::debug;

use crate::{Error, Pull, Push, Result, Sequence, Step, error::verify_arg};

/// Lazy arithmetic sequence. Created by [`range`] and [`range_from`].
///
/// A `Range` is both a pull-object and a push-object; as a push-object it
/// hands out itself, so it is single-pass like any generator. When it stops,
/// it completes with the first value that was not yielded.
#[derive(Debug, Clone, PartialEq)]
pub struct Range {
    next: f64,
    end: f64,
    increment: f64,
}

/// Numbers from `start` towards `end` (exclusive), stepping by `increment`.
///
/// With a positive increment, values are yielded while they are below `end`;
/// with a negative one, while they are above it. `f64::INFINITY` as `end`
/// means no bound in the direction of the increment. Increments may be
/// fractional or irrational; each value is the previous one plus `increment`.
///
/// Fails with [`ErrorKind::ZeroIncrement`](crate::ErrorKind::ZeroIncrement)
/// for a zero increment and with a validation error for NaN arguments.
///
/// ```rust
/// use seqview::prelude::*;
///
/// assert_eq!(to_vec(range(0.0, 7.0, 3.0).unwrap()).unwrap(), vec![0.0, 3.0, 6.0]);
/// assert_eq!(to_vec(range(0.0, -6.0, -3.0).unwrap()).unwrap(), vec![0.0, -3.0]);
/// assert!(range(0.0, 1.0, 0.0).is_err());
/// ```
pub fn range(start: f64, end: f64, increment: f64) -> Result<Range> {
    verify_arg(!start.is_nan(), "start", || "not a number".to_string())?;
    verify_arg(!end.is_nan(), "end", || "not a number".to_string())?;
    verify_arg(!increment.is_nan(), "increment", || "not a number".to_string())?;
    if increment == 0.0 {
        return Err(Error::zero_increment());
    }
    let end = if end == f64::INFINITY && increment < 0.0 {
        f64::NEG_INFINITY
    } else {
        end
    };
    debug!("range: start={start} end={end} increment={increment}");
    Ok(Range {
        next: start,
        end,
        increment,
    })
}

/// Unbounded range counting up by one from `start`.
pub fn range_from(start: f64) -> Result<Range> {
    range(start, f64::INFINITY, 1.0)
}

impl Range {
    /// The value the next call to `step` will yield or complete with.
    pub fn peek(&self) -> f64 {
        self.next
    }

    fn in_bounds(&self, i: f64) -> bool {
        if self.increment > 0.0 {
            i < self.end
        } else {
            i > self.end
        }
    }
}

impl Pull for Range {
    type Item = f64;
    type Return = f64;

    fn step(&mut self) -> Result<Step<f64, f64>> {
        let i = self.next;
        if !self.in_bounds(i) {
            return Ok(Step::Complete(i));
        }
        self.next = i + self.increment;
        Ok(Step::Yielded(i))
    }
}

impl Push for Range {
    type Item = f64;
    type Cursor<'a> = &'a mut Range;

    #[inline]
    fn pull(&mut self) -> Result<&mut Range> {
        Ok(self)
    }
}

impl Sequence for Range {
    type Item = f64;
    type Iterable = Range;
    type Iterator = Range;

    fn into_iterable(self) -> Result<Range> {
        Ok(self)
    }

    fn into_iterator(self) -> Result<Range> {
        Ok(self)
    }
}
