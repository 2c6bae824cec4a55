//! Lazy views over sequences.
//!
//! Each view validates its arguments before touching the source and returns a
//! push-object. None of them reorders elements or pulls more than it needs.

mod limit;
mod range;
mod skip;
mod subseq;

pub use limit::{Limit, LimitView, SafetyLimit, SafetyLimitView, limit, safety_limit};
pub use range::{Range, range, range_from};
pub use skip::{Skip, skip};
pub use subseq::{Subseq, subseq};
