//! # Seqview: Lazy Views over Push and Pull Sequences
//!
//! Treat anything that produces elements one at a time as a sequence, and slice
//! it lazily without pulling more than needed.
//!
//! ## Core Traits
//!
//! - **[`Pull`]**: single-use steppers that yield elements until they complete
//! - **[`Push`]**: factories of pull-objects, multi-pass or single-pass
//! - **[`Sequence`]**: either of the two, convertible with [`iterable`] and [`iterator`]
//!
//! ## Key Features
//!
//! - **Lazy**: views pull one source element per element they yield
//! - **Strict**: bounds are validated before anything is pulled
//! - **Non-restartable sources**: partially consumed pull-objects resume, never restart
//! - **Dynamic values**: [`Value`]s of unknown shape are classified once, at the boundary
//!
//! ## Example
//!
//! ```
//! use seqview::prelude::*;
//!
//! // Every third number from 10, skipping the first two, at most four of them
//! let numbers = range(10.0, f64::INFINITY, 3.0).unwrap();
//! let window = subseq(numbers, 2, 6).unwrap();
//! assert_eq!(to_vec(window).unwrap(), vec![16.0, 19.0, 22.0, 25.0]);
//!
//! // Dynamic lists work the same way
//! let mixed = Value::list([Value::from(7), "bar".into(), true.into()]);
//! assert_eq!(to_vec(skip(mixed, 2).unwrap()).unwrap(), vec![Value::from(true)]);
//! ```
//!
//! ## Common Functions
//!
//! **Views:**
//! - [`skip(seq, count)`] - Drop the first `count` elements
//! - [`limit(seq, max_size)`] - Keep at most `max_size` elements
//! - [`subseq(seq, start, end)`] - Keep the elements at positions `start..end`
//! - [`range(start, end, increment)`] - Arithmetic sequence
//! - [`safety_limit(seq, max_size)`] - Fail instead of truncating
//!
//! **Materialization:**
//! - [`to_array(seq, max_size)`] - Collect into a new `Vec`
//!
//! [`skip(seq, count)`]: skip
//! [`limit(seq, max_size)`]: limit
//! [`subseq(seq, start, end)`]: subseq
//! [`range(start, end, increment)`]: range
//! [`safety_limit(seq, max_size)`]: safety_limit
//! [`to_array(seq, max_size)`]: to_array

mod bound;
mod broadcast;
mod coerce;
mod config;
mod dynamic;
mod error;
pub mod guards;
mod idgen;
mod iter;
mod materialize;
pub mod prelude;
mod pull;
mod push;
mod step;
mod value;
pub mod views;

pub use bound::*;
pub use broadcast::*;
pub use coerce::*;
pub use config::*;
pub use dynamic::*;
pub use error::{Error, ErrorKind, Result};
pub use idgen::*;
pub use iter::*;
pub use materialize::*;
pub use pull::*;
pub use push::*;
pub use step::*;
pub use value::*;
pub use views::*;
