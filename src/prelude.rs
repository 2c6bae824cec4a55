//! Commonly used imports
//!
//! Use `use seqview::prelude::*;` for quick access to the most common types and functions.

// Core types
pub use crate::{Pull, Push, Resume, Sequence, Step};

// Coercion
pub use crate::{iterable, iterator};

// Sources
pub use crate::{elements, empty, from_fn};

// Views
pub use crate::views::{limit, range, range_from, safety_limit, skip, subseq};

// Materialization
pub use crate::{to_array, to_vec};

// Dynamic values
pub use crate::{Object, Value};

// Companions
pub use crate::{Config, EventDistributor, IdGenerator};
