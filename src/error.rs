use thiserror::Error;

use crate::Bound;

/// Error returned by every fallible operation in this crate.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    pub fn validation(name: impl Into<String>, message: impl Into<String>) -> Error {
        ErrorKind::Validation {
            name: name.into(),
            message: message.into(),
        }
        .into()
    }

    pub fn range_bounds(start: Bound, end: Bound) -> Error {
        ErrorKind::RangeBounds { start, end }.into()
    }

    pub fn zero_increment() -> Error {
        ErrorKind::ZeroIncrement.into()
    }

    pub fn not_sequence(found: impl Into<String>) -> Error {
        ErrorKind::NotSequence {
            found: found.into(),
        }
        .into()
    }

    pub fn sequence_too_long(length: u64) -> Error {
        ErrorKind::SequenceTooLong { length }.into()
    }

    pub fn bad_step_result(found: impl Into<String>) -> Error {
        ErrorKind::BadStepResult {
            found: found.into(),
        }
        .into()
    }

    pub fn is_validation(&self) -> bool {
        matches!(self.kind(), ErrorKind::Validation { .. })
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(Box::new(kind))
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("invalid argument {name}: {message}")]
    Validation { name: String, message: String },

    #[error("subsequence end {end} is before its start {start}")]
    RangeBounds { start: Bound, end: Bound },

    #[error("zero increment not allowed in range")]
    ZeroIncrement,

    #[error("not a sequence: {found}")]
    NotSequence { found: String },

    #[error("excessive sequence length: {length}")]
    SequenceTooLong { length: u64 },

    #[error("step result is not an object: {found}")]
    BadStepResult { found: String },
}

/// Fails with a validation error naming `name` unless `predicate` holds.
#[inline]
pub(crate) fn verify_arg(
    predicate: bool,
    name: &str,
    message: impl FnOnce() -> String,
) -> Result<()> {
    if predicate {
        Ok(())
    } else {
        Err(invalid_arg(name, message()))
    }
}

#[cold]
fn invalid_arg(name: &str, message: String) -> Error {
    Error::validation(name, message)
}
