//! Per-prefix monotonic identifiers.

use std::{
    collections::HashMap,
    fmt,
    sync::{Mutex, OnceLock},
};

/// An identifier produced by [`IdGenerator::id`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Id {
    /// Counter value for the empty prefix.
    Number(u64),
    /// `{prefix}{separator}{counter}` for a non-empty prefix.
    Text(String),
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Id::Number(n) => write!(f, "{n}"),
            Id::Text(s) => f.write_str(s),
        }
    }
}

/// Generator of identifiers, counting a separate series per prefix.
///
/// Each series starts at 0 and increases by one per call, shared across every
/// caller of the same generator.
///
/// ```rust
/// use seqview::{Id, IdGenerator};
///
/// let ids = IdGenerator::new();
/// assert_eq!(ids.id("", "-"), Id::Number(0));
/// assert_eq!(ids.id("job", "-"), Id::Text("job-0".into()));
/// assert_eq!(ids.id("", "-"), Id::Number(1));
/// assert_eq!(ids.id("job", "/").to_string(), "job/1");
/// ```
#[derive(Debug, Default)]
pub struct IdGenerator {
    counters: Mutex<HashMap<String, u64>>,
}

static GLOBAL: OnceLock<IdGenerator> = OnceLock::new();

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide generator.
    pub fn global() -> &'static IdGenerator {
        GLOBAL.get_or_init(IdGenerator::new)
    }

    /// Next identifier in the series for `prefix`.
    pub fn id(&self, prefix: &str, separator: &str) -> Id {
        let n = {
            // A panic while holding the lock cannot leave a counter half-updated.
            let mut counters = self
                .counters
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            let counter = counters.entry(prefix.to_string()).or_insert(0);
            let n = *counter;
            *counter += 1;
            n
        };
        if prefix.is_empty() {
            Id::Number(n)
        } else {
            Id::Text(format!("{prefix}{separator}{n}"))
        }
    }
}
