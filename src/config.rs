//! Runtime configuration.
//!
//! Environment variables:
//! - `SEQVIEW_SAFETY_LIMIT`: default bound used by [`Config::guard`]
//!   (default: 1000000)

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{Error, Result, SafetyLimitView, Sequence, safety_limit};

/// Bound applied by [`Config::guard`] unless configured otherwise.
pub const DEFAULT_SAFETY_LIMIT: u64 = 1_000_000;

/// Environment variable overriding [`Config::safety_limit`].
pub const SAFETY_LIMIT_ENV: &str = "SEQVIEW_SAFETY_LIMIT";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Number of elements [`Config::guard`] lets through before failing.
    pub safety_limit: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            safety_limit: DEFAULT_SAFETY_LIMIT,
        }
    }
}

impl Config {
    /// Defaults overridden by the environment.
    ///
    /// A value that is not a non-negative integer is rejected rather than
    /// silently replaced by the default.
    pub fn from_env() -> Result<Self> {
        Self::from_raw(std::env::var(SAFETY_LIMIT_ENV).ok().as_deref())
    }

    fn from_raw(safety_limit: Option<&str>) -> Result<Self> {
        let mut config = Config::default();
        if let Some(raw) = safety_limit {
            config.safety_limit = raw.trim().parse().map_err(|_| {
                Error::validation(SAFETY_LIMIT_ENV, format!("not a non-negative integer: {raw:?}"))
            })?;
            debug!("safety limit set to {} from the environment", config.safety_limit);
        }
        Ok(config)
    }

    /// [`safety_limit`] with the configured bound.
    ///
    /// ```rust
    /// use seqview::prelude::*;
    ///
    /// let config = Config { safety_limit: 3 };
    /// assert_eq!(to_vec(config.guard(vec![1, 2]).unwrap()).unwrap(), vec![1, 2]);
    /// assert!(to_vec(config.guard(range_from(0.0).unwrap()).unwrap()).is_err());
    /// ```
    pub fn guard<S: Sequence>(&self, seq: S) -> Result<SafetyLimitView<S>> {
        safety_limit(seq, self.safety_limit)
    }
}
