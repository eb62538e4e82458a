//! Timestamp attribute values

use serde::{Deserialize, Serialize};
use std::fmt;

/// Point in time as microseconds since the Unix epoch.
///
/// Totally ordered and hashable, so timestamps are valid hash join keys.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct Timestamp {
    micros: i64,
}

impl Timestamp {
    pub fn from_micros(micros: i64) -> Self {
        Self { micros }
    }

    pub fn from_millis(millis: i64) -> Self {
        Self::from_micros(millis.saturating_mul(1_000))
    }

    pub fn from_secs(secs: i64) -> Self {
        Self::from_micros(secs.saturating_mul(1_000_000))
    }

    pub fn as_micros(&self) -> i64 {
        self.micros
    }

    pub fn as_millis(&self) -> i64 {
        self.micros / 1_000
    }

    pub fn as_secs(&self) -> i64 {
        self.micros / 1_000_000
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}us", self.micros)
    }
}
