//! Join operator configuration
//!
//! Shared by all three operators. Controls output pre-allocation and an
//! optional cap on the number of emitted pairs.

use crate::error::{JoinError, Result};
use serde::{Deserialize, Serialize};

/// Join configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JoinConfig {
    /// Maximum number of match pairs a single call may produce.
    ///
    /// `None` means unbounded. When the limit would be exceeded the call
    /// fails with `ResourceExhausted` and returns no pairs.
    pub max_result_pairs: Option<usize>,

    /// Expected matches per outer (or probe) record, used to pre-size the
    /// output vector
    pub output_capacity_hint: usize,
}

impl Default for JoinConfig {
    fn default() -> Self {
        Self {
            max_result_pairs: None,
            output_capacity_hint: 1,
        }
    }
}

impl JoinConfig {
    /// No result limit (default)
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Fail any call producing more than `limit` pairs
    pub fn bounded(limit: usize) -> Self {
        Self {
            max_result_pairs: Some(limit),
            ..Default::default()
        }
    }

    pub fn with_max_result_pairs(mut self, limit: Option<usize>) -> Self {
        self.max_result_pairs = limit;
        self
    }

    pub fn with_output_capacity_hint(mut self, per_record: usize) -> Self {
        self.output_capacity_hint = per_record;
        self
    }

    /// Parse a configuration from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: JoinConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_result_pairs == Some(0) {
            return Err(JoinError::InvalidConfig(
                "max_result_pairs must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Initial output capacity for `driving_rows` outer/probe records.
    ///
    /// Never exceeds the result limit.
    pub(crate) fn initial_capacity(&self, driving_rows: usize) -> usize {
        let estimate = driving_rows.saturating_mul(self.output_capacity_hint);
        match self.max_result_pairs {
            Some(limit) => estimate.min(limit),
            None => estimate,
        }
    }

    /// Fails once `emitted` pairs exceed the configured limit
    #[inline]
    pub(crate) fn check_limit(&self, emitted: usize) -> Result<()> {
        match self.max_result_pairs {
            Some(limit) if emitted > limit => Err(JoinError::result_limit(limit)),
            _ => Ok(()),
        }
    }
}
