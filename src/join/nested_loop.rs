/// Nested Loop Join implementation
///
/// Algorithm:
/// FOR each left row (in order):
///     FOR each right row (in order):
///         IF predicate(left, right) THEN OUTPUT (left, right)
///
/// Time complexity: O(n * m) predicate evaluations
/// Space complexity: O(1) (excluding the result set)

use tracing::{debug, debug_span};

use super::predicate::JoinPredicate;
use crate::config::JoinConfig;
use crate::error::Result;
use crate::types::{MatchPair, Record};

/// Predicate join over two relations.
///
/// Fallback strategy when no index or hashable key exists, or when the
/// condition is not an equality.
#[derive(Debug, Clone, Default)]
pub struct NestedLoopJoin {
    config: JoinConfig,
}

impl NestedLoopJoin {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: JoinConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &JoinConfig {
        &self.config
    }

    /// Execute the join.
    ///
    /// Output is row-major: all matches of `left[0]` (in right order) precede
    /// those of `left[1]`. The first predicate error aborts the join and is
    /// returned unchanged.
    pub fn join<'a, P>(
        &self,
        left: &'a [Record],
        right: &'a [Record],
        predicate: &P,
    ) -> Result<Vec<MatchPair<'a>>>
    where
        P: JoinPredicate + ?Sized,
    {
        let span = debug_span!("nested_loop_join", left_rows = left.len(), right_rows = right.len());
        let _guard = span.enter();

        if left.is_empty() || right.is_empty() {
            return Ok(Vec::new());
        }

        let mut results = Vec::with_capacity(self.config.initial_capacity(left.len()));

        for l in left {
            for r in right {
                if predicate.matches(l, r)? {
                    results.push((l, r));
                    self.config.check_limit(results.len())?;
                }
            }
        }

        debug!(pairs = results.len(), "nested loop join finished");
        Ok(results)
    }
}
