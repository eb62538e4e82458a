/// Index Nested Loop Join implementation
///
/// Algorithm:
/// FOR each outer row (in order):
///     key = extract_key(row)
///     matches = inner_index.lookup(key)   // O(log n) or O(1)
///     OUTPUT (row, match) for each match
///
/// Time complexity: O(n * lookup)
/// Space complexity: O(1) (excluding the result set)

use std::borrow::Cow;

use tracing::{debug, debug_span, trace};

use super::predicate::KeyExtractor;
use crate::config::JoinConfig;
use crate::error::Result;
use crate::types::{MatchPair, Record, Value};

/// Lookup contract for an index over an inner relation borrowed for `'r`.
///
/// The index must be consistent with the relation it covers for the duration
/// of a join. Building and maintaining it is the provider's business.
pub trait RecordIndex<'r> {
    /// Every record whose indexed attribute equals `key`, in a stable order.
    ///
    /// An unknown key yields an empty sequence, not an error. Indexes holding
    /// their hit lists return them borrowed.
    fn lookup(&self, key: &Value) -> Result<Cow<'_, [&'r Record]>>;

    /// Number of indexed records
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Index nested loop join executor
#[derive(Debug, Clone, Default)]
pub struct IndexJoin {
    config: JoinConfig,
}

impl IndexJoin {
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

    /// Execute index join
    ///
    /// # Arguments
    /// * `outer` - Driving relation, iterated in order
    /// * `inner` - Index over the inner relation's join attribute
    /// * `extract_key` - Computes the lookup key of an outer record
    ///
    /// # Returns
    /// Pairs `(outer, inner)` in outer order, then index order. The pairs
    /// borrow the relations, not the index.
    pub fn join<'a, I, K>(
        &self,
        outer: &'a [Record],
        inner: &I,
        extract_key: &K,
    ) -> Result<Vec<MatchPair<'a>>>
    where
        I: RecordIndex<'a> + ?Sized,
        K: KeyExtractor + ?Sized,
    {
        let span = debug_span!("index_join", outer_rows = outer.len(), indexed_rows = inner.len());
        let _guard = span.enter();

        let mut results = Vec::with_capacity(self.config.initial_capacity(outer.len()));
        let mut misses = 0usize;

        for outer_row in outer {
            let key = extract_key.extract(outer_row)?;
            let matches = inner.lookup(&key)?;

            if matches.is_empty() {
                trace!(key = %key, "index miss");
                misses += 1;
                continue;
            }

            results.extend(matches.iter().map(|inner_row| (outer_row, *inner_row)));
            self.config.check_limit(results.len())?;
        }

        debug!(pairs = results.len(), misses, "index join finished");
        Ok(results)
    }
}
