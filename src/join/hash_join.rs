/// Hash Join implementation
///
/// Algorithm:
/// 1. Build phase: map build key -> build row (left relation)
/// 2. Probe phase: scan the right relation and probe the map
///
/// The build map is one-to-one: when several left rows share a key, the
/// last one in left order wins and the earlier ones never match.
///
/// Time complexity: O(n + m)
/// Space complexity: O(n)

use ahash::AHashMap;
use tracing::{debug, debug_span, trace};

use crate::config::JoinConfig;
use crate::error::Result;
use crate::types::{HashKey, MatchPair, Record};

/// Equi-join executor with an in-memory build map
#[derive(Debug, Clone, Default)]
pub struct HashJoin {
    config: JoinConfig,
}

impl HashJoin {
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

    /// Execute hash join
    ///
    /// # Arguments
    /// * `build` - Build-side relation, keyed by `build_key`
    /// * `probe` - Probe-side relation, keyed by `probe_key`
    ///
    /// # Returns
    /// Pairs `(build, probe)` in probe order, at most one per probe row
    pub fn join<'a>(
        &self,
        build: &'a [Record],
        probe: &'a [Record],
        build_key: &str,
        probe_key: &str,
    ) -> Result<Vec<MatchPair<'a>>> {
        let span = debug_span!(
            "hash_join",
            build_rows = build.len(),
            probe_rows = probe.len(),
            build_key,
            probe_key
        );
        let _guard = span.enter();

        if build.is_empty() || probe.is_empty() {
            return Ok(Vec::new());
        }

        let table = Self::build_table(build, build_key)?;

        // at most one pair per probe row
        let mut results = Vec::with_capacity(self.config.initial_capacity(probe.len()).min(probe.len()));

        for probe_row in probe {
            let value = probe_row.require(probe_key)?;
            let Some(key) = HashKey::from_value(value) else {
                trace!(value = %value, "unhashable probe key");
                continue;
            };

            if let Some(build_row) = table.get(&key) {
                results.push((*build_row, probe_row));
                self.config.check_limit(results.len())?;
            }
        }

        debug!(
            pairs = results.len(),
            distinct_keys = table.len(),
            "hash join finished"
        );
        Ok(results)
    }

    /// Build phase: later rows overwrite earlier rows with an equal key
    fn build_table<'a>(rows: &'a [Record], key_col: &str) -> Result<AHashMap<HashKey<'a>, &'a Record>> {
        let mut table = AHashMap::with_capacity(rows.len());

        for row in rows {
            let value = row.require(key_col)?;
            match HashKey::from_value(value) {
                Some(key) => {
                    table.insert(key, row);
                }
                None => trace!(value = %value, "unhashable build key"),
            }
        }

        Ok(table)
    }
}
