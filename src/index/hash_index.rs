//! Hash Index - in-memory equality index over a borrowed relation
//!
//! Provides `RecordIndex` lookups for `IndexJoin`:
//! - WHERE col = value (point query), O(1) expected
//!
//! The index borrows the relation it covers, so the relation cannot change
//! while the index is alive. Keys borrow from the relation as well; lookups
//! allocate nothing.

use std::borrow::Cow;

use ahash::AHashMap;
use tracing::debug;

use crate::error::Result;
use crate::join::RecordIndex;
use crate::types::{HashKey, Record, Value};

/// Index statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IndexStats {
    /// Records reachable through lookups
    pub indexed_records: usize,
    /// Distinct key values
    pub distinct_keys: usize,
    /// Records skipped because their key has no hash (NaN)
    pub unindexed_records: usize,
}

/// Multimap from attribute value to the records carrying it.
///
/// Records sharing a key are returned in relation order.
#[derive(Debug, Clone)]
pub struct HashIndex<'a> {
    attribute: String,
    entries: AHashMap<HashKey<'a>, Vec<&'a Record>>,
    stats: IndexStats,
}

impl<'a> HashIndex<'a> {
    /// Index `relation` on `attribute`.
    ///
    /// Fails with `MissingAttribute` if any record lacks the attribute.
    pub fn build(relation: &'a [Record], attribute: &str) -> Result<Self> {
        let mut entries: AHashMap<HashKey<'a>, Vec<&'a Record>> = AHashMap::new();
        let mut stats = IndexStats::default();

        for record in relation {
            match HashKey::from_value(record.require(attribute)?) {
                Some(key) => {
                    entries.entry(key).or_default().push(record);
                    stats.indexed_records += 1;
                }
                None => stats.unindexed_records += 1,
            }
        }
        stats.distinct_keys = entries.len();

        debug!(attribute, ?stats, "hash index built");

        Ok(Self {
            attribute: attribute.to_string(),
            entries,
            stats,
        })
    }

    /// Indexed attribute name
    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    pub fn stats(&self) -> IndexStats {
        self.stats
    }

    /// Records with `attribute == key`, in relation order
    pub fn get(&self, key: &Value) -> &[&'a Record] {
        let Some(key) = HashKey::from_value(key) else {
            return &[];
        };
        // shorten the key lifetime to the lookup key's; values keep 'a
        let entries: &AHashMap<HashKey<'_>, Vec<&'a Record>> = &self.entries;
        entries.get(&key).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl<'a> RecordIndex<'a> for HashIndex<'a> {
    fn lookup(&self, key: &Value) -> Result<Cow<'_, [&'a Record]>> {
        Ok(Cow::Borrowed(self.get(key)))
    }

    fn len(&self) -> usize {
        self.stats.indexed_records
    }
}
