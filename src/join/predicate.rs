//! Pluggable join conditions
//!
//! `JoinPredicate` decides whether two records match (nested-loop join);
//! `KeyExtractor` computes the lookup key of a record (index join). Both are
//! implemented for plain closures, so callers rarely need a named type.

use std::borrow::Cow;

use crate::error::Result;
use crate::types::{Record, Value};

/// Boolean condition over a (left, right) record pair.
///
/// Implementations must be pure: the result may depend only on the two
/// records, never on call order.
pub trait JoinPredicate {
    fn matches(&self, left: &Record, right: &Record) -> Result<bool>;
}

impl<F> JoinPredicate for F
where
    F: Fn(&Record, &Record) -> Result<bool>,
{
    fn matches(&self, left: &Record, right: &Record) -> Result<bool> {
        self(left, right)
    }
}

/// Computes the join key of a record
pub trait KeyExtractor {
    fn extract<'r>(&self, record: &'r Record) -> Result<Cow<'r, Value>>;
}

impl<F> KeyExtractor for F
where
    F: Fn(&Record) -> Result<Value>,
{
    fn extract<'r>(&self, record: &'r Record) -> Result<Cow<'r, Value>> {
        self(record).map(Cow::Owned)
    }
}

/// Key extractor reading a single named attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute(String);

impl Attribute {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl KeyExtractor for Attribute {
    fn extract<'r>(&self, record: &'r Record) -> Result<Cow<'r, Value>> {
        record.require(&self.0).map(Cow::Borrowed)
    }
}

/// Equality predicate `left[left_attr] == right[right_attr]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Equals {
    left: String,
    right: String,
}

impl Equals {
    pub fn new(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self {
            left: left.into(),
            right: right.into(),
        }
    }

    /// Natural join condition on one attribute name shared by both sides
    pub fn on(attribute: impl Into<String>) -> Self {
        let attribute = attribute.into();
        Self::new(attribute.clone(), attribute)
    }
}

impl JoinPredicate for Equals {
    fn matches(&self, left: &Record, right: &Record) -> Result<bool> {
        Ok(left.require(&self.left)? == right.require(&self.right)?)
    }
}
