//! Error types for joinkit operators

use thiserror::Error;

pub type Result<T> = std::result::Result<T, JoinError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum JoinError {
    /// A record lacks an attribute required by a key or predicate
    #[error("Missing attribute: {0}")]
    MissingAttribute(String),

    /// Raised by caller-supplied predicates and key extractors
    #[error("Predicate error: {0}")]
    Predicate(String),

    /// Raised by index providers
    #[error("Index lookup error: {0}")]
    IndexLookup(String),

    #[error("Resource exhausted: {0}")]
    ResourceExhausted(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

impl JoinError {
    pub(crate) fn missing_attribute(name: &str) -> Self {
        JoinError::MissingAttribute(name.to_string())
    }

    pub(crate) fn result_limit(limit: usize) -> Self {
        JoinError::ResourceExhausted(format!("join result exceeds {} pairs", limit))
    }
}

impl From<serde_json::Error> for JoinError {
    fn from(err: serde_json::Error) -> Self {
        JoinError::InvalidConfig(err.to_string())
    }
}
