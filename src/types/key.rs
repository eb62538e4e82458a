//! Hashable view of a `Value`, used as the key of in-memory lookup maps

use super::Value;

/// Hash key wrapper (supports Eq + Hash)
///
/// Mirrors `Value` equality: floats are keyed by their bit pattern with
/// `-0.0` folded into `0.0`, and `NaN` has no key at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashKey<'a> {
    Null,
    Bool(bool),
    Integer(i64),
    Float(u64),
    Text(&'a str),
    Timestamp(i64),
}

impl<'a> HashKey<'a> {
    pub fn from_value(value: &'a Value) -> Option<Self> {
        match value {
            Value::Null => Some(HashKey::Null),
            Value::Bool(b) => Some(HashKey::Bool(*b)),
            Value::Integer(i) => Some(HashKey::Integer(*i)),
            Value::Float(f) if f.is_nan() => None,
            // 0.0 == -0.0
            Value::Float(f) if *f == 0.0 => Some(HashKey::Float(0.0f64.to_bits())),
            Value::Float(f) => Some(HashKey::Float(f.to_bits())),
            Value::Text(s) => Some(HashKey::Text(s.as_str())),
            Value::Timestamp(ts) => Some(HashKey::Timestamp(ts.as_micros())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Timestamp;

    #[test]
    fn test_hash_key_follows_value_equality() {
        assert_eq!(
            HashKey::from_value(&Value::Float(-0.0)),
            HashKey::from_value(&Value::Float(0.0))
        );
        assert_eq!(HashKey::from_value(&Value::Float(f64::NAN)), None);
        assert_ne!(
            HashKey::from_value(&Value::Integer(1)),
            HashKey::from_value(&Value::Float(1.0))
        );
        assert_ne!(
            HashKey::from_value(&Value::Integer(5)),
            HashKey::from_value(&Value::Timestamp(Timestamp::from_micros(5)))
        );
        assert_eq!(HashKey::from_value(&Value::Null), Some(HashKey::Null));
        assert_eq!(HashKey::from_value(&Value::from("a")), Some(HashKey::Text("a")));
    }
}
