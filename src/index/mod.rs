//! Index providers for `IndexJoin`

mod hash_index;

pub use hash_index::{HashIndex, IndexStats};
