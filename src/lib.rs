//! joinkit: in-memory relational join operators
//!
//! Three classical join strategies over borrowed relations (`&[Record]`):
//!
//! - [`NestedLoopJoin`]: arbitrary predicate, O(|R|·|S|)
//! - [`IndexJoin`]: equality against a caller-supplied [`RecordIndex`]
//! - [`HashJoin`]: equi-join through a transient build map, O(|R| + |S|)
//!
//! Every operator runs to completion and returns the full result as
//! `(left, right)` pairs borrowed from the inputs. The first error aborts
//! the call; no partial result is returned.
//!
//! ```
//! use joinkit::{record, HashJoin};
//!
//! let posts = vec![record! { "id" => 1, "title" => "hello" }];
//! let comments = vec![
//!     record! { "id" => 10, "post_id" => 1 },
//!     record! { "id" => 11, "post_id" => 2 },
//! ];
//!
//! let pairs = HashJoin::new().join(&posts, &comments, "id", "post_id")?;
//! assert_eq!(pairs, vec![(&posts[0], &comments[0])]);
//! # Ok::<(), joinkit::JoinError>(())
//! ```

pub mod config;
pub mod index;
pub mod join;
pub mod types;

mod error;

pub use config::JoinConfig;
pub use error::{JoinError, Result};
pub use index::{HashIndex, IndexStats};
pub use join::{
    Attribute, Equals, HashJoin, IndexJoin, JoinPredicate, KeyExtractor, NestedLoopJoin,
    RecordIndex,
};
pub use types::{MatchPair, Record, Timestamp, Value};
