/// Join operators
///
/// Three independent, stateless operators; pick by available access path:
/// - `NestedLoopJoin`: arbitrary predicate
/// - `IndexJoin`: equality against an indexed inner relation
/// - `HashJoin`: equality on a hashable attribute of each side
pub mod hash_join;
pub mod index_join;
pub mod nested_loop;
pub mod predicate;

pub use hash_join::HashJoin;
pub use index_join::{IndexJoin, RecordIndex};
pub use nested_loop::NestedLoopJoin;
pub use predicate::{Attribute, Equals, JoinPredicate, KeyExtractor};
