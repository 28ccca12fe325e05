//! Arrangement search.
//!
//! Explores the space of attacker orderings to find one that wins a
//! majority of positional battles against the defender's fixed order.

pub mod arrangement;
pub mod permutations;

pub use arrangement::{find_arrangement, majority_threshold, SearchError, SearchResult};
pub use permutations::IndexPermutations;
