//! A randomized queue: a bag of items whose removals, samples and traversal
//! order are all uniformly random.

pub mod cmd;
pub mod permutation;
pub mod queue;
pub mod stats;

pub use queue::{QueueError, RandomizedQueue};
