//! Randomized binary search tree where each insertion and deletion makes size-weighted random
//! choices so that the tree is shaped as if its keys were inserted in a uniformly random order.

mod display;
mod node;
mod set;
mod tree;

pub use self::display::TreeDisplay;
pub use self::set::{RandomizedSet, RandomizedSetIntoIter, RandomizedSetIter};
